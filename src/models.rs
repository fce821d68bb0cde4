use crate::day::CheckDay;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckRecord {
    pub day: CheckDay,
    pub is_done: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub checks: Vec<CheckRecord>,
}

impl Habit {
    pub fn total_checks(&self) -> u64 {
        self.checks.len() as u64
    }

    pub fn completed_checks(&self) -> u64 {
        self.checks.iter().filter(|check| check.is_done).count() as u64
    }

    pub fn is_done_on(&self, day: CheckDay) -> bool {
        self.checks
            .iter()
            .any(|check| check.is_done && check.day == day)
    }
}

// Remote API wire shapes.

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub value: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<ErrorDetail>>,
}

impl<T> Envelope<T> {
    pub fn first_error(&self) -> Option<&str> {
        self.errors
            .as_deref()
            .and_then(|errors| errors.first())
            .map(|detail| detail.message.as_str())
            .filter(|message| !message.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginValue {
    pub access_token: String,
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct HabitsValue {
    #[serde(default)]
    pub habits: Vec<WireHabit>,
}

#[derive(Debug, Deserialize)]
pub struct WireHabit {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "habitCheck", alias = "checks", default, deserialize_with = "null_as_empty")]
    pub checks: Vec<WireCheck>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCheck {
    pub date: String,
    #[serde(default)]
    pub is_done: bool,
}

#[derive(Debug, Serialize)]
pub struct NewHabitBody<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CheckBody {
    pub date: String,
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// Dashboard forms.

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct NewHabitForm {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    pub habit_id: String,
    pub date: String,
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub tab: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub notice: Option<String>,
    pub kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
    pub kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MonthQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

// Derived statistics.

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Overview {
    pub total_habits: u64,
    pub total_checks: u64,
    pub completed_checks: u64,
    pub completion_rate: u8,
    pub current_streak: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeeklyPoint {
    pub date: CheckDay,
    pub weekday: String,
    pub label: String,
    pub completed: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub date: CheckDay,
    pub day_of_month: u32,
    pub completed: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HabitPerformance {
    pub id: String,
    pub name: String,
    pub rate: u8,
    pub completed_checks: u64,
    pub total_checks: u64,
}

/// One habit's slice of all completed check-ins.
#[derive(Debug, Clone, Serialize)]
pub struct HabitShare {
    pub id: String,
    pub name: String,
    pub completed: u64,
    pub share: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub overview: Overview,
    pub weekly: Vec<WeeklyPoint>,
    pub monthly_trend: Vec<TrendPoint>,
    pub performance: Vec<HabitPerformance>,
    pub distribution: Vec<HabitShare>,
}
