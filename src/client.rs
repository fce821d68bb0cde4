use crate::day::CheckDay;
use crate::errors::{ClientError, Invalid};
use crate::models::{
    CheckBody, CheckRecord, Credentials, Envelope, Habit, HabitsValue, LoginValue, NewHabitBody,
    WireHabit,
};
use crate::session::Session;
use chrono::FixedOffset;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

/// Thin client for the remote habit API.
///
/// Every response is decoded as an `{success, value, errors}` envelope; the
/// HTTP status is only logged.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    offset: FixedOffset,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, offset: FixedOffset) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            offset,
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ClientError> {
        let request = self
            .request(Method::POST, "/api/auth", None)
            .json(&Credentials { email, password });
        let value: Option<LoginValue> = self.send(request, "Login failed").await?;
        let value = value.ok_or_else(|| ClientError::Rejected("Login failed".to_string()))?;
        Ok(Session::new(value.access_token, value.id))
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<(), ClientError> {
        let request = self
            .request(Method::POST, "/api/user", None)
            .json(&Credentials { email, password });
        self.send::<serde_json::Value>(request, "Registration failed")
            .await
            .map(drop)
    }

    pub async fn list_habits(&self, session: &Session) -> Result<Vec<Habit>, ClientError> {
        let request = self.request(Method::GET, "/api/user/habits", Some(session));
        let value: Option<HabitsValue> = self.send(request, "Could not load habits").await?;
        let habits = value.map(|value| value.habits).unwrap_or_default();
        Ok(habits.into_iter().map(|habit| self.normalize(habit)).collect())
    }

    pub async fn create_habit(&self, session: &Session, name: &str) -> Result<(), ClientError> {
        let request = self
            .request(Method::POST, "/api/habit", Some(session))
            .json(&NewHabitBody { name });
        self.send::<serde_json::Value>(request, "Could not add the habit")
            .await
            .map(drop)
    }

    pub async fn delete_habit(&self, session: &Session, habit_id: &str) -> Result<(), ClientError> {
        let path = format!("/api/habit/{}", urlencoding::encode(habit_id));
        let request = self.request(Method::DELETE, &path, Some(session));
        self.send::<serde_json::Value>(request, "Could not delete the habit")
            .await
            .map(drop)
    }

    pub async fn add_check(
        &self,
        session: &Session,
        habit_id: &str,
        day: CheckDay,
    ) -> Result<(), ClientError> {
        self.check_call(Method::POST, session, habit_id, day).await
    }

    pub async fn remove_check(
        &self,
        session: &Session,
        habit_id: &str,
        day: CheckDay,
    ) -> Result<(), ClientError> {
        self.check_call(Method::DELETE, session, habit_id, day).await
    }

    async fn check_call(
        &self,
        method: Method,
        session: &Session,
        habit_id: &str,
        day: CheckDay,
    ) -> Result<(), ClientError> {
        let path = format!("/api/habit/{}/check", urlencoding::encode(habit_id));
        let date = day
            .to_wire(&self.offset)
            .ok_or(ClientError::Validation(Invalid::DateOutOfRange))?;
        let body = CheckBody { date };
        let request = self.request(method, &path, Some(session)).json(&body);
        self.send::<serde_json::Value>(request, "Could not update the habit")
            .await
            .map(drop)
    }

    fn request(&self, method: Method, path: &str, session: Option<&Session>) -> RequestBuilder {
        debug!(%method, path, "habit api request");
        let request = self.http.request(method, format!("{}{path}", self.base_url));
        match session {
            Some(session) => request.bearer_auth(&session.access_token),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<Option<T>, ClientError> {
        let response = request.send().await.map_err(|err| {
            warn!("habit api unreachable: {err}");
            ClientError::Network(err)
        })?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let envelope: Envelope<T> = serde_json::from_slice(&bytes).map_err(|err| {
            error!(%status, "habit api sent a malformed body: {err}");
            ClientError::Malformed(err)
        })?;

        if !envelope.success {
            let message = envelope.first_error().unwrap_or(fallback).to_string();
            warn!(%status, "habit api rejected request: {message}");
            return Err(ClientError::Rejected(message));
        }

        Ok(envelope.value)
    }

    fn normalize(&self, habit: WireHabit) -> Habit {
        let checks = habit
            .checks
            .into_iter()
            .filter_map(|check| match CheckDay::parse_wire(&check.date, &self.offset) {
                Some(day) => Some(CheckRecord {
                    day,
                    is_done: check.is_done,
                }),
                None => {
                    warn!(
                        habit = %habit.id,
                        date = %check.date,
                        "dropping check-in with unreadable date"
                    );
                    None
                }
            })
            .collect();

        Habit {
            id: habit.id,
            name: habit.name,
            checks,
        }
    }
}
