use crate::day::CheckDay;
use crate::locale::Locale;
use crate::models::Habit;
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

const CALENDAR_LABEL_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckToggle {
    Add(CheckDay),
    Remove(CheckDay),
}

#[derive(Debug, Clone, Serialize)]
pub struct HabitMark {
    pub habit_id: String,
    pub name: String,
    pub label: String,
    pub done: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayCell {
    pub date: CheckDay,
    pub day: u32,
    pub is_today: bool,
    pub habits: Vec<HabitMark>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CalendarCell {
    Blank,
    Day(DayCell),
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub weekdays: Vec<String>,
    pub leading_blanks: u32,
    pub days_in_month: u32,
    pub previous: MonthCursor,
    pub next: MonthCursor,
    pub cells: Vec<CalendarCell>,
}

/// Slots of a Sunday-first month view: `None` for the blanks before day 1.
pub fn month_layout(year: i32, month: u32) -> Option<Vec<Option<NaiveDate>>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let leading = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(first);

    let mut slots = Vec::with_capacity(leading + days as usize);
    slots.extend(std::iter::repeat_n(None, leading));
    slots.extend(first.iter_days().take(days as usize).map(Some));
    Some(slots)
}

pub fn days_in_month(first: NaiveDate) -> u32 {
    match first.checked_add_months(Months::new(1)) {
        Some(next) => (next - first).num_days() as u32,
        // December of the last representable year
        None => 31,
    }
}

pub fn build_month(
    cursor: MonthCursor,
    habits: &[Habit],
    today: NaiveDate,
    locale: Locale,
) -> Option<MonthGrid> {
    let slots = month_layout(cursor.year, cursor.month)?;
    let leading_blanks = slots.iter().take_while(|slot| slot.is_none()).count() as u32;
    let days_in_month = slots.len() as u32 - leading_blanks;

    let cells = slots
        .into_iter()
        .map(|slot| match slot {
            None => CalendarCell::Blank,
            Some(date) => {
                let day = CheckDay::new(date);
                CalendarCell::Day(DayCell {
                    date: day,
                    day: date.day(),
                    is_today: date == today,
                    habits: habits
                        .iter()
                        .map(|habit| HabitMark {
                            habit_id: habit.id.clone(),
                            name: habit.name.clone(),
                            label: truncate_name(&habit.name, CALENDAR_LABEL_CHARS),
                            done: habit.is_done_on(day),
                        })
                        .collect(),
                })
            }
        })
        .collect();

    Some(MonthGrid {
        year: cursor.year,
        month: cursor.month,
        title: format!("{} {}", locale.month_name(cursor.month), cursor.year),
        weekdays: locale.weekdays().iter().map(|name| name.to_string()).collect(),
        leading_blanks,
        days_in_month,
        previous: cursor.previous(),
        next: cursor.next(),
        cells,
    })
}

/// A done check on `day` is removed; anything else gets a new check.
pub fn plan_toggle(habit: &Habit, day: CheckDay) -> CheckToggle {
    if habit.is_done_on(day) {
        CheckToggle::Remove(day)
    } else {
        CheckToggle::Add(day)
    }
}

/// Cuts `name` to `max` characters followed by `...` when it is longer.
pub fn truncate_name(name: &str, max: usize) -> String {
    if name.chars().count() > max {
        let head: String = name.chars().take(max).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CheckRecord;

    fn habit(id: &str, checks: &[(NaiveDate, bool)]) -> Habit {
        Habit {
            id: id.to_string(),
            name: format!("Habit {id}"),
            checks: checks
                .iter()
                .map(|(date, is_done)| CheckRecord {
                    day: CheckDay::new(*date),
                    is_done: *is_done,
                })
                .collect(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn layout_has_blanks_plus_days_for_every_month() {
        for year in [2023, 2024, 2025] {
            for month in 1..=12 {
                let slots = month_layout(year, month).unwrap();
                let blanks = slots.iter().take_while(|s| s.is_none()).count();
                assert!(blanks <= 6);
                let first = date(year, month, 1);
                assert_eq!(slots.len(), blanks + days_in_month(first) as usize);
                assert_eq!(slots[blanks], Some(first));
            }
        }
    }

    #[test]
    fn layout_matches_known_months() {
        // June 2025 starts on a Sunday, February 2024 on a Thursday.
        let june = month_layout(2025, 6).unwrap();
        assert_eq!(june.len(), 30);
        assert_eq!(june[0], Some(date(2025, 6, 1)));

        let february = month_layout(2024, 2).unwrap();
        assert_eq!(february.len(), 4 + 29);
        assert!(february[..4].iter().all(Option::is_none));
        assert_eq!(february.last().copied().flatten(), Some(date(2024, 2, 29)));
    }

    #[test]
    fn invalid_month_has_no_layout() {
        assert!(month_layout(2025, 0).is_none());
        assert!(month_layout(2025, 13).is_none());
        assert!(MonthCursor::new(2025, 13).is_none());
    }

    #[test]
    fn grid_marks_done_days_per_habit() {
        let habits = vec![
            habit("a", &[(date(2025, 3, 2), true), (date(2025, 3, 3), false)]),
            habit("b", &[(date(2025, 3, 3), true)]),
        ];
        let cursor = MonthCursor::new(2025, 3).unwrap();
        let grid = build_month(cursor, &habits, date(2025, 3, 3), Locale::En).unwrap();

        assert_eq!(grid.title, "March 2025");
        assert_eq!(grid.leading_blanks, 6);
        assert_eq!(grid.days_in_month, 31);
        assert_eq!(grid.cells.len(), 37);

        let day = |n: u32| match &grid.cells[grid.leading_blanks as usize + n as usize - 1] {
            CalendarCell::Day(cell) => cell.clone(),
            CalendarCell::Blank => panic!("expected a day"),
        };
        let second = day(2);
        assert!(second.habits[0].done);
        assert!(!second.habits[1].done);
        assert!(!second.is_today);

        let third = day(3);
        assert!(!third.habits[0].done, "not-done check does not count");
        assert!(third.habits[1].done);
        assert!(third.is_today);
    }

    #[test]
    fn cursor_wraps_years() {
        let january = MonthCursor::new(2025, 1).unwrap();
        assert_eq!(january.previous(), MonthCursor { year: 2024, month: 12 });
        let december = MonthCursor::new(2025, 12).unwrap();
        assert_eq!(december.next(), MonthCursor { year: 2026, month: 1 });
    }

    #[test]
    fn toggle_removes_done_check_and_adds_otherwise() {
        let done_day = date(2025, 5, 1);
        let undone_day = date(2025, 5, 2);
        let h = habit("a", &[(done_day, true), (undone_day, false)]);

        assert_eq!(
            plan_toggle(&h, CheckDay::new(done_day)),
            CheckToggle::Remove(CheckDay::new(done_day))
        );
        assert_eq!(
            plan_toggle(&h, CheckDay::new(undone_day)),
            CheckToggle::Add(CheckDay::new(undone_day))
        );
        let empty_day = CheckDay::new(date(2025, 5, 3));
        assert_eq!(plan_toggle(&h, empty_day), CheckToggle::Add(empty_day));
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_name("Morning Meditation Routine", 15), "Morning Meditat...");
        assert_eq!(truncate_name("Short", 15), "Short");
        assert_eq!(truncate_name("Ćwiczenia poranne", 10), "Ćwiczenia ...");
        assert_eq!(truncate_name("exactly ten", 11), "exactly ten");
    }
}
