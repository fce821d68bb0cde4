use crate::calendar::truncate_name;
use crate::config::Config;
use crate::day::CheckDay;
use crate::locale::Locale;
use crate::models::{
    Habit, HabitPerformance, HabitShare, Overview, StatsResponse, TrendPoint, WeeklyPoint,
};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashMap;

const STREAK_LIMIT_DAYS: i64 = 365;
const WEEK_DAYS: i64 = 7;
const TREND_DAYS: i64 = 30;
const PERFORMANCE_NAME_CHARS: usize = 15;

pub fn build_stats(config: &Config, habits: &[Habit]) -> StatsResponse {
    build_stats_at(config.today(), habits, config.locale)
}

pub fn build_stats_at(today: NaiveDate, habits: &[Habit], locale: Locale) -> StatsResponse {
    let done_per_day = done_counts(habits);
    let done_on = |date: NaiveDate| {
        done_per_day
            .get(&CheckDay::new(date))
            .copied()
            .unwrap_or_default()
    };

    let total_checks: u64 = habits.iter().map(Habit::total_checks).sum();
    let completed_checks: u64 = habits.iter().map(Habit::completed_checks).sum();

    let current_streak = (0..STREAK_LIMIT_DAYS)
        .map(|offset| today - Duration::days(offset))
        .take_while(|date| done_on(*date) > 0)
        .count() as u32;

    let overview = Overview {
        total_habits: habits.len() as u64,
        total_checks,
        completed_checks,
        completion_rate: completion_rate(completed_checks, total_checks),
        current_streak,
    };

    if habits.is_empty() {
        return StatsResponse {
            overview,
            weekly: Vec::new(),
            monthly_trend: Vec::new(),
            performance: Vec::new(),
            distribution: Vec::new(),
        };
    }

    let weekly = trailing_days(today, WEEK_DAYS)
        .map(|date| WeeklyPoint {
            date: CheckDay::new(date),
            weekday: locale.chart_weekday(date.weekday()).to_string(),
            label: date.format("%d.%m").to_string(),
            completed: done_on(date),
        })
        .collect();

    let monthly_trend = trailing_days(today, TREND_DAYS)
        .map(|date| TrendPoint {
            date: CheckDay::new(date),
            day_of_month: date.day(),
            completed: done_on(date),
        })
        .collect();

    let performance = habits
        .iter()
        .map(|habit| {
            let total = habit.total_checks();
            let completed = habit.completed_checks();
            HabitPerformance {
                id: habit.id.clone(),
                name: truncate_name(&habit.name, PERFORMANCE_NAME_CHARS),
                rate: completion_rate(completed, total),
                completed_checks: completed,
                total_checks: total,
            }
        })
        .collect();

    // Shares of the completed total; all zero while nothing is done yet.
    let distribution = habits
        .iter()
        .map(|habit| {
            let completed = habit.completed_checks();
            HabitShare {
                id: habit.id.clone(),
                name: truncate_name(&habit.name, PERFORMANCE_NAME_CHARS),
                completed,
                share: completion_rate(completed, completed_checks),
            }
        })
        .collect();

    StatsResponse {
        overview,
        weekly,
        monthly_trend,
        performance,
        distribution,
    }
}

/// Percentage rounded half up; 0 when nothing was recorded.
pub fn completion_rate(completed: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u128;
    let total = total as u128;
    ((200 * completed + total) / (2 * total)) as u8
}

fn done_counts(habits: &[Habit]) -> HashMap<CheckDay, u64> {
    let mut counts = HashMap::new();
    for check in habits.iter().flat_map(|habit| &habit.checks) {
        if check.is_done {
            *counts.entry(check.day).or_insert(0) += 1;
        }
    }
    counts
}

/// `count` days ending at `today`, oldest first.
fn trailing_days(today: NaiveDate, count: i64) -> impl Iterator<Item = NaiveDate> {
    (0..count).rev().map(move |offset| today - Duration::days(offset))
}
