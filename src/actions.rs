use crate::calendar::{plan_toggle, CheckToggle};
use crate::client::ApiClient;
use crate::day::CheckDay;
use crate::errors::{ClientError, Invalid};
use crate::session::Session;
use crate::store::HabitStore;
use tracing::info;

pub async fn create_habit(
    client: &ApiClient,
    store: &HabitStore,
    session: &Session,
    name: &str,
) -> Result<(), ClientError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Invalid::BlankHabitName.into());
    }

    let result = client.create_habit(session, name).await;
    store.mark_stale(session).await;
    result
}

pub async fn delete_habit(
    client: &ApiClient,
    store: &HabitStore,
    session: &Session,
    habit_id: &str,
) -> Result<(), ClientError> {
    let result = client.delete_habit(session, habit_id).await;
    store.mark_stale(session).await;
    result
}

/// Flips a habit's check-in for `day` against the server-confirmed list.
pub async fn toggle_check(
    client: &ApiClient,
    store: &HabitStore,
    session: &Session,
    habit_id: &str,
    day: CheckDay,
) -> Result<CheckToggle, ClientError> {
    let habits = store.habits(client, session).await?;
    let habit = habits
        .iter()
        .find(|habit| habit.id == habit_id)
        .ok_or(ClientError::Validation(Invalid::UnknownHabit))?;

    let toggle = plan_toggle(habit, day);
    let result = match toggle {
        CheckToggle::Add(day) => client.add_check(session, habit_id, day).await,
        CheckToggle::Remove(day) => client.remove_check(session, habit_id, day).await,
    };
    store.mark_stale(session).await;
    result?;

    info!(habit = %habit_id, %day, ?toggle, "check-in toggled");
    Ok(toggle)
}
