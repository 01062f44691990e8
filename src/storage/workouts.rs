use super::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::Workout;

/// Fixed key holding the JSON array of workouts.
pub const WORKOUTS_KEY: &str = "workouts";

/// Serialize the entire list and overwrite the stored value.
pub fn save<S: KeyValueStore + ?Sized>(store: &mut S, workouts: &[Workout]) -> AppResult<()> {
    let json = serde_json::to_string(workouts)?;
    store.set_item(WORKOUTS_KEY, &json)
}

/// Read the stored list back.
///
/// Returns `Ok(None)` when nothing was ever saved (or after a reset).
pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> AppResult<Option<Vec<Workout>>> {
    let Some(raw) = store.get_item(WORKOUTS_KEY)? else {
        return Ok(None);
    };

    // `JSON.stringify(null)` leaves a literal "null" behind
    if raw.trim() == "null" {
        return Ok(None);
    }

    let workouts = serde_json::from_str::<Vec<Workout>>(&raw)
        .map_err(|e| AppError::Storage(format!("stored '{WORKOUTS_KEY}' is not valid: {e}")))?;

    Ok(Some(workouts))
}

pub fn clear<S: KeyValueStore + ?Sized>(store: &mut S) -> AppResult<()> {
    store.remove_item(WORKOUTS_KEY)
}
