use crate::errors::{AppError, DataError};
use crate::kv::KvStore;
use crate::models::CompletionState;
use tracing::warn;

pub const STORAGE_KEY: &str = "running_fuerza_checklist_v2";

/// Positions at or past this are never stored.
pub const MAX_MARKS: usize = 1024;

pub fn decode_state(raw: &str) -> Result<CompletionState, DataError> {
    serde_json::from_str(raw).map_err(|err| DataError::malformed("completion state", err))
}

/// Reads the persisted checklist state. Absent or unreadable data is
/// treated as no state.
pub fn load(kv: &KvStore) -> CompletionState {
    let Some(raw) = kv.get(STORAGE_KEY) else {
        return CompletionState::new();
    };
    match decode_state(raw) {
        Ok(state) => state,
        Err(err) => {
            warn!("ignoring stored checklist state: {err}");
            CompletionState::new()
        }
    }
}

pub fn save(kv: &mut KvStore, state: &CompletionState) -> Result<(), AppError> {
    let payload = serde_json::to_string(state).map_err(AppError::internal)?;
    kv.set(STORAGE_KEY, payload);
    Ok(())
}

/// Marks one checklist position. Missing positions before `index` stay
/// unset rather than becoming `false`. Indexes past `MAX_MARKS` leave the
/// state as it was.
pub fn toggle(mut state: CompletionState, day_id: &str, index: usize, value: bool) -> CompletionState {
    if index >= MAX_MARKS {
        warn!("ignoring mark {index} for day {day_id}: past {MAX_MARKS}");
        return state;
    }
    let entry = state.entry(day_id.to_string()).or_default();
    if entry.completed.len() <= index {
        entry.completed.resize(index + 1, None);
    }
    entry.completed[index] = Some(value);
    state
}

pub fn clear_day(mut state: CompletionState, day_id: &str) -> CompletionState {
    state.remove(day_id);
    state
}

pub fn clear_all(kv: &mut KvStore) -> CompletionState {
    kv.remove(STORAGE_KEY);
    CompletionState::new()
}
