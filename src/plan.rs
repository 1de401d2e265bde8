use crate::errors::DataError;
use crate::models::Day;
use crate::storage::read_document;
use std::collections::HashSet;
use std::path::Path;

/// Decodes a plan document, rejecting duplicate day ids since the id is
/// the only join key into the completion state.
pub fn decode_plan(bytes: &[u8]) -> Result<Vec<Day>, DataError> {
    let plan: Vec<Day> =
        serde_json::from_slice(bytes).map_err(|err| DataError::malformed("training plan", err))?;

    if let Some(id) = first_duplicate_id(&plan) {
        return Err(DataError::DuplicateDayId(id.to_string()));
    }

    Ok(plan)
}

fn first_duplicate_id(plan: &[Day]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(plan.len());
    plan.iter()
        .map(|day| day.id.as_str())
        .find(|id| !seen.insert(*id))
}

pub async fn load_plan(path: &Path) -> Result<Vec<Day>, DataError> {
    let bytes = read_document(path).await?;
    decode_plan(&bytes)
}

pub fn find_day<'a>(plan: &'a [Day], id: &str) -> Option<&'a Day> {
    plan.iter().find(|day| day.id == id)
}
