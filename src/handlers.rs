use crate::completion;
use crate::errors::AppError;
use crate::models::{CompletionState, Day, ProgressResponse, ThemeResponse, TipResponse, ToggleRequest};
use crate::plan::find_day;
use crate::progress::build_progress;
use crate::state::AppState;
use crate::storage::persist_store;
use crate::theme;
use crate::tips::random_tip;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use chrono::{Datelike, Duration, Local, NaiveDate};
use tracing::info;

/// Upper bound on checklist positions accepted for ids outside the plan.
pub const MAX_TASKS_PER_DAY: usize = 32;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    let checklist = completion::load(&store);
    let progress = build_progress(&state.plan, &checklist);
    let mode = theme::load_theme(&store);
    Html(render_index(
        &state.plan,
        &checklist,
        &progress,
        mode,
        random_tip(),
        &week_label(Local::now().date_naive()),
    ))
}

pub async fn get_plan(State(state): State<AppState>) -> Json<Vec<Day>> {
    Json(state.plan.as_ref().clone())
}

pub async fn get_state(State(state): State<AppState>) -> Json<CompletionState> {
    let store = state.store.lock().await;
    Json(completion::load(&store))
}

pub async fn get_progress(State(state): State<AppState>) -> Json<ProgressResponse> {
    let store = state.store.lock().await;
    let checklist = completion::load(&store);
    Json(build_progress(&state.plan, &checklist))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ProgressResponse>, AppError> {
    let day_id = normalize_day_id(&payload.day_id)?;
    let limit = find_day(&state.plan, day_id).map_or(MAX_TASKS_PER_DAY, |day| day.checklist.len());
    if payload.index >= limit {
        return Err(AppError::bad_request(format!(
            "index {} out of range for day '{day_id}'",
            payload.index
        )));
    }

    let mut store = state.store.lock().await;
    let mut next = store.clone();
    let checklist = completion::toggle(
        completion::load(&next),
        day_id,
        payload.index,
        payload.value,
    );
    completion::save(&mut next, &checklist)?;
    persist_store(&state.data_path, &next).await?;
    *store = next;

    Ok(Json(build_progress(&state.plan, &checklist)))
}

pub async fn reset_day(
    State(state): State<AppState>,
    Path(day_id): Path<String>,
) -> Result<Json<ProgressResponse>, AppError> {
    let day_id = normalize_day_id(&day_id)?;

    let mut store = state.store.lock().await;
    let mut next = store.clone();
    let checklist = completion::clear_day(completion::load(&next), day_id);
    completion::save(&mut next, &checklist)?;
    persist_store(&state.data_path, &next).await?;
    *store = next;

    info!("reset day {day_id}");
    Ok(Json(build_progress(&state.plan, &checklist)))
}

pub async fn reset_week(State(state): State<AppState>) -> Result<Json<ProgressResponse>, AppError> {
    let mut store = state.store.lock().await;
    let mut next = store.clone();
    let checklist = completion::clear_all(&mut next);
    persist_store(&state.data_path, &next).await?;
    *store = next;

    info!("started a new week");
    Ok(Json(build_progress(&state.plan, &checklist)))
}

pub async fn get_tip() -> Json<TipResponse> {
    Json(TipResponse { tip: random_tip() })
}

pub async fn get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let store = state.store.lock().await;
    Json(ThemeResponse {
        mode: theme::load_theme(&store),
    })
}

pub async fn toggle_theme(State(state): State<AppState>) -> Result<Json<ThemeResponse>, AppError> {
    let mut store = state.store.lock().await;
    let mut next = store.clone();
    let mode = theme::toggle_theme(&mut next);
    persist_store(&state.data_path, &next).await?;
    *store = next;
    Ok(Json(ThemeResponse { mode }))
}

/// Day ids are matched trimmed on every write path.
fn normalize_day_id(raw: &str) -> Result<&str, AppError> {
    let day_id = raw.trim();
    if day_id.is_empty() {
        return Err(AppError::bad_request("day_id must not be empty"));
    }
    Ok(day_id)
}

fn week_label(today: NaiveDate) -> String {
    let start = today - Duration::days(today.weekday().num_days_from_monday() as i64);
    let iso = start.iso_week();
    format!("{}-W{:02} · {}", iso.year(), iso.week(), start.format("%d/%m"))
}
