//! Weekly progress counters and the rewards they unlock.
//!
//! Everything here is a pure function of the plan and the checklist state,
//! recomputed on every read. The plan drives the join, so state entries for
//! ids that are not in the plan never count.

use crate::models::{
    BlockProgress, CompletionState, Day, DayProgress, ProgressResponse, ProgressSummary, Reward,
};

const LONG_RUN_MARKER: &str = "Largo";
const STRENGTH_MARKER: &str = "Fuerza";
const RUN_MARKERS: [&str; 2] = ["Z2", "Intervalos"];

/// A day counts as done once its marks array is as long as its checklist,
/// whatever the individual marks say.
pub fn day_fully_done(day: &Day, state: &CompletionState) -> bool {
    state
        .get(&day.id)
        .is_some_and(|entry| entry.completed.len() == day.checklist.len())
}

pub fn summarize(plan: &[Day], state: &CompletionState) -> ProgressSummary {
    let mut summary = ProgressSummary::default();

    for day in plan {
        let done = day_fully_done(day, state);
        if done {
            summary.days_completed += 1;
            if day.kind.contains(LONG_RUN_MARKER) {
                summary.long_run_done = true;
            }
        }
        if day.kind.contains(STRENGTH_MARKER) {
            summary.strength_days += 1;
        }
        if RUN_MARKERS.into_iter().any(|marker| day.kind.contains(marker)) {
            summary.run_days += 1;
        }
    }

    summary
}

pub fn rewards(summary: &ProgressSummary) -> Vec<Reward> {
    let mut unlocked = Vec::new();

    if summary.days_completed >= 3 {
        unlocked.push(Reward::ThreeDays);
    }
    if summary.days_completed == 7 {
        unlocked.push(Reward::PerfectWeek);
    }
    if summary.long_run_done {
        unlocked.push(Reward::LongRun);
    }
    if summary.strength_days >= 2 && summary.run_days >= 2 {
        unlocked.push(Reward::BalancedWeek);
    }

    unlocked
}

pub fn day_progress(plan: &[Day], state: &CompletionState) -> Vec<DayProgress> {
    plan.iter()
        .map(|day| {
            let done = state.get(&day.id).map_or(0, |entry| {
                (0..day.checklist.len())
                    .filter(|&index| entry.is_checked(index))
                    .count()
            });
            DayProgress {
                id: day.id.clone(),
                done,
                total: day.checklist.len(),
            }
        })
        .collect()
}

pub fn block_progress(days: &[DayProgress]) -> BlockProgress {
    let total: usize = days.iter().map(|day| day.total).sum();
    let done: usize = days.iter().map(|day| day.done).sum();
    let percent = if total == 0 {
        0
    } else {
        (done as f64 / total as f64 * 100.0).round() as u8
    };

    BlockProgress {
        total,
        done,
        percent,
    }
}

pub fn build_progress(plan: &[Day], state: &CompletionState) -> ProgressResponse {
    let summary = summarize(plan, state);
    let days = day_progress(plan, state);

    ProgressResponse {
        rewards: rewards(&summary).into_iter().map(Into::into).collect(),
        blocks: block_progress(&days),
        summary,
        days,
    }
}
