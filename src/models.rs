use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PreWorkout {
    #[serde(default)]
    pub comida: String,
    #[serde(default)]
    pub hidratacion: String,
    #[serde(default)]
    pub tiempo: String,
}

/// One day of the training plan. `kind` carries the marker tags
/// ("Z2", "Fuerza", "Largo", ...) and is matched by substring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Day {
    pub id: String,
    pub name: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub checklist: Vec<String>,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub workout: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub pre: PreWorkout,
}

/// Checklist marks for one day. `None` is a position that was never
/// touched, which serializes as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DayCompletion {
    #[serde(default)]
    pub completed: Vec<Option<bool>>,
}

impl DayCompletion {
    pub fn is_checked(&self, index: usize) -> bool {
        matches!(self.completed.get(index), Some(Some(true)))
    }
}

pub type CompletionState = BTreeMap<String, DayCompletion>;

#[derive(Debug, Clone, Copy, Serialize, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    pub days_completed: usize,
    pub long_run_done: bool,
    pub strength_days: usize,
    pub run_days: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reward {
    ThreeDays,
    PerfectWeek,
    LongRun,
    BalancedWeek,
}

impl Reward {
    pub fn id(self) -> &'static str {
        match self {
            Reward::ThreeDays => "three-days",
            Reward::PerfectWeek => "perfect-week",
            Reward::LongRun => "long-run",
            Reward::BalancedWeek => "balanced-week",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Reward::ThreeDays => "🏅 3 días completados",
            Reward::PerfectWeek => "🥇 Semana perfecta",
            Reward::LongRun => "🏆 Rodaje largo completado",
            Reward::BalancedWeek => "🔥 Semana balanceada",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Default, PartialEq, Eq)]
pub struct BlockProgress {
    pub total: usize,
    pub done: usize,
    pub percent: u8,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DayProgress {
    pub id: String,
    pub done: usize,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub day_id: String,
    pub index: usize,
    pub value: bool,
}

#[derive(Debug, Serialize)]
pub struct RewardView {
    pub id: String,
    pub label: String,
}

impl From<Reward> for RewardView {
    fn from(reward: Reward) -> Self {
        Self {
            id: reward.id().to_string(),
            label: reward.label().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub summary: ProgressSummary,
    pub rewards: Vec<RewardView>,
    pub blocks: BlockProgress,
    pub days: Vec<DayProgress>,
}

#[derive(Debug, Serialize)]
pub struct TipResponse {
    pub tip: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub mode: crate::theme::ThemeMode,
}
