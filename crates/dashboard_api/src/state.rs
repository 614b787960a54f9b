use std::path::PathBuf;
use std::sync::Arc;

use dashboard_engine::{BalanceCalculator, MonthRangeGenerator};
use models::Settings;

pub type SharedState = Arc<AppState>;

/// Immutable per-process state shared by every handler
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub calculator: BalanceCalculator,
    pub months: MonthRangeGenerator,
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            calculator: BalanceCalculator::new(settings.generation_markers.clone()),
            months: MonthRangeGenerator::new(&settings.month_range),
            static_dir: settings.static_dir.clone(),
        }
    }
}
