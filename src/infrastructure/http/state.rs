//! Application State
//!
//! 持有全部 Query Handlers 的应用状态

use crate::application::{
    AllocateDurationsHandler, BuildSceneSeedHandler, PlanStoryboardHandler, SplitScenesHandler,
};
use crate::config::PlannerConfig;

/// 应用状态
///
/// 规划核心无任何共享可变状态，handler 都是无锁只读的
pub struct AppState {
    pub plan_handler: PlanStoryboardHandler,
    pub split_handler: SplitScenesHandler,
    pub durations_handler: AllocateDurationsHandler,
    pub seed_handler: BuildSceneSeedHandler,
}

impl AppState {
    pub fn new(planner: PlannerConfig) -> Self {
        Self {
            plan_handler: PlanStoryboardHandler::new(planner),
            split_handler: SplitScenesHandler,
            durations_handler: AllocateDurationsHandler,
            seed_handler: BuildSceneSeedHandler,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}
