//! Query Handlers

mod storyboard_handlers;

pub use storyboard_handlers::{
    AllocateDurationsHandler, BuildSceneSeedHandler, PlanStoryboardHandler,
    SplitScenesHandler, StoryboardResponse,
};
