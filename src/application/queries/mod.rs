//! Queries

pub mod handlers;
mod storyboard_queries;

pub use storyboard_queries::{AllocateDurations, BuildSceneSeed, PlanStoryboard, SplitScenes};
