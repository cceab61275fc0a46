//! 应用层 - 用例编排
//!
//! 分镜规划全部是只读用例，因此这里只有 queries，没有 commands：
//! - queries: 规划查询及处理器
//! - error: 应用层错误定义

pub mod error;
pub mod queries;

pub use error::ApplicationError;
pub use queries::{
    handlers::{
        AllocateDurationsHandler, BuildSceneSeedHandler, PlanStoryboardHandler,
        SplitScenesHandler, StoryboardResponse,
    },
    AllocateDurations, BuildSceneSeed, PlanStoryboard, SplitScenes,
};
