//! Domain Layer - 领域层
//!
//! 分镜规划的纯函数核心：
//! - splitter: 故事文本 -> 场景文本分组
//! - durations: 总时长 -> 各场景时长
//! - seed: 场景文本 -> 插图 seed
//!
//! 三个操作互不依赖、无状态、无 I/O，任意组合调用均可。

mod durations;
mod scene;
mod seed;
mod splitter;

pub use durations::compute_scene_durations;
pub use scene::Scene;
pub use seed::build_seed;
pub use splitter::split_story_into_scenes;
