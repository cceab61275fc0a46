//! Storyplan - 故事分镜规划服务
//!
//! 将自由故事文本 + 目标总时长/场景数，确定性地规划为有序分镜列表，
//! 每个分镜带播放时长（0.1 秒粒度）与可复现的插图 seed。
//!
//! 领域层 (domain/):
//! - 三个纯函数核心：句子分组、时长分配、seed 构建
//!
//! 应用层 (application/):
//! - Queries: 规划查询及处理器（规划是只读操作，无 commands）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（渲染、配音、录制等由下游消费方自理）
//!
//! 核心也可作为库直接调用，不经过服务层：
//!
//! ```
//! use storyplan::{build_seed, compute_scene_durations, split_story_into_scenes};
//!
//! let groups = split_story_into_scenes("A cat sat. A dog ran.", 2);
//! let durations = compute_scene_durations(10.0, groups.len());
//! assert_eq!(groups.len(), 2);
//! assert_eq!(durations, vec![5.0, 5.0]);
//! assert_eq!(build_seed(&groups[0], 0), "0-a-cat-sat");
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
pub use domain::{build_seed, compute_scene_durations, split_story_into_scenes, Scene};
