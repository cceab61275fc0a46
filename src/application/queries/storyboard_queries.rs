//! Storyboard Queries
//!
//! 规划是纯读操作，全部建模为查询，没有命令

/// 完整分镜规划查询
///
/// `num_scenes` / `total_duration_secs` 为空时取配置默认值
#[derive(Debug, Clone)]
pub struct PlanStoryboard {
    pub story: String,
    pub num_scenes: Option<usize>,
    pub total_duration_secs: Option<f64>,
}

/// 单独的句子分组查询
#[derive(Debug, Clone)]
pub struct SplitScenes {
    pub story: String,
    pub num_scenes: usize,
}

/// 单独的时长分配查询
#[derive(Debug, Clone)]
pub struct AllocateDurations {
    pub total_duration_secs: f64,
    pub scene_count: usize,
}

/// 单独的插图 seed 查询
#[derive(Debug, Clone)]
pub struct BuildSceneSeed {
    pub text: String,
    pub index: usize,
}
