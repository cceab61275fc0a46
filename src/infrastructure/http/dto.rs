//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::StoryboardResponse;
use crate::domain::Scene;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Storyboard DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PlanStoryboardRequest {
    pub story: String,
    /// 缺省取配置默认值；负数视为 0（触发验证错误）
    pub num_scenes: Option<i64>,
    pub total_duration_secs: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct SplitScenesRequest {
    pub story: String,
    pub num_scenes: i64,
}

#[derive(Debug, Deserialize)]
pub struct AllocateDurationsRequest {
    pub total_duration_secs: f64,
    pub scene_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct BuildSeedRequest {
    pub text: String,
    pub index: usize,
}

#[derive(Debug, Serialize)]
pub struct StoryboardPlanResponse {
    pub scene_count: usize,
    pub total_duration_secs: f64,
    pub scenes: Vec<Scene>,
}

impl From<StoryboardResponse> for StoryboardPlanResponse {
    fn from(response: StoryboardResponse) -> Self {
        Self {
            scene_count: response.scene_count,
            total_duration_secs: response.total_duration_secs,
            scenes: response.scenes,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SceneGroupsResponse {
    pub total: usize,
    pub groups: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DurationsResponse {
    pub total: usize,
    pub durations_secs: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub seed: String,
}

/// 线上计数字段为 i64，负值收敛到 0，
/// 使核心「count <= 0 -> 空结果」的契约可以从 API 观察到
pub fn clamp_count(count: i64) -> usize {
    count.max(0) as usize
}
