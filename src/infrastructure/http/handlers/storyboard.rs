//! Storyboard Handlers
//!
//! 分镜规划端点：完整规划 + 三个核心操作的独立端点

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::application::{AllocateDurations, BuildSceneSeed, PlanStoryboard, SplitScenes};
use crate::infrastructure::http::dto::{
    clamp_count, AllocateDurationsRequest, ApiResponse, BuildSeedRequest, DurationsResponse,
    PlanStoryboardRequest, SceneGroupsResponse, SeedResponse, SplitScenesRequest,
    StoryboardPlanResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /api/storyboard/plan - 完整分镜规划
pub async fn plan_storyboard(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlanStoryboardRequest>,
) -> Result<Json<ApiResponse<StoryboardPlanResponse>>, ApiError> {
    let query = PlanStoryboard {
        story: request.story,
        num_scenes: request.num_scenes.map(clamp_count),
        total_duration_secs: request.total_duration_secs,
    };

    let response = state.plan_handler.handle(query)?;

    Ok(Json(ApiResponse::success(response.into())))
}

/// POST /api/storyboard/split - 仅做句子分组
pub async fn split_scenes(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SplitScenesRequest>,
) -> Json<ApiResponse<SceneGroupsResponse>> {
    let groups = state.split_handler.handle(SplitScenes {
        story: request.story,
        num_scenes: clamp_count(request.num_scenes),
    });

    Json(ApiResponse::success(SceneGroupsResponse {
        total: groups.len(),
        groups,
    }))
}

/// POST /api/storyboard/durations - 仅做时长分配
pub async fn allocate_durations(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AllocateDurationsRequest>,
) -> Json<ApiResponse<DurationsResponse>> {
    let durations = state.durations_handler.handle(AllocateDurations {
        total_duration_secs: request.total_duration_secs,
        scene_count: clamp_count(request.scene_count),
    });

    Json(ApiResponse::success(DurationsResponse {
        total: durations.len(),
        durations_secs: durations,
    }))
}

/// POST /api/storyboard/seed - 仅构建插图 seed
pub async fn build_scene_seed(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BuildSeedRequest>,
) -> Json<ApiResponse<SeedResponse>> {
    let seed = state.seed_handler.handle(BuildSceneSeed {
        text: request.text,
        index: request.index,
    });

    Json(ApiResponse::success(SeedResponse { seed }))
}
