//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/ping                  GET   健康检查
//! - /api/storyboard/plan       POST  完整分镜规划（分组 + 时长 + seed）
//! - /api/storyboard/split      POST  仅句子分组
//! - /api/storyboard/durations  POST  仅时长分配
//! - /api/storyboard/seed       POST  仅插图 seed

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/storyboard", storyboard_routes())
}

/// Storyboard 路由
fn storyboard_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/plan", post(handlers::plan_storyboard))
        .route("/split", post(handlers::split_scenes))
        .route("/durations", post(handlers::allocate_durations))
        .route("/seed", post(handlers::build_scene_seed))
}
