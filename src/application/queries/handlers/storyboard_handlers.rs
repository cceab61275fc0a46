//! Storyboard Query Handlers
//!
//! PlanStoryboard 按界面调用方的组合方式拼装三个核心操作：
//! 先分组，再按「实际组数」分配时长，逐场景导出 seed。
//! 其余三个 handler 是核心操作的直通封装，永不失败。

use crate::application::error::ApplicationError;
use crate::application::queries::{
    AllocateDurations, BuildSceneSeed, PlanStoryboard, SplitScenes,
};
use crate::config::PlannerConfig;
use crate::domain::{
    build_seed, compute_scene_durations, split_story_into_scenes, Scene,
};

// ============================================================================
// Response DTOs
// ============================================================================

/// 分镜规划结果
#[derive(Debug, Clone)]
pub struct StoryboardResponse {
    pub scenes: Vec<Scene>,
    pub scene_count: usize,
    pub total_duration_secs: f64,
}

// ============================================================================
// Handlers
// ============================================================================

/// PlanStoryboard Handler
pub struct PlanStoryboardHandler {
    planner: PlannerConfig,
}

impl PlanStoryboardHandler {
    pub fn new(planner: PlannerConfig) -> Self {
        Self { planner }
    }

    pub fn handle(&self, query: PlanStoryboard) -> Result<StoryboardResponse, ApplicationError> {
        let num_scenes = query.num_scenes.unwrap_or(self.planner.default_num_scenes);
        let total_secs = query
            .total_duration_secs
            .unwrap_or(self.planner.default_total_duration_secs);

        self.validate(&query.story, num_scenes, total_secs)?;

        let groups = split_story_into_scenes(&query.story, num_scenes);
        // 时长按实际组数分配；欠配时兜底 1 秒
        let durations = compute_scene_durations(total_secs, groups.len());

        let scenes: Vec<Scene> = groups
            .into_iter()
            .enumerate()
            .map(|(idx, text)| {
                let duration = durations.get(idx).copied().unwrap_or(1.0);
                Scene::new(idx, text, duration)
            })
            .collect();

        tracing::debug!(
            scene_count = scenes.len(),
            total_duration_secs = total_secs,
            "Storyboard planned"
        );

        Ok(StoryboardResponse {
            scene_count: scenes.len(),
            scenes,
            total_duration_secs: total_secs,
        })
    }

    fn validate(
        &self,
        story: &str,
        num_scenes: usize,
        total_secs: f64,
    ) -> Result<(), ApplicationError> {
        if num_scenes == 0 || num_scenes > self.planner.max_scenes {
            return Err(ApplicationError::validation(format!(
                "num_scenes must be within 1..={}",
                self.planner.max_scenes
            )));
        }

        if !total_secs.is_finite()
            || total_secs < self.planner.min_total_duration_secs
            || total_secs > self.planner.max_total_duration_secs
        {
            return Err(ApplicationError::validation(format!(
                "total_duration_secs must be within {}..={}",
                self.planner.min_total_duration_secs, self.planner.max_total_duration_secs
            )));
        }

        if story.chars().count() > self.planner.max_story_chars {
            return Err(ApplicationError::validation(format!(
                "story exceeds {} chars",
                self.planner.max_story_chars
            )));
        }

        Ok(())
    }
}

/// SplitScenes Handler
pub struct SplitScenesHandler;

impl SplitScenesHandler {
    pub fn handle(&self, query: SplitScenes) -> Vec<String> {
        split_story_into_scenes(&query.story, query.num_scenes)
    }
}

/// AllocateDurations Handler
pub struct AllocateDurationsHandler;

impl AllocateDurationsHandler {
    pub fn handle(&self, query: AllocateDurations) -> Vec<f64> {
        compute_scene_durations(query.total_duration_secs, query.scene_count)
    }
}

/// BuildSceneSeed Handler
pub struct BuildSceneSeedHandler;

impl BuildSceneSeedHandler {
    pub fn handle(&self, query: BuildSceneSeed) -> String {
        build_seed(&query.text, query.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO_STORY: &str = "In a quiet village, a curious child discovers a hidden door. \
        Beyond it lies a vibrant world of color and music. \
        Friends are found, obstacles are faced, and courage grows. \
        At last, the child returns home, forever changed by the adventure.";

    fn handler() -> PlanStoryboardHandler {
        PlanStoryboardHandler::new(PlannerConfig::default())
    }

    #[test]
    fn test_plan_with_defaults_uses_config_values() {
        let response = handler()
            .handle(PlanStoryboard {
                story: DEMO_STORY.to_string(),
                num_scenes: None,
                total_duration_secs: None,
            })
            .unwrap();

        assert_eq!(response.total_duration_secs, 60.0);
        assert!(!response.scenes.is_empty());
        assert!(response.scene_count <= 6);
    }

    #[test]
    fn test_plan_durations_sum_to_total() {
        let response = handler()
            .handle(PlanStoryboard {
                story: DEMO_STORY.to_string(),
                num_scenes: Some(4),
                total_duration_secs: Some(61.0),
            })
            .unwrap();

        assert_eq!(response.scene_count, 4);
        let sum: f64 = response.scenes.iter().map(|s| s.duration_secs).sum();
        assert!((sum - 61.0).abs() < 0.05);
    }

    #[test]
    fn test_plan_scene_fields_are_consistent() {
        let response = handler()
            .handle(PlanStoryboard {
                story: DEMO_STORY.to_string(),
                num_scenes: Some(4),
                total_duration_secs: Some(60.0),
            })
            .unwrap();

        for (idx, scene) in response.scenes.iter().enumerate() {
            assert_eq!(scene.index, idx);
            assert!(!scene.text.is_empty());
            assert_eq!(scene.seed, build_seed(&scene.text, idx));
            assert!(scene.duration_secs > 0.0);
        }
    }

    #[test]
    fn test_plan_empty_story_yields_empty_scene_list() {
        let response = handler()
            .handle(PlanStoryboard {
                story: "   ".to_string(),
                num_scenes: Some(6),
                total_duration_secs: Some(60.0),
            })
            .unwrap();

        assert_eq!(response.scene_count, 0);
        assert!(response.scenes.is_empty());
    }

    #[test]
    fn test_plan_rejects_zero_scenes() {
        let err = handler().handle(PlanStoryboard {
            story: DEMO_STORY.to_string(),
            num_scenes: Some(0),
            total_duration_secs: Some(60.0),
        });

        assert!(matches!(err, Err(ApplicationError::ValidationError(_))));
    }

    #[test]
    fn test_plan_rejects_out_of_range_duration() {
        let err = handler().handle(PlanStoryboard {
            story: DEMO_STORY.to_string(),
            num_scenes: Some(4),
            total_duration_secs: Some(3600.0),
        });

        assert!(matches!(err, Err(ApplicationError::ValidationError(_))));
    }

    #[test]
    fn test_plan_rejects_oversized_story() {
        let huge = "Word. ".repeat(20_000);
        let err = handler().handle(PlanStoryboard {
            story: huge,
            num_scenes: Some(4),
            total_duration_secs: Some(60.0),
        });

        assert!(matches!(err, Err(ApplicationError::ValidationError(_))));
    }

    #[test]
    fn test_passthrough_handlers_match_domain() {
        let groups = SplitScenesHandler.handle(SplitScenes {
            story: "One. Two. Three.".to_string(),
            num_scenes: 3,
        });
        assert_eq!(groups.len(), 3);

        let durations = AllocateDurationsHandler.handle(AllocateDurations {
            total_duration_secs: 60.0,
            scene_count: 6,
        });
        assert_eq!(durations, vec![10.0; 6]);

        let seed = BuildSceneSeedHandler.handle(BuildSceneSeed {
            text: "Hello, World! 123".to_string(),
            index: 3,
        });
        assert_eq!(seed, "3-hello-world-123");
    }
}
