//! Scene - 分镜记录

use serde::{Deserialize, Serialize};

use super::seed::build_seed;

/// 一个分镜：一段故事文本、播放时长和插图 seed
///
/// Scene 不可变，故事、总时长或场景数任一变化时整表重建。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// 0 起始的稳定顺序位置
    pub index: usize,
    /// 本场景的叙事文本
    pub text: String,
    /// 由 (text, index) 确定性导出的插图查找键
    pub seed: String,
    /// 分配到的播放时长（秒，0.1 秒粒度）
    pub duration_secs: f64,
}

impl Scene {
    /// 创建分镜，seed 由文本和下标导出
    pub fn new(index: usize, text: impl Into<String>, duration_secs: f64) -> Self {
        let text = text.into();
        let seed = build_seed(&text, index);
        Self {
            index,
            text,
            seed,
            duration_secs,
        }
    }
}
