//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 分镜规划配置
    #[serde(default)]
    pub planner: PlannerConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5070
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 分镜规划配置
///
/// 默认值与取值范围沿用编辑界面的控件设定：
/// 场景数 1..=30、总时长 5..=1800 秒
#[derive(Debug, Clone, Deserialize)]
pub struct PlannerConfig {
    /// 请求未指定时的默认场景数
    #[serde(default = "default_num_scenes")]
    pub default_num_scenes: usize,

    /// 单次规划允许的最大场景数
    #[serde(default = "default_max_scenes")]
    pub max_scenes: usize,

    /// 请求未指定时的默认总时长（秒）
    #[serde(default = "default_total_duration_secs")]
    pub default_total_duration_secs: f64,

    /// 允许的最小总时长（秒）
    #[serde(default = "default_min_total_duration_secs")]
    pub min_total_duration_secs: f64,

    /// 允许的最大总时长（秒）
    #[serde(default = "default_max_total_duration_secs")]
    pub max_total_duration_secs: f64,

    /// 故事文本最大字符数
    #[serde(default = "default_max_story_chars")]
    pub max_story_chars: usize,
}

fn default_num_scenes() -> usize {
    6
}

fn default_max_scenes() -> usize {
    30
}

fn default_total_duration_secs() -> f64 {
    60.0
}

fn default_min_total_duration_secs() -> f64 {
    5.0
}

fn default_max_total_duration_secs() -> f64 {
    1800.0
}

fn default_max_story_chars() -> usize {
    50_000
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_num_scenes: default_num_scenes(),
            max_scenes: default_max_scenes(),
            default_total_duration_secs: default_total_duration_secs(),
            min_total_duration_secs: default_min_total_duration_secs(),
            max_total_duration_secs: default_max_total_duration_secs(),
            max_story_chars: default_max_story_chars(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
