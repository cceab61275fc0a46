//! 场景时长分配器
//!
//! 将总时长按 0.1 秒粒度均分到固定数量的场景上
//!
//! 内部以整数分秒（decisecond）计算，避免浮点累加漂移破坏
//! 「各场景时长之和等于总时长」的约束

/// 每秒的分秒数
const DECISECONDS_PER_SECOND: i64 = 10;

#[inline]
fn to_deciseconds(secs: f64) -> i64 {
    (secs * DECISECONDS_PER_SECOND as f64).round() as i64
}

#[inline]
fn to_seconds(deciseconds: i64) -> f64 {
    deciseconds as f64 / DECISECONDS_PER_SECOND as f64
}

/// 将 `total_secs` 分配到 `scene_count` 个场景
///
/// 每个槽位先取 `floor(total / count)`（0.1 秒向下取整），
/// 剩余部分从下标 0 起循环地按 0.1 秒逐个补齐，直到总和到达总时长。
///
/// 保证：
/// - 返回长度恒等于 `scene_count`（`scene_count == 0` 时为空）
/// - 每个值都是 0.1 的整数倍
/// - 各值之和与总时长在 0.1 秒取整后完全一致
/// - 任意两个值相差至多 0.1
pub fn compute_scene_durations(total_secs: f64, scene_count: usize) -> Vec<f64> {
    if scene_count == 0 {
        return Vec::new();
    }

    let total_ds = to_deciseconds(total_secs);
    let count = scene_count as i64;

    // div_euclid 向下取整，负的总时长同样成立
    let base_ds = total_ds.div_euclid(count);
    let mut slots = vec![base_ds; scene_count];
    let mut sum_ds = base_ds * count;

    let mut cursor = 0usize;
    while sum_ds < total_ds {
        slots[cursor % scene_count] += 1;
        sum_ds += 1;
        cursor += 1;
    }

    slots.into_iter().map(to_seconds).collect()
}
