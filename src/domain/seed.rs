//! 插图种子构建器
//!
//! 从场景文本导出确定性的短标识，供下游按 seed 查找/生成插图。
//! 同一段文本总是得到同一个 seed，无需真正的语义嵌入。

/// 取前几个关键词参与 seed
const SEED_KEYWORD_LIMIT: usize = 5;

/// 文本无可用关键词时的兜底词
const FALLBACK_KEYWORD: &str = "scene";

/// 构建场景的插图 seed
///
/// 规则：转小写，仅保留 ASCII 小写字母、数字和空白，
/// 按空白切词取前 5 个，用 `-` 连接，前缀场景下标。
/// seed 只由本场景的 `(text, index)` 决定，截断后不保证全局唯一。
pub fn build_seed(text: &str, index: usize) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    let keywords = cleaned
        .split_whitespace()
        .take(SEED_KEYWORD_LIMIT)
        .collect::<Vec<_>>()
        .join("-");

    if keywords.is_empty() {
        format!("{}-{}", index, FALLBACK_KEYWORD)
    } else {
        format!("{}-{}", index, keywords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(build_seed("Hello, World! 123", 3), "3-hello-world-123");
    }

    #[test]
    fn test_punctuation_only_falls_back_to_scene() {
        assert_eq!(build_seed("???", 0), "0-scene");
        assert_eq!(build_seed("", 7), "7-scene");
    }

    #[test]
    fn test_keywords_truncate_to_five() {
        let seed = build_seed("one two three four five six seven", 2);

        assert_eq!(seed, "2-one-two-three-four-five");
    }

    #[test]
    fn test_non_ascii_letters_are_stripped() {
        // 仅保留 ASCII 小写字母与数字
        assert_eq!(build_seed("café déjà vu 9", 1), "1-caf-dj-vu-9");
    }

    #[test]
    fn test_whitespace_runs_collapse_between_keywords() {
        assert_eq!(build_seed("  wide \t gaps \n here  ", 4), "4-wide-gaps-here");
    }

    #[test]
    fn test_deterministic_for_same_input() {
        assert_eq!(build_seed("The hidden door", 5), build_seed("The hidden door", 5));
    }
}
