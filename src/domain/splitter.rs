//! 故事分镜分割器
//!
//! 将自由文本按句子边界切分，再按目标场景数分组
//!
//! 分组策略：
//! 1. 换行符折叠为空格，按句末标点切句
//! 2. 每组 `ceil(句子数 / 目标场景数)` 个连续句子
//! 3. 组数不足时，反复对最长的组做字符中点二分补足

/// 检查是否为句末标点（标点后跟空白才构成句子边界）
#[inline]
fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// 将换行串（\n、\r\n 的连续段）折叠为单个空格
fn collapse_newlines(story: &str) -> String {
    let mut out = String::with_capacity(story.len());
    let mut in_newline_run = false;

    for ch in story.chars() {
        if matches!(ch, '\n' | '\r') {
            if !in_newline_run {
                out.push(' ');
                in_newline_run = true;
            }
        } else {
            in_newline_run = false;
            out.push(ch);
        }
    }

    out
}

/// 切分句子
///
/// 边界为句末标点后紧跟的空白；空白不并入任何一侧（后续 trim 清理）。
/// 末尾无标点的残余内容也算一句。
fn split_sentences(story: &str) -> Vec<String> {
    let text = collapse_newlines(story);

    let mut sentences: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        current.push(ch);

        let at_boundary = is_sentence_terminator(ch)
            && chars.peek().is_some_and(|next| next.is_whitespace());

        if at_boundary {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            current.clear();
        }
    }

    // 残余内容
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }

    sentences
}

/// 最长组的下标（按字符数计，相同长度时取最靠前的）
fn longest_scene_index(scenes: &[String]) -> usize {
    let mut best = 0;
    let mut best_len = 0;

    for (idx, scene) in scenes.iter().enumerate() {
        let len = scene.chars().count();
        if len > best_len {
            best = idx;
            best_len = len;
        }
    }

    best
}

/// 在字符中点处二分，两半各自 trim
fn split_at_char_midpoint(scene: &str) -> (String, String) {
    let mid = scene.chars().count() / 2;
    let byte_mid = scene
        .char_indices()
        .nth(mid)
        .map(|(pos, _)| pos)
        .unwrap_or(scene.len());

    let (head, tail) = scene.split_at(byte_mid);
    (head.trim().to_string(), tail.trim().to_string())
}

/// 将故事文本分割为至多 `num_scenes` 个场景文本
///
/// 保证：
/// - 输出按原文顺序覆盖全部句子内容，不重不漏（空白除外）
/// - 相同输入总是产生逐字节相同的输出
/// - 空白故事或 `num_scenes == 0` 返回空列表
pub fn split_story_into_scenes(story: &str, num_scenes: usize) -> Vec<String> {
    let sentences = split_sentences(story);
    if sentences.is_empty() || num_scenes == 0 {
        return Vec::new();
    }

    // 每组句子数，向上取整，至少 1
    let per_scene = sentences.len().div_ceil(num_scenes).max(1);

    let mut scenes: Vec<String> = sentences
        .chunks(per_scene)
        .map(|chunk| chunk.join(" "))
        .collect();

    // 组数不足时对最长的组二分补足
    while scenes.len() < num_scenes {
        let idx = longest_scene_index(&scenes);
        let (head, tail) = split_at_char_midpoint(&scenes[idx]);

        // 任何一半为空说明已无有意义的切分点
        if head.is_empty() || tail.is_empty() {
            break;
        }

        scenes[idx] = head;
        scenes.insert(idx + 1, tail);
    }

    scenes.truncate(num_scenes);
    scenes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_whitespace(text: &str) -> String {
        text.chars().filter(|c| !c.is_whitespace()).collect()
    }

    #[test]
    fn test_five_sentences_into_two_scenes() {
        let story = "A cat sat. A dog ran. A bird flew. A fish swam. A bee buzzed.";
        let scenes = split_story_into_scenes(story, 2);

        assert_eq!(scenes.len(), 2);
        assert_eq!(scenes[0], "A cat sat. A dog ran. A bird flew.");
        assert_eq!(scenes[1], "A fish swam. A bee buzzed.");
    }

    #[test]
    fn test_empty_story_produces_no_scenes() {
        assert!(split_story_into_scenes("", 4).is_empty());
        assert!(split_story_into_scenes("   ", 4).is_empty());
        assert!(split_story_into_scenes("\n\n\n", 4).is_empty());
    }

    #[test]
    fn test_zero_scene_count_produces_no_scenes() {
        assert!(split_story_into_scenes("One. Two. Three.", 0).is_empty());
    }

    #[test]
    fn test_one_scene_keeps_everything_together() {
        let story = "First. Second! Third?";
        let scenes = split_story_into_scenes(story, 1);

        assert_eq!(scenes, vec!["First. Second! Third?".to_string()]);
    }

    #[test]
    fn test_newline_runs_collapse_to_single_space() {
        let story = "One sentence here.\n\n\nAnother one there.";
        let scenes = split_story_into_scenes(story, 2);

        assert_eq!(scenes.len(), 2);
        assert_eq!(scenes[0], "One sentence here.");
        assert_eq!(scenes[1], "Another one there.");
    }

    #[test]
    fn test_terminator_without_whitespace_does_not_split() {
        // 小数点、缩写点后无空白，不构成边界
        let scenes = split_story_into_scenes("Version 2.5 shipped. Everyone cheered.", 2);

        assert_eq!(scenes.len(), 2);
        assert_eq!(scenes[0], "Version 2.5 shipped.");
        assert_eq!(scenes[1], "Everyone cheered.");
    }

    #[test]
    fn test_underfill_splits_longest_group_at_midpoint() {
        // 两句、四个场景：先得两组，再对最长组各二分一次
        let story = "Alpha beta gamma delta. Tiny.";
        let scenes = split_story_into_scenes(story, 4);

        assert!(scenes.len() <= 4);
        assert!(scenes.len() >= 2);
        // 非空白内容不重不漏
        assert_eq!(strip_whitespace(&scenes.concat()), strip_whitespace(story));
    }

    #[test]
    fn test_underfill_reaches_target_when_text_is_long_enough() {
        let story = "The expedition crossed the frozen ridge before dawn broke over the valley.";
        let scenes = split_story_into_scenes(story, 3);

        assert_eq!(scenes.len(), 3);
    }

    #[test]
    fn test_underfill_stops_on_single_char_groups() {
        // 单字符句子无法再切分，允许少于目标数
        let scenes = split_story_into_scenes("A.", 5);

        assert!(!scenes.is_empty());
        assert!(scenes.len() <= 5);
    }

    #[test]
    fn test_partition_preserves_sentence_order_and_content() {
        let story = "One ran. Two slept? Three sang! Four hid. Five waited. Six left.";
        for target in 1..=8 {
            let scenes = split_story_into_scenes(story, target);
            assert_eq!(
                strip_whitespace(&scenes.concat()),
                strip_whitespace(story),
                "target={}",
                target
            );
        }
    }

    #[test]
    fn test_never_exceeds_requested_count() {
        let story = "A. B. C. D. E. F. G. H.";
        for target in 1..=12 {
            assert!(split_story_into_scenes(story, target).len() <= target);
        }
    }

    #[test]
    fn test_deterministic_across_calls() {
        let story = "The door creaked open. Light spilled in. Nobody moved at all.";
        let first = split_story_into_scenes(story, 5);
        let second = split_story_into_scenes(story, 5);

        assert_eq!(first, second);
    }

    #[test]
    fn test_midpoint_split_is_char_safe_for_multibyte_text() {
        // 多字节字符不会在字节中间被切开
        let story = "Le café était plein de musiciens heureux";
        let scenes = split_story_into_scenes(story, 3);

        assert!(!scenes.is_empty());
        for scene in &scenes {
            assert!(!scene.is_empty());
        }
    }

    #[test]
    fn test_longest_index_prefers_first_on_tie() {
        let scenes = vec!["abcd".to_string(), "efgh".to_string(), "ij".to_string()];
        assert_eq!(longest_scene_index(&scenes), 0);
    }
}
