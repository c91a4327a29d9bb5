use crate::config::{Length, TextOr};

/// 截断单位。配置里是自由字符串，这里收敛为封闭集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    Chars,
    Words,
}

impl Units {
    /// 校验配置字符串，未知值回退为默认单位
    pub fn resolve(raw: &str) -> Units {
        match raw {
            "chars" => Units::Chars,
            "words" => Units::Words,
            _ => Units::default(),
        }
    }
}

/// 按所选单位截断文本。
///
/// 输入为 None 时原样传递；`length` 为 null 时不截断；发生截断时追加结尾符。
pub fn truncate(
    units: Units,
    text: Option<&str>,
    length: &Length,
    end: &TextOr,
) -> Option<String> {
    let text = text?;
    let Some(limit) = length.resolve() else {
        return Some(text.to_string());
    };
    Some(match units {
        Units::Chars => truncate_chars(text, limit, end),
        Units::Words => truncate_words(text, limit, end),
    })
}

fn truncate_chars(text: &str, limit: usize, end: &TextOr) -> String {
    // 按字符数截取，不落在多字节序列中间
    let total = text.chars().count();
    let mut cut: String = text.chars().take(limit).collect();
    // 相等也算截断，历史行为
    if limit <= total {
        cut = append_end(cut, end);
    }
    cut
}

fn truncate_words(text: &str, limit: usize, end: &TextOr) -> String {
    let tokens: Vec<&str> = text.split(' ').collect();
    let total = tokens.len();
    // 保留 limit - 1 个词：与字符模式差一的历史行为，保持不变
    let mut cut = tokens[..(limit - 1).min(total)].join(" ");
    if limit <= total {
        cut = append_end(cut, end);
    }
    cut
}

/// 追加结尾符；结尾符未设置或为空串时保持原文不动
fn append_end(text: String, end: &TextOr) -> String {
    match end.as_text() {
        Some(marker) => text + marker,
        None => text,
    }
}
