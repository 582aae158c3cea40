//! Local dictionary used when the model's answer can't be used.

use crate::domain::case::{self, PLACEHOLDER};
use crate::domain::model::TranslationResult;

/// Applied top to bottom; an earlier entry wins over a later overlapping one.
pub const DICTIONARY: &[(&str, &str)] = &[
    ("是否", "is"),
    ("显示", "show"),
    ("弹窗", "modal"),
    ("用户", "user"),
    ("名称", "name"),
    ("密码", "password"),
    ("登录", "login"),
    ("注册", "register"),
    ("提交", "submit"),
    ("取消", "cancel"),
    ("确认", "confirm"),
    ("删除", "delete"),
    ("编辑", "edit"),
    ("保存", "save"),
    ("加载", "loading"),
    ("数据", "data"),
    ("列表", "list"),
    ("详情", "detail"),
    ("设置", "setting"),
];

/// Approximate English for `text`: dictionary words substituted, everything
/// but ASCII letters, digits and whitespace removed, whitespace collapsed.
pub fn simple_translate(text: &str) -> String {
    let mut result = text.to_string();
    for &(source, english) in DICTIONARY {
        if result.contains(source) {
            // Pad so adjacent source words become separate English words.
            result = result.replace(source, &format!(" {} ", english));
        }
    }

    let kept: String = result
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    let words: Vec<&str> = kept.split_whitespace().collect();
    if words.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        words.join(" ")
    }
}

pub fn fallback_result(text: &str) -> TranslationResult {
    case::format_all(&simple_translate(text))
}
