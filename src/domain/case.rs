//! Naming-convention formatter.
//!
//! Input is an English phrase split on whitespace. Words with no letter or
//! digit in them are dropped; if nothing is left the phrase becomes
//! `variable`. Remaining words keep their punctuation and digits, only the
//! casing of letters changes.

use crate::domain::model::TranslationResult;

pub const PLACEHOLDER: &str = "variable";

fn words(phrase: &str) -> Vec<&str> {
    let words: Vec<&str> = phrase
        .split_whitespace()
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .collect();
    if words.is_empty() {
        vec![PLACEHOLDER]
    } else {
        words
    }
}

/// First character uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

pub fn to_camel_case(phrase: &str) -> String {
    words(phrase)
        .into_iter()
        .enumerate()
        .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
        .collect()
}

pub fn to_pascal_case(phrase: &str) -> String {
    words(phrase).into_iter().map(capitalize).collect()
}

pub fn to_snake_case(phrase: &str) -> String {
    join_with(phrase, "_", str::to_lowercase)
}

pub fn to_constant_case(phrase: &str) -> String {
    join_with(phrase, "_", str::to_uppercase)
}

pub fn to_kebab_case(phrase: &str) -> String {
    join_with(phrase, "-", str::to_lowercase)
}

fn join_with(phrase: &str, sep: &str, case: fn(&str) -> String) -> String {
    words(phrase)
        .into_iter()
        .map(case)
        .collect::<Vec<_>>()
        .join(sep)
}

/// Render an English phrase in all five conventions.
pub fn format_all(phrase: &str) -> TranslationResult {
    TranslationResult {
        camel_case: to_camel_case(phrase),
        pascal_case: to_pascal_case(phrase),
        snake_case: to_snake_case(phrase),
        constant_case: to_constant_case(phrase),
        kebab_case: to_kebab_case(phrase),
    }
}
