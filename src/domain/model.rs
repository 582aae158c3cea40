use serde::{Deserialize, Serialize};

/// Five renderings of one phrase, keyed the way the model is asked to answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    #[serde(rename = "camelCase")]
    pub camel_case: String,
    #[serde(rename = "PascalCase")]
    pub pascal_case: String,
    pub snake_case: String,
    #[serde(rename = "CONSTANT_CASE")]
    pub constant_case: String,
    #[serde(rename = "kebab-case")]
    pub kebab_case: String,
}

impl TranslationResult {
    pub fn get(&self, format: NamingFormat) -> &str {
        match format {
            NamingFormat::Camel => &self.camel_case,
            NamingFormat::Pascal => &self.pascal_case,
            NamingFormat::Snake => &self.snake_case,
            NamingFormat::Constant => &self.constant_case,
            NamingFormat::Kebab => &self.kebab_case,
        }
    }
}

// 命名格式，顺序即展示顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingFormat {
    Camel,
    Pascal,
    Snake,
    Constant,
    Kebab,
}

impl NamingFormat {
    pub const ALL: [NamingFormat; 5] = [
        NamingFormat::Camel,
        NamingFormat::Pascal,
        NamingFormat::Snake,
        NamingFormat::Constant,
        NamingFormat::Kebab,
    ];

    /// JSON key and display label of the convention.
    pub fn key(self) -> &'static str {
        match self {
            NamingFormat::Camel => "camelCase",
            NamingFormat::Pascal => "PascalCase",
            NamingFormat::Snake => "snake_case",
            NamingFormat::Constant => "CONSTANT_CASE",
            NamingFormat::Kebab => "kebab-case",
        }
    }
}

/// Why the local dictionary was used instead of the model's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    InvalidJson(String),
    MissingField(&'static str),
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::InvalidJson(e) => write!(f, "response is not valid JSON ({})", e),
            FallbackReason::MissingField(key) => write!(f, "missing required field: {}", key),
        }
    }
}

/// Outcome of one translation: the model's own answer, or the local approximation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Model(TranslationResult),
    Fallback {
        result: TranslationResult,
        reason: FallbackReason,
    },
}

impl Translation {
    pub fn result(&self) -> &TranslationResult {
        match self {
            Translation::Model(result) => result,
            Translation::Fallback { result, .. } => result,
        }
    }

    pub fn into_result(self) -> TranslationResult {
        match self {
            Translation::Model(result) => result,
            Translation::Fallback { result, .. } => result,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Translation::Fallback { .. })
    }
}

/// One selectable row in the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub format: NamingFormat,
    pub value: String,
    pub description: &'static str,
}

/// What a single command invocation ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input prompt dismissed, or blank input rejected.
    Cancelled,
    /// Candidates shown but nothing picked.
    Dismissed,
    Copied { format: NamingFormat, value: String },
    /// Selection delivered some other way than the clipboard.
    Picked { format: NamingFormat, value: String },
    /// Selection made but the clipboard write failed.
    CopyFailed { format: NamingFormat, value: String },
    /// A user-visible error message was shown.
    Failed(String),
}
