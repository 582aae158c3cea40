use crate::domain::error::{error_chain, ServiceFailure, VarNameError};
use crate::domain::fallback::fallback_result;
use crate::domain::model::{FallbackReason, NamingFormat, Translation, TranslationResult};
use crate::domain::traits::Translator;
use crate::infrastructure::config::{Config, Provider};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const TEMPERATURE: f32 = 0.1;
const MAX_TOKENS: u32 = 500;

// Chat-completion request structures
#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_thinking: Option<bool>,
}

#[derive(Serialize, Debug)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

// Chat-completion response structures
#[derive(Deserialize, Debug)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize, Debug)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Deserialize, Debug)]
struct ErrorDetail {
    message: Option<String>,
}

/// Translator backed by an OpenAI-compatible chat-completion endpoint
pub struct ChatTranslator {
    client: Client,
    config: Config,
}

impl ChatTranslator {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl Translator for ChatTranslator {
    async fn translate(&self, phrase: &str) -> Result<Translation, VarNameError> {
        let api_key = self.config.api_key()?;
        let endpoint = self.config.endpoint()?;
        let model = self.config.model();
        let prompt = create_prompt(phrase);

        let request = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            enable_thinking: match self.config.provider() {
                Provider::Qwen => Some(false),
                _ => None,
            },
        };

        tracing::debug!(endpoint = endpoint.as_str(), model, "sending chat completion request");

        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_failure(e, self.config.timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("chat completion request failed: {}", status);
            // 401 and 429 carry their cause in the status alone.
            let body = match status {
                StatusCode::UNAUTHORIZED | StatusCode::TOO_MANY_REQUESTS => String::new(),
                _ => response
                    .text()
                    .await
                    .map_err(|e| transport_failure(e, self.config.timeout_secs))?,
            };
            return Err(status_failure(status, &body).into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| transport_failure(e, self.config.timeout_secs))?;
        let parsed: ChatResponse = serde_json::from_str(&body).map_err(|e| {
            ServiceFailure::Upstream(format!("unexpected response body: {}", e))
        })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_default();

        Ok(parse_content(&content, phrase))
    }
}

/// Build the instruction sent to the model, with one worked example.
pub fn create_prompt(text: &str) -> String {
    format!(
        r#"Translate the following text into English and provide 5 programming variable naming formats. Return strictly the JSON object below, without any other text:

{{
  "camelCase": "camel case",
  "PascalCase": "Pascal case",
  "snake_case": "snake case",
  "CONSTANT_CASE": "constant case",
  "kebab-case": "kebab case"
}}

Text: {text}

Example:
Input: 是否显示弹窗
Output:
{{
  "camelCase": "isShowModal",
  "PascalCase": "IsShowModal",
  "snake_case": "is_show_modal",
  "CONSTANT_CASE": "IS_SHOW_MODAL",
  "kebab-case": "is-show-modal"
}}"#
    )
}

/// Turn the model's reply into a translation.
///
/// Anything other than a JSON object with all five keys set to non-empty
/// strings falls back to the local dictionary for `phrase`. Values the model
/// supplies are used as-is.
pub fn parse_content(content: &str, phrase: &str) -> Translation {
    match strict_parse(content.trim()) {
        Ok(result) => Translation::Model(result),
        Err(reason) => {
            tracing::debug!("model response unusable ({}), using local dictionary", reason);
            Translation::Fallback {
                result: fallback_result(phrase),
                reason,
            }
        }
    }
}

fn strict_parse(content: &str) -> Result<TranslationResult, FallbackReason> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| FallbackReason::InvalidJson(e.to_string()))?;

    let field = |format: NamingFormat| -> Result<String, FallbackReason> {
        value
            .get(format.key())
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .ok_or(FallbackReason::MissingField(format.key()))
    };

    Ok(TranslationResult {
        camel_case: field(NamingFormat::Camel)?,
        pascal_case: field(NamingFormat::Pascal)?,
        snake_case: field(NamingFormat::Snake)?,
        constant_case: field(NamingFormat::Constant)?,
        kebab_case: field(NamingFormat::Kebab)?,
    })
}

fn transport_failure(err: reqwest::Error, timeout_secs: u64) -> VarNameError {
    if err.is_timeout() {
        ServiceFailure::Timeout(timeout_secs).into()
    } else {
        ServiceFailure::Upstream(error_chain(&err)).into()
    }
}

fn status_failure(status: StatusCode, body: &str) -> ServiceFailure {
    match status {
        StatusCode::UNAUTHORIZED => ServiceFailure::Unauthorized,
        StatusCode::TOO_MANY_REQUESTS => ServiceFailure::RateLimited,
        _ => {
            let upstream = serde_json::from_str::<ErrorBody>(body)
                .ok()
                .and_then(|b| b.error)
                .and_then(|e| e.message)
                .filter(|m| !m.trim().is_empty());
            ServiceFailure::Upstream(upstream.unwrap_or_else(|| format!("HTTP {}", status)))
        }
    }
}
