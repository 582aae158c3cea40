use crate::domain::error::{describe, VarNameError};
use crate::domain::model::Outcome;
use crate::domain::traits::{Host, InputRequest, Translator};
use crate::presentation::locale::Messages;
use crate::presentation::picker::present;

#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Phrase given up front; the input prompt is skipped when set.
    pub phrase: Option<String>,
    /// Copy the picked value to the clipboard instead of handing it back.
    pub copy: bool,
}

/// Run one translate-and-pick invocation to completion.
///
/// Every failure ends up as a single message shown through `host`; this never
/// returns an error.
pub async fn run_command<H, T>(
    host: &H,
    translator: &T,
    messages: &Messages,
    options: CommandOptions,
) -> Outcome
where
    H: Host + ?Sized,
    T: Translator + ?Sized,
{
    match run_inner(host, translator, messages, options).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::debug!("command aborted: {}", e);
            let message = format!("{}: {}", messages.operation_failed, describe(&e));
            host.show_error(&message);
            Outcome::Failed(message)
        }
    }
}

async fn run_inner<H, T>(
    host: &H,
    translator: &T,
    messages: &Messages,
    options: CommandOptions,
) -> Result<Outcome, VarNameError>
where
    H: Host + ?Sized,
    T: Translator + ?Sized,
{
    let input = match options.phrase {
        Some(phrase) => phrase,
        None => {
            let request = InputRequest {
                prompt: messages.input_prompt,
                placeholder: messages.input_placeholder,
                invalid: messages.input_invalid,
            };
            match host.prompt_input(&request)? {
                Some(text) => text,
                None => return Ok(Outcome::Cancelled),
            }
        }
    };

    let phrase = input.trim();
    if phrase.is_empty() {
        host.show_warning(messages.input_invalid);
        return Ok(Outcome::Cancelled);
    }

    host.begin_progress(messages.progress_title);
    let translated = translator.translate(phrase).await;
    host.end_progress();

    let result = translated.and_then(|t| present(host, &t, messages, options.copy));
    match result {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            tracing::debug!("translation failed: {}", e);
            let message = format!("{}: {}", messages.translate_failed, describe(&e));
            host.show_error(&message);
            Ok(Outcome::Failed(message))
        }
    }
}
