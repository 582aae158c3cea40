use crate::domain::error::{describe, VarNameError};
use crate::domain::model::{Candidate, NamingFormat, Outcome, Translation, TranslationResult};
use crate::domain::traits::Host;
use crate::presentation::locale::Messages;

/// One candidate per naming format, always in the same order.
pub fn build_candidates(result: &TranslationResult, messages: &Messages) -> Vec<Candidate> {
    NamingFormat::ALL
        .iter()
        .map(|&format| Candidate {
            format,
            value: result.get(format).to_string(),
            description: (messages.describe)(format),
        })
        .collect()
}

/// Pretty JSON keyed by the convention names, for non-interactive output.
pub fn render_json(result: &TranslationResult) -> Result<String, VarNameError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Show the candidates and deliver the one the user picks.
///
/// With `copy` the value goes to the clipboard; a clipboard failure is shown
/// to the user and reported as [`Outcome::CopyFailed`], not as an error.
pub fn present<H>(
    host: &H,
    translation: &Translation,
    messages: &Messages,
    copy: bool,
) -> Result<Outcome, VarNameError>
where
    H: Host + ?Sized,
{
    if translation.is_fallback() {
        host.show_warning(messages.fallback_notice);
    }

    let candidates = build_candidates(translation.result(), messages);
    let Some(chosen) = host
        .pick(messages.pick_placeholder, &candidates)?
        .and_then(|index| candidates.into_iter().nth(index))
    else {
        return Ok(Outcome::Dismissed);
    };

    let format = chosen.format;
    let value = chosen.value;
    if !copy {
        return Ok(Outcome::Picked { format, value });
    }

    match host.copy_to_clipboard(&value) {
        Ok(()) => {
            host.show_info(&(messages.copied)(format.key(), &value));
            Ok(Outcome::Copied { format, value })
        }
        Err(e) => {
            tracing::debug!("clipboard write failed: {}", e);
            host.show_error(&format!("{}: {}", messages.copy_failed, describe(&e)));
            Ok(Outcome::CopyFailed { format, value })
        }
    }
}
