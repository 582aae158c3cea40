use crate::domain::error::VarNameError;
use crate::domain::model::{Candidate, Translation};
use async_trait::async_trait;

/// Trait for translation services
///
/// Implemented by the chat-completion client; tests swap in fakes.
#[async_trait]
pub trait Translator {
    /// Translate a phrase into the five naming conventions
    async fn translate(&self, phrase: &str) -> Result<Translation, VarNameError>;
}

/// Input box settings for [`Host::prompt_input`].
#[derive(Debug, Clone, Copy)]
pub struct InputRequest {
    pub prompt: &'static str,
    pub placeholder: &'static str,
    /// Shown when the user submits blank text.
    pub invalid: &'static str,
}

/// UI capabilities the command needs from whatever is hosting it
///
/// The terminal host implements these with interactive prompts; tests use a
/// scripted host so the command can run without a terminal.
pub trait Host {
    /// Ask for a line of text. `Ok(None)` means the user dismissed the prompt.
    fn prompt_input(&self, request: &InputRequest) -> Result<Option<String>, VarNameError>;

    /// Start an indeterminate, non-cancellable progress indicator.
    fn begin_progress(&self, title: &str);

    fn end_progress(&self);

    /// Offer candidates for single selection. `Ok(None)` means dismissed.
    fn pick(
        &self,
        placeholder: &str,
        candidates: &[Candidate],
    ) -> Result<Option<usize>, VarNameError>;

    fn copy_to_clipboard(&self, text: &str) -> Result<(), VarNameError>;

    fn show_info(&self, message: &str);

    fn show_warning(&self, message: &str);

    fn show_error(&self, message: &str);
}
