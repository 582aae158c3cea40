use crate::domain::error::VarNameError;
use crate::domain::model::Candidate;
use crate::domain::traits::{Host, InputRequest};
use crate::interfaces::clipboard;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::error::CustomUserError;
use inquire::validator::Validation;
use inquire::{InquireError, Select, Text};
use std::fmt;
use std::sync::Mutex;
use std::time::Duration;

/// [`Host`] backed by interactive terminal prompts and the system clipboard
#[derive(Default)]
pub struct TerminalHost {
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self::default()
    }
}

// Row in the select list
struct CandidateRow<'a>(&'a Candidate);

impl fmt::Display for CandidateRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<28} {:<14} {}",
            self.0.value,
            self.0.format.key().cyan(),
            self.0.description.bright_black()
        )
    }
}

/// Esc and Ctrl-C mean "dismissed", anything else is a real failure.
fn dismissed<T>(result: Result<T, InquireError>) -> Result<Option<T>, VarNameError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(VarNameError::Prompt(e.to_string())),
    }
}

impl Host for TerminalHost {
    fn prompt_input(&self, request: &InputRequest) -> Result<Option<String>, VarNameError> {
        let invalid = request.invalid;
        let answer = Text::new(request.prompt)
            .with_placeholder(request.placeholder)
            .with_validator(move |text: &str| -> Result<Validation, CustomUserError> {
                if text.trim().is_empty() {
                    Ok(Validation::Invalid(invalid.into()))
                } else {
                    Ok(Validation::Valid)
                }
            })
            .prompt();
        dismissed(answer)
    }

    fn begin_progress(&self, title: &str) {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(title.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn end_progress(&self) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(pb) = slot.take() {
                pb.finish_and_clear();
            }
        }
    }

    fn pick(
        &self,
        placeholder: &str,
        candidates: &[Candidate],
    ) -> Result<Option<usize>, VarNameError> {
        let rows: Vec<CandidateRow> = candidates.iter().map(CandidateRow).collect();
        let answer = Select::new(placeholder, rows)
            .with_page_size(candidates.len().max(1))
            .raw_prompt();
        Ok(dismissed(answer)?.map(|option| option.index))
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<(), VarNameError> {
        clipboard::copy(text)
    }

    fn show_info(&self, message: &str) {
        eprintln!("{} {}", "✔".green(), message);
    }

    fn show_warning(&self, message: &str) {
        eprintln!("{} {}", "!".yellow().bold(), message.yellow());
    }

    fn show_error(&self, message: &str) {
        eprintln!("{} {}", "✘".red(), message.red());
    }
}
