//! Command flow tests with a scripted host and canned translator

use async_trait::async_trait;
use std::cell::RefCell;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;
use var_name::application::command::{run_command, CommandOptions};
use var_name::domain::case::format_all;
use var_name::domain::error::{ServiceFailure, VarNameError};
use var_name::domain::fallback::fallback_result;
use var_name::domain::model::{Candidate, FallbackReason, NamingFormat, Outcome, Translation};
use var_name::domain::traits::{Host, InputRequest, Translator};
use var_name::infrastructure::network::client::parse_content;
use var_name::presentation::locale::Messages;

#[derive(Default)]
struct ScriptedHost {
    /// `None` dismisses the input box.
    input: Option<String>,
    input_error: bool,
    pick: Option<usize>,
    clipboard_error: bool,
    events: RefCell<Vec<String>>,
    clipboard: RefCell<Option<String>>,
    offered: RefCell<Vec<Candidate>>,
}

impl ScriptedHost {
    fn typing(text: &str) -> Self {
        Self {
            input: Some(text.to_string()),
            ..Self::default()
        }
    }

    fn picking(mut self, index: usize) -> Self {
        self.pick = Some(index);
        self
    }

    fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    fn record(&self, event: String) {
        self.events.borrow_mut().push(event);
    }
}

impl Host for ScriptedHost {
    fn prompt_input(&self, _request: &InputRequest) -> Result<Option<String>, VarNameError> {
        self.record("prompt".to_string());
        if self.input_error {
            return Err(VarNameError::Prompt("terminal is not interactive".to_string()));
        }
        Ok(self.input.clone())
    }

    fn begin_progress(&self, title: &str) {
        self.record(format!("progress:{}", title));
    }

    fn end_progress(&self) {
        self.record("progress:end".to_string());
    }

    fn pick(
        &self,
        _placeholder: &str,
        candidates: &[Candidate],
    ) -> Result<Option<usize>, VarNameError> {
        self.record("pick".to_string());
        *self.offered.borrow_mut() = candidates.to_vec();
        Ok(self.pick)
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<(), VarNameError> {
        if self.clipboard_error {
            return Err(VarNameError::Clipboard("no display".to_string()));
        }
        *self.clipboard.borrow_mut() = Some(text.to_string());
        Ok(())
    }

    fn show_info(&self, message: &str) {
        self.record(format!("info:{}", message));
    }

    fn show_warning(&self, message: &str) {
        self.record(format!("warning:{}", message));
    }

    fn show_error(&self, message: &str) {
        self.record(format!("error:{}", message));
    }
}

struct CannedTranslator {
    answer: fn(&str) -> Result<Translation, VarNameError>,
    calls: AtomicUsize,
    last_phrase: Mutex<Option<String>>,
}

impl CannedTranslator {
    fn new(answer: fn(&str) -> Result<Translation, VarNameError>) -> Self {
        Self {
            answer,
            calls: AtomicUsize::new(0),
            last_phrase: Mutex::new(None),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for CannedTranslator {
    async fn translate(&self, phrase: &str) -> Result<Translation, VarNameError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_phrase.lock().unwrap() = Some(phrase.to_string());
        (self.answer)(phrase)
    }
}

fn model_answer(_phrase: &str) -> Result<Translation, VarNameError> {
    Ok(Translation::Model(format_all("user list")))
}

fn fallback_answer(phrase: &str) -> Result<Translation, VarNameError> {
    Ok(Translation::Fallback {
        result: fallback_result(phrase),
        reason: FallbackReason::InvalidJson("expected value".to_string()),
    })
}

fn rate_limited(_phrase: &str) -> Result<Translation, VarNameError> {
    Err(ServiceFailure::RateLimited.into())
}

fn interactive() -> CommandOptions {
    CommandOptions {
        phrase: None,
        copy: true,
    }
}

fn en() -> Messages {
    Messages::from_locale("en")
}

#[tokio::test]
async fn test_pick_copies_to_clipboard() {
    let host = ScriptedHost::typing("  用户列表  ").picking(2);
    let translator = CannedTranslator::new(model_answer);

    let outcome = run_command(&host, &translator, &en(), interactive()).await;

    assert_eq!(
        outcome,
        Outcome::Copied {
            format: NamingFormat::Snake,
            value: "user_list".to_string()
        }
    );
    assert_eq!(host.clipboard.borrow().as_deref(), Some("user_list"));
    assert_eq!(translator.last_phrase.lock().unwrap().as_deref(), Some("用户列表"));
    assert_eq!(
        host.events(),
        [
            "prompt",
            "progress:Translating...",
            "progress:end",
            "pick",
            "info:Copied snake_case: user_list"
        ]
    );
}

#[tokio::test]
async fn test_candidates_offered_in_fixed_order() {
    let host = ScriptedHost::typing("用户列表");
    let translator = CannedTranslator::new(model_answer);

    run_command(&host, &translator, &en(), interactive()).await;

    let offered = host.offered.borrow();
    let formats: Vec<NamingFormat> = offered.iter().map(|c| c.format).collect();
    assert_eq!(formats, NamingFormat::ALL);
    assert_eq!(offered[1].value, "UserList");
}

#[tokio::test]
async fn test_dismissed_input_stops_silently() {
    let host = ScriptedHost::default();
    let translator = CannedTranslator::new(model_answer);

    let outcome = run_command(&host, &translator, &en(), interactive()).await;

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(translator.calls(), 0);
    assert_eq!(host.events(), ["prompt"]);
}

#[tokio::test]
async fn test_blank_input_never_reaches_translator() {
    for blank in ["", "   ", "\t\n"] {
        let host = ScriptedHost::typing(blank);
        let translator = CannedTranslator::new(model_answer);

        let outcome = run_command(&host, &translator, &en(), interactive()).await;

        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(translator.calls(), 0);
        assert!(!host.events().iter().any(|e| e.starts_with("progress")));
    }
}

#[tokio::test]
async fn test_blank_preset_phrase_is_rejected() {
    let host = ScriptedHost::default();
    let translator = CannedTranslator::new(model_answer);
    let options = CommandOptions {
        phrase: Some("   ".to_string()),
        copy: true,
    };

    let outcome = run_command(&host, &translator, &en(), options).await;

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(translator.calls(), 0);
    assert_eq!(host.events(), ["warning:Please enter some text"]);
}

#[tokio::test]
async fn test_service_error_is_surfaced_once() {
    let host = ScriptedHost::typing("用户").picking(0);
    let translator = CannedTranslator::new(rate_limited);

    let outcome = run_command(&host, &translator, &en(), interactive()).await;

    let expected = "Translation failed: API rate limit exceeded, please try again later";
    assert_eq!(outcome, Outcome::Failed(expected.to_string()));
    assert_eq!(
        host.events(),
        [
            "prompt".to_string(),
            "progress:Translating...".to_string(),
            "progress:end".to_string(),
            format!("error:{}", expected),
        ]
    );
    assert!(host.clipboard.borrow().is_none());
}

#[tokio::test]
async fn test_prompt_failure_is_labelled_as_operation_failure() {
    let host = ScriptedHost {
        input_error: true,
        ..ScriptedHost::default()
    };
    let translator = CannedTranslator::new(model_answer);

    let outcome = run_command(&host, &translator, &en(), interactive()).await;

    assert_eq!(
        outcome,
        Outcome::Failed("Operation failed: Prompt error: terminal is not interactive".to_string())
    );
    assert_eq!(translator.calls(), 0);
}

#[tokio::test]
async fn test_dismissed_picker_does_nothing() {
    let host = ScriptedHost::typing("用户列表");
    let translator = CannedTranslator::new(model_answer);

    let outcome = run_command(&host, &translator, &en(), interactive()).await;

    assert_eq!(outcome, Outcome::Dismissed);
    assert!(host.clipboard.borrow().is_none());
    assert_eq!(host.events().last().map(String::as_str), Some("pick"));
}

#[tokio::test]
async fn test_clipboard_failure_is_reported() {
    let host = ScriptedHost {
        clipboard_error: true,
        ..ScriptedHost::typing("用户列表").picking(0)
    };
    let translator = CannedTranslator::new(model_answer);

    let outcome = run_command(&host, &translator, &en(), interactive()).await;

    assert_eq!(
        outcome,
        Outcome::CopyFailed {
            format: NamingFormat::Camel,
            value: "userList".to_string()
        }
    );
    assert_eq!(
        host.events().last().map(String::as_str),
        Some("error:Copy failed: Clipboard error: no display")
    );
}

#[tokio::test]
async fn test_fallback_shows_notice_and_candidates() {
    let host = ScriptedHost::typing("是否显示弹窗").picking(3);
    let translator = CannedTranslator::new(fallback_answer);

    let outcome = run_command(&host, &translator, &en(), interactive()).await;

    assert_eq!(
        outcome,
        Outcome::Copied {
            format: NamingFormat::Constant,
            value: "IS_SHOW_MODAL".to_string()
        }
    );
    assert!(host
        .events()
        .iter()
        .any(|e| e.starts_with("warning:") && e.contains("local approximation")));
}

#[tokio::test]
async fn test_preset_phrase_without_copy() {
    let host = ScriptedHost::default().picking(4);
    let translator = CannedTranslator::new(model_answer);
    let options = CommandOptions {
        phrase: Some("用户列表".to_string()),
        copy: false,
    };

    let outcome = run_command(&host, &translator, &en(), options).await;

    assert_eq!(
        outcome,
        Outcome::Picked {
            format: NamingFormat::Kebab,
            value: "user-list".to_string()
        }
    );
    assert!(!host.events().contains(&"prompt".to_string()));
    assert!(host.clipboard.borrow().is_none());
}

#[tokio::test]
async fn test_chinese_messages() {
    let host = ScriptedHost::typing("用户");
    let translator = CannedTranslator::new(rate_limited);

    let outcome = run_command(&host, &translator, &Messages::from_locale("zh"), interactive()).await;

    let Outcome::Failed(message) = outcome else {
        panic!("expected failure");
    };
    assert!(message.starts_with("翻译失败: "));
}

/// Log sink shared with the subscriber under test.
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Subscriber configured like the binary's default: WARN and up to one sink.
fn warn_subscriber(log: &CapturedLog) -> impl tracing::Subscriber + Send + Sync {
    let sink = log.clone();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_ansi(false)
        .with_writer(move || sink.clone())
        .finish()
}

fn free_text_answer(phrase: &str) -> Result<Translation, VarNameError> {
    Ok(parse_content("Sure! Here are some names for you.", phrase))
}

#[tokio::test]
async fn test_surfaced_error_is_not_logged_again_at_default_level() {
    let log = CapturedLog::default();
    let _guard = tracing::subscriber::set_default(warn_subscriber(&log));
    tracing::warn!("sink check");
    assert!(log.contents().contains("sink check"));
    let before = log.contents();

    let host = ScriptedHost::typing("用户").picking(0);
    let translator = CannedTranslator::new(rate_limited);
    run_command(&host, &translator, &en(), interactive()).await;

    assert_eq!(log.contents(), before);
    let errors = host
        .events()
        .into_iter()
        .filter(|e| e.starts_with("error:"))
        .count();
    assert_eq!(errors, 1);
}

#[tokio::test]
async fn test_fallback_notice_is_not_logged_again_at_default_level() {
    let log = CapturedLog::default();
    let _guard = tracing::subscriber::set_default(warn_subscriber(&log));

    let host = ScriptedHost::typing("用户列表").picking(0);
    let translator = CannedTranslator::new(free_text_answer);
    let outcome = run_command(&host, &translator, &en(), interactive()).await;

    assert!(matches!(outcome, Outcome::Copied { .. }));
    assert!(log.contents().is_empty());
    let warnings: Vec<String> = host
        .events()
        .into_iter()
        .filter(|e| e.starts_with("warning:"))
        .collect();
    assert_eq!(warnings, [format!("warning:{}", en().fallback_notice)]);
}
