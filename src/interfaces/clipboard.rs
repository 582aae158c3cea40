//! System clipboard access.
//!
//! On Linux the selection only lives as long as the process that owns it, so
//! the text is handed to a detached `varname --serve-clipboard` child. The
//! child takes ownership, acknowledges on stdout, then keeps serving until
//! another application replaces the clipboard. Elsewhere the OS keeps the
//! contents after exit and a plain write is enough.

use crate::domain::error::VarNameError;
use std::io::BufRead;

/// Hidden flag that turns the binary into a clipboard server.
pub const SERVE_FLAG: &str = "--serve-clipboard";

const READY: &str = "ready";

fn clipboard_error(e: impl std::fmt::Display) -> VarNameError {
    VarNameError::Clipboard(e.to_string())
}

#[cfg(not(target_os = "linux"))]
pub fn copy(text: &str) -> Result<(), VarNameError> {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text))
        .map_err(clipboard_error)
}

#[cfg(target_os = "linux")]
pub fn copy(text: &str) -> Result<(), VarNameError> {
    use std::io::{BufReader, Write};
    use std::process::{Command, Stdio};

    let exe = std::env::current_exe().map_err(clipboard_error)?;
    let mut child = Command::new(exe)
        .arg(SERVE_FLAG)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(clipboard_error)?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(clipboard_error)?;
    }

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| clipboard_error("clipboard helper has no stdout"))?;
    let acked = read_ack(BufReader::new(stdout));
    if acked.is_err() {
        let _ = child.kill();
        let _ = child.wait();
    }
    acked
}

/// Entry point of the `--serve-clipboard` child: read the text from stdin,
/// take the clipboard, report on stdout, then serve until replaced.
#[cfg(target_os = "linux")]
pub fn serve_from_stdin() -> Result<(), VarNameError> {
    use arboard::SetExtLinux;
    use std::io::{Read, Write};

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;

    let mut stdout = std::io::stdout();
    let owned = arboard::Clipboard::new().and_then(|mut clipboard| {
        clipboard.set_text(text.as_str())?;
        Ok(clipboard)
    });
    let mut clipboard = match owned {
        Ok(clipboard) => clipboard,
        Err(e) => {
            writeln!(stdout, "error {}", e)?;
            return Ok(());
        }
    };
    writeln!(stdout, "{}", READY)?;
    stdout.flush()?;
    drop(stdout);

    clipboard.set().wait().text(text).map_err(clipboard_error)
}

#[cfg(not(target_os = "linux"))]
pub fn serve_from_stdin() -> Result<(), VarNameError> {
    use std::io::Read;

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    copy(&text)
}

/// Wait for the server's first line. Only `ready` counts as copied.
pub fn read_ack<R: BufRead>(mut reader: R) -> Result<(), VarNameError> {
    let mut line = String::new();
    reader.read_line(&mut line).map_err(clipboard_error)?;
    let line = line.trim();

    if line == READY {
        return Ok(());
    }
    match line.strip_prefix("error ") {
        Some(reason) => Err(clipboard_error(reason)),
        None if line.is_empty() => Err(clipboard_error("clipboard helper exited early")),
        None => Err(clipboard_error(format!("unexpected reply: {}", line))),
    }
}
