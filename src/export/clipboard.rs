//! Clipboard sinks.

use std::process::Stdio;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::error::{ExportError, ExportResult};

/// Destination for "copy to clipboard".
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn set_text(&self, text: &str) -> ExportResult<()>;
}

/// Pipes text into an external program such as `pbcopy` or
/// `xclip -selection clipboard`.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

/// Candidates tried by [`CommandClipboard::detect`], in order.
const KNOWN_COMMANDS: &[&[&str]] = &[
    &["pbcopy"],
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
    &["clip.exe"],
];

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from a configured `[program, args...]` list.
    pub fn from_command(command: &[String]) -> ExportResult<Self> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| ExportError::ClipboardUnavailable("empty clipboard command".into()))?;
        Ok(Self::new(program.clone(), args.to_vec()))
    }

    /// Find the first known clipboard program on `PATH`.
    pub fn detect() -> ExportResult<Self> {
        for candidate in KNOWN_COMMANDS {
            let program = candidate[0];
            if let Ok(output) = std::process::Command::new("which").arg(program).output() {
                if output.status.success() {
                    let args = candidate[1..].iter().map(|s| s.to_string()).collect();
                    return Ok(Self::new(program, args));
                }
            }
        }
        Err(ExportError::ClipboardUnavailable(
            "no clipboard program found; set export.clipboard_command".into(),
        ))
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn set_text(&self, text: &str) -> ExportResult<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(ExportError::ClipboardFailed)?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(ExportError::ClipboardFailed)?;
        }

        let status = child.wait().await.map_err(ExportError::ClipboardFailed)?;
        if !status.success() {
            return Err(ExportError::ClipboardFailed(std::io::Error::other(format!(
                "{} exited with {}",
                self.program, status
            ))));
        }
        Ok(())
    }
}

/// Keeps the last copied text in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn set_text(&self, text: &str) -> ExportResult<()> {
        *self
            .contents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(text.to_string());
        Ok(())
    }
}
