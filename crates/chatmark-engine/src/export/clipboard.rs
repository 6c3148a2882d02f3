use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use super::ExportError;

/// Somewhere text can be copied to.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ExportError>;
}

/// A clipboard program that reads the text to copy from stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl ClipboardCommand {
    /// Tried in order; the first one installed wins.
    pub const DEFAULTS: [ClipboardCommand; 5] = [
        ClipboardCommand {
            program: "wl-copy",
            args: &[],
        },
        ClipboardCommand {
            program: "xclip",
            args: &["-selection", "clipboard"],
        },
        ClipboardCommand {
            program: "xsel",
            args: &["--clipboard", "--input"],
        },
        ClipboardCommand {
            program: "pbcopy",
            args: &[],
        },
        ClipboardCommand {
            program: "clip.exe",
            args: &[],
        },
    ];

    fn pipe(&self, text: &str) -> Result<(), ExportError> {
        let spawn_err = |source| ExportError::Spawn {
            program: self.program,
            source,
        };

        let mut child = Command::new(self.program)
            .args(self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(spawn_err)?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).map_err(spawn_err)?;
        }

        let status = child.wait().map_err(spawn_err)?;
        if status.success() {
            Ok(())
        } else {
            Err(ExportError::Status {
                program: self.program,
                status,
            })
        }
    }
}

/// The desktop clipboard, reached through whichever clipboard command exists.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    commands: Vec<ClipboardCommand>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::with_commands(ClipboardCommand::DEFAULTS.to_vec())
    }

    pub fn with_commands(commands: Vec<ClipboardCommand>) -> Self {
        Self { commands }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ExportError> {
        let mut last_err = None;
        for command in &self.commands {
            match command.pipe(text) {
                Ok(()) => {
                    log::debug!("copied {} bytes with {}", text.len(), command.program);
                    return Ok(());
                }
                Err(ExportError::Spawn { source, .. }) if source.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    log::debug!("clipboard command failed: {e}");
                    last_err = Some(e);
                }
            }
        }
        Err(last_err.unwrap_or(ExportError::NoClipboard))
    }
}

/// Which path a successful copy took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Primary,
    Fallback,
}

/// Copies with `primary`, then `fallback` if that fails.
///
/// Only fails when both paths fail.
pub fn copy_with_fallback(
    text: &str,
    primary: &mut dyn Clipboard,
    fallback: &mut dyn Clipboard,
) -> Result<CopyOutcome, ExportError> {
    let primary_err = match primary.set_text(text) {
        Ok(()) => return Ok(CopyOutcome::Primary),
        Err(e) => e,
    };
    log::warn!("Clipboard copy failed, using fallback: {primary_err}");

    fallback
        .set_text(text)
        .map(|()| CopyOutcome::Fallback)
        .map_err(|fallback_err| ExportError::CopyFailed {
            primary: Box::new(primary_err),
            fallback: Box::new(fallback_err),
        })
}
