use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io::Write;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::config::ClipboardConfig;
use crate::errors::ConsoleError;

/// Platform clipboard write
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ConsoleError>;
}

/// Sets the clipboard through the terminal with an OSC 52 escape sequence
#[derive(Debug, Default)]
pub struct Osc52Clipboard;

impl Osc52Clipboard {
    pub fn sequence(text: &str) -> String {
        format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
    }
}

#[async_trait]
impl Clipboard for Osc52Clipboard {
    async fn write_text(&self, text: &str) -> Result<(), ConsoleError> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(Self::sequence(text).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Pipes the text into an external program such as `wl-copy` or `pbcopy`
#[derive(Debug)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Split a command line like `xclip -selection clipboard` on whitespace
    pub fn from_command_line(command: &str) -> Result<Self, ConsoleError> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| ConsoleError::Config("Clipboard command is empty".to_string()))?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ConsoleError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ConsoleError::Clipboard(format!("Failed to run {}: {e}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            // The exit status below reports a program that quit without reading
            if let Err(e) = stdin.write_all(text.as_bytes()).await {
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(ConsoleError::Clipboard(format!(
                "{} exited with {status}",
                self.program
            )));
        }
        Ok(())
    }
}

/// Build the clipboard backend named in the configuration
pub fn from_config(config: &ClipboardConfig) -> Result<Box<dyn Clipboard>, ConsoleError> {
    match config.backend.as_str() {
        "osc52" => Ok(Box::new(Osc52Clipboard)),
        "command" => {
            let command = config.command.as_deref().ok_or_else(|| {
                ConsoleError::Config("Clipboard command is required for command backend".to_string())
            })?;
            Ok(Box::new(CommandClipboard::from_command_line(command)?))
        }
        other => Err(ConsoleError::Config(format!(
            "Unknown clipboard backend: '{other}'. Supported backends: osc52, command"
        ))),
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    pub struct RecordingClipboard {
        contents: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl RecordingClipboard {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn writes(&self) -> Vec<String> {
            self.contents.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Clipboard for RecordingClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ConsoleError> {
            if self.fail {
                return Err(ConsoleError::Clipboard("no clipboard available".to_string()));
            }
            self.contents.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }
}
