use chrono::format::{Item, StrftimeItems};
use reqwest::Url;
use tracing::warn;

use super::types::Config;
use crate::errors::ConsoleError;

impl Config {
    /// Validate the configuration settings
    pub fn validate(&self) -> Result<(), ConsoleError> {
        self.validate_server()?;
        self.validate_display()?;
        self.validate_clipboard()?;
        self.validate_audit()?;

        Ok(())
    }

    /// Validate server configuration
    fn validate_server(&self) -> Result<(), ConsoleError> {
        let url = Url::parse(&self.server.base_url).map_err(|e| {
            ConsoleError::Config(format!("Invalid base URL '{}': {e}", self.server.base_url))
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ConsoleError::Config(format!(
                    "Unsupported URL scheme '{other}': use http or https"
                )))
            }
        }

        if self.server.timeout_secs == Some(0) {
            return Err(ConsoleError::Config(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }

        let local = matches!(
            url.host_str(),
            Some("localhost") | Some("127.0.0.1") | Some("[::1]")
        );
        if url.scheme() == "http" && !local && self.auth.token.is_some() {
            warn!("⚠️  SECURITY WARNING: Sending an access token over plain HTTP");
            warn!("⚠️  Consider using an https:// base URL");
        }

        Ok(())
    }

    fn validate_display(&self) -> Result<(), ConsoleError> {
        if self.display.key_preview_len == 0 {
            return Err(ConsoleError::Config(
                "key_preview_len must be greater than 0".to_string(),
            ));
        }
        if self.display.date_format.trim().is_empty() {
            return Err(ConsoleError::Config("date_format cannot be empty".to_string()));
        }
        if StrftimeItems::new(&self.display.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConsoleError::Config(format!(
                "Invalid date_format '{}'",
                self.display.date_format
            )));
        }
        Ok(())
    }

    fn validate_clipboard(&self) -> Result<(), ConsoleError> {
        match self.clipboard.backend.as_str() {
            "osc52" => Ok(()),
            "command" => match self.clipboard.command.as_deref().map(str::trim) {
                Some(command) if !command.is_empty() => Ok(()),
                _ => Err(ConsoleError::Config(
                    "Clipboard command is required for command backend".to_string(),
                )),
            },
            other => Err(ConsoleError::Config(format!(
                "Unknown clipboard backend: '{other}'"
            ))),
        }
    }

    fn validate_audit(&self) -> Result<(), ConsoleError> {
        if self.audit.enabled && self.audit.log_path.is_none() {
            return Err(ConsoleError::Config(
                "Audit log path is required when audit logging is enabled".to_string(),
            ));
        }
        Ok(())
    }
}
