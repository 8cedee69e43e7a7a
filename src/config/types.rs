use serde::{Deserialize, Serialize};

use crate::constants::defaults;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub display: DisplayConfig,
    pub clipboard: ClipboardConfig,
    pub audit: AuditConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Backend root, e.g. "http://localhost:5000"
    pub base_url: String,
    /// Per-request timeout; none means wait indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Bearer token. Prefer the OS keyring (`auth login`) over this.
    pub token: Option<String>,
    /// Keyring account the token is stored under
    pub profile: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: None,
            profile: defaults::PROFILE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Characters of the secret shown in the key column
    pub key_preview_len: usize,
    /// strftime format for the Created column
    pub date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            key_preview_len: defaults::KEY_PREVIEW_LEN,
            date_format: defaults::DATE_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    pub backend: String, // "osc52", "command"
    pub command: Option<String>, // For command backend, e.g. "wl-copy"
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            backend: defaults::CLIPBOARD_BACKEND.to_string(),
            command: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    pub enabled: bool,
    pub log_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
        }
    }
}
