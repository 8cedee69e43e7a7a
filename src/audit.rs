use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use crate::errors::ConsoleError;
use crate::notify::Action;

/// One line of the action journal. Never carries key secrets.
#[derive(Debug, Serialize)]
pub struct ActionAuditEntry {
    timestamp: DateTime<Utc>,
    action: &'static str,
    key_id: Option<String>,
    key_name: Option<String>,
    success: bool,
    error: Option<String>,
    duration_ms: u64,
}

impl ActionAuditEntry {
    pub fn new(action: Action, start_time: Instant) -> Self {
        Self {
            timestamp: Utc::now(),
            action: action.as_str(),
            key_id: None,
            key_name: None,
            success: false,
            error: None,
            duration_ms: start_time.elapsed().as_millis() as u64,
        }
    }

    pub fn with_key_id(mut self, id: &str) -> Self {
        self.key_id = Some(id.to_string());
        self
    }

    pub fn with_key_name(mut self, name: &str) -> Self {
        self.key_name = Some(name.to_string());
        self
    }

    pub fn set_success(&mut self, success: bool) {
        self.success = success;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
        self.success = false;
    }
}

/// Appends JSON lines to the journal file
pub struct AuditLogger {
    file: Arc<Mutex<File>>,
}

impl AuditLogger {
    pub fn new(log_path: &str) -> Result<Self, ConsoleError> {
        let path = Path::new(log_path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConsoleError::Config(format!("Failed to create audit log directory: {e}"))
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| ConsoleError::Config(format!("Failed to open audit log file: {e}")))?;

        Ok(Self {
            file: Arc::new(Mutex::new(file)),
        })
    }

    pub async fn log(&self, entry: &ActionAuditEntry) -> Result<(), ConsoleError> {
        let json = serde_json::to_string(entry)?;

        let mut file = self.file.lock().await;
        writeln!(file, "{}", json)?;
        file.flush()?;

        Ok(())
    }
}
