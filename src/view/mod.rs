//! The key list: local state that is reloaded from the key service after
//! every successful mutation, plus its text rendering.

pub mod render;

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

use crate::audit::{ActionAuditEntry, AuditLogger};
use crate::client::KeyService;
use crate::clipboard::Clipboard;
use crate::config::DisplayConfig;
use crate::confirm::Confirmer;
use crate::constants::DELETE_CONFIRMATION;
use crate::errors::ConsoleError;
use crate::models::ApiKey;
use crate::notify::{report_failure, report_success, Action, Notifier};

pub use render::StatusBadge;

/// Result of a user action. Failures have already been reported to the
/// notifier when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    Failed,
    /// The user declined the confirmation
    Cancelled,
    /// Refused before any request was made
    Rejected,
}

impl ActionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ActionOutcome::Completed | ActionOutcome::Cancelled)
    }
}

pub struct KeyListView {
    service: Arc<dyn KeyService>,
    notifier: Arc<dyn Notifier>,
    clipboard: Arc<dyn Clipboard>,
    audit: Option<Arc<AuditLogger>>,
    display: DisplayConfig,

    keys: Vec<ApiKey>,
    loading: bool,
    show_modal: bool,
    key_name: String,
}

impl KeyListView {
    pub fn new(
        service: Arc<dyn KeyService>,
        notifier: Arc<dyn Notifier>,
        clipboard: Arc<dyn Clipboard>,
        display: DisplayConfig,
    ) -> Self {
        Self {
            service,
            notifier,
            clipboard,
            audit: None,
            display,
            keys: Vec::new(),
            loading: true,
            show_modal: false,
            key_name: String::new(),
        }
    }

    pub fn with_audit(mut self, audit: Arc<AuditLogger>) -> Self {
        self.audit = Some(audit);
        self
    }

    pub fn keys(&self) -> &[ApiKey] {
        &self.keys
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_create_form_open(&self) -> bool {
        self.show_modal
    }

    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    pub fn find_key(&self, id: &str) -> Option<&ApiKey> {
        self.keys.iter().find(|k| k.id == id)
    }

    pub fn open_create_form(&mut self) {
        self.show_modal = true;
    }

    pub fn close_create_form(&mut self) {
        self.show_modal = false;
    }

    pub fn set_key_name(&mut self, name: impl Into<String>) {
        self.key_name = name.into();
    }

    /// Replace the list with the backend's current one. On failure the
    /// previous list is kept.
    pub async fn fetch_keys(&mut self) -> ActionOutcome {
        self.loading = true;
        let result = self.service.list_keys().await;
        self.loading = false;

        match result {
            Ok(keys) => {
                debug!("Fetched {} API keys", keys.len());
                self.keys = keys;
                ActionOutcome::Completed
            }
            Err(e) => {
                report_failure(self.notifier.as_ref(), Action::Fetch, &e);
                ActionOutcome::Failed
            }
        }
    }

    /// Submit the create form with the current key name
    pub async fn handle_create(&mut self) -> ActionOutcome {
        let name = self.key_name.clone();
        if name.is_empty() {
            warn!("Key name is required");
            return ActionOutcome::Rejected;
        }

        let start = Instant::now();
        let result = self.service.create_key(&name).await;
        let entry = ActionAuditEntry::new(Action::Create, start).with_key_name(&name);
        let outcome = self.finish(Action::Create, entry, result).await;

        if outcome == ActionOutcome::Completed {
            self.show_modal = false;
            self.key_name.clear();
            self.fetch_keys().await;
        }
        outcome
    }

    pub async fn handle_delete(&mut self, id: &str, confirmer: &dyn Confirmer) -> ActionOutcome {
        if !confirmer.confirm(DELETE_CONFIRMATION) {
            debug!("Deletion of key {} cancelled", id);
            return ActionOutcome::Cancelled;
        }

        let start = Instant::now();
        let result = self.service.delete_key(id).await;
        let entry = ActionAuditEntry::new(Action::Delete, start).with_key_id(id);
        let outcome = self.finish(Action::Delete, entry, result).await;

        if outcome == ActionOutcome::Completed {
            self.fetch_keys().await;
        }
        outcome
    }

    /// Flip a key's status. The new status is only shown once refetched.
    pub async fn handle_toggle(&mut self, id: &str) -> ActionOutcome {
        let start = Instant::now();
        let result = self.service.toggle_key(id).await;
        let entry = ActionAuditEntry::new(Action::Toggle, start).with_key_id(id);
        let outcome = self.finish(Action::Toggle, entry, result).await;

        if outcome == ActionOutcome::Completed {
            self.fetch_keys().await;
        }
        outcome
    }

    /// Write `text` to the clipboard. Clipboard failures are not reported.
    pub async fn copy_to_clipboard(&self, text: &str) {
        if let Err(e) = self.clipboard.write_text(text).await {
            debug!("Clipboard write failed: {}", e);
        }
        report_success(self.notifier.as_ref(), Action::Copy);
    }

    /// Copy the full secret of a key from the current list
    pub async fn copy_key(&self, id: &str) -> ActionOutcome {
        match self.find_key(id) {
            Some(key) => {
                self.copy_to_clipboard(key.key.expose()).await;
                ActionOutcome::Completed
            }
            None => {
                let err = ConsoleError::InvalidInput(format!("No API key with id '{id}'"));
                report_failure(self.notifier.as_ref(), Action::Copy, &err);
                ActionOutcome::Rejected
            }
        }
    }

    pub fn render(&self) -> String {
        render::render(self)
    }

    /// Report the result of a mutating call and journal it
    async fn finish(
        &self,
        action: Action,
        mut entry: ActionAuditEntry,
        result: Result<(), ConsoleError>,
    ) -> ActionOutcome {
        let outcome = match &result {
            Ok(()) => {
                entry.set_success(true);
                report_success(self.notifier.as_ref(), action);
                ActionOutcome::Completed
            }
            Err(e) => {
                entry.set_error(e.to_string());
                report_failure(self.notifier.as_ref(), action, e);
                ActionOutcome::Failed
            }
        };

        if let Some(audit) = &self.audit {
            if let Err(e) = audit.log(&entry).await {
                warn!("⚠️  Failed to write audit entry: {}", e);
            }
        }
        outcome
    }
}
