use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::audit::AuditLogger;
use crate::client::HttpKeyService;
use crate::clipboard;
use crate::config::Config;
use crate::credentials::resolve_token;
use crate::notify::TracingNotifier;
use crate::view::{ActionOutcome, KeyListView};

/// Wire a key list view to the configured backend, clipboard and journal
pub fn build_view(config: &Config) -> Result<KeyListView> {
    let token = resolve_token(config);
    if token.is_none() {
        info!("🔓 No access token configured; requests are sent unauthenticated");
    }

    let timeout = config.server.timeout_secs.map(Duration::from_secs);
    let service = HttpKeyService::new(&config.server.base_url, token, timeout)?;
    debug!("Using backend {}", service.base_url());

    let clipboard = clipboard::from_config(&config.clipboard)?;

    let mut view = KeyListView::new(
        Arc::new(service),
        Arc::new(TracingNotifier),
        Arc::from(clipboard),
        config.display.clone(),
    );

    if config.audit.enabled {
        if let Some(path) = &config.audit.log_path {
            info!("📝 Audit logging enabled: {}", path);
            view = view.with_audit(Arc::new(AuditLogger::new(path)?));
        }
    }

    Ok(view)
}

/// Build the view and load the list, as when the page is first shown
pub async fn mount(config: &Config) -> Result<(KeyListView, ActionOutcome)> {
    let mut view = build_view(config)?;
    let outcome = view.fetch_keys().await;
    Ok((view, outcome))
}
