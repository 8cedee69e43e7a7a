use tracing::{debug, error, info};

use crate::constants::NOTIFY_TARGET;
use crate::errors::ConsoleError;

/// Sink for transient user-facing messages. Fire-and-forget.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// User actions on the key list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fetch,
    Create,
    Delete,
    Toggle,
    Copy,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Fetch => "fetch",
            Action::Create => "create",
            Action::Delete => "delete",
            Action::Toggle => "toggle",
            Action::Copy => "copy",
        }
    }

    pub fn success_message(&self) -> Option<&'static str> {
        match self {
            Action::Fetch => None,
            Action::Create => Some("API key created successfully"),
            Action::Delete => Some("API key deleted successfully"),
            Action::Toggle => Some("API key status updated"),
            Action::Copy => Some("API key copied to clipboard"),
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Action::Fetch => "Failed to fetch API keys",
            Action::Create => "Failed to create API key",
            Action::Delete => "Failed to delete API key",
            Action::Toggle => "Failed to update API key",
            Action::Copy => "Failed to copy API key",
        }
    }
}

/// The one place a failed action becomes a notification. The underlying
/// error only goes to the debug log.
pub fn report_failure(notifier: &dyn Notifier, action: Action, err: &ConsoleError) {
    debug!(action = action.as_str(), status = ?err.status(), "{}", err);
    notifier.error(action.failure_message());
}

pub fn report_success(notifier: &dyn Notifier, action: Action) {
    if let Some(message) = action.success_message() {
        notifier.success(message);
    }
}

/// Writes notifications to the log under the notify target
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(target: NOTIFY_TARGET, "✅ {}", message);
    }

    fn error(&self, message: &str) {
        error!(target: NOTIFY_TARGET, "❌ {}", message);
    }
}


#[cfg(test)]
mod tests {
    use super::mock::{Notification, RecordingNotifier};
    use super::*;

    #[test]
    fn test_failure_mapping_hides_error_details() {
        let notifier = RecordingNotifier::new();
        let err = ConsoleError::Request {
            status: Some(500),
            message: "HTTP 500: Internal server error".to_string(),
        };

        report_failure(&notifier, Action::Toggle, &err);

        assert_eq!(
            notifier.events(),
            vec![Notification::Error("Failed to update API key".to_string())]
        );
    }

    #[test]
    fn test_fetch_success_is_silent() {
        let notifier = RecordingNotifier::new();
        report_success(&notifier, Action::Fetch);
        report_success(&notifier, Action::Create);
        assert_eq!(
            notifier.successes(),
            vec!["API key created successfully".to_string()]
        );
    }
}
