/// Backend routes, relative to the configured base URL
pub mod routes {
    pub const KEYS: [&str; 2] = ["api", "keys"];
    pub const TOGGLE: &str = "toggle";
}

/// Defaults used when neither CLI nor config file provide a value
pub mod defaults {
    pub const BASE_URL: &str = "http://localhost:5000";
    pub const KEY_PREVIEW_LEN: usize = 20;
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
    pub const LOG_LEVEL: &str = "info";
    pub const PROFILE: &str = "default";
    pub const CLIPBOARD_BACKEND: &str = "osc52";
}

/// OS keyring service under which access tokens are stored
pub const KEYRING_SERVICE: &str = "apikey-console";

/// Tracing target used for user-facing notifications
pub const NOTIFY_TARGET: &str = "apikey_console::notify";

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this API key?";
pub const EMPTY_STATE: &str = "No API keys found. Create your first API key to get started!";
pub const LOADING: &str = "Loading...";
