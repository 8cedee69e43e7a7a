use tracing::{debug, info};

use crate::config::Config;
use crate::constants::KEYRING_SERVICE;
use crate::errors::ConsoleError;
use crate::utils::SecureString;

/// Access token storage in the OS keyring. Service is always
/// "apikey-console", the account is the profile name.
pub struct TokenStore {
    profile: String,
}

impl TokenStore {
    pub fn new(profile: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
        }
    }

    pub fn store(&self, token: &SecureString) -> Result<(), ConsoleError> {
        if token.is_empty() {
            return Err(ConsoleError::InvalidInput(
                "Access token cannot be empty".to_string(),
            ));
        }

        #[cfg(any(target_os = "linux", target_os = "macos"))]
        {
            let entry = self.entry()?;
            entry.set_password(token.expose()).map_err(|e| {
                ConsoleError::Credentials(format!("Failed to store token in keyring: {e}"))
            })?;
            info!("✅ Stored access token for profile '{}' in OS keyring", self.profile);
            Ok(())
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            Err(Self::unsupported())
        }
    }

    /// `Ok(None)` when no token is stored for the profile
    pub fn load(&self) -> Result<Option<SecureString>, ConsoleError> {
        #[cfg(any(target_os = "linux", target_os = "macos"))]
        {
            let entry = self.entry()?;
            match entry.get_password() {
                Ok(token) if token.is_empty() => Ok(None),
                Ok(token) => Ok(Some(SecureString::new(token))),
                Err(keyring::Error::NoEntry) => Ok(None),
                Err(e) => Err(ConsoleError::Credentials(format!(
                    "Failed to load token from keyring: {e}"
                ))),
            }
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            Err(Self::unsupported())
        }
    }

    /// Returns whether a token was removed
    pub fn delete(&self) -> Result<bool, ConsoleError> {
        #[cfg(any(target_os = "linux", target_os = "macos"))]
        {
            let entry = self.entry()?;
            match entry.delete_credential() {
                Ok(()) => {
                    info!("🗑️  Removed access token for profile '{}'", self.profile);
                    Ok(true)
                }
                Err(keyring::Error::NoEntry) => Ok(false),
                Err(e) => Err(ConsoleError::Credentials(format!(
                    "Failed to delete token from keyring: {e}"
                ))),
            }
        }

        #[cfg(not(any(target_os = "linux", target_os = "macos")))]
        {
            Err(Self::unsupported())
        }
    }

    #[cfg(any(target_os = "linux", target_os = "macos"))]
    fn entry(&self) -> Result<keyring::Entry, ConsoleError> {
        keyring::Entry::new(KEYRING_SERVICE, &self.profile).map_err(|e| {
            ConsoleError::Credentials(format!("Failed to create keyring entry: {e}"))
        })
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    fn unsupported() -> ConsoleError {
        ConsoleError::Config("OS keyring is only supported on Linux and macOS".to_string())
    }
}

/// Pick the bearer token: CLI/env, then config file, then the keyring.
/// A keyring that cannot be reached is treated as holding no token.
pub fn resolve_token(config: &Config) -> Option<SecureString> {
    if let Some(token) = config.auth.token.as_deref().filter(|t| !t.is_empty()) {
        return Some(SecureString::from(token));
    }

    match TokenStore::new(config.auth.profile.as_str()).load() {
        Ok(token) => {
            if token.is_none() {
                debug!("No stored token for profile '{}'", config.auth.profile);
            }
            token
        }
        Err(e) => {
            debug!("Keyring lookup skipped: {}", e);
            None
        }
    }
}
