use anyhow::Result;
use std::fs;

use super::types::*;
use crate::cli::ConnectArgs;
use crate::errors::ConsoleError;

impl Config {
    /// Load configuration from an optional config file, then apply the
    /// values given explicitly on the command line or in the environment
    pub fn load(cli: &ConnectArgs) -> Result<Self> {
        let config = match &cli.config {
            Some(config_path) => Self::load_from_file(config_path)?,
            None => Self::default(),
        };

        Ok(config.merge_cli_overrides(cli))
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(config_path: &str) -> Result<Self, ConsoleError> {
        let config_content = fs::read_to_string(config_path).map_err(|e| {
            ConsoleError::Config(format!("Failed to read config file {config_path}: {e}"))
        })?;

        Ok(toml::from_str(&config_content)?)
    }

    /// Explicit CLI args override config file values
    fn merge_cli_overrides(mut self, cli: &ConnectArgs) -> Self {
        if let Some(base_url) = &cli.base_url {
            self.server.base_url = base_url.clone();
        }
        if cli.timeout.is_some() {
            self.server.timeout_secs = cli.timeout;
        }
        if cli.token.is_some() {
            self.auth.token = cli.token.clone();
        }
        if let Some(profile) = &cli.profile {
            self.auth.profile = profile.clone();
        }
        if let Some(level) = &cli.log_level {
            self.logging.level = level.clone();
        }
        self
    }
}
