use tracing::debug;

use crate::utils::{is_affirmative, read_line};

/// Asks the user to confirm a destructive action
pub trait Confirmer: Send + Sync {
    fn confirm(&self, question: &str) -> bool;
}

/// Asks on the terminal. End of input or a read error counts as "no".
#[derive(Debug, Default)]
pub struct PromptConfirmer;

impl Confirmer for PromptConfirmer {
    fn confirm(&self, question: &str) -> bool {
        match read_line(&format!("{question} [y/N] ")) {
            Ok(Some(answer)) => is_affirmative(&answer),
            Ok(None) => false,
            Err(e) => {
                debug!("Failed to read confirmation: {}", e);
                false
            }
        }
    }
}

/// Answer given up front with `--confirm`
#[derive(Debug, Clone, Copy)]
pub struct PresetConfirmer(pub bool);

impl Confirmer for PresetConfirmer {
    fn confirm(&self, _question: &str) -> bool {
        self.0
    }
}
