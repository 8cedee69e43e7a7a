use anyhow::Result;
use rpassword::prompt_password;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

use super::SecureString;

/// Securely prompt for an access token without echoing it
pub fn prompt_for_token(prompt_message: &str) -> Result<SecureString> {
    let token = SecureString::new(prompt_password(prompt_message)?);

    if token.is_empty() {
        return Err(anyhow::anyhow!("Access token cannot be empty"));
    }

    info!("✅ Access token received securely");
    Ok(token)
}

/// Take the token from CLI args if present, otherwise prompt for it
pub fn get_token_securely(cli_token: Option<String>, prompt_message: &str) -> Result<SecureString> {
    match cli_token {
        Some(token) => {
            warn!("⚠️  SECURITY WARNING: Access token provided via --token or APIKEY_CONSOLE_TOKEN");
            warn!("⚠️  It may be visible in process lists or shell history");
            warn!("⚠️  Consider omitting --token to use secure prompting instead");

            let token = SecureString::new(token);
            if token.is_empty() {
                return Err(anyhow::anyhow!("Provided access token cannot be empty"));
            }
            Ok(token)
        }
        None => prompt_for_token(prompt_message),
    }
}

/// Print `prompt_message` and read one line from stdin, without the line ending.
/// Returns `None` on end of input.
pub fn read_line(prompt_message: &str) -> Result<Option<String>> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt_message}")?;
    stdout.flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Interpret a yes/no answer. Anything other than an explicit yes is a no.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
