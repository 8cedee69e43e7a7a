pub mod prompt;
pub mod secure_string;

pub use prompt::{get_token_securely, is_affirmative, prompt_for_token, read_line};
pub use secure_string::SecureString;
