pub mod auth;
pub mod copy;
pub mod create;
pub mod delete;
pub mod list;
pub mod service;
pub mod shell;
pub mod toggle;

// Re-export main functions for easier access
pub use auth::{login, logout};
pub use copy::copy_key;
pub use create::create_key;
pub use delete::delete_key;
pub use list::list_keys;
pub use shell::run_shell;
pub use toggle::toggle_key;
