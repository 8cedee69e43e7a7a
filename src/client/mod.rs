pub mod http;

use async_trait::async_trait;

use crate::errors::ConsoleError;
use crate::models::ApiKey;

pub use http::HttpKeyService;

/// Remote operations on the key collection. The backend is the source of
/// truth; implementations hold no state of their own.
#[async_trait]
pub trait KeyService: Send + Sync {
    async fn list_keys(&self) -> Result<Vec<ApiKey>, ConsoleError>;

    /// The created key in the response is not used by callers
    async fn create_key(&self, name: &str) -> Result<(), ConsoleError>;

    async fn delete_key(&self, id: &str) -> Result<(), ConsoleError>;

    async fn toggle_key(&self, id: &str) -> Result<(), ConsoleError>;
}
