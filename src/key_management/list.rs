use anyhow::Result;

use crate::config::Config;
use crate::key_management::service::mount;
use crate::view::ActionOutcome;

/// Fetch and print the key list
pub async fn list_keys(config: &Config) -> Result<ActionOutcome> {
    let (view, outcome) = mount(config).await?;
    print!("{}", view.render());
    Ok(outcome)
}
