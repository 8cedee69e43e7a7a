use anyhow::Result;

use crate::cli::KeyIdArgs;
use crate::config::Config;
use crate::key_management::service::mount;
use crate::view::ActionOutcome;

/// Copy the full secret of a key to the clipboard
pub async fn copy_key(config: &Config, args: KeyIdArgs) -> Result<ActionOutcome> {
    let (view, outcome) = mount(config).await?;
    if outcome != ActionOutcome::Completed {
        return Ok(outcome);
    }
    Ok(view.copy_key(&args.id).await)
}
