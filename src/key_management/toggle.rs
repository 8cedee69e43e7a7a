use anyhow::Result;

use crate::cli::KeyIdArgs;
use crate::config::Config;
use crate::key_management::service::build_view;
use crate::view::ActionOutcome;

/// Flip a key's status, then print the refreshed list
pub async fn toggle_key(config: &Config, args: KeyIdArgs) -> Result<ActionOutcome> {
    let mut view = build_view(config)?;

    let outcome = view.handle_toggle(&args.id).await;
    if outcome == ActionOutcome::Completed {
        print!("{}", view.render());
    }
    Ok(outcome)
}
