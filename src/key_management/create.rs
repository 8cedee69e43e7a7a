use anyhow::Result;

use crate::cli::CreateKeyArgs;
use crate::config::Config;
use crate::key_management::service::build_view;
use crate::view::ActionOutcome;

/// Create a key through the create form, then print the refreshed list
pub async fn create_key(config: &Config, args: CreateKeyArgs) -> Result<ActionOutcome> {
    let mut view = build_view(config)?;

    view.open_create_form();
    view.set_key_name(args.name);
    let outcome = view.handle_create().await;

    if outcome == ActionOutcome::Completed {
        print!("{}", view.render());
    }
    Ok(outcome)
}
