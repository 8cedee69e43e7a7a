use anyhow::Result;
use tracing::info;

use crate::cli::DeleteKeyArgs;
use crate::config::Config;
use crate::confirm::{Confirmer, PresetConfirmer, PromptConfirmer};
use crate::key_management::service::build_view;
use crate::view::ActionOutcome;

/// Delete a key after confirmation, then print the refreshed list
pub async fn delete_key(config: &Config, args: DeleteKeyArgs) -> Result<ActionOutcome> {
    let mut view = build_view(config)?;

    let confirmer: Box<dyn Confirmer> = if args.confirm {
        Box::new(PresetConfirmer(true))
    } else {
        Box::new(PromptConfirmer)
    };

    let outcome = view.handle_delete(&args.id, confirmer.as_ref()).await;
    match outcome {
        ActionOutcome::Completed => print!("{}", view.render()),
        ActionOutcome::Cancelled => info!("Deletion of key '{}' cancelled", args.id),
        _ => {}
    }
    Ok(outcome)
}
