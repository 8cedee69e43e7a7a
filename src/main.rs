use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use apikey_console::constants::NOTIFY_TARGET;
use apikey_console::key_management;
use apikey_console::{ActionOutcome, AuthCommands, Cli, Commands, Config, KeysCommands};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(outcome) if outcome.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            // Logging may not be initialized yet
            eprintln!("❌ {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ActionOutcome> {
    // Load configuration
    let config = Config::load(&cli.connect)?;

    // Initialize logging
    init_logging(&config.logging.level)?;
    debug!("Starting apikey-console v{}", env!("CARGO_PKG_VERSION"));

    // Validate configuration
    config.validate()?;

    match cli.command {
        Commands::Keys { command } => match command {
            KeysCommands::List => key_management::list_keys(&config).await,
            KeysCommands::Create(args) => key_management::create_key(&config, args).await,
            KeysCommands::Delete(args) => key_management::delete_key(&config, args).await,
            KeysCommands::Toggle(args) => key_management::toggle_key(&config, args).await,
            KeysCommands::Copy(args) => key_management::copy_key(&config, args).await,
        },
        Commands::Shell => key_management::run_shell(&config).await,
        Commands::Auth { command } => {
            match command {
                AuthCommands::Login => key_management::login(&config, cli.connect.token)?,
                AuthCommands::Logout => key_management::logout(&config)?,
            }
            Ok(ActionOutcome::Completed)
        }
    }
}

/// Notifications always pass the filter, whatever the configured level
fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)?.add_directive(format!("{NOTIFY_TARGET}=info").parse()?);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
