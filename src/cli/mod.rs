use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "apikey-console")]
#[command(about = "Manage the API keys of an API Management System from the terminal")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub connect: ConnectArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// API key management commands
    Keys {
        #[command(subcommand)]
        command: KeysCommands,
    },
    /// Interactive session over the key list
    Shell,
    /// Access token management
    Auth {
        #[command(subcommand)]
        command: AuthCommands,
    },
}

#[derive(Subcommand)]
pub enum KeysCommands {
    /// List all API keys
    List,
    /// Create a new API key
    Create(CreateKeyArgs),
    /// Delete an API key
    Delete(DeleteKeyArgs),
    /// Toggle an API key between active and inactive
    Toggle(KeyIdArgs),
    /// Copy the full secret of an API key to the clipboard
    Copy(KeyIdArgs),
}

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Store an access token in the OS keyring (prompted unless --token is given)
    Login,
    /// Remove the stored access token from the OS keyring
    Logout,
}

/// Connection and output settings shared by every command
#[derive(Args, Clone, Default)]
pub struct ConnectArgs {
    /// Configuration file path
    #[arg(short, long, global = true, env = "APIKEY_CONSOLE_CONFIG")]
    pub config: Option<String>,

    /// Backend base URL
    #[arg(long, global = true, env = "APIKEY_CONSOLE_URL")]
    pub base_url: Option<String>,

    /// Bearer token for the backend
    /// Setting this via CLI argument is NOT recommended for security
    #[arg(long, global = true, env = "APIKEY_CONSOLE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Keyring profile the token is stored under
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Log level
    #[arg(long, global = true, env = "RUST_LOG")]
    pub log_level: Option<String>,
}

#[derive(Args)]
pub struct CreateKeyArgs {
    /// Key name (like "Production Key")
    pub name: String,
}

#[derive(Args)]
pub struct DeleteKeyArgs {
    /// Id of the key to delete
    pub id: String,

    /// Confirm deletion without prompting
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Args)]
pub struct KeyIdArgs {
    /// Key id
    pub id: String,
}
