//! CLI entry and dispatch.

use anyhow::{Context, Result};
use authtour_core::config::Config;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "authtour")]
#[command(version = "0.1")]
#[command(about = "Email authentication tutorial and live demo")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Create an account (sends a verification code to the address)
    Signup {
        /// Email address to register
        #[arg(long)]
        email: String,

        /// Password (prompted interactively when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Confirm the verification code sent to an address
    Verify {
        /// Email address being verified
        #[arg(long)]
        email: String,

        /// The verification code from the email
        #[arg(long)]
        code: String,
    },

    /// Log in and store the access token
    Login {
        /// Email address of the account
        #[arg(long)]
        email: String,

        /// Password (prompted interactively when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Clear the stored access token (no backend call)
    Logout,

    /// Show the dashboard greeting for the stored session
    Whoami,

    /// List registered users (demo-only endpoint)
    Users,

    /// Probe the backend health endpoint
    Health,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Persist the backend base URL to the config file
    SetUrl {
        /// Base URL of the authentication backend
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _guard = crate::logging::init()?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;

    // default to the interactive demo
    let Some(command) = cli.command else {
        return commands::demo::run(&config).await;
    };

    match command {
        Commands::Signup { email, password } => {
            commands::auth::signup(&config, &email, password).await
        }
        Commands::Verify { email, code } => commands::auth::verify(&config, &email, &code).await,
        Commands::Login { email, password } => {
            commands::auth::login(&config, &email, password).await
        }
        Commands::Logout => commands::auth::logout(),
        Commands::Whoami => commands::auth::whoami(&config).await,

        Commands::Users => commands::users::list(&config).await,
        Commands::Health => commands::health::check(&config).await,

        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::SetUrl { url } => commands::config::set_url(&url),
        },
    }
}
