//! CLI entry and dispatch.

use anyhow::Result;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "infoverify")]
#[command(version)]
#[command(about = "Document intake terminal client with mock sign-in")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Screen to open first: "/", "/auth" or "/PIIDetectionPage"
    #[arg(long, value_name = "PATH", default_value = "/")]
    route: String,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Inspect the stored sign-in state
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Write a default config file
    Init,
}

#[derive(clap::Subcommand)]
enum SessionCommands {
    /// Print whether a signed-in session is stored
    Status,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
        Some(Commands::Session { command }) => match command {
            SessionCommands::Status => commands::session::status(),
        },
        None => commands::ui::run(&cli.route),
    }
}
