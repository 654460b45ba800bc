pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "dash")]
#[command(about = "Dash - command-line client for the project dashboard")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, env = "DASH_SERVER", default_value = "http://localhost:3000", help = "Dashboard service URL")]
    pub server: String,

    #[arg(long, global = true, env = "DASH_TOKEN", hide_env_values = true, help = "Bearer token from the sign-in provider")]
    pub token: Option<String>,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Mint a development sign-in token from the configured secret")]
    Token(commands::token::TokenArgs),

    #[command(about = "Show one page of the project table")]
    View(commands::view::ViewArgs),

    #[command(about = "Export the filtered and sorted project list to a file")]
    Export(commands::export::ExportArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Where the dashboard service lives and who is asking
#[derive(Debug, Clone)]
pub struct Connection {
    pub server: String,
    pub token: Option<String>,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let connection = Connection {
        server: cli.server,
        token: cli.token,
    };

    match cli.command {
        Commands::Token(args) => commands::token::handle(args, output_format).await,
        Commands::View(args) => commands::view::handle(args, &connection, output_format).await,
        Commands::Export(args) => commands::export::handle(args, &connection, output_format).await,
    }
}
