use clap::Args;
use serde_json::json;

use crate::auth::{generate_jwt, Claims};
use crate::cli::OutputFormat;
use crate::config;

/// Ten years
const MAX_TOKEN_HOURS: u64 = 24 * 365 * 10;

#[derive(Args, Debug)]
pub struct TokenArgs {
    #[arg(help = "Subject (user id) to sign in as")]
    pub sub: String,

    #[arg(long, help = "Display name shown in the dashboard")]
    pub name: Option<String>,

    #[arg(
        long,
        value_parser = clap::value_parser!(u64).range(1..=MAX_TOKEN_HOURS),
        help = "Lifetime in hours (defaults to the configured expiry)"
    )]
    pub hours: Option<u64>,
}

pub async fn handle(args: TokenArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let security = &config::config().security;
    let hours = args.hours.unwrap_or(security.jwt_expiry_hours);
    let claims = Claims::new(args.sub, args.name, hours);
    let token = generate_jwt(&claims, &security.jwt_secret)?;

    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "token": token,
                    "sub": claims.sub,
                    "expires_at": claims.exp,
                }))?
            );
        }
        OutputFormat::Text => println!("{}", token),
    }
    Ok(())
}
