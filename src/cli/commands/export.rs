use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use super::{open_session, TableArgs};
use crate::cli::{Connection, OutputFormat};
use crate::config;
use crate::export::{self, ExportFormat};

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[arg(long, default_value = "csv", help = "csv, json or html")]
    pub format: ExportFormat,

    #[arg(long, default_value = ".", help = "Directory to write the file into")]
    pub out: PathBuf,

    #[command(flatten)]
    pub table: TableArgs,
}

pub async fn handle(args: ExportArgs, connection: &Connection, output_format: OutputFormat) -> anyhow::Result<()> {
    let Some(session) = open_session(connection, &args.table).await? else {
        return Ok(());
    };

    let base = &config::config().export.file_base_name;
    let Some(result) = session.export(args.format, base, export::today()) else {
        match output_format {
            OutputFormat::Json => println!("{}", json!({ "exported": 0 })),
            OutputFormat::Text => println!("Nothing to export: no projects match the current filters."),
        }
        return Ok(());
    };
    let file = result?;

    let path = args.out.join(&file.filename);
    tokio::fs::create_dir_all(&args.out).await?;
    tokio::fs::write(&path, &file.bytes).await?;
    tracing::info!("Wrote {} bytes of {} to {}", file.bytes.len(), file.mime, path.display());

    match output_format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "path": path,
                "mime": file.mime,
                "bytes": file.bytes.len(),
            }))?
        ),
        OutputFormat::Text => println!("Exported to {}", path.display()),
    }
    Ok(())
}
