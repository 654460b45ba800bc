use clap::Args;
use serde_json::json;

use super::{open_session, TableArgs};
use crate::cli::utils::{print_options, print_table};
use crate::cli::{Connection, OutputFormat};

#[derive(Args, Debug)]
pub struct ViewArgs {
    #[command(flatten)]
    pub table: TableArgs,
}

pub async fn handle(args: ViewArgs, connection: &Connection, output_format: OutputFormat) -> anyhow::Result<()> {
    let Some(session) = open_session(connection, &args.table).await? else {
        return Ok(());
    };
    let Some(view) = session.view() else {
        return Ok(());
    };
    let page = session.current_page();

    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "user": session.auth().display_name(),
                    "state": session.view_state(),
                    "page": page,
                    "total_pages": view.total_pages,
                    "filtered_count": view.filtered_count,
                    "rows": view.rows,
                    "options": session.options(),
                    "error": session.error().map(|e| e.to_string()),
                }))?
            );
        }
        OutputFormat::Text => {
            if let Some(name) = session.auth().display_name() {
                println!("Signed in as {}", name);
            }
            if let Some(err) = session.error() {
                eprintln!("Warning: {}", err);
            }
            if view.filtered_count == 0 {
                println!("No projects match the current filters.");
            } else {
                print_table(&view.rows);
                println!(
                    "Page {} of {} ({} matching of {} projects)",
                    page,
                    view.total_pages,
                    view.filtered_count,
                    session.projects().len()
                );
            }
            if let Some(options) = session.options() {
                print_options(options);
            }
        }
    }
    Ok(())
}
