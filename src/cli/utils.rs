use crate::project::{format_date, Project, TextField, NOT_SPECIFIED};
use crate::view::FilterOptions;

const COLUMNS: [(&str, usize); 7] = [
    ("ID", 6),
    ("Project Name", 32),
    ("Location", 20),
    ("Type", 16),
    ("Stage", 16),
    ("Source", 13),
    ("Date Added", 10),
];

/// Shorten to `width` characters, marking the cut with `~`
pub fn truncate(value: &str, width: usize) -> String {
    let count = value.chars().count();
    if count <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('~');
    out
}

fn cells(project: &Project) -> [String; 7] {
    [
        project.id.to_string(),
        project.text(TextField::ProjectName).to_string(),
        project.text(TextField::Location).to_string(),
        project.type_text().to_string(),
        project.stage_text().to_string(),
        project.source_type().label().to_string(),
        format_date(project.date_added.as_deref()).unwrap_or_else(|| NOT_SPECIFIED.to_string()),
    ]
}

fn format_row(values: &[String]) -> String {
    values
        .iter()
        .zip(COLUMNS.iter())
        .map(|(value, (_, width))| format!("{:<width$}", truncate(value, *width), width = width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

pub fn print_table(rows: &[&Project]) {
    let header: Vec<String> = COLUMNS.iter().map(|(name, _)| name.to_string()).collect();
    println!("{}", format_row(&header));
    let rule: Vec<String> = COLUMNS.iter().map(|(_, width)| "-".repeat(*width)).collect();
    println!("{}", format_row(&rule));
    for project in rows {
        println!("{}", format_row(&cells(project)));
    }
}

pub fn print_options(options: &FilterOptions) {
    println!();
    println!("Stages:  {}", options.stages.join(", "));
    println!("Types:   {}", options.types.join(", "));
    println!("Sources: {}", options.sources.join(", "));
}
