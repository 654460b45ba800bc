use std::fmt::Write;

use chrono::NaiveDate;

use crate::project::{format_date, Project, SourceType, TextField, NOT_SPECIFIED};

const STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 20px; color: #1f2937; }
.header { margin-bottom: 20px; border-bottom: 2px solid #1f2937; padding-bottom: 10px; }
.header h1 { margin: 0 0 6px 0; }
table { width: 100%; border-collapse: collapse; font-size: 12px; }
th, td { border: 1px solid #d1d5db; padding: 6px 8px; text-align: left; vertical-align: top; }
th { background: #f3f4f6; }
.stage-approved { color: #065f46; background: #d1fae5; font-weight: bold; }
.stage-proposed { color: #92400e; background: #fef3c7; font-weight: bold; }
.stage-default { color: #374151; }
@media print { body { margin: 0; } a { color: inherit; } }";

/// Escape text for use in element content and double-quoted attributes
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn is_web_link(link: &str) -> bool {
    url::Url::parse(link)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Link labelled by source type; non-web schemes are shown as the label only
fn source_cell(project: &Project) -> String {
    let link = project.text(TextField::SourceLink).trim();
    match project.source_type() {
        SourceType::NotSpecified => NOT_SPECIFIED.to_string(),
        kind if is_web_link(link) => format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a>",
            escape(link),
            kind.label()
        ),
        kind => kind.label().to_string(),
    }
}

fn row(out: &mut String, project: &Project) {
    let date = format_date(project.date_added.as_deref());
    // Writing into a String cannot fail
    let _ = write!(
        out,
        "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"{}\">{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
        escape(project.text(TextField::ProjectName)),
        escape(project.text(TextField::Location)),
        escape(project.type_text()),
        project.stage_class().report_class(),
        escape(project.stage_text()),
        escape(project.text(TextField::Stakeholders)),
        escape(project.text(TextField::ProjectValue)),
        source_cell(project),
        escape(date.as_deref().unwrap_or(NOT_SPECIFIED)),
    );
}

/// Self-contained printable report
pub fn to_html(projects: &[&Project], generated: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>Projects Report</title>\n<style>\n");
    out.push_str(STYLE);
    out.push_str("\n</style>\n</head>\n<body>\n");

    let _ = write!(
        out,
        "<div class=\"header\">\n<h1>Projects Report</h1>\n<p>Generated on: {}</p>\n<p>Total Projects: {}</p>\n</div>\n",
        generated.format("%-m/%-d/%Y"),
        projects.len()
    );

    out.push_str("<table>\n<thead>\n<tr><th>Project Name</th><th>Location</th><th>Type</th><th>Stage</th>");
    out.push_str("<th>Stakeholders</th><th>Project Value</th><th>Source Link</th><th>Date Added</th></tr>\n");
    out.push_str("</thead>\n<tbody>\n");
    for project in projects {
        row(&mut out, project);
    }
    out.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    out
}
