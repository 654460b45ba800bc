use crate::project::{format_date, Project, TextField, NOT_SPECIFIED};

pub const HEADER: &str =
    "ID,Project Name,Location,Project Type,Stage,Stakeholders,Project Value,Source Link,Date Added";

const QUOTED_FIELDS: [TextField; 7] = [
    TextField::ProjectName,
    TextField::Location,
    TextField::ProjectType,
    TextField::Stage,
    TextField::Stakeholders,
    TextField::ProjectValue,
    TextField::SourceLink,
];

/// Always quote, doubling embedded quotes
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn row(project: &Project) -> String {
    let mut cells = Vec::with_capacity(9);
    cells.push(project.id.to_string());
    for field in QUOTED_FIELDS {
        cells.push(quote(project.text(field)));
    }
    let date = format_date(project.date_added.as_deref());
    cells.push(quote(date.as_deref().unwrap_or(NOT_SPECIFIED)));
    cells.join(",")
}

/// Header plus one row per project, `\n` separated. The id is written bare,
/// every text cell is quoted.
pub fn to_csv(projects: &[&Project]) -> String {
    let mut lines = Vec::with_capacity(projects.len() + 1);
    lines.push(HEADER.to_string());
    lines.extend(projects.iter().map(|p| row(p)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_commas_and_doubles_quotes() {
        let p = Project {
            id: 12,
            stakeholders: Some("Acme, \"Bob\" Co".into()),
            ..Default::default()
        };
        let csv = to_csv(&[&p]);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some(HEADER));
        let line = lines.next().unwrap();
        assert!(line.starts_with("12,"));
        assert!(line.contains(r#""Acme, ""Bob"" Co""#));
    }

    #[test]
    fn blanks_become_not_specified() {
        let p = Project {
            id: 1,
            project_name: Some("Tower".into()),
            date_added: Some("garbage".into()),
            ..Default::default()
        };
        let csv = to_csv(&[&p]);
        let line = csv.lines().nth(1).unwrap();
        assert_eq!(
            line,
            r#"1,"Tower","Not specified","Not specified","Not specified","Not specified","Not specified","Not specified","Not specified""#
        );
    }

    #[test]
    fn formats_parseable_dates() {
        let p = Project { id: 2, date_added: Some("2024-01-05".into()), ..Default::default() };
        let csv = to_csv(&[&p]);
        assert!(csv.lines().nth(1).unwrap().ends_with(",\"1/5/2024\""));
    }

    #[test]
    fn keeps_input_order() {
        let a = Project { id: 9, ..Default::default() };
        let b = Project { id: 3, ..Default::default() };
        let csv = to_csv(&[&a, &b]);
        let ids: Vec<&str> = csv.lines().skip(1).map(|l| l.split(',').next().unwrap()).collect();
        assert_eq!(ids, vec!["9", "3"]);
    }
}
