//! Status table rendering
//!
//! Turns status records into a bordered ASCII table with a title banner and
//! a separator between every row. Only the `result` column is colorized.

use branchwatch_core::domain::attribute::Attribute;
use branchwatch_core::domain::outcome::Outcome;
use branchwatch_core::domain::status::StatusRecord;
use colored::{Color, Colorize};
use tabled::builder::Builder;
use tabled::settings::{Panel, Style};

/// Title of the status report for `branch`
pub fn report_title(branch: &str) -> String {
    format!("Job Statuses. Branch: {}", branch)
}

/// Color a result is highlighted with, `None` to leave it plain
pub fn outcome_color(outcome: &Outcome) -> Option<Color> {
    match outcome {
        Outcome::Success => Some(Color::Green),
        Outcome::Failure | Outcome::FetchError => Some(Color::Red),
        Outcome::Unstable => Some(Color::Yellow),
        Outcome::InProgress | Outcome::Other(_) => None,
    }
}

/// Render `records` as a table with one column per attribute
///
/// The first row holds the attribute names. Values a record does not have
/// are left empty. With no attributes only the bordered title banner is
/// rendered.
pub fn render_table(title: &str, records: &[StatusRecord], attributes: &[Attribute]) -> String {
    let mut builder = Builder::default();
    if attributes.is_empty() {
        builder.push_record([title]);
        let mut table = builder.build();
        table.with(Style::ascii());
        return table.to_string();
    }

    builder.push_record(attributes.iter().map(|a| a.to_string()));
    for record in records {
        builder.push_record(project_row(record, attributes));
    }

    let mut table = builder.build();
    table.with(Style::ascii()).with(Panel::header(title));
    table.to_string()
}

fn project_row(record: &StatusRecord, attributes: &[Attribute]) -> Vec<String> {
    attributes
        .iter()
        .map(|&attribute| {
            let value = record.field(attribute).unwrap_or_default();
            match (attribute, outcome_color(&record.result)) {
                (Attribute::Result, Some(color)) => value.color(color).to_string(),
                _ => value,
            }
        })
        .collect()
}
