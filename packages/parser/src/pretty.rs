//! Human friendly rendering of model errors.

use crate::error::ModelError;
use ariadne::{Config, Label, Report, ReportKind, Source};

/// Format an error against the raw input it came from.
///
/// Malformed property tokens get a label pointing at the token; other
/// errors fall back to their plain message.
pub fn format_error(error: &ModelError, source_name: &str, source: &str) -> String {
    let (token, offset, message) = match error {
        ModelError::MalformedSpec {
            token,
            offset,
            message,
        } => (token, *offset, message),
        other => return other.to_string(),
    };

    // Report spans count chars, the error offset counts bytes
    let start = source
        .get(..offset)
        .map_or(offset, |prefix| prefix.chars().count());
    let span = start..start + token.chars().count();
    let report = Report::build(ReportKind::Error, source_name, start)
        .with_config(Config::default().with_color(false))
        .with_message(format!("malformed property \"{}\"", token))
        .with_label(Label::new((source_name, span)).with_message(message))
        .with_help("properties are entered as type:name, e.g. \"string:title integer:userId\"")
        .finish();

    let mut buffer = Vec::new();
    match report.write((source_name, Source::from(source)), &mut buffer) {
        Ok(()) => String::from_utf8_lossy(&buffer).into_owned(),
        Err(_) => error.to_string(),
    }
}
