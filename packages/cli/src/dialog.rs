use colored::Colorize;
use dtogen_parser::PropertyList;
use std::io::{self, Write};

/// `Question [default]: `
pub fn question(text: &str, default: Option<&str>, separator: &str) -> String {
    match default {
        Some(default) if !default.is_empty() => format!(
            "{} [{}]{} ",
            text.green(),
            default.yellow(),
            separator
        ),
        _ => format!("{}{} ", text.green(), separator),
    }
}

/// A highlighted block of text surrounded by blank lines
pub fn write_section<W: Write>(out: &mut W, lines: &[&str], error: bool) -> io::Result<()> {
    let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0) + 4;

    writeln!(out)?;
    for line in std::iter::once("").chain(lines.iter().copied()).chain(std::iter::once("")) {
        let padded = format!("  {:<width$}", line, width = width - 2);
        if error {
            writeln!(out, "{}", padded.white().on_red())?;
        } else {
            writeln!(out, "{}", padded.white().on_blue())?;
        }
    }
    writeln!(out)
}

/// Two column table of property names and types
pub fn write_property_table<W: Write>(out: &mut W, properties: &PropertyList) -> io::Result<()> {
    let name_header = "Property Name";
    let type_header = "Property Type";

    let name_width = properties
        .names()
        .map(|name| name.chars().count())
        .chain(std::iter::once(name_header.len()))
        .max()
        .unwrap_or(0);
    let type_width = properties
        .iter()
        .map(|spec| spec.type_.chars().count())
        .chain(std::iter::once(type_header.len()))
        .max()
        .unwrap_or(0);

    let border = format!(
        "+-{}-+-{}-+",
        "-".repeat(name_width),
        "-".repeat(type_width)
    );

    writeln!(out, "{}", border)?;
    writeln!(
        out,
        "| {:<nw$} | {:<tw$} |",
        name_header,
        type_header,
        nw = name_width,
        tw = type_width
    )?;
    writeln!(out, "{}", border)?;
    for spec in properties {
        writeln!(
            out,
            "| {:<nw$} | {:<tw$} |",
            spec.name,
            spec.type_,
            nw = name_width,
            tw = type_width
        )?;
    }
    writeln!(out, "{}", border)
}

/// Closing message after all artifacts were attempted
pub fn write_generator_summary<W: Write>(out: &mut W, errors: &[String]) -> io::Result<()> {
    if errors.is_empty() {
        return write_section(out, &["You can now start using the generated code!"], false);
    }

    write_section(
        out,
        &[
            "The command was not able to configure everything automatically.",
            "You must do the following changes manually.",
        ],
        true,
    )?;
    for error in errors {
        writeln!(out, "{}", error)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtogen_parser::parse_properties;

    #[test]
    fn test_question_with_default() {
        colored::control::set_override(false);

        assert_eq!(
            question("Enter the root directory", Some("Model"), ":"),
            "Enter the root directory [Model]: "
        );
        assert_eq!(question("Property name", None, ":"), "Property name: ");
        assert_eq!(question("Property name", Some(""), "?"), "Property name? ");
    }

    #[test]
    fn test_property_table() {
        colored::control::set_override(false);
        let properties = parse_properties("string:title \\DateTime:createdAt").unwrap();
        let mut out = Vec::new();

        write_property_table(&mut out, &properties).unwrap();

        let expected = "\
+---------------+---------------+
| Property Name | Property Type |
+---------------+---------------+
| title         | string        |
| createdAt     | \\DateTime     |
+---------------+---------------+
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_generator_summary_lists_errors() {
        colored::control::set_override(false);
        let mut out = Vec::new();

        write_generator_summary(&mut out, &["\"/tmp/PostDTO.php\" already exists".to_string()])
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("not able to configure everything automatically"));
        assert!(text.contains("\"/tmp/PostDTO.php\" already exists"));
    }
}
