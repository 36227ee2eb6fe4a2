//! Output formatting: table, JSON, YAML.
//!
//! Summaries render in the format selected by `--output`; documents go
//! through the model codec instead (see `commands::write_document`).

use std::io::{self, IsTerminal, Write};

use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable items in the chosen format.
///
/// `table` maps each item through `to_row`; the structured formats
/// serialize the original data. `xml` has no list form and is rejected.
pub fn render_list<T, R>(
    format: OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
) -> Result<String, CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            Ok(render_table(&rows))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::JsonCompact => Ok(serde_json::to_string(data)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(data)?),
        OutputFormat::Xml => Err(CliError::Validation {
            field: "--output".into(),
            reason: "xml is only available for documents; use table, json or yaml".into(),
        }),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    if output.ends_with('\n') {
        let _ = write!(stdout, "{output}");
    } else {
        let _ = writeln!(stdout, "{output}");
    }
}

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(serde::Serialize)]
    struct Item {
        name: &'static str,
        count: usize,
    }

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "Name")]
        name: &'static str,
    }

    fn items() -> Vec<Item> {
        vec![Item { name: "Device.", count: 1 }]
    }

    #[test]
    fn table_uses_row_mapping() {
        let out = render_list(OutputFormat::Table, &items(), |i| Row { name: i.name }).unwrap();
        assert!(out.contains("Name"));
        assert!(out.contains("Device."));
        assert!(!out.contains("count"));
    }

    #[test]
    fn compact_json_is_single_line() {
        let out = render_list(OutputFormat::JsonCompact, &items(), |i| Row { name: i.name }).unwrap();
        assert_eq!(out, r#"[{"name":"Device.","count":1}]"#);
    }

    #[test]
    fn xml_is_rejected_for_lists() {
        let err = render_list(OutputFormat::Xml, &items(), |i| Row { name: i.name }).unwrap_err();
        assert!(matches!(err, CliError::Validation { .. }));
    }
}
