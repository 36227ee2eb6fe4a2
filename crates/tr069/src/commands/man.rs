//! `tr069 man`: print the roff manual pages rendered by `build.rs`.

use crate::cli::ManArgs;
use crate::error::CliError;
use crate::output;

include!(concat!(env!("OUT_DIR"), "/man_pages.rs"));

/// Look up the page for a command path; empty means the top-level page.
pub fn page(command: &[String]) -> Result<&'static str, CliError> {
    let name = std::iter::once("tr069")
        .chain(command.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join("-");

    MAN_PAGES
        .iter()
        .find(|(page, _)| *page == name)
        .map(|(_, text)| *text)
        .ok_or_else(|| CliError::Validation {
            field: "command".into(),
            reason: format!("no manual page for `{}`", command.join(" ")),
        })
}

pub fn handle(args: &ManArgs, quiet: bool) -> Result<(), CliError> {
    output::print_output(page(&args.command)?, quiet);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn path(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn every_command_has_a_page() {
        let cases: [&[&str]; 5] = [&[], &["convert"], &["summary"], &["config", "init"], &["man"]];
        for words in cases {
            let text = page(&path(words)).unwrap();
            assert!(text.contains(".TH"), "{words:?}");
        }
    }

    #[test]
    fn unknown_command_is_a_usage_error() {
        let err = page(&path(&["frobnicate"])).unwrap_err();
        assert!(matches!(err, CliError::Validation { ref reason, .. } if reason.contains("frobnicate")));
    }
}
