//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod generate;
pub mod version;

use crate::cli::args::{Cli, Commands, GenerateArgs};
use crate::docgen::{DocFormat, DocsError};
use crate::error::ConfdocError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// `--generate-markdown FILE` is shorthand for
/// `generate --format markdown --output FILE` and cannot be combined with a
/// subcommand.
///
/// # Errors
///
/// Returns `DocsError::InvalidInvocation` when neither a subcommand nor
/// `--generate-markdown` is given, or when both are; otherwise returns the
/// error of the dispatched handler.
pub fn dispatch(cli: Cli) -> Result<(), ConfdocError> {
    let catalog = cli.catalog.as_deref();

    match (cli.command, cli.generate_markdown) {
        (Some(_), Some(_)) => Err(DocsError::InvalidInvocation(
            "--generate-markdown cannot be combined with a subcommand".to_string(),
        )
        .into()),
        (None, Some(output)) => generate::run(
            &GenerateArgs {
                format: DocFormat::Markdown,
                output,
            },
            catalog,
        ),
        (Some(Commands::Generate(args)), None) => generate::run(&args, catalog),
        (Some(Commands::Completions(args)), None) => {
            completions::run(&args);
            Ok(())
        }
        (Some(Commands::Version(args)), None) => {
            version::run(&args);
            Ok(())
        }
        (None, None) => Err(DocsError::InvalidInvocation(
            "usage: confdoc generate --format <FORMAT> --output <PATH> --catalog <PATH> \
             (or confdoc --generate-markdown <FILE> --catalog <PATH>)"
                .to_string(),
        )
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_no_command_is_invalid_invocation() {
        let cli = Cli::try_parse_from(["confdoc"]).unwrap();
        let err = dispatch(cli).unwrap_err();
        assert!(matches!(
            err,
            ConfdocError::Docs(DocsError::InvalidInvocation(_))
        ));
    }

    #[test]
    fn test_legacy_flag_with_subcommand_is_invalid() {
        let cli = Cli::try_parse_from([
            "confdoc",
            "--generate-markdown",
            "a.md",
            "version",
        ])
        .unwrap();
        let err = dispatch(cli).unwrap_err();
        assert!(matches!(
            err,
            ConfdocError::Docs(DocsError::InvalidInvocation(_))
        ));
    }

    #[test]
    fn test_legacy_flag_generates_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("catalog.yaml");
        std::fs::write(
            &catalog,
            "properties:\n  - key: gc.cycle.delay\n    type: TIMEDURATION\n    default: 5m\n",
        )
        .unwrap();
        let output = dir.path().join("config.md");

        let cli = Cli::try_parse_from([
            "confdoc",
            "--generate-markdown",
            output.to_str().unwrap(),
            "--catalog",
            catalog.to_str().unwrap(),
        ])
        .unwrap();
        dispatch(cli).unwrap();

        let doc = std::fs::read_to_string(output).unwrap();
        assert!(doc.contains("**default value:** `5m`"));
    }
}
