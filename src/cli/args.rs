//! CLI argument definitions
//!
//! All Clap derive structs for `confdoc` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::docgen::DocFormat;
use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Generate a configuration property reference from a property catalog.
#[derive(Parser, Debug)]
#[command(name = "confdoc", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Write a markdown reference to FILE (shorthand for `generate --format markdown`).
    #[arg(long, value_name = "FILE")]
    pub generate_markdown: Option<PathBuf>,

    /// Path to the property catalog (YAML or JSON).
    #[arg(long, global = true, env = "CONFDOC_CATALOG", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "CONFDOC_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true, env = "CONFDOC_LOG_FORMAT")]
    pub log_format: LogFormat,
}

// ============================================================================
// Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the property reference document.
    Generate(GenerateArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Arguments for `generate`.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Output document format.
    #[arg(short, long)]
    pub format: DocFormat,

    /// Destination file, or `-` for stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,
}

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for informational commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_args() {
        let cli = Cli::try_parse_from([
            "confdoc",
            "generate",
            "--format",
            "markdown",
            "--output",
            "config.md",
            "--catalog",
            "catalog.yaml",
        ])
        .unwrap();

        assert_eq!(cli.catalog, Some(PathBuf::from("catalog.yaml")));
        match cli.command {
            Some(Commands::Generate(args)) => {
                assert_eq!(args.format, DocFormat::Markdown);
                assert_eq!(args.output, PathBuf::from("config.md"));
            }
            other => panic!("expected generate, got {other:?}"),
        }
    }

    #[test]
    fn test_generate_requires_format() {
        let result = Cli::try_parse_from(["confdoc", "generate", "--output", "config.md"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_requires_output() {
        let result = Cli::try_parse_from(["confdoc", "generate", "--format", "markdown"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result = Cli::try_parse_from([
            "confdoc", "generate", "--format", "asciidoc", "--output", "x",
        ]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_legacy_generate_markdown_flag() {
        let cli = Cli::try_parse_from([
            "confdoc",
            "--generate-markdown",
            "config.md",
            "--catalog",
            "catalog.yaml",
        ])
        .unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.generate_markdown, Some(PathBuf::from("config.md")));
    }

    #[test]
    fn test_no_arguments_parses() {
        let cli = Cli::try_parse_from(["confdoc"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.generate_markdown.is_none());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["confdoc", "-vv", "--color", "never", "version"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, ColorChoice::Never);
        assert_eq!(cli.log_format, LogFormat::Human);
    }

    #[test]
    fn test_help_output() {
        let err = Cli::try_parse_from(["confdoc", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_output() {
        let err = Cli::try_parse_from(["confdoc", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_completions_shell() {
        let cli = Cli::try_parse_from(["confdoc", "completions", "powershell"]).unwrap();
        match cli.command {
            Some(Commands::Completions(args)) => assert_eq!(args.shell, Shell::PowerShell),
            other => panic!("expected completions, got {other:?}"),
        }
    }
}
