use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `ghtest` binary.
#[derive(Debug, Parser)]
#[command(
    name = "ghtest",
    version,
    about = "Generate C# unit tests from Grasshopper project files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root where `.ghtest/config.toml` and `.env` are looked up
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use ghtest_core::Dialect;

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_collects_repeated_roots_in_order() {
        let cli = Cli::try_parse_from([
            "ghtest", "generate", "--root", "b", "-r", "a", "--output", "out", "--dialect",
            "xunit",
        ])
        .expect("cli should parse");

        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.roots, vec!["b", "a"]);
        assert_eq!(args.output.as_deref(), Some("out"));
        assert_eq!(args.dialect, Some(Dialect::XUnit));
        assert_eq!(args.name, None);
    }

    #[test]
    fn generate_requires_a_root() {
        assert!(Cli::try_parse_from(["ghtest", "generate"]).is_err());
    }

    #[test]
    fn unknown_dialect_is_rejected() {
        let parsed = Cli::try_parse_from(["ghtest", "generate", "-r", "a", "-d", "nunit"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["ghtest", "discover", "-r", "a", "--format", "raw", "-q"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Discover(_)));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["ghtest", "--format", "xml", "config"]).is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["ghtest", "--project", "/tmp/demo", "config"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.project.as_deref(), Some("/tmp/demo"));
        assert_eq!(flags.format, OutputFormat::Json);
    }
}
