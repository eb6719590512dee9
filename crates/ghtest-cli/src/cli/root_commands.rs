use clap::{Args, Subcommand};
use ghtest_core::Dialect;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate one C# test file from the project files below the roots.
    Generate(GenerateArgs),
    /// List discovered test groupings without writing anything.
    Discover(DiscoverArgs),
    /// Print the effective configuration.
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// Root folder to scan (repeatable, scanned in order)
    #[arg(short, long = "root", value_name = "DIR", required = true)]
    pub roots: Vec<String>,

    /// Output folder (defaults to `output.folder` from config)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<String>,

    /// Output file name without extension
    #[arg(short, long)]
    pub name: Option<String>,

    /// Test framework dialect: mstest, xunit
    #[arg(short, long)]
    pub dialect: Option<Dialect>,

    /// Namespace wrapping the generated classes
    #[arg(long)]
    pub namespace: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DiscoverArgs {
    /// Root folder to scan (repeatable, scanned in order)
    #[arg(short, long = "root", value_name = "DIR", required = true)]
    pub roots: Vec<String>,
}
