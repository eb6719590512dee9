pub mod config;
pub mod discover;
pub mod generate;

use ghtest_config::GhTestConfig;

use crate::cli::{Commands, GlobalFlags};

/// Route a parsed command to its handler.
pub fn dispatch(
    command: &Commands,
    config: &GhTestConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Generate(args) => generate::handle(args, config, flags),
        Commands::Discover(args) => discover::handle(args, config, flags),
        Commands::Config => config::handle(config, flags),
    }
}
