use std::path::PathBuf;

use anyhow::Context;
use ghtest_codegen::{GenerationSettings, Generator};
use ghtest_config::GhTestConfig;
use ghtest_document::GhxLoader;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DiscoverArgs;
use crate::output::output;

/// Handle `ghtest discover`.
pub fn handle(
    args: &DiscoverArgs,
    config: &GhTestConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let generator = Generator::new(GhxLoader, GenerationSettings::from_config(config)?);
    let roots: Vec<PathBuf> = args.roots.iter().map(PathBuf::from).collect();
    let result = generator
        .discover(&roots)
        .context("discover: invalid arguments")?;
    tracing::debug!(roots = roots.len(), "discover finished");
    output(&result, flags.format)
}
