use ghtest_config::GhTestConfig;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `ghtest config`.
pub fn handle(config: &GhTestConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(config, flags.format)
}
