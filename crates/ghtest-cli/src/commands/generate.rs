use std::path::PathBuf;

use anyhow::{Context, bail};
use ghtest_codegen::{GenerateRequest, GenerationLog, GenerationSettings, Generator, RunOutcome};
use ghtest_config::GhTestConfig;
use ghtest_document::GhxLoader;
use serde::Serialize;

use crate::cli::root_commands::GenerateArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

#[derive(Debug, Serialize)]
struct GenerateResponse<'a> {
    log: String,
    #[serde(flatten)]
    result: &'a GenerationLog,
}

/// Handle `ghtest generate`.
pub fn handle(
    args: &GenerateArgs,
    config: &GhTestConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let settings = settings(args, config)?;
    let request = request(args, config);

    let generator = Generator::new(GhxLoader, settings);
    let log = generator
        .generate(&request)
        .context("generate: invalid arguments")?;
    tracing::info!(
        output = %request.output_path().display(),
        outcome = outcome_label(&log.outcome),
        diagnostics = log.diagnostics.len(),
        "generate finished"
    );

    match flags.format {
        OutputFormat::Raw => println!("{log}"),
        OutputFormat::Json => output(
            &GenerateResponse {
                log: log.to_string(),
                result: &log,
            },
            flags.format,
        )?,
    }

    if !log.is_success() {
        bail!("generate: output file was not fully generated");
    }
    Ok(())
}

fn settings(args: &GenerateArgs, config: &GhTestConfig) -> anyhow::Result<GenerationSettings> {
    let mut settings = GenerationSettings::from_config(config)?;
    if let Some(namespace) = &args.namespace {
        if namespace.trim().is_empty() {
            bail!("generate: --namespace must not be empty");
        }
        settings.namespace.clone_from(namespace);
    }
    Ok(settings)
}

const fn outcome_label(outcome: &RunOutcome) -> &'static str {
    match outcome {
        RunOutcome::Created(_) => "created",
        RunOutcome::Overwritten(_) => "overwritten",
        RunOutcome::Failed { .. } => "failed",
    }
}

/// Command-line values win over the merged configuration.
fn request(args: &GenerateArgs, config: &GhTestConfig) -> GenerateRequest {
    GenerateRequest {
        root_folders: args.roots.iter().map(PathBuf::from).collect(),
        output_folder: PathBuf::from(args.output.as_deref().unwrap_or(&config.output.folder)),
        output_name: args
            .name
            .clone()
            .unwrap_or_else(|| config.output.name.clone()),
        dialect: args.dialect.unwrap_or(config.output.dialect),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghtest_core::Dialect;
    use pretty_assertions::assert_eq;

    fn args() -> GenerateArgs {
        GenerateArgs {
            roots: vec!["suite".into()],
            output: None,
            name: None,
            dialect: None,
            namespace: None,
        }
    }

    #[test]
    fn config_fills_missing_flags() {
        let mut config = GhTestConfig::default();
        config.output.folder = "generated".into();
        config.output.dialect = Dialect::XUnit;

        let request = request(&args(), &config);
        assert_eq!(request.output_folder, PathBuf::from("generated"));
        assert_eq!(request.output_name, "AutoTests");
        assert_eq!(request.dialect, Dialect::XUnit);
        assert_eq!(request.root_folders, vec![PathBuf::from("suite")]);
    }

    #[test]
    fn flags_override_config() {
        let mut config = GhTestConfig::default();
        config.output.folder = "generated".into();
        let args = GenerateArgs {
            output: Some("out".into()),
            name: Some("Suite".into()),
            dialect: Some(Dialect::XUnit),
            namespace: Some("My.Tests".into()),
            ..args()
        };

        let request = request(&args, &config);
        assert_eq!(request.output_path(), PathBuf::from("out/Suite.cs"));
        assert_eq!(settings(&args, &config).unwrap().namespace, "My.Tests");
    }

    #[test]
    fn outcome_labels_match_run_result() {
        assert_eq!(outcome_label(&RunOutcome::Created("a.cs".into())), "created");
        assert_eq!(outcome_label(&RunOutcome::Overwritten("a.cs".into())), "overwritten");
        assert_eq!(
            outcome_label(&RunOutcome::Failed {
                detail: "denied".into(),
                existed: false,
            }),
            "failed"
        );
    }

    #[test]
    fn blank_namespace_flag_is_rejected() {
        let args = GenerateArgs {
            namespace: Some(" ".into()),
            ..args()
        };
        assert!(settings(&args, &GhTestConfig::default()).is_err());
    }
}
