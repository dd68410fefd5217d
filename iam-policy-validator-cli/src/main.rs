//! Command-line entry point for IAM Policy Validator.
//!
//! Prints `true` when the policy is valid and grants no `"Resource": "*"`,
//! `false` when it is valid but does. Load and validation errors go to stderr
//! with exit code 1.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use iam_policy_validator::{IamPolicyValidatorService, ValidatorConfig};
use log::debug;

#[derive(Parser, Debug)]
#[command(
    name = "iam-policy-validator",
    version,
    about = "Validate an IAM policy JSON file and check it for unrestricted resources"
)]
struct Cli {
    /// Path to the IAM policy file (must have a .json extension)
    policy_file: PathBuf,

    /// AWS partition scoped resources must belong to (e.g. aws, aws-cn, aws-us-gov)
    #[arg(long, env = "IAM_POLICY_VALIDATOR_PARTITION", default_value = "aws")]
    partition: String,

    /// Print the full check result as JSON instead of a bare boolean
    #[arg(long)]
    json: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

async fn run(cli: Cli) -> Result<String> {
    debug!("Checking {} (partition: {})", cli.policy_file.display(), cli.partition);

    let service =
        IamPolicyValidatorService::with_config(ValidatorConfig::for_partition(cli.partition));
    let result = service.check_file(&cli.policy_file).await?;

    if cli.json {
        serde_json::to_string_pretty(&result).context("Failed to serialize check result")
    } else {
        Ok(result.no_unrestricted_resource.to_string())
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
