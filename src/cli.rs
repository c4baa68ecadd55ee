//! CLI argument parsing module for relroots

use crate::scm::ScmConfig;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Duration;

/// Parse a provider override in PREFIX=IMPLEMENTATION form
fn parse_provider_override(s: &str) -> Result<(String, String), String> {
    let (prefix, implementation) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid provider override '{}': expected PREFIX=IMPLEMENTATION", s))?;
    if prefix.is_empty() || implementation.is_empty() {
        return Err(format!(
            "invalid provider override '{}': prefix and implementation must be non-empty",
            s
        ));
    }
    Ok((prefix.to_string(), implementation.to_string()))
}

/// Release-readiness reporter for multi-module reactors
#[derive(Parser, Debug, Clone)]
#[command(
    name = "relroots",
    version,
    about = "Release-readiness reporter for multi-module reactors"
)]
pub struct CliArgs {
    /// Reactor root directory or descriptor file (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Override the provider implementation for an SCM prefix
    /// (PREFIX=IMPLEMENTATION, can be specified multiple times)
    #[arg(long = "provider", value_parser = parse_provider_override, action = ArgAction::Append)]
    pub provider: Vec<(String, String)>,

    /// Timeout per changelog query, in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - no progress display
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CliArgs {
    /// Build the SCM configuration from the parsed arguments
    pub fn scm_config(&self) -> ScmConfig {
        ScmConfig {
            provider_overrides: self.provider.clone(),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}
