//! relroots - Release-readiness reporter CLI
//!
//! Analyses a multi-module reactor and prints, per module, whether it has
//! changed since its last release and which other modules in the reactor
//! depend on it.

use clap::Parser;
use relroots::analyzer::Analyzer;
use relroots::cli::CliArgs;
use relroots::report::TextReport;
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("relroots v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Reactor: {}", args.path.display());
        for (prefix, implementation) in &args.provider {
            eprintln!(
                "Changing the '{}' provider implementation to '{}'",
                prefix, implementation
            );
        }
    }

    let analyzer = Analyzer::new(&args.scm_config(), !args.quiet)?;
    let result = analyzer.run(&args.path).await?;

    let report = TextReport::new(!args.no_color, args.verbose);
    let mut stdout = io::stdout().lock();
    report.render(&result.reactor.modules, &result.classifications, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
