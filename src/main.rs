use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::process::ExitCode;

mod args;

use args::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if args::is_informational(&e) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config();
    let summary = farbox2hugo::convert(config.clone()).with_context(|| {
        format!(
            "converting {} into {}",
            config.source_dir.display(),
            config.output_dir.display()
        )
    })?;

    info!(
        "converted {} files, skipped {} entries",
        summary.converted.len(),
        summary.skipped.len()
    );
    Ok(())
}
