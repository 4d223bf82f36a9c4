use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use leakguard_cli::{
    commands::{run_model_info, run_predict},
    logging, Cli, Command,
};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    match cli.command {
        Command::Predict(args) => {
            let success = run_predict(&args, io::stdin().lock(), io::stdout().lock())?;
            Ok(if success { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Command::ModelInfo(args) => {
            run_model_info(&args, io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
