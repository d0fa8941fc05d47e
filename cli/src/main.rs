use std::process::ExitCode;

use clap::Parser;

use png_to_jpeg::cli::Cli;
use png_to_jpeg::run::run_cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Init logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run_cli(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
