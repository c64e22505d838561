mod cli;
mod config;
mod main_lib;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use config::Config;
use main_lib::{init_tracing, run, Outcome};

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_tracing();
    let config = Config::from_env();
    let cli = Cli::parse();

    let mut stdout = std::io::stdout().lock();
    match run(cli, &config, &mut stdout)? {
        Outcome::Done => Ok(ExitCode::SUCCESS),
        Outcome::Rejected => Ok(ExitCode::FAILURE),
    }
}
