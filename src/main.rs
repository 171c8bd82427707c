use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::Path;

use rust_passgen::cli::{self, Args, CliError, InquirePrompter, LinePrompter, Prompter};
use rust_passgen::core::Config;
use rust_passgen::logging;
use rust_passgen::PasswordGenerator;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load().with_verbosity(args.verbose);
    logging::init(&config)?;
    log::debug!("Loaded config: {:?}", config);

    let result = if io::stdin().is_terminal() {
        run(&mut InquirePrompter)
    } else {
        log::debug!("stdin is not a terminal, reading answers line by line");
        run(&mut LinePrompter::new(io::stdin().lock(), io::stdout()))
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) if e.is_cancelled() => {
            log::info!("Prompt cancelled, exiting");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn run<P: Prompter>(prompter: &mut P) -> Result<(), CliError> {
    let mut generator = PasswordGenerator::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli::run_prompt(prompter, &mut out, &mut generator)
}
