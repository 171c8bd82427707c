// src/cli/mod.rs
use clap::Parser;

pub mod error;
pub mod prompt;

pub use error::CliError;
pub use prompt::{run_prompt, InquirePrompter, LinePrompter, Prompter};

/// Generate a random password from letters, digits and punctuation.
///
/// The length and character classes are asked for interactively.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
