// src/cli/prompt.rs
use inquire::{InquireError, Text};
use rand::Rng;
use std::io::{BufRead, Write};

use crate::cli::CliError;
use crate::generators::PasswordGenerator;
use crate::models::GenerationRequest;

pub const LENGTH_PROMPT: &str = "Enter the minimum length of the password:";
pub const DIGITS_PROMPT: &str = "Do you want to have numbers (y/n):";
pub const SPECIAL_PROMPT: &str = "Do you want to have special characters (y/n):";
pub const INVALID_LENGTH_MESSAGE: &str = "Please enter a valid number for the minimum length.";

/// Source of answers for the password questions.
pub trait Prompter {
    fn ask(&mut self, message: &str) -> Result<String, InquireError>;
}

/// Asks on the terminal.
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn ask(&mut self, message: &str) -> Result<String, InquireError> {
        Text::new(message).prompt()
    }
}

/// Writes each question to `output` and reads the answer as one line of
/// `input`. Used when stdin is not a terminal.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, message: &str) -> Result<String, InquireError> {
        write!(self.output, "{} ", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // End of input before an answer
            return Err(InquireError::OperationCanceled);
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }
}

/// Parse a signed integer. Surrounding whitespace is ignored and single
/// underscores between digits are accepted as group separators (`1_000`).
pub fn parse_min_length(answer: &str) -> Result<i64, CliError> {
    let invalid = || CliError::InvalidLength(answer.to_string());
    let trimmed = answer.trim();

    let bytes = trimmed.as_bytes();
    for (i, &c) in bytes.iter().enumerate() {
        if c == b'_' {
            let before = i.checked_sub(1).map(|j| bytes[j]);
            let after = bytes.get(i + 1).copied();
            let between_digits = matches!(before, Some(b) if b.is_ascii_digit())
                && matches!(after, Some(a) if a.is_ascii_digit());
            if !between_digits {
                return Err(invalid());
            }
        }
    }

    trimmed.replace('_', "").parse().map_err(|_| invalid())
}

// Only an exact "y" (either case) counts as yes
pub fn parse_yes_no(answer: &str) -> bool {
    answer.to_lowercase() == "y"
}

/// Ask for the requirements, generate and print the password.
///
/// An unparsable length prints a notice and returns `Ok`, without asking the
/// remaining questions.
pub fn run_prompt<P, W, R>(
    prompter: &mut P,
    out: &mut W,
    generator: &mut PasswordGenerator<R>,
) -> Result<(), CliError>
where
    P: Prompter,
    W: Write,
    R: Rng,
{
    let answer = prompter.ask(LENGTH_PROMPT)?;
    let min_length = match parse_min_length(&answer) {
        Ok(n) => n,
        Err(e) => {
            log::info!("{}", e);
            writeln!(out, "{}", INVALID_LENGTH_MESSAGE)?;
            return Ok(());
        }
    };

    let include_digits = parse_yes_no(&prompter.ask(DIGITS_PROMPT)?);
    let include_special = parse_yes_no(&prompter.ask(SPECIAL_PROMPT)?);

    let request = GenerationRequest::new(min_length)
        .with_digits(include_digits)
        .with_special(include_special);
    log::info!(
        "Generating password: min_length={}, digits={}, special={}",
        request.min_length,
        request.include_digits,
        request.include_special
    );

    let password = generator.generate(&request);
    writeln!(out, "The generated password is: {}", password)?;
    out.flush()?;

    Ok(())
}
