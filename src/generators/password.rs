use rand::distributions::{Distribution, Uniform};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::generators::alphabet::{Alphabet, CharClass};
use crate::models::GenerationRequest;

/// Builds passwords by rejection sampling over a fixed alphabet.
///
/// Characters are drawn one at a time until the password is at least
/// `min_length` long *and* holds every requested class. The result is never
/// trimmed or reordered, so it can run past `min_length` when a required
/// class shows up late.
pub struct PasswordGenerator<R = ThreadRng> {
    rng: R,
}

impl PasswordGenerator<ThreadRng> {
    pub fn new() -> Self {
        PasswordGenerator {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    pub fn generate(&mut self, request: &GenerationRequest) -> String {
        let alphabet = Alphabet::for_request(request);
        let dist = Uniform::from(0..alphabet.len());

        let mut password = String::new();
        let mut has_digit = false;
        let mut has_special = false;

        // At least one draw happens even when nothing is required
        loop {
            let c = alphabet.as_bytes()[dist.sample(&mut self.rng)];
            password.push(c as char);

            match CharClass::of(c) {
                Some(CharClass::Digit) => has_digit = true,
                Some(CharClass::Special) => has_special = true,
                _ => {}
            }

            if request.classes_satisfied(has_digit, has_special)
                && request.length_satisfied(password.len())
            {
                break;
            }
        }

        log::debug!(
            "Generated password of {} characters (minimum {})",
            password.len(),
            request.min_length
        );

        password
    }
}

/// Generate a password with the thread-local random source.
pub fn generate_password(min_length: i64, include_digits: bool, include_special: bool) -> String {
    let request = GenerationRequest::new(min_length)
        .with_digits(include_digits)
        .with_special(include_special);

    PasswordGenerator::new().generate(&request)
}
