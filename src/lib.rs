//! Random password generation from letters, optional digits and optional
//! punctuation, with every requested class guaranteed to appear.

pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;

pub use generators::{generate_password, PasswordGenerator};
pub use models::GenerationRequest;
