// src/generators/mod.rs
pub mod alphabet;
pub mod password;

pub use alphabet::{Alphabet, CharClass};
pub use password::{generate_password, PasswordGenerator};
