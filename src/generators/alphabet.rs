// src/generators/alphabet.rs
use crate::models::GenerationRequest;

pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
/// The 32 printable ASCII punctuation characters.
pub const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Letter,
    Digit,
    Special,
}

impl CharClass {
    pub fn of(c: u8) -> Option<Self> {
        if LETTERS.contains(&c) {
            Some(CharClass::Letter)
        } else if DIGITS.contains(&c) {
            Some(CharClass::Digit)
        } else if SPECIAL.contains(&c) {
            Some(CharClass::Special)
        } else {
            None
        }
    }
}

/// Characters a password may be drawn from.
///
/// Letters are always present, so an alphabet is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<u8>,
}

impl Alphabet {
    pub fn for_request(request: &GenerationRequest) -> Self {
        let mut chars = Vec::with_capacity(LETTERS.len() + DIGITS.len() + SPECIAL.len());

        chars.extend(LETTERS);
        if request.include_digits {
            chars.extend(DIGITS);
        }
        if request.include_special {
            chars.extend(SPECIAL);
        }

        Self { chars }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: u8) -> bool {
        self.chars.contains(&c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sets_have_expected_sizes() {
        assert_eq!(LETTERS.len(), 52);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SPECIAL.len(), 32);
        assert!(SPECIAL.iter().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn letters_only_alphabet() {
        let request = GenerationRequest::new(8).with_digits(false).with_special(false);
        let alphabet = Alphabet::for_request(&request);
        assert_eq!(alphabet.as_bytes(), LETTERS);
        assert!(!alphabet.contains(b'7'));
        assert!(!alphabet.contains(b'#'));
    }

    #[test]
    fn full_alphabet_is_letters_then_digits_then_special() {
        let alphabet = Alphabet::for_request(&GenerationRequest::new(8));
        assert_eq!(alphabet.len(), 94);
        assert_eq!(&alphabet.as_bytes()[..52], LETTERS);
        assert_eq!(&alphabet.as_bytes()[52..62], DIGITS);
        assert_eq!(&alphabet.as_bytes()[62..], SPECIAL);
    }

    #[test]
    fn special_without_digits() {
        let request = GenerationRequest::new(8).with_digits(false);
        let alphabet = Alphabet::for_request(&request);
        assert_eq!(alphabet.len(), 84);
        assert!(alphabet.contains(b'~'));
        assert!(!alphabet.contains(b'0'));
    }

    #[test]
    fn alphabet_is_never_empty() {
        for include_digits in [false, true] {
            for include_special in [false, true] {
                let request = GenerationRequest::new(0)
                    .with_digits(include_digits)
                    .with_special(include_special);
                let alphabet = Alphabet::for_request(&request);
                assert!(!alphabet.is_empty());
                assert!(alphabet.len() >= LETTERS.len());
            }
        }
    }

    #[test]
    fn classify_bytes() {
        assert_eq!(CharClass::of(b'q'), Some(CharClass::Letter));
        assert_eq!(CharClass::of(b'Z'), Some(CharClass::Letter));
        assert_eq!(CharClass::of(b'5'), Some(CharClass::Digit));
        assert_eq!(CharClass::of(b'\\'), Some(CharClass::Special));
        assert_eq!(CharClass::of(b' '), None);
        assert_eq!(CharClass::of(0xE9), None);
    }
}
