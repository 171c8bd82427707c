// src/models.rs

/// What the caller asks the generator for.
///
/// `min_length` is signed on purpose: values of zero or below are accepted
/// and simply make the length bound vacuous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub min_length: i64,
    pub include_digits: bool,
    pub include_special: bool,
}

impl GenerationRequest {
    // Both optional classes are on unless switched off
    pub fn new(min_length: i64) -> Self {
        Self {
            min_length,
            include_digits: true,
            include_special: true,
        }
    }

    pub fn with_digits(mut self, include_digits: bool) -> Self {
        self.include_digits = include_digits;
        self
    }

    pub fn with_special(mut self, include_special: bool) -> Self {
        self.include_special = include_special;
        self
    }

    /// True once the classes seen so far cover every class that was asked for.
    pub fn classes_satisfied(&self, has_digit: bool, has_special: bool) -> bool {
        (!self.include_digits || has_digit) && (!self.include_special || has_special)
    }

    /// True once `len` characters meet the minimum length.
    pub fn length_satisfied(&self, len: usize) -> bool {
        // usize always fits in i128, so the comparison never truncates
        len as i128 >= self.min_length as i128
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_enables_both_optional_classes() {
        let request = GenerationRequest::new(12);
        assert_eq!(request.min_length, 12);
        assert!(request.include_digits);
        assert!(request.include_special);
    }

    #[test]
    fn builders_switch_classes_off() {
        let request = GenerationRequest::new(4).with_digits(false).with_special(false);
        assert!(!request.include_digits);
        assert!(!request.include_special);
    }

    #[test]
    fn classes_satisfied_only_checks_requested_classes() {
        let both = GenerationRequest::new(1);
        assert!(!both.classes_satisfied(false, false));
        assert!(!both.classes_satisfied(true, false));
        assert!(!both.classes_satisfied(false, true));
        assert!(both.classes_satisfied(true, true));

        let digits_only = GenerationRequest::new(1).with_special(false);
        assert!(digits_only.classes_satisfied(true, false));
        assert!(!digits_only.classes_satisfied(false, true));

        let none = GenerationRequest::new(1).with_digits(false).with_special(false);
        assert!(none.classes_satisfied(false, false));
    }

    #[test]
    fn non_positive_length_is_always_satisfied() {
        assert!(GenerationRequest::new(0).length_satisfied(0));
        assert!(GenerationRequest::new(-5).length_satisfied(0));
        assert!(!GenerationRequest::new(3).length_satisfied(2));
        assert!(GenerationRequest::new(3).length_satisfied(3));
    }
}
