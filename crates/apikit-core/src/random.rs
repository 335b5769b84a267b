//! Cryptographically secure random strings.

use rand::{Rng, rngs::OsRng};

/// Default alphabet: ASCII letters and digits.
pub const RANDOM_STRING_CHARS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Returns `length` characters drawn uniformly from `allowed_chars` using the OS RNG.
///
/// The entropy of the result is `length * log2(allowed_chars.len())` bits; with
/// the default alphabet a 22-character string carries roughly 131 bits.
/// An empty alphabet yields an empty string.
pub fn get_random_string(length: usize, allowed_chars: &str) -> String {
    let alphabet: Vec<char> = allowed_chars.chars().collect();
    if alphabet.is_empty() {
        return String::new();
    }

    let mut rng = OsRng;
    (0..length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_and_alphabet() {
        let value = get_random_string(32, RANDOM_STRING_CHARS);
        assert_eq!(value.chars().count(), 32);
        assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_custom_alphabet() {
        let value = get_random_string(64, "ab");
        assert!(value.chars().all(|c| c == 'a' || c == 'b'));
    }

    #[test]
    fn test_values_differ() {
        assert_ne!(
            get_random_string(22, RANDOM_STRING_CHARS),
            get_random_string(22, RANDOM_STRING_CHARS)
        );
    }

    #[test]
    fn test_empty_alphabet() {
        assert_eq!(get_random_string(10, ""), "");
    }
}
