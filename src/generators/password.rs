// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use thiserror::Error;

use crate::models::GenerationOptions;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Password length must be positive, got {0}")]
    InvalidLength(i64),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

// Build the character universe for the given options
fn charset(options: &GenerationOptions) -> Vec<u8> {
    let mut chars = Vec::new();
    chars.extend_from_slice(LOWERCASE);
    chars.extend_from_slice(UPPERCASE);
    chars.extend_from_slice(DIGITS);
    if options.include_symbols {
        chars.extend_from_slice(SYMBOLS);
    }
    chars
}

/// Generate a random password, each character drawn independently and
/// uniformly from the character universe (sampling with replacement).
pub fn generate(options: &GenerationOptions) -> Result<String> {
    if options.length <= 0 {
        return Err(GeneratorError::InvalidLength(options.length));
    }

    let chars = charset(options);
    let mut rng = rand::thread_rng();
    let dist = Uniform::from(0..chars.len());

    let password = (0..options.length)
        .map(|_| chars[dist.sample(&mut rng)] as char)
        .collect();

    Ok(password)
}

// Heuristic 0-100 score from length and character variety
pub fn analyze_strength(password: &str) -> u8 {
    let mut score = (password.len() as u8).min(40);

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 15;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 15;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 15;
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        score += 15;
    }

    score.min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_password_has_requested_length() {
        for length in [1, 8, 12, 64] {
            let options = GenerationOptions {
                length,
                include_symbols: true,
            };
            let password = generate(&options).unwrap();
            assert_eq!(password.chars().count(), length as usize);
        }
    }

    #[test]
    fn without_symbols_only_letters_and_digits() {
        let options = GenerationOptions {
            length: 200,
            include_symbols: false,
        };
        let password = generate(&options).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn non_positive_length_is_rejected() {
        for length in [0, -1, -12] {
            let options = GenerationOptions {
                length,
                include_symbols: true,
            };
            let result = generate(&options);
            assert!(matches!(result, Err(GeneratorError::InvalidLength(l)) if l == length));
        }
    }

    #[test]
    fn symbols_stay_inside_the_universe_and_do_occur() {
        let options = GenerationOptions::default();
        let mut saw_symbol = false;

        for _ in 0..1000 {
            let password = generate(&options).unwrap();
            // Letters, digits and ASCII punctuation are exactly the graphic range
            assert!(password.chars().all(|c| c.is_ascii_graphic()));
            if password.chars().any(|c| c.is_ascii_punctuation()) {
                saw_symbol = true;
            }
        }

        assert!(
            saw_symbol,
            "1000 passwords of length 12 should contain at least one symbol"
        );
    }

    #[test]
    fn strength_rewards_variety() {
        assert!(analyze_strength("aB3$xY7!pQ2&") > analyze_strength("aaaaaaaaaaaa"));
    }
}
