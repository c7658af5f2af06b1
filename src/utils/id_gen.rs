//! Identifier and auth token generation.
//!
//! Identifiers are drawn from a fixed alphanumeric alphabet; auth tokens
//! come from a wider printable set so the two namespaces never coincide.

use rand::Rng;
use serde_json::json;

use crate::error::AppError;

/// Alphabet identifiers are drawn from.
pub const ID_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Character set auth tokens are drawn from. Deliberately wider than
/// [`ID_ALPHABET`]; a token can never be mistaken for (or derived from) an id.
const TOKEN_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!#$%&*+-./:;<=>?@^_~";

/// Draws a uniformly random string of `len` characters over `alphabet`.
pub fn random_id(alphabet: &str, len: usize) -> String {
    let chars: Vec<char> = alphabet.chars().collect();
    let mut rng = rand::rng();

    (0..len)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect()
}

/// Generates a random auth token of `len` printable characters.
pub fn generate_token(len: usize) -> String {
    let mut rng = rand::rng();

    (0..len)
        .map(|_| TOKEN_ALPHABET[rng.random_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

/// Validates a client-requested identifier.
///
/// # Rules
///
/// - Length: 1..=`max_len` characters
/// - Every character is a member of `alphabet`
///
/// # Errors
///
/// Returns [`AppError::InvalidId`] if either rule is violated.
pub fn validate_requested_id(id: &str, alphabet: &str, max_len: usize) -> Result<(), AppError> {
    let len = id.chars().count();

    if len == 0 || len > max_len {
        return Err(AppError::invalid_id(
            format!("Identifier must be 1-{max_len} characters"),
            json!({ "provided_length": len }),
        ));
    }

    if !id.chars().all(|c| alphabet.contains(c)) {
        return Err(AppError::invalid_id(
            "Identifier contains characters outside the allowed alphabet",
            json!({ "id": id }),
        ));
    }

    Ok(())
}
