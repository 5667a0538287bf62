//! Random API keys.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of every generated key.
pub const API_KEY_LEN: usize = 24;

/// Generate a random, URL-safe API key of [`API_KEY_LEN`] characters.
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}

/// Generate a key from a caller-supplied RNG.
pub fn generate_with<R: Rng>(rng: &mut R) -> String {
    std::iter::repeat_with(|| rng.sample(Alphanumeric))
        .map(char::from)
        .take(API_KEY_LEN)
        .collect()
}
