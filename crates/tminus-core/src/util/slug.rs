//! Random slug generation for shareable event links.
//!
//! ## Summary
//! Characters are drawn from the operating system CSPRNG. Slugs are
//! lowercase ASCII letters and digits only.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;

use crate::constants::{MAX_SLUG_LENGTH, SLUG_ALPHABET};

/// Generate a random slug of exactly `length` characters.
///
/// Each character is sampled independently and uniformly from `[a-z0-9]`.
///
/// Examples of output shape:
/// - `generate_slug(6)` -> `"k3v9qa"`
/// - `generate_slug(8)` -> `"0zq1m7xe"`
#[must_use]
pub fn generate_slug(length: usize) -> String {
    let alphabet = Uniform::from(0..SLUG_ALPHABET.len());

    (0..length)
        .map(|_| char::from(SLUG_ALPHABET[alphabet.sample(&mut OsRng)]))
        .collect()
}

/// Returns true if `candidate` could have been produced by [`generate_slug`]
/// for some length the store accepts.
#[must_use]
pub fn is_valid_slug(candidate: &str) -> bool {
    (1..=MAX_SLUG_LENGTH).contains(&candidate.len())
        && candidate.bytes().all(|b| SLUG_ALPHABET.contains(&b))
}
