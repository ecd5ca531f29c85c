//! Slug allocation against the event store.
//!
//! ## Summary
//! Allocation is optimistic: a candidate is checked for existence but not
//! reserved. The store's unique constraint is the final word, and
//! [`crate::event::create_event`] retries when an insert loses the race.

use tminus_core::constants::MAX_SLUG_LENGTH;
use tminus_core::util::slug::generate_slug;
use tminus_db::db::store::EventStore;

use crate::error::{ServiceError, ServiceResult};

/// Candidates tried at one length before growing the slug by a character.
pub const ATTEMPTS_PER_LENGTH: usize = 10;

/// ## Summary
/// Returns a slug of at least `length` characters that no stored event uses.
///
/// Tries up to [`ATTEMPTS_PER_LENGTH`] random candidates per length, growing
/// the length by one each time every attempt collides.
///
/// ## Errors
/// Returns `ServiceError::ValidationError` if `length` is outside
/// `1..=MAX_SLUG_LENGTH`, `ServiceError::SlugSpaceExhausted` if every length
/// up to the maximum is exhausted, or a database error if an existence check fails.
#[tracing::instrument(skip(store))]
pub async fn allocate_unique_slug(store: &dyn EventStore, length: usize) -> ServiceResult<String> {
    if !(1..=MAX_SLUG_LENGTH).contains(&length) {
        return Err(ServiceError::ValidationError(format!(
            "slug length must be between 1 and {MAX_SLUG_LENGTH}, got {length}"
        )));
    }

    for current_length in length..=MAX_SLUG_LENGTH {
        for _ in 0..ATTEMPTS_PER_LENGTH {
            let candidate = generate_slug(current_length);
            if !store.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        tracing::warn!(
            length = current_length,
            attempts = ATTEMPTS_PER_LENGTH,
            "Every slug candidate collided, growing slug length"
        );
    }

    Err(ServiceError::SlugSpaceExhausted)
}
