//! Fallible zero-init allocation helpers.
//!
//! All storage acquisition in this crate goes through these two
//! functions, so allocation failure is handled in one place. Requests
//! go through [`Vec::try_reserve_exact`], which reports failure without
//! touching the existing allocation — a failed [`regrow`] leaves the
//! caller's vector exactly as it was.

use std::mem;

use coffer_core::BufferError;

/// Allocate `count` default-initialized slots.
///
/// Returns `AllocFailed` with the requested byte size if the allocator
/// refuses. `zeroed(0)` succeeds without allocating.
pub fn zeroed<T: Clone + Default>(count: usize) -> Result<Vec<T>, BufferError> {
    let mut slots = Vec::new();
    if count == 0 {
        return Ok(slots);
    }
    slots
        .try_reserve_exact(count)
        .map_err(|_| BufferError::AllocFailed {
            requested_bytes: request_bytes::<T>(count),
        })?;
    slots.resize(count, T::default());
    Ok(slots)
}

/// Allocate `count` default-initialized slots, failing fast.
///
/// The fail-fast rendition of [`zeroed`]: on allocator refusal this
/// panics with a diagnostic naming the failed byte size instead of
/// returning control to a caller holding nothing. Use [`zeroed`] when
/// the embedding application wants to recover.
pub fn zeroed_fail_fast<T: Clone + Default>(count: usize) -> Vec<T> {
    match zeroed(count) {
        Ok(slots) => slots,
        Err(err) => panic!("slot allocation failed: {err}"),
    }
}

/// Grow an existing allocation to `new_count` slots.
///
/// New slots are default-initialized. On failure the existing vector
/// is valid and untouched, so the caller's handle never points at
/// freed or partially-moved storage.
///
/// `new_count` below the current length is rejected as a caller bug —
/// shrinking would drop populated slots.
pub fn regrow<T: Clone + Default>(
    slots: &mut Vec<T>,
    new_count: usize,
) -> Result<(), BufferError> {
    debug_assert!(new_count >= slots.len(), "regrow must not shrink");
    let additional = new_count.saturating_sub(slots.len());
    if additional == 0 {
        return Ok(());
    }
    slots
        .try_reserve_exact(additional)
        .map_err(|_| BufferError::AllocFailed {
            requested_bytes: request_bytes::<T>(new_count),
        })?;
    slots.resize(new_count, T::default());
    Ok(())
}

/// Byte size of a `count`-slot request, saturating on overflow.
fn request_bytes<T>(count: usize) -> usize {
    count.saturating_mul(mem::size_of::<T>())
}
