//! The owning slot buffer.
//!
//! [`SlotBuffer`] owns a contiguous block of default-initialized slots
//! with an explicit populated length. Lifecycle is explicit: created by
//! a constructor, mutated only through [`push`](SlotBuffer::push) /
//! [`set`](SlotBuffer::set), torn down by
//! [`release`](SlotBuffer::release). Release is idempotent, and every
//! content operation on a released buffer reports
//! [`BufferError::Released`] instead of touching freed state.

use coffer_core::BufferError;

use crate::alloc;
use crate::config::GrowthPolicy;

/// An owning container over a contiguous block of fixed-size slots.
///
/// Invariants, upheld by every operation:
///
/// - `len() <= capacity()` always.
/// - Every slot below `capacity()` holds a written value or
///   `T::default()` — uninitialized reads are impossible.
/// - A released buffer has capacity 0, owns no storage, and rejects
///   all content operations; releasing again is a no-op.
///
/// Growth is governed by a [`GrowthPolicy`] fixed at construction. A
/// failed growth (allocator refusal or policy ceiling) leaves the
/// buffer in its pre-call state: no element is lost or moved.
#[derive(Debug)]
pub struct SlotBuffer<T> {
    /// Backing storage. Allocated to full capacity; `slots.len()` IS
    /// the capacity.
    slots: Vec<T>,
    /// Populated prefix length.
    len: usize,
    /// Growth parameters, immutable after construction.
    policy: GrowthPolicy,
    /// Set by `release`; never cleared.
    released: bool,
}

impl<T: Clone + Default> SlotBuffer<T> {
    /// Create a buffer with `initial` default-initialized slots and the
    /// default growth policy.
    ///
    /// `try_with_capacity(0)` is legal and yields an empty buffer that
    /// owns no storage until the first push.
    pub fn try_with_capacity(initial: usize) -> Result<Self, BufferError> {
        Self::try_with_policy(initial, GrowthPolicy::new())
    }

    /// Create a buffer with `initial` slots under an explicit policy.
    ///
    /// The policy is validated first, and `initial` must not exceed its
    /// ceiling. Allocation failure is returned, not raised — this is
    /// the recoverable creation path.
    pub fn try_with_policy(initial: usize, policy: GrowthPolicy) -> Result<Self, BufferError> {
        policy.validate()?;
        if let Some(limit) = policy.max_slots {
            if initial > limit {
                return Err(BufferError::CapacityExceeded {
                    requested: initial,
                    limit,
                });
            }
        }
        let slots = alloc::zeroed(initial)?;
        Ok(Self {
            slots,
            len: 0,
            policy,
            released: false,
        })
    }

    /// Create a buffer with `initial` slots, failing fast.
    ///
    /// The fail-fast creation policy: panics with the allocation
    /// diagnostic if storage cannot be acquired. Embedding applications
    /// that want to recover use [`try_with_capacity`] instead — neither
    /// policy is hardwired.
    ///
    /// [`try_with_capacity`]: SlotBuffer::try_with_capacity
    pub fn with_capacity(initial: usize) -> Self {
        match Self::try_with_capacity(initial) {
            Ok(buf) => buf,
            Err(err) => panic!("slot buffer creation failed: {err}"),
        }
    }

    /// Append `value`, growing the buffer if it is full.
    ///
    /// Growth multiplies the capacity by the policy factor (or assigns
    /// the policy minimum when capacity is 0). On growth failure —
    /// ceiling reached or allocator refusal — the error is returned and
    /// the buffer keeps its pre-call length, capacity, and contents.
    pub fn push(&mut self, value: T) -> Result<(), BufferError> {
        self.ensure_live()?;
        if self.len == self.slots.len() {
            let grown = self.policy.grown_capacity(self.slots.len());
            if grown <= self.slots.len() {
                return Err(BufferError::CapacityExceeded {
                    requested: self.len + 1,
                    limit: self.slots.len(),
                });
            }
            alloc::regrow(&mut self.slots, grown)?;
        }
        self.slots[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Copy out the value at `index`.
    ///
    /// Reports `OutOfRange` for `index >= len()` — never clamped,
    /// never stray data.
    pub fn get(&self, index: usize) -> Result<T, BufferError> {
        self.ensure_live()?;
        if index >= self.len {
            return Err(BufferError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.slots[index].clone())
    }

    /// Overwrite the populated slot at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), BufferError> {
        self.ensure_live()?;
        if index >= self.len {
            return Err(BufferError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.slots[index] = value;
        Ok(())
    }

    /// View the populated prefix as a slice.
    pub fn as_slice(&self) -> Result<&[T], BufferError> {
        self.ensure_live()?;
        Ok(&self.slots[..self.len])
    }

    /// Forget the contents without releasing the storage.
    ///
    /// Capacity is retained; the next pushes overwrite the old slots.
    pub fn reset(&mut self) -> Result<(), BufferError> {
        self.ensure_live()?;
        self.len = 0;
        Ok(())
    }

    /// Release the backing storage.
    ///
    /// Drops the storage, zeroes length and capacity, and marks the
    /// buffer released. Idempotent: releasing an already-released
    /// buffer does nothing. There is no transition back to the live
    /// state — every later content operation reports `Released`.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.slots = Vec::new();
        self.len = 0;
        self.released = true;
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no slots are populated.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total allocated slots. 0 after release.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether the next push would have to grow.
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Free slots before the next growth.
    pub fn remaining(&self) -> usize {
        self.slots.len() - self.len
    }

    /// Whether the storage has been released.
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.slots.len() * std::mem::size_of::<T>()
    }

    /// The growth policy this buffer was built with.
    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    fn ensure_live(&self) -> Result<(), BufferError> {
        if self.released {
            return Err(BufferError::Released);
        }
        Ok(())
    }
}
