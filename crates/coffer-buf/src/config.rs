//! Growth policy configuration.

use coffer_core::BufferError;

/// Configuration for slot-buffer growth.
///
/// Growth-by-doubling and the non-zero minimum are documented policy,
/// not implementation accidents: both are explicit parameters here,
/// validated at buffer construction and immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Multiplier applied to the current capacity when a full buffer
    /// grows. Must be at least 2.
    pub growth_factor: usize,

    /// Capacity assigned when a zero-capacity buffer grows.
    /// Must be at least 1.
    pub min_capacity: usize,

    /// Optional hard ceiling on capacity, in slots. `None` leaves
    /// growth bounded only by the allocator. When set, an append that
    /// would need to pass the ceiling fails with `CapacityExceeded`
    /// and the buffer keeps its pre-call state.
    pub max_slots: Option<usize>,
}

impl GrowthPolicy {
    /// Default growth multiplier.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Default capacity for growth from zero.
    pub const DEFAULT_MIN_CAPACITY: usize = 4;

    /// Create a policy with default factor and minimum and no ceiling.
    pub fn new() -> Self {
        Self {
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
            min_capacity: Self::DEFAULT_MIN_CAPACITY,
            max_slots: None,
        }
    }

    /// Create a policy with the default factor and minimum and a hard
    /// slot ceiling.
    pub fn with_ceiling(max_slots: usize) -> Self {
        Self {
            max_slots: Some(max_slots),
            ..Self::new()
        }
    }

    /// Validate the policy parameters.
    pub fn validate(&self) -> Result<(), BufferError> {
        if self.growth_factor < 2 {
            return Err(BufferError::InvalidPolicy {
                reason: format!("growth_factor must be >= 2, got {}", self.growth_factor),
            });
        }
        if self.min_capacity == 0 {
            return Err(BufferError::InvalidPolicy {
                reason: "min_capacity must be >= 1".to_string(),
            });
        }
        if self.max_slots == Some(0) {
            return Err(BufferError::InvalidPolicy {
                reason: "max_slots must be >= 1 when set".to_string(),
            });
        }
        Ok(())
    }

    /// Capacity after one growth step from `current`.
    ///
    /// `max(min_capacity, current * growth_factor)`, saturating, then
    /// clamped to the ceiling. A result equal to `current` means the
    /// buffer is already at the ceiling and cannot grow.
    pub fn grown_capacity(&self, current: usize) -> usize {
        let grown = if current == 0 {
            self.min_capacity
        } else {
            current.saturating_mul(self.growth_factor)
        };
        let grown = grown.max(self.min_capacity);
        match self.max_slots {
            Some(limit) => grown.min(limit),
            None => grown,
        }
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new()
    }
}
