//! Live-allocation ledger.
//!
//! [`AllocLedger`] is a bookkeeping table for embedding applications
//! that hand out many buffers and want leaks and double-releases to be
//! reportable facts instead of silent bugs. Buffers register at
//! creation, update after growth, and retire at release; whatever is
//! still live at teardown is the leak report.
//!
//! The table is an `IndexMap` (not `HashMap`) so the leak report comes
//! out in registration order.

use indexmap::IndexMap;

use coffer_core::{BufferError, BufferId};

/// A single live registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerEntry {
    /// Human-readable label (for diagnostics).
    pub label: String,
    /// Current backing-storage size in bytes.
    pub bytes: usize,
}

/// Tracks live allocations by [`BufferId`].
///
/// IDs are handed out from a monotonic counter and never reused, so a
/// retired ID stays recognisably dead: retiring it a second time
/// reports [`BufferError::UnknownBuffer`] rather than corrupting the
/// ledger.
#[derive(Debug, Default)]
pub struct AllocLedger {
    live: IndexMap<BufferId, LedgerEntry>,
    next_id: u32,
}

impl AllocLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            live: IndexMap::new(),
            next_id: 0,
        }
    }

    /// Record a live allocation; returns its ID.
    pub fn register(&mut self, label: impl Into<String>, bytes: usize) -> BufferId {
        let id = BufferId(self.next_id);
        self.next_id += 1;
        self.live.insert(
            id,
            LedgerEntry {
                label: label.into(),
                bytes,
            },
        );
        id
    }

    /// Re-record an allocation's size after growth.
    pub fn update(&mut self, id: BufferId, bytes: usize) -> Result<(), BufferError> {
        match self.live.get_mut(&id) {
            Some(entry) => {
                entry.bytes = bytes;
                Ok(())
            }
            None => Err(BufferError::UnknownBuffer { id }),
        }
    }

    /// Mark an allocation released; returns the freed byte count.
    ///
    /// Retiring an ID that is not live — never registered, or already
    /// retired — reports `UnknownBuffer`. This is the double-release
    /// made detectable.
    pub fn retire(&mut self, id: BufferId) -> Result<usize, BufferError> {
        match self.live.shift_remove(&id) {
            Some(entry) => Ok(entry.bytes),
            None => Err(BufferError::UnknownBuffer { id }),
        }
    }

    /// Number of live registrations.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Total bytes across live registrations.
    pub fn live_bytes(&self) -> usize {
        self.live.values().map(|e| e.bytes).sum()
    }

    /// Live registrations in registration order — the leak report.
    pub fn leaked(&self) -> impl Iterator<Item = (BufferId, &LedgerEntry)> {
        self.live.iter().map(|(&id, entry)| (id, entry))
    }
}
