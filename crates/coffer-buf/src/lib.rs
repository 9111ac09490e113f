//! Bounded growable slot storage with explicit lifecycle discipline.
//!
//! The centrepiece is [`SlotBuffer`]: an owning container over a
//! contiguous block of default-initialized slots with an explicit
//! populated length, a configurable growth policy, and an idempotent
//! release operation. Allocation failure is detected in one place
//! ([`alloc`]) and surfaced deterministically instead of corrupting
//! state.
//!
//! # Architecture
//!
//! ```text
//! SlotBuffer<T> (owning container)
//! ├── alloc (fallible zero-init allocation, one seam for all storage)
//! ├── GrowthPolicy (factor, minimum, optional slot ceiling)
//! └── released flag (use-after-release rejected, release idempotent)
//!
//! AllocLedger (live-allocation table, leak and double-release reporting)
//! ```
//!
//! # Safety posture
//!
//! All storage is `Vec<T>` with every slot initialized to
//! `T::default()`. No `MaybeUninit`, no `unsafe`: a `SlotBuffer` can
//! never hand out garbage memory, and a released buffer refuses every
//! content operation with [`BufferError::Released`] rather than
//! touching freed state.
//!
//! [`BufferError::Released`]: coffer_core::BufferError::Released

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alloc;
pub mod config;
pub mod ledger;
pub mod slot;

// Public re-exports for the primary API surface.
pub use coffer_core::{BufferError, BufferId};
pub use config::GrowthPolicy;
pub use ledger::{AllocLedger, LedgerEntry};
pub use slot::SlotBuffer;
