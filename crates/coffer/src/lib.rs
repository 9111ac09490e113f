//! Coffer: bounded, explicit-ownership dynamic storage.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the coffer sub-crates. For most users, adding `coffer` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use coffer::{BufferError, SlotBuffer};
//!
//! let mut samples = SlotBuffer::try_with_capacity(2)?;
//! samples.push(10u32)?;
//! samples.push(20)?;
//!
//! // The third push grows the buffer by doubling; existing values
//! // are preserved in order.
//! samples.push(30)?;
//! assert_eq!(samples.get(0)?, 10);
//! assert_eq!(samples.get(2)?, 30);
//!
//! // Indexed access beyond the populated length is an error, never
//! // stray data.
//! assert!(matches!(
//!     samples.get(3),
//!     Err(BufferError::OutOfRange { index: 3, len: 3 })
//! ));
//!
//! // Release is explicit and idempotent; a released buffer rejects
//! // every content operation.
//! samples.release();
//! samples.release();
//! assert_eq!(samples.get(0), Err(BufferError::Released));
//! # Ok::<(), coffer::BufferError>(())
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in
//! the top-level re-exports:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`buf`] | `coffer-buf` | `SlotBuffer`, `GrowthPolicy`, `AllocLedger`, allocation helpers |
//! | [`text`] | `coffer-text` | `TextBuf` bounded text buffer |
//! | [`types`] | `coffer-core` | IDs and error types |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use coffer_buf as buf;
pub use coffer_core as types;
pub use coffer_text as text;

pub use coffer_buf::{AllocLedger, GrowthPolicy, LedgerEntry, SlotBuffer};
pub use coffer_core::{BufferError, BufferId, TextError};
pub use coffer_text::TextBuf;
