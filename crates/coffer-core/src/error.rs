//! Error types for the coffer storage crates.
//!
//! Organized by subsystem: [`BufferError`] for slot storage and the
//! allocation ledger, [`TextError`] for the bounded text buffer. Every
//! fallible operation reports one of these — no operation truncates
//! silently or returns stray data.

use std::error::Error;
use std::fmt;

use crate::id::BufferId;

/// Errors from slot-buffer and ledger operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// The underlying allocator refused the request.
    ///
    /// Recoverable when raised during growth (the buffer keeps its
    /// pre-call state); at creation time there is no instance to keep,
    /// so the caller picks between the propagating and fail-fast
    /// constructors.
    AllocFailed {
        /// Number of bytes requested from the allocator.
        requested_bytes: usize,
    },
    /// Growth would exceed the configured slot ceiling.
    CapacityExceeded {
        /// Number of slots the operation needed.
        requested: usize,
        /// The configured ceiling in slots.
        limit: usize,
    },
    /// Indexed access at or beyond the populated length.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Populated length at the time of the call.
        len: usize,
    },
    /// Operation on a buffer whose storage has been released.
    Released,
    /// Ledger operation on an ID that is not live — never registered,
    /// or already retired (the double-release case).
    UnknownBuffer {
        /// The unrecognised ID.
        id: BufferId,
    },
    /// A growth policy failed validation.
    InvalidPolicy {
        /// Description of the rejected parameter.
        reason: String,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocFailed { requested_bytes } => {
                write!(f, "allocation failed for {requested_bytes} bytes")
            }
            Self::CapacityExceeded { requested, limit } => {
                write!(
                    f,
                    "capacity ceiling exceeded: requested {requested} slots, limit {limit}"
                )
            }
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::Released => write!(f, "buffer storage has been released"),
            Self::UnknownBuffer { id } => write!(f, "unknown buffer id: {id}"),
            Self::InvalidPolicy { reason } => write!(f, "invalid growth policy: {reason}"),
        }
    }
}

impl Error for BufferError {}

/// Errors from bounded text-buffer operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TextError {
    /// The source does not fit; the buffer is left unchanged.
    SourceTooLong {
        /// Bytes the operation needed.
        needed: usize,
        /// Capacity of the buffer in bytes.
        capacity: usize,
    },
    /// Input bytes were not valid UTF-8.
    NotUtf8 {
        /// Length of the valid prefix, as reported by the decoder.
        valid_up_to: usize,
    },
    /// The underlying reader failed during a bounded line read.
    InputFailed {
        /// Kind of the I/O error.
        kind: std::io::ErrorKind,
    },
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceTooLong { needed, capacity } => {
                write!(
                    f,
                    "source too long: {needed} bytes needed, capacity {capacity}"
                )
            }
            Self::NotUtf8 { valid_up_to } => {
                write!(f, "input is not valid utf-8 after {valid_up_to} bytes")
            }
            Self::InputFailed { kind } => write!(f, "input read failed: {kind}"),
        }
    }
}

impl Error for TextError {}
