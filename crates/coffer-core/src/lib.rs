//! Core types for the coffer storage workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the strongly-typed identifiers and the error taxonomies shared by
//! the storage (`coffer-buf`) and text (`coffer-text`) crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::{BufferError, TextError};
pub use id::BufferId;
