//! Bounded UTF-8 text buffer.
//!
//! [`TextBuf`] holds at most `capacity` bytes of valid UTF-8. Writes
//! that do not fit are rejected whole ([`TextBuf::copy_str`],
//! [`TextBuf::append_str`]) or truncated explicitly at a character
//! boundary with the written length reported
//! ([`TextBuf::append_lossy`]) — there is no silent truncation and no
//! partially-written state. Line input is bounded by the remaining
//! capacity ([`TextBuf::read_line_from`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buf;

pub use buf::TextBuf;
pub use coffer_core::TextError;
