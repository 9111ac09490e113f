//! Test fixtures for coffer development.
//!
//! Provides growth policies tuned for deterministic failure paths, a
//! sequential-fill helper, and [`FailingReader`], a reader that fails
//! deterministically after serving a fixed payload.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::io::{self, BufRead, Read};

use coffer_buf::{GrowthPolicy, SlotBuffer};

/// A policy whose slot ceiling forces growth failure at a known point.
///
/// `min_capacity` is 1 so the ceiling is reachable even from a
/// zero-capacity buffer.
pub fn tight_policy(max_slots: usize) -> GrowthPolicy {
    GrowthPolicy {
        min_capacity: 1,
        max_slots: Some(max_slots),
        ..GrowthPolicy::new()
    }
}

/// Push `0..n` into `buf` for test setup.
pub fn fill_sequential(buf: &mut SlotBuffer<u64>, n: u64) {
    for v in 0..n {
        buf.push(v).expect("fixture buffer has room to grow");
    }
}

/// A reader that serves a fixed payload, then fails deterministically.
///
/// Every read past the end of the payload returns a `BrokenPipe`
/// error instead of EOF, so input error paths can be exercised without
/// touching the filesystem.
pub struct FailingReader {
    payload: Vec<u8>,
    pos: usize,
}

impl FailingReader {
    pub fn new(payload: &[u8]) -> Self {
        Self {
            payload: payload.to_vec(),
            pos: 0,
        }
    }
}

impl Read for FailingReader {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let n = {
            let buf = self.fill_buf()?;
            let n = buf.len().min(out.len());
            out[..n].copy_from_slice(&buf[..n]);
            n
        };
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for FailingReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.pos >= self.payload.len() {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "reader failed after payload",
            ));
        }
        Ok(&self.payload[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.payload.len());
    }
}
