//! Benchmark profiles and utilities for the coffer storage crates.
//!
//! Provides deterministic input builders shared by the bench targets:
//!
//! - [`sequential_values`]: `0..n` as `u64` for slot-buffer loads
//! - [`sample_lines`]: newline-joined synthetic lines for text input

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Build `0..n` as a `Vec<u64>`.
pub fn sequential_values(n: usize) -> Vec<u64> {
    (0..n as u64).collect()
}

/// Build `n` newline-terminated synthetic lines.
///
/// Line `i` is `"line <i> payload"` — long enough to exercise the
/// copy path, short enough to fit typical buffer capacities.
pub fn sample_lines(n: usize) -> String {
    let mut out = String::new();
    for i in 0..n {
        out.push_str(&format!("line {i} payload\n"));
    }
    out
}
