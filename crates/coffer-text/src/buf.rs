//! The fixed-capacity text buffer.

use std::io::{BufRead, Read};
use std::str;

use smallvec::SmallVec;

use coffer_core::TextError;

/// Bytes kept inline before spilling to the heap. Most labels and
/// single lines fit without allocating.
const INLINE_BYTES: usize = 32;

/// A fixed-capacity UTF-8 text buffer.
///
/// The capacity is a logical byte limit chosen at construction; the
/// contents are always valid UTF-8 and never exceed it. Whole-string
/// operations either fit completely or leave the buffer unchanged.
#[derive(Clone, Debug)]
pub struct TextBuf {
    bytes: SmallVec<[u8; INLINE_BYTES]>,
    capacity: usize,
}

impl TextBuf {
    /// Create an empty buffer holding at most `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            bytes: SmallVec::new(),
            capacity,
        }
    }

    /// Replace the contents with `src`.
    ///
    /// Rejects the whole operation with `SourceTooLong` when `src`
    /// does not fit — the previous contents are kept unchanged, and
    /// nothing is ever copied partially.
    pub fn copy_str(&mut self, src: &str) -> Result<(), TextError> {
        if src.len() > self.capacity {
            return Err(TextError::SourceTooLong {
                needed: src.len(),
                capacity: self.capacity,
            });
        }
        self.bytes.clear();
        self.bytes.extend_from_slice(src.as_bytes());
        Ok(())
    }

    /// Append `src` to the current contents.
    ///
    /// Rejects the whole operation with `SourceTooLong` when the
    /// result would exceed the capacity; the buffer is unchanged on
    /// failure.
    pub fn append_str(&mut self, src: &str) -> Result<(), TextError> {
        let needed = self.bytes.len() + src.len();
        if needed > self.capacity {
            return Err(TextError::SourceTooLong {
                needed,
                capacity: self.capacity,
            });
        }
        self.bytes.extend_from_slice(src.as_bytes());
        Ok(())
    }

    /// Append the longest prefix of `src` that fits.
    ///
    /// The cut lands on a `char` boundary, so the contents stay valid
    /// UTF-8. Returns the number of bytes written (0 when the buffer
    /// is full or `src` starts with a character too wide for the
    /// remaining space).
    pub fn append_lossy(&mut self, src: &str) -> usize {
        let mut cut = src.len().min(self.remaining());
        while !src.is_char_boundary(cut) {
            cut -= 1;
        }
        self.bytes.extend_from_slice(&src.as_bytes()[..cut]);
        cut
    }

    /// Read one line from `reader`, bounded by the remaining capacity.
    ///
    /// Reads at most `remaining()` bytes up to and including a newline,
    /// strips a trailing `\n` or `\r\n`, validates UTF-8, and appends.
    /// Returns the number of bytes appended. A line longer than the
    /// remaining capacity is cut at the limit and the rest is left in
    /// the reader.
    ///
    /// On `NotUtf8` the buffer is unchanged; the offending bytes have
    /// already been consumed from the reader.
    pub fn read_line_from<R: BufRead>(&mut self, reader: &mut R) -> Result<usize, TextError> {
        let mut raw: Vec<u8> = Vec::new();
        reader
            .take(self.remaining() as u64)
            .read_until(b'\n', &mut raw)
            .map_err(|err| TextError::InputFailed { kind: err.kind() })?;

        if raw.last() == Some(&b'\n') {
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
        }

        let line = str::from_utf8(&raw).map_err(|err| TextError::NotUtf8 {
            valid_up_to: err.valid_up_to(),
        })?;
        self.bytes.extend_from_slice(line.as_bytes());
        Ok(line.len())
    }

    /// The contents as a string slice.
    pub fn as_str(&self) -> &str {
        str::from_utf8(&self.bytes).expect("contents are always valid utf-8")
    }

    /// Current length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The logical capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Free bytes before the buffer is full.
    pub fn remaining(&self) -> usize {
        self.capacity - self.bytes.len()
    }

    /// Forget the contents; capacity is unchanged.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn copy_within_capacity() {
        let mut buf = TextBuf::new(10);
        buf.copy_str("hello").unwrap();
        assert_eq!(buf.as_str(), "hello");
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.remaining(), 5);
    }

    #[test]
    fn oversized_copy_rejected_and_buffer_unchanged() {
        let mut buf = TextBuf::new(10);
        buf.copy_str("short").unwrap();

        let src = "this is a very long string that will overflow";
        let err = buf.copy_str(src).unwrap_err();
        assert_eq!(
            err,
            TextError::SourceTooLong {
                needed: src.len(),
                capacity: 10
            }
        );
        assert_eq!(buf.as_str(), "short");
    }

    #[test]
    fn copy_replaces_previous_contents() {
        let mut buf = TextBuf::new(16);
        buf.copy_str("first").unwrap();
        buf.copy_str("second").unwrap();
        assert_eq!(buf.as_str(), "second");
    }

    #[test]
    fn append_concatenates_within_capacity() {
        let mut buf = TextBuf::new(11);
        buf.append_str("hello").unwrap();
        buf.append_str(" ").unwrap();
        buf.append_str("world").unwrap();
        assert_eq!(buf.as_str(), "hello world");
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn append_overflow_rejected_whole() {
        let mut buf = TextBuf::new(8);
        buf.append_str("hello").unwrap();

        let err = buf.append_str("world").unwrap_err();
        assert_eq!(
            err,
            TextError::SourceTooLong {
                needed: 10,
                capacity: 8
            }
        );
        assert_eq!(buf.as_str(), "hello");
    }

    #[test]
    fn lossy_append_fills_to_capacity() {
        let mut buf = TextBuf::new(8);
        buf.copy_str("hello").unwrap();

        let written = buf.append_lossy("world");
        assert_eq!(written, 3);
        assert_eq!(buf.as_str(), "hellowor");
        assert_eq!(buf.remaining(), 0);

        // Full buffer: nothing more fits.
        assert_eq!(buf.append_lossy("!"), 0);
    }

    #[test]
    fn lossy_append_cuts_at_char_boundary() {
        // "aéé" is 1 + 2 + 2 bytes; a capacity of 4 would cut inside
        // the second 'é', so the cut backs off to byte 3.
        let mut buf = TextBuf::new(4);
        let written = buf.append_lossy("aéé");
        assert_eq!(written, 3);
        assert_eq!(buf.as_str(), "aé");
        assert_eq!(buf.remaining(), 1);
    }

    #[test]
    fn read_line_strips_newline() {
        let mut buf = TextBuf::new(32);
        let mut input = Cursor::new(b"first line\nrest".to_vec());

        let n = buf.read_line_from(&mut input).unwrap();
        assert_eq!(n, 10);
        assert_eq!(buf.as_str(), "first line");
    }

    #[test]
    fn read_line_strips_crlf() {
        let mut buf = TextBuf::new(32);
        let mut input = Cursor::new(b"windows line\r\n".to_vec());

        buf.read_line_from(&mut input).unwrap();
        assert_eq!(buf.as_str(), "windows line");
    }

    #[test]
    fn read_line_without_trailing_newline() {
        let mut buf = TextBuf::new(32);
        let mut input = Cursor::new(b"no newline".to_vec());

        let n = buf.read_line_from(&mut input).unwrap();
        assert_eq!(n, 10);
        assert_eq!(buf.as_str(), "no newline");
    }

    #[test]
    fn overlong_line_cut_at_remaining_capacity() {
        let mut buf = TextBuf::new(4);
        let mut input = Cursor::new(b"abcdefgh\n".to_vec());

        let n = buf.read_line_from(&mut input).unwrap();
        assert_eq!(n, 4);
        assert_eq!(buf.as_str(), "abcd");

        // The rest of the line is still in the reader.
        let mut rest = String::new();
        input.read_line(&mut rest).unwrap();
        assert_eq!(rest, "efgh\n");
    }

    #[test]
    fn read_line_rejects_invalid_utf8() {
        let mut buf = TextBuf::new(16);
        let mut input = Cursor::new(vec![b'o', b'k', 0xff, b'\n']);

        let err = buf.read_line_from(&mut input).unwrap_err();
        assert_eq!(err, TextError::NotUtf8 { valid_up_to: 2 });
        assert!(buf.is_empty());
    }

    #[test]
    fn read_line_reports_reader_failure() {
        use coffer_test_utils::FailingReader;

        let mut buf = TextBuf::new(64);
        let mut reader = FailingReader::new(b"partial");

        let err = buf.read_line_from(&mut reader).unwrap_err();
        assert!(matches!(err, TextError::InputFailed { .. }));
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buf = TextBuf::new(8);
        buf.copy_str("data").unwrap();
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 8);
        assert_eq!(buf.remaining(), 8);
    }

    #[test]
    fn zero_capacity_buffer_accepts_only_empty() {
        let mut buf = TextBuf::new(0);
        buf.copy_str("").unwrap();
        assert!(matches!(
            buf.copy_str("x"),
            Err(TextError::SourceTooLong { .. })
        ));
        assert_eq!(buf.append_lossy("x"), 0);
    }
}
