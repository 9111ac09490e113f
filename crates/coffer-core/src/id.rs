//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a registered allocation in an allocation ledger.
///
/// IDs are handed out sequentially by the ledger and are never reused
/// within a single ledger instance, so a retired ID stays invalid for
/// the rest of the ledger's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(pub u32);

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for BufferId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prints_raw_value() {
        assert_eq!(BufferId(7).to_string(), "7");
    }

    #[test]
    fn ordering_follows_raw_value() {
        assert!(BufferId(1) < BufferId(2));
        assert_eq!(BufferId::from(3), BufferId(3));
    }
}
