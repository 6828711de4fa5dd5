//! Issue identifiers.
//!
//! This module provides the [`IssueId`] type, a thin wrapper around a GitHub
//! issue number. The number `0` never names a real issue and is reserved for
//! the synthetic "All Issues" root.

use std::fmt;

use serde::Deserialize;

/// Identifier of an issue in the graph, equal to its issue number.
///
/// # Examples
///
/// ```
/// use issue_graph_core::identifier::IssueId;
///
/// let id = IssueId::new(42);
/// assert_eq!(id.number(), 42);
/// assert_eq!(id.to_string(), "#42");
/// assert!(!id.is_synthetic());
/// assert!(IssueId::ALL_ISSUES.is_synthetic());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct IssueId(u64);

impl IssueId {
    /// Identifier of the synthetic root that aggregates all top-level issues.
    pub const ALL_ISSUES: IssueId = IssueId(0);

    /// Creates an identifier from an issue number.
    pub const fn new(number: u64) -> Self {
        Self(number)
    }

    /// Returns the underlying issue number.
    pub const fn number(self) -> u64 {
        self.0
    }

    /// Returns `true` for the reserved synthetic root identifier.
    pub const fn is_synthetic(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for IssueId {
    fn from(number: u64) -> Self {
        Self(number)
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_id_ordering() {
        let mut ids = vec![IssueId::new(7), IssueId::new(2), IssueId::ALL_ISSUES];
        ids.sort();
        assert_eq!(ids, vec![IssueId::new(0), IssueId::new(2), IssueId::new(7)]);
    }

    #[test]
    fn test_issue_id_from_number() {
        let id: IssueId = 12.into();
        assert_eq!(id, IssueId::new(12));
        assert_eq!(id.number(), 12);
    }
}
