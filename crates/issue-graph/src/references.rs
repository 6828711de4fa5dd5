//! Extraction of issue references from issue bodies.
//!
//! Relationships are written in free text, for example `Parent issue: #12`
//! or `Sub-task: #7`. A reference is a marker followed by optional spaces or
//! tabs and a positive decimal issue number.

use winnow::{
    Parser as _,
    ascii::{dec_uint, space0},
    combinator::preceded,
    error::ModalResult,
};

use issue_graph_core::identifier::IssueId;

/// Markers that point from an issue to its parent, in scan order.
pub const PARENT_MARKERS: [&str; 4] = ["Parent issue: #", "Parent: #", "Part of #", "Related to #"];

/// Markers that point from an issue to its children, in scan order.
pub const CHILD_MARKERS: [&str; 4] = ["Child issue: #", "Child: #", "Sub-task: #", "Implements #"];

/// Returns the parents named in `body`.
///
/// Results are grouped by marker in [`PARENT_MARKERS`] order, then by
/// position in the text. Duplicates are kept.
///
/// # Examples
///
/// ```
/// use issue_graph::references::find_parent_references;
/// use issue_graph_core::identifier::IssueId;
///
/// let refs = find_parent_references("Part of #3\nParent issue: #1");
/// assert_eq!(refs, vec![IssueId::new(1), IssueId::new(3)]);
/// ```
pub fn find_parent_references(body: &str) -> Vec<IssueId> {
    find_references(body, &PARENT_MARKERS)
}

/// Returns the children named in `body`, ordered like
/// [`find_parent_references`].
pub fn find_child_references(body: &str) -> Vec<IssueId> {
    find_references(body, &CHILD_MARKERS)
}

fn find_references(body: &str, markers: &[&'static str]) -> Vec<IssueId> {
    markers
        .iter()
        .flat_map(|&marker| {
            body.match_indices(marker).filter_map(move |(start, _)| {
                let mut input = &body[start..];
                reference(marker, &mut input).ok()
            })
        })
        .filter(|number| *number > 0)
        .map(IssueId::new)
        .collect()
}

/// Parses `<marker><spaces or tabs><number>`.
fn reference(marker: &'static str, input: &mut &str) -> ModalResult<u64> {
    preceded((marker, space0), dec_uint).parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(numbers: &[u64]) -> Vec<IssueId> {
        numbers.iter().copied().map(IssueId::new).collect()
    }

    #[test]
    fn test_parent_markers() {
        assert_eq!(find_parent_references("Parent issue: #12"), ids(&[12]));
        assert_eq!(find_parent_references("Parent: #4"), ids(&[4]));
        assert_eq!(find_parent_references("This is Part of #9."), ids(&[9]));
        assert_eq!(find_parent_references("Related to #15"), ids(&[15]));
    }

    #[test]
    fn test_child_markers() {
        let body = "Child issue: #2\nChild: #3\nSub-task: #4\nImplements #5";
        assert_eq!(find_child_references(body), ids(&[2, 3, 4, 5]));
        assert!(find_parent_references(body).is_empty());
    }

    #[test]
    fn test_order_is_marker_then_position() {
        let body = "Related to #1\nPart of #2\nParent: #3\nPart of #4";
        assert_eq!(find_parent_references(body), ids(&[3, 2, 4, 1]));
    }

    #[test]
    fn test_whitespace_after_marker() {
        assert_eq!(find_child_references("Sub-task: #  \t42"), ids(&[42]));
        // Newlines end the reference
        assert!(find_child_references("Sub-task: #\n42").is_empty());
    }

    #[test]
    fn test_invalid_numbers_are_skipped() {
        assert!(find_parent_references("Parent: #0").is_empty());
        assert!(find_parent_references("Parent: #abc").is_empty());
        assert!(find_parent_references("Parent: #").is_empty());
        assert!(find_parent_references("Parent: #99999999999999999999999").is_empty());
        assert_eq!(find_parent_references("Parent: #7abc"), ids(&[7]));
    }

    #[test]
    fn test_markers_are_case_sensitive() {
        assert!(find_parent_references("parent issue: #1").is_empty());
        assert!(find_child_references("implements #1").is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        assert_eq!(
            find_child_references("Implements #3 and Implements #3"),
            ids(&[3, 3])
        );
    }
}
