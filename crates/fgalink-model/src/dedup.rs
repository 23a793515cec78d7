//! Duplicate filtering for tuple key collections.
//!
//! The write endpoint rejects requests containing duplicate tuples, so the
//! engine filters redundant keys out of each side before any call is
//! planned. Every downstream size check (transactional limit, chunk count)
//! operates on the filtered collections.

use std::collections::HashSet;

use crate::types::TupleKey;

/// Removes duplicate tuple keys from the writes and deletes collections.
///
/// Each side is filtered independently; the first occurrence of each
/// `(user, relation, object)` identity is kept in its original position.
/// An absent side stays absent. Pure function, no side effects.
pub fn dedupe(
    writes: Option<Vec<TupleKey>>,
    deletes: Option<Vec<TupleKey>>,
) -> (Option<Vec<TupleKey>>, Option<Vec<TupleKey>>) {
    (writes.map(dedupe_keys), deletes.map(dedupe_keys))
}

/// Removes duplicate keys from a single collection, preserving first-seen
/// order.
pub fn dedupe_keys(keys: Vec<TupleKey>) -> Vec<TupleKey> {
    let mut seen = HashSet::with_capacity(keys.len());
    keys.into_iter()
        .filter(|key| seen.insert(key.identity()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RelationshipCondition;

    #[test]
    fn test_removes_duplicate_keys_keeping_first_occurrence() {
        let keys = vec![
            TupleKey::new("user:alice", "viewer", "document:doc1"),
            TupleKey::new("user:bob", "viewer", "document:doc1"),
            TupleKey::new("user:alice", "viewer", "document:doc1"),
        ];

        let filtered = dedupe_keys(keys);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].user, "user:alice");
        assert_eq!(filtered[1].user, "user:bob");
    }

    #[test]
    fn test_keys_differing_only_by_condition_collapse_to_first() {
        let keys = vec![
            TupleKey::with_condition(
                "user:alice",
                "viewer",
                "document:doc1",
                RelationshipCondition::new("in_office_hours"),
            ),
            TupleKey::new("user:alice", "viewer", "document:doc1"),
        ];

        let filtered = dedupe_keys(keys);

        // First occurrence wins, condition and all.
        assert_eq!(filtered.len(), 1);
        assert_eq!(
            filtered[0].condition.as_ref().unwrap().name,
            "in_office_hours"
        );
    }

    #[test]
    fn test_sides_are_filtered_independently() {
        let writes = vec![
            TupleKey::new("user:alice", "viewer", "document:doc1"),
            TupleKey::new("user:alice", "viewer", "document:doc1"),
        ];
        let deletes = vec![TupleKey::new("user:alice", "viewer", "document:doc1")];

        let (writes, deletes) = dedupe(Some(writes), Some(deletes));

        // The same identity may appear on both sides; only intra-side
        // duplicates are removed.
        assert_eq!(writes.unwrap().len(), 1);
        assert_eq!(deletes.unwrap().len(), 1);
    }

    #[test]
    fn test_absent_sides_stay_absent() {
        let (writes, deletes) = dedupe(None, None);
        assert!(writes.is_none());
        assert!(deletes.is_none());
    }

    #[test]
    fn test_order_preserved_for_distinct_keys() {
        let keys: Vec<TupleKey> = (0..10)
            .map(|i| TupleKey::new(format!("user:user{i}"), "viewer", "document:doc1"))
            .collect();

        let filtered = dedupe_keys(keys.clone());

        assert_eq!(filtered, keys);
    }
}
