//! Property-based tests for batch chunking.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::batch::BatchOperation;
    use crate::types::TupleKey;

    fn keys(prefix: &str, n: usize) -> Vec<TupleKey> {
        (0..n)
            .map(|i| {
                TupleKey::new(
                    format!("user:{prefix}{i}"),
                    "viewer",
                    format!("document:{prefix}{i}"),
                )
            })
            .collect()
    }

    fn side(prefix: &'static str) -> impl Strategy<Value = Option<Vec<TupleKey>>> {
        prop_oneof![
            Just(None),
            (0usize..250).prop_map(move |n| Some(keys(prefix, n))),
        ]
    }

    proptest! {
        #[test]
        fn test_chunk_count_is_ceiling_of_total_over_size(
            writes in side("w"),
            deletes in side("d"),
            size in 1usize..=100,
        ) {
            let op = BatchOperation::new(writes, deletes);
            let total = op.total_operations();
            let chunks = op.chunk(size).unwrap();

            prop_assert_eq!(chunks.len(), total.div_ceil(size));
            let sum: usize = chunks.iter().map(BatchOperation::total_operations).sum();
            prop_assert_eq!(sum, total);
        }

        #[test]
        fn test_every_chunk_respects_size_bound(
            writes in side("w"),
            deletes in side("d"),
            size in 1usize..=100,
        ) {
            let op = BatchOperation::new(writes, deletes);
            for chunk in op.chunk(size).unwrap() {
                prop_assert!(chunk.total_operations() <= size);
                prop_assert!(!chunk.is_empty());
            }
        }

        #[test]
        fn test_concatenated_chunks_reproduce_original_order(
            writes in side("w"),
            deletes in side("d"),
            size in 1usize..=100,
        ) {
            let op = BatchOperation::new(writes.clone(), deletes.clone());
            let chunks = op.chunk(size).unwrap();

            let rebuilt_writes: Vec<TupleKey> = chunks
                .iter()
                .flat_map(|c| c.writes().unwrap_or_default().to_vec())
                .collect();
            let rebuilt_deletes: Vec<TupleKey> = chunks
                .iter()
                .flat_map(|c| c.deletes().unwrap_or_default().to_vec())
                .collect();

            prop_assert_eq!(rebuilt_writes, writes.unwrap_or_default());
            prop_assert_eq!(rebuilt_deletes, deletes.unwrap_or_default());
        }

        #[test]
        fn test_at_most_one_chunk_mixes_writes_and_deletes(
            writes in side("w"),
            deletes in side("d"),
            size in 1usize..=100,
        ) {
            let op = BatchOperation::new(writes, deletes);
            let chunks = op.chunk(size).unwrap();

            let mixed = chunks
                .iter()
                .filter(|c| c.writes().is_some() && c.deletes().is_some())
                .count();
            prop_assert!(mixed <= 1);

            // Once a chunk carries deletes, no later chunk may carry writes.
            if let Some(first_delete) = chunks.iter().position(|c| c.deletes().is_some()) {
                for chunk in &chunks[first_delete + 1..] {
                    prop_assert!(chunk.writes().is_none());
                }
            }
        }
    }
}
