//! Batch write operations and size-bounded chunking.

use crate::error::{ModelError, ModelResult};
use crate::types::TupleKey;

/// Maximum tuples per write request enforced by the service.
/// The write endpoint rejects requests carrying more than 100 operations.
pub const MAX_TUPLES_PER_WRITE: usize = 100;

/// A batch of tuple writes and deletes destined for one store.
///
/// Immutable once constructed. [`BatchOperation::chunk`] derives new
/// operations and never mutates the original; an absent side means the
/// request will omit that field entirely rather than sending an empty
/// collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOperation {
    writes: Option<Vec<TupleKey>>,
    deletes: Option<Vec<TupleKey>>,
}

impl BatchOperation {
    /// Creates a batch operation from already-filtered collections.
    pub fn new(writes: Option<Vec<TupleKey>>, deletes: Option<Vec<TupleKey>>) -> Self {
        Self { writes, deletes }
    }

    /// The tuple keys to write, if any.
    pub fn writes(&self) -> Option<&[TupleKey]> {
        self.writes.as_deref()
    }

    /// The tuple keys to delete, if any.
    pub fn deletes(&self) -> Option<&[TupleKey]> {
        self.deletes.as_deref()
    }

    /// Total number of operations across both sides.
    pub fn total_operations(&self) -> usize {
        let writes = self.writes.as_ref().map_or(0, Vec::len);
        let deletes = self.deletes.as_ref().map_or(0, Vec::len);
        writes + deletes
    }

    /// Whether this operation carries no work at all.
    pub fn is_empty(&self) -> bool {
        self.total_operations() == 0
    }

    /// Whether this operation exceeds `threshold` and must be split before
    /// it can be sent.
    pub fn requires_chunking(&self, threshold: usize) -> bool {
        self.total_operations() > threshold
    }

    /// Splits this operation into chunks of at most `size` operations each.
    ///
    /// Chunks are filled write-first: all remaining writes are placed
    /// before any deletes, so at most one chunk (the one crossing the
    /// write→delete boundary) mixes both sides. Order within each side is
    /// preserved, and concatenating the chunks reproduces the original
    /// operation exactly.
    ///
    /// Returns [`ModelError::InvalidChunkSize`] when `size` is zero or
    /// exceeds [`MAX_TUPLES_PER_WRITE`]. An empty operation yields an
    /// empty list.
    pub fn chunk(&self, size: usize) -> ModelResult<Vec<BatchOperation>> {
        if size == 0 || size > MAX_TUPLES_PER_WRITE {
            return Err(ModelError::InvalidChunkSize {
                size,
                max: MAX_TUPLES_PER_WRITE,
            });
        }
        if self.is_empty() {
            return Ok(Vec::new());
        }

        let writes = self.writes.as_deref().unwrap_or_default();
        let deletes = self.deletes.as_deref().unwrap_or_default();

        let mut chunks = Vec::with_capacity(self.total_operations().div_ceil(size));
        let mut write_cursor = 0;
        let mut delete_cursor = 0;

        while write_cursor < writes.len() || delete_cursor < deletes.len() {
            let take_writes = size.min(writes.len() - write_cursor);
            let take_deletes = (size - take_writes).min(deletes.len() - delete_cursor);

            let chunk_writes = (take_writes > 0)
                .then(|| writes[write_cursor..write_cursor + take_writes].to_vec());
            let chunk_deletes = (take_deletes > 0)
                .then(|| deletes[delete_cursor..delete_cursor + take_deletes].to_vec());

            write_cursor += take_writes;
            delete_cursor += take_deletes;

            chunks.push(BatchOperation {
                writes: chunk_writes,
                deletes: chunk_deletes,
            });
        }

        Ok(chunks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_keys(n: usize) -> Vec<TupleKey> {
        (0..n)
            .map(|i| TupleKey::new(format!("user:user{i}"), "viewer", format!("document:doc{i}")))
            .collect()
    }

    fn delete_keys(n: usize) -> Vec<TupleKey> {
        (0..n)
            .map(|i| TupleKey::new(format!("user:user{i}"), "editor", format!("document:old{i}")))
            .collect()
    }

    #[test]
    fn test_total_operations_counts_both_sides() {
        let op = BatchOperation::new(Some(write_keys(3)), Some(delete_keys(2)));
        assert_eq!(op.total_operations(), 5);
        assert!(!op.is_empty());
    }

    #[test]
    fn test_absent_sides_count_as_zero() {
        let op = BatchOperation::new(None, None);
        assert_eq!(op.total_operations(), 0);
        assert!(op.is_empty());
    }

    #[test]
    fn test_requires_chunking_threshold() {
        let op = BatchOperation::new(Some(write_keys(101)), None);
        assert!(op.requires_chunking(MAX_TUPLES_PER_WRITE));
        assert!(!op.requires_chunking(101));
    }

    #[test]
    fn test_chunk_count_matches_ceiling_division() {
        let op = BatchOperation::new(Some(write_keys(10)), None);
        assert_eq!(op.chunk(3).unwrap().len(), 4);
        assert_eq!(op.chunk(5).unwrap().len(), 2);
        assert_eq!(op.chunk(10).unwrap().len(), 1);
        assert_eq!(op.chunk(100).unwrap().len(), 1);
    }

    #[test]
    fn test_chunk_splits_150_writes_into_100_and_50() {
        let op = BatchOperation::new(Some(write_keys(150)), None);
        let chunks = op.chunk(100).unwrap();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].total_operations(), 100);
        assert_eq!(chunks[1].total_operations(), 50);
    }

    #[test]
    fn test_boundary_chunk_mixes_writes_and_deletes() {
        // 2 writes + 2 deletes at chunk size 3: the first chunk takes both
        // writes and one delete, the second takes the remaining delete.
        let op = BatchOperation::new(Some(write_keys(2)), Some(delete_keys(2)));
        let chunks = op.chunk(3).unwrap();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].writes().unwrap().len(), 2);
        assert_eq!(chunks[0].deletes().unwrap().len(), 1);
        assert_eq!(chunks[0].total_operations(), 3);
        assert!(chunks[1].writes().is_none());
        assert_eq!(chunks[1].deletes().unwrap().len(), 1);
    }

    #[test]
    fn test_chunks_preserve_order_and_partition_exactly() {
        let writes = write_keys(7);
        let deletes = delete_keys(5);
        let op = BatchOperation::new(Some(writes.clone()), Some(deletes.clone()));

        let chunks = op.chunk(4).unwrap();

        let rebuilt_writes: Vec<TupleKey> = chunks
            .iter()
            .flat_map(|c| c.writes().unwrap_or_default().to_vec())
            .collect();
        let rebuilt_deletes: Vec<TupleKey> = chunks
            .iter()
            .flat_map(|c| c.deletes().unwrap_or_default().to_vec())
            .collect();

        assert_eq!(rebuilt_writes, writes);
        assert_eq!(rebuilt_deletes, deletes);
        assert!(chunks.iter().all(|c| c.total_operations() <= 4));
    }

    #[test]
    fn test_sides_absent_when_contributing_nothing() {
        let op = BatchOperation::new(Some(write_keys(4)), Some(delete_keys(4)));
        let chunks = op.chunk(2).unwrap();

        assert_eq!(chunks.len(), 4);
        // Write-only chunks carry no deletes collection at all.
        assert!(chunks[0].deletes().is_none());
        assert!(chunks[1].deletes().is_none());
        // Delete-only chunks carry no writes collection.
        assert!(chunks[2].writes().is_none());
        assert!(chunks[3].writes().is_none());
    }

    #[test]
    fn test_chunk_rejects_zero_size() {
        let op = BatchOperation::new(Some(write_keys(5)), None);
        assert_eq!(
            op.chunk(0).unwrap_err(),
            ModelError::InvalidChunkSize {
                size: 0,
                max: MAX_TUPLES_PER_WRITE
            }
        );
    }

    #[test]
    fn test_chunk_rejects_size_over_hard_limit() {
        let op = BatchOperation::new(Some(write_keys(5)), None);
        assert!(op.chunk(101).is_err());
        assert!(op.chunk(100).is_ok());
    }

    #[test]
    fn test_chunking_empty_operation_returns_no_chunks() {
        let op = BatchOperation::new(None, None);
        assert!(op.chunk(10).unwrap().is_empty());

        let op = BatchOperation::new(Some(Vec::new()), Some(Vec::new()));
        assert!(op.chunk(10).unwrap().is_empty());
    }

    #[test]
    fn test_chunk_does_not_mutate_original() {
        let op = BatchOperation::new(Some(write_keys(6)), Some(delete_keys(3)));
        let before = op.clone();
        let _ = op.chunk(2).unwrap();
        assert_eq!(op, before);
    }
}
