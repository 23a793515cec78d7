//! In-memory transport for tests and local development.
//!
//! Applies write requests to an in-memory tuple set with the same
//! semantics as the remote service: a request is validated in full before
//! anything is applied, duplicate writes are rejected, and deletes of
//! missing tuples are rejected.

use std::collections::HashSet;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::error::{TransportError, TransportResult};
use crate::traits::TupleTransport;
use crate::wire::{WriteRequestBody, WriteResponse};

/// A stored tuple, identity only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct StoredTupleKey {
    user: String,
    relation: String,
    object: String,
}

impl StoredTupleKey {
    fn display(&self) -> String {
        format!("{}#{}@{}", self.object, self.relation, self.user)
    }
}

/// In-memory implementation of [`TupleTransport`].
///
/// Uses `HashSet` per store for O(1) write/delete membership checks and
/// `DashMap` for thread-safe concurrent access across stores.
#[derive(Debug, Default)]
pub struct MemoryTupleTransport {
    tuples: DashMap<String, HashSet<StoredTupleKey>>,
}

impl MemoryTupleTransport {
    /// Creates a new empty in-memory transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tuples currently stored for a store.
    pub fn tuple_count(&self, store_id: &str) -> usize {
        self.tuples.get(store_id).map_or(0, |set| set.len())
    }

    /// Whether the store contains the given tuple.
    pub fn contains(&self, store_id: &str, user: &str, relation: &str, object: &str) -> bool {
        self.tuples.get(store_id).is_some_and(|set| {
            set.contains(&StoredTupleKey {
                user: user.to_string(),
                relation: relation.to_string(),
                object: object.to_string(),
            })
        })
    }
}

#[async_trait]
impl TupleTransport for MemoryTupleTransport {
    async fn send(
        &self,
        store_id: &str,
        request: &WriteRequestBody,
    ) -> TransportResult<WriteResponse> {
        let mut entry = self.tuples.entry(store_id.to_string()).or_default();

        let writes: Vec<StoredTupleKey> = request
            .writes
            .iter()
            .flat_map(|w| &w.tuple_keys)
            .map(|tk| StoredTupleKey {
                user: tk.user.clone(),
                relation: tk.relation.clone(),
                object: tk.object.clone(),
            })
            .collect();
        let deletes: Vec<StoredTupleKey> = request
            .deletes
            .iter()
            .flat_map(|d| &d.tuple_keys)
            .map(|tk| StoredTupleKey {
                user: tk.user.clone(),
                relation: tk.relation.clone(),
                object: tk.object.clone(),
            })
            .collect();

        // Validate the entire request before applying anything; one write
        // call is atomic.
        for key in &writes {
            if entry.contains(key) {
                return Err(TransportError::DuplicateTuple {
                    key: key.display(),
                });
            }
        }
        for key in &deletes {
            if !entry.contains(key) {
                return Err(TransportError::TupleNotFound {
                    key: key.display(),
                });
            }
        }

        for key in writes {
            entry.insert(key);
        }
        for key in &deletes {
            entry.remove(key);
        }

        Ok(WriteResponse::default())
    }
}
