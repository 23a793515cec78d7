//! Core type definitions for relationship tuple writes.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Condition attached to a relationship tuple.
///
/// The name must match a condition defined in the store's authorization
/// model; the context supplies parameter values for its evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipCondition {
    /// The name of the condition.
    pub name: String,
    /// Optional context parameters for the condition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<HashMap<String, serde_json::Value>>,
}

impl RelationshipCondition {
    /// Creates a condition with no context parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            context: None,
        }
    }

    /// Creates a condition with context parameters.
    pub fn with_context(
        name: impl Into<String>,
        context: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            name: name.into(),
            context: Some(context),
        }
    }
}

/// A relationship tuple key: `(user, relation, object)` plus an optional
/// condition.
///
/// Two keys with the same `(user, relation, object)` triple are considered
/// duplicates for filtering purposes even when their conditions differ
/// (see [`TupleKey::identity`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TupleKey {
    /// The user (subject) of the relationship (e.g., "user:alice").
    pub user: String,
    /// The relation between user and object (e.g., "viewer").
    pub relation: String,
    /// The object of the relationship (e.g., "document:readme").
    pub object: String,
    /// Optional condition for conditional relationships.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<RelationshipCondition>,
}

impl TupleKey {
    /// Creates an unconditioned tuple key.
    pub fn new(
        user: impl Into<String>,
        relation: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            relation: relation.into(),
            object: object.into(),
            condition: None,
        }
    }

    /// Creates a tuple key carrying a condition.
    pub fn with_condition(
        user: impl Into<String>,
        relation: impl Into<String>,
        object: impl Into<String>,
        condition: RelationshipCondition,
    ) -> Self {
        Self {
            user: user.into(),
            relation: relation.into(),
            object: object.into(),
            condition: Some(condition),
        }
    }

    /// Returns the deduplication identity of this key.
    ///
    /// The condition is deliberately excluded: the service treats a write
    /// and its conditioned variant as the same tuple slot.
    pub fn identity(&self) -> TupleIdentity {
        TupleIdentity {
            user: self.user.clone(),
            relation: self.relation.clone(),
            object: self.object.clone(),
        }
    }
}

impl fmt::Display for TupleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}@{}", self.object, self.relation, self.user)
    }
}

/// Key for identifying unique tuples (used for deduplication).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TupleIdentity {
    pub user: String,
    pub relation: String,
    pub object: String,
}
