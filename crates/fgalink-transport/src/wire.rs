//! Wire format for the tuple write endpoint.
//!
//! Body shapes follow the OpenFGA-style REST API: a single `write` call
//! carries optional `writes` and `deletes` collections. Delete keys never
//! carry conditions; the service ignores them on delete.

use serde::{Deserialize, Serialize};

use fgalink_model::{BatchOperation, RelationshipCondition, TupleKey};

/// A tuple key as sent in the `writes` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TupleKeyBody {
    pub user: String,
    pub relation: String,
    pub object: String,
    /// Optional condition for conditional relationships.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<RelationshipCondition>,
}

impl From<&TupleKey> for TupleKeyBody {
    fn from(key: &TupleKey) -> Self {
        Self {
            user: key.user.clone(),
            relation: key.relation.clone(),
            object: key.object.clone(),
            condition: key.condition.clone(),
        }
    }
}

/// A tuple key as sent in the `deletes` collection (no condition).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TupleKeyWithoutConditionBody {
    pub user: String,
    pub relation: String,
    pub object: String,
}

impl From<&TupleKey> for TupleKeyWithoutConditionBody {
    fn from(key: &TupleKey) -> Self {
        Self {
            user: key.user.clone(),
            relation: key.relation.clone(),
            object: key.object.clone(),
        }
    }
}

/// The `writes` half of a write request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteTuplesBody {
    pub tuple_keys: Vec<TupleKeyBody>,
}

/// The `deletes` half of a write request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteTuplesBody {
    pub tuple_keys: Vec<TupleKeyWithoutConditionBody>,
}

/// Request body for the write endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteRequestBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writes: Option<WriteTuplesBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletes: Option<DeleteTuplesBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_model_id: Option<String>,
}

impl WriteRequestBody {
    /// Builds the request body for one batch operation (or one chunk of
    /// it). A side absent from the operation is absent from the body.
    pub fn from_operation(
        operation: &BatchOperation,
        authorization_model_id: Option<&str>,
    ) -> Self {
        Self {
            writes: operation.writes().map(|keys| WriteTuplesBody {
                tuple_keys: keys.iter().map(TupleKeyBody::from).collect(),
            }),
            deletes: operation.deletes().map(|keys| DeleteTuplesBody {
                tuple_keys: keys.iter().map(TupleKeyWithoutConditionBody::from).collect(),
            }),
            authorization_model_id: authorization_model_id.map(str::to_string),
        }
    }

    /// Total number of tuple keys carried across both sides.
    pub fn tuple_count(&self) -> usize {
        let writes = self.writes.as_ref().map_or(0, |w| w.tuple_keys.len());
        let deletes = self.deletes.as_ref().map_or(0, |d| d.tuple_keys.len());
        writes + deletes
    }
}

/// Response from a successful write call.
///
/// The write endpoint returns an empty JSON object on success.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WriteResponse {}
