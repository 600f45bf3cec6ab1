//! # HTTP (REST) Transaction API Responses
//!
//! Typed model of the JSON body returned by the HTTP transactional endpoint:
//!
//! ```json
//! {
//!   "results": [{
//!     "columns": ["p"],
//!     "data": [{
//!       "row": [{"name": "Alice"}],
//!       "meta": [{"id": 1, "type": "node", "deleted": false}],
//!       "graph": {"nodes": [{"id": "1", "labels": ["Person"], "properties": {"name": "Alice"}}]}
//!     }],
//!     "stats": {"nodes_created": 0, "contains_updates": false}
//!   }],
//!   "errors": []
//! }
//! ```
//!
//! Row values stay as raw [`serde_json::Value`]s; the formatters decide what
//! each one becomes. `meta`, `graph` and `stats` only appear when the statement
//! asked for them (see [`crate::driver::StatementConfig`]).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};

use crate::driver::{BoltError, DriverError, DriverResult};

/// Top-level HTTP response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpResponseBody {
    /// One entry per submitted statement
    #[serde(default)]
    pub results: Vec<HttpStatementResult>,
    /// Server-reported errors
    #[serde(default)]
    pub errors: Vec<HttpError>,
}

impl HttpResponseBody {
    /// Parse a raw response body.
    pub fn from_slice(bytes: &[u8]) -> DriverResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Build from an already parsed JSON document.
    pub fn from_value(value: Json) -> DriverResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Fail with the first server error, if any.
    pub fn check_errors(&self) -> DriverResult<()> {
        match self.errors.first() {
            Some(error) => Err(error.clone().into()),
            None => Ok(()),
        }
    }
}

/// Result block of a single statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpStatementResult {
    /// Declared column names
    #[serde(default)]
    pub columns: Vec<String>,
    /// One entry per row
    #[serde(default)]
    pub data: Vec<HttpRowData>,
    /// Underscored statistics block (`includeStats`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Map<String, Json>>,
}

/// One row with its parallel `meta` and `graph` views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpRowData {
    /// Positional row values
    #[serde(default)]
    pub row: Vec<Json>,
    /// Positional type metadata (object, list or null per column)
    #[serde(default)]
    pub meta: Vec<Json>,
    /// Graph view of the row (`resultDataContents` contains `GRAPH`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<HttpGraph>,
}

impl HttpRowData {
    /// Graph type tag (`node`, `relationship`, ...) of the value at `index`.
    pub fn meta_type(&self, index: usize) -> Option<&str> {
        self.meta.get(index)?.get("type")?.as_str()
    }

    /// Entity id recorded in the metadata of the value at `index`.
    pub fn meta_id(&self, index: usize) -> Option<i64> {
        json_id(self.meta.get(index)?.get("id")?)
    }

    /// Whether the value at `index` holds graph entities anywhere inside it.
    ///
    /// Paths and lists of entities carry an array of per-element metadata
    /// instead of a single object.
    pub fn meta_has_entities(&self, index: usize) -> bool {
        self.meta.get(index).is_some_and(has_entities)
    }
}

/// Graph view of a row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpGraph {
    /// Distinct nodes of the row
    #[serde(default)]
    pub nodes: Vec<HttpGraphNode>,
    /// Distinct relationships of the row, undecoded
    #[serde(default)]
    pub relationships: Vec<Json>,
}

impl HttpGraph {
    /// Graph node backing the column at `index`.
    ///
    /// Looks the node up by `id` when the metadata carries one; only without
    /// an id does it use the node at the same position as the column.
    pub fn node_for(&self, index: usize, id: Option<i64>) -> Option<&HttpGraphNode> {
        match id {
            Some(id) => self.nodes.iter().find(|n| n.numeric_id() == Some(id)),
            None => self.nodes.get(index),
        }
    }
}

/// Raw node object of the graph view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HttpGraphNode {
    /// Node id, a number or a numeric string depending on server version
    #[serde(default)]
    pub id: Json,
    /// Element id (Neo4j 5.x)
    #[serde(rename = "elementId", default, skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
    /// Labels
    #[serde(default)]
    pub labels: Vec<String>,
    /// Properties
    #[serde(default)]
    pub properties: Map<String, Json>,
}

impl HttpGraphNode {
    /// Id as an integer, if it is one.
    pub fn numeric_id(&self) -> Option<i64> {
        json_id(&self.id)
    }
}

/// Error entry of the `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpError {
    /// Status code, e.g. `Neo.ClientError.Statement.SyntaxError`
    pub code: String,
    /// Error message
    #[serde(default)]
    pub message: String,
}

impl From<HttpError> for DriverError {
    fn from(error: HttpError) -> Self {
        BoltError::new(error.code, error.message).into()
    }
}

fn has_entities(meta: &Json) -> bool {
    match meta {
        Json::Object(map) => map.contains_key("type") || map.values().any(has_entities),
        Json::Array(items) => items.iter().any(has_entities),
        _ => false,
    }
}

fn json_id(value: &Json) -> Option<i64> {
    match value {
        Json::Number(n) => n.as_i64(),
        Json::String(s) => s.parse().ok(),
        _ => None,
    }
}
