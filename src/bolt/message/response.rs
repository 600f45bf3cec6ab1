//! Bolt protocol response messages.
//!
//! Response messages are sent from the server to the client. A query answers
//! `RUN` with a SUCCESS carrying the field names, then streams RECORD messages
//! and closes the stream with a trailing SUCCESS holding the summary.

use std::collections::HashMap;

use super::tag;
use crate::bolt::packstream::PackStreamValue;
use crate::driver::{DriverError, DriverResult};

/// All Bolt response messages.
#[derive(Debug, Clone)]
pub enum BoltResponse {
    /// SUCCESS - Operation completed successfully
    Success(SuccessMessage),
    /// RECORD - Query result record
    Record(RecordMessage),
    /// FAILURE - Operation failed
    Failure(FailureMessage),
    /// IGNORED - Message was ignored (connection in FAILED state)
    Ignored,
}

impl BoltResponse {
    /// Get the message tag.
    pub fn tag(&self) -> u8 {
        match self {
            BoltResponse::Success(_) => tag::SUCCESS,
            BoltResponse::Record(_) => tag::RECORD,
            BoltResponse::Failure(_) => tag::FAILURE,
            BoltResponse::Ignored => tag::IGNORED,
        }
    }

    /// Get message name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            BoltResponse::Success(_) => "SUCCESS",
            BoltResponse::Record(_) => "RECORD",
            BoltResponse::Failure(_) => "FAILURE",
            BoltResponse::Ignored => "IGNORED",
        }
    }

    /// Check if this is a success response.
    pub fn is_success(&self) -> bool {
        matches!(self, BoltResponse::Success(_))
    }
}

/// SUCCESS message - Operation completed successfully.
#[derive(Debug, Clone, Default)]
pub struct SuccessMessage {
    /// Response metadata
    pub metadata: HashMap<String, PackStreamValue>,
}

impl SuccessMessage {
    /// Create a new SUCCESS message with empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a SUCCESS message with metadata.
    pub fn with_metadata(metadata: HashMap<String, PackStreamValue>) -> Self {
        Self { metadata }
    }

    /// Add metadata entry.
    pub fn add(&mut self, key: &str, value: PackStreamValue) {
        self.metadata.insert(key.to_string(), value);
    }

    /// Get metadata entry.
    pub fn get(&self, key: &str) -> Option<&PackStreamValue> {
        self.metadata.get(key)
    }

    /// Get field names from RUN success.
    pub fn fields(&self) -> Option<Vec<String>> {
        self.metadata.get("fields").and_then(|v| v.as_list()).map(|list| {
            list.iter()
                .filter_map(|item| item.as_str().map(|s| s.to_string()))
                .collect()
        })
    }

    /// Get query statistics.
    pub fn stats(&self) -> Option<&HashMap<String, PackStreamValue>> {
        self.metadata.get("stats").and_then(|v| v.as_map())
    }

    /// Get bookmark.
    pub fn bookmark(&self) -> Option<&str> {
        self.metadata.get("bookmark").and_then(|v| v.as_str())
    }

    /// Get database name.
    pub fn db(&self) -> Option<&str> {
        self.metadata.get("db").and_then(|v| v.as_str())
    }

    /// Create a RUN success response.
    pub fn run_success(fields: Vec<String>) -> Self {
        let mut msg = Self::new();
        let field_list: Vec<PackStreamValue> = fields
            .into_iter()
            .map(PackStreamValue::String)
            .collect();
        msg.add("fields", PackStreamValue::List(field_list));
        msg
    }

    /// Create a trailing summary carrying the given statistics map.
    pub fn summary(stats: HashMap<String, PackStreamValue>) -> Self {
        let mut msg = Self::new();
        msg.add("stats", PackStreamValue::Map(stats));
        msg
    }
}

/// RECORD message - Query result record.
#[derive(Debug, Clone, Default)]
pub struct RecordMessage {
    /// Field values
    pub fields: Vec<PackStreamValue>,
}

impl RecordMessage {
    /// Create a new RECORD message.
    pub fn new(fields: Vec<PackStreamValue>) -> Self {
        Self { fields }
    }

    /// Get field count.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if record is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get field at index.
    pub fn get(&self, index: usize) -> Option<&PackStreamValue> {
        self.fields.get(index)
    }
}

/// FAILURE message - Operation failed.
#[derive(Debug, Clone)]
pub struct FailureMessage {
    /// Neo4j error code
    pub code: String,
    /// Error message
    pub message: String,
}

impl FailureMessage {
    /// Create a new FAILURE message.
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for FailureMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// The responses of one pulled statement, split into rows and summary.
///
/// The summary is the message that closed the stream. It is `None` only when
/// the server sent nothing at all for the statement.
#[derive(Debug, Clone, Default)]
pub struct BoltResultStream {
    /// RECORD messages in arrival order
    pub rows: Vec<RecordMessage>,
    /// Trailing SUCCESS message
    pub summary: Option<SuccessMessage>,
}

impl BoltResultStream {
    /// Create from already separated parts.
    pub fn new(rows: Vec<RecordMessage>, summary: Option<SuccessMessage>) -> Self {
        Self { rows, summary }
    }

    /// Split a raw response sequence. The last message is the summary, every
    /// message before it must be a RECORD.
    pub fn from_responses(mut responses: Vec<BoltResponse>) -> DriverResult<Self> {
        let summary = match responses.pop() {
            None => None,
            Some(BoltResponse::Success(msg)) => Some(msg),
            Some(BoltResponse::Failure(failure)) => return Err(failure.into()),
            Some(other) => {
                return Err(DriverError::protocol(format!(
                    "result stream must end with SUCCESS, got {}",
                    other.name()
                )))
            }
        };

        let rows = responses
            .into_iter()
            .map(|response| match response {
                BoltResponse::Record(record) => Ok(record),
                BoltResponse::Failure(failure) => Err(failure.into()),
                other => Err(DriverError::protocol(format!(
                    "unexpected {} inside result stream",
                    other.name()
                ))),
            })
            .collect::<DriverResult<Vec<_>>>()?;

        Ok(Self { rows, summary })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
