//! Decoded PackStream values.
//!
//! PackStream is the binary serialization format used by the Bolt protocol.
//! Wire decoding happens in the connection layer; this module holds the
//! decoded value model the formatters consume.
//!
//! # Graph Structures
//!
//! - **Node**: id, labels, properties (+ element id on Bolt 5)
//! - **Relationship** / **Path**: passed through undecoded
//!
//! Temporal and spatial structures are also passed through; their tags are
//! listed in [`marker`] for diagnostics.

pub mod marker;
pub mod structures;
pub mod types;

pub use marker::*;
pub use structures::PackStreamNode;
pub use types::{PackStreamStructure, PackStreamValue};

use std::fmt;

/// PackStream errors.
#[derive(Debug, Clone)]
pub enum PackStreamError {
    /// Invalid structure format
    InvalidStructure(String),
}

impl fmt::Display for PackStreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackStreamError::InvalidStructure(msg) => write!(f, "Invalid structure: {}", msg),
        }
    }
}

impl std::error::Error for PackStreamError {}
