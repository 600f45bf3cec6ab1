//! Typed views over decoded PackStream graph structures.

use std::collections::HashMap;

use super::marker::NODE_TAG;
use super::types::{PackStreamStructure, PackStreamValue};
use super::PackStreamError;

/// A Node structure in PackStream format.
///
/// Bolt 4.x sends `[id, labels, properties]`, Bolt 5.x appends the element id.
#[derive(Debug, Clone, PartialEq)]
pub struct PackStreamNode {
    /// Node ID
    pub id: i64,
    /// Node labels
    pub labels: Vec<String>,
    /// Node properties
    pub properties: HashMap<String, PackStreamValue>,
    /// Element ID (Neo4j 5.x)
    pub element_id: Option<String>,
}

impl PackStreamNode {
    /// Create a new node.
    pub fn new(id: i64, labels: Vec<String>, properties: HashMap<String, PackStreamValue>) -> Self {
        Self {
            id,
            labels,
            properties,
            element_id: None,
        }
    }

    /// Set the element ID (Neo4j 5.x).
    pub fn with_element_id(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = Some(element_id.into());
        self
    }

    /// Convert to PackStreamValue.
    pub fn to_value(&self) -> PackStreamValue {
        let mut fields = vec![
            PackStreamValue::Integer(self.id),
            PackStreamValue::List(
                self.labels
                    .iter()
                    .map(|s| PackStreamValue::String(s.clone()))
                    .collect(),
            ),
            PackStreamValue::Map(self.properties.clone()),
        ];
        if let Some(element_id) = &self.element_id {
            fields.push(PackStreamValue::String(element_id.clone()));
        }

        PackStreamValue::Structure(PackStreamStructure::new(NODE_TAG, fields))
    }

    /// Try to parse from a PackStreamValue.
    pub fn from_value(value: &PackStreamValue) -> Result<Self, PackStreamError> {
        let s = value
            .as_structure()
            .ok_or_else(|| PackStreamError::InvalidStructure("expected Node structure".into()))?;
        Self::from_structure(s)
    }

    /// Try to parse from a structure.
    pub fn from_structure(s: &PackStreamStructure) -> Result<Self, PackStreamError> {
        if s.tag != NODE_TAG {
            return Err(PackStreamError::InvalidStructure(format!(
                "expected Node tag 0x{:02X}, got 0x{:02X}",
                NODE_TAG, s.tag
            )));
        }

        if s.fields.len() < 3 {
            return Err(PackStreamError::InvalidStructure(
                "Node requires at least 3 fields".into(),
            ));
        }

        let id = s.fields[0]
            .as_int()
            .ok_or_else(|| PackStreamError::InvalidStructure("Node id must be integer".into()))?;

        let labels = s.fields[1]
            .as_list()
            .ok_or_else(|| PackStreamError::InvalidStructure("Node labels must be list".into()))?
            .iter()
            .map(|v| {
                v.as_str()
                    .map(|s| s.to_string())
                    .ok_or_else(|| PackStreamError::InvalidStructure("Label must be string".into()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let properties = s.fields[2]
            .as_map()
            .ok_or_else(|| PackStreamError::InvalidStructure("Node properties must be map".into()))?
            .clone();

        let element_id = s.fields.get(3).and_then(|v| v.as_str()).map(|s| s.to_string());

        Ok(Self {
            id,
            labels,
            properties,
            element_id,
        })
    }
}
