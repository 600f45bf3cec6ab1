//! Driver Types
//!
//! 포맷된 결과 값 타입 정의

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as Json;

use super::error::{DriverError, DriverResult};
use crate::bolt::packstream::{PackStreamNode, PackStreamValue};
use crate::rest::HttpGraphNode;

// ============================================================================
// Value - 그래프 값
// ============================================================================

/// 그래프 값 타입
///
/// 노드만 도메인 타입으로 변환됩니다. 관계, 경로, 시간 타입 등은
/// [`Value::Unsupported`]에 원본 그대로 담깁니다.
///
/// 역직렬화는 HTTP 응답 값과 같은 JSON 변환 규칙을 따르므로
/// 노드는 `Map`으로, 바이트는 `List`로 읽힙니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Null
    Null,
    /// Boolean
    Boolean(bool),
    /// Integer (i64)
    Integer(i64),
    /// Float (f64)
    Float(f64),
    /// String
    String(String),
    /// Bytes
    Bytes(Vec<u8>),
    /// List
    List(Vec<Value>),
    /// Map
    Map(HashMap<String, Value>),
    /// Node
    Node(Node),
    /// 변환하지 않은 원본 값
    Unsupported(RawValue),
}

impl Value {
    /// Null 여부
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Boolean으로 변환
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer로 변환
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Float로 변환
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// String으로 변환
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// List로 변환
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Map으로 변환
    pub fn as_map(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Node로 변환
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(n) => Some(n),
            _ => None,
        }
    }

    /// 원본 값으로 변환
    pub fn as_raw(&self) -> Option<&RawValue> {
        match self {
            Value::Unsupported(raw) => Some(raw),
            _ => None,
        }
    }

    /// 타입 이름
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Boolean(_) => "Boolean",
            Value::Integer(_) => "Integer",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
            Value::Node(_) => "Node",
            Value::Unsupported(_) => "Unsupported",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            Value::List(l) => write!(f, "[{} items]", l.len()),
            Value::Map(m) => write!(f, "{{{} entries}}", m.len()),
            Value::Node(n) => write!(f, "{}", n),
            Value::Unsupported(raw) => write!(f, "<unsupported {}>", raw.type_name()),
        }
    }
}

// From implementations
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Node> for Value {
    fn from(v: Node) -> Self {
        Value::Node(v)
    }
}

// ============================================================================
// RawValue - 변환하지 않은 전송 계층 값
// ============================================================================

/// 전송 계층 원본 값
///
/// JSON은 그대로, PackStream 구조체는 `{"tag": .., "fields": [..]}`로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Bolt 구조체 등 디코딩된 PackStream 값
    Bolt(PackStreamValue),
    /// HTTP 응답의 JSON 값
    Json(Json),
}

impl RawValue {
    /// 원본 타입 이름
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Bolt(v) => v.type_name(),
            RawValue::Json(_) => "Json",
        }
    }
}

// ============================================================================
// Node - 그래프 노드
// ============================================================================

/// 그래프 노드
///
/// 레이블은 집합으로 비교합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// 노드 ID
    pub id: i64,
    /// 레이블
    pub labels: Vec<String>,
    /// 속성
    pub properties: HashMap<String, Value>,
    /// 엘리먼트 ID (Neo4j 5.x)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
}

impl Node {
    /// 새 노드 생성 (중복 레이블 제거)
    pub fn new(id: i64, labels: Vec<String>, properties: HashMap<String, Value>) -> Self {
        let mut seen = HashSet::new();
        let labels = labels.into_iter().filter(|l| seen.insert(l.clone())).collect();
        Self {
            id,
            labels,
            properties,
            element_id: None,
        }
    }

    /// 엘리먼트 ID 설정
    pub fn with_element_id(mut self, element_id: Option<String>) -> Self {
        self.element_id = element_id;
        self
    }

    /// HTTP 그래프 노드에서 생성
    pub fn from_http(node: &HttpGraphNode) -> DriverResult<Self> {
        let id = node.numeric_id().ok_or_else(|| {
            DriverError::type_conversion(format!("Graph node id must be an integer, got {}", node.id))
        })?;
        let properties = node
            .properties
            .iter()
            .map(|(k, v)| (k.clone(), Value::from(v.clone())))
            .collect();

        Ok(Self::new(id, node.labels.clone(), properties).with_element_id(node.element_id.clone()))
    }

    /// 레이블 포함 여부
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// 속성 가져오기
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// 속성 가져오기 (타입 변환)
    pub fn get_as<T: TryFrom<Value, Error = DriverError>>(&self, key: &str) -> DriverResult<T> {
        self.properties
            .get(key)
            .cloned()
            .ok_or_else(|| DriverError::type_conversion(format!("Property '{}' not found", key)))
            .and_then(|v| T::try_from(v))
    }
}

/// 엘리먼트 ID는 서버 버전에 따라 한쪽에만 있을 수 있어 비교하지 않습니다.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.properties == other.properties
            && self.labels.len() == other.labels.len()
            && self.labels.iter().all(|l| other.has_label(l))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = if self.labels.is_empty() {
            String::new()
        } else {
            format!(":{}", self.labels.join(":"))
        };
        write!(f, "({}{})", self.id, labels)
    }
}

// ============================================================================
// 전송 계층 값 변환
// ============================================================================

impl From<PackStreamNode> for Node {
    fn from(node: PackStreamNode) -> Self {
        let properties = node
            .properties
            .into_iter()
            .map(|(k, v)| (k, v.into()))
            .collect();
        Node::new(node.id, node.labels, properties).with_element_id(node.element_id)
    }
}

/// 구조체는 재귀적으로 해석하지 않고 원본으로 남깁니다.
impl From<PackStreamValue> for Value {
    fn from(value: PackStreamValue) -> Self {
        match value {
            PackStreamValue::Null => Value::Null,
            PackStreamValue::Boolean(b) => Value::Boolean(b),
            PackStreamValue::Integer(i) => Value::Integer(i),
            PackStreamValue::Float(f) => Value::Float(f),
            PackStreamValue::String(s) => Value::String(s),
            PackStreamValue::Bytes(b) => Value::Bytes(b),
            PackStreamValue::List(l) => Value::List(l.into_iter().map(Into::into).collect()),
            PackStreamValue::Map(m) => Value::Map(m.into_iter().map(|(k, v)| (k, v.into())).collect()),
            structure @ PackStreamValue::Structure(_) => Value::Unsupported(RawValue::Bolt(structure)),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Json::deserialize(deserializer).map(Value::from)
    }
}

impl From<Json> for Value {
    fn from(value: Json) -> Self {
        match value {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Boolean(b),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => n
                    .as_f64()
                    .map(Value::Float)
                    .unwrap_or_else(|| Value::Unsupported(RawValue::Json(Json::Number(n)))),
            },
            Json::String(s) => Value::String(s),
            Json::Array(a) => Value::List(a.into_iter().map(Into::into).collect()),
            Json::Object(o) => Value::Map(o.into_iter().map(|(k, v)| (k, v.into())).collect()),
        }
    }
}

// ============================================================================
// TryFrom implementations
// ============================================================================

impl TryFrom<Value> for bool {
    type Error = DriverError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Boolean(b) => Ok(b),
            _ => Err(DriverError::type_conversion(format!(
                "Cannot convert {} to bool",
                value.type_name()
            ))),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = DriverError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(i) => Ok(i),
            _ => Err(DriverError::type_conversion(format!(
                "Cannot convert {} to i64",
                value.type_name()
            ))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = DriverError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(f) => Ok(f),
            Value::Integer(i) => Ok(i as f64),
            _ => Err(DriverError::type_conversion(format!(
                "Cannot convert {} to f64",
                value.type_name()
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = DriverError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(DriverError::type_conversion(format!(
                "Cannot convert {} to String",
                value.type_name()
            ))),
        }
    }
}

impl TryFrom<Value> for Node {
    type Error = DriverError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Node(n) => Ok(n),
            _ => Err(DriverError::type_conversion(format!(
                "Cannot convert {} to Node",
                value.type_name()
            ))),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
