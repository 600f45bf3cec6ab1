//! Record Formatter
//!
//! 결과 행을 [`Record`]로 변환
//!
//! 각 위치의 값은 다음 규칙으로 변환됩니다.
//!
//! - Bolt: 노드 구조체는 [`Node`], 그 외 구조체는 [`Value::Unsupported`],
//!   나머지는 같은 형태의 [`Value`]
//! - HTTP: 스칼라는 그대로, 객체/배열은 `meta[i].type`에 따라
//!   `"node"`이면 그래프 뷰의 [`Node`], 다른 타입이거나 경로/엔티티 목록처럼
//!   메타데이터 안에 엔티티가 있으면 [`Value::Unsupported`],
//!   그 외에는 [`Value::List`] / [`Value::Map`]
//!
//! 입력 값은 어느 경우에도 버려지지 않습니다.

use serde_json::Value as Json;

use super::Formatter;
use crate::bolt::{BoltResultStream, PackStreamNode, PackStreamValue, RecordMessage, SuccessMessage};
use crate::driver::{
    DriverError, DriverResult, Node, RawValue, Record, ResultDataContent, StatementConfig, Value,
};
use crate::rest::{HttpResponseBody, HttpRowData, HttpStatementResult};

// ============================================================================
// RecordFormatter - 레코드 포매터
// ============================================================================

/// 레코드 포매터
///
/// Bolt 결과는 `Vec<Record>`, HTTP 결과는 결과 블록마다 하나의 `Vec<Record>`입니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFormatter;

impl RecordFormatter {
    /// 새 포매터 생성
    pub fn new() -> Self {
        Self
    }

    /// RECORD 메시지 하나를 변환
    pub fn format_row(&self, fields: &[String], row: &RecordMessage) -> Record {
        if row.len() != fields.len() {
            tracing::warn!(
                columns = fields.len(),
                values = row.len(),
                "record width does not match declared fields"
            );
        }
        Record::from_columns(fields, row.fields.iter().map(bolt_value))
    }

    /// HTTP 결과 블록 하나를 변환
    pub fn format_http_block(&self, block: &HttpStatementResult) -> Vec<Record> {
        block
            .data
            .iter()
            .map(|row| http_row(&block.columns, row))
            .collect()
    }
}

impl Formatter for RecordFormatter {
    type Bolt = Vec<Record>;
    type Http = Vec<Vec<Record>>;

    fn format_bolt_result(
        &self,
        meta: &SuccessMessage,
        stream: &BoltResultStream,
    ) -> DriverResult<Vec<Record>> {
        let fields = meta
            .fields()
            .ok_or_else(|| DriverError::protocol("RUN metadata carries no field names"))?;

        let records: Vec<Record> = stream
            .rows
            .iter()
            .map(|row| self.format_row(&fields, row))
            .collect();

        tracing::debug!(
            fields = fields.len(),
            records = records.len(),
            "formatted bolt records"
        );
        Ok(records)
    }

    fn format_http_result(
        &self,
        response: &::http::response::Parts,
        body: &HttpResponseBody,
    ) -> DriverResult<Vec<Vec<Record>>> {
        tracing::trace!(status = %response.status, "formatting http records");
        body.check_errors()?;

        let blocks: Vec<Vec<Record>> = body
            .results
            .iter()
            .map(|block| self.format_http_block(block))
            .collect();

        tracing::debug!(blocks = blocks.len(), "formatted http records");
        Ok(blocks)
    }

    fn statement_config_override(&self) -> StatementConfig {
        StatementConfig::builder()
            .with_result_data_contents(vec![ResultDataContent::Row, ResultDataContent::Graph])
            .build()
    }
}

// ============================================================================
// Bolt 값 변환
// ============================================================================

fn bolt_value(value: &PackStreamValue) -> Value {
    match value {
        PackStreamValue::Structure(s) if s.is_node() => match PackStreamNode::from_structure(s) {
            Ok(node) => Value::Node(node.into()),
            Err(err) => {
                tracing::warn!(error = %err, "malformed node structure, keeping raw value");
                Value::Unsupported(RawValue::Bolt(value.clone()))
            }
        },
        other => Value::from(other.clone()),
    }
}

// ============================================================================
// HTTP 값 변환
// ============================================================================

fn http_row(columns: &[String], row: &HttpRowData) -> Record {
    if row.row.len() != columns.len() {
        tracing::warn!(
            columns = columns.len(),
            values = row.row.len(),
            "row width does not match declared columns"
        );
    }

    let values = row
        .row
        .iter()
        .enumerate()
        .map(|(index, raw)| http_value(row, index, raw));
    Record::from_columns(columns, values)
}

fn http_value(row: &HttpRowData, index: usize, raw: &Json) -> Value {
    if !(raw.is_object() || raw.is_array()) {
        return Value::from(raw.clone());
    }

    match row.meta_type(index) {
        Some("node") => http_node(row, index)
            .map(Value::Node)
            .unwrap_or_else(|| Value::Unsupported(RawValue::Json(raw.clone()))),
        _ if row.meta_has_entities(index) => Value::Unsupported(RawValue::Json(raw.clone())),
        _ => Value::from(raw.clone()),
    }
}

fn http_node(row: &HttpRowData, index: usize) -> Option<Node> {
    let graph_node = row
        .graph
        .as_ref()
        .and_then(|graph| graph.node_for(index, row.meta_id(index)));

    let Some(graph_node) = graph_node else {
        tracing::warn!(column = index, "no graph node for node column, keeping raw value");
        return None;
    };

    match Node::from_http(graph_node) {
        Ok(node) => Some(node),
        Err(err) => {
            tracing::warn!(column = index, error = %err, "malformed graph node, keeping raw value");
            None
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::*;
    use crate::bolt::packstream::{PackStreamStructure, RELATIONSHIP_TAG};
    use crate::bolt::BoltResponse;

    fn ok_parts() -> ::http::response::Parts {
        ::http::Response::builder()
            .status(::http::StatusCode::OK)
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    fn row(values: Vec<PackStreamValue>) -> BoltResponse {
        BoltResponse::Record(RecordMessage::new(values))
    }

    fn summary(nodes_created: i64) -> BoltResponse {
        let mut stats = HashMap::new();
        stats.insert("nodes-created".to_string(), PackStreamValue::Integer(nodes_created));
        BoltResponse::Success(SuccessMessage::summary(stats))
    }

    fn alice_node() -> PackStreamNode {
        let mut properties = HashMap::new();
        properties.insert("name".to_string(), PackStreamValue::from("Alice"));
        PackStreamNode::new(1, vec!["Person".to_string()], properties)
    }

    fn body(value: Json) -> HttpResponseBody {
        HttpResponseBody::from_value(value).unwrap()
    }

    #[test]
    fn test_bolt_trailing_summary_is_not_a_record() {
        let meta = SuccessMessage::run_success(vec!["name".to_string()]);
        let stream = BoltResultStream::from_responses(vec![
            row(vec![PackStreamValue::from("Alice")]),
            row(vec![PackStreamValue::from("Bob")]),
            summary(0),
        ])
        .unwrap();

        let records = RecordFormatter::new().format_bolt_result(&meta, &stream).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get_string("name").unwrap(), "Alice");
        assert_eq!(records[1].get_string("name").unwrap(), "Bob");
        assert_eq!(records[0].keys(), ["name".to_string()]);
    }

    #[test]
    fn test_bolt_summary_only() {
        let meta = SuccessMessage::run_success(vec!["n".to_string()]);
        let stream = BoltResultStream::from_responses(vec![summary(3)]).unwrap();

        let records = RecordFormatter::new().format_bolt_result(&meta, &stream).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_bolt_values_keep_column_order() {
        let meta = SuccessMessage::run_success(vec![
            "p".to_string(),
            "age".to_string(),
            "tags".to_string(),
            "missing".to_string(),
        ]);
        let stream = BoltResultStream::new(
            vec![RecordMessage::new(vec![
                alice_node().to_value(),
                PackStreamValue::Integer(30),
                PackStreamValue::List(vec![PackStreamValue::from("a")]),
                PackStreamValue::Null,
            ])],
            Some(SuccessMessage::new()),
        );

        let records = RecordFormatter::new().format_bolt_result(&meta, &stream).unwrap();
        let record = &records[0];

        let node = record.get_node("p").unwrap();
        assert_eq!(node.id, 1);
        assert!(node.has_label("Person"));
        assert_eq!(node.get("name"), Some(&Value::from("Alice")));
        assert_eq!(record.get_int("age").unwrap(), 30);
        assert_eq!(record.get("tags").unwrap().as_list().map(<[Value]>::len), Some(1));
        assert!(record.get("missing").unwrap().is_null());
    }

    #[test]
    fn test_bolt_relationship_is_unsupported() {
        let relationship = PackStreamValue::Structure(PackStreamStructure::new(
            RELATIONSHIP_TAG,
            vec![
                PackStreamValue::Integer(5),
                PackStreamValue::Integer(1),
                PackStreamValue::Integer(2),
                PackStreamValue::from("KNOWS"),
                PackStreamValue::Map(HashMap::new()),
            ],
        ));
        let meta = SuccessMessage::run_success(vec!["r".to_string()]);
        let stream = BoltResultStream::new(
            vec![RecordMessage::new(vec![relationship.clone()])],
            Some(SuccessMessage::new()),
        );

        let records = RecordFormatter::new().format_bolt_result(&meta, &stream).unwrap();
        assert_eq!(
            records[0].get("r"),
            Some(&Value::Unsupported(RawValue::Bolt(relationship)))
        );
    }

    #[test]
    fn test_bolt_malformed_node_is_kept_raw() {
        let broken = PackStreamValue::Structure(PackStreamStructure::new(
            crate::bolt::packstream::NODE_TAG,
            vec![PackStreamValue::from("not-an-id")],
        ));
        let record = RecordFormatter::new()
            .format_row(&["n".to_string()], &RecordMessage::new(vec![broken.clone()]));

        assert_eq!(record.get("n"), Some(&Value::Unsupported(RawValue::Bolt(broken))));
    }

    #[test]
    fn test_bolt_width_mismatch() {
        let formatter = RecordFormatter::new();
        let fields = vec!["a".to_string(), "b".to_string()];

        let short = formatter.format_row(&fields, &RecordMessage::new(vec![PackStreamValue::Integer(1)]));
        assert_eq!(short.len(), 2);
        assert!(short.get("b").unwrap().is_null());

        let long = formatter.format_row(
            &fields,
            &RecordMessage::new(vec![
                PackStreamValue::Integer(1),
                PackStreamValue::Integer(2),
                PackStreamValue::Integer(3),
            ]),
        );
        assert_eq!(long.len(), 2);
        assert_eq!(long.get_int("b").unwrap(), 2);
    }

    #[test]
    fn test_bolt_missing_fields_metadata() {
        let stream = BoltResultStream::new(vec![], Some(SuccessMessage::new()));
        let err = RecordFormatter::new()
            .format_bolt_result(&SuccessMessage::new(), &stream)
            .unwrap_err();
        assert!(matches!(err, DriverError::Protocol(_)));
    }

    #[test]
    fn test_http_node() {
        let body = body(json!({
            "results": [{
                "columns": ["p"],
                "data": [{
                    "row": [{"name": "Alice"}],
                    "meta": [{"type": "node"}],
                    "graph": {"nodes": [{"id": "1", "labels": ["Person"], "properties": {"name": "Alice"}}]}
                }]
            }],
            "errors": []
        }));

        let blocks = RecordFormatter::new().format_http_result(&ok_parts(), &body).unwrap();
        assert_eq!(blocks.len(), 1);

        let node = blocks[0][0].get_node("p").unwrap();
        let mut properties = HashMap::new();
        properties.insert("name".to_string(), Value::from("Alice"));
        assert_eq!(node, Node::new(1, vec!["Person".to_string()], properties));
    }

    #[test]
    fn test_http_node_matched_by_meta_id() {
        let body = body(json!({
            "results": [{
                "columns": ["a", "b"],
                "data": [{
                    "row": [{"name": "Alice"}, {"name": "Bob"}],
                    "meta": [{"id": 1, "type": "node"}, {"id": 2, "type": "node"}],
                    "graph": {"nodes": [
                        {"id": "2", "labels": ["Person"], "properties": {"name": "Bob"}},
                        {"id": "1", "labels": ["Person"], "properties": {"name": "Alice"}}
                    ]}
                }]
            }]
        }));

        let blocks = RecordFormatter::new().format_http_result(&ok_parts(), &body).unwrap();
        let record = &blocks[0][0];
        assert_eq!(record.get_node("a").unwrap().id, 1);
        assert_eq!(record.get_node("b").unwrap().id, 2);
    }

    #[test]
    fn test_http_scalars_pass_through() {
        let body = body(json!({
            "results": [{
                "columns": ["name", "active", "nothing", "age", "score"],
                "data": [{
                    "row": ["Alice", true, null, 30, 1.5],
                    "meta": [null, null, null, null, null]
                }]
            }]
        }));

        let blocks = RecordFormatter::new().format_http_result(&ok_parts(), &body).unwrap();
        let record = &blocks[0][0];

        assert_eq!(record.get_string("name").unwrap(), "Alice");
        assert!(record.get_bool("active").unwrap());
        assert!(record.get("nothing").unwrap().is_null());
        assert_eq!(record.get_int("age").unwrap(), 30);
        assert_eq!(record.get_float("score").unwrap(), 1.5);
    }

    #[test]
    fn test_http_plain_composites() {
        let body = body(json!({
            "results": [{
                "columns": ["xs", "m"],
                "data": [{"row": [[1, 2, 3], {"k": "v"}], "meta": [null, null]}]
            }]
        }));

        let blocks = RecordFormatter::new().format_http_result(&ok_parts(), &body).unwrap();
        let record = &blocks[0][0];

        assert_eq!(record.get("xs").unwrap().as_list().map(<[Value]>::len), Some(3));
        assert_eq!(
            record.get("m").unwrap().as_map().and_then(|m| m.get("k")),
            Some(&Value::from("v"))
        );
    }

    #[test]
    fn test_http_relationship_is_unsupported() {
        let body = body(json!({
            "results": [{
                "columns": ["r"],
                "data": [{
                    "row": [{"since": 2020}],
                    "meta": [{"id": 5, "type": "relationship", "deleted": false}],
                    "graph": {"nodes": [], "relationships": [{"id": "5", "type": "KNOWS"}]}
                }]
            }]
        }));

        let blocks = RecordFormatter::new().format_http_result(&ok_parts(), &body).unwrap();
        assert_eq!(
            blocks[0][0].get("r"),
            Some(&Value::Unsupported(RawValue::Json(json!({"since": 2020}))))
        );
    }

    #[test]
    fn test_http_missing_graph_node_falls_back() {
        let body = body(json!({
            "results": [{
                "columns": ["p"],
                "data": [{"row": [{"name": "Alice"}], "meta": [{"id": 9, "type": "node"}]}]
            }]
        }));

        let blocks = RecordFormatter::new().format_http_result(&ok_parts(), &body).unwrap();
        assert_eq!(
            blocks[0][0].get("p"),
            Some(&Value::Unsupported(RawValue::Json(json!({"name": "Alice"}))))
        );
    }

    #[test]
    fn test_http_unknown_node_id_keeps_raw_value() {
        let body = body(json!({
            "results": [{
                "columns": ["p"],
                "data": [{
                    "row": [{"name": "Bob"}],
                    "meta": [{"id": 9, "type": "node"}],
                    "graph": {"nodes": [{"id": "1", "labels": ["Person"], "properties": {"name": "Alice"}}]}
                }]
            }]
        }));

        let blocks = RecordFormatter::new().format_http_result(&ok_parts(), &body).unwrap();
        assert_eq!(
            blocks[0][0].get("p"),
            Some(&Value::Unsupported(RawValue::Json(json!({"name": "Bob"}))))
        );
    }

    #[test]
    fn test_http_path_is_unsupported() {
        let path = json!([{"name": "A"}, {}, {"name": "B"}]);
        let body = body(json!({
            "results": [{
                "columns": ["path"],
                "data": [{
                    "row": [path.clone()],
                    "meta": [[
                        {"id": 1, "type": "node", "deleted": false},
                        {"id": 7, "type": "relationship", "deleted": false},
                        {"id": 2, "type": "node", "deleted": false}
                    ]]
                }]
            }]
        }));

        let blocks = RecordFormatter::new().format_http_result(&ok_parts(), &body).unwrap();
        let value = blocks[0][0].get("path").unwrap();
        assert_eq!(value.type_name(), "Unsupported");
        assert_eq!(value, &Value::Unsupported(RawValue::Json(path)));
    }

    #[test]
    fn test_http_collected_nodes_are_unsupported() {
        let nodes = json!([{"name": "Alice"}, {"name": "Bob"}]);
        let body = body(json!({
            "results": [{
                "columns": ["people", "ages"],
                "data": [{
                    "row": [nodes.clone(), [30, 40]],
                    "meta": [[{"id": 1, "type": "node"}, {"id": 2, "type": "node"}], [null, null]]
                }]
            }]
        }));

        let blocks = RecordFormatter::new().format_http_result(&ok_parts(), &body).unwrap();
        let record = &blocks[0][0];
        assert_eq!(record.get("people"), Some(&Value::Unsupported(RawValue::Json(nodes))));
        assert_eq!(
            record.get("ages"),
            Some(&Value::List(vec![Value::Integer(30), Value::Integer(40)]))
        );
    }

    #[test]
    fn test_http_records_per_block() {
        let body = body(json!({
            "results": [
                {"columns": ["n"], "data": [{"row": [1]}, {"row": [2]}, {"row": [3]}]},
                {"columns": ["n"], "data": []}
            ]
        }));

        let blocks = RecordFormatter::new().format_http_result(&ok_parts(), &body).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].len(), 3);
        assert!(blocks[1].is_empty());

        let values: Vec<i64> = blocks[0].iter().map(|r| r.get_int("n").unwrap()).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_http_errors_fail_before_formatting() {
        let body = body(json!({
            "results": [{"columns": ["n"], "data": [{"row": [1]}]}],
            "errors": [{"code": "Neo.ClientError.Statement.SyntaxError", "message": "Invalid input"}]
        }));

        let err = RecordFormatter::new()
            .format_http_result(&ok_parts(), &body)
            .unwrap_err();
        assert!(matches!(err, DriverError::Server { .. }));
    }

    #[test]
    fn test_node_equal_across_transports() {
        let meta = SuccessMessage::run_success(vec!["p".to_string()]);
        let stream = BoltResultStream::new(
            vec![RecordMessage::new(vec![alice_node().to_value()])],
            Some(SuccessMessage::new()),
        );
        let bolt = RecordFormatter::new().format_bolt_result(&meta, &stream).unwrap();

        let body = body(json!({
            "results": [{
                "columns": ["p"],
                "data": [{
                    "row": [{"name": "Alice"}],
                    "meta": [{"id": 1, "type": "node"}],
                    "graph": {"nodes": [{"id": "1", "labels": ["Person"], "properties": {"name": "Alice"}}]}
                }]
            }]
        }));
        let http = RecordFormatter::new().format_http_result(&ok_parts(), &body).unwrap();

        assert_eq!(bolt[0], http[0][0]);
    }

    #[test]
    fn test_statement_config_override() {
        let config = RecordFormatter::new().statement_config_override();
        assert_eq!(
            config.result_data_contents,
            Some(vec![ResultDataContent::Row, ResultDataContent::Graph])
        );
        assert_eq!(config.include_stats, None);
    }
}
