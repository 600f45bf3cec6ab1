//! Statistics Formatter
//!
//! 쓰기 통계를 [`StatementStatistics`]로 변환
//!
//! Bolt는 스트림 마지막 SUCCESS 요약의 `stats`(하이픈 키)를, HTTP는 결과 블록의
//! `stats`(밑줄 키)를 읽습니다.

use super::Formatter;
use crate::bolt::{BoltResultStream, SuccessMessage};
use crate::driver::{DriverError, DriverResult, StatementConfig, StatementStatistics};
use crate::rest::{HttpResponseBody, HttpStatementResult};

// ============================================================================
// StatisticsFormatter - 통계 포매터
// ============================================================================

/// 통계 포매터
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsFormatter;

impl StatisticsFormatter {
    /// 새 포매터 생성
    pub fn new() -> Self {
        Self
    }

    /// HTTP 결과 블록 하나의 통계
    ///
    /// `stats`가 없으면 [`DriverError::MissingStatistics`]입니다.
    pub fn format_http_stats(&self, block: &HttpStatementResult) -> DriverResult<StatementStatistics> {
        let stats = block
            .stats
            .as_ref()
            .ok_or_else(|| DriverError::missing_statistics("No stats found in the response set"))?;
        Ok(StatementStatistics::from_http_stats(stats))
    }
}

impl Formatter for StatisticsFormatter {
    type Bolt = StatementStatistics;
    type Http = Vec<StatementStatistics>;

    fn format_bolt_result(
        &self,
        _meta: &SuccessMessage,
        stream: &BoltResultStream,
    ) -> DriverResult<StatementStatistics> {
        let summary = stream.summary.as_ref().ok_or_else(|| {
            DriverError::empty_result_set("result stream has no trailing summary")
        })?;

        let stats = match summary.stats() {
            Some(stats) => StatementStatistics::from_bolt_stats(stats),
            None => {
                tracing::debug!("summary carries no stats, using defaults");
                StatementStatistics::default()
            }
        };

        tracing::debug!(updates = stats.has_updates(), "formatted bolt statistics");
        Ok(stats)
    }

    fn format_http_result(
        &self,
        response: &::http::response::Parts,
        body: &HttpResponseBody,
    ) -> DriverResult<Vec<StatementStatistics>> {
        tracing::trace!(status = %response.status, "formatting http statistics");
        body.check_errors()?;

        let stats = body
            .results
            .iter()
            .map(|block| self.format_http_stats(block))
            .collect::<DriverResult<Vec<_>>>()?;

        tracing::debug!(blocks = stats.len(), "formatted http statistics");
        Ok(stats)
    }

    fn statement_config_override(&self) -> StatementConfig {
        StatementConfig::builder().with_include_stats(true).build()
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
    use crate::bolt::{BoltResponse, PackStreamValue, RecordMessage};

    fn ok_parts() -> ::http::response::Parts {
        ::http::Response::builder()
            .status(::http::StatusCode::OK)
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    fn run_meta() -> SuccessMessage {
        SuccessMessage::run_success(vec!["n".to_string()])
    }

    #[test]
    fn test_bolt_stats_from_trailing_summary() {
        let mut stats = HashMap::new();
        stats.insert("nodes-created".to_string(), PackStreamValue::Integer(3));
        stats.insert("contains-updates".to_string(), PackStreamValue::Boolean(true));

        let stream = BoltResultStream::from_responses(vec![
            BoltResponse::Record(RecordMessage::new(vec![PackStreamValue::Integer(1)])),
            BoltResponse::Success(SuccessMessage::summary(stats)),
        ])
        .unwrap();

        let stats = StatisticsFormatter::new()
            .format_bolt_result(&run_meta(), &stream)
            .unwrap();
        assert_eq!(stats.nodes_created, 3);
        assert!(stats.contains_updates);
        assert!(stats.has_updates());
    }

    #[test]
    fn test_bolt_empty_result_set() {
        let stream = BoltResultStream::from_responses(vec![]).unwrap();

        let err = StatisticsFormatter::new()
            .format_bolt_result(&run_meta(), &stream)
            .unwrap_err();
        assert!(matches!(err, DriverError::EmptyResultSet(_)));
    }

    #[test]
    fn test_bolt_summary_without_stats() {
        let stream = BoltResultStream::new(vec![], Some(SuccessMessage::new()));

        let stats = StatisticsFormatter::new()
            .format_bolt_result(&run_meta(), &stream)
            .unwrap();
        assert_eq!(stats, StatementStatistics::default());
    }

    #[test]
    fn test_http_stats_per_block() {
        let body = HttpResponseBody::from_value(json!({
            "results": [
                {"columns": [], "data": [], "stats": {"nodes_created": 3, "contains_updates": true}},
                {"columns": [], "data": [], "stats": {}}
            ],
            "errors": []
        }))
        .unwrap();

        let stats = StatisticsFormatter::new()
            .format_http_result(&ok_parts(), &body)
            .unwrap();

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].nodes_created, 3);
        assert!(stats[0].contains_updates);
        assert_eq!(stats[1], StatementStatistics::default());
    }

    #[test]
    fn test_http_missing_stats() {
        let body = HttpResponseBody::from_value(json!({
            "results": [{"columns": ["n"], "data": [{"row": [1]}]}]
        }))
        .unwrap();

        let formatter = StatisticsFormatter::new();
        let err = formatter.format_http_result(&ok_parts(), &body).unwrap_err();
        assert!(matches!(err, DriverError::MissingStatistics(_)));
        assert_eq!(
            err.to_string(),
            "Missing statistics: No stats found in the response set"
        );

        assert!(formatter.format_http_stats(&body.results[0]).is_err());
    }

    #[test]
    fn test_http_server_error() {
        let body = HttpResponseBody::from_value(json!({
            "results": [],
            "errors": [{"code": "Neo.ClientError.Schema.ConstraintValidationFailed", "message": "exists"}]
        }))
        .unwrap();

        let err = StatisticsFormatter::new()
            .format_http_result(&ok_parts(), &body)
            .unwrap_err();
        match err {
            DriverError::Server { code, .. } => {
                assert_eq!(code, "Neo.ClientError.Schema.ConstraintValidationFailed")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_both_transports_agree() {
        let mut bolt_stats = HashMap::new();
        bolt_stats.insert("nodes-created".to_string(), PackStreamValue::Integer(3));
        bolt_stats.insert("contains-updates".to_string(), PackStreamValue::Boolean(true));
        let stream = BoltResultStream::new(vec![], Some(SuccessMessage::summary(bolt_stats)));

        let body = HttpResponseBody::from_value(json!({
            "results": [{"columns": [], "data": [], "stats": {"nodes_created": 3, "contains_updates": true}}]
        }))
        .unwrap();

        let formatter = StatisticsFormatter::new();
        let bolt = formatter.format_bolt_result(&run_meta(), &stream).unwrap();
        let http = formatter.format_http_result(&ok_parts(), &body).unwrap();
        assert_eq!(bolt, http[0]);
    }

    #[test]
    fn test_statement_config_override() {
        let config = StatisticsFormatter::new().statement_config_override();
        assert_eq!(config.include_stats, Some(true));
        assert!(config.result_data_contents.is_none());
    }
}
