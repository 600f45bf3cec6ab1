//! Statement Configuration
//!
//! HTTP 문장별 설정 (`resultDataContents`, `includeStats`)
//!
//! 포매터는 필요한 응답 형태를 [`StatementConfig`] 재정의로 요구하고,
//! 드라이버는 [`StatementConfig::apply_override`]로 이를 강제합니다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};

use super::error::DriverResult;

// ============================================================================
// ResultDataContent - 응답 데이터 형태
// ============================================================================

/// HTTP 응답 데이터 형태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultDataContent {
    /// 행 값 (`row`, `meta`)
    Row,
    /// 그래프 뷰 (`graph`)
    Graph,
    /// REST 엔티티 형태
    Rest,
}

// ============================================================================
// StatementConfig - 문장 설정
// ============================================================================

/// 문장 설정
///
/// `None` 필드는 서버 기본값을 사용하며 직렬화되지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementConfig {
    /// 응답 데이터 형태
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_data_contents: Option<Vec<ResultDataContent>>,
    /// 통계 포함 여부
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_stats: Option<bool>,
}

impl StatementConfig {
    /// 빌더 생성
    pub fn builder() -> StatementConfigBuilder {
        StatementConfigBuilder::new()
    }

    /// 설정된 키가 없는지 여부
    pub fn is_empty(&self) -> bool {
        self.result_data_contents.is_none() && self.include_stats.is_none()
    }

    /// 재정의 적용 (재정의에 설정된 키가 우선)
    pub fn apply_override(&mut self, overrides: &StatementConfig) {
        if let Some(contents) = &overrides.result_data_contents {
            self.result_data_contents = Some(contents.clone());
        }
        if let Some(include_stats) = overrides.include_stats {
            self.include_stats = Some(include_stats);
        }
    }

    /// 재정의가 적용된 새 설정
    pub fn with_override(mut self, overrides: &StatementConfig) -> Self {
        self.apply_override(overrides);
        self
    }

    /// HTTP 문장 객체에 들어갈 키/값
    pub fn to_json(&self) -> DriverResult<Map<String, Json>> {
        match serde_json::to_value(self)? {
            Json::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }
}

// ============================================================================
// StatementConfigBuilder - 문장 설정 빌더
// ============================================================================

/// 문장 설정 빌더
#[derive(Debug, Default)]
pub struct StatementConfigBuilder {
    config: StatementConfig,
}

impl StatementConfigBuilder {
    /// 새 빌더 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 응답 데이터 형태 설정
    pub fn with_result_data_contents(mut self, contents: Vec<ResultDataContent>) -> Self {
        self.config.result_data_contents = Some(contents);
        self
    }

    /// 통계 포함 설정
    pub fn with_include_stats(mut self, include_stats: bool) -> Self {
        self.config.include_stats = Some(include_stats);
        self
    }

    /// 빌드
    pub fn build(self) -> StatementConfig {
        self.config
    }
}

// ============================================================================
// Tests
// ============================================================================
