//! Statement Statistics
//!
//! 쓰기 쿼리의 부수 효과 통계
//!
//! Bolt 요약은 `nodes-created`처럼 하이픈 키를, HTTP `stats` 블록은
//! `nodes_created`처럼 밑줄 키를 사용합니다. 필드 목록은
//! [`StatementStatistics::decode`] 한 곳에만 있고, 키 규칙은
//! [`StatsKeyStyle`]이 결정합니다.

use std::borrow::Cow;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};

use crate::bolt::packstream::PackStreamValue;

// ============================================================================
// StatsKeyStyle - 키 명명 규칙
// ============================================================================

/// 통계 키 명명 규칙
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsKeyStyle {
    /// Bolt (`nodes-created`)
    Hyphenated,
    /// HTTP (`nodes_created`)
    Underscored,
}

impl StatsKeyStyle {
    /// 정규 이름(밑줄)을 이 규칙의 키로 변환
    pub fn key(self, canonical: &'static str) -> Cow<'static, str> {
        match self {
            StatsKeyStyle::Underscored => Cow::Borrowed(canonical),
            StatsKeyStyle::Hyphenated => Cow::Owned(canonical.replace('_', "-")),
        }
    }
}

// ============================================================================
// StatsSource - 통계 블록 읽기
// ============================================================================

/// 통계 블록 접근 트레이트
pub trait StatsSource {
    /// 정수 필드
    fn count(&self, key: &str) -> Option<i64>;

    /// 불리언 필드
    fn flag(&self, key: &str) -> Option<bool>;
}

impl StatsSource for HashMap<String, PackStreamValue> {
    fn count(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|v| v.as_int())
    }

    fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.as_bool())
    }
}

impl StatsSource for Map<String, Json> {
    fn count(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Json::as_i64)
    }

    fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Json::as_bool)
    }
}

// ============================================================================
// StatementStatistics - 통계
// ============================================================================

/// 문장 실행 통계
///
/// 통계가 없는 응답은 기본값(모두 0 / false)입니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementStatistics {
    /// 생성된 노드 수
    pub nodes_created: u64,
    /// 삭제된 노드 수
    pub nodes_deleted: u64,
    /// 생성된 관계 수
    pub relationships_created: u64,
    /// 삭제된 관계 수
    pub relationships_deleted: u64,
    /// 설정된 속성 수
    pub properties_set: u64,
    /// 추가된 레이블 수
    pub labels_added: u64,
    /// 제거된 레이블 수
    pub labels_removed: u64,
    /// 추가된 인덱스 수
    pub indexes_added: u64,
    /// 제거된 인덱스 수
    pub indexes_removed: u64,
    /// 추가된 제약조건 수
    pub constraints_added: u64,
    /// 제거된 제약조건 수
    pub constraints_removed: u64,
    /// 변경 사항 존재 여부
    pub contains_updates: bool,
    /// 시스템 변경 존재 여부
    pub contains_system_updates: bool,
    /// 시스템 변경 수
    pub system_updates: u64,
}

impl StatementStatistics {
    /// 빈 통계 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 통계 블록 해석
    ///
    /// 없는 필드는 0 / false 입니다. 음수는 0으로 맞춥니다.
    pub fn decode<S: StatsSource + ?Sized>(source: &S, style: StatsKeyStyle) -> Self {
        let count = |name: &'static str| -> u64 {
            let key = style.key(name);
            match source.count(&key) {
                Some(n) if n < 0 => {
                    tracing::warn!(key = %key, value = n, "negative statistics counter, using 0");
                    0
                }
                Some(n) => n as u64,
                None => 0,
            }
        };
        let flag = |name: &'static str| source.flag(&style.key(name)).unwrap_or(false);

        Self {
            nodes_created: count("nodes_created"),
            nodes_deleted: count("nodes_deleted"),
            relationships_created: count("relationships_created"),
            relationships_deleted: count("relationships_deleted"),
            properties_set: count("properties_set"),
            labels_added: count("labels_added"),
            labels_removed: count("labels_removed"),
            indexes_added: count("indexes_added"),
            indexes_removed: count("indexes_removed"),
            constraints_added: count("constraints_added"),
            constraints_removed: count("constraints_removed"),
            contains_updates: flag("contains_updates"),
            contains_system_updates: flag("contains_system_updates"),
            system_updates: count("system_updates"),
        }
    }

    /// Bolt 요약의 stats 맵에서 생성
    pub fn from_bolt_stats(stats: &HashMap<String, PackStreamValue>) -> Self {
        Self::decode(stats, StatsKeyStyle::Hyphenated)
    }

    /// HTTP stats 블록에서 생성
    pub fn from_http_stats(stats: &Map<String, Json>) -> Self {
        Self::decode(stats, StatsKeyStyle::Underscored)
    }

    /// 변경 사항 존재 여부
    pub fn has_updates(&self) -> bool {
        self.contains_updates
            || self.contains_system_updates
            || self.system_updates > 0
            || self.nodes_created > 0
            || self.nodes_deleted > 0
            || self.relationships_created > 0
            || self.relationships_deleted > 0
            || self.properties_set > 0
            || self.labels_added > 0
            || self.labels_removed > 0
            || self.indexes_added > 0
            || self.indexes_removed > 0
            || self.constraints_added > 0
            || self.constraints_removed > 0
    }
}
