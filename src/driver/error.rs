//! Driver Error Types
//!
//! 결과 포맷팅 에러 정의

use std::fmt;
use thiserror::Error;

use crate::bolt::FailureMessage;

// ============================================================================
// DriverError - 드라이버 에러
// ============================================================================

/// 드라이버 에러
#[derive(Error, Debug)]
pub enum DriverError {
    /// 인증 에러
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// 프로토콜 에러
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// 직렬화 에러
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// 타입 변환 에러
    #[error("Type conversion error: {0}")]
    TypeConversion(String),

    /// 서버 에러
    #[error("Server error: {code} - {message}")]
    Server { code: String, message: String },

    /// 서비스 불가
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Bolt 결과에 요약(trailing summary)이 없음
    #[error("Empty result set: {0}")]
    EmptyResultSet(String),

    /// HTTP 결과 블록에 stats 없음
    #[error("Missing statistics: {0}")]
    MissingStatistics(String),
}

impl DriverError {
    /// 프로토콜 에러 생성
    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }

    /// 직렬화 에러 생성
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// 타입 변환 에러 생성
    pub fn type_conversion(msg: impl Into<String>) -> Self {
        Self::TypeConversion(msg.into())
    }

    /// 서버 에러 생성
    pub fn server(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Server {
            code: code.into(),
            message: message.into(),
        }
    }

    /// 빈 결과 에러 생성
    pub fn empty_result_set(msg: impl Into<String>) -> Self {
        Self::EmptyResultSet(msg.into())
    }

    /// 통계 누락 에러 생성
    pub fn missing_statistics(msg: impl Into<String>) -> Self {
        Self::MissingStatistics(msg.into())
    }

    /// 응답 형태 이상 여부 (전송 계층 문제)
    pub fn is_malformed_response(&self) -> bool {
        matches!(
            self,
            Self::Protocol(_)
                | Self::Serialization(_)
                | Self::EmptyResultSet(_)
                | Self::MissingStatistics(_)
        )
    }
}

impl From<serde_json::Error> for DriverError {
    fn from(err: serde_json::Error) -> Self {
        DriverError::Serialization(err.to_string())
    }
}

// ============================================================================
// Result Type
// ============================================================================

/// 드라이버 결과 타입
pub type DriverResult<T> = Result<T, DriverError>;

// ============================================================================
// Server Error Codes
// ============================================================================

/// 서버 에러 코드
///
/// Bolt FAILURE 메시지와 HTTP `errors` 배열이 공통으로 사용하는 형식입니다.
/// 에러 코드는 "Neo.{Category}.{SubCategory}.{ErrorType}" 형식을 따릅니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoltError {
    /// 에러 코드
    pub code: String,
    /// 에러 메시지
    pub message: String,
}

impl BoltError {
    /// 새 에러 생성
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// 클라이언트 에러 여부
    pub fn is_client_error(&self) -> bool {
        self.code.starts_with("Neo.ClientError")
    }

    /// 트랜지언트 에러 여부 (재시도 가능)
    pub fn is_transient_error(&self) -> bool {
        self.code.starts_with("Neo.TransientError")
    }

    /// 인증 에러 여부
    pub fn is_authentication_error(&self) -> bool {
        self.code.contains("Security") || self.code.contains("Authentication")
    }
}

impl fmt::Display for BoltError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for BoltError {}

impl From<BoltError> for DriverError {
    fn from(err: BoltError) -> Self {
        if err.is_authentication_error() {
            DriverError::Authentication(err.message)
        } else if err.is_transient_error() {
            DriverError::ServiceUnavailable(err.message)
        } else {
            DriverError::Server {
                code: err.code,
                message: err.message,
            }
        }
    }
}

impl From<FailureMessage> for DriverError {
    fn from(failure: FailureMessage) -> Self {
        BoltError::new(failure.code, failure.message).into()
    }
}

// ============================================================================
// Tests
// ============================================================================
