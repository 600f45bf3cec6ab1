//! Result Formatters
//!
//! 전송 계층(Bolt / HTTP) 응답을 도메인 값으로 변환하는 포매터
//!
//! # 구성
//!
//! - [`RecordFormatter`] - 결과 행을 [`Record`](crate::driver::Record)로 변환
//! - [`StatisticsFormatter`] - 쓰기 통계를 [`StatementStatistics`](crate::driver::StatementStatistics)로 변환
//! - [`ReactiveRecordStream`] - Bolt 응답 스트림을 레코드 단위로 변환하는 비동기 어댑터
//!
//! # Example
//!
//! ```ignore
//! use zeta4g_formatter::formatter::{Formatter, RecordFormatter};
//!
//! let formatter = RecordFormatter::new();
//! let config = StatementConfig::default().with_override(&formatter.statement_config_override());
//!
//! let records = formatter.format_bolt_result(&run_success, &stream)?;
//! ```

pub mod record;
pub mod statistics;
pub mod stream;

pub use record::RecordFormatter;
pub use statistics::StatisticsFormatter;
pub use stream::ReactiveRecordStream;

use bytes::Bytes;

use crate::bolt::{BoltResultStream, SuccessMessage};
use crate::driver::{DriverResult, StatementConfig};
use crate::rest::HttpResponseBody;

// ============================================================================
// Formatter - 포매터 트레이트
// ============================================================================

/// 결과 포매터
///
/// 상태가 없으므로 여러 태스크에서 공유할 수 있습니다.
pub trait Formatter: Send + Sync {
    /// Bolt 결과 타입
    type Bolt;
    /// HTTP 결과 타입
    type Http;

    /// Bolt 결과 변환
    ///
    /// `meta`는 RUN에 대한 SUCCESS 메타데이터(`fields`)입니다.
    fn format_bolt_result(
        &self,
        meta: &SuccessMessage,
        stream: &BoltResultStream,
    ) -> DriverResult<Self::Bolt>;

    /// HTTP 결과 변환
    fn format_http_result(
        &self,
        response: &::http::response::Parts,
        body: &HttpResponseBody,
    ) -> DriverResult<Self::Http>;

    /// 전송 전 HTTP 요청 수정 (기본: 그대로 반환)
    fn decorate_request(&self, request: ::http::Request<Bytes>) -> ::http::Request<Bytes> {
        request
    }

    /// 이 포매터가 요구하는 문장 설정
    fn statement_config_override(&self) -> StatementConfig;
}
