//! Reactive Record Stream
//!
//! tokio-stream 기반 비동기 레코드 스트림
//!
//! Bolt 응답이 도착하는 대로 레코드 단위로 변환합니다. 변환 자체는 동기이며,
//! 대기는 입력 스트림에서만 일어납니다.
//!
//! # Example
//!
//! ```ignore
//! use zeta4g_formatter::formatter::ReactiveRecordStream;
//!
//! let stream = ReactiveRecordStream::from_bolt_responses(fields, responses);
//! let records = stream.try_collect().await?;
//! ```

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;

use super::RecordFormatter;
use crate::bolt::BoltResponse;
use crate::driver::{DriverError, DriverResult, Record};

// ============================================================================
// ReactiveRecordStream - 비동기 레코드 스트림
// ============================================================================

/// 비동기 레코드 스트림
///
/// `Stream` 트레이트를 구현하여 async/await와 함께 사용할 수 있습니다.
pub struct ReactiveRecordStream {
    inner: Pin<Box<dyn Stream<Item = DriverResult<Record>> + Send>>,
    keys: Option<Vec<String>>,
}

impl std::fmt::Debug for ReactiveRecordStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactiveRecordStream")
            .field("keys", &self.keys)
            .finish()
    }
}

impl ReactiveRecordStream {
    /// 레코드 벡터에서 생성
    pub fn from_records(records: Vec<Record>) -> Self {
        let keys = records.first().map(|r| r.keys().to_vec());
        let iter = records.into_iter().map(Ok);
        Self {
            inner: Box::pin(tokio_stream::iter(iter)),
            keys,
        }
    }

    /// Bolt 응답 스트림에서 생성
    ///
    /// RECORD는 레코드로 변환하고, 첫 SUCCESS(요약)에서 끝납니다.
    /// FAILURE는 서버 에러, IGNORED는 프로토콜 에러로 전달되고 스트림이 끝납니다.
    /// 응답이 있었는데 SUCCESS 없이 입력이 끝나면 프로토콜 에러입니다.
    pub fn from_bolt_responses<S>(fields: Vec<String>, responses: S) -> Self
    where
        S: Stream<Item = BoltResponse> + Send + 'static,
    {
        use tokio_stream::StreamExt;

        let formatter = RecordFormatter::new();
        let state = BoltStreamState {
            responses: Box::pin(responses),
            columns: fields.clone(),
            seen: false,
        };

        let records = futures::stream::unfold(Some(state), move |state| async move {
            let mut state = state?;
            let response = state.responses.next().await;
            let seen = std::mem::replace(&mut state.seen, true);

            let item = match response {
                Some(BoltResponse::Record(row)) => {
                    let record = formatter.format_row(&state.columns, &row);
                    return Some((Ok(record), Some(state)));
                }
                Some(BoltResponse::Success(_)) => return None,
                None if !seen => return None,
                None => Err(DriverError::protocol(
                    "result stream ended without a trailing SUCCESS",
                )),
                Some(BoltResponse::Failure(failure)) => Err(failure.into()),
                Some(other) => Err(DriverError::protocol(format!(
                    "unexpected {} inside result stream",
                    other.name()
                ))),
            };
            Some((item, None))
        });

        Self {
            inner: Box::pin(records),
            keys: Some(fields),
        }
    }

    /// 빈 스트림 생성
    pub fn empty() -> Self {
        Self {
            inner: Box::pin(tokio_stream::empty()),
            keys: None,
        }
    }

    /// 에러 스트림 생성
    pub fn error(err: DriverError) -> Self {
        Self {
            inner: Box::pin(tokio_stream::once(Err(err))),
            keys: None,
        }
    }

    /// 키 목록
    pub fn keys(&self) -> Option<&[String]> {
        self.keys.as_deref()
    }

    /// 모든 레코드 수집 (성공한 것만)
    pub async fn collect(self) -> Vec<Record> {
        use tokio_stream::StreamExt;

        self.inner.filter_map(skip_error).collect().await
    }

    /// 모든 레코드 수집 (첫 에러에서 중단)
    pub async fn try_collect(self) -> DriverResult<Vec<Record>> {
        use tokio_stream::StreamExt;

        let mut results = Vec::new();
        let mut stream = self.inner;

        while let Some(result) = stream.next().await {
            results.push(result?);
        }

        Ok(results)
    }

    /// 첫 번째 레코드
    pub async fn first(self) -> Option<Record> {
        use tokio_stream::StreamExt;

        self.inner.filter_map(skip_error).next().await
    }

    /// 단일 레코드 (정확히 1개)
    pub async fn single(self) -> DriverResult<Record> {
        let mut records = self.try_collect().await?.into_iter();

        match (records.next(), records.len()) {
            (Some(record), 0) => Ok(record),
            (first, rest) => Err(DriverError::type_conversion(format!(
                "Expected single record, got {}",
                usize::from(first.is_some()) + rest
            ))),
        }
    }

    /// 레코드 수 카운트
    pub async fn count(self) -> usize {
        use tokio_stream::StreamExt;

        let mut count = 0usize;
        let mut stream = self.inner;
        while let Some(result) = stream.next().await {
            if skip_error(result).is_some() {
                count += 1;
            }
        }
        count
    }
}

impl Stream for ReactiveRecordStream {
    type Item = DriverResult<Record>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

struct BoltStreamState<S> {
    responses: Pin<Box<S>>,
    columns: Vec<String>,
    seen: bool,
}

fn skip_error(result: DriverResult<Record>) -> Option<Record> {
    match result {
        Ok(record) => Some(record),
        Err(err) => {
            tracing::warn!(error = %err, "dropping failed record from stream");
            None
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
