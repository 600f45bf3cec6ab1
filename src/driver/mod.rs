//! Driver Module
//!
//! 포매터가 만들어 내는 도메인 타입
//!
//! # 구성
//!
//! - 값 / 노드 (Value, Node, RawValue)
//! - 레코드 (Record)
//! - 쓰기 통계 (StatementStatistics)
//! - HTTP 문장 설정 (StatementConfig)
//! - 에러 (DriverError, BoltError)
//!
//! # Example
//!
//! ```ignore
//! use zeta4g_formatter::driver::{Record, Value};
//!
//! let record = Record::new(vec!["name".into()], vec![Value::from("Alice")]);
//! assert_eq!(record.get_string("name")?, "Alice");
//! ```

mod config;
mod error;
mod record;
mod statistics;
mod types;

// Re-exports
pub use config::{ResultDataContent, StatementConfig, StatementConfigBuilder};
pub use error::{BoltError, DriverError, DriverResult};
pub use record::Record;
pub use statistics::{StatementStatistics, StatsKeyStyle, StatsSource};
pub use types::{Node, RawValue, Value};
