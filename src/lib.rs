//! # Zeta4G Result Formatter
//!
//! Turns raw Bolt and HTTP query responses from a
//! [Zeta4G](https://github.com/zeta9044/zeta4g) / Neo4j compatible server into
//! typed records and write statistics.
//!
//! ## Features
//!
//! - **Two transports, one result** - Bolt RECORD streams and HTTP
//!   transactional JSON bodies produce the same [`Record`] and [`Node`] values
//! - **Write statistics** - Bolt summaries (`nodes-created`) and HTTP `stats`
//!   blocks (`nodes_created`) decode into one [`StatementStatistics`]
//! - **Nothing dropped** - values the layer does not materialize are kept as
//!   [`Value::Unsupported`]
//! - **Async adapter** - [`ReactiveRecordStream`] formats a Bolt response
//!   stream record by record
//!
//! ## Bolt Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use zeta4g_formatter::bolt::{BoltResponse, BoltResultStream, PackStreamValue, RecordMessage, SuccessMessage};
//! use zeta4g_formatter::{Formatter, RecordFormatter, StatisticsFormatter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let run = SuccessMessage::run_success(vec!["name".to_string()]);
//!
//! let mut stats = HashMap::new();
//! stats.insert("nodes-created".to_string(), PackStreamValue::Integer(1));
//!
//! let stream = BoltResultStream::from_responses(vec![
//!     BoltResponse::Record(RecordMessage::new(vec![PackStreamValue::from("Alice")])),
//!     BoltResponse::Success(SuccessMessage::summary(stats)),
//! ])?;
//!
//! let records = RecordFormatter::new().format_bolt_result(&run, &stream)?;
//! assert_eq!(records[0].get_string("name")?, "Alice");
//!
//! let stats = StatisticsFormatter::new().format_bolt_result(&run, &stream)?;
//! assert_eq!(stats.nodes_created, 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## HTTP Usage
//!
//! Ask the server for the shape a formatter needs before sending the statement:
//!
//! ```rust
//! use zeta4g_formatter::{Formatter, HttpResponseBody, RecordFormatter, StatementConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let formatter = RecordFormatter::new();
//! let config = StatementConfig::default().with_override(&formatter.statement_config_override());
//! assert!(config.to_json()?.contains_key("resultDataContents"));
//!
//! let body = HttpResponseBody::from_slice(br#"{
//!     "results": [{"columns": ["n"], "data": [{"row": [42], "meta": [null]}]}],
//!     "errors": []
//! }"#)?;
//! let (parts, ()) = http::Response::new(()).into_parts();
//!
//! let blocks = formatter.format_http_result(&parts, &body)?;
//! assert_eq!(blocks[0][0].get_int("n")?, 42);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`DriverResult`]:
//!
//! - [`DriverError::EmptyResultSet`] - Bolt stream without a trailing summary
//! - [`DriverError::MissingStatistics`] - HTTP block without `stats`
//! - [`DriverError::Server`] - FAILURE message or HTTP `errors` entry
//!
//! ## Modules
//!
//! - [`formatter`] - Record and statistics formatters, async adapter
//! - [`driver`] - Values, records, statistics, configuration and errors
//! - [`bolt`] - Decoded Bolt responses and PackStream values
//! - [`rest`] - HTTP transactional response body
//!

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bolt;
pub mod driver;
pub mod formatter;
pub mod rest;

// Re-exports for convenience
pub use driver::{
    BoltError, DriverError, DriverResult, Node, RawValue, Record,
    ResultDataContent, StatementConfig, StatementConfigBuilder, StatementStatistics, Value,
};

pub use formatter::{Formatter, ReactiveRecordStream, RecordFormatter, StatisticsFormatter};

pub use rest::HttpResponseBody;

pub use bolt::{BoltResultStream, PackStreamValue};
