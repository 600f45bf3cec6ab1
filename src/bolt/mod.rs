//! # Bolt Protocol Input
//!
//! Decoded Bolt responses as the result formatters receive them.
//!
//! ## Overview
//!
//! Connection handling and wire decoding live in the driver's connection
//! layer. By the time a result reaches the formatters it is a sequence of
//! [`BoltResponse`] messages whose values are already [`PackStreamValue`]s.
//!
//! ## Submodules
//!
//! - [`packstream`] - Decoded value model and graph structures
//! - [`message`] - SUCCESS / RECORD / FAILURE / IGNORED messages and the
//!   per-statement [`BoltResultStream`]

pub mod message;
pub mod packstream;

pub use message::{
    BoltResponse, BoltResultStream, FailureMessage, RecordMessage, SuccessMessage,
};
pub use packstream::{PackStreamError, PackStreamNode, PackStreamStructure, PackStreamValue};
