//! Bolt protocol response messages.
//!
//! Only the server-to-client side matters to result formatting: RECORD
//! messages carry rows, SUCCESS carries field names and the summary.

pub mod response;

pub use response::*;

/// Bolt message tags for response messages.
pub mod tag {
    /// SUCCESS response tag (0x70)
    pub const SUCCESS: u8 = 0x70;
    /// RECORD response tag (0x71)
    pub const RECORD: u8 = 0x71;
    /// IGNORED response tag (0x7E)
    pub const IGNORED: u8 = 0x7E;
    /// FAILURE response tag (0x7F)
    pub const FAILURE: u8 = 0x7F;
}
