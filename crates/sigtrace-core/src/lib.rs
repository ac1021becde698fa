//! Core utilities for sigtrace
//!
//! This crate provides fundamental types and utilities used across the decoder:
//! - ByteReader for bounds-checked octet-level PDU parsing
//! - Radio technology, domain and channel type tags
//! - The RadioMessage envelope passed between capture, engine and sink
//! - Common macros and debug utilities

pub mod bytereader;
pub mod debug;
pub mod direction;
pub mod pdu_parse_error;
pub mod radio;
pub mod radio_message;

// Re-export commonly used items
pub use bytereader::ByteReader;
pub use direction::Direction;
pub use pdu_parse_error::PduParseErr;
pub use radio::*;
pub use radio_message::RadioMessage;

/// GSM frame number, 0 when unknown
pub type FrameNumber = u32;

/// Highest GSM frame number plus one (26 * 51 * 2048). Used as a "frame number unknown" 
/// timestamp whenever an event must be recorded but the capture carried no frame number.
pub const GSM_MAX_FN: FrameNumber = 26 * 51 * 2048;

/// Standard idle fill octet for unused LAPDm payload octets
pub const FILL_OCTET: u8 = 0x2b;
