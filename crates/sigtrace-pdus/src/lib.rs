//! Typed, bounds-checked parsers for the link layer (LAPDm) and the GSM / GPRS Layer 3
//! messages the engine tracks. Every parser takes the received octets by reference and
//! returns an owned PDU or a PduParseErr naming the truncated or invalid field.

pub mod common;
pub mod lapdm;

pub mod cc;
pub mod gmm;
pub mod mm;
pub mod rr;
pub mod sm;
pub mod ss;
