use sigtrace_core::{ByteReader, pdu_parse_error::PduParseErr};

use crate::common::fields::classmark::CipherCapability;

/// Representation of the CLASSMARK CHANGE message (TS 44.018 clause 9.1.11).
/// Only the classmark 2 cipher capability is retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassmarkChange {
    pub cipher_capability: CipherCapability,
}

impl ClassmarkChange {
    /// Parse from the message body following the 2-octet L3 header
    pub fn from_bytes(data: &[u8]) -> Result<Self, PduParseErr> {
        let mut buf = ByteReader::new(data);
        let cipher_capability = CipherCapability::from_classmark2(buf.read_lv("CM2_LEN")?)?;
        Ok(ClassmarkChange { cipher_capability })
    }
}
