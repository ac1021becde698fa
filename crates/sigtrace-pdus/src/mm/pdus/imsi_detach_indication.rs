use sigtrace_core::let_octet;
use sigtrace_core::{ByteReader, pdu_parse_error::PduParseErr};

use crate::common::fields::classmark::CipherCapability;
use crate::common::fields::mobile_identity::MobileIdentity;

/// Representation of the IMSI DETACH INDICATION message (TS 24.008 clause 9.2.12)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImsiDetachIndication {
    pub cipher_capability: CipherCapability,
    pub mobile_identity: MobileIdentity,
}

impl ImsiDetachIndication {
    /// Parse from the message body following the 2-octet L3 header
    pub fn from_bytes(data: &[u8]) -> Result<Self, PduParseErr> {
        let mut buf = ByteReader::new(data);
        let_octet!(buf, classmark1, "DETACH_LEN");
        let mobile_identity = MobileIdentity::from_bytes(buf.read_lv("MI_LEN")?)?;
        Ok(ImsiDetachIndication {
            cipher_capability: CipherCapability::from_classmark1(classmark1),
            mobile_identity,
        })
    }
}
