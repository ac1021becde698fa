use sigtrace_core::pdu_parse_error::PduParseErr;

use crate::common::enums::mi_type::{MI_TYPE_MASK, MiType};

/// Representation of the IDENTITY REQUEST message (TS 24.008 clause 9.2.10, 9.4.12 for GMM).
/// Response expected: IDENTITY RESPONSE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityRequest {
    /// 3 bits, requested identity type
    pub identity_type_raw: u8,
}

impl IdentityRequest {
    /// Parse from the message body following the 2-octet L3 header
    pub fn from_bytes(data: &[u8]) -> Result<Self, PduParseErr> {
        let octet = *data.first().ok_or(PduParseErr::BufferEnded { field: Some("ID_TYPE") })?;
        Ok(IdentityRequest { identity_type_raw: octet & MI_TYPE_MASK })
    }

    pub fn identity_type(&self) -> Option<MiType> {
        MiType::try_from(self.identity_type_raw).ok()
    }
}
