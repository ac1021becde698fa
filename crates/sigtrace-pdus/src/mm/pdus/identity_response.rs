use sigtrace_core::pdu_parse_error::PduParseErr;

use crate::common::fields::mobile_identity::MobileIdentity;

/// Representation of the IDENTITY RESPONSE message (TS 24.008 clause 9.2.11, 9.4.13 for GMM).
/// Response to: IDENTITY REQUEST
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityResponse {
    pub mobile_identity: MobileIdentity,
}

impl IdentityResponse {
    /// Parse from the message body following the 2-octet L3 header
    pub fn from_bytes(data: &[u8]) -> Result<Self, PduParseErr> {
        Ok(IdentityResponse { mobile_identity: MobileIdentity::from_lv(data, 0)? })
    }
}
