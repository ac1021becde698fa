use sigtrace_core::pdu_parse_error::PduParseErr;

use crate::common::fields::mobile_identity::MobileIdentity;

/// Shortest body that carries a P-TMSI mobile identity
const MIN_LEN_WITH_MI: usize = 7;

/// Representation of the GMM SERVICE REQUEST message (TS 24.008 clause 9.4.20).
/// Response expected: SERVICE ACCEPT/SERVICE REJECT
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRequest {
    /// 3 bits, GPRS ciphering key sequence number
    pub cksn: u8,
    pub mobile_identity: Option<MobileIdentity>,
}

impl ServiceRequest {
    /// Parse from the message body following the 2-octet L3 header
    pub fn from_bytes(data: &[u8]) -> Result<Self, PduParseErr> {
        let octet = *data.first().ok_or(PduParseErr::BufferEnded { field: Some("SERV_REQ_LEN") })?;
        let mobile_identity = if data.len() >= MIN_LEN_WITH_MI {
            Some(MobileIdentity::from_lv(data, 1)?)
        } else {
            None
        };
        Ok(ServiceRequest { cksn: octet & 0x07, mobile_identity })
    }
}
