use sigtrace_core::pdu_parse_error::PduParseErr;

/// Representation of the ROUTING AREA UPDATE REQUEST message (TS 24.008 clause 9.4.14).
/// Only the key sequence is retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingAreaUpdateRequest {
    /// 3 bits, GPRS ciphering key sequence number
    pub cksn: u8,
}

impl RoutingAreaUpdateRequest {
    /// Parse from the message body following the 2-octet L3 header
    pub fn from_bytes(data: &[u8]) -> Result<Self, PduParseErr> {
        let octet = *data.first().ok_or(PduParseErr::BufferEnded { field: Some("RAU_REQ_LEN") })?;
        Ok(RoutingAreaUpdateRequest { cksn: (octet >> 4) & 0x07 })
    }
}
