use sigtrace_core::pdu_parse_error::PduParseErr;

/// Representation of the LOCATION UPDATING REJECT message (TS 24.008 clause 9.2.14).
/// Response to: LOCATION UPDATING REQUEST
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationUpdatingReject {
    /// Reject cause, TS 24.008 clause 10.5.3.6
    pub cause: u8,
}

impl LocationUpdatingReject {
    /// Parse from the message body following the 2-octet L3 header
    pub fn from_bytes(data: &[u8]) -> Result<Self, PduParseErr> {
        let cause = *data.first().ok_or(PduParseErr::BufferEnded { field: Some("REJ_CAUSE") })?;
        Ok(LocationUpdatingReject { cause })
    }
}
