use sigtrace_core::pdu_parse_error::PduParseErr;

/// Representation of the CHANNEL RELEASE message (TS 44.018 clause 9.1.7)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelRelease {
    /// RR cause, TS 44.018 clause 10.5.2.31
    pub rr_cause: u8,
    /// GPRS resumption IE (type 1, IEI 0xC) is present
    pub gprs_resumption: bool,
}

impl ChannelRelease {
    /// Parse from the message body following the 2-octet L3 header
    pub fn from_bytes(data: &[u8]) -> Result<Self, PduParseErr> {
        let rr_cause = *data.first().ok_or(PduParseErr::BufferEnded { field: Some("RR_CAUSE") })?;
        let gprs_resumption = data.get(1).is_some_and(|x| x & 0xf0 == 0xc0);
        Ok(ChannelRelease { rr_cause, gprs_resumption })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gprs_resumption() {
        assert_eq!(
            ChannelRelease::from_bytes(&[0x00, 0xc1]).unwrap(),
            ChannelRelease { rr_cause: 0, gprs_resumption: true }
        );
        assert!(!ChannelRelease::from_bytes(&[0x05, 0x2b]).unwrap().gprs_resumption);
        assert!(ChannelRelease::from_bytes(&[]).is_err());
    }
}
