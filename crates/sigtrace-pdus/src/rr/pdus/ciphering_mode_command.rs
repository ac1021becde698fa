use sigtrace_core::pdu_parse_error::PduParseErr;

/// Representation of the CIPHERING MODE COMMAND message (TS 44.018 clause 9.1.9).
/// Response expected: CIPHERING MODE COMPLETE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipheringModeCommand {
    /// 1 bit, start ciphering
    pub start_ciphering: bool,
    /// 3 bits, algorithm identifier, A5/(n+1)
    pub algorithm_raw: u8,
    /// 1 bit, cipher response: the mobile must include its IMEISV in the complete message
    pub imeisv_requested: bool,
}

impl CipheringModeCommand {
    /// Parse from the message body following the 2-octet L3 header
    pub fn from_bytes(data: &[u8]) -> Result<Self, PduParseErr> {
        let octet = *data.first().ok_or(PduParseErr::BufferEnded { field: Some("CMC_LEN") })?;
        Ok(CipheringModeCommand {
            start_ciphering: octet & 0x01 != 0,
            algorithm_raw: (octet >> 1) & 0x07,
            imeisv_requested: octet & 0x10 != 0,
        })
    }

    /// The commanded A5 version, or None if ciphering is not started
    pub fn a5_version(&self) -> Option<u8> {
        self.start_ciphering.then_some(self.algorithm_raw + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a5_3_with_imeisv() {
        let pdu = CipheringModeCommand::from_bytes(&[0x15]).unwrap();
        assert_eq!(pdu.a5_version(), Some(3));
        assert!(pdu.imeisv_requested);

        let pdu = CipheringModeCommand::from_bytes(&[0x00]).unwrap();
        assert_eq!(pdu.a5_version(), None);
        assert!(!pdu.imeisv_requested);
    }
}
