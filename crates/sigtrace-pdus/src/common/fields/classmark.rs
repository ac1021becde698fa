use sigtrace_core::pdu_parse_error::PduParseErr;

/// Bit in a cipher capability mask for A5/1
pub const CAP_A5_1: u8 = 0x01;
/// Bit in a cipher capability mask for A5/2
pub const CAP_A5_2: u8 = 0x02;
/// Bit in a cipher capability mask for A5/3
pub const CAP_A5_3: u8 = 0x04;

/// Ciphering algorithms a mobile announces in its classmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CipherCapability {
    pub mask: u8,
}

impl CipherCapability {
    /// TS 24.008 clause 10.5.1.5 Mobile Station Classmark 1. Bit 4 is "A5/1 not available".
    pub fn from_classmark1(octet: u8) -> Self {
        CipherCapability { mask: if octet & 0x08 == 0 { CAP_A5_1 } else { 0 } }
    }

    /// TS 24.008 clause 10.5.1.6 Mobile Station Classmark 2 value (3 octets, length octet stripped).
    /// Octet 1 carries A5/1 like classmark 1, octet 3 bits 1 and 2 announce A5/2 and A5/3.
    pub fn from_classmark2(value: &[u8]) -> Result<Self, PduParseErr> {
        let Some(cm) = value.get(..3) else {
            return Err(PduParseErr::BufferEnded { field: Some("CM2_LEN") });
        };
        let mut ret = Self::from_classmark1(cm[0]);
        ret.mask |= (cm[2] & 0x01) << 1;
        ret.mask |= ((cm[2] >> 1) & 0x01) << 2;
        Ok(ret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classmark_bits() {
        // A5/1 available
        assert_eq!(CipherCapability::from_classmark1(0x57).mask, CAP_A5_1);
        // A5/1 not available
        assert_eq!(CipherCapability::from_classmark1(0x5f).mask, 0);

        // A5/1 and A5/3, no A5/2
        let cap = CipherCapability::from_classmark2(&[0x57, 0x18, 0x82]).unwrap();
        assert_eq!(cap.mask, CAP_A5_1 | CAP_A5_3);
        let cap = CipherCapability::from_classmark2(&[0x5f, 0x18, 0x83]).unwrap();
        assert_eq!(cap.mask, CAP_A5_2 | CAP_A5_3);

        assert!(CipherCapability::from_classmark2(&[0x57, 0x18]).is_err());
    }
}
