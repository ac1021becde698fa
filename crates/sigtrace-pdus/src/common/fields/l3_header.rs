use sigtrace_core::pdu_parse_error::PduParseErr;

use crate::common::enums::protocol_discriminator::ProtocolDiscriminator;

/// Length of the protocol discriminator / skip indicator octet plus the message type octet
pub const L3_HEADER_LEN: usize = 2;

/// The two leading octets shared by every standard L3 message (TS 24.007 clause 11.2)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct L3Header {
    /// Low nibble of octet 1
    pub pdisc_raw: u8,
    /// High nibble of octet 1, transaction identifier or skip indicator
    pub ti: u8,
    /// Octet 2, unmasked
    pub msg_type_raw: u8,
}

impl L3Header {
    /// Parse the header. `tag` names the length check in the returned error.
    pub fn from_bytes(l3: &[u8], tag: &'static str) -> Result<Self, PduParseErr> {
        if l3.len() < L3_HEADER_LEN {
            return Err(PduParseErr::BufferEnded { field: Some(tag) });
        }
        Ok(L3Header {
            pdisc_raw: l3[0] & 0x0f,
            ti: l3[0] >> 4,
            msg_type_raw: l3[1],
        })
    }

    pub fn pdisc(&self) -> Option<ProtocolDiscriminator> {
        ProtocolDiscriminator::try_from(self.pdisc_raw).ok()
    }

    /// Message type with the send sequence number bits cleared, except for RR which has none
    pub fn msg_type(&self) -> u8 {
        match self.pdisc() {
            Some(ProtocolDiscriminator::RadioResource) => self.msg_type_raw,
            _ => self.msg_type_raw & 0x3f,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masking() {
        // MM with N(SD) bit 7 set
        let h = L3Header::from_bytes(&[0x05, 0x48], "MM_LEN").unwrap();
        assert_eq!(h.pdisc(), Some(ProtocolDiscriminator::MobilityManagement));
        assert_eq!(h.msg_type(), 0x08);

        // RR keeps the full octet
        let h = L3Header::from_bytes(&[0x06, 0x60], "RR_LEN").unwrap();
        assert_eq!(h.msg_type(), 0x60);

        assert_eq!(
            L3Header::from_bytes(&[0x05], "MM_LEN"),
            Err(PduParseErr::BufferEnded { field: Some("MM_LEN") })
        );
    }
}
