use core::fmt;

use sigtrace_core::let_octet;
use sigtrace_core::{ByteReader, pdu_parse_error::PduParseErr};

use crate::common::enums::mi_type::MI_TYPE_MASK;
use crate::common::fields::classmark::CipherCapability;
use crate::common::fields::mobile_identity::MobileIdentity;

/// Representation of the PAGING RESPONSE message (TS 44.018 clause 9.1.25).
/// Sent by the mobile station on the main DCCH after being paged.
/// Response to: PAGING REQUEST TYPE 1/2/3
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingResponse {
    /// 3 bits, ciphering key sequence number
    pub cksn: u8,
    /// From mobile station classmark 2
    pub cipher_capability: CipherCapability,
    /// 3 bits, identity type the mobile answered with, as transmitted
    pub mi_type_raw: u8,
    pub mobile_identity: MobileIdentity,
}

impl PagingResponse {
    /// Parse from the message body following the 2-octet L3 header
    pub fn from_bytes(data: &[u8]) -> Result<Self, PduParseErr> {
        let mut buf = ByteReader::new(data);

        let_octet!(buf, cksn_octet, "PAG_RESP_LEN");
        let cipher_capability = CipherCapability::from_classmark2(buf.read_lv("CM2_LEN")?)?;
        let mi = buf.read_lv("MI_LEN")?;
        let mi_type_raw = mi.first().map(|x| x & MI_TYPE_MASK).unwrap_or(0);
        let mobile_identity = MobileIdentity::from_bytes(mi)?;

        Ok(PagingResponse {
            cksn: (cksn_octet >> 4) & 0x07,
            cipher_capability,
            mi_type_raw,
            mobile_identity,
        })
    }
}

impl fmt::Display for PagingResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "PagingResponse {{ cksn: {} cipher_capability: {:?} mobile_identity: {} }}",
            self.cksn, self.cipher_capability, self.mobile_identity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tmsi_answer() {
        let data = hex::decode("200357188305f4cafe0001").unwrap();
        let pdu = PagingResponse::from_bytes(&data).unwrap();
        assert_eq!(pdu.cksn, 2);
        assert_eq!(pdu.cipher_capability.mask, 0x07);
        assert_eq!(pdu.mi_type_raw, 4);
        assert_eq!(pdu.mobile_identity, MobileIdentity::Tmsi([0xca, 0xfe, 0x00, 0x01]));
    }
}
