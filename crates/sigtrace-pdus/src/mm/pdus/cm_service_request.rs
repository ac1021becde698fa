use core::fmt;

use sigtrace_core::let_octet;
use sigtrace_core::{ByteReader, pdu_parse_error::PduParseErr};

use crate::common::fields::classmark::CipherCapability;
use crate::common::fields::mobile_identity::MobileIdentity;
use crate::mm::enums::cm_service_type::CmServiceType;

/// Representation of the CM SERVICE REQUEST message (TS 24.008 clause 9.2.9).
/// Sent by the mobile station to request a service for the connection management sublayer.
/// Response expected: CM SERVICE ACCEPT/CM SERVICE REJECT
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmServiceRequest {
    /// 4 bits, raw CM service type
    pub service_type_raw: u8,
    /// 3 bits, ciphering key sequence number
    pub cksn: u8,
    /// From mobile station classmark 2
    pub cipher_capability: CipherCapability,
    pub mobile_identity: MobileIdentity,
}

impl CmServiceRequest {
    /// Parse from the message body following the 2-octet L3 header
    pub fn from_bytes(data: &[u8]) -> Result<Self, PduParseErr> {
        let mut buf = ByteReader::new(data);

        let_octet!(buf, type_and_cksn, "CM_SERV_LEN");
        let cipher_capability = CipherCapability::from_classmark2(buf.read_lv("CM2_LEN")?)?;
        let mobile_identity = MobileIdentity::from_bytes(buf.read_lv("MI_LEN")?)?;

        Ok(CmServiceRequest {
            service_type_raw: type_and_cksn & 0x0f,
            cksn: (type_and_cksn >> 4) & 0x07,
            cipher_capability,
            mobile_identity,
        })
    }

    pub fn service_type(&self) -> Option<CmServiceType> {
        CmServiceType::try_from(self.service_type_raw).ok()
    }
}

impl fmt::Display for CmServiceRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "CmServiceRequest {{ service_type: {:?} cksn: {} cipher_capability: {:?} mobile_identity: {} }}",
            self.service_type(),
            self.cksn,
            self.cipher_capability,
            self.mobile_identity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sms_with_tmsi() {
        let data = hex::decode("340357188205f401020304").unwrap();
        let pdu = CmServiceRequest::from_bytes(&data).unwrap();
        assert_eq!(pdu.service_type(), Some(CmServiceType::Sms));
        assert_eq!(pdu.cksn, 3);
        assert_eq!(pdu.cipher_capability.mask, 0x05);
        assert_eq!(pdu.mobile_identity, MobileIdentity::Tmsi([1, 2, 3, 4]));
    }

    #[test]
    fn test_truncated_classmark() {
        let data = hex::decode("340357").unwrap();
        assert_eq!(CmServiceRequest::from_bytes(&data).unwrap_err().field_tag(), "CM2_LEN");
    }
}
