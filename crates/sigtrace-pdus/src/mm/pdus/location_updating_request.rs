use core::fmt;

use sigtrace_core::let_octet;
use sigtrace_core::{ByteReader, pdu_parse_error::PduParseErr};

use crate::common::fields::classmark::CipherCapability;
use crate::common::fields::location_area_id::LocationAreaId;
use crate::common::fields::mobile_identity::MobileIdentity;

/// Octets up to and including the mobile identity length
const FIXED_PART_LEN: usize = 8;

/// Representation of the LOCATION UPDATING REQUEST message (TS 24.008 clause 9.2.15).
/// Sent by the mobile station to request update of its location file or IMSI attach.
/// Response expected: LOCATION UPDATING ACCEPT/LOCATION UPDATING REJECT
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationUpdatingRequest {
    /// 2 bits, normal / periodic / IMSI attach
    pub lu_type: u8,
    /// 3 bits, ciphering key sequence number
    pub cksn: u8,
    /// Location area the mobile was last registered in
    pub lai: LocationAreaId,
    /// From mobile station classmark 1
    pub cipher_capability: CipherCapability,
    pub mobile_identity: MobileIdentity,
}

impl LocationUpdatingRequest {
    /// Parse from the message body following the 2-octet L3 header
    pub fn from_bytes(data: &[u8]) -> Result<Self, PduParseErr> {
        if data.len() < FIXED_PART_LEN {
            return Err(PduParseErr::BufferEnded { field: Some("LUR_DTAP_SIZE") });
        }
        let mut buf = ByteReader::new(data);

        let_octet!(buf, type_and_cksn, "LUR_DTAP_SIZE");
        let lai = LocationAreaId::from_reader(&mut buf, "LUR_DTAP_SIZE")?;
        let_octet!(buf, classmark1, "LUR_DTAP_SIZE");
        let mobile_identity = MobileIdentity::from_bytes(buf.read_lv("MI_LEN")?)?;

        Ok(LocationUpdatingRequest {
            lu_type: type_and_cksn & 0x03,
            cksn: type_and_cksn >> 4,
            lai,
            cipher_capability: CipherCapability::from_classmark1(classmark1),
            mobile_identity,
        })
    }
}

impl fmt::Display for LocationUpdatingRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "LocationUpdatingRequest {{ lu_type: {} cksn: {} lai: {} cipher_capability: {:?} mobile_identity: {} }}",
            self.lu_type, self.cksn, self.lai, self.cipher_capability, self.mobile_identity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imsi_attach() {
        let data = hex::decode("7262f210123457080910101032547698").unwrap();
        let pdu = LocationUpdatingRequest::from_bytes(&data).unwrap();
        assert_eq!(pdu.lu_type, 2);
        assert_eq!(pdu.cksn, 7);
        assert_eq!(pdu.lai.mcc(), 262);
        assert_eq!(pdu.lai.lac, 0x1234);
        assert_eq!(pdu.cipher_capability.mask, 1);
        assert_eq!(pdu.mobile_identity, MobileIdentity::Imsi("001010123456789".to_string()));
    }

    #[test]
    fn test_truncated() {
        let data = hex::decode("7262f2101234").unwrap();
        assert_eq!(LocationUpdatingRequest::from_bytes(&data).unwrap_err().field_tag(), "LUR_DTAP_SIZE");

        // MI length runs past the end
        let data = hex::decode("7262f21012345708091010").unwrap();
        assert_eq!(LocationUpdatingRequest::from_bytes(&data).unwrap_err().field_tag(), "MI_LEN");
    }
}
