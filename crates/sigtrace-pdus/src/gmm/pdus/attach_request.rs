use core::fmt;

use sigtrace_core::pdu_parse_error::PduParseErr;

use crate::common::fields::location_area_id::LocationAreaId;
use crate::common::fields::mobile_identity::MobileIdentity;

/// Octets of DRX parameter following the attach type
const DRX_LEN: usize = 2;

/// Representation of the ATTACH REQUEST message (TS 24.008 clause 9.4.1).
/// Response expected: ATTACH ACCEPT/ATTACH REJECT
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachRequest {
    /// 3 bits, GPRS / combined / emergency attach
    pub attach_type: u8,
    /// 3 bits, GPRS ciphering key sequence number
    pub cksn: u8,
    pub mobile_identity: MobileIdentity,
    /// Location area part of the old routing area identification
    pub old_lai: LocationAreaId,
}

impl AttachRequest {
    /// Parse from the message body following the 2-octet L3 header. Each region is length
    /// checked before it is read; the error names the first region that is missing.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PduParseErr> {
        let len = data.len();

        // MS network capability LV
        let cap_len = *data.first().ok_or(PduParseErr::BufferEnded { field: Some("MS_CAP_LEN") })? as usize;
        let mut offset = 1 + cap_len;
        if offset >= len {
            return Err(PduParseErr::BufferEnded { field: Some("MS_CAP_LEN") });
        }

        if offset + 4 >= len {
            return Err(PduParseErr::BufferEnded { field: Some("NO_DATA_ATT") });
        }
        let attach_octet = data[offset];
        offset += 1 + DRX_LEN;

        let mi_len = data[offset] as usize;
        if offset + mi_len + 1 >= len {
            return Err(PduParseErr::BufferEnded { field: Some("NO_DATA_MI") });
        }
        let mobile_identity = MobileIdentity::from_bytes(&data[offset + 1..offset + 1 + mi_len])?;
        offset += 1 + mi_len;

        if offset + 3 >= len {
            return Err(PduParseErr::BufferEnded { field: Some("NO_DATA_LAI") });
        }
        let old_lai = LocationAreaId::from_bytes_at(data, offset, "NO_DATA_LAI")?;

        Ok(AttachRequest {
            attach_type: attach_octet & 0x07,
            cksn: (attach_octet >> 4) & 0x07,
            mobile_identity,
            old_lai,
        })
    }
}

impl fmt::Display for AttachRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "AttachRequest {{ attach_type: {} cksn: {} mobile_identity: {} old_lai: {} }}",
            self.attach_type, self.cksn, self.mobile_identity, self.old_lai
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Capability (2), attach type, DRX (2), P-TMSI, old RAI
    const ATTACH: &str = "02e5e0 11 0a00 05f4c0ffee01 62f210123401";

    fn data() -> Vec<u8> {
        hex::decode(ATTACH.replace(' ', "")).unwrap()
    }

    #[test]
    fn test_full() {
        let pdu = AttachRequest::from_bytes(&data()).unwrap();
        assert_eq!(pdu.attach_type, 1);
        assert_eq!(pdu.cksn, 1);
        assert_eq!(pdu.mobile_identity, MobileIdentity::Tmsi([0xc0, 0xff, 0xee, 0x01]));
        assert_eq!(pdu.old_lai.lac, 0x1234);
    }

    #[test]
    fn test_truncation_tags() {
        let d = data();
        let tag = |n: usize| AttachRequest::from_bytes(&d[..n]).unwrap_err().field_tag();
        assert_eq!(tag(0), "MS_CAP_LEN");
        assert_eq!(tag(3), "MS_CAP_LEN");
        assert_eq!(tag(7), "NO_DATA_ATT");
        assert_eq!(tag(11), "NO_DATA_MI");
        assert_eq!(tag(14), "NO_DATA_LAI");
        assert_eq!(tag(16), "NO_DATA_LAI");
    }
}
