use sigtrace_core::pdu_parse_error::PduParseErr;

use crate::common::fields::location_area_id::LocationAreaId;
use crate::common::fields::mobile_identity::MobileIdentity;

/// Offset of the routing area identification
const RAI_OFFSET: usize = 3;
/// Offset of the optional allocated P-TMSI IEI, after the P-TMSI signature
const PTMSI_IEI_OFFSET: usize = 13;
const IEI_ALLOCATED_PTMSI: u8 = 0x18;

/// Representation of the ATTACH ACCEPT message (TS 24.008 clause 9.4.2).
/// Response to: ATTACH REQUEST
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachAccept {
    pub lai: LocationAreaId,
    /// Routing area code, the octet following the LAI in the RAI
    pub rac: u8,
    /// Optional, allocated P-TMSI
    pub new_identity: Option<MobileIdentity>,
}

impl AttachAccept {
    /// Parse from the message body following the 2-octet L3 header
    pub fn from_bytes(data: &[u8]) -> Result<Self, PduParseErr> {
        if data.len() < 9 {
            return Err(PduParseErr::BufferEnded { field: Some("ATT_ACC_LEN") });
        }
        let lai = LocationAreaId::from_bytes_at(data, RAI_OFFSET, "ATT_ACC_LEN")?;
        let rac = data[RAI_OFFSET + 5];

        let new_identity = if data.len() > 18 && data[PTMSI_IEI_OFFSET] == IEI_ALLOCATED_PTMSI {
            Some(MobileIdentity::from_lv(data, PTMSI_IEI_OFFSET + 1)?)
        } else {
            None
        };

        Ok(AttachAccept { lai, rac, new_identity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_ptmsi() {
        let data = hex::decode("0949 01 62f210123405 19aabbcc 1805f4c0ffee02".replace(' ', "")).unwrap();
        let pdu = AttachAccept::from_bytes(&data).unwrap();
        assert_eq!(pdu.lai.lac, 0x1234);
        assert_eq!(pdu.rac, 0x05);
        assert_eq!(pdu.new_identity, Some(MobileIdentity::Tmsi([0xc0, 0xff, 0xee, 0x02])));

        assert!(AttachAccept::from_bytes(&data[..8]).is_err());
        assert_eq!(AttachAccept::from_bytes(&data[..9]).unwrap().new_identity, None);
    }
}
