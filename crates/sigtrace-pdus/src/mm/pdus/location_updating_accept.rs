use core::fmt;

use sigtrace_core::pdu_parse_error::PduParseErr;

use crate::common::fields::location_area_id::{LAI_LEN, LocationAreaId};
use crate::common::fields::mobile_identity::MobileIdentity;

/// IEI of the optional Mobile Identity
const IEI_MOBILE_ID: u8 = 0x17;

/// Representation of the LOCATION UPDATING ACCEPT message (TS 24.008 clause 9.2.13).
/// Response to: LOCATION UPDATING REQUEST
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationUpdatingAccept {
    pub lai: LocationAreaId,
    /// Optional, carries the reallocated TMSI (or IMSI) when present
    pub new_identity: Option<MobileIdentity>,
}

impl LocationUpdatingAccept {
    /// Parse from the message body following the 2-octet L3 header
    pub fn from_bytes(data: &[u8]) -> Result<Self, PduParseErr> {
        let lai = LocationAreaId::from_bytes_at(data, 0, "LAI_LEN")?;

        let new_identity = if data.len() > 11 && data[LAI_LEN] == IEI_MOBILE_ID {
            Some(MobileIdentity::from_lv(data, LAI_LEN + 1)?)
        } else {
            None
        };

        Ok(LocationUpdatingAccept { lai, new_identity })
    }
}

impl fmt::Display for LocationUpdatingAccept {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LocationUpdatingAccept {{ lai: {} new_identity: {:?} }}", self.lai, self.new_identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_tmsi() {
        let data = hex::decode("62f2101234 1705f4deadbeef".replace(' ', "")).unwrap();
        let pdu = LocationUpdatingAccept::from_bytes(&data).unwrap();
        assert_eq!(pdu.lai.lac, 0x1234);
        assert_eq!(pdu.new_identity, Some(MobileIdentity::Tmsi([0xde, 0xad, 0xbe, 0xef])));
    }

    #[test]
    fn test_without_identity() {
        let data = hex::decode("62f2101234").unwrap();
        let pdu = LocationUpdatingAccept::from_bytes(&data).unwrap();
        assert_eq!(pdu.new_identity, None);

        assert!(LocationUpdatingAccept::from_bytes(&[0x62, 0xf2]).is_err());
    }
}
