use sigtrace_core::pdu_parse_error::PduParseErr;

use crate::common::fields::location_area_id::{LAI_LEN, LocationAreaId};
use crate::common::fields::mobile_identity::MobileIdentity;

/// Representation of the TMSI REALLOCATION COMMAND message (TS 24.008 clause 9.2.17).
/// Response expected: TMSI REALLOCATION COMPLETE
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TmsiReallocationCommand {
    pub lai: LocationAreaId,
    pub mobile_identity: MobileIdentity,
}

impl TmsiReallocationCommand {
    /// Parse from the message body following the 2-octet L3 header
    pub fn from_bytes(data: &[u8]) -> Result<Self, PduParseErr> {
        let lai = LocationAreaId::from_bytes_at(data, 0, "LAI_LEN")?;
        let mobile_identity = MobileIdentity::from_lv(data, LAI_LEN)?;
        Ok(TmsiReallocationCommand { lai, mobile_identity })
    }
}
