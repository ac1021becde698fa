use sigtrace_core::pdu_parse_error::PduParseErr;

use crate::common::fields::location_area_id::LocationAreaId;
use crate::common::fields::mobile_identity::MobileIdentity;

const RAI_OFFSET: usize = 2;
const PTMSI_IEI_OFFSET: usize = 8;
const IEI_ALLOCATED_PTMSI: u8 = 0x18;

/// Representation of the ROUTING AREA UPDATE ACCEPT message (TS 24.008 clause 9.4.15).
/// Response to: ROUTING AREA UPDATE REQUEST
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingAreaUpdateAccept {
    pub lai: LocationAreaId,
    pub rac: u8,
    /// Optional, allocated P-TMSI
    pub new_identity: Option<MobileIdentity>,
}

impl RoutingAreaUpdateAccept {
    /// Parse from the message body following the 2-octet L3 header
    pub fn from_bytes(data: &[u8]) -> Result<Self, PduParseErr> {
        if data.len() < RAI_OFFSET + 6 {
            return Err(PduParseErr::BufferEnded { field: Some("RAU_ACC_LEN") });
        }
        let lai = LocationAreaId::from_bytes_at(data, RAI_OFFSET, "RAU_ACC_LEN")?;
        let rac = data[RAI_OFFSET + 5];

        let new_identity = if data.get(PTMSI_IEI_OFFSET) == Some(&IEI_ALLOCATED_PTMSI) {
            Some(MobileIdentity::from_lv(data, PTMSI_IEI_OFFSET + 1)?)
        } else {
            None
        };

        Ok(RoutingAreaUpdateAccept { lai, rac, new_identity })
    }
}
