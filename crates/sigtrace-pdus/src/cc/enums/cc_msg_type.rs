/// TS 24.008 clause 10.4 call control message types
/// Bits: 6 (bits 7-8 masked)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CcMsgType {
    Alerting = 0x01,
    CallProceeding = 0x02,
    Progress = 0x03,
    Setup = 0x05,
    Connect = 0x07,
    CallConfirmed = 0x08,
    ConnectAcknowledge = 0x0f,
    Disconnect = 0x25,
    ReleaseComplete = 0x2a,
    Release = 0x2d,
    Facility = 0x3a,
    Status = 0x3d,
    Notify = 0x3e,
}

impl std::convert::TryFrom<u8> for CcMsgType {
    type Error = ();
    fn try_from(x: u8) -> Result<Self, Self::Error> {
        match x {
            0x01 => Ok(CcMsgType::Alerting),
            0x02 => Ok(CcMsgType::CallProceeding),
            0x03 => Ok(CcMsgType::Progress),
            0x05 => Ok(CcMsgType::Setup),
            0x07 => Ok(CcMsgType::Connect),
            0x08 => Ok(CcMsgType::CallConfirmed),
            0x0f => Ok(CcMsgType::ConnectAcknowledge),
            0x25 => Ok(CcMsgType::Disconnect),
            0x2a => Ok(CcMsgType::ReleaseComplete),
            0x2d => Ok(CcMsgType::Release),
            0x3a => Ok(CcMsgType::Facility),
            0x3d => Ok(CcMsgType::Status),
            0x3e => Ok(CcMsgType::Notify),
            _ => Err(()),
        }
    }
}

impl CcMsgType {
    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u8 {
        self as u8
    }
}

impl core::fmt::Display for CcMsgType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CcMsgType::Alerting => write!(f, "CALL ALERTING"),
            CcMsgType::CallProceeding => write!(f, "CALL PROCEEDING"),
            CcMsgType::Progress => write!(f, "CALL PROGRESS"),
            CcMsgType::Setup => write!(f, "CALL SETUP"),
            CcMsgType::Connect => write!(f, "CALL CONNECT"),
            CcMsgType::CallConfirmed => write!(f, "CALL CONFIRMED"),
            CcMsgType::ConnectAcknowledge => write!(f, "CALL CONNECT ACK"),
            CcMsgType::Disconnect => write!(f, "CALL DISCONNECT"),
            CcMsgType::ReleaseComplete => write!(f, "CALL RELEASE COMPLETE"),
            CcMsgType::Release => write!(f, "CALL RELEASE"),
            CcMsgType::Facility => write!(f, "CALL FACILITY"),
            CcMsgType::Status => write!(f, "CALL STATUS"),
            CcMsgType::Notify => write!(f, "CALL NOTIFY"),
        }
    }
}
