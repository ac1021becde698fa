/// TS 24.008 clause 10.4 session management message types
/// Bits: 6 (bits 7-8 masked)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SmMsgType {
    ActivatePdpRequest = 0x01,
    ActivatePdpAccept = 0x02,
    ActivatePdpReject = 0x03,
    RequestPdpActivation = 0x04,
    RequestPdpActivationReject = 0x05,
    DeactivatePdpRequest = 0x06,
    DeactivatePdpAccept = 0x07,
    ModifyPdpRequestNetwork = 0x08,
    ModifyPdpAcceptMs = 0x09,
    ModifyPdpRequestMs = 0x0a,
    ModifyPdpAcceptNetwork = 0x0b,
    ModifyPdpReject = 0x0c,
    ActivateSecondaryPdpRequest = 0x0d,
    ActivateSecondaryPdpAccept = 0x0e,
    ActivateSecondaryPdpReject = 0x0f,
    SmStatus = 0x15,
    RequestSecondaryPdpActivation = 0x1b,
    RequestSecondaryPdpActivationReject = 0x1c,
}

impl std::convert::TryFrom<u8> for SmMsgType {
    type Error = ();
    fn try_from(x: u8) -> Result<Self, Self::Error> {
        match x {
            0x01 => Ok(SmMsgType::ActivatePdpRequest),
            0x02 => Ok(SmMsgType::ActivatePdpAccept),
            0x03 => Ok(SmMsgType::ActivatePdpReject),
            0x04 => Ok(SmMsgType::RequestPdpActivation),
            0x05 => Ok(SmMsgType::RequestPdpActivationReject),
            0x06 => Ok(SmMsgType::DeactivatePdpRequest),
            0x07 => Ok(SmMsgType::DeactivatePdpAccept),
            0x08 => Ok(SmMsgType::ModifyPdpRequestNetwork),
            0x09 => Ok(SmMsgType::ModifyPdpAcceptMs),
            0x0a => Ok(SmMsgType::ModifyPdpRequestMs),
            0x0b => Ok(SmMsgType::ModifyPdpAcceptNetwork),
            0x0c => Ok(SmMsgType::ModifyPdpReject),
            0x0d => Ok(SmMsgType::ActivateSecondaryPdpRequest),
            0x0e => Ok(SmMsgType::ActivateSecondaryPdpAccept),
            0x0f => Ok(SmMsgType::ActivateSecondaryPdpReject),
            0x15 => Ok(SmMsgType::SmStatus),
            0x1b => Ok(SmMsgType::RequestSecondaryPdpActivation),
            0x1c => Ok(SmMsgType::RequestSecondaryPdpActivationReject),
            _ => Err(()),
        }
    }
}

impl SmMsgType {
    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u8 {
        self as u8
    }
}

impl core::fmt::Display for SmMsgType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SmMsgType::ActivatePdpRequest => write!(f, "ACTIVATE PDP REQUEST"),
            SmMsgType::ActivatePdpAccept => write!(f, "ACTIVATE PDP ACCEPT"),
            SmMsgType::ActivatePdpReject => write!(f, "ACTIVATE PDP REJECT"),
            SmMsgType::RequestPdpActivation => write!(f, "REQUEST PDP ACTIVATION"),
            SmMsgType::RequestPdpActivationReject => write!(f, "REQUEST PDP ACT REJECT"),
            SmMsgType::DeactivatePdpRequest => write!(f, "DEACTIVATE PDP REQUEST"),
            SmMsgType::DeactivatePdpAccept => write!(f, "DEACTIVATE PDP ACCEPT"),
            SmMsgType::ModifyPdpRequestNetwork => write!(f, "MODIFY PDP REQUEST"),
            SmMsgType::ModifyPdpAcceptMs => write!(f, "MODIFY PDP ACCEPT (MS)"),
            SmMsgType::ModifyPdpRequestMs => write!(f, "MODIFY PDP REQUEST (MS)"),
            SmMsgType::ModifyPdpAcceptNetwork => write!(f, "MODIFY PDP ACCEPT"),
            SmMsgType::ModifyPdpReject => write!(f, "MODIFY PDP REJECT"),
            SmMsgType::ActivateSecondaryPdpRequest => write!(f, "ACTIVATE 2ND PDP REQUEST"),
            SmMsgType::ActivateSecondaryPdpAccept => write!(f, "ACTIVATE 2ND PDP ACCEPT"),
            SmMsgType::ActivateSecondaryPdpReject => write!(f, "ACTIVATE 2ND PDP REJECT"),
            SmMsgType::SmStatus => write!(f, "SM STATUS"),
            SmMsgType::RequestSecondaryPdpActivation => write!(f, "REQUEST 2ND PDP ACTIVATION"),
            SmMsgType::RequestSecondaryPdpActivationReject => write!(f, "REQUEST 2ND PDP ACT REJECT"),
        }
    }
}
