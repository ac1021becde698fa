/// TS 24.008 clause 10.5.3.3 CM service type
/// Bits: 4
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CmServiceType {
    /// Mobile originating call establishment or packet mode connection
    MoCall = 0x01,
    EmergencyCall = 0x02,
    Sms = 0x04,
    SupplementaryService = 0x08,
    GroupCall = 0x09,
    BroadcastCall = 0x0a,
    LocationServices = 0x0b,
}

impl std::convert::TryFrom<u8> for CmServiceType {
    type Error = ();
    fn try_from(x: u8) -> Result<Self, Self::Error> {
        match x {
            0x01 => Ok(CmServiceType::MoCall),
            0x02 => Ok(CmServiceType::EmergencyCall),
            0x04 => Ok(CmServiceType::Sms),
            0x08 => Ok(CmServiceType::SupplementaryService),
            0x09 => Ok(CmServiceType::GroupCall),
            0x0a => Ok(CmServiceType::BroadcastCall),
            0x0b => Ok(CmServiceType::LocationServices),
            _ => Err(()),
        }
    }
}

impl CmServiceType {
    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u8 {
        self as u8
    }
}

impl core::fmt::Display for CmServiceType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CmServiceType::MoCall => write!(f, "MO CALL"),
            CmServiceType::EmergencyCall => write!(f, "EMERGENCY CALL"),
            CmServiceType::Sms => write!(f, "SMS"),
            CmServiceType::SupplementaryService => write!(f, "SS ACTIVATION"),
            CmServiceType::GroupCall => write!(f, "VGCS"),
            CmServiceType::BroadcastCall => write!(f, "VBS"),
            CmServiceType::LocationServices => write!(f, "LCS"),
        }
    }
}
