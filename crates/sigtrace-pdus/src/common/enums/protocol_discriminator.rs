/// TS 24.007 clause 11.2.3.1.1 protocol discriminator
/// Bits: 4 (low nibble of the first L3 octet)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ProtocolDiscriminator {
    GroupCallControl = 0,
    BroadcastCallControl = 1,
    Pdss1 = 2,
    CallControl = 3,
    /// PDSS2, also GPRS transparent transport
    Pdss2 = 4,
    MobilityManagement = 5,
    RadioResource = 6,
    GprsMobilityManagement = 8,
    Sms = 9,
    GprsSessionManagement = 10,
    NonCallSs = 11,
    LocationServices = 12,
}

impl std::convert::TryFrom<u8> for ProtocolDiscriminator {
    type Error = ();
    fn try_from(x: u8) -> Result<Self, Self::Error> {
        match x {
            0 => Ok(ProtocolDiscriminator::GroupCallControl),
            1 => Ok(ProtocolDiscriminator::BroadcastCallControl),
            2 => Ok(ProtocolDiscriminator::Pdss1),
            3 => Ok(ProtocolDiscriminator::CallControl),
            4 => Ok(ProtocolDiscriminator::Pdss2),
            5 => Ok(ProtocolDiscriminator::MobilityManagement),
            6 => Ok(ProtocolDiscriminator::RadioResource),
            8 => Ok(ProtocolDiscriminator::GprsMobilityManagement),
            9 => Ok(ProtocolDiscriminator::Sms),
            10 => Ok(ProtocolDiscriminator::GprsSessionManagement),
            11 => Ok(ProtocolDiscriminator::NonCallSs),
            12 => Ok(ProtocolDiscriminator::LocationServices),
            _ => Err(()),
        }
    }
}

impl ProtocolDiscriminator {
    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u8 {
        self as u8
    }

    /// Families whose message type octet carries N(SD) / spare bits in bits 7-8, which must be masked
    pub fn masks_message_type(self) -> bool {
        self != ProtocolDiscriminator::RadioResource
    }
}

impl core::fmt::Display for ProtocolDiscriminator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ProtocolDiscriminator::GroupCallControl => write!(f, "GCC"),
            ProtocolDiscriminator::BroadcastCallControl => write!(f, "BCC"),
            ProtocolDiscriminator::Pdss1 => write!(f, "PDSS1"),
            ProtocolDiscriminator::CallControl => write!(f, "CC"),
            ProtocolDiscriminator::Pdss2 => write!(f, "PDSS2"),
            ProtocolDiscriminator::MobilityManagement => write!(f, "MM"),
            ProtocolDiscriminator::RadioResource => write!(f, "RR"),
            ProtocolDiscriminator::GprsMobilityManagement => write!(f, "GMM"),
            ProtocolDiscriminator::Sms => write!(f, "SMS"),
            ProtocolDiscriminator::GprsSessionManagement => write!(f, "SM"),
            ProtocolDiscriminator::NonCallSs => write!(f, "SS"),
            ProtocolDiscriminator::LocationServices => write!(f, "LCS"),
        }
    }
}
