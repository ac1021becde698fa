/// TS 24.008 clause 10.5.1.4 type of identity
/// Bits: 3
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MiType {
    None = 0,
    Imsi = 1,
    Imei = 2,
    Imeisv = 3,
    Tmsi = 4,
}

pub const MI_TYPE_MASK: u8 = 0x07;

impl std::convert::TryFrom<u8> for MiType {
    type Error = ();
    fn try_from(x: u8) -> Result<Self, Self::Error> {
        match x {
            0 => Ok(MiType::None),
            1 => Ok(MiType::Imsi),
            2 => Ok(MiType::Imei),
            3 => Ok(MiType::Imeisv),
            4 => Ok(MiType::Tmsi),
            _ => Err(()),
        }
    }
}

impl MiType {
    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u8 {
        self as u8
    }

    /// Extract the identity type from the first octet of a mobile identity value
    pub fn from_octet(octet: u8) -> Result<Self, ()> {
        MiType::try_from(octet & MI_TYPE_MASK)
    }
}

impl core::fmt::Display for MiType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MiType::None => write!(f, "NONE"),
            MiType::Imsi => write!(f, "IMSI"),
            MiType::Imei => write!(f, "IMEI"),
            MiType::Imeisv => write!(f, "IMEISV"),
            MiType::Tmsi => write!(f, "TMSI"),
        }
    }
}
