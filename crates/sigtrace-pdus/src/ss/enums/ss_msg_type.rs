/// TS 24.080 clause 3.4 supplementary services message types
/// Bits: 6 (bits 7-8 masked)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SsMsgType {
    ReleaseComplete = 0x2a,
    Facility = 0x3a,
    Register = 0x3b,
}

impl std::convert::TryFrom<u8> for SsMsgType {
    type Error = ();
    fn try_from(x: u8) -> Result<Self, Self::Error> {
        match x {
            0x2a => Ok(SsMsgType::ReleaseComplete),
            0x3a => Ok(SsMsgType::Facility),
            0x3b => Ok(SsMsgType::Register),
            _ => Err(()),
        }
    }
}

impl SsMsgType {
    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u8 {
        self as u8
    }
}

impl core::fmt::Display for SsMsgType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SsMsgType::ReleaseComplete => write!(f, "SS RELEASE COMPLETE"),
            SsMsgType::Facility => write!(f, "SS FACILITY"),
            SsMsgType::Register => write!(f, "SS REGISTER"),
        }
    }
}
