/// TS 44.006 clause 3.3.3 service access point identifiers carried on Dm channels.
/// Only these two are meaningful for Layer 3 reassembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Sapi {
    /// Call control, mobility management and radio resource signalling
    Signalling = 0,
    /// Short message service
    Sms = 3,
}

impl std::convert::TryFrom<u8> for Sapi {
    type Error = ();
    fn try_from(x: u8) -> Result<Self, Self::Error> {
        match x {
            0 => Ok(Sapi::Signalling),
            3 => Ok(Sapi::Sms),
            _ => Err(()),
        }
    }
}

impl Sapi {
    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u8 {
        self as u8
    }

    /// Index into per-SAPI reassembly state
    pub fn index(self) -> usize {
        match self {
            Sapi::Signalling => 0,
            Sapi::Sms => 1,
        }
    }
}

impl core::fmt::Display for Sapi {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Sapi::Signalling => write!(f, "SAPI0"),
            Sapi::Sms => write!(f, "SAPI3"),
        }
    }
}
