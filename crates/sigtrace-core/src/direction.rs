/// Bit in the ARFCN word of a captured frame that marks it as uplink
pub const ARFCN_UPLINK: u16 = 0x4000;

#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub enum Direction {
    /// Uplink
    Ul,
    /// Downlink
    Dl,
}

impl Direction {
    #[inline]
    pub fn from_arfcn(arfcn: u16) -> Self {
        if arfcn & ARFCN_UPLINK != 0 {
            Direction::Ul
        } else {
            Direction::Dl
        }
    }

    #[inline]
    pub fn is_ul(&self) -> bool {
        matches!(self, Direction::Ul)
    }

    /// Index into per-direction state arrays, downlink first
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Direction::Dl => 0,
            Direction::Ul => 1,
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Direction::Ul => write!(f, "UL"),
            Direction::Dl => write!(f, "DL"),
        }
    }
}
