/// TS 44.006 clause 3.4 control field formats
/// Bits: 2 (LSBs of the control octet)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameType {
    /// Information transfer, xxxxxxx0
    I,
    /// Supervisory, xxxxxx01
    S,
    /// Unnumbered, xxxxxx11
    U,
}

impl FrameType {
    /// Derive the frame format from a control octet. Never fails: every bit pattern maps to a format.
    pub fn from_control(control: u8) -> Self {
        match control & 0x03 {
            0 | 2 => FrameType::I,
            1 => FrameType::S,
            _ => FrameType::U,
        }
    }
}

impl core::fmt::Display for FrameType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameType::I => write!(f, "I"),
            FrameType::S => write!(f, "S"),
            FrameType::U => write!(f, "U"),
        }
    }
}
