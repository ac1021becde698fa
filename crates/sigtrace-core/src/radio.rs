/// Radio access technology a message was captured on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RadioTechnology {
    #[default]
    Gsm,
    Umts,
    Lte,
}

impl core::fmt::Display for RadioTechnology {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RadioTechnology::Gsm => write!(f, "GSM"),
            RadioTechnology::Umts => write!(f, "UMTS"),
            RadioTechnology::Lte => write!(f, "LTE"),
        }
    }
}

/// Transaction domain. Also the index into the session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Domain {
    #[default]
    CircuitSwitched,
    PacketSwitched,
}

impl Domain {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Domain::CircuitSwitched => 0,
            Domain::PacketSwitched => 1,
        }
    }
}

impl core::fmt::Display for Domain {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Domain::CircuitSwitched => write!(f, "CS"),
            Domain::PacketSwitched => write!(f, "PS"),
        }
    }
}

/// Logical control channel a frame was captured on.
/// For UMTS, Sdcch and Facch stand in for the DCCH and CCCH respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelType {
    /// Slow associated control channel
    Sacch,
    /// Standalone dedicated control channel
    Sdcch,
    /// Fast associated control channel
    Facch,
    /// Broadcast (and common) control channel
    Bcch,
}

impl ChannelType {
    /// RSL-style channel number used when synthesizing envelopes
    pub fn default_chan_nr(self) -> u8 {
        match self {
            ChannelType::Sdcch | ChannelType::Sacch => 0x41,
            ChannelType::Facch => 0x08,
            ChannelType::Bcch => 0x80,
        }
    }
}

impl core::fmt::Display for ChannelType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ChannelType::Sacch => write!(f, "SACCH"),
            ChannelType::Sdcch => write!(f, "SDCCH"),
            ChannelType::Facch => write!(f, "FACCH"),
            ChannelType::Bcch => write!(f, "BCCH"),
        }
    }
}

impl std::str::FromStr for ChannelType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sacch" => Ok(ChannelType::Sacch),
            "sdcch" | "dcch" => Ok(ChannelType::Sdcch),
            "facch" | "ccch" => Ok(ChannelType::Facch),
            "bcch" => Ok(ChannelType::Bcch),
            _ => Err(format!("unknown channel type '{}'", s)),
        }
    }
}

impl std::str::FromStr for RadioTechnology {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gsm" | "2g" => Ok(RadioTechnology::Gsm),
            "umts" | "3g" => Ok(RadioTechnology::Umts),
            "lte" | "4g" => Ok(RadioTechnology::Lte),
            _ => Err(format!("unknown radio technology '{}'", s)),
        }
    }
}
