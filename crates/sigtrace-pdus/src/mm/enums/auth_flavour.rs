/// Authentication procedure flavour, as inferred from the challenge / response layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AuthFlavour {
    /// RAND only, SRES response
    Gsm = 1,
    /// RAND plus AUTN, extended RES response
    Umts = 2,
}

impl AuthFlavour {
    /// Convert this enum back into the raw integer value
    pub fn into_raw(self) -> u8 {
        self as u8
    }
}

impl core::fmt::Display for AuthFlavour {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AuthFlavour::Gsm => write!(f, "GSM"),
            AuthFlavour::Umts => write!(f, "UMTS"),
        }
    }
}
