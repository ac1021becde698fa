use crate::mm::enums::auth_flavour::AuthFlavour;

/// Offset of the extended RES IEI, right after SRES
const XRES_IEI_OFFSET: usize = 4;
const IEI_RES_EXT: u8 = 0x21;
const RES_EXT_LEN: u8 = 0x04;

/// Representation of the AUTHENTICATION RESPONSE message (TS 24.008 clause 9.2.3).
/// Response to: AUTHENTICATION REQUEST
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticationResponse {
    pub flavour: AuthFlavour,
}

impl AuthenticationResponse {
    /// Parse from the message body following the 2-octet L3 header. Never fails.
    pub fn from_bytes(data: &[u8]) -> Self {
        let umts =
            data.get(XRES_IEI_OFFSET) == Some(&IEI_RES_EXT) && data.get(XRES_IEI_OFFSET + 1) == Some(&RES_EXT_LEN);
        let flavour = if umts {
            AuthFlavour::Umts
        } else {
            AuthFlavour::Gsm
        };
        AuthenticationResponse { flavour }
    }
}
