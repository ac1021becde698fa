use sigtrace_core::pdu_parse_error::PduParseErr;

use crate::mm::enums::auth_flavour::AuthFlavour;

/// Offset of the AUTN IEI when RAND and CKSN are present
const AUTN_IEI_OFFSET: usize = 20;
const IEI_AUTN: u8 = 0x28;

/// Representation of the AUTHENTICATION AND CIPHERING REQUEST message (TS 24.008 clause 9.4.9).
/// Response expected: AUTHENTICATION AND CIPHERING RESPONSE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthCipherRequest {
    /// 3 bits, GEA algorithm, 0 = no ciphering
    pub cipher_algorithm: u8,
    /// IMEISV request bits are non-zero
    pub imeisv_requested: bool,
    pub flavour: AuthFlavour,
}

impl AuthCipherRequest {
    /// Parse from the message body following the 2-octet L3 header
    pub fn from_bytes(data: &[u8]) -> Result<Self, PduParseErr> {
        let octet = *data.first().ok_or(PduParseErr::BufferEnded { field: Some("AUTH_CIPH_LEN") })?;
        let flavour = if data.get(AUTN_IEI_OFFSET) == Some(&IEI_AUTN) {
            AuthFlavour::Umts
        } else {
            AuthFlavour::Gsm
        };
        Ok(AuthCipherRequest {
            cipher_algorithm: octet & 0x07,
            imeisv_requested: octet & 0x70 != 0,
            flavour,
        })
    }
}
