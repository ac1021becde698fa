use sigtrace_core::pdu_parse_error::PduParseErr;

use crate::common::fields::mobile_identity::MobileIdentity;

/// Offset of the IMEISV IEI, after A&C reference number and SRES
const IMEISV_IEI_OFFSET: usize = 6;
const IEI_IMEISV: u8 = 0x23;
/// Shortest body that can carry the IMEISV IE
const MIN_LEN_WITH_IMEISV: usize = 16;

/// Representation of the AUTHENTICATION AND CIPHERING RESPONSE message (TS 24.008 clause 9.4.10).
/// Response to: AUTHENTICATION AND CIPHERING REQUEST
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCipherResponse {
    pub imeisv: Option<MobileIdentity>,
}

impl AuthCipherResponse {
    /// Parse from the message body following the 2-octet L3 header
    pub fn from_bytes(data: &[u8]) -> Result<Self, PduParseErr> {
        let imeisv = if data.len() >= MIN_LEN_WITH_IMEISV && data[IMEISV_IEI_OFFSET] == IEI_IMEISV {
            Some(MobileIdentity::from_lv(data, IMEISV_IEI_OFFSET + 1)?)
        } else {
            None
        };
        Ok(AuthCipherResponse { imeisv })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imeisv() {
        let data = hex::decode("0022aabbccdd 23 093353390123456789f0".replace(' ', "")).unwrap();
        let pdu = AuthCipherResponse::from_bytes(&data).unwrap();
        assert!(matches!(pdu.imeisv, Some(MobileIdentity::Imei(_))));

        assert_eq!(AuthCipherResponse::from_bytes(&data[..6]).unwrap().imeisv, None);
    }
}
