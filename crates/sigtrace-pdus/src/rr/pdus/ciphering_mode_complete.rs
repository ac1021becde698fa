use sigtrace_core::{FILL_OCTET, pdu_parse_error::PduParseErr};

use crate::common::fields::ie_scan::{RR_TV_FIXED, find_ie};
use crate::common::fields::mobile_identity::MobileIdentity;

const IEI_MOBILE_ID: u8 = 0x17;

/// Representation of the CIPHERING MODE COMPLETE message (TS 44.018 clause 9.1.10).
/// Response to: CIPHERING MODE COMMAND
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipheringModeComplete {
    /// Optional, the IMEISV if the command requested it
    pub mobile_identity: Option<MobileIdentity>,
}

impl CipheringModeComplete {
    /// Parse from the message body following the 2-octet L3 header
    pub fn from_bytes(data: &[u8]) -> Result<Self, PduParseErr> {
        if data.first().is_none_or(|&x| x == FILL_OCTET) {
            return Ok(CipheringModeComplete { mobile_identity: None });
        }
        let mobile_identity = match find_ie(data, IEI_MOBILE_ID, RR_TV_FIXED) {
            Some(v) => Some(MobileIdentity::from_bytes(v)?),
            None => None,
        };
        Ok(CipheringModeComplete { mobile_identity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imeisv_present() {
        let data = hex::decode("17093353390123456789f0").unwrap();
        let pdu = CipheringModeComplete::from_bytes(&data).unwrap();
        assert!(matches!(pdu.mobile_identity, Some(MobileIdentity::Imei(_))));

        let pdu = CipheringModeComplete::from_bytes(&[0x2b, 0x2b]).unwrap();
        assert_eq!(pdu.mobile_identity, None);
        assert_eq!(CipheringModeComplete::from_bytes(&[]).unwrap().mobile_identity, None);
    }
}
