use crate::mm::enums::auth_flavour::AuthFlavour;

/// Offset of the AUTN IEI, right after the ciphering key sequence number and RAND
const AUTN_IEI_OFFSET: usize = 17;
const IEI_AUTN: u8 = 0x20;
const AUTN_LEN: u8 = 0x10;

/// Representation of the AUTHENTICATION REQUEST message (TS 24.008 clause 9.2.2).
/// Only the flavour is extracted; RAND and AUTN are not retained.
/// Response expected: AUTHENTICATION RESPONSE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticationRequest {
    pub flavour: AuthFlavour,
}

impl AuthenticationRequest {
    /// Parse from the message body following the 2-octet L3 header. Never fails: a message too
    /// short to carry an AUTN is GSM flavoured.
    pub fn from_bytes(data: &[u8]) -> Self {
        let umts = data.get(AUTN_IEI_OFFSET) == Some(&IEI_AUTN) && data.get(AUTN_IEI_OFFSET + 1) == Some(&AUTN_LEN);
        let flavour = if umts {
            AuthFlavour::Umts
        } else {
            AuthFlavour::Gsm
        };
        AuthenticationRequest { flavour }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flavour() {
        let mut data = vec![0x00; 17];
        assert_eq!(AuthenticationRequest::from_bytes(&data).flavour, AuthFlavour::Gsm);

        data.extend_from_slice(&[0x20, 0x10]);
        data.extend_from_slice(&[0xaa; 16]);
        assert_eq!(AuthenticationRequest::from_bytes(&data).flavour, AuthFlavour::Umts);

        // Marker IEI present but length octet cut off
        assert_eq!(AuthenticationRequest::from_bytes(&data[..18]).flavour, AuthFlavour::Gsm);
    }
}
