use crate::common::fields::ie_scan::{CC_TV_FIXED, IeScanner};

const IEI_CALLING_PARTY_BCD: u8 = 0x5c;
const IEI_CALLED_PARTY_BCD: u8 = 0x5e;

/// Representation of the SETUP message (TS 24.008 clause 9.3.23), either direction.
/// Only the party numbers are retained, as raw BCD number values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Setup {
    /// Mobile terminated setup: the caller
    pub calling_party: Option<Vec<u8>>,
    /// Mobile originated setup: the dialled number
    pub called_party: Option<Vec<u8>>,
}

impl Setup {
    /// Parse from the message body following the 2-octet L3 header. Never fails: IEs after a
    /// malformed one are ignored.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut ret = Setup::default();
        for (iei, value) in IeScanner::new(data, CC_TV_FIXED) {
            match iei {
                IEI_CALLING_PARTY_BCD if ret.calling_party.is_none() => ret.calling_party = Some(value.to_vec()),
                IEI_CALLED_PARTY_BCD if ret.called_party.is_none() => ret.called_party = Some(value.to_vec()),
                _ => {}
            }
        }
        ret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mo_setup() {
        // Bearer capability, called party +4917012345
        let data = hex::decode("0401a0 5e06 91947110 32f4".replace(' ', "")).unwrap();
        let pdu = Setup::from_bytes(&data);
        assert_eq!(pdu.calling_party, None);
        assert_eq!(pdu.called_party.as_deref(), Some(&[0x91, 0x94, 0x71, 0x10, 0x32, 0xf4][..]));
    }
}
