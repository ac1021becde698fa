use core::fmt;

use sigtrace_core::pdu_parse_error::PduParseErr;

use crate::common::enums::mi_type::MiType;

/// Largest mobile identity value accepted, in octets
pub const MI_MAX_LEN: usize = 10;

/// Number of BCD nibbles (from nibble 1) decoded for IMEI and IMEISV: TAC and serial number only
const IMEI_NIBBLES: usize = 15;

/// TS 24.008 clause 10.5.1.4 Mobile Identity, decoded from the value part of the IE
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MobileIdentity {
    None,
    Imsi(String),
    /// IMEI or IMEISV, first 14 digits
    Imei(String),
    Tmsi([u8; 4]),
}

impl MobileIdentity {
    /// Parse a mobile identity value (without its length octet).
    pub fn from_bytes(value: &[u8]) -> Result<Self, PduParseErr> {
        if value.len() > MI_MAX_LEN {
            return Err(PduParseErr::InvalidValue { field: "MI_LEN", value: value.len() as u64 });
        }
        let Some(&first) = value.first() else {
            return Err(PduParseErr::BufferEnded { field: Some("MI_LEN") });
        };

        let Ok(mi_type) = MiType::from_octet(first) else {
            return Err(PduParseErr::InvalidValue { field: "MI_TYPE", value: first as u64 });
        };

        match mi_type {
            MiType::None => Ok(MobileIdentity::None),
            MiType::Imsi => Ok(MobileIdentity::Imsi(bcd_digits(value, 1, value.len() * 2))),
            MiType::Imei | MiType::Imeisv => Ok(MobileIdentity::Imei(bcd_digits(value, 1, IMEI_NIBBLES))),
            MiType::Tmsi => {
                if value.len() < 5 {
                    return Err(PduParseErr::BufferEnded { field: Some("MI_LEN") });
                }
                Ok(MobileIdentity::Tmsi([value[1], value[2], value[3], value[4]]))
            }
        }
    }

    /// Parse a length-prefixed mobile identity starting at `offset` in `data`
    pub fn from_lv(data: &[u8], offset: usize) -> Result<Self, PduParseErr> {
        let Some(&len) = data.get(offset) else {
            return Err(PduParseErr::BufferEnded { field: Some("MI_LEN") });
        };
        let start = offset + 1;
        let Some(value) = data.get(start..start + len as usize) else {
            return Err(PduParseErr::BufferEnded { field: Some("MI_LEN") });
        };
        Self::from_bytes(value)
    }

    pub fn mi_type(&self) -> MiType {
        match self {
            MobileIdentity::None => MiType::None,
            MobileIdentity::Imsi(_) => MiType::Imsi,
            MobileIdentity::Imei(_) => MiType::Imei,
            MobileIdentity::Tmsi(_) => MiType::Tmsi,
        }
    }
}

impl fmt::Display for MobileIdentity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MobileIdentity::None => write!(f, "NONE"),
            MobileIdentity::Imsi(d) => write!(f, "IMSI {}", d),
            MobileIdentity::Imei(d) => write!(f, "IMEI {}", d),
            MobileIdentity::Tmsi(t) => write!(f, "TMSI {:02x}{:02x}{:02x}{:02x}", t[0], t[1], t[2], t[3]),
        }
    }
}

/// Decode packed BCD nibbles [start, end) into a digit string. Even nibbles are the low half of
/// an octet. Stops at the 0xF end marker or at the end of `data`.
pub fn bcd_digits(data: &[u8], start: usize, end: usize) -> String {
    let mut out = String::with_capacity(end.saturating_sub(start));
    for i in start..end {
        let Some(&octet) = data.get(i / 2) else {
            break;
        };
        let nibble = if i % 2 == 0 {
            octet & 0x0f
        } else {
            octet >> 4
        };
        if nibble == 0x0f {
            break;
        }
        out.push(char::from_digit(nibble as u32, 16).unwrap_or('?'));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imsi() {
        // 001010123456789, odd number of digits
        let mi = MobileIdentity::from_bytes(&[0x09, 0x10, 0x10, 0x10, 0x32, 0x54, 0x76, 0x98]).unwrap();
        assert_eq!(mi, MobileIdentity::Imsi("001010123456789".to_string()));
        assert_eq!(mi.to_string(), "IMSI 001010123456789");
    }

    #[test]
    fn test_imei_drops_check_digit() {
        let mi = MobileIdentity::from_bytes(&[0x3a, 0x53, 0x39, 0x01, 0x23, 0x45, 0x67, 0x89, 0xf0]).unwrap();
        assert_eq!(mi, MobileIdentity::Imei("33593103254769".to_string()));
    }

    #[test]
    fn test_tmsi_and_errors() {
        let mi = MobileIdentity::from_lv(&[0x05, 0xf4, 0xde, 0xad, 0xbe, 0xef], 0).unwrap();
        assert_eq!(mi, MobileIdentity::Tmsi([0xde, 0xad, 0xbe, 0xef]));
        assert_eq!(mi.to_string(), "TMSI deadbeef");

        // TMSI too short
        let err = MobileIdentity::from_bytes(&[0xf4, 0xde]).unwrap_err();
        assert_eq!(err.field_tag(), "MI_LEN");

        // Oversized
        let err = MobileIdentity::from_bytes(&[0x09; 11]).unwrap_err();
        assert_eq!(err.field_tag(), "MI_LEN");

        // Reserved type 5
        let err = MobileIdentity::from_bytes(&[0x05, 0x00]).unwrap_err();
        assert_eq!(err.field_tag(), "MI_TYPE");

        // LV running past the end
        let err = MobileIdentity::from_lv(&[0x08, 0x09, 0x10], 0).unwrap_err();
        assert_eq!(err.field_tag(), "MI_LEN");
    }
}
