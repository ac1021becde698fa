/// Decode a TS 24.008 clause 10.5.4.7 / 10.5.4.9 calling or called party BCD number value
/// (length octet stripped) into a dialable string. International numbers get a '+' prefix.
pub fn decode_bcd_number(value: &[u8]) -> String {
    let Some(&toa) = value.first() else {
        return String::new();
    };

    // Octet 3a (presentation / screening) follows when the extension bit is clear
    let digits_start = if toa & 0x80 == 0 { 2 } else { 1 };
    let international = (toa >> 4) & 0x07 == 1;

    let mut out = String::new();
    if international {
        out.push('+');
    }
    for &octet in value.iter().skip(digits_start) {
        for nibble in [octet & 0x0f, octet >> 4] {
            match nibble {
                0..=9 => out.push((b'0' + nibble) as char),
                0x0a => out.push('*'),
                0x0b => out.push('#'),
                0x0c => out.push('a'),
                0x0d => out.push('b'),
                0x0e => out.push('c'),
                _ => return out,
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_international_odd() {
        // Type international, ISDN plan, +4917012345
        assert_eq!(decode_bcd_number(&[0x91, 0x94, 0x71, 0x10, 0x32, 0xf4]), "+4917012345");
    }

    #[test]
    fn test_with_octet_3a() {
        // Unknown type, presentation allowed octet present, 112
        assert_eq!(decode_bcd_number(&[0x01, 0x80, 0x11, 0xf2]), "112");
        assert_eq!(decode_bcd_number(&[]), "");
    }
}
