/// Walks the non-imperative part of an L3 message: type 1/2 single-octet IEs (IEI bit 8 set),
/// fixed-length type 3 IEs listed by the caller, and TLV IEs. Iteration ends at the first IE
/// that runs past the end of the message.
pub struct IeScanner<'a> {
    data: &'a [u8],
    pos: usize,
    tv_fixed: &'a [(u8, usize)],
}

/// Fixed-length TV IEs in call control messages: Signal (TS 24.008 clause 10.5.4.23)
pub const CC_TV_FIXED: &[(u8, usize)] = &[(0x34, 1)];
/// Fixed-length TV IEs in RR cipher mode complete: none
pub const RR_TV_FIXED: &[(u8, usize)] = &[];

impl<'a> IeScanner<'a> {
    pub fn new(data: &'a [u8], tv_fixed: &'a [(u8, usize)]) -> Self {
        IeScanner { data, pos: 0, tv_fixed }
    }
}

impl<'a> Iterator for IeScanner<'a> {
    /// IEI and value. Single-octet IEs yield an empty value.
    type Item = (u8, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        let iei = *self.data.get(self.pos)?;

        if iei & 0x80 != 0 {
            self.pos += 1;
            return Some((iei, &self.data[..0]));
        }

        let (start, len) = match self.tv_fixed.iter().find(|(id, _)| *id == iei) {
            Some((_, len)) => (self.pos + 1, *len),
            None => (self.pos + 2, *self.data.get(self.pos + 1)? as usize),
        };
        let value = self.data.get(start..start + len)?;
        self.pos = start + len;
        Some((iei, value))
    }
}

/// Find the value of the first IE with the given IEI
pub fn find_ie<'a>(data: &'a [u8], iei: u8, tv_fixed: &'a [(u8, usize)]) -> Option<&'a [u8]> {
    IeScanner::new(data, tv_fixed).find(|(id, _)| *id == iei).map(|(_, v)| v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_mixed() {
        // Repeat indicator (type 1), bearer capability TLV, signal TV, called party TLV
        let data = [0xd1, 0x04, 0x01, 0xa0, 0x34, 0x01, 0x5e, 0x03, 0x81, 0x21, 0xf3];
        let ies: Vec<_> = IeScanner::new(&data, CC_TV_FIXED).collect();
        assert_eq!(ies.len(), 4);
        assert_eq!(ies[1], (0x04, &[0xa0][..]));
        assert_eq!(ies[2], (0x34, &[0x01][..]));
        assert_eq!(find_ie(&data, 0x5e, CC_TV_FIXED), Some(&[0x81, 0x21, 0xf3][..]));
        assert_eq!(find_ie(&data, 0x5c, CC_TV_FIXED), None);
    }

    #[test]
    fn test_truncated_tlv_stops() {
        let data = [0x17, 0x09, 0x33, 0x44];
        assert_eq!(find_ie(&data, 0x17, RR_TV_FIXED), None);
    }
}
