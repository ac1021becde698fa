use crate::pdu_parse_error::PduParseErr;

/// Bounds-checked cursor over a borrowed octet slice.
///
/// Every read validates against the end of the window before touching memory. Failed
/// reads leave the position unchanged and return PduParseErr::BufferEnded carrying the
/// caller-supplied field tag, so parsers can report which field was truncated.
#[derive(Clone)]
pub struct ByteReader<'a> {
    buffer: &'a [u8],
    pos: usize,         // next octet offset for reads
}

impl<'a> ByteReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        ByteReader { buffer, pos: 0 }
    }

    /// Peek one octet at `offset` from the current pos, without advancing.
    pub fn peek_u8(&self, offset: usize) -> Option<u8> {
        self.buffer.get(self.pos.checked_add(offset)?).copied()
    }

    /// Peek one octet at an absolute offset from the window start.
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.buffer.get(offset).copied()
    }

    /// Read one octet, advancing on success.
    pub fn read_u8(&mut self, field: &'static str) -> Result<u8, PduParseErr> {
        let v = self.peek_u8(0).ok_or(PduParseErr::BufferEnded { field: Some(field) })?;
        self.pos += 1;
        Ok(v)
    }

    /// Read a big-endian 16-bit value, advancing on success.
    pub fn read_u16_be(&mut self, field: &'static str) -> Result<u16, PduParseErr> {
        let bytes = self.read_bytes(2, field)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Read `len` octets as a subslice, advancing on success.
    pub fn read_bytes(&mut self, len: usize, field: &'static str) -> Result<&'a [u8], PduParseErr> {
        let end = self.pos.checked_add(len).ok_or(PduParseErr::BufferEnded { field: Some(field) })?;
        if end > self.buffer.len() {
            return Err(PduParseErr::BufferEnded { field: Some(field) });
        }
        let ret = &self.buffer[self.pos..end];
        self.pos = end;
        Ok(ret)
    }

    /// Read a fixed-size array, advancing on success.
    pub fn read_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], PduParseErr> {
        let bytes = self.read_bytes(N, field)?;
        let mut ret = [0u8; N];
        ret.copy_from_slice(bytes);
        Ok(ret)
    }

    /// Read a length-prefixed (LV) value: one length octet followed by that many octets.
    /// The position is only advanced if both length and value are present.
    pub fn read_lv(&mut self, field: &'static str) -> Result<&'a [u8], PduParseErr> {
        let saved = self.pos;
        let len = self.read_u8(field)? as usize;
        match self.read_bytes(len, field) {
            Ok(v) => Ok(v),
            Err(e) => {
                self.pos = saved;
                Err(e)
            }
        }
    }

    /// Skip `len` octets.
    pub fn skip(&mut self, len: usize, field: &'static str) -> Result<(), PduParseErr> {
        self.read_bytes(len, field).map(|_| ())
    }

    /// Remaining octets from the current position to the end of the window.
    pub fn remaining(&self) -> &'a [u8] {
        &self.buffer[self.pos..]
    }

    pub fn get_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn get_len_remaining(&self) -> usize {
        self.buffer.len() - self.pos
    }

    pub fn get_pos(&self) -> usize {
        self.pos
    }

    /// Seek to an absolute offset. Seeking past the end clamps to the end.
    pub fn seek(&mut self, offset: usize) {
        self.pos = usize::min(offset, self.buffer.len());
    }

    /// Dump the whole window as hex, marking the current position with '^'
    pub fn dump_hex(&self) -> String {
        format!("{}^{}", hex::encode(&self.buffer[..self.pos]), hex::encode(&self.buffer[self.pos..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_sequence() {
        let data = [0x05, 0x08, 0x12, 0x34];
        let mut r = ByteReader::new(&data);
        assert_eq!(r.read_u8("a").unwrap(), 0x05);
        assert_eq!(r.read_u8("b").unwrap(), 0x08);
        assert_eq!(r.read_u16_be("c").unwrap(), 0x1234);
        assert_eq!(r.get_len_remaining(), 0);
        assert_eq!(r.read_u8("d"), Err(PduParseErr::BufferEnded { field: Some("d") }));
    }

    #[test]
    fn test_read_lv_truncated_keeps_pos() {
        // Declares 5 value octets but only 2 follow
        let data = [0x05, 0xaa, 0xbb];
        let mut r = ByteReader::new(&data);
        assert!(r.read_lv("MI_LEN").is_err());
        assert_eq!(r.get_pos(), 0);

        let data = [0x02, 0xaa, 0xbb, 0xcc];
        let mut r = ByteReader::new(&data);
        assert_eq!(r.read_lv("MI_LEN").unwrap(), &[0xaa, 0xbb]);
        assert_eq!(r.remaining(), &[0xcc]);
    }

    #[test]
    fn test_read_bytes_bounds() {
        let data = [1u8, 2, 3];
        let mut r = ByteReader::new(&data);
        assert!(r.read_bytes(4, "x").is_err());
        assert_eq!(r.read_array::<3>("x").unwrap(), [1, 2, 3]);
        r.seek(10);
        assert_eq!(r.get_pos(), 3);
        assert_eq!(r.dump_hex(), "010203^");
    }
}
