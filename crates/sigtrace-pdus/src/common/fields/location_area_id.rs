use core::fmt;

use sigtrace_core::ByteReader;
use sigtrace_core::pdu_parse_error::PduParseErr;

/// Encoded size of a location area identification value
pub const LAI_LEN: usize = 5;

/// TS 24.008 clause 10.5.1.3 Location Area Identification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocationAreaId {
    /// MCC / MNC digits, packed BCD as transmitted
    pub digits: [u8; 3],
    pub lac: u16,
}

impl LocationAreaId {
    pub fn from_reader(buf: &mut ByteReader, tag: &'static str) -> Result<Self, PduParseErr> {
        let digits = buf.read_array::<3>(tag)?;
        let lac = buf.read_u16_be(tag)?;
        Ok(LocationAreaId { digits, lac })
    }

    /// Parse the 5-octet LAI starting at `offset` in `data`
    pub fn from_bytes_at(data: &[u8], offset: usize, tag: &'static str) -> Result<Self, PduParseErr> {
        let mut buf = ByteReader::new(data);
        buf.seek(offset);
        if buf.get_pos() != offset {
            return Err(PduParseErr::BufferEnded { field: Some(tag) });
        }
        Self::from_reader(&mut buf, tag)
    }

    pub fn mcc(&self) -> u16 {
        mcc_from_digits(&self.digits)
    }

    pub fn mnc(&self) -> u16 {
        mnc_from_digits(&self.digits)
    }
}

impl fmt::Display for LocationAreaId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}-{:04x}", self.mcc(), self.mnc(), self.lac)
    }
}

/// Decode the mobile country code from packed LAI / RAI digits
pub fn mcc_from_digits(digits: &[u8; 3]) -> u16 {
    (digits[0] & 0x0f) as u16 * 100 + (digits[0] >> 4) as u16 * 10 + (digits[1] & 0x0f) as u16
}

/// Decode the mobile network code from packed LAI / RAI digits. A 0xF third digit marks a 2-digit MNC.
pub fn mnc_from_digits(digits: &[u8; 3]) -> u16 {
    let d3 = digits[1] >> 4;
    if d3 == 0x0f {
        (digits[2] & 0x0f) as u16 * 10 + (digits[2] >> 4) as u16
    } else {
        (digits[2] & 0x0f) as u16 * 100 + (digits[2] >> 4) as u16 * 10 + d3 as u16
    }
}
