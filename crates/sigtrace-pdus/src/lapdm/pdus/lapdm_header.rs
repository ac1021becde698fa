use core::fmt;

use sigtrace_core::pdu_parse_error::PduParseErr;

use crate::lapdm::enums::frame_type::FrameType;

/// Size of the address, control and length octets
pub const LAPDM_HEADER_LEN: usize = 3;

/// Control octet of a SABM command, after masking the P bit and the unused bits with 0xEC
const SABM_CONTROL: u8 = 0x2c;

/// Representation of the LAPDm frame header (TS 44.006 clause 3).
///
/// Octet 0 (address): LPD(2) SAPI(3) C/R(1) EA(1), MSB first after one spare bit.
/// Octet 1 (control): I: N(R)(3) P(1) N(S)(3) 0, S: N(R)(3) P/F(1) S(2) 01, U: ...11.
/// Octet 2 (length): L(6) M(1) EL(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LapdmHeader {
    /// 2 bits, link protocol discriminator, 0 for GSM
    pub lpd: u8,
    /// 3 bits, service access point identifier
    pub sapi: u8,
    /// 1 bit, command/response
    pub cr: bool,
    /// 1 bit, address field extension, must be set
    pub ea: bool,
    /// Raw control octet
    pub control: u8,
    pub frame_type: FrameType,
    /// 3 bits, receive sequence number. Only meaningful for I and S frames
    pub nr: u8,
    /// 3 bits, send sequence number. Only meaningful for I frames
    pub ns: u8,
    /// 6 bits, number of payload octets following the header
    pub length: u8,
    /// 1 bit, more fragments follow
    pub more: bool,
    /// 1 bit, length field extension, must be set
    pub el: bool,
}

impl LapdmHeader {
    /// Parse the three header octets at the start of `frame`. Only the octet count is checked here;
    /// see `check_sanity` for the structural checks against the frame length.
    pub fn from_bytes(frame: &[u8]) -> Result<Self, PduParseErr> {
        if frame.len() < LAPDM_HEADER_LEN {
            return Err(PduParseErr::BufferEnded { field: Some("LAPDm") });
        }
        let (addr, control, len) = (frame[0], frame[1], frame[2]);

        Ok(LapdmHeader {
            lpd: (addr >> 5) & 0x03,
            sapi: (addr >> 2) & 0x07,
            cr: (addr >> 1) & 0x01 == 1,
            ea: addr & 0x01 == 1,
            control,
            frame_type: FrameType::from_control(control),
            nr: control >> 5,
            ns: (control >> 1) & 0x07,
            length: (len >> 2) & 0x3f,
            more: (len >> 1) & 0x01 == 1,
            el: len & 0x01 == 1,
        })
    }

    /// EA and EL must both be set and the declared payload must fit inside a frame of `frame_len` octets
    pub fn check_sanity(&self, frame_len: usize) -> Result<(), PduParseErr> {
        if !self.ea || !self.el {
            return Err(PduParseErr::Inconsistency { field: "LAPDm", reason: "extension bit not set" });
        }
        if self.length as usize + LAPDM_HEADER_LEN > frame_len {
            return Err(PduParseErr::InconsistentLength {
                expected: self.length as usize + LAPDM_HEADER_LEN,
                found: frame_len,
            });
        }
        Ok(())
    }

    /// True for a Set Asynchronous Balanced Mode command, which (re)establishes the link
    pub fn is_sabm(&self) -> bool {
        self.frame_type == FrameType::U && self.control & 0xec == SABM_CONTROL
    }

    /// Serialize into the three header octets
    pub fn to_bytes(&self) -> [u8; LAPDM_HEADER_LEN] {
        [
            (self.lpd & 0x03) << 5 | (self.sapi & 0x07) << 2 | (self.cr as u8) << 1 | self.ea as u8,
            self.control,
            (self.length & 0x3f) << 2 | (self.more as u8) << 1 | self.el as u8,
        ]
    }
}

impl fmt::Display for LapdmHeader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "LapdmHeader {{ sapi: {} type: {} nr: {} ns: {} len: {} more: {} }}",
            self.sapi, self.frame_type, self.nr, self.ns, self.length, self.more
        )
    }
}
