use sigtrace_core::{ChannelType, Direction, FILL_OCTET};
use sigtrace_pdus::lapdm::enums::frame_type::FrameType;
use sigtrace_pdus::lapdm::enums::sapi::Sapi;
use sigtrace_pdus::lapdm::pdus::lapdm_header::LapdmHeader;

/// Largest L3 message a reassembly buffer will hold
pub const REASSEMBLY_CAPACITY: usize = 256;

/// Marker for "no out-of-sequence frame seen yet"; never a valid N(S)
const NO_OOS: u8 = 100;

/// Number of tolerated out-of-sequence frames before a final fragment resets the buffer
pub const OOS_RESYNC_THRESHOLD: u32 = 3;

/// Outcome of feeding one sane LAPDm frame into a reassembly buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameDisposition {
    /// I frame whose N(S) does not continue the message in progress. Nothing was appended.
    OutOfSequence {
        recv: u8,
        want: u8,
        /// Consecutive out-of-sequence frames, including this one
        run: u32,
        /// The run was long enough and this was a final fragment, so the buffer was
        /// restarted at `recv`
        resync: bool,
    },
    /// No payload: S frame, or I/U frame with zero length
    Null,
    /// Payload appended, more fragments follow
    Fragment { ns: u8 },
    /// Final fragment appended; the complete L3 message
    Complete(Vec<u8>),
    /// Appending would exceed REASSEMBLY_CAPACITY. The buffer was cleared.
    Overflow,
}

/// Reassembly state for one (channel, direction, SAPI) tuple
#[derive(Debug, Clone)]
pub struct ReassemblyBuffer {
    data: [u8; REASSEMBLY_CAPACITY],
    len: usize,
    /// Sequence number of the last accepted I frame
    ns: u8,
    nr: u8,
    oos_run: u32,
    last_oos_ns: u8,
}

impl Default for ReassemblyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReassemblyBuffer {
    pub fn new() -> Self {
        Self {
            data: [FILL_OCTET; REASSEMBLY_CAPACITY],
            len: 0,
            ns: 0,
            nr: 0,
            oos_run: 0,
            last_oos_ns: NO_OOS,
        }
    }

    /// Drop the message in progress and restart sequencing at 0
    pub fn reset(&mut self) {
        self.len = 0;
        self.ns = 0;
        self.oos_run = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First octet of the most recent message, kept after delivery
    pub fn first_octet(&self) -> u8 {
        self.data[0]
    }

    pub fn last_nr(&self) -> u8 {
        self.nr
    }

    /// Feed one frame that already passed header checks. `payload` is the
    /// information field, trimmed to the header's length.
    pub fn receive(&mut self, header: &LapdmHeader, payload: &[u8]) -> FrameDisposition {
        match header.frame_type {
            FrameType::I => {
                if self.len > 0 && (header.ns != (self.ns + 1) % 8 || self.oos_run >= OOS_RESYNC_THRESHOLD) {
                    return self.out_of_sequence(header);
                }
                self.oos_run = 0;
                self.last_oos_ns = NO_OOS;
                self.nr = header.nr;
                self.ns = header.ns;
            }
            FrameType::S => return FrameDisposition::Null,
            FrameType::U => {
                if header.is_sabm() {
                    tracing::trace!("SABM, restarting sequence");
                    self.reset();
                }
            }
        }

        if payload.is_empty() {
            return FrameDisposition::Null;
        }

        if self.len + payload.len() > REASSEMBLY_CAPACITY {
            tracing::warn!("reassembly overflow: {} + {} octets", self.len, payload.len());
            self.len = 0;
            self.oos_run = 0;
            return FrameDisposition::Overflow;
        }
        if self.len == 0 {
            self.data.fill(FILL_OCTET);
        }
        self.data[self.len..self.len + payload.len()].copy_from_slice(payload);
        self.len += payload.len();

        if header.more {
            let ns = if header.frame_type == FrameType::I {
                header.ns
            } else {
                0
            };
            return FrameDisposition::Fragment { ns };
        }

        let msg = self.data[..self.len].to_vec();
        self.len = 0;
        FrameDisposition::Complete(msg)
    }

    fn out_of_sequence(&mut self, header: &LapdmHeader) -> FrameDisposition {
        // Only frames at or shortly behind the expected position count towards a resync
        if self.last_oos_ns != header.ns && (self.ns as i32 - header.ns as i32) % 8 < 2 {
            self.oos_run += 1;
        }
        self.last_oos_ns = header.ns;

        let want = (self.ns + 1) % 8;
        let run = self.oos_run;
        let resync = !header.more && self.oos_run >= OOS_RESYNC_THRESHOLD;
        if resync {
            self.oos_run = 0;
            self.len = 0;
            self.ns = header.ns;
        }
        FrameDisposition::OutOfSequence { recv: header.ns, want, run, resync }
    }
}

/// One reassembly buffer per (channel, direction, SAPI). BCCH frames are never reassembled.
#[derive(Debug, Clone, Default)]
pub struct ChannelBuffers {
    sacch: [[ReassemblyBuffer; 2]; 2],
    sdcch: [[ReassemblyBuffer; 2]; 2],
    facch: [[ReassemblyBuffer; 2]; 2],
}

impl ChannelBuffers {
    pub fn get(&self, channel: ChannelType, dir: Direction, sapi: Sapi) -> Option<&ReassemblyBuffer> {
        let bufs = match channel {
            ChannelType::Sacch => &self.sacch,
            ChannelType::Sdcch => &self.sdcch,
            ChannelType::Facch => &self.facch,
            ChannelType::Bcch => return None,
        };
        Some(&bufs[dir.index()][sapi.index()])
    }

    pub fn get_mut(&mut self, channel: ChannelType, dir: Direction, sapi: Sapi) -> Option<&mut ReassemblyBuffer> {
        let bufs = match channel {
            ChannelType::Sacch => &mut self.sacch,
            ChannelType::Sdcch => &mut self.sdcch,
            ChannelType::Facch => &mut self.facch,
            ChannelType::Bcch => return None,
        };
        Some(&mut bufs[dir.index()][sapi.index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn i_frame(ns: u8, more: bool, payload: &[u8]) -> LapdmHeader {
        let octets = [0x01, ns << 1, ((payload.len() as u8) << 2) | ((more as u8) << 1) | 0x01];
        LapdmHeader::from_bytes(&octets).unwrap()
    }

    #[test]
    fn test_fragments_joined() {
        let mut buf = ReassemblyBuffer::new();
        assert_eq!(buf.receive(&i_frame(0, true, &[0x05, 0x08]), &[0x05, 0x08]), FrameDisposition::Fragment { ns: 0 });
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.receive(&i_frame(1, false, &[0x11]), &[0x11]), FrameDisposition::Complete(vec![0x05, 0x08, 0x11]));
        assert!(buf.is_empty());
        assert_eq!(buf.first_octet(), 0x05);
    }

    #[test]
    fn test_sequence_wraps_modulo_8() {
        let mut buf = ReassemblyBuffer::new();
        for i in 0..12u8 {
            let ns = i % 8;
            assert_eq!(buf.receive(&i_frame(ns, true, &[i]), &[i]), FrameDisposition::Fragment { ns });
        }
        assert_eq!(buf.receive(&i_frame(4, false, &[12]), &[12]), FrameDisposition::Complete((0..13).collect()));
    }

    #[test]
    fn test_single_gap_is_tolerated() {
        let mut buf = ReassemblyBuffer::new();
        buf.receive(&i_frame(0, true, &[1]), &[1]);
        assert!(matches!(buf.receive(&i_frame(2, true, &[2]), &[2]), FrameDisposition::OutOfSequence { run: 1, .. }));
        assert!(matches!(buf.receive(&i_frame(3, false, &[3]), &[3]), FrameDisposition::OutOfSequence { run: 2, resync: false, .. }));
        // The expected frame still continues the message
        assert_eq!(buf.receive(&i_frame(1, false, &[4]), &[4]), FrameDisposition::Complete(vec![1, 4]));
    }

    #[test]
    fn test_out_of_sequence_then_resync() {
        let mut buf = ReassemblyBuffer::new();
        buf.receive(&i_frame(0, true, &[1]), &[1]);
        for (i, ns) in [5u8, 6, 7].into_iter().enumerate() {
            match buf.receive(&i_frame(ns, true, &[2]), &[2]) {
                FrameDisposition::OutOfSequence { want, run, resync, .. } => {
                    assert_eq!(want, 1);
                    assert_eq!(run, i as u32 + 1);
                    assert!(!resync);
                }
                other => panic!("unexpected {:?}", other),
            }
        }
        assert_eq!(
            buf.receive(&i_frame(3, false, &[3]), &[3]),
            FrameDisposition::OutOfSequence { recv: 3, want: 1, run: 4, resync: true }
        );
        assert!(buf.is_empty());

        // Sequencing continues from the resync point
        assert_eq!(buf.receive(&i_frame(4, false, &[9]), &[9]), FrameDisposition::Complete(vec![9]));
    }

    #[test]
    fn test_sabm_restarts() {
        let mut buf = ReassemblyBuffer::new();
        buf.receive(&i_frame(0, true, &[1, 2]), &[1, 2]);
        let sabm = LapdmHeader::from_bytes(&[0x01, 0x3f, 0x01]).unwrap();
        assert_eq!(buf.receive(&sabm, &[]), FrameDisposition::Null);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_overflow_clears() {
        let mut buf = ReassemblyBuffer::new();
        let chunk = [0u8; 60];
        let mut ns = 0;
        let mut last = FrameDisposition::Null;
        for _ in 0..5 {
            last = buf.receive(&i_frame(ns, true, &chunk), &chunk);
            ns = (ns + 1) % 8;
        }
        assert_eq!(last, FrameDisposition::Overflow);
        assert!(buf.is_empty());
    }
}
