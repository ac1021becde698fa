//! Construction of radio message envelopes from bare L2 frames or L3 messages, for messages
//! produced by higher-layer decoders or replayed from traces.

use sigtrace_core::{ChannelType, Direction, Domain, FrameNumber, RadioMessage, RadioTechnology};
use sigtrace_pdus::lapdm::pdus::envelope::{LAPDM_MAX_PAYLOAD, encapsulate};

/// Envelope around an already framed L2 block
pub fn new_l2(data: &[u8], rat: RadioTechnology, domain: Domain, fnr: FrameNumber, dir: Direction, channel: ChannelType) -> RadioMessage {
    RadioMessage::new(rat, domain, channel, fnr, dir, data.to_vec())
}

/// Envelope around a bare L3 message.
///
/// Dedicated and associated channels get a synthetic LAPDm frame. Broadcast messages carry
/// only the L2 pseudo-length octet, which is what the broadcast route strips. Returns None for
/// an empty message.
pub fn new_l3(l3: &[u8], rat: RadioTechnology, domain: Domain, fnr: FrameNumber, dir: Direction, channel: ChannelType) -> Option<RadioMessage> {
    if l3.is_empty() {
        return None;
    }
    let frame = match channel {
        ChannelType::Bcch => {
            let l3 = &l3[..l3.len().min(LAPDM_MAX_PAYLOAD)];
            let mut frame = Vec::with_capacity(l3.len() + 1);
            frame.push((l3.len() as u8) << 2 | 0x01);
            frame.extend_from_slice(l3);
            frame
        }
        _ => encapsulate(l3, dir, channel == ChannelType::Sacch),
    };
    Some(new_l2(&frame, rat, domain, fnr, dir, channel))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_l3_sdcch() {
        let msg = new_l3(&[0x05, 0x24, 0x11], RadioTechnology::Gsm, Domain::CircuitSwitched, 1234, Direction::Ul, ChannelType::Sdcch).unwrap();
        assert_eq!(msg.payload.len(), 23);
        assert_eq!(&msg.payload[..6], &[0x01, 0x03, 0x0d, 0x05, 0x24, 0x11]);
        assert_eq!(msg.chan_nr, 0x41);
        assert_eq!(msg.direction(), Direction::Ul);
        assert_eq!(msg.frame_number, 1234);
        assert!(msg.decoded);
    }

    #[test]
    fn test_new_l3_sacch_and_bcch() {
        let msg = new_l3(&[0x06, 0x1e], RadioTechnology::Gsm, Domain::CircuitSwitched, 0, Direction::Dl, ChannelType::Sacch).unwrap();
        assert_eq!(msg.payload.len(), 23);
        assert_eq!(&msg.payload[..5], &[0x00, 0x00, 0x03, 0x03, 0x09]);

        let msg = new_l3(&[0x06, 0x1b, 0x00], RadioTechnology::Gsm, Domain::CircuitSwitched, 0, Direction::Dl, ChannelType::Bcch).unwrap();
        assert_eq!(msg.payload, vec![0x0d, 0x06, 0x1b, 0x00]);
        assert_eq!(msg.chan_nr, 0x80);

        assert!(new_l3(&[], RadioTechnology::Gsm, Domain::CircuitSwitched, 0, Direction::Dl, ChannelType::Facch).is_none());
    }
}
