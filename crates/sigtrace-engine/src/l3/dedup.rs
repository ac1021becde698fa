use sigtrace_core::{RadioMessage, RadioTechnology};

use crate::session::{LOOKBACK_LEN, Session};

/// Detect a message that was already processed on another radio technology.
///
/// Dual-mode captures see the same NAS message twice: once inside UMTS RRC and once on the
/// GSM side. If the bytes match the previous message (up to the shorter length) and the
/// technology crosses over in the expected direction, the message is a duplicate:
/// - uplink, previous GSM, current not GSM: the session is really on the current technology
/// - downlink, previous not GSM, current GSM: already handled on the other technology
///
/// The current message always becomes the new lookback.
pub fn is_duplicate(session: &mut Session, msg: &RadioMessage, l3: &[u8]) -> bool {
    let l3 = &l3[..l3.len().min(LOOKBACK_LEN)];
    let prev = session.lookback.data();
    let min_len = l3.len().min(prev.len());

    let mut duplicate = false;
    if min_len > 0 && l3[..min_len] == prev[..min_len] {
        let prev_gsm = session.lookback.rat == RadioTechnology::Gsm;
        let cur_gsm = msg.rat == RadioTechnology::Gsm;
        if msg.direction().is_ul() {
            if prev_gsm && !cur_gsm {
                tracing::debug!("duplicate uplink, session is on {}", msg.rat);
                session.rat = msg.rat;
                duplicate = true;
            }
        } else if !prev_gsm && cur_gsm {
            tracing::debug!("duplicate downlink, already seen on {}", session.lookback.rat);
            duplicate = true;
        }
    }

    session.lookback.store(l3, msg.rat);
    duplicate
}

#[cfg(test)]
mod tests {
    use sigtrace_core::{ChannelType, Direction, Domain};

    use super::*;

    fn msg(rat: RadioTechnology, dir: Direction) -> RadioMessage {
        RadioMessage::new(rat, Domain::CircuitSwitched, ChannelType::Sdcch, 0, dir, Vec::new())
    }

    #[test]
    fn test_uplink_crossover() {
        let mut s = Session::new(0, Domain::CircuitSwitched);
        let l3 = [0x05, 0x24, 0x11];
        assert!(!is_duplicate(&mut s, &msg(RadioTechnology::Gsm, Direction::Ul), &l3));
        assert!(is_duplicate(&mut s, &msg(RadioTechnology::Umts, Direction::Ul), &l3));
        assert_eq!(s.rat, RadioTechnology::Umts);
    }

    #[test]
    fn test_downlink_crossover() {
        let mut s = Session::new(0, Domain::CircuitSwitched);
        let l3 = [0x06, 0x35, 0x11];
        assert!(!is_duplicate(&mut s, &msg(RadioTechnology::Umts, Direction::Dl), &l3));
        assert!(is_duplicate(&mut s, &msg(RadioTechnology::Gsm, Direction::Dl), &l3));
        assert_eq!(s.rat, RadioTechnology::Gsm);
    }

    #[test]
    fn test_same_technology_is_not_duplicate() {
        let mut s = Session::new(0, Domain::CircuitSwitched);
        let l3 = [0x05, 0x02, 0x62, 0xf2, 0x10];
        assert!(!is_duplicate(&mut s, &msg(RadioTechnology::Gsm, Direction::Dl), &l3));
        assert!(!is_duplicate(&mut s, &msg(RadioTechnology::Gsm, Direction::Dl), &l3));
        // Prefix match counts
        assert!(!is_duplicate(&mut s, &msg(RadioTechnology::Umts, Direction::Dl), &l3[..3]));
        assert!(is_duplicate(&mut s, &msg(RadioTechnology::Gsm, Direction::Dl), &l3));
    }
}
