use sigtrace_core::Direction;

use crate::session::{PaddingCategory, Session};
use crate::stats::PaddingClassifier;

/// Largest padding run a valid frame can have
pub const MAX_PADDING_LEN: usize = 20;

/// Payload area of an SDCCH/FACCH frame after the LAPDm header
const DCCH_AREA: usize = 20;
/// Payload area of a SACCH frame after the L1 and LAPDm headers
const SACCH_AREA: usize = 18;

/// Classify a sample and record it in the category's history
pub fn check_padding(session: &mut Session, classifier: &dyn PaddingClassifier, category: PaddingCategory, sample: &[u8]) -> bool {
    let cipher_active = session.cipher != 0;
    let history = session.padding.get_mut(category);
    let is_random = classifier.is_random(sample, history, cipher_active);
    history.record(sample, is_random);
    is_random
}

/// Update the frame counters for one LAPDm frame.
///
/// `area` is the frame after the 3-octet LAPDm header, `data_len` the declared payload length.
/// Uplink frames only bump the uplink counter. Downlink frames land in the encrypted or
/// unencrypted buckets depending on whether ciphering is active.
pub fn update_counters(session: &mut Session, classifier: &dyn PaddingClassifier, area: &[u8], data_len: usize, dir: Direction) {
    if dir.is_ul() {
        session.fc.uplink += 1;
    }

    let padding = area.get(data_len..).unwrap_or(&[]);
    if padding.len() > MAX_PADDING_LEN {
        tracing::error!("s = {}: error in pad_len {}", session.id, padding.len());
        return;
    }

    if dir.is_ul() {
        return;
    }

    let category = match area.len() {
        DCCH_AREA if data_len == 0 => Some(PaddingCategory::Null),
        DCCH_AREA => Some(PaddingCategory::Sdcch),
        SACCH_AREA => Some(PaddingCategory::Sacch),
        _ => None,
    };

    // The first padding octet is frequently set even by networks that randomise the rest
    let is_random = match category {
        Some(category) if !padding.is_empty() => check_padding(session, classifier, category, &padding[1..]),
        _ => false,
    };

    let fc = &mut session.fc;
    if session.cipher != 0 {
        fc.enc += 1;
        if is_random {
            fc.enc_rand += 1;
        }
        if data_len == 0 {
            fc.enc_null += 1;
            if is_random {
                fc.enc_null_rand += 1;
            } else {
                fc.predict += 1;
            }
        }
        if area.len() == SACCH_AREA && data_len > 0 {
            fc.enc_si += 1;
            if is_random {
                fc.enc_si_rand += 1;
            } else {
                fc.predict += 1;
            }
        }
    } else {
        fc.unenc += 1;
        if is_random {
            fc.unenc_rand += 1;
        }
    }
    tracing::trace!("fc {:?}", session.fc);
}

#[cfg(test)]
mod tests {
    use sigtrace_core::{Domain, FILL_OCTET};

    use super::*;
    use crate::stats::FillPatternClassifier;

    fn null_area() -> Vec<u8> {
        vec![FILL_OCTET; DCCH_AREA]
    }

    #[test]
    fn test_uplink_only_counts_uplink() {
        let mut s = Session::new(0, Domain::CircuitSwitched);
        s.cipher = 1;
        update_counters(&mut s, &FillPatternClassifier, &null_area(), 0, Direction::Ul);
        assert_eq!(s.fc.uplink, 1);
        assert_eq!(s.fc.classified(), 0);
    }

    #[test]
    fn test_encrypted_null_frame_is_predictable() {
        let mut s = Session::new(0, Domain::CircuitSwitched);
        s.cipher = 1;
        update_counters(&mut s, &FillPatternClassifier, &null_area(), 0, Direction::Dl);
        assert_eq!(s.fc.enc, 1);
        assert_eq!(s.fc.enc_null, 1);
        assert_eq!(s.fc.predict, 1);
        assert_eq!(s.fc.enc_rand, 0);
    }

    #[test]
    fn test_sacch_with_random_padding() {
        let mut s = Session::new(0, Domain::CircuitSwitched);
        s.cipher = 3;
        let mut area = vec![0u8; SACCH_AREA];
        area[..4].copy_from_slice(&[0x06, 0x1e, 0x00, 0x01]);
        for (i, b) in area[4..].iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(37).wrapping_add(11);
        }
        update_counters(&mut s, &FillPatternClassifier, &area, 4, Direction::Dl);
        assert_eq!(s.fc.enc_si, 1);
        assert_eq!(s.fc.enc_si_rand, 1);
        assert_eq!(s.fc.predict, 0);
        assert_eq!(s.padding.get(PaddingCategory::Sacch).samples, 1);
    }

    #[test]
    fn test_oversized_padding_is_rejected() {
        let mut s = Session::new(0, Domain::CircuitSwitched);
        update_counters(&mut s, &FillPatternClassifier, &[FILL_OCTET; 30], 0, Direction::Dl);
        assert_eq!(s.fc, Default::default());
    }
}
