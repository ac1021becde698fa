use sigtrace_config::PaddingClassifierKind;
use sigtrace_core::FILL_OCTET;

use crate::session::PaddingHistory;

/// Decides whether the padding of a frame looks random.
///
/// Random padding defeats known-plaintext attacks on encrypted frames, so this drives the
/// `*_rand` buckets and the predictable-frame counter.
pub trait PaddingClassifier {
    /// `padding` excludes the first padding octet. `history` holds earlier samples of the same
    /// category; the engine records the sample after classification.
    fn is_random(&self, padding: &[u8], history: &PaddingHistory, cipher_active: bool) -> bool;
}

/// Padding is predictable if it is the standard fill pattern, a single repeated octet,
/// or identical to the previous sample of its category.
pub struct FillPatternClassifier;

impl PaddingClassifier for FillPatternClassifier {
    fn is_random(&self, padding: &[u8], history: &PaddingHistory, _cipher_active: bool) -> bool {
        let Some(&first) = padding.first() else {
            return false;
        };
        if padding.iter().all(|&b| b == FILL_OCTET) {
            return false;
        }
        if padding.iter().all(|&b| b == first) {
            return false;
        }
        if history.previous() == padding {
            return false;
        }
        true
    }
}

/// Never reports random padding
pub struct DisabledClassifier;

impl PaddingClassifier for DisabledClassifier {
    fn is_random(&self, _padding: &[u8], _history: &PaddingHistory, _cipher_active: bool) -> bool {
        false
    }
}

pub fn classifier_for(kind: PaddingClassifierKind) -> Box<dyn PaddingClassifier> {
    match kind {
        PaddingClassifierKind::FillPattern => Box::new(FillPatternClassifier),
        PaddingClassifierKind::Disabled => Box::new(DisabledClassifier),
    }
}
