use sigtrace_core::RadioMessage;

use crate::session::{Session, SessionStore};

/// What a higher-layer decoder extracted from a frame
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HigherLayerOutput {
    /// Embedded GSM L3 PDUs, dispatched by the engine in order
    pub l3: Vec<Vec<u8>>,
    /// LLC frames to forward to the sink
    pub llc: Vec<Vec<u8>>,
}

/// Decoders for UMTS RRC, LTE NAS and SMS. The engine routes frames here and
/// dispatches whatever GSM L3 they carry.
pub trait HigherLayers {
    fn handle_dcch_ul(&mut self, _store: &mut SessionStore, _msg: &mut RadioMessage, _payload: &[u8]) -> HigherLayerOutput {
        HigherLayerOutput::default()
    }

    fn handle_dcch_dl(&mut self, _store: &mut SessionStore, _msg: &mut RadioMessage, _payload: &[u8]) -> HigherLayerOutput {
        HigherLayerOutput::default()
    }

    fn handle_ccch_ul(&mut self, _store: &mut SessionStore, _msg: &mut RadioMessage, _payload: &[u8]) -> HigherLayerOutput {
        HigherLayerOutput::default()
    }

    fn handle_ccch_dl(&mut self, _store: &mut SessionStore, _msg: &mut RadioMessage, _payload: &[u8]) -> HigherLayerOutput {
        HigherLayerOutput::default()
    }

    fn handle_umts_bcch(&mut self, _store: &mut SessionStore, _msg: &mut RadioMessage, _payload: &[u8]) -> HigherLayerOutput {
        HigherLayerOutput::default()
    }

    fn handle_naseps(&mut self, _store: &mut SessionStore, _msg: &mut RadioMessage, _payload: &[u8]) -> HigherLayerOutput {
        HigherLayerOutput::default()
    }

    /// SMS transfer (protocol discriminator 9). The default only records its presence.
    fn handle_sms(&mut self, session: &mut Session, msg: &mut RadioMessage, _l3: &[u8]) {
        session.sms_presence = true;
        msg.set_info("SMS");
    }
}

pub struct NullHigherLayers;

impl HigherLayers for NullHigherLayers {}
