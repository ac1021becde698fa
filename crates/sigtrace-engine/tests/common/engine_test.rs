use std::cell::RefCell;
use std::rc::Rc;

use sigtrace_config::{EngineConfig, SharedConfig};
use sigtrace_core::{ChannelType, Direction, Domain, FILL_OCTET, FrameNumber, RadioMessage, RadioTechnology};
use sigtrace_engine::{Engine, HigherLayers, Session, SessionStore, new_l2, new_l3};

use super::sink::{Collected, CollectingSink};

/// Creates a default config for testing. It can still be modified as needed
/// before passing it to the EngineTest constructor
pub fn default_test_config(auto_reset: bool) -> EngineConfig {
    EngineConfig::new(auto_reset)
}

/// Infrastructure for testing the engine end to end.
/// Owns the session store and collects whatever reaches the sink
pub struct EngineTest {
    pub engine: Engine,
    pub store: SessionStore,
    pub out: Rc<RefCell<Collected>>,
    fnr: FrameNumber,
}

impl EngineTest {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_setup(config, |engine| engine)
    }

    /// Construct with extra collaborators installed on the engine
    pub fn with_setup(config: EngineConfig, setup: impl FnOnce(Engine) -> Engine) -> Self {
        let (sink, out) = CollectingSink::new();
        let engine = setup(Engine::new(SharedConfig::from_config(config)).with_sink(Box::new(sink)));
        Self { engine, store: SessionStore::new(), out, fnr: 1000 }
    }

    pub fn with_higher_layers(config: EngineConfig, higher: Box<dyn HigherLayers>) -> Self {
        Self::with_setup(config, |engine| engine.with_higher_layers(higher))
    }

    /// Each submitted message gets the next frame number
    fn next_fn(&mut self) -> FrameNumber {
        self.fnr += 51;
        self.fnr
    }

    pub fn submit(&mut self, msg: RadioMessage) {
        self.engine.handle_radio_msg(&mut self.store, msg);
    }

    /// Submit a raw frame on a channel
    pub fn submit_l2(&mut self, rat: RadioTechnology, channel: ChannelType, dir: Direction, frame: &[u8]) {
        let fnr = self.next_fn();
        let msg = new_l2(frame, rat, Domain::CircuitSwitched, fnr, dir, channel);
        self.submit(msg);
    }

    /// Submit an L3 message wrapped in a single unnumbered LAPDm frame
    pub fn submit_l3(&mut self, channel: ChannelType, dir: Direction, l3: &[u8]) {
        let fnr = self.next_fn();
        let msg = new_l3(l3, RadioTechnology::Gsm, Domain::CircuitSwitched, fnr, dir, channel)
            .expect("non-empty l3");
        self.submit(msg);
    }

    /// Convenience for hex-written L3 on SDCCH
    pub fn submit_hex(&mut self, dir: Direction, l3_hex: &str) {
        let l3 = hex::decode(l3_hex.replace(' ', "")).expect("valid hex");
        self.submit_l3(ChannelType::Sdcch, dir, &l3);
    }

    pub fn finish(&mut self) {
        self.engine.finish(&mut self.store);
    }

    pub fn cs(&self) -> &Session {
        self.store.cs()
    }

    pub fn ps(&self) -> &Session {
        self.store.ps()
    }

    pub fn message_count(&self) -> usize {
        self.out.borrow().messages.len()
    }

    /// Annotation of the most recent message that reached the sink
    pub fn last_info(&self) -> String {
        self.out.borrow().messages.last().map(|m| m.info.clone()).unwrap_or_default()
    }

    pub fn last_domain(&self) -> Option<Domain> {
        self.out.borrow().messages.last().map(|m| m.domain)
    }

    pub fn take_sessions(&mut self) -> Vec<Session> {
        std::mem::take(&mut self.out.borrow_mut().sessions)
    }
}

/// SDCCH I frame on SAPI 0, padded with fill octets to a full block
pub fn i_frame(dir: Direction, ns: u8, nr: u8, more: bool, payload: &[u8]) -> Vec<u8> {
    let addr = if dir.is_ul() { 0x01 } else { 0x03 };
    let control = nr << 5 | ns << 1;
    let length = (payload.len() as u8) << 2 | (more as u8) << 1 | 0x01;
    let mut frame = vec![addr, control, length];
    frame.extend_from_slice(payload);
    frame.resize(23, FILL_OCTET);
    frame
}

/// SDCCH frame with no payload: unnumbered information with zero length, followed by `padding`
pub fn null_frame(dir: Direction, padding: &[u8]) -> Vec<u8> {
    let addr = if dir.is_ul() { 0x01 } else { 0x03 };
    let mut frame = vec![addr, 0x03, 0x01];
    frame.extend_from_slice(padding);
    frame.resize(23, FILL_OCTET);
    frame
}
