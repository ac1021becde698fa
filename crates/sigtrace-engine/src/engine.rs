use sigtrace_config::SharedConfig;
use sigtrace_core::{ChannelType, Domain, RadioMessage, RadioTechnology};
use sigtrace_pdus::lapdm::pdus::envelope::SACCH_L1_HEADER_LEN;

use crate::collab::{
    AddressDecoder, AssignmentParser, BcdAddressDecoder, CellObserver, HigherLayerOutput, HigherLayers, MessageSink,
    NullAssignmentParser, NullCellObserver, NullHigherLayers, NullSink,
};
use crate::session::{LastMessage, Session, SessionStore};
use crate::stats::{PaddingClassifier, classifier_for};

/// Trailing zero octets some capture front ends append to LTE uplink NAS messages
const LTE_UL_TRAILER_LEN: usize = 6;

/// The decoding engine. Owns its collaborators; the caller owns the sessions and passes
/// them into every call.
pub struct Engine {
    pub(crate) config: SharedConfig,
    pub(crate) cell: Box<dyn CellObserver>,
    pub(crate) address: Box<dyn AddressDecoder>,
    pub(crate) assignment: Box<dyn AssignmentParser>,
    pub(crate) higher: Box<dyn HigherLayers>,
    pub(crate) classifier: Box<dyn PaddingClassifier>,
    sink: Box<dyn MessageSink>,
    /// Transactions closed while processing the current message, flushed to the sink afterwards
    closed: Vec<Session>,
}

impl Engine {
    /// Engine with null collaborators and the configured padding classifier
    pub fn new(config: SharedConfig) -> Self {
        let classifier = classifier_for(config.config().padding_classifier);
        Self {
            config,
            cell: Box::new(NullCellObserver),
            address: Box::new(BcdAddressDecoder),
            assignment: Box::new(NullAssignmentParser),
            higher: Box::new(NullHigherLayers),
            classifier,
            sink: Box::new(NullSink),
            closed: Vec::new(),
        }
    }

    pub fn with_sink(mut self, sink: Box<dyn MessageSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_cell_observer(mut self, cell: Box<dyn CellObserver>) -> Self {
        self.cell = cell;
        self
    }

    pub fn with_address_decoder(mut self, address: Box<dyn AddressDecoder>) -> Self {
        self.address = address;
        self
    }

    pub fn with_assignment_parser(mut self, assignment: Box<dyn AssignmentParser>) -> Self {
        self.assignment = assignment;
        self
    }

    pub fn with_higher_layers(mut self, higher: Box<dyn HigherLayers>) -> Self {
        self.higher = higher;
        self
    }

    pub fn with_classifier(mut self, classifier: Box<dyn PaddingClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Reset a session, queueing the finished transaction for the sink
    pub(crate) fn close_session(&mut self, session: &mut Session, forced: bool) {
        if let Some(done) = session.reset(forced) {
            self.closed.push(done);
        }
    }

    /// Process one captured frame end to end: reassembly, duplicate check, dispatch,
    /// session bookkeeping, and hand-off to the sink. Duplicates are dropped.
    pub fn handle_radio_msg(&mut self, store: &mut SessionStore, mut msg: RadioMessage) {
        let dir = msg.direction();
        let fnr = msg.frame_number;
        tracing::trace!(fnr, "handle_radio_msg {} {} {} {}", msg.rat, msg.channel, dir, msg.dump_hex());
        let cfg = self.config.config();

        msg.info.clear();
        msg.decoded = true;
        for (i, session) in store.iter_mut().enumerate() {
            session.in_flight = i < cfg.active_domains();
        }

        // Detach the payload so the handlers can borrow it next to the envelope
        let mut payload = std::mem::take(&mut msg.payload);

        match msg.rat {
            RadioTechnology::Gsm => self.route_gsm(store, &mut msg, &payload),
            RadioTechnology::Umts => self.route_umts(store, &mut msg, &payload),
            RadioTechnology::Lte => {
                if msg.channel == ChannelType::Sdcch {
                    let (cs, ps) = store.both_mut();
                    cs.rat = RadioTechnology::Lte;
                    ps.rat = RadioTechnology::Lte;
                    if dir.is_ul()
                        && payload.len() > LTE_UL_TRAILER_LEN
                        && payload[payload.len() - LTE_UL_TRAILER_LEN..].iter().all(|&b| b == 0)
                    {
                        payload.truncate(payload.len() - LTE_UL_TRAILER_LEN);
                    }
                    let out = self.higher.handle_naseps(store, &mut msg, &payload);
                    self.dispatch_embedded(store, &mut msg, out);
                }
            }
        }
        msg.payload = payload;

        if cfg.msg_verbose > 0 && msg.decoded {
            tracing::info!(fnr, "{}", msg);
        }

        let session = store.get_mut(msg.domain);
        if session.in_flight && session.started {
            session.update_timestamps(fnr, msg.timestamp);
        }

        if msg.decoded {
            tracing::debug!("<- {}", msg);
            session.last_msg = Some(LastMessage { timestamp: msg.timestamp, channel: msg.channel });
            self.sink.send_message(msg);
        } else {
            tracing::debug!("dropping reprocessed message: {}", msg);
        }

        for session in store.iter_mut() {
            session.in_flight = false;
        }
        self.flush_closed();
    }

    fn route_gsm(&mut self, store: &mut SessionStore, msg: &mut RadioMessage, payload: &[u8]) {
        let verbose = self.config.config().msg_verbose > 1;
        if verbose {
            tracing::debug!("-> {}", msg.channel);
        }
        match msg.channel {
            ChannelType::Sacch => {
                if store.cs().rat != RadioTechnology::Gsm {
                    return;
                }
                match payload.get(SACCH_L1_HEADER_LEN..) {
                    Some(frame) => self.rx_lapdm(store, msg, ChannelType::Sacch, frame),
                    None => msg.set_info("FAILED SANITY CHECKS (LAPDm)"),
                }
            }
            ChannelType::Sdcch => {
                if store.cs().rat != RadioTechnology::Gsm {
                    return;
                }
                self.rx_lapdm(store, msg, ChannelType::Sdcch, payload);
            }
            ChannelType::Facch => self.rx_lapdm(store, msg, ChannelType::Facch, payload),
            ChannelType::Bcch => {
                // Skip the L2 pseudo length octet
                let l3 = payload.get(1..).unwrap_or(&[]);
                self.handle_dtap(store, msg, l3);
            }
        }
    }

    fn route_umts(&mut self, store: &mut SessionStore, msg: &mut RadioMessage, payload: &[u8]) {
        // An LTE transaction that was never closed
        if store.cs().rat == RadioTechnology::Lte && store.ps().started {
            self.close_session(store.cs_mut(), true);
        }

        let ul = msg.direction().is_ul();
        let out = match msg.channel {
            ChannelType::Sdcch | ChannelType::Facch => {
                let (cs, ps) = store.both_mut();
                cs.rat = RadioTechnology::Umts;
                ps.rat = RadioTechnology::Umts;
                match (msg.channel, ul) {
                    (ChannelType::Sdcch, true) => self.higher.handle_dcch_ul(store, msg, payload),
                    (ChannelType::Sdcch, false) => self.higher.handle_dcch_dl(store, msg, payload),
                    (_, true) => self.higher.handle_ccch_ul(store, msg, payload),
                    (_, false) => self.higher.handle_ccch_dl(store, msg, payload),
                }
            }
            ChannelType::Bcch => self.higher.handle_umts_bcch(store, msg, payload),
            ChannelType::Sacch => panic!("UMTS has no SACCH"),
        };
        self.dispatch_embedded(store, msg, out);
    }

    fn dispatch_embedded(&mut self, store: &mut SessionStore, msg: &mut RadioMessage, out: HigherLayerOutput) {
        let dir = msg.direction();
        for frame in &out.llc {
            self.sink.send_llc(frame, dir);
        }
        for l3 in &out.l3 {
            self.handle_dtap(store, msg, l3);
        }
    }

    fn flush_closed(&mut self) {
        for session in self.closed.drain(..) {
            if session.domain == Domain::CircuitSwitched {
                self.cell.paging_reset();
            }
            tracing::info!("closed {}", session);
            self.sink.send_session(session);
        }
    }

    /// Close whatever is still open, e.g. at the end of a capture
    pub fn finish(&mut self, store: &mut SessionStore) {
        for session in store.iter_mut() {
            if session.started {
                self.close_session(session, true);
            }
        }
        self.flush_closed();
    }
}
