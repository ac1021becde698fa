use std::cell::RefCell;
use std::rc::Rc;

use sigtrace_core::{Direction, RadioMessage};
use sigtrace_engine::{MessageSink, Session};

/// Everything the engine handed to its sink
#[derive(Default)]
pub struct Collected {
    pub messages: Vec<RadioMessage>,
    pub llc: Vec<(Vec<u8>, Direction)>,
    pub sessions: Vec<Session>,
}

/// A message sink for testing purposes.
/// Collects all output in a shared buffer the test keeps a handle to
pub struct CollectingSink {
    collected: Rc<RefCell<Collected>>,
}

impl CollectingSink {
    pub fn new() -> (Self, Rc<RefCell<Collected>>) {
        let collected = Rc::new(RefCell::new(Collected::default()));
        (Self { collected: collected.clone() }, collected)
    }
}

impl MessageSink for CollectingSink {
    fn send_message(&mut self, msg: RadioMessage) {
        tracing::debug!("send_message: {}", msg);
        self.collected.borrow_mut().messages.push(msg);
    }

    fn send_llc(&mut self, frame: &[u8], dir: Direction) {
        self.collected.borrow_mut().llc.push((frame.to_vec(), dir));
    }

    fn send_session(&mut self, session: Session) {
        tracing::debug!("send_session: {}", session);
        self.collected.borrow_mut().sessions.push(session);
    }
}
