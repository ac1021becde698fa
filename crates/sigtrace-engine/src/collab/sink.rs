use sigtrace_core::{Direction, RadioMessage};

use crate::session::Session;

/// Downstream consumer of annotated messages and closed transactions
pub trait MessageSink {
    fn send_message(&mut self, msg: RadioMessage);

    fn send_llc(&mut self, _frame: &[u8], _dir: Direction) {}

    fn send_session(&mut self, _session: Session) {}
}

pub struct NullSink;

impl MessageSink for NullSink {
    fn send_message(&mut self, _msg: RadioMessage) {}
}
