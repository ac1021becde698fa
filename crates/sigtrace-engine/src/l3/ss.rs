use sigtrace_core::RadioMessage;
use sigtrace_pdus::common::fields::l3_header::L3Header;
use sigtrace_pdus::ss::enums::ss_msg_type::SsMsgType;

use crate::engine::Engine;
use crate::l3::sanity_failed;
use crate::session::Session;

impl Engine {
    pub(crate) fn rx_ss(&mut self, s: &mut Session, msg: &mut RadioMessage, l3: &[u8]) {
        tracing::trace!("rx_ss");
        let hdr = match L3Header::from_bytes(l3, "SS_LEN") {
            Ok(hdr) => hdr,
            Err(e) => return sanity_failed(msg, "SS header", &e),
        };

        s.ssa = true;

        match SsMsgType::try_from(hdr.msg_type()) {
            Ok(msg_type) => msg.set_info(msg_type.to_string()),
            Err(()) => {
                msg.set_info(format!("UNKNOWN SS ({:02x})", hdr.msg_type()));
                s.unknown = true;
            }
        }
    }
}
