use sigtrace_core::{Domain, RadioMessage};
use sigtrace_pdus::common::fields::l3_header::{L3_HEADER_LEN, L3Header};
use sigtrace_pdus::sm::enums::sm_msg_type::SmMsgType;
use sigtrace_pdus::sm::pdus::activate_pdp_context_accept::ActivatePdpContextAccept;

use crate::engine::Engine;
use crate::l3::sanity_failed;
use crate::session::Session;

impl Engine {
    /// GPRS session management. Messages without a type octet are ignored.
    pub(crate) fn rx_sm(&mut self, s: &mut Session, msg: &mut RadioMessage, l3: &[u8]) {
        tracing::trace!("rx_sm");
        let Ok(hdr) = L3Header::from_bytes(l3, "SM_LEN") else {
            return;
        };
        if s.domain != Domain::PacketSwitched {
            msg.set_info("FAILED SANITY CHECKS (SM_IN_CS)");
            return;
        }
        msg.domain = Domain::PacketSwitched;

        let Ok(msg_type) = SmMsgType::try_from(hdr.msg_type()) else {
            msg.set_info(format!("UNKNOWN SM ({:02x})", hdr.msg_type()));
            s.unknown = true;
            return;
        };
        msg.set_info(msg_type.to_string());

        match msg_type {
            SmMsgType::ActivatePdpRequest | SmMsgType::RequestPdpActivation => s.pdp_activate = true,
            SmMsgType::ActivatePdpAccept => match ActivatePdpContextAccept::from_bytes(&l3[L3_HEADER_LEN..]) {
                Ok(pdu) => {
                    tracing::debug!("<- {:?}", pdu);
                    if let Some(ip) = pdu.pdp_address {
                        s.pdp_ip = Some(ip);
                    }
                }
                Err(e) => sanity_failed(msg, "ActivatePdpContextAccept", &e),
            },
            _ => {}
        }
    }
}
