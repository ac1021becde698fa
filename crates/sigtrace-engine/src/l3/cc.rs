use sigtrace_core::RadioMessage;
use sigtrace_pdus::cc::enums::cc_msg_type::CcMsgType;
use sigtrace_pdus::cc::pdus::setup::Setup;
use sigtrace_pdus::common::fields::l3_header::{L3_HEADER_LEN, L3Header};

use crate::engine::Engine;
use crate::l3::sanity_failed;
use crate::session::Session;

impl Engine {
    pub(crate) fn rx_cc(&mut self, s: &mut Session, msg: &mut RadioMessage, l3: &[u8]) {
        tracing::trace!("rx_cc");
        let hdr = match L3Header::from_bytes(l3, "CC_LEN") {
            Ok(hdr) => hdr,
            Err(e) => return sanity_failed(msg, "CC header", &e),
        };
        let ul = msg.direction().is_ul();

        s.call = true;

        let Ok(msg_type) = CcMsgType::try_from(hdr.msg_type()) else {
            msg.set_info(format!("UNKNOWN CC ({:02x})", hdr.msg_type()));
            s.unknown = true;
            return;
        };
        msg.set_info(msg_type.to_string());

        match msg_type {
            CcMsgType::CallProceeding => {
                if !ul {
                    if s.cipher != 0 && s.fc.enc_rand == 0 {
                        s.fc.predict += 1;
                    }
                    s.mo = true;
                }
            }
            CcMsgType::Setup => {
                s.call_presence = true;
                if ul {
                    s.mo = true;
                } else {
                    s.mt = true;
                }

                let pdu = Setup::from_bytes(&l3[L3_HEADER_LEN..]);
                tracing::debug!("<- {:?}", pdu);
                // The called party wins when both are present
                for number in [&pdu.calling_party, &pdu.called_party].into_iter().flatten() {
                    s.msisdn = self.address.decode_address(number);
                }
            }
            CcMsgType::CallConfirmed => {
                if ul {
                    s.mt = true;
                } else {
                    s.mo = true;
                }
            }
            _ => {}
        }
    }
}
