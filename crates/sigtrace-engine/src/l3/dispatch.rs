use sigtrace_core::{Domain, RadioMessage};
use sigtrace_pdus::common::enums::protocol_discriminator::ProtocolDiscriminator;

use crate::engine::Engine;
use crate::l3::dedup::is_duplicate;
use crate::session::SessionStore;

impl Engine {
    /// Dispatch one complete L3 message on its protocol discriminator.
    ///
    /// Circuit-switched families always act on the CS session. GPRS mobility and session
    /// management act on the PS session when dual-domain tracking is enabled; otherwise they
    /// reach the CS session and are rejected there.
    pub fn handle_dtap(&mut self, store: &mut SessionStore, msg: &mut RadioMessage, l3: &[u8]) {
        tracing::trace!("handle_dtap {}", hex::encode(l3));
        msg.info.clear();

        if l3.is_empty() {
            msg.set_info("<ZERO LENGTH>");
            return;
        }

        if is_duplicate(store.cs_mut(), msg, l3) {
            msg.decoded = false;
            msg.set_info("<DOUBLE MSG>");
            return;
        }

        let gprs_domain = if self.config.config().auto_reset {
            Domain::PacketSwitched
        } else {
            Domain::CircuitSwitched
        };

        let pdisc_raw = l3[0] & 0x0f;
        let Ok(pdisc) = ProtocolDiscriminator::try_from(pdisc_raw) else {
            msg.set_info(format!("Unknown proto_discr {}: {}", msg.direction(), hex::encode(l3)));
            store.cs_mut().unknown = true;
            return;
        };

        match pdisc {
            ProtocolDiscriminator::CallControl => self.rx_cc(store.cs_mut(), msg, l3),
            ProtocolDiscriminator::MobilityManagement => self.rx_mm(store.cs_mut(), msg, l3),
            ProtocolDiscriminator::RadioResource => self.rx_rr(store, msg, l3),
            ProtocolDiscriminator::GprsMobilityManagement => self.rx_gmm(store.get_mut(gprs_domain), msg, l3),
            ProtocolDiscriminator::GprsSessionManagement => self.rx_sm(store.get_mut(gprs_domain), msg, l3),
            ProtocolDiscriminator::Sms => self.higher.handle_sms(store.cs_mut(), msg, l3),
            ProtocolDiscriminator::NonCallSs => self.rx_ss(store.cs_mut(), msg, l3),
            ProtocolDiscriminator::GroupCallControl
            | ProtocolDiscriminator::BroadcastCallControl
            | ProtocolDiscriminator::Pdss1
            | ProtocolDiscriminator::Pdss2
            | ProtocolDiscriminator::LocationServices => {
                // Recognised but not tracked
                msg.set_info(pdisc.to_string());
            }
        }
    }
}
