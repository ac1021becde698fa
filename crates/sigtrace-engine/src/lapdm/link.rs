use sigtrace_core::{ChannelType, RadioMessage};
use sigtrace_pdus::lapdm::enums::frame_type::FrameType;
use sigtrace_pdus::lapdm::enums::sapi::Sapi;
use sigtrace_pdus::lapdm::pdus::lapdm_header::{LAPDM_HEADER_LEN, LapdmHeader};

use crate::engine::Engine;
use crate::lapdm::FrameDisposition;
use crate::session::{SessionStore, fn_or_max};
use crate::stats::update_counters;

/// Frames at or below this length are control-only and never trigger timestamp backfill
const BACKFILL_MIN_FRAME_LEN: usize = 21;

impl Engine {
    /// Link layer handling for one frame of a dedicated or associated control channel.
    /// Complete L3 messages are dispatched; everything else only annotates `msg`.
    pub(crate) fn rx_lapdm(&mut self, store: &mut SessionStore, msg: &mut RadioMessage, channel: ChannelType, frame: &[u8]) {
        tracing::trace!("rx_lapdm {} {}", channel, hex::encode(frame));
        let dir = msg.direction();
        let fnr = msg.frame_number;
        msg.info.clear();

        let header = match LapdmHeader::from_bytes(frame) {
            Ok(header) => header,
            Err(e) => {
                tracing::warn!("Failed parsing LapdmHeader: {:?} {}", e, hex::encode(frame));
                msg.set_info("FAILED SANITY CHECKS (LAPDm)");
                return;
            }
        };
        if header.lpd != 0 {
            msg.set_info("non-GSM");
            return;
        }
        if let Err(e) = header.check_sanity(frame.len()) {
            tracing::warn!("LAPDm sanity check failed: {} {}", e, hex::encode(frame));
            msg.set_info("FAILED SANITY CHECKS (LAPDm)");
            return;
        }
        let Ok(sapi) = Sapi::try_from(header.sapi) else {
            msg.set_info(format!("Unknown SAPI: {}", header.sapi));
            return;
        };
        tracing::trace!("{}", header);

        let data_len = if header.frame_type == FrameType::S {
            0
        } else {
            header.length as usize
        };
        let area = &frame[LAPDM_HEADER_LEN..];

        let session = store.cs_mut();
        let Some(buf) = session.channels.get_mut(channel, dir, sapi) else {
            panic!("no reassembly buffer for {}", channel);
        };
        let disposition = buf.receive(&header, &area[..data_len]);
        update_counters(session, self.classifier.as_ref(), area, data_len, dir);

        let old_auth = session.auth;
        let old_cipher = session.cipher;

        match disposition {
            FrameDisposition::OutOfSequence { recv, want, run, resync } => {
                if resync {
                    msg.set_info(format!("<OUT OF SEQUENCE END> no out-of-seq {}, reset seq to {}", run, recv));
                } else {
                    msg.set_info(format!("<OUT OF SEQUENCE> recv {} want {} no out-of-seq {}", recv, want, run));
                }
                return;
            }
            FrameDisposition::Null => {
                msg.set_info("<NULL>");
                return;
            }
            FrameDisposition::Overflow => {
                msg.set_info("FAILED SANITY CHECKS (LAPDm_OVERFLOW)");
                return;
            }
            FrameDisposition::Fragment { ns } => {
                msg.set_info(format!("<FRAGMENT {}>", ns));
            }
            FrameDisposition::Complete(l3) => {
                self.handle_dtap(store, msg, &l3);
            }
        }

        // Fill in completion timestamps when the confirming uplink message was not captured
        if frame.len() <= BACKFILL_MIN_FRAME_LEN {
            return;
        }
        let session = store.cs_mut();
        let first_octet = session.channels.get(channel, dir, sapi).map(|b| b.first_octet()).unwrap_or(0);
        let sapi0 = sapi == Sapi::Signalling;
        if session.auth != 0 && old_auth != 0 && session.auth_resp_fn == 0 && (!sapi0 || first_octet != 0x05) {
            session.auth_resp_fn = fn_or_max(fnr);
        }
        if session.cipher != 0 && old_cipher != 0 && session.cm_comp_last_fn == 0 && (!sapi0 || first_octet != 0x06) {
            if session.cm_comp_first_fn == 0 {
                session.cm_comp_first_fn = fn_or_max(fnr);
            }
            session.cm_comp_last_fn = fn_or_max(fnr);
        }
    }
}
