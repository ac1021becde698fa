use sigtrace_core::{Domain, RadioMessage, RadioTechnology};
use sigtrace_pdus::common::fields::l3_header::{L3_HEADER_LEN, L3Header};
use sigtrace_pdus::rr::enums::rr_msg_type::RrMsgType;
use sigtrace_pdus::rr::pdus::channel_release::ChannelRelease;
use sigtrace_pdus::rr::pdus::ciphering_mode_command::CipheringModeCommand;
use sigtrace_pdus::rr::pdus::ciphering_mode_complete::CipheringModeComplete;
use sigtrace_pdus::rr::pdus::classmark_change::ClassmarkChange;
use sigtrace_pdus::rr::pdus::paging_response::PagingResponse;
use sigtrace_pdus::rr::pdus::system_information_6::SystemInformation6;

use crate::engine::Engine;
use crate::l3::{apply_identity, apply_lai, sanity_failed};
use crate::session::{PaddingCategory, Session, SessionStore, fn_or_max};
use crate::stats::check_padding;

/// Octets of a SACCH system information message fed to its padding history
const SI_SAMPLE_LEN: usize = 18;

impl Engine {
    /// Radio resource messages act on the CS session. Channel release additionally detaches
    /// the PS session from the message in flight.
    pub(crate) fn rx_rr(&mut self, store: &mut SessionStore, msg: &mut RadioMessage, l3: &[u8]) {
        tracing::trace!("rx_rr");
        let hdr = match L3Header::from_bytes(l3, "RR_LEN") {
            Ok(hdr) => hdr,
            Err(e) => return sanity_failed(msg, "RR header", &e),
        };

        let Ok(msg_type) = RrMsgType::try_from(hdr.msg_type()) else {
            msg.set_info(format!("UNKNOWN RR ({:02x})", hdr.msg_type()));
            let s = store.cs_mut();
            s.unknown = true;
            s.rat = RadioTechnology::Gsm;
            return;
        };

        self.rx_rr_msg(store.cs_mut(), msg, msg_type, l3);
        store.cs_mut().rat = RadioTechnology::Gsm;

        if msg_type == RrMsgType::ChannelRelease && self.config.config().auto_reset {
            store.get_mut(Domain::PacketSwitched).in_flight = false;
        }
    }

    fn rx_channel_release(&mut self, s: &mut Session, msg: &mut RadioMessage, body: &[u8]) {
        msg.set_info("CHANNEL RELEASE");
        if s.cipher != 0 && s.fc.enc_rand == 0 {
            s.fc.predict += 1;
        }
        s.release = true;
        match ChannelRelease::from_bytes(body) {
            Ok(pdu) => {
                s.rr_cause = pdu.rr_cause;
                if pdu.gprs_resumption {
                    s.have_gprs = true;
                }
            }
            Err(e) => sanity_failed(msg, "ChannelRelease", &e),
        }

        self.close_session(s, false);
    }

    fn rx_rr_msg(&mut self, s: &mut Session, msg: &mut RadioMessage, msg_type: RrMsgType, l3: &[u8]) {
        let body = &l3[L3_HEADER_LEN..];
        let fnr = msg.frame_number;

        if msg_type.is_sysinfo() {
            msg.set_info(msg_type.to_string());
            let category = match msg_type {
                RrMsgType::SystemInformation5 => Some(PaddingCategory::Si5),
                RrMsgType::SystemInformation5bis => Some(PaddingCategory::Si5bis),
                RrMsgType::SystemInformation5ter => Some(PaddingCategory::Si5ter),
                RrMsgType::SystemInformation6 => Some(PaddingCategory::Si6),
                _ => None,
            };
            if let Some(category) = category {
                let sample = &l3[..l3.len().min(SI_SAMPLE_LEN)];
                check_padding(s, self.classifier.as_ref(), category, sample);
            }
            if msg_type == RrMsgType::SystemInformation6 {
                match SystemInformation6::from_bytes(body) {
                    Ok(pdu) => apply_lai(s, self.cell.as_ref(), &pdu.lai, Some(pdu.cell_identity)),
                    Err(e) => sanity_failed(msg, "SystemInformation6", &e),
                }
            }
            self.cell.handle_sysinfo(s, l3);
            return;
        }

        match msg_type {
            RrMsgType::ClassmarkEnquiry
            | RrMsgType::MeasurementReport
            | RrMsgType::ImmediateAssignment
            | RrMsgType::ImmediateAssignmentExtended
            | RrMsgType::ImmediateAssignmentReject
            | RrMsgType::HandoverComplete
            | RrMsgType::UtranClassmarkChange => msg.set_info(msg_type.to_string()),
            RrMsgType::ClassmarkChange => {
                msg.set_info(msg_type.to_string());
                match ClassmarkChange::from_bytes(body) {
                    Ok(pdu) => s.ms_cipher_mask |= pdu.cipher_capability.mask,
                    Err(e) => sanity_failed(msg, "ClassmarkChange", &e),
                }
            }
            RrMsgType::PagingRequest1 => {
                msg.set_info(msg_type.to_string());
                self.cell.handle_paging1(l3);
            }
            RrMsgType::PagingRequest2 => {
                msg.set_info(msg_type.to_string());
                self.cell.handle_paging2(l3);
            }
            RrMsgType::PagingRequest3 => {
                msg.set_info(msg_type.to_string());
                self.cell.handle_paging3();
            }
            RrMsgType::PagingResponse => {
                self.close_session(s, true);
                s.rat = RadioTechnology::Gsm;
                msg.set_info(msg_type.to_string());
                s.mt = true;
                s.started = true;
                s.closed = false;
                match PagingResponse::from_bytes(body) {
                    Ok(pdu) => {
                        tracing::debug!("<- {:?}", pdu);
                        s.initial_seq = pdu.cksn;
                        s.ms_cipher_mask |= pdu.cipher_capability.mask;
                        s.pag_mi = pdu.mi_type_raw;
                        apply_identity(s, msg, &pdu.mobile_identity, false);
                    }
                    Err(e) => sanity_failed(msg, "PagingResponse", &e),
                }
            }
            RrMsgType::HandoverCommand => {
                msg.set_info(msg_type.to_string());
                self.assignment.parse_assignment(l3, &s.cell_arfcns, &mut s.ga);
                s.handover = true;
                s.use_jump = 2;
            }
            RrMsgType::AssignmentCommand => {
                msg.set_info(msg_type.to_string());
                // Exactly one ciphered signalling frame before the assignment
                if s.fc.enc.wrapping_sub(s.fc.enc_null).wrapping_sub(s.fc.enc_si) == 1 {
                    s.forced_ho = true;
                }
                self.assignment.parse_assignment(l3, &s.cell_arfcns, &mut s.ga);
                s.assignment = true;
                s.use_jump = 1;
            }
            RrMsgType::AssignmentComplete => {
                msg.set_info(msg_type.to_string());
                s.assign_complete = true;
            }
            RrMsgType::CipheringModeComplete => {
                msg.set_info(msg_type.to_string());
                s.cipher_missing = if s.cipher_missing < 0 { 0 } else { 1 };
                if s.cm_comp_first_fn == 0 {
                    s.cm_comp_first_fn = fn_or_max(fnr);
                }
                s.cm_comp_last_fn = fn_or_max(fnr);
                s.cm_comp_count += 1;
                match CipheringModeComplete::from_bytes(body) {
                    Ok(CipheringModeComplete { mobile_identity: Some(mi) }) => {
                        apply_identity(s, msg, &mi, false);
                        s.cmc_imeisv = true;
                    }
                    Ok(_) => {}
                    Err(e) => sanity_failed(msg, "CipheringModeComplete", &e),
                }
            }
            RrMsgType::GprsSuspensionRequest => {
                msg.set_info(msg_type.to_string());
                s.have_gprs = true;
            }
            RrMsgType::CipheringModeCommand => {
                if s.cm_cmd_fn == 0 {
                    s.cm_cmd_fn = fn_or_max(fnr);
                }
                let pdu = match CipheringModeCommand::from_bytes(body) {
                    Ok(pdu) => pdu,
                    Err(e) => return sanity_failed(msg, "CipheringModeCommand", &e),
                };
                tracing::debug!("<- {:?}", pdu);
                if let Some(a5) = pdu.a5_version() {
                    s.cipher = a5;
                    if s.key.is_none() {
                        s.decoded = false;
                    }
                }
                msg.set_info(format!("CIPHER MODE COMMAND, A5/{}", s.cipher));
                if pdu.imeisv_requested {
                    s.cmc_imeisv = true;
                    if s.cipher != 0 && s.fc.enc_rand == 0 {
                        s.fc.predict += 1;
                    }
                }
                s.cipher_missing = -1;
            }
            RrMsgType::ChannelRelease => self.rx_channel_release(s, msg, body),
            _ => {
                // System information, handled above
                msg.set_info(msg_type.to_string());
            }
        }
    }
}
