use sigtrace_core::{ChannelType, RadioMessage};
use sigtrace_pdus::common::enums::mi_type::MiType;
use sigtrace_pdus::common::fields::l3_header::{L3_HEADER_LEN, L3Header};
use sigtrace_pdus::mm::enums::cm_service_type::CmServiceType;
use sigtrace_pdus::mm::enums::mm_msg_type::MmMsgType;
use sigtrace_pdus::mm::pdus::authentication_request::AuthenticationRequest;
use sigtrace_pdus::mm::pdus::authentication_response::AuthenticationResponse;
use sigtrace_pdus::mm::pdus::cm_service_request::CmServiceRequest;
use sigtrace_pdus::mm::pdus::identity_request::IdentityRequest;
use sigtrace_pdus::mm::pdus::identity_response::IdentityResponse;
use sigtrace_pdus::mm::pdus::imsi_detach_indication::ImsiDetachIndication;
use sigtrace_pdus::mm::pdus::location_updating_accept::LocationUpdatingAccept;
use sigtrace_pdus::mm::pdus::location_updating_reject::LocationUpdatingReject;
use sigtrace_pdus::mm::pdus::location_updating_request::LocationUpdatingRequest;
use sigtrace_pdus::mm::pdus::tmsi_reallocation_command::TmsiReallocationCommand;

use crate::engine::Engine;
use crate::l3::{apply_identity, apply_lai, sanity_failed};
use crate::session::{Session, fn_or_max};

/// A CM service request this close to the previous message continues the transaction
const CONTINUATION_WINDOW_SECS: i64 = 1;

impl Engine {
    pub(crate) fn rx_mm(&mut self, s: &mut Session, msg: &mut RadioMessage, l3: &[u8]) {
        tracing::trace!("rx_mm");
        let hdr = match L3Header::from_bytes(l3, "MM_LEN") {
            Ok(hdr) => hdr,
            Err(e) => return sanity_failed(msg, "MM header", &e),
        };
        let body = &l3[L3_HEADER_LEN..];
        let fnr = msg.frame_number;

        let Ok(msg_type) = MmMsgType::try_from(hdr.msg_type()) else {
            msg.set_info(format!("UNKNOWN MM ({:02x})", hdr.msg_type()));
            s.unknown = true;
            return;
        };

        match msg_type {
            MmMsgType::ImsiDetachIndication => {
                self.close_session(s, true);
                msg.set_info(msg_type.to_string());
                s.started = true;
                s.closed = false;
                s.detach = true;
                s.mo = true;
                match ImsiDetachIndication::from_bytes(body) {
                    Ok(pdu) => {
                        s.ms_cipher_mask |= pdu.cipher_capability.mask;
                        apply_identity(s, msg, &pdu.mobile_identity, false);
                    }
                    Err(e) => sanity_failed(msg, "ImsiDetachIndication", &e),
                }
            }
            MmMsgType::LocationUpdatingAccept => {
                msg.set_info(msg_type.to_string());
                s.locupd = true;
                s.mo = true;
                s.lu_acc = true;
                match LocationUpdatingAccept::from_bytes(body) {
                    Ok(pdu) => {
                        apply_lai(s, self.cell.as_ref(), &pdu.lai, None);
                        msg.append_info(&format!(", LAC {}", s.lac));
                        if let Some(mi) = &pdu.new_identity {
                            s.tmsi_realloc = true;
                            apply_identity(s, msg, mi, true);
                        }
                    }
                    Err(e) => sanity_failed(msg, "LocationUpdatingAccept", &e),
                }
            }
            MmMsgType::LocationUpdatingReject => match LocationUpdatingReject::from_bytes(body) {
                Ok(pdu) => {
                    msg.set_info(format!("LOC UPD REJECT cause={}", pdu.cause));
                    s.locupd = true;
                    s.lu_reject = true;
                    s.lu_rej_cause = pdu.cause;
                    s.mo = true;
                }
                Err(e) => sanity_failed(msg, "LocationUpdatingReject", &e),
            },
            MmMsgType::LocationUpdatingRequest => {
                self.close_session(s, true);
                match LocationUpdatingRequest::from_bytes(body) {
                    Ok(pdu) => {
                        tracing::debug!("<- {:?}", pdu);
                        msg.set_info(msg_type.to_string());
                        s.mo = true;
                        s.locupd = true;
                        s.started = true;
                        s.closed = false;
                        s.lu_type = pdu.lu_type;
                        s.initial_seq = pdu.cksn;
                        s.lu_mcc = self.cell.mcc_from_digits(&pdu.lai.digits);
                        s.lu_mnc = self.cell.mnc_from_digits(&pdu.lai.digits);
                        s.lu_lac = pdu.lai.lac;
                        msg.append_info(&format!(", LAI {}-{}-{:04x}", s.lu_mcc, s.lu_mnc, s.lu_lac));
                        s.ms_cipher_mask |= pdu.cipher_capability.mask;
                        apply_identity(s, msg, &pdu.mobile_identity, false);
                    }
                    Err(e) => sanity_failed(msg, "LocationUpdatingRequest", &e),
                }
            }
            MmMsgType::AuthenticationRequest => {
                let pdu = AuthenticationRequest::from_bytes(body);
                msg.set_info(format!("AUTH REQUEST ({})", pdu.flavour));
                s.auth = pdu.flavour.into_raw();
                if s.auth_req_fn == 0 {
                    s.auth_req_fn = fn_or_max(fnr);
                }
            }
            MmMsgType::AuthenticationResponse => {
                let pdu = AuthenticationResponse::from_bytes(body);
                msg.set_info(format!("AUTH RESPONSE ({})", pdu.flavour));
                if s.auth == 0 {
                    s.auth = pdu.flavour.into_raw();
                }
                if s.auth_resp_fn == 0 {
                    s.auth_resp_fn = fn_or_max(fnr);
                }
            }
            MmMsgType::IdentityRequest => Self::rx_identity_request(s, msg, body),
            MmMsgType::IdentityResponse => Self::rx_identity_response(s, msg, body),
            MmMsgType::TmsiReallocationCommand => {
                msg.set_info(msg_type.to_string());
                s.tmsi_realloc = true;
                match TmsiReallocationCommand::from_bytes(body) {
                    Ok(pdu) => {
                        apply_lai(s, self.cell.as_ref(), &pdu.lai, None);
                        apply_identity(s, msg, &pdu.mobile_identity, true);
                    }
                    Err(e) => sanity_failed(msg, "TmsiReallocationCommand", &e),
                }
            }
            MmMsgType::TmsiReallocationComplete => {
                msg.set_info(msg_type.to_string());
                s.tmsi_realloc = true;
            }
            MmMsgType::CmServiceAccept | MmMsgType::CmServiceAbort => {
                msg.set_info(msg_type.to_string());
                s.mo = true;
            }
            MmMsgType::CmServiceRequest => {
                msg.set_info(msg_type.to_string());
                if Self::continues_transaction(s, msg) {
                    tracing::debug!("New service request in already started transaction");
                } else {
                    self.close_session(s, true);
                }
                s.started = true;
                s.closed = false;
                s.serv_req = 1;
                s.mo = true;
                match CmServiceRequest::from_bytes(body) {
                    Ok(pdu) => {
                        match pdu.service_type() {
                            Some(CmServiceType::EmergencyCall) => {
                                s.call_presence = true;
                                s.msisdn = "<emergency>".to_string();
                                s.call = true;
                            }
                            Some(CmServiceType::MoCall) => s.call = true,
                            Some(CmServiceType::Sms) => s.sms = true,
                            Some(CmServiceType::SupplementaryService) => s.ssa = true,
                            _ => s.unknown = true,
                        }
                        s.initial_seq = pdu.cksn;
                        s.ms_cipher_mask |= pdu.cipher_capability.mask;
                        apply_identity(s, msg, &pdu.mobile_identity, false);
                    }
                    Err(e) => sanity_failed(msg, "CmServiceRequest", &e),
                }
            }
            MmMsgType::Abort => {
                msg.set_info(msg_type.to_string());
                s.abort = true;
            }
            MmMsgType::MmInformation => msg.set_info(msg_type.to_string()),
        }
    }

    /// True if a CM service request belongs to the transaction already in progress: one that
    /// is open and saw a non-broadcast message within the continuation window
    fn continues_transaction(s: &Session, msg: &RadioMessage) -> bool {
        (s.started || s.call_presence || s.sms_presence || s.lu_acc)
            && !s.closed
            && s.last_msg.is_some_and(|last| {
                last.channel != ChannelType::Bcch
                    && msg.timestamp.timestamp() - last.timestamp.timestamp() <= CONTINUATION_WINDOW_SECS
            })
    }

    /// Shared by MM and GMM
    pub(crate) fn rx_identity_request(s: &mut Session, msg: &mut RadioMessage, body: &[u8]) {
        let pdu = match IdentityRequest::from_bytes(body) {
            Ok(pdu) => pdu,
            Err(e) => return sanity_failed(msg, "IdentityRequest", &e),
        };
        let after_cipher = s.cipher != 0;
        match pdu.identity_type() {
            Some(MiType::Imsi) => {
                msg.set_info("IDENTITY REQUEST, IMSI");
                if after_cipher {
                    s.iden_imsi_ac = true;
                } else {
                    s.iden_imsi_bc = true;
                }
            }
            Some(t @ (MiType::Imei | MiType::Imeisv)) => {
                msg.set_info(format!("IDENTITY REQUEST, {}", t));
                if after_cipher {
                    s.iden_imei_ac = true;
                } else {
                    s.iden_imei_bc = true;
                }
            }
            Some(MiType::Tmsi) => msg.set_info("IDENTITY REQUEST, TMSI"),
            _ => msg.set_info("IDENTITY REQUEST"),
        }
    }

    /// Shared by MM and GMM
    pub(crate) fn rx_identity_response(s: &mut Session, msg: &mut RadioMessage, body: &[u8]) {
        msg.set_info("IDENTITY RESPONSE");
        let pdu = match IdentityResponse::from_bytes(body) {
            Ok(pdu) => pdu,
            Err(e) => return sanity_failed(msg, "IdentityResponse", &e),
        };
        let after_cipher = s.cipher != 0;
        match pdu.mobile_identity.mi_type() {
            MiType::Imsi => {
                if after_cipher {
                    s.iden_imsi_ac = true;
                } else {
                    s.iden_imsi_bc = true;
                }
            }
            MiType::Imei | MiType::Imeisv => {
                if after_cipher {
                    s.iden_imei_ac = true;
                } else {
                    s.iden_imei_bc = true;
                }
            }
            _ => {}
        }
        apply_identity(s, msg, &pdu.mobile_identity, false);
    }
}
