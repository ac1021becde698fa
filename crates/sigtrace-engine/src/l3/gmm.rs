use sigtrace_core::{Domain, RadioMessage, RadioTechnology};
use sigtrace_pdus::common::fields::l3_header::{L3_HEADER_LEN, L3Header};
use sigtrace_pdus::gmm::enums::gmm_msg_type::GmmMsgType;
use sigtrace_pdus::gmm::pdus::attach_accept::AttachAccept;
use sigtrace_pdus::gmm::pdus::attach_request::AttachRequest;
use sigtrace_pdus::gmm::pdus::auth_cipher_request::AuthCipherRequest;
use sigtrace_pdus::gmm::pdus::auth_cipher_response::AuthCipherResponse;
use sigtrace_pdus::gmm::pdus::routing_area_update_accept::RoutingAreaUpdateAccept;
use sigtrace_pdus::gmm::pdus::routing_area_update_request::RoutingAreaUpdateRequest;
use sigtrace_pdus::gmm::pdus::service_request::ServiceRequest;

use crate::engine::Engine;
use crate::l3::{apply_identity, apply_lai, sanity_failed};
use crate::session::Session;

impl Engine {
    /// GPRS mobility management. Only valid on the PS session; the message is moved to the PS
    /// domain once accepted.
    pub(crate) fn rx_gmm(&mut self, s: &mut Session, msg: &mut RadioMessage, l3: &[u8]) {
        tracing::trace!("rx_gmm");
        if s.domain != Domain::PacketSwitched {
            msg.set_info("FAILED SANITY CHECKS (GMM_IN_CS)");
            return;
        }
        let hdr = match L3Header::from_bytes(l3, "GMM_LEN") {
            Ok(hdr) => hdr,
            Err(e) => return sanity_failed(msg, "GMM header", &e),
        };
        msg.domain = Domain::PacketSwitched;
        let body = &l3[L3_HEADER_LEN..];

        let Ok(msg_type) = GmmMsgType::try_from(hdr.msg_type()) else {
            msg.set_info(format!("UNKNOWN GMM ({:02x})", hdr.msg_type()));
            s.unknown = true;
            return;
        };

        match msg_type {
            GmmMsgType::AttachRequest => {
                self.close_session(s, true);
                msg.set_info(msg_type.to_string());
                s.attach = true;
                s.started = true;
                s.closed = false;
                match AttachRequest::from_bytes(body) {
                    Ok(pdu) => {
                        tracing::debug!("<- {:?}", pdu);
                        s.lu_type = pdu.attach_type;
                        s.initial_seq = pdu.cksn;
                        apply_identity(s, msg, &pdu.mobile_identity, false);
                        s.lu_mcc = self.cell.mcc_from_digits(&pdu.old_lai.digits);
                        s.lu_mnc = self.cell.mnc_from_digits(&pdu.old_lai.digits);
                        s.lu_lac = pdu.old_lai.lac;
                    }
                    Err(e) => sanity_failed(msg, "AttachRequest", &e),
                }
            }
            GmmMsgType::AttachAccept => {
                msg.set_info(msg_type.to_string());
                s.attach = true;
                s.att_acc = 1;
                match AttachAccept::from_bytes(body) {
                    Ok(pdu) => {
                        apply_lai(s, self.cell.as_ref(), &pdu.lai, Some(pdu.rac as u16));
                        if let Some(mi) = &pdu.new_identity {
                            apply_identity(s, msg, mi, true);
                        }
                    }
                    Err(e) => sanity_failed(msg, "AttachAccept", &e),
                }
            }
            GmmMsgType::AttachComplete => {
                msg.set_info(msg_type.to_string());
                s.att_acc = 1;
            }
            GmmMsgType::AttachReject => {
                msg.set_info(msg_type.to_string());
                s.att_acc = -1;
            }
            GmmMsgType::DetachRequest => {
                msg.set_info(msg_type.to_string());
                s.started = true;
            }
            GmmMsgType::RoutingAreaUpdateRequest => {
                self.close_session(s, true);
                msg.set_info(msg_type.to_string());
                s.raupd = 1;
                s.mo = true;
                s.started = true;
                s.closed = false;
                match RoutingAreaUpdateRequest::from_bytes(body) {
                    Ok(pdu) => s.initial_seq = pdu.cksn,
                    Err(e) => sanity_failed(msg, "RoutingAreaUpdateRequest", &e),
                }
            }
            GmmMsgType::RoutingAreaUpdateAccept => {
                msg.set_info(msg_type.to_string());
                s.raupd = 1;
                s.lu_acc = true;
                match RoutingAreaUpdateAccept::from_bytes(body) {
                    Ok(pdu) => {
                        apply_lai(s, self.cell.as_ref(), &pdu.lai, Some(pdu.rac as u16));
                        if let Some(mi) = &pdu.new_identity {
                            apply_identity(s, msg, mi, true);
                        }
                    }
                    Err(e) => sanity_failed(msg, "RoutingAreaUpdateAccept", &e),
                }
            }
            GmmMsgType::RoutingAreaUpdateComplete => {
                msg.set_info(msg_type.to_string());
                s.raupd = 1;
            }
            GmmMsgType::RoutingAreaUpdateReject => {
                msg.set_info(msg_type.to_string());
                s.raupd = -1;
            }
            GmmMsgType::ServiceRequest => {
                self.close_session(s, true);
                msg.set_info(msg_type.to_string());
                s.started = true;
                s.closed = false;
                s.serv_req = 1;
                match ServiceRequest::from_bytes(body) {
                    Ok(pdu) => {
                        s.initial_seq = pdu.cksn;
                        if let Some(mi) = &pdu.mobile_identity {
                            apply_identity(s, msg, mi, false);
                        }
                    }
                    Err(e) => sanity_failed(msg, "ServiceRequest", &e),
                }
            }
            GmmMsgType::ServiceAccept => {
                msg.set_info(msg_type.to_string());
                s.serv_req = 2;
            }
            GmmMsgType::ServiceReject => {
                msg.set_info(msg_type.to_string());
                s.serv_req = -1;
            }
            GmmMsgType::PtmsiReallocationCommand | GmmMsgType::PtmsiReallocationComplete => {
                msg.set_info(msg_type.to_string());
                s.tmsi_realloc = true;
            }
            GmmMsgType::AuthCipherRequest => {
                msg.set_info(msg_type.to_string());
                match AuthCipherRequest::from_bytes(body) {
                    Ok(pdu) => {
                        if s.cipher == 0 {
                            s.cipher = pdu.cipher_algorithm;
                        }
                        if s.rat == RadioTechnology::Gsm {
                            msg.append_info(&format!(", GEA/{}", s.cipher));
                        }
                        s.cmc_imeisv = pdu.imeisv_requested;
                        s.auth = pdu.flavour.into_raw();
                    }
                    Err(e) => sanity_failed(msg, "AuthCipherRequest", &e),
                }
            }
            GmmMsgType::AuthCipherResponse => {
                msg.set_info(msg_type.to_string());
                if s.auth == 0 {
                    s.auth = 1;
                }
                match AuthCipherResponse::from_bytes(body) {
                    Ok(AuthCipherResponse { imeisv: Some(mi) }) => {
                        s.cmc_imeisv = true;
                        apply_identity(s, msg, &mi, false);
                    }
                    Ok(_) => {}
                    Err(e) => sanity_failed(msg, "AuthCipherResponse", &e),
                }
            }
            GmmMsgType::AuthCipherReject => {
                msg.set_info(msg_type.to_string());
                s.auth = 1;
            }
            GmmMsgType::IdentityRequest => Self::rx_identity_request(s, msg, body),
            GmmMsgType::IdentityResponse => Self::rx_identity_response(s, msg, body),
            GmmMsgType::DetachAccept | GmmMsgType::GmmStatus | GmmMsgType::GmmInformation => {
                msg.set_info(msg_type.to_string());
            }
        }
    }
}
