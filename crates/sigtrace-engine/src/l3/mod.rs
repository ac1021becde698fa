//! Layer 3 dispatch. One module per protocol family, each adding its `rx_*` handler to
//! `Engine`. Handlers annotate the envelope and update the session; they never fail.

pub mod cc;
pub mod dedup;
pub mod dispatch;
pub mod gmm;
pub mod mm;
pub mod rr;
pub mod sm;
pub mod ss;

use sigtrace_core::{PduParseErr, RadioMessage};
use sigtrace_pdus::common::fields::location_area_id::LocationAreaId;
use sigtrace_pdus::common::fields::mobile_identity::MobileIdentity;

use crate::collab::CellObserver;
use crate::session::Session;

/// Annotate a message whose body failed a length or value check
pub(crate) fn sanity_failed(msg: &mut RadioMessage, pdu: &str, e: &PduParseErr) {
    tracing::warn!("Failed parsing {}: {:?} {}", pdu, e, msg.dump_hex());
    msg.set_info(format!("FAILED SANITY CHECKS ({})", e.field_tag()));
}

/// Record a mobile identity. A TMSI fills `new_tmsi` for reallocations and `old_tmsi`
/// otherwise; neither is overwritten once set.
pub(crate) fn apply_identity(session: &mut Session, msg: &mut RadioMessage, mi: &MobileIdentity, new_tmsi: bool) {
    match mi {
        MobileIdentity::None => {}
        MobileIdentity::Imsi(digits) => {
            msg.append_info(&format!(", IMSI {}", digits));
            session.imsi = digits.clone();
            session.use_imsi = true;
        }
        MobileIdentity::Imei(digits) => {
            msg.append_info(&format!(", IMEI {}", digits));
            session.imei = digits.clone();
        }
        MobileIdentity::Tmsi(tmsi) => {
            msg.append_info(&format!(", TMSI {}", Session::tmsi_hex(&Some(*tmsi))));
            if new_tmsi {
                if session.new_tmsi.is_none() {
                    session.new_tmsi = Some(*tmsi);
                }
            } else if session.old_tmsi.is_none() {
                session.old_tmsi = Some(*tmsi);
                session.use_tmsi = true;
            }
        }
    }
}

/// Record the serving cell's location area, and the cell identity if known
pub(crate) fn apply_lai(session: &mut Session, cell: &dyn CellObserver, lai: &LocationAreaId, cid: Option<u16>) {
    session.mcc = cell.mcc_from_digits(&lai.digits);
    session.mnc = cell.mnc_from_digits(&lai.digits);
    session.lac = lai.lac;
    if let Some(cid) = cid {
        session.cid = cid;
    }
}
