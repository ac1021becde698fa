use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use sigtrace_pdus::common::fields::location_area_id;
use sigtrace_pdus::rr::enums::rr_msg_type::RrMsgType;

use crate::session::Session;

/// Receives broadcast and paging traffic of the serving cell.
/// Every method has a no-op default so observers only implement what they track.
pub trait CellObserver {
    fn mcc_from_digits(&self, digits: &[u8; 3]) -> u16 {
        location_area_id::mcc_from_digits(digits)
    }

    fn mnc_from_digits(&self, digits: &[u8; 3]) -> u16 {
        location_area_id::mnc_from_digits(digits)
    }

    /// Any system information message, full L3 including the header
    fn handle_sysinfo(&mut self, _session: &mut Session, _l3: &[u8]) {}

    fn handle_paging1(&mut self, _l3: &[u8]) {}

    fn handle_paging2(&mut self, _l3: &[u8]) {}

    fn handle_paging3(&mut self) {}

    /// Called when a circuit-switched transaction has been closed
    fn paging_reset(&mut self) {}
}

pub struct NullCellObserver;

impl CellObserver for NullCellObserver {}

/// Shared observer, so the owner can still read it after installing it on an engine
impl<T: CellObserver> CellObserver for Rc<RefCell<T>> {
    fn mcc_from_digits(&self, digits: &[u8; 3]) -> u16 {
        self.borrow().mcc_from_digits(digits)
    }

    fn mnc_from_digits(&self, digits: &[u8; 3]) -> u16 {
        self.borrow().mnc_from_digits(digits)
    }

    fn handle_sysinfo(&mut self, session: &mut Session, l3: &[u8]) {
        self.borrow_mut().handle_sysinfo(session, l3);
    }

    fn handle_paging1(&mut self, l3: &[u8]) {
        self.borrow_mut().handle_paging1(l3);
    }

    fn handle_paging2(&mut self, l3: &[u8]) {
        self.borrow_mut().handle_paging2(l3);
    }

    fn handle_paging3(&mut self) {
        self.borrow_mut().handle_paging3();
    }

    fn paging_reset(&mut self) {
        self.borrow_mut().paging_reset();
    }
}

/// Counts broadcast traffic per message type. Paging counters cover the current
/// transaction only and are cleared on `paging_reset`.
#[derive(Debug, Default)]
pub struct CellTally {
    pub sysinfo: BTreeMap<String, u32>,
    pub paging: [u32; 3],
    pub transactions: u32,
}

impl CellObserver for CellTally {
    fn handle_sysinfo(&mut self, _session: &mut Session, l3: &[u8]) {
        let Some(&raw) = l3.get(1) else {
            return;
        };
        let label = match RrMsgType::try_from(raw) {
            Ok(t) => t.to_string(),
            Err(_) => format!("SYSTEM INFO ({:02x})", raw),
        };
        *self.sysinfo.entry(label).or_insert(0) += 1;
    }

    fn handle_paging1(&mut self, _l3: &[u8]) {
        self.paging[0] += 1;
    }

    fn handle_paging2(&mut self, _l3: &[u8]) {
        self.paging[1] += 1;
    }

    fn handle_paging3(&mut self) {
        self.paging[2] += 1;
    }

    fn paging_reset(&mut self) {
        self.paging = [0; 3];
        self.transactions += 1;
    }
}
