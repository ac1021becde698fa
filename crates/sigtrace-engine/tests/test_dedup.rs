mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{EngineTest, default_test_config};
use sigtrace_core::{ChannelType, Direction, RadioMessage, RadioTechnology, debug};
use sigtrace_engine::{HigherLayerOutput, HigherLayers, SessionStore};

const MM_INFORMATION: &str = "0532";
const CM_SERV_REQ_CALL: &str = "0524 31 03571882 05f401020304";
/// A5/2 with IMEISV requested
const CIPHER_MODE_CMD_IMEISV: &str = "0635 13";

/// Treats every UMTS and LTE payload as a bare NAS message and remembers what it was given
#[derive(Default)]
struct PassThrough {
    seen: Rc<RefCell<Vec<Vec<u8>>>>,
    llc: Option<Vec<u8>>,
}

impl PassThrough {
    fn forward(&self, payload: &[u8]) -> HigherLayerOutput {
        self.seen.borrow_mut().push(payload.to_vec());
        HigherLayerOutput {
            l3: vec![payload.to_vec()],
            llc: self.llc.iter().cloned().collect(),
        }
    }
}

impl HigherLayers for PassThrough {
    fn handle_dcch_ul(&mut self, _store: &mut SessionStore, _msg: &mut RadioMessage, payload: &[u8]) -> HigherLayerOutput {
        self.forward(payload)
    }

    fn handle_dcch_dl(&mut self, _store: &mut SessionStore, _msg: &mut RadioMessage, payload: &[u8]) -> HigherLayerOutput {
        self.forward(payload)
    }

    fn handle_naseps(&mut self, _store: &mut SessionStore, _msg: &mut RadioMessage, payload: &[u8]) -> HigherLayerOutput {
        self.forward(payload)
    }
}

fn l3(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str.replace(' ', "")).unwrap()
}

#[test]
fn test_downlink_seen_on_umts_first() {
    debug::setup_logging_verbose();
    let mut test = EngineTest::with_higher_layers(default_test_config(false), Box::new(PassThrough::default()));

    test.submit_l2(RadioTechnology::Umts, ChannelType::Sdcch, Direction::Dl, &l3(MM_INFORMATION));
    assert_eq!(test.message_count(), 1);
    assert_eq!(test.last_info(), "MM INFORMATION");

    // Same message relayed over GSM
    test.submit_l3(ChannelType::Facch, Direction::Dl, &l3(MM_INFORMATION));
    assert_eq!(test.message_count(), 1);
}

#[test]
fn test_uplink_moves_session_to_umts() {
    debug::setup_logging_verbose();
    let mut test = EngineTest::with_higher_layers(default_test_config(false), Box::new(PassThrough::default()));

    test.submit_l3(ChannelType::Facch, Direction::Ul, &l3(CM_SERV_REQ_CALL));
    assert_eq!(test.message_count(), 1);
    assert!(test.cs().started);

    test.submit_l2(RadioTechnology::Umts, ChannelType::Sdcch, Direction::Ul, &l3(CM_SERV_REQ_CALL));
    assert_eq!(test.message_count(), 1);
    assert_eq!(test.cs().rat, RadioTechnology::Umts);
    assert_eq!(test.cs().serv_req, 1);
    assert!(test.take_sessions().is_empty());
}

#[test]
fn test_relayed_duplicate_leaves_session_untouched() {
    debug::setup_logging_verbose();
    let mut test = EngineTest::with_higher_layers(default_test_config(false), Box::new(PassThrough::default()));

    test.submit_l2(RadioTechnology::Umts, ChannelType::Sdcch, Direction::Dl, &l3(CIPHER_MODE_CMD_IMEISV));
    assert_eq!(test.last_info(), "CIPHER MODE COMMAND, A5/2");
    let before = test.cs().clone();
    assert_eq!(before.cipher, 2);
    assert!(before.cmc_imeisv);
    assert_eq!(before.fc.predict, 1);

    test.submit_l3(ChannelType::Sdcch, Direction::Dl, &l3(CIPHER_MODE_CMD_IMEISV));
    assert_eq!(test.message_count(), 1);

    let after = test.cs();
    assert_eq!(after.cipher, before.cipher);
    assert_eq!(after.cmc_imeisv, before.cmc_imeisv);
    assert_eq!(after.cm_cmd_fn, before.cm_cmd_fn);
    assert_eq!(after.fc.predict, before.fc.predict);
    assert_eq!(after.fc.enc_null, before.fc.enc_null);
    assert_eq!(after.fc.enc_si, before.fc.enc_si);
    assert_eq!(after.fc.unenc, before.fc.unenc);
    // The link layer still counts the relayed frame once
    assert_eq!(after.fc.enc, before.fc.enc + 1);
    assert_eq!(after.rat, RadioTechnology::Umts);
}

#[test]
fn test_same_technology_repeats_are_kept() {
    debug::setup_logging_verbose();
    let mut test = EngineTest::new(default_test_config(false));

    test.submit_hex(Direction::Dl, MM_INFORMATION);
    test.submit_hex(Direction::Dl, MM_INFORMATION);
    assert_eq!(test.message_count(), 2);
}

#[test]
fn test_lte_uplink_trailer_is_stripped() {
    debug::setup_logging_verbose();
    let higher = PassThrough::default();
    let seen = higher.seen.clone();
    let mut test = EngineTest::with_higher_layers(default_test_config(false), Box::new(higher));

    let mut frame = l3(CM_SERV_REQ_CALL);
    frame.extend_from_slice(&[0; 6]);
    test.submit_l2(RadioTechnology::Lte, ChannelType::Sdcch, Direction::Ul, &frame);

    assert_eq!(seen.borrow().last(), Some(&l3(CM_SERV_REQ_CALL)));
    assert_eq!(test.cs().rat, RadioTechnology::Lte);
    assert_eq!(test.ps().rat, RadioTechnology::Lte);
    assert!(test.cs().started);
}

#[test]
fn test_llc_frames_reach_sink() {
    debug::setup_logging_verbose();
    let higher = PassThrough { llc: Some(vec![0x43, 0xc0, 0x01]), ..Default::default() };
    let mut test = EngineTest::with_higher_layers(default_test_config(false), Box::new(higher));

    test.submit_l2(RadioTechnology::Umts, ChannelType::Sdcch, Direction::Dl, &l3(MM_INFORMATION));
    let out = test.out.borrow();
    assert_eq!(out.llc, vec![(vec![0x43, 0xc0, 0x01], Direction::Dl)]);
}
