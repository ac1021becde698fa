mod common;

use sigtrace_core::{ChannelType, Direction, RadioTechnology, debug};
use common::{EngineTest, default_test_config, i_frame, null_frame};

// LOCATION UPDATING REQUEST, IMSI attach, IMSI 001010123456789
const LU_REQUEST: &str = "05087262f210123457080910101032547698";

fn lu_request() -> Vec<u8> {
    hex::decode(LU_REQUEST).unwrap()
}

#[test]
fn test_two_fragments_dispatched_once() {
    debug::setup_logging_verbose();
    let mut test = EngineTest::new(default_test_config(false));
    let l3 = lu_request();

    test.submit_l2(RadioTechnology::Gsm, ChannelType::Sdcch, Direction::Ul, &i_frame(Direction::Ul, 0, 0, true, &l3[..10]));
    assert_eq!(test.last_info(), "<FRAGMENT 0>");
    assert!(!test.cs().started);

    test.submit_l2(RadioTechnology::Gsm, ChannelType::Sdcch, Direction::Ul, &i_frame(Direction::Ul, 1, 0, false, &l3[10..]));
    assert_eq!(test.last_info(), "LOC UPD REQUEST, LAI 262-1-1234, IMSI 001010123456789");
    assert_eq!(test.message_count(), 2);

    let cs = test.cs();
    assert!(cs.started && cs.locupd && cs.mo);
    assert_eq!(cs.lu_type, 2);
    assert_eq!(cs.imsi, "001010123456789");
    assert_eq!(cs.lu_lac, 0x1234);
}

#[test]
fn test_out_of_sequence_fragment() {
    debug::setup_logging_verbose();
    let mut test = EngineTest::new(default_test_config(false));
    let l3 = lu_request();

    test.submit_l2(RadioTechnology::Gsm, ChannelType::Sdcch, Direction::Ul, &i_frame(Direction::Ul, 0, 0, true, &l3[..10]));
    test.submit_l2(RadioTechnology::Gsm, ChannelType::Sdcch, Direction::Ul, &i_frame(Direction::Ul, 2, 0, false, &l3[10..]));
    assert_eq!(test.last_info(), "<OUT OF SEQUENCE> recv 2 want 1 no out-of-seq 1");
    assert!(!test.cs().started);

    // The expected continuation still completes the message
    test.submit_l2(RadioTechnology::Gsm, ChannelType::Sdcch, Direction::Ul, &i_frame(Direction::Ul, 1, 0, false, &l3[10..]));
    assert!(test.last_info().starts_with("LOC UPD REQUEST"));
}

#[test]
fn test_directions_reassemble_independently() {
    debug::setup_logging_verbose();
    let mut test = EngineTest::new(default_test_config(false));
    let l3 = lu_request();

    test.submit_l2(RadioTechnology::Gsm, ChannelType::Sdcch, Direction::Ul, &i_frame(Direction::Ul, 0, 0, true, &l3[..10]));
    // MM INFORMATION in the other direction must not disturb the uplink buffer
    test.submit_l2(RadioTechnology::Gsm, ChannelType::Sdcch, Direction::Dl, &i_frame(Direction::Dl, 0, 1, false, &[0x05, 0x32]));
    assert_eq!(test.last_info(), "MM INFORMATION");
    test.submit_l2(RadioTechnology::Gsm, ChannelType::Sdcch, Direction::Ul, &i_frame(Direction::Ul, 1, 0, false, &l3[10..]));
    assert!(test.last_info().starts_with("LOC UPD REQUEST"));
}

#[test]
fn test_header_rejections() {
    debug::setup_logging_verbose();
    let mut test = EngineTest::new(default_test_config(false));

    let mut frame = null_frame(Direction::Dl, &[]);
    test.submit_l2(RadioTechnology::Gsm, ChannelType::Sdcch, Direction::Dl, &frame);
    assert_eq!(test.last_info(), "<NULL>");

    // EA bit cleared
    frame[0] = 0x02;
    test.submit_l2(RadioTechnology::Gsm, ChannelType::Sdcch, Direction::Dl, &frame);
    assert_eq!(test.last_info(), "FAILED SANITY CHECKS (LAPDm)");

    // LPD 1
    frame[0] = 0x23;
    test.submit_l2(RadioTechnology::Gsm, ChannelType::Sdcch, Direction::Dl, &frame);
    assert_eq!(test.last_info(), "non-GSM");

    // SAPI 1
    frame[0] = 0x07;
    test.submit_l2(RadioTechnology::Gsm, ChannelType::Sdcch, Direction::Dl, &frame);
    assert_eq!(test.last_info(), "Unknown SAPI: 1");

    // Declared length longer than the block
    let frame = [0x03, 0x03, 0x41, 0x05, 0x32];
    test.submit_l2(RadioTechnology::Gsm, ChannelType::Sdcch, Direction::Dl, &frame);
    assert_eq!(test.last_info(), "FAILED SANITY CHECKS (LAPDm)");

    assert!(!test.cs().started);
}

#[test]
fn test_sacch_system_information() {
    debug::setup_logging_verbose();
    let mut test = EngineTest::new(default_test_config(false));

    let si6 = hex::decode("061e2ee062f210123400ff").unwrap();
    test.submit_l3(ChannelType::Sacch, Direction::Dl, &si6);
    assert_eq!(test.last_info(), "SYSTEM INFO 6");

    let cs = test.cs();
    assert_eq!(cs.cid, 0x2ee0);
    assert_eq!(cs.lac, 0x1234);
    assert_eq!(cs.mcc, 262);
    assert_eq!(cs.mnc, 1);
}

#[test]
fn test_broadcast_skips_pseudo_length() {
    debug::setup_logging_verbose();
    let mut test = EngineTest::new(default_test_config(false));

    test.submit_l3(ChannelType::Bcch, Direction::Dl, &[0x06, 0x21, 0x00, 0x01, 0xf0]);
    assert_eq!(test.last_info(), "PAGING REQ 1");
    assert_eq!(test.message_count(), 1);
}
