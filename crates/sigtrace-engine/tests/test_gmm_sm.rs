mod common;

use std::net::Ipv4Addr;

use common::{EngineTest, default_test_config};
use sigtrace_core::{Direction, Domain, debug};

const ATTACH_REQUEST: &str = "0801 02e5e0 11 0a00 05f4c0ffee01 62f210123401";
const ATTACH_ACCEPT: &str = "0802 0949 01 62f210123405 19aabbcc 1805f4c0ffee02";

#[test]
fn test_attach_on_packet_session() {
    debug::setup_logging_verbose();
    let mut test = EngineTest::new(default_test_config(true));

    test.submit_hex(Direction::Ul, ATTACH_REQUEST);
    assert_eq!(test.last_info(), "ATTACH REQUEST, TMSI c0ffee01");
    assert_eq!(test.last_domain(), Some(Domain::PacketSwitched));

    test.submit_hex(Direction::Dl, ATTACH_ACCEPT);
    assert_eq!(test.last_info(), "ATTACH ACCEPT, TMSI c0ffee02");

    let ps = test.ps();
    assert!(ps.attach && ps.started);
    assert_eq!(ps.att_acc, 1);
    assert_eq!(ps.lu_type, 1);
    assert_eq!(ps.lu_lac, 0x1234);
    assert_eq!(ps.lac, 0x1234);
    assert_eq!(ps.old_tmsi, Some([0xc0, 0xff, 0xee, 0x01]));
    assert_eq!(ps.new_tmsi, Some([0xc0, 0xff, 0xee, 0x02]));
    assert!(ps.first_fn > 0);

    // The circuit-switched side saw nothing
    assert!(!test.cs().started);

    test.finish();
    let sessions = test.take_sessions();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].domain, Domain::PacketSwitched);
}

#[test]
fn test_gmm_rejected_without_packet_tracking() {
    debug::setup_logging_verbose();
    let mut test = EngineTest::new(default_test_config(false));

    test.submit_hex(Direction::Ul, ATTACH_REQUEST);
    assert_eq!(test.last_info(), "FAILED SANITY CHECKS (GMM_IN_CS)");
    assert_eq!(test.last_domain(), Some(Domain::CircuitSwitched));
    assert!(!test.cs().attach);

    test.submit_hex(Direction::Dl, "0a02 0303123456022b0601210a01020327");
    assert_eq!(test.last_info(), "FAILED SANITY CHECKS (SM_IN_CS)");
}

#[test]
fn test_routing_area_update_closes_previous() {
    debug::setup_logging_verbose();
    let mut test = EngineTest::new(default_test_config(true));

    test.submit_hex(Direction::Ul, ATTACH_REQUEST);
    test.submit_hex(Direction::Ul, "0808 01 62f210123401");
    assert_eq!(test.last_info(), "RA UPDATE REQUEST");

    let sessions = test.take_sessions();
    assert_eq!(sessions.len(), 1);
    assert!(sessions[0].attach);

    let ps = test.ps();
    assert_eq!(ps.raupd, 1);
    assert!(ps.mo && !ps.attach);
}

#[test]
fn test_auth_and_ciphering() {
    debug::setup_logging_verbose();
    let mut test = EngineTest::new(default_test_config(true));

    test.submit_hex(Direction::Ul, ATTACH_REQUEST);
    test.submit_hex(Direction::Dl, "0812 13 00");
    assert_eq!(test.last_info(), "AUTH AND CIPHER REQUEST, GEA/3");
    assert_eq!(test.ps().cipher, 3);
    assert!(test.ps().cmc_imeisv);
    assert_eq!(test.ps().auth, 1);

    test.submit_hex(Direction::Ul, "0813 0022aabbccdd23093353390123456789f0");
    assert_eq!(test.last_info(), "AUTH AND CIPHER RESPONSE, IMEI 33593103254769");
    assert_eq!(test.ps().imei, "33593103254769");
}

#[test]
fn test_pdp_context_activation() {
    debug::setup_logging_verbose();
    let mut test = EngineTest::new(default_test_config(true));

    test.submit_hex(Direction::Ul, "0a01 0000");
    assert_eq!(test.last_info(), "ACTIVATE PDP REQUEST");
    assert!(test.ps().pdp_activate);

    test.submit_hex(Direction::Dl, "0a02 0303123456022b0601210a01020327");
    assert_eq!(test.last_info(), "ACTIVATE PDP ACCEPT");
    assert_eq!(test.last_domain(), Some(Domain::PacketSwitched));
    assert_eq!(test.ps().pdp_ip, Some(Ipv4Addr::new(10, 1, 2, 3)));
}

#[test]
fn test_unknown_gmm_and_sm() {
    debug::setup_logging_verbose();
    let mut test = EngineTest::new(default_test_config(true));

    test.submit_hex(Direction::Ul, "083f");
    assert_eq!(test.last_info(), "UNKNOWN GMM (3f)");
    test.submit_hex(Direction::Ul, "0a3f");
    assert_eq!(test.last_info(), "UNKNOWN SM (3f)");
    assert!(test.ps().unknown);
    assert!(!test.cs().unknown);
}
