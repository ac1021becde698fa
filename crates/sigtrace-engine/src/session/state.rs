use std::fmt;
use std::net::Ipv4Addr;

use chrono::{DateTime, Utc};
use sigtrace_core::{ChannelType, Domain, FrameNumber, GSM_MAX_FN, RadioTechnology};

use crate::lapdm::ChannelBuffers;
use crate::session::{Assignment, FrameCount, Lookback, PaddingHistories};

/// Timestamp and channel of the last message delivered for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastMessage {
    pub timestamp: DateTime<Utc>,
    pub channel: ChannelType,
}

/// Frame number to record for an event; GSM_MAX_FN when the capture carried none
#[inline]
pub fn fn_or_max(fnr: FrameNumber) -> FrameNumber {
    if fnr != 0 { fnr } else { GSM_MAX_FN }
}

/// Everything inferred about one signalling transaction of one mobile.
///
/// The first block of fields survives `reset`; everything below `started` describes the
/// current transaction only. Tri-state fields use -1 for reject, 0 for not seen, 1 (or 2) for
/// progress.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: u32,
    pub domain: Domain,
    /// Technology the transaction is currently running on
    pub rat: RadioTechnology,
    pub mcc: u16,
    pub mnc: u16,
    pub lac: u16,
    pub cid: u16,
    /// Cell allocation, resolved by the cell observer and used for hopping assignments
    pub cell_arfcns: Vec<u16>,
    pub channels: ChannelBuffers,
    pub lookback: Lookback,
    pub padding: PaddingHistories,
    pub last_msg: Option<LastMessage>,
    /// Set while a message for this session's domain is being processed
    pub in_flight: bool,

    pub started: bool,
    pub closed: bool,
    pub first_fn: FrameNumber,
    pub last_fn: FrameNumber,
    pub timestamp: Option<DateTime<Utc>>,

    pub mo: bool,
    pub mt: bool,

    // Mobility management
    pub locupd: bool,
    pub lu_acc: bool,
    pub lu_reject: bool,
    pub lu_rej_cause: u8,
    pub lu_type: u8,
    pub lu_mcc: u16,
    pub lu_mnc: u16,
    pub lu_lac: u16,
    pub detach: bool,
    pub raupd: i8,
    pub attach: bool,
    pub att_acc: i8,
    pub serv_req: i8,
    pub pag_mi: u8,
    pub tmsi_realloc: bool,
    pub abort: bool,
    pub iden_imsi_bc: bool,
    pub iden_imsi_ac: bool,
    pub iden_imei_bc: bool,
    pub iden_imei_ac: bool,

    // Services
    pub call: bool,
    pub call_presence: bool,
    pub sms: bool,
    pub sms_presence: bool,
    pub ssa: bool,
    pub pdp_activate: bool,
    pub pdp_ip: Option<Ipv4Addr>,
    pub unknown: bool,

    // Radio resource
    pub release: bool,
    pub rr_cause: u8,
    pub have_gprs: bool,
    pub assignment: bool,
    pub assign_complete: bool,
    pub handover: bool,
    pub forced_ho: bool,
    /// 1 after an assignment, 2 after a handover
    pub use_jump: u8,
    pub ga: Assignment,

    // Identities
    pub imsi: String,
    pub imei: String,
    pub msisdn: String,
    pub old_tmsi: Option<[u8; 4]>,
    pub new_tmsi: Option<[u8; 4]>,
    pub use_imsi: bool,
    pub use_tmsi: bool,

    // Security
    /// A5 (or GEA) version in use, 0 for none
    pub cipher: u8,
    /// Cipher capability bitmask advertised by the mobile
    pub ms_cipher_mask: u8,
    /// -1 after a cipher mode command, 0 once its completion arrived, 1 if a completion arrived unasked
    pub cipher_missing: i8,
    pub cmc_imeisv: bool,
    pub cm_cmd_fn: FrameNumber,
    pub cm_comp_first_fn: FrameNumber,
    pub cm_comp_last_fn: FrameNumber,
    pub cm_comp_count: u32,
    /// 0 none, 1 GSM authentication, 2 UMTS authentication
    pub auth: u8,
    pub auth_req_fn: FrameNumber,
    pub auth_resp_fn: FrameNumber,
    /// Ciphering key sequence number announced at transaction start
    pub initial_seq: u8,
    /// Session key, if one was recovered
    pub key: Option<[u8; 8]>,
    /// False once ciphering started without a known key
    pub decoded: bool,

    pub fc: FrameCount,
}

impl Session {
    pub fn new(id: u32, domain: Domain) -> Self {
        Session {
            id,
            domain,
            rat: RadioTechnology::Gsm,
            mcc: 0,
            mnc: 0,
            lac: 0,
            cid: 0,
            cell_arfcns: Vec::new(),
            channels: ChannelBuffers::default(),
            lookback: Lookback::default(),
            padding: PaddingHistories::default(),
            last_msg: None,
            in_flight: false,
            started: false,
            closed: false,
            first_fn: 0,
            last_fn: 0,
            timestamp: None,
            mo: false,
            mt: false,
            locupd: false,
            lu_acc: false,
            lu_reject: false,
            lu_rej_cause: 0,
            lu_type: 0,
            lu_mcc: 0,
            lu_mnc: 0,
            lu_lac: 0,
            detach: false,
            raupd: 0,
            attach: false,
            att_acc: 0,
            serv_req: 0,
            pag_mi: 0,
            tmsi_realloc: false,
            abort: false,
            iden_imsi_bc: false,
            iden_imsi_ac: false,
            iden_imei_bc: false,
            iden_imei_ac: false,
            call: false,
            call_presence: false,
            sms: false,
            sms_presence: false,
            ssa: false,
            pdp_activate: false,
            pdp_ip: None,
            unknown: false,
            release: false,
            rr_cause: 0,
            have_gprs: false,
            assignment: false,
            assign_complete: false,
            handover: false,
            forced_ho: false,
            use_jump: 0,
            ga: Assignment::default(),
            imsi: String::new(),
            imei: String::new(),
            msisdn: String::new(),
            old_tmsi: None,
            new_tmsi: None,
            use_imsi: false,
            use_tmsi: false,
            cipher: 0,
            ms_cipher_mask: 0,
            cipher_missing: 0,
            cmc_imeisv: false,
            cm_cmd_fn: 0,
            cm_comp_first_fn: 0,
            cm_comp_last_fn: 0,
            cm_comp_count: 0,
            auth: 0,
            auth_req_fn: 0,
            auth_resp_fn: 0,
            initial_seq: 0,
            key: None,
            decoded: true,
            fc: FrameCount::default(),
        }
    }

    /// True if the current transaction recorded security or identity state. Frame counters
    /// alone do not count, as the frame that triggers a reset has already been counted.
    pub fn has_observations(&self) -> bool {
        self.started
            || self.cipher != 0
            || self.auth != 0
            || !self.imsi.is_empty()
            || self.old_tmsi.is_some()
            || self.new_tmsi.is_some()
    }

    /// End the current transaction and start a clean one.
    ///
    /// Technology, cell location, reassembly buffers, duplicate lookback and padding histories
    /// are preserved. Subscriber identity is cleared with the rest of the transaction.
    /// Returns the finished transaction if it should be emitted: always when it had started,
    /// and on a forced reset also when it recorded anything at all.
    pub fn reset(&mut self, forced: bool) -> Option<Session> {
        let emit = self.started || (forced && self.has_observations());

        let fresh = Session {
            rat: self.rat,
            mcc: self.mcc,
            mnc: self.mnc,
            lac: self.lac,
            cid: self.cid,
            cell_arfcns: std::mem::take(&mut self.cell_arfcns),
            channels: std::mem::take(&mut self.channels),
            lookback: std::mem::take(&mut self.lookback),
            padding: std::mem::take(&mut self.padding),
            last_msg: self.last_msg,
            in_flight: self.in_flight,
            ..Session::new(self.id, self.domain)
        };
        let finished = std::mem::replace(self, fresh);

        tracing::debug!(
            "reset {} session {} (forced: {}, emit: {})",
            finished.domain,
            finished.id,
            forced,
            emit
        );
        emit.then_some(finished)
    }

    /// Record the frame number of a message that belongs to this transaction
    pub fn update_timestamps(&mut self, fnr: FrameNumber, timestamp: DateTime<Utc>) {
        if self.first_fn == 0 {
            self.first_fn = fn_or_max(fnr);
        }
        self.last_fn = fnr;
        if self.timestamp.is_none() {
            self.timestamp = Some(timestamp);
        }
    }

    pub fn tmsi_hex(tmsi: &Option<[u8; 4]>) -> String {
        match tmsi {
            Some(t) => format!("{:02x}{:02x}{:02x}{:02x}", t[0], t[1], t[2], t[3]),
            None => "-".to_string(),
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "session {} {} {} {}-{}-{:04x}/{}",
            self.id, self.domain, self.rat, self.mcc, self.mnc, self.lac, self.cid
        )?;
        if !self.imsi.is_empty() {
            write!(f, " imsi={}", self.imsi)?;
        }
        if !self.imei.is_empty() {
            write!(f, " imei={}", self.imei)?;
        }
        if self.old_tmsi.is_some() || self.new_tmsi.is_some() {
            write!(f, " tmsi={}->{}", Self::tmsi_hex(&self.old_tmsi), Self::tmsi_hex(&self.new_tmsi))?;
        }
        if !self.msisdn.is_empty() {
            write!(f, " msisdn={}", self.msisdn)?;
        }
        write!(
            f,
            " mo={} mt={} lu={} call={} sms={} auth={} cipher={} fn={}..{} enc={} unenc={} predict={}",
            self.mo as u8,
            self.mt as u8,
            self.locupd as u8,
            self.call as u8,
            self.sms as u8,
            self.auth,
            self.cipher,
            self.first_fn,
            self.last_fn,
            self.fc.enc,
            self.fc.unenc,
            self.fc.predict
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_keeps_persistent_fields() {
        let mut s = Session::new(7, Domain::CircuitSwitched);
        s.rat = RadioTechnology::Umts;
        s.mcc = 262;
        s.mnc = 1;
        s.lac = 0x1234;
        s.cid = 99;
        s.lookback.store(&[0x05, 0x08], RadioTechnology::Umts);
        s.started = true;
        s.imsi = "262011234567890".to_string();
        s.new_tmsi = Some([0x01, 0x02, 0x03, 0x04]);
        s.msisdn = "4930123456".to_string();
        s.cipher = 3;
        s.fc.enc = 10;

        let finished = s.reset(true).unwrap();
        assert_eq!(finished.imsi, "262011234567890");
        assert_eq!(finished.fc.enc, 10);

        assert_eq!(s.id, 7);
        assert_eq!(s.rat, RadioTechnology::Umts);
        assert_eq!((s.mcc, s.mnc, s.lac, s.cid), (262, 1, 0x1234, 99));
        assert_eq!(s.lookback.data(), &[0x05, 0x08]);
        assert!(!s.started);
        // Subscriber identity belongs to the finished transaction
        assert!(s.imsi.is_empty());
        assert_eq!(s.new_tmsi, None);
        assert!(s.msisdn.is_empty());
        assert_eq!(s.cipher, 0);
        assert_eq!(s.fc, FrameCount::default());
    }

    #[test]
    fn test_reset_emission() {
        let mut s = Session::new(0, Domain::CircuitSwitched);
        assert!(s.reset(true).is_none());

        // Counters alone are not worth reporting
        s.fc.unenc = 1;
        assert!(s.reset(true).is_none());

        s.auth = 1;
        assert!(s.reset(false).is_none());
        s.auth = 1;
        assert!(s.reset(true).is_some());

        s.started = true;
        assert!(s.reset(false).is_some());
    }

    #[test]
    fn test_fn_or_max() {
        assert_eq!(fn_or_max(0), GSM_MAX_FN);
        assert_eq!(fn_or_max(1234), 1234);
    }
}
