use chrono::{DateTime, Utc};

use crate::direction::{ARFCN_UPLINK, Direction};
use crate::radio::{ChannelType, Domain, RadioTechnology};
use crate::FrameNumber;

/// One captured unit of radio traffic.
/// Owned by the engine from ingestion until handed to the sink or dropped.
#[derive(Debug, Clone)]
pub struct RadioMessage {
    pub rat: RadioTechnology,
    pub domain: Domain,
    pub channel: ChannelType,
    /// Cleared when the engine decides the message was a reprocessed duplicate
    pub decoded: bool,
    pub frame_number: FrameNumber,
    /// ARFCN word; bit 0x4000 marks uplink
    pub arfcn: u16,
    pub chan_nr: u8,
    pub timestamp: DateTime<Utc>,
    pub payload: Vec<u8>,
    /// Human readable annotation written by the dispatch layer, empty if none
    pub info: String,
}

impl RadioMessage {
    pub fn new(rat: RadioTechnology, domain: Domain, channel: ChannelType, frame_number: FrameNumber, dir: Direction, payload: Vec<u8>) -> Self {
        Self {
            rat,
            domain,
            channel,
            decoded: true,
            frame_number,
            arfcn: if dir.is_ul() { ARFCN_UPLINK } else { 0 },
            chan_nr: channel.default_chan_nr(),
            timestamp: Utc::now(),
            payload,
            info: String::new(),
        }
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::from_arfcn(self.arfcn)
    }

    /// Replace the annotation
    pub fn set_info(&mut self, info: impl Into<String>) {
        self.info = info.into();
    }

    /// Append to the annotation
    pub fn append_info(&mut self, more: &str) {
        self.info.push_str(more);
    }

    pub fn dump_hex(&self) -> String {
        hex::encode(&self.payload)
    }
}

impl core::fmt::Display for RadioMessage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let info = if self.info.is_empty() {
            self.dump_hex()
        } else {
            self.info.clone()
        };
        write!(f, "{} {} {} {} : {}", self.rat, self.domain, self.direction(), self.frame_number, info)
    }
}
