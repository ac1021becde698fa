use std::net::Ipv4Addr;

use sigtrace_core::expect_value;
use sigtrace_core::pdu_parse_error::PduParseErr;

/// IEI of the optional PDP address
const IEI_PDP_ADDRESS: u8 = 0x2b;
/// PDP address length for an IETF IPv4 address (organisation + type + 4 octets)
const PDP_ADDR_IPV4_LEN: u8 = 6;

/// Representation of the ACTIVATE PDP CONTEXT ACCEPT message (TS 24.008 clause 9.5.2).
/// Only the assigned IPv4 address is retained.
/// Response to: ACTIVATE PDP CONTEXT REQUEST
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivatePdpContextAccept {
    pub pdp_address: Option<Ipv4Addr>,
}

impl ActivatePdpContextAccept {
    /// Parse from the message body following the 2-octet L3 header
    pub fn from_bytes(data: &[u8]) -> Result<Self, PduParseErr> {
        let len = data.len();

        // Skip LLC SAPI, then QoS LV and radio priority
        let qos_len = *data.get(1).ok_or(PduParseErr::BufferEnded { field: Some("QOS_LEN_OVER") })? as usize;
        let mut offset = 1 + 1 + qos_len + 1;
        if offset >= len {
            return Err(PduParseErr::BufferEnded { field: Some("QOS_LEN_OVER") });
        }

        expect_value!(data[offset], IEI_PDP_ADDRESS, "NO_PDP_ADDR")?;
        offset += 1;

        let pdp_address = if offset + 7 < len && data[offset] == PDP_ADDR_IPV4_LEN {
            let a = &data[offset + 3..offset + 7];
            Some(Ipv4Addr::new(a[0], a[1], a[2], a[3]))
        } else {
            None
        };

        Ok(ActivatePdpContextAccept { pdp_address })
    }
}
