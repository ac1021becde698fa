use sigtrace_core::{Direction, FILL_OCTET};

/// Largest payload a single LAPDm frame can declare in its 6-bit length field
pub const LAPDM_MAX_PAYLOAD: usize = 63;
/// Payload area of a SACCH block after the 2-octet L1 header
pub const SACCH_PAYLOAD_AREA: usize = 18;
/// Payload area of an SDCCH / FACCH block
pub const DCCH_PAYLOAD_AREA: usize = 20;
/// Octets of the synthetic SACCH L1 header (power level and timing advance)
pub const SACCH_L1_HEADER_LEN: usize = 2;

/// Wrap a bare L3 message into a synthetic LAPDm UI frame, as it would appear on air.
///
/// The payload is truncated to 63 octets and the block is padded with fill octets up to the
/// channel's minimum payload area. SACCH blocks are prefixed with a zeroed L1 header.
/// Returns an empty vector for an empty payload.
pub fn encapsulate(payload: &[u8], dir: Direction, sacch: bool) -> Vec<u8> {
    if payload.is_empty() {
        return Vec::new();
    }
    let payload = &payload[..payload.len().min(LAPDM_MAX_PAYLOAD)];

    let alloc_len = if sacch {
        SACCH_L1_HEADER_LEN + 3 + payload.len().max(SACCH_PAYLOAD_AREA)
    } else {
        3 + payload.len().max(DCCH_PAYLOAD_AREA)
    };

    let mut frame = Vec::with_capacity(alloc_len);
    if sacch {
        frame.extend_from_slice(&[0x00; SACCH_L1_HEADER_LEN]);
    }

    // SAPI 0 address with C/R set on downlink, UI control, length with EL
    frame.push(if dir.is_ul() { 0x01 } else { 0x03 });
    frame.push(0x03);
    frame.push((payload.len() as u8) << 2 | 0x01);

    frame.extend_from_slice(payload);
    frame.resize(alloc_len, FILL_OCTET);
    frame
}
