use sigtrace_core::RadioTechnology;

/// Longest prefix of a message kept for duplicate detection
pub const LOOKBACK_LEN: usize = 256;

/// The previously dispatched L3 message and the technology it arrived on
#[derive(Debug, Clone, Default)]
pub struct Lookback {
    data: Vec<u8>,
    pub rat: RadioTechnology,
}

impl Lookback {
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Replace the stored message, truncating to LOOKBACK_LEN
    pub fn store(&mut self, l3: &[u8], rat: RadioTechnology) {
        let len = l3.len().min(LOOKBACK_LEN);
        self.data.clear();
        self.data.extend_from_slice(&l3[..len]);
        self.rat = rat;
    }
}
