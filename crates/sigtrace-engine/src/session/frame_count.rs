/// Per-session frame statistics used for cipher and padding inference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCount {
    /// Downlink frames seen while ciphering was active
    pub enc: u32,
    pub enc_rand: u32,
    /// Encrypted frames without payload
    pub enc_null: u32,
    pub enc_null_rand: u32,
    /// Encrypted SACCH frames carrying payload, mostly system information 5/6
    pub enc_si: u32,
    pub enc_si_rand: u32,
    /// Encrypted frames with a known or guessable plaintext
    pub predict: u32,
    pub unenc: u32,
    pub unenc_rand: u32,
    pub uplink: u32,
}

impl FrameCount {
    /// Number of downlink frames that went through classification
    pub fn classified(&self) -> u32 {
        self.enc + self.unenc
    }
}
