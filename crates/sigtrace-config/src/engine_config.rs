use serde::Deserialize;
use std::sync::Arc;

/// Which padding randomness primitive the engine installs by default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum PaddingClassifierKind {
    /// Fill-pattern and repetition heuristic
    FillPattern,
    /// Never reports random padding; every encrypted frame counts as predictable
    Disabled,
}

impl Default for PaddingClassifierKind {
    fn default() -> Self {
        PaddingClassifierKind::FillPattern
    }
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Track circuit-switched and packet-switched transactions in separate sessions.
    /// When disabled, GPRS mobility/session management is rejected as cross-domain.
    pub auto_reset: bool,

    /// 0: silent, 1: log every delivered message, 2: also log channel routing and link frames
    pub msg_verbose: u8,

    pub debug_log: Option<String>,

    pub padding_classifier: PaddingClassifierKind,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            auto_reset: false,
            msg_verbose: 0,
            debug_log: None,
            padding_classifier: PaddingClassifierKind::default(),
        }
    }
}

impl EngineConfig {
    pub fn new(auto_reset: bool) -> Self {
        EngineConfig {
            auto_reset,
            ..Default::default()
        }
    }

    /// Validate that all configuration fields hold sensible values.
    pub fn validate(&self) -> Result<(), &str> {
        if self.msg_verbose > 2 {
            return Err("msg_verbose must be 0, 1 or 2");
        }
        if let Some(ref path) = self.debug_log {
            if path.trim().is_empty() {
                return Err("debug_log must not be an empty path");
            }
        }
        Ok(())
    }

    /// Number of session slots the engine actively drives
    #[inline]
    pub fn active_domains(&self) -> usize {
        if self.auto_reset { 2 } else { 1 }
    }
}

/// Shared, immutable engine configuration. Cheap to clone.
#[derive(Clone, Debug)]
pub struct SharedConfig {
    cfg: Arc<EngineConfig>,
}

impl SharedConfig {
    pub fn new(auto_reset: bool) -> Self {
        Self::from_config(EngineConfig::new(auto_reset))
    }

    pub fn from_config(cfg: EngineConfig) -> Self {
        // Check config for validity before returning the SharedConfig object
        match cfg.validate() {
            Ok(_) => {}
            Err(e) => panic!("Invalid engine configuration: {}", e),
        }

        Self { cfg: Arc::new(cfg) }
    }

    /// Access immutable config.
    pub fn config(&self) -> Arc<EngineConfig> {
        Arc::clone(&self.cfg)
    }
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self::from_config(EngineConfig::default())
    }
}
