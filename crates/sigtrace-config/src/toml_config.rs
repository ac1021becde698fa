use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use toml::Value;

use super::engine_config::{EngineConfig, PaddingClassifierKind, SharedConfig};

/// Build `SharedConfig` from a TOML configuration file
pub fn from_toml_str(toml_str: &str) -> Result<SharedConfig, Box<dyn std::error::Error>> {
    let root: TomlConfigRoot = toml::from_str(toml_str)?;

    // Various sanity checks
    let expected_config_version = "0.1";
    if !root.config_version.eq(expected_config_version) {
        return Err(format!(
            "Unrecognized config_version: {}, expect {}",
            root.config_version, expected_config_version
        )
        .into());
    }
    if !root.extra.is_empty() {
        return Err(format!("Unrecognized top-level fields: {:?}", sorted_keys(&root.extra)).into());
    }
    if let Some(ref engine) = root.engine {
        if !engine.extra.is_empty() {
            return Err(format!("Unrecognized fields: engine::{:?}", sorted_keys(&engine.extra)).into());
        }
    }

    // Build config from required and optional values
    let mut cfg = EngineConfig {
        debug_log: root.debug_log,
        ..Default::default()
    };

    if let Some(engine) = root.engine {
        apply_engine_patch(&mut cfg, engine);
    }

    // Surface validation problems as errors instead of the panic in SharedConfig::from_config
    cfg.validate().map_err(|e| e.to_string())?;

    Ok(SharedConfig::from_config(cfg))
}

/// Build `SharedConfig` from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<SharedConfig, Box<dyn std::error::Error>> {
    let mut contents = String::new();
    let mut reader = BufReader::new(reader);
    reader.read_to_string(&mut contents)?;
    from_toml_str(&contents)
}

/// Build `SharedConfig` from a file path.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<SharedConfig, Box<dyn std::error::Error>> {
    let f = File::open(path)?;
    let r = BufReader::new(f);
    let cfg = from_reader(r)?;
    Ok(cfg)
}

fn apply_engine_patch(dst: &mut EngineConfig, src: EngineDto) {
    if let Some(v) = src.auto_reset {
        dst.auto_reset = v;
    }
    if let Some(v) = src.msg_verbose {
        dst.msg_verbose = v;
    }
    if let Some(v) = src.padding_classifier {
        dst.padding_classifier = v;
    }
}

fn sorted_keys(map: &HashMap<String, Value>) -> Vec<&str> {
    let mut v: Vec<&str> = map.keys().map(|s| s.as_str()).collect();
    v.sort_unstable();
    v
}

/// ----------------------- DTOs for input shape -----------------------

#[derive(Deserialize)]
struct TomlConfigRoot {
    config_version: String,
    debug_log: Option<String>,

    #[serde(default)]
    engine: Option<EngineDto>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Default, Deserialize)]
struct EngineDto {
    pub auto_reset: Option<bool>,
    pub msg_verbose: Option<u8>,
    pub padding_classifier: Option<PaddingClassifierKind>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let toml_str = r#"
            config_version = "0.1"
            debug_log = "/tmp/sigtrace.log"

            [engine]
            auto_reset = true
            msg_verbose = 1
            padding_classifier = "Disabled"
        "#;
        let cfg = from_toml_str(toml_str).expect("valid config").config();
        assert!(cfg.auto_reset);
        assert_eq!(cfg.msg_verbose, 1);
        assert_eq!(cfg.debug_log.as_deref(), Some("/tmp/sigtrace.log"));
        assert_eq!(cfg.padding_classifier, PaddingClassifierKind::Disabled);
        assert_eq!(cfg.active_domains(), 2);
    }

    #[test]
    fn test_defaults_without_engine_table() {
        let cfg = from_toml_str("config_version = \"0.1\"").expect("valid config").config();
        assert!(!cfg.auto_reset);
        assert_eq!(cfg.padding_classifier, PaddingClassifierKind::FillPattern);
        assert_eq!(cfg.active_domains(), 1);
    }

    #[test]
    fn test_rejects_unknown_fields_and_versions() {
        assert!(from_toml_str("config_version = \"0.5\"").is_err());
        assert!(from_toml_str("config_version = \"0.1\"\nstack_mode = \"Bs\"").is_err());
        assert!(from_toml_str("config_version = \"0.1\"\n[engine]\nauto_rest = true").is_err());
        assert!(from_toml_str("config_version = \"0.1\"\n[engine]\nmsg_verbose = 7").is_err());
    }
}
