use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::Deserialize;

const CONFIG_FILE: &str = "pgpbridge.toml";
const ENV_PREFIX: &str = "PGPBRIDGE_";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BridgeConfig {
    /// Engine used when the host has not installed one
    #[serde(default = "default_engine")]
    pub engine: String, // "mock"

    /// `EnvFilter` directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            log_filter: default_log_filter(),
        }
    }
}

fn default_engine() -> String {
    "mock".into()
}
fn default_log_filter() -> String {
    "pgpbridge=warn".into()
}

impl BridgeConfig {
    /// `pgpbridge.toml` in the working directory, then `PGPBRIDGE_*` variables
    pub fn load() -> anyhow::Result<Self> {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file(CONFIG_FILE))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    pub fn from_figment(figment: Figment) -> anyhow::Result<Self> {
        let config: BridgeConfig = figment.extract()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BridgeConfig::from_figment(Figment::new()).unwrap();
        assert_eq!(config, BridgeConfig::default());
        assert_eq!(config.engine, "mock");
        assert_eq!(config.log_filter, "pgpbridge=warn");
    }

    #[test]
    fn test_toml_overrides() {
        let figment = Figment::new().merge(Toml::string(
            r#"
            engine = "MOCK"
            log_filter = "pgpbridge=debug"
            "#,
        ));
        let config = BridgeConfig::from_figment(figment).unwrap();
        assert_eq!(config.engine, "MOCK");
        assert_eq!(config.log_filter, "pgpbridge=debug");
    }

    #[test]
    fn test_later_providers_win() {
        let figment = Figment::new()
            .merge(Toml::string(r#"log_filter = "info""#))
            .merge(Toml::string(r#"log_filter = "trace""#));
        let config = BridgeConfig::from_figment(figment).unwrap();
        assert_eq!(config.log_filter, "trace");
        assert_eq!(config.engine, "mock");
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let figment = Figment::new().merge(Toml::string("engine = [1, 2]"));
        assert!(BridgeConfig::from_figment(figment).is_err());
    }
}
