//! Process-wide bridge state
//!
//! Configuration is read and logging installed on the first boundary call.
//! The engine handle is resolved once and then shared read-only.

use crate::config::BridgeConfig;
use crate::logging;
use anyhow::anyhow;
use pgpbridge_core::PgpEngine;
use pgpbridge_core::backends::MockEngine;
use std::sync::{Arc, OnceLock};

static CONFIG: OnceLock<BridgeConfig> = OnceLock::new();
static ENGINE: OnceLock<Arc<dyn PgpEngine>> = OnceLock::new();

/// Configuration for this process, loaded on first use
pub fn config() -> &'static BridgeConfig {
    CONFIG.get_or_init(|| match BridgeConfig::load() {
        Ok(config) => {
            logging::init(&config.log_filter);
            config
        }
        Err(e) => {
            let config = BridgeConfig::default();
            logging::init(&config.log_filter);
            tracing::warn!("Failed to load configuration, using defaults: {e}");
            config
        }
    })
}

/// Install the engine used by every later boundary call
///
/// Fails once an engine is in place, whether installed or resolved from
/// configuration by an earlier call.
pub fn install_engine(engine: Arc<dyn PgpEngine>) -> anyhow::Result<()> {
    config();
    let name = engine.name();
    ENGINE
        .set(engine)
        .map_err(|_| anyhow!("An engine is already installed"))?;
    tracing::info!("Installed OpenPGP engine: {name}");
    Ok(())
}

/// The installed engine, or the configured one
pub fn engine() -> anyhow::Result<&'static Arc<dyn PgpEngine>> {
    if let Some(engine) = ENGINE.get() {
        return Ok(engine);
    }
    let engine = engine_from_name(&config().engine)?;
    Ok(ENGINE.get_or_init(|| engine))
}

pub fn engine_from_name(name: &str) -> anyhow::Result<Arc<dyn PgpEngine>> {
    match name.to_lowercase().as_str() {
        "mock" | "test" => {
            tracing::warn!("Using mock OpenPGP engine - NOT FOR PRODUCTION USE");
            Ok(Arc::new(MockEngine))
        }
        other => anyhow::bail!("Unknown engine '{}'. Valid options: 'mock'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_from_name() {
        assert!(engine_from_name("mock").is_ok());
        assert!(engine_from_name("MOCK").is_ok());

        let err = engine_from_name("gnupg").err().unwrap();
        assert!(err.to_string().contains("Unknown engine 'gnupg'"));
    }

    #[test]
    fn test_engine_is_resolved_once() {
        let first = engine().unwrap();
        let second = engine().unwrap();
        assert!(Arc::ptr_eq(first, second));
    }

    #[test]
    fn test_second_install_fails() {
        let _ = install_engine(Arc::new(MockEngine));
        assert!(install_engine(Arc::new(MockEngine)).is_err());
    }
}
