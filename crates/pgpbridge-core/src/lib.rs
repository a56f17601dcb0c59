//! # pgpbridge-core: Engine interface for the OpenPGP call bridge
//!
//! The bridge forwards decoded requests to a [`PgpEngine`] and reshapes its
//! results into responses. This crate defines that collaborator interface and
//! the fully resolved parameter types it receives.
//!
//! ## Contents
//!
//! - [`PgpEngine`]: one method per bridge operation
//! - [`options`]: `KeyOptions`, `FileHints`, `Entity`, `Options`, `KeyPair`
//! - [`armor`]: OpenPGP ASCII armor with CRC-24 checksums
//! - [`backends::MockEngine`]: NOT SECURE engine for tests and host bring-up
//!
//! ## Example
//!
//! ```rust
//! use pgpbridge_core::{FileHints, KeyOptions, Options, PgpEngine, backends::MockEngine};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = MockEngine;
//! let kp = engine.generate(&Options::default())?;
//!
//! let opts = KeyOptions::default();
//! let encrypted = engine.encrypt("hi", &kp.public_key, None, &FileHints::default(), &opts)?;
//! let decrypted = engine.decrypt(&encrypted, &kp.private_key, "", &opts)?;
//! assert_eq!(decrypted, "hi");
//! # Ok(())
//! # }
//! ```

pub mod armor;
pub mod backends;
pub mod engine;
pub mod error;
pub mod options;

pub use engine::PgpEngine;
pub use error::{ArmorError, ArmorResult, EngineError, EngineResult};
pub use options::{
    CipherAlgorithm, CompressionAlgorithm, Curve, Entity, FileHints, HashAlgorithm, KeyAlgorithm,
    KeyOptions, KeyPair, Options,
};
