//! pgpbridge-ffi: C ABI for the OpenPGP call bridge
//!
//! Hosts load this library and talk to it through a handful of exported
//! symbols (declared in `include/pgpbridge.h`):
//!
//! ```text
//! host ── OpenPGPBridgeCall(name, payload, size) ──▶ pgpbridge::dispatch ──▶ engine
//!      ◀── BytesReturn { message | error } ─────────┘
//! ```
//!
//! The engine is resolved on the first call from `pgpbridge.toml` and
//! `PGPBRIDGE_*` environment variables, unless a Rust host installed one
//! with [`install_engine`] beforehand.
//!
//! ## Safety
//!
//! All `extern "C"` functions are unsafe because they dereference raw pointers.
//! The caller is responsible for ensuring:
//! * String arguments are NUL-terminated and stay valid for the call.
//! * Every returned `BytesReturn` or string is freed exactly once, with the
//!   matching `OpenPGPFree*` function.
//! * Pointers not produced by this library are never passed to a free function.

pub mod boundary;
pub mod config;
pub mod logging;
pub mod state;
pub mod text;

pub use boundary::BytesReturn;
pub use config::BridgeConfig;
pub use state::install_engine;
