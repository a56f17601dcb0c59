//! # pgpbridge: Call dispatcher for OpenPGP engines
//!
//! Foreign hosts talk to an OpenPGP engine through one entry point:
//! `call(name, payload) -> response`. The name selects an operation from a
//! fixed catalog, the payload is that operation's protobuf request, and the
//! response carries either the result or the engine's error text.
//!
//! ## Call flow
//!
//! ```text
//! name ──► Operation ──► DecodeRequest ──► PgpEngine ──► encode_response
//!   │                        │
//!   └─ NotImplemented        └─ Decode (corrupt buffer)
//! ```
//!
//! Only the two failures on the bottom row are returned as [`BridgeError`].
//! Engine failures travel inside the response.
//!
//! ## Example
//!
//! ```rust
//! use pgpbridge::{Bridge, decode_response, proto};
//! use pgpbridge_core::{KeyPair, backends::MockEngine};
//! use prost::Message;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bridge = Bridge::new(MockEngine);
//!
//! let request = proto::GenerateRequest::default().encode_to_vec();
//! let response = bridge.call("generate", &request)?;
//! let pair = decode_response::<KeyPair>(&response)?.map_err(|e| e.to_string())?;
//! assert!(pair.public_key.starts_with("-----BEGIN PGP PUBLIC KEY BLOCK-----"));
//!
//! assert!(bridge.call("not-a-real-op", &[]).is_err());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod dispatch;
pub mod error;
pub mod operation;
pub mod request;
pub mod response;

pub use client::{Client, ClientError, ClientResult};
pub use dispatch::{Bridge, dispatch};
pub use error::{BridgeError, BridgeResult};
pub use operation::{Operation, ResponseShape};
pub use pgpbridge_proto::proto;
pub use request::DecodeRequest;
pub use response::{ResponseValue, decode_response, encode_response};
