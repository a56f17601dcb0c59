//! pgpbridge-proto: Wire schema for the OpenPGP call bridge
//!
//! One protobuf request message per operation and one response message per
//! response shape. Response messages carry a `oneof outcome` so that exactly
//! one of `output` or `error` is ever set, and a `false`/`0` output is still
//! distinguishable from "absent".
//!
//! | Shape    | Response message  | Operations                                  |
//! |----------|-------------------|---------------------------------------------|
//! | text     | `StringResponse`  | decrypt, encrypt, sign, armorEncode, ...    |
//! | bytes    | `BytesResponse`   | `*Bytes` variants except verifyBytes        |
//! | integer  | `IntResponse`     | `*File` encrypt/decrypt variants            |
//! | boolean  | `BoolResponse`    | verify, verifyFile, verifyBytes             |
//! | key pair | `KeyPairResponse` | generate                                    |
//!
//! [`convert`] turns wire messages into the resolved option types of
//! `pgpbridge-core`, applying the default tables for unknown enum codes and
//! absent nested messages.

pub mod convert;
pub mod error;

mod generated;

pub use error::{ProtoError, ProtoResult};
pub use generated::pgpbridge::v1 as proto;
