use crate::operation::Operation;
use pgpbridge_proto::ProtoError;
use thiserror::Error;

/// Structural failures of a bridge call
///
/// Anything past catalog lookup and request decoding is carried inside the
/// encoded response instead.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("not implemented: {0}")]
    NotImplemented(String),

    #[error("Failed to decode {operation} request: {source}")]
    Decode {
        operation: Operation,
        source: ProtoError,
    },
}

pub type BridgeResult<T> = Result<T, BridgeError>;
