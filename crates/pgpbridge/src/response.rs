//! Response encoders
//!
//! One response message per result type. The encoder sets exactly one member
//! of the message's `outcome`: the error text when the engine failed, the
//! value otherwise.

use crate::operation::ResponseShape;
use pgpbridge_core::options::KeyPair;
use pgpbridge_proto::{ProtoError, ProtoResult, proto};
use prost::Message;
use std::fmt::Display;

/// A value type carried by one response shape
pub trait ResponseValue: Sized {
    type Message: Message + Default;

    const SHAPE: ResponseShape;

    fn into_message(outcome: Result<Self, String>) -> Self::Message;

    /// `None` when the message carries neither a value nor an error
    fn from_message(msg: Self::Message) -> Option<Result<Self, String>>;
}

/// Encode a result into a fresh response buffer
pub fn encode_response<T, E>(result: Result<T, E>) -> Vec<u8>
where
    T: ResponseValue,
    E: Display,
{
    T::into_message(result.map_err(|e| e.to_string())).encode_to_vec()
}

/// Decode a response buffer into the value or the engine's error text
pub fn decode_response<T: ResponseValue>(bytes: &[u8]) -> ProtoResult<Result<T, String>> {
    let msg = T::Message::decode(bytes)?;
    T::from_message(msg).ok_or_else(|| ProtoError::MissingField("outcome".into()))
}

impl ResponseValue for String {
    type Message = proto::StringResponse;

    const SHAPE: ResponseShape = ResponseShape::Text;

    fn into_message(outcome: Result<Self, String>) -> Self::Message {
        use proto::string_response::Outcome;
        proto::StringResponse {
            outcome: Some(match outcome {
                Ok(output) => Outcome::Output(output),
                Err(error) => Outcome::Error(error),
            }),
        }
    }

    fn from_message(msg: Self::Message) -> Option<Result<Self, String>> {
        use proto::string_response::Outcome;
        msg.outcome.map(|outcome| match outcome {
            Outcome::Output(output) => Ok(output),
            Outcome::Error(error) => Err(error),
        })
    }
}

impl ResponseValue for Vec<u8> {
    type Message = proto::BytesResponse;

    const SHAPE: ResponseShape = ResponseShape::Bytes;

    fn into_message(outcome: Result<Self, String>) -> Self::Message {
        use proto::bytes_response::Outcome;
        proto::BytesResponse {
            outcome: Some(match outcome {
                Ok(output) => Outcome::Output(output),
                Err(error) => Outcome::Error(error),
            }),
        }
    }

    fn from_message(msg: Self::Message) -> Option<Result<Self, String>> {
        use proto::bytes_response::Outcome;
        msg.outcome.map(|outcome| match outcome {
            Outcome::Output(output) => Ok(output),
            Outcome::Error(error) => Err(error),
        })
    }
}

impl ResponseValue for i64 {
    type Message = proto::IntResponse;

    const SHAPE: ResponseShape = ResponseShape::Int;

    fn into_message(outcome: Result<Self, String>) -> Self::Message {
        use proto::int_response::Outcome;
        proto::IntResponse {
            outcome: Some(match outcome {
                Ok(output) => Outcome::Output(output),
                Err(error) => Outcome::Error(error),
            }),
        }
    }

    fn from_message(msg: Self::Message) -> Option<Result<Self, String>> {
        use proto::int_response::Outcome;
        msg.outcome.map(|outcome| match outcome {
            Outcome::Output(output) => Ok(output),
            Outcome::Error(error) => Err(error),
        })
    }
}

impl ResponseValue for bool {
    type Message = proto::BoolResponse;

    const SHAPE: ResponseShape = ResponseShape::Bool;

    fn into_message(outcome: Result<Self, String>) -> Self::Message {
        use proto::bool_response::Outcome;
        proto::BoolResponse {
            outcome: Some(match outcome {
                Ok(output) => Outcome::Output(output),
                Err(error) => Outcome::Error(error),
            }),
        }
    }

    fn from_message(msg: Self::Message) -> Option<Result<Self, String>> {
        use proto::bool_response::Outcome;
        msg.outcome.map(|outcome| match outcome {
            Outcome::Output(output) => Ok(output),
            Outcome::Error(error) => Err(error),
        })
    }
}

impl ResponseValue for KeyPair {
    type Message = proto::KeyPairResponse;

    const SHAPE: ResponseShape = ResponseShape::KeyPair;

    // Nested KeyPair record inside the outer response
    fn into_message(outcome: Result<Self, String>) -> Self::Message {
        use proto::key_pair_response::Outcome;
        proto::KeyPairResponse {
            outcome: Some(match outcome {
                Ok(pair) => Outcome::Output(proto::KeyPair::from(pair)),
                Err(error) => Outcome::Error(error),
            }),
        }
    }

    fn from_message(msg: Self::Message) -> Option<Result<Self, String>> {
        use proto::key_pair_response::Outcome;
        msg.outcome.map(|outcome| match outcome {
            Outcome::Output(pair) => Ok(KeyPair::from(pair)),
            Outcome::Error(error) => Err(error),
        })
    }
}
