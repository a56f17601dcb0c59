//! Property-based tests for the call surface

mod common;

use common::RecordingEngine;
use pgpbridge::{decode_response, dispatch, encode_response, proto};
use pgpbridge_core::EngineError;
use prost::Message;
use proptest::prelude::*;

const BYTES_OPERATIONS: [&str; 5] = [
    "decryptBytes",
    "encryptBytes",
    "signBytes",
    "decryptSymmetricBytes",
    "encryptSymmetricBytes",
];

/// Build the request for a `*Bytes` operation carrying `data`
fn bytes_request(operation: &str, data: Vec<u8>) -> Vec<u8> {
    match operation {
        "decryptBytes" => proto::DecryptBytesRequest {
            message: data,
            ..Default::default()
        }
        .encode_to_vec(),
        "encryptBytes" => proto::EncryptBytesRequest {
            message: data,
            ..Default::default()
        }
        .encode_to_vec(),
        "signBytes" => proto::SignBytesRequest {
            message: data,
            ..Default::default()
        }
        .encode_to_vec(),
        "decryptSymmetricBytes" => proto::DecryptSymmetricBytesRequest {
            message: data,
            ..Default::default()
        }
        .encode_to_vec(),
        "encryptSymmetricBytes" => proto::EncryptSymmetricBytesRequest {
            message: data,
            ..Default::default()
        }
        .encode_to_vec(),
        other => panic!("not a bytes operation: {other}"),
    }
}

proptest! {
    /// Property: `*Bytes` payloads reach the engine byte for byte
    #[test]
    fn prop_bytes_payloads_are_forwarded_verbatim(
        data in prop::collection::vec(any::<u8>(), 0..512),
        index in 0..BYTES_OPERATIONS.len(),
    ) {
        let engine = RecordingEngine::default();
        let operation = BYTES_OPERATIONS[index];

        let response = dispatch(&engine, operation, &bytes_request(operation, data.clone())).unwrap();

        prop_assert_eq!(&engine.last().message, &data);
        prop_assert_eq!(decode_response::<Vec<u8>>(&response).unwrap(), Ok(data));
    }

    /// Property: text fields are forwarded unchanged
    #[test]
    fn prop_text_fields_are_forwarded_verbatim(message in ".*", passphrase in ".*") {
        let engine = RecordingEngine::default();
        let payload = proto::DecryptSymmetricRequest {
            message: message.clone(),
            passphrase: passphrase.clone(),
            options: None,
        }
        .encode_to_vec();

        dispatch(&engine, "decryptSymmetric", &payload).unwrap();

        let call = engine.last();
        prop_assert_eq!(call.message, message.into_bytes());
        prop_assert_eq!(call.passphrase, passphrase);
    }

    /// Property: a response holds exactly one of value or error
    #[test]
    fn prop_response_is_value_xor_error(value in ".*", error in ".*", failed in any::<bool>()) {
        let result = if failed {
            Err(EngineError::Encryption(error.clone()))
        } else {
            Ok(value.clone())
        };
        let bytes = encode_response(result);
        let msg = proto::StringResponse::decode(bytes.as_slice()).unwrap();

        match msg.outcome {
            Some(proto::string_response::Outcome::Output(v)) => {
                prop_assert!(!failed);
                prop_assert_eq!(v, value);
            }
            Some(proto::string_response::Outcome::Error(e)) => {
                prop_assert!(failed);
                prop_assert_eq!(e, format!("Encryption failed: {error}"));
            }
            None => prop_assert!(false, "response carries neither value nor error"),
        }
    }

    /// Property: integer and boolean values survive, zero and false included
    #[test]
    fn prop_scalar_responses_roundtrip(n in any::<i64>(), flag in any::<bool>()) {
        let int = encode_response::<i64, EngineError>(Ok(n));
        prop_assert_eq!(decode_response::<i64>(&int).unwrap(), Ok(n));

        let boolean = encode_response::<bool, EngineError>(Ok(flag));
        prop_assert_eq!(decode_response::<bool>(&boolean).unwrap(), Ok(flag));
    }

    /// Property: arbitrary buffers never panic the dispatcher
    #[test]
    fn prop_arbitrary_payloads_never_panic(data in prop::collection::vec(any::<u8>(), 0..128)) {
        let engine = RecordingEngine::default();
        for op in pgpbridge::Operation::ALL {
            let _ = dispatch(&engine, op.name(), &data);
        }
    }
}
