//! Recording engine shared by the integration tests

#![allow(dead_code)]

use pgpbridge_core::options::{Entity, FileHints, KeyOptions, KeyPair, Options};
use pgpbridge_core::{EngineError, EngineResult, PgpEngine};
use std::sync::Mutex;

/// What the engine saw for one call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Call {
    pub operation: &'static str,
    pub message: Vec<u8>,
    pub key: String,
    pub passphrase: String,
    pub path: String,
    pub signed: Option<Entity>,
    pub file_hints: Option<FileHints>,
    pub options: Option<KeyOptions>,
    pub generate: Option<Options>,
}

/// Echoes inputs back and records every call
///
/// Text operations return "ok", bytes operations echo the message, integer
/// operations return 7, boolean operations return true. With `failing` set
/// every call returns an engine error instead.
#[derive(Default)]
pub struct RecordingEngine {
    pub failing: bool,
    calls: Mutex<Vec<Call>>,
}

impl RecordingEngine {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last(&self) -> Call {
        self.calls().pop().expect("no call recorded")
    }

    fn record<T>(&self, call: Call, value: T) -> EngineResult<T> {
        self.calls.lock().unwrap().push(call);
        if self.failing {
            Err(EngineError::Decryption("boom".into()))
        } else {
            Ok(value)
        }
    }
}

impl PgpEngine for RecordingEngine {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn decrypt(
        &self,
        message: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<String> {
        let call = Call {
            operation: "decrypt",
            message: message.as_bytes().to_vec(),
            key: private_key.into(),
            passphrase: passphrase.into(),
            options: Some(*options),
            ..Default::default()
        };
        self.record(call, "ok".into())
    }

    fn decrypt_file(
        &self,
        input: &str,
        output: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<i64> {
        let call = Call {
            operation: "decryptFile",
            path: format!("{input}->{output}"),
            key: private_key.into(),
            passphrase: passphrase.into(),
            options: Some(*options),
            ..Default::default()
        };
        self.record(call, 7)
    }

    fn decrypt_bytes(
        &self,
        message: &[u8],
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<Vec<u8>> {
        let call = Call {
            operation: "decryptBytes",
            message: message.to_vec(),
            key: private_key.into(),
            passphrase: passphrase.into(),
            options: Some(*options),
            ..Default::default()
        };
        self.record(call, message.to_vec())
    }

    fn encrypt(
        &self,
        message: &str,
        public_key: &str,
        signed: Option<&Entity>,
        file_hints: &FileHints,
        options: &KeyOptions,
    ) -> EngineResult<String> {
        let call = Call {
            operation: "encrypt",
            message: message.as_bytes().to_vec(),
            key: public_key.into(),
            signed: signed.cloned(),
            file_hints: Some(file_hints.clone()),
            options: Some(*options),
            ..Default::default()
        };
        self.record(call, "ok".into())
    }

    fn encrypt_file(
        &self,
        input: &str,
        output: &str,
        public_key: &str,
        signed: Option<&Entity>,
        file_hints: &FileHints,
        options: &KeyOptions,
    ) -> EngineResult<i64> {
        let call = Call {
            operation: "encryptFile",
            path: format!("{input}->{output}"),
            key: public_key.into(),
            signed: signed.cloned(),
            file_hints: Some(file_hints.clone()),
            options: Some(*options),
            ..Default::default()
        };
        self.record(call, 7)
    }

    fn encrypt_bytes(
        &self,
        message: &[u8],
        public_key: &str,
        signed: Option<&Entity>,
        file_hints: &FileHints,
        options: &KeyOptions,
    ) -> EngineResult<Vec<u8>> {
        let call = Call {
            operation: "encryptBytes",
            message: message.to_vec(),
            key: public_key.into(),
            signed: signed.cloned(),
            file_hints: Some(file_hints.clone()),
            options: Some(*options),
            ..Default::default()
        };
        self.record(call, message.to_vec())
    }

    fn sign(
        &self,
        message: &str,
        _public_key: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<String> {
        let call = Call {
            operation: "sign",
            message: message.as_bytes().to_vec(),
            key: private_key.into(),
            passphrase: passphrase.into(),
            options: Some(*options),
            ..Default::default()
        };
        self.record(call, "ok".into())
    }

    fn sign_file(
        &self,
        input: &str,
        _public_key: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<String> {
        let call = Call {
            operation: "signFile",
            path: input.into(),
            key: private_key.into(),
            passphrase: passphrase.into(),
            options: Some(*options),
            ..Default::default()
        };
        self.record(call, "ok".into())
    }

    fn sign_bytes(
        &self,
        message: &[u8],
        _public_key: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<Vec<u8>> {
        let call = Call {
            operation: "signBytes",
            message: message.to_vec(),
            key: private_key.into(),
            passphrase: passphrase.into(),
            options: Some(*options),
            ..Default::default()
        };
        self.record(call, message.to_vec())
    }

    fn sign_bytes_to_string(
        &self,
        message: &[u8],
        _public_key: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<String> {
        let call = Call {
            operation: "signBytesToString",
            message: message.to_vec(),
            key: private_key.into(),
            passphrase: passphrase.into(),
            options: Some(*options),
            ..Default::default()
        };
        self.record(call, "ok".into())
    }

    fn verify(&self, signature: &str, message: &str, public_key: &str) -> EngineResult<bool> {
        let call = Call {
            operation: "verify",
            message: message.as_bytes().to_vec(),
            key: public_key.into(),
            path: signature.into(),
            ..Default::default()
        };
        self.record(call, true)
    }

    fn verify_file(&self, signature: &str, input: &str, public_key: &str) -> EngineResult<bool> {
        let call = Call {
            operation: "verifyFile",
            message: signature.as_bytes().to_vec(),
            key: public_key.into(),
            path: input.into(),
            ..Default::default()
        };
        self.record(call, true)
    }

    fn verify_bytes(
        &self,
        signature: &str,
        message: &[u8],
        public_key: &str,
    ) -> EngineResult<bool> {
        let call = Call {
            operation: "verifyBytes",
            message: message.to_vec(),
            key: public_key.into(),
            path: signature.into(),
            ..Default::default()
        };
        self.record(call, true)
    }

    fn decrypt_symmetric(
        &self,
        message: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<String> {
        let call = Call {
            operation: "decryptSymmetric",
            message: message.as_bytes().to_vec(),
            passphrase: passphrase.into(),
            options: Some(*options),
            ..Default::default()
        };
        self.record(call, "ok".into())
    }

    fn decrypt_symmetric_file(
        &self,
        input: &str,
        output: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<i64> {
        let call = Call {
            operation: "decryptSymmetricFile",
            path: format!("{input}->{output}"),
            passphrase: passphrase.into(),
            options: Some(*options),
            ..Default::default()
        };
        self.record(call, 7)
    }

    fn decrypt_symmetric_bytes(
        &self,
        message: &[u8],
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<Vec<u8>> {
        let call = Call {
            operation: "decryptSymmetricBytes",
            message: message.to_vec(),
            passphrase: passphrase.into(),
            options: Some(*options),
            ..Default::default()
        };
        self.record(call, message.to_vec())
    }

    fn encrypt_symmetric(
        &self,
        message: &str,
        passphrase: &str,
        file_hints: &FileHints,
        options: &KeyOptions,
    ) -> EngineResult<String> {
        let call = Call {
            operation: "encryptSymmetric",
            message: message.as_bytes().to_vec(),
            passphrase: passphrase.into(),
            file_hints: Some(file_hints.clone()),
            options: Some(*options),
            ..Default::default()
        };
        self.record(call, "ok".into())
    }

    fn encrypt_symmetric_file(
        &self,
        input: &str,
        output: &str,
        passphrase: &str,
        file_hints: &FileHints,
        options: &KeyOptions,
    ) -> EngineResult<i64> {
        let call = Call {
            operation: "encryptSymmetricFile",
            path: format!("{input}->{output}"),
            passphrase: passphrase.into(),
            file_hints: Some(file_hints.clone()),
            options: Some(*options),
            ..Default::default()
        };
        self.record(call, 7)
    }

    fn encrypt_symmetric_bytes(
        &self,
        message: &[u8],
        passphrase: &str,
        file_hints: &FileHints,
        options: &KeyOptions,
    ) -> EngineResult<Vec<u8>> {
        let call = Call {
            operation: "encryptSymmetricBytes",
            message: message.to_vec(),
            passphrase: passphrase.into(),
            file_hints: Some(file_hints.clone()),
            options: Some(*options),
            ..Default::default()
        };
        self.record(call, message.to_vec())
    }

    fn generate(&self, options: &Options) -> EngineResult<KeyPair> {
        let call = Call {
            operation: "generate",
            options: Some(options.key_options),
            generate: Some(options.clone()),
            ..Default::default()
        };
        let pair = KeyPair {
            public_key: "public".into(),
            private_key: "private".into(),
        };
        self.record(call, pair)
    }

    fn armor_encode(&self, packet: &[u8]) -> EngineResult<String> {
        let call = Call {
            operation: "armorEncode",
            message: packet.to_vec(),
            ..Default::default()
        };
        self.record(call, "ok".into())
    }
}
