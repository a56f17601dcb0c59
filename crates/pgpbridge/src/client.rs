//! Typed client over the name-based call surface
//!
//! Builds request messages, sends them through [`dispatch`] and unpacks the
//! response, so callers get `Result<T, ClientError>` instead of raw buffers.

use crate::dispatch::dispatch;
use crate::error::BridgeError;
use crate::operation::Operation;
use crate::response::{ResponseValue, decode_response};
use pgpbridge_core::PgpEngine;
use pgpbridge_core::options::{Entity, FileHints, KeyOptions, KeyPair, Options};
use pgpbridge_proto::{ProtoError, proto};
use prost::Message;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error("Invalid response: {0}")]
    Proto(#[from] ProtoError),

    /// Error text reported by the engine
    #[error("{0}")]
    Engine(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

pub struct Client<E> {
    engine: E,
}

impl<E: PgpEngine> Client<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Send `request` as `operation` and decode the response as `T`
    pub fn call<R, T>(&self, operation: Operation, request: &R) -> ClientResult<T>
    where
        R: Message,
        T: ResponseValue,
    {
        let payload = request.encode_to_vec();
        let response = dispatch(&self.engine, operation.name(), &payload)?;
        decode_response::<T>(&response)?.map_err(ClientError::Engine)
    }

    pub fn generate(&self, options: &Options) -> ClientResult<KeyPair> {
        let request = proto::GenerateRequest {
            options: Some(options.into()),
        };
        self.call(Operation::Generate, &request)
    }

    pub fn encrypt(
        &self,
        message: &str,
        public_key: &str,
        signed: Option<&Entity>,
        file_hints: &FileHints,
        options: &KeyOptions,
    ) -> ClientResult<String> {
        let request = proto::EncryptRequest {
            message: message.into(),
            public_key: public_key.into(),
            signed: signed.map(Into::into),
            file_hints: Some(file_hints.into()),
            options: Some(options.into()),
        };
        self.call(Operation::Encrypt, &request)
    }

    pub fn decrypt(
        &self,
        message: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> ClientResult<String> {
        let request = proto::DecryptRequest {
            message: message.into(),
            private_key: private_key.into(),
            passphrase: passphrase.into(),
            options: Some(options.into()),
        };
        self.call(Operation::Decrypt, &request)
    }

    pub fn encrypt_bytes(
        &self,
        message: &[u8],
        public_key: &str,
        signed: Option<&Entity>,
        file_hints: &FileHints,
        options: &KeyOptions,
    ) -> ClientResult<Vec<u8>> {
        let request = proto::EncryptBytesRequest {
            message: message.to_vec(),
            public_key: public_key.into(),
            signed: signed.map(Into::into),
            file_hints: Some(file_hints.into()),
            options: Some(options.into()),
        };
        self.call(Operation::EncryptBytes, &request)
    }

    pub fn decrypt_bytes(
        &self,
        message: &[u8],
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> ClientResult<Vec<u8>> {
        let request = proto::DecryptBytesRequest {
            message: message.to_vec(),
            private_key: private_key.into(),
            passphrase: passphrase.into(),
            options: Some(options.into()),
        };
        self.call(Operation::DecryptBytes, &request)
    }

    pub fn sign(
        &self,
        message: &str,
        public_key: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> ClientResult<String> {
        let request = proto::SignRequest {
            message: message.into(),
            public_key: public_key.into(),
            private_key: private_key.into(),
            passphrase: passphrase.into(),
            options: Some(options.into()),
        };
        self.call(Operation::Sign, &request)
    }

    pub fn sign_bytes(
        &self,
        message: &[u8],
        public_key: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> ClientResult<Vec<u8>> {
        let request = proto::SignBytesRequest {
            message: message.to_vec(),
            public_key: public_key.into(),
            private_key: private_key.into(),
            passphrase: passphrase.into(),
            options: Some(options.into()),
        };
        self.call(Operation::SignBytes, &request)
    }

    pub fn verify(&self, signature: &str, message: &str, public_key: &str) -> ClientResult<bool> {
        let request = proto::VerifyRequest {
            signature: signature.into(),
            message: message.into(),
            public_key: public_key.into(),
        };
        self.call(Operation::Verify, &request)
    }

    pub fn verify_bytes(
        &self,
        signature: &str,
        message: &[u8],
        public_key: &str,
    ) -> ClientResult<bool> {
        let request = proto::VerifyBytesRequest {
            signature: signature.into(),
            message: message.to_vec(),
            public_key: public_key.into(),
        };
        self.call(Operation::VerifyBytes, &request)
    }

    pub fn encrypt_symmetric(
        &self,
        message: &str,
        passphrase: &str,
        file_hints: &FileHints,
        options: &KeyOptions,
    ) -> ClientResult<String> {
        let request = proto::EncryptSymmetricRequest {
            message: message.into(),
            passphrase: passphrase.into(),
            file_hints: Some(file_hints.into()),
            options: Some(options.into()),
        };
        self.call(Operation::EncryptSymmetric, &request)
    }

    pub fn decrypt_symmetric(
        &self,
        message: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> ClientResult<String> {
        let request = proto::DecryptSymmetricRequest {
            message: message.into(),
            passphrase: passphrase.into(),
            options: Some(options.into()),
        };
        self.call(Operation::DecryptSymmetric, &request)
    }

    pub fn armor_encode(&self, packet: &[u8]) -> ClientResult<String> {
        let request = proto::ArmorEncodeRequest {
            packet: packet.to_vec(),
        };
        self.call(Operation::ArmorEncode, &request)
    }
}
