//! Typed request decoders
//!
//! Each parameter set is decoded from exactly one protobuf request message.
//! Absent scalars decode to proto3 defaults, absent nested messages resolve
//! through the decode-or-default factories in `pgpbridge_proto::convert`.
//! `*Bytes` variants keep their payload as raw bytes.

use pgpbridge_core::options::{Entity, FileHints, KeyOptions, Options};
use pgpbridge_proto::convert::{
    file_hints_or_default, key_options_or_default, options_or_default, signer,
};
use pgpbridge_proto::{ProtoResult, proto};
use prost::Message;

/// A parameter set decodable from a request buffer
pub trait DecodeRequest: Sized {
    type Message: Message + Default + Into<Self>;

    fn decode(payload: &[u8]) -> ProtoResult<Self> {
        Ok(Self::Message::decode(payload)?.into())
    }
}

/// Public-key decryption of a text (`String`) or raw (`Vec<u8>`) message
#[derive(Debug, Clone, PartialEq)]
pub struct DecryptParams<M> {
    pub message: M,
    pub private_key: String,
    pub passphrase: String,
    pub options: KeyOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecryptFileParams {
    pub input: String,
    pub output: String,
    pub private_key: String,
    pub passphrase: String,
    pub options: KeyOptions,
}

/// Public-key encryption, optionally signed by `signed`
#[derive(Debug, Clone, PartialEq)]
pub struct EncryptParams<M> {
    pub message: M,
    pub public_key: String,
    pub signed: Option<Entity>,
    pub file_hints: FileHints,
    pub options: KeyOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EncryptFileParams {
    pub input: String,
    pub output: String,
    pub public_key: String,
    pub signed: Option<Entity>,
    pub file_hints: FileHints,
    pub options: KeyOptions,
}

/// Signing; the bytes form serves both `signBytes` and `signBytesToString`
#[derive(Debug, Clone, PartialEq)]
pub struct SignParams<M> {
    pub message: M,
    pub public_key: String,
    pub private_key: String,
    pub passphrase: String,
    pub options: KeyOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignFileParams {
    pub input: String,
    pub public_key: String,
    pub private_key: String,
    pub passphrase: String,
    pub options: KeyOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerifyParams<M> {
    pub signature: String,
    pub message: M,
    pub public_key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerifyFileParams {
    pub signature: String,
    pub input: String,
    pub public_key: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricDecryptParams<M> {
    pub message: M,
    pub passphrase: String,
    pub options: KeyOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricDecryptFileParams {
    pub input: String,
    pub output: String,
    pub passphrase: String,
    pub options: KeyOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricEncryptParams<M> {
    pub message: M,
    pub passphrase: String,
    pub file_hints: FileHints,
    pub options: KeyOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricEncryptFileParams {
    pub input: String,
    pub output: String,
    pub passphrase: String,
    pub file_hints: FileHints,
    pub options: KeyOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateParams {
    pub options: Options,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArmorEncodeParams {
    pub packet: Vec<u8>,
}

// Decrypt
impl From<proto::DecryptRequest> for DecryptParams<String> {
    fn from(req: proto::DecryptRequest) -> Self {
        DecryptParams {
            message: req.message,
            private_key: req.private_key,
            passphrase: req.passphrase,
            options: key_options_or_default(req.options),
        }
    }
}

impl DecodeRequest for DecryptParams<String> {
    type Message = proto::DecryptRequest;
}

impl From<proto::DecryptBytesRequest> for DecryptParams<Vec<u8>> {
    fn from(req: proto::DecryptBytesRequest) -> Self {
        DecryptParams {
            message: req.message,
            private_key: req.private_key,
            passphrase: req.passphrase,
            options: key_options_or_default(req.options),
        }
    }
}

impl DecodeRequest for DecryptParams<Vec<u8>> {
    type Message = proto::DecryptBytesRequest;
}

impl From<proto::DecryptFileRequest> for DecryptFileParams {
    fn from(req: proto::DecryptFileRequest) -> Self {
        DecryptFileParams {
            input: req.input,
            output: req.output,
            private_key: req.private_key,
            passphrase: req.passphrase,
            options: key_options_or_default(req.options),
        }
    }
}

impl DecodeRequest for DecryptFileParams {
    type Message = proto::DecryptFileRequest;
}

// Encrypt
impl From<proto::EncryptRequest> for EncryptParams<String> {
    fn from(req: proto::EncryptRequest) -> Self {
        EncryptParams {
            message: req.message,
            public_key: req.public_key,
            signed: signer(req.signed),
            file_hints: file_hints_or_default(req.file_hints),
            options: key_options_or_default(req.options),
        }
    }
}

impl DecodeRequest for EncryptParams<String> {
    type Message = proto::EncryptRequest;
}

impl From<proto::EncryptBytesRequest> for EncryptParams<Vec<u8>> {
    fn from(req: proto::EncryptBytesRequest) -> Self {
        EncryptParams {
            message: req.message,
            public_key: req.public_key,
            signed: signer(req.signed),
            file_hints: file_hints_or_default(req.file_hints),
            options: key_options_or_default(req.options),
        }
    }
}

impl DecodeRequest for EncryptParams<Vec<u8>> {
    type Message = proto::EncryptBytesRequest;
}

impl From<proto::EncryptFileRequest> for EncryptFileParams {
    fn from(req: proto::EncryptFileRequest) -> Self {
        EncryptFileParams {
            input: req.input,
            output: req.output,
            public_key: req.public_key,
            signed: signer(req.signed),
            file_hints: file_hints_or_default(req.file_hints),
            options: key_options_or_default(req.options),
        }
    }
}

impl DecodeRequest for EncryptFileParams {
    type Message = proto::EncryptFileRequest;
}

// Sign
impl From<proto::SignRequest> for SignParams<String> {
    fn from(req: proto::SignRequest) -> Self {
        SignParams {
            message: req.message,
            public_key: req.public_key,
            private_key: req.private_key,
            passphrase: req.passphrase,
            options: key_options_or_default(req.options),
        }
    }
}

impl DecodeRequest for SignParams<String> {
    type Message = proto::SignRequest;
}

impl From<proto::SignBytesRequest> for SignParams<Vec<u8>> {
    fn from(req: proto::SignBytesRequest) -> Self {
        SignParams {
            message: req.message,
            public_key: req.public_key,
            private_key: req.private_key,
            passphrase: req.passphrase,
            options: key_options_or_default(req.options),
        }
    }
}

impl DecodeRequest for SignParams<Vec<u8>> {
    type Message = proto::SignBytesRequest;
}

impl From<proto::SignFileRequest> for SignFileParams {
    fn from(req: proto::SignFileRequest) -> Self {
        SignFileParams {
            input: req.input,
            public_key: req.public_key,
            private_key: req.private_key,
            passphrase: req.passphrase,
            options: key_options_or_default(req.options),
        }
    }
}

impl DecodeRequest for SignFileParams {
    type Message = proto::SignFileRequest;
}

// Verify
impl From<proto::VerifyRequest> for VerifyParams<String> {
    fn from(req: proto::VerifyRequest) -> Self {
        VerifyParams {
            signature: req.signature,
            message: req.message,
            public_key: req.public_key,
        }
    }
}

impl DecodeRequest for VerifyParams<String> {
    type Message = proto::VerifyRequest;
}

impl From<proto::VerifyBytesRequest> for VerifyParams<Vec<u8>> {
    fn from(req: proto::VerifyBytesRequest) -> Self {
        VerifyParams {
            signature: req.signature,
            message: req.message,
            public_key: req.public_key,
        }
    }
}

impl DecodeRequest for VerifyParams<Vec<u8>> {
    type Message = proto::VerifyBytesRequest;
}

impl From<proto::VerifyFileRequest> for VerifyFileParams {
    fn from(req: proto::VerifyFileRequest) -> Self {
        VerifyFileParams {
            signature: req.signature,
            input: req.input,
            public_key: req.public_key,
        }
    }
}

impl DecodeRequest for VerifyFileParams {
    type Message = proto::VerifyFileRequest;
}

// Symmetric decrypt
impl From<proto::DecryptSymmetricRequest> for SymmetricDecryptParams<String> {
    fn from(req: proto::DecryptSymmetricRequest) -> Self {
        SymmetricDecryptParams {
            message: req.message,
            passphrase: req.passphrase,
            options: key_options_or_default(req.options),
        }
    }
}

impl DecodeRequest for SymmetricDecryptParams<String> {
    type Message = proto::DecryptSymmetricRequest;
}

impl From<proto::DecryptSymmetricBytesRequest> for SymmetricDecryptParams<Vec<u8>> {
    fn from(req: proto::DecryptSymmetricBytesRequest) -> Self {
        SymmetricDecryptParams {
            message: req.message,
            passphrase: req.passphrase,
            options: key_options_or_default(req.options),
        }
    }
}

impl DecodeRequest for SymmetricDecryptParams<Vec<u8>> {
    type Message = proto::DecryptSymmetricBytesRequest;
}

impl From<proto::DecryptSymmetricFileRequest> for SymmetricDecryptFileParams {
    fn from(req: proto::DecryptSymmetricFileRequest) -> Self {
        SymmetricDecryptFileParams {
            input: req.input,
            output: req.output,
            passphrase: req.passphrase,
            options: key_options_or_default(req.options),
        }
    }
}

impl DecodeRequest for SymmetricDecryptFileParams {
    type Message = proto::DecryptSymmetricFileRequest;
}

// Symmetric encrypt
impl From<proto::EncryptSymmetricRequest> for SymmetricEncryptParams<String> {
    fn from(req: proto::EncryptSymmetricRequest) -> Self {
        SymmetricEncryptParams {
            message: req.message,
            passphrase: req.passphrase,
            file_hints: file_hints_or_default(req.file_hints),
            options: key_options_or_default(req.options),
        }
    }
}

impl DecodeRequest for SymmetricEncryptParams<String> {
    type Message = proto::EncryptSymmetricRequest;
}

impl From<proto::EncryptSymmetricBytesRequest> for SymmetricEncryptParams<Vec<u8>> {
    fn from(req: proto::EncryptSymmetricBytesRequest) -> Self {
        SymmetricEncryptParams {
            message: req.message,
            passphrase: req.passphrase,
            file_hints: file_hints_or_default(req.file_hints),
            options: key_options_or_default(req.options),
        }
    }
}

impl DecodeRequest for SymmetricEncryptParams<Vec<u8>> {
    type Message = proto::EncryptSymmetricBytesRequest;
}

impl From<proto::EncryptSymmetricFileRequest> for SymmetricEncryptFileParams {
    fn from(req: proto::EncryptSymmetricFileRequest) -> Self {
        SymmetricEncryptFileParams {
            input: req.input,
            output: req.output,
            passphrase: req.passphrase,
            file_hints: file_hints_or_default(req.file_hints),
            options: key_options_or_default(req.options),
        }
    }
}

impl DecodeRequest for SymmetricEncryptFileParams {
    type Message = proto::EncryptSymmetricFileRequest;
}

// Generate
impl From<proto::GenerateRequest> for GenerateParams {
    fn from(req: proto::GenerateRequest) -> Self {
        GenerateParams {
            options: options_or_default(req.options),
        }
    }
}

impl DecodeRequest for GenerateParams {
    type Message = proto::GenerateRequest;
}

// Armor
impl From<proto::ArmorEncodeRequest> for ArmorEncodeParams {
    fn from(req: proto::ArmorEncodeRequest) -> Self {
        ArmorEncodeParams { packet: req.packet }
    }
}

impl DecodeRequest for ArmorEncodeParams {
    type Message = proto::ArmorEncodeRequest;
}
