//! Conversions between pgpbridge-core option types and protobuf types
//!
//! Decoding is total. Enum codes outside the known set resolve to the
//! field's default, and absent nested messages resolve to fully populated
//! default values.

use crate::proto;
use pgpbridge_core::options::{
    CipherAlgorithm, CompressionAlgorithm, Curve, Entity, FileHints, HashAlgorithm, KeyAlgorithm,
    KeyOptions, KeyPair, Options,
};

// Enum code decoders

/// SHA224/384/512 map explicitly, every other code is SHA256
pub fn hash_from_code(code: i32) -> HashAlgorithm {
    match proto::Hash::try_from(code) {
        Ok(proto::Hash::Sha224) => HashAlgorithm::Sha224,
        Ok(proto::Hash::Sha384) => HashAlgorithm::Sha384,
        Ok(proto::Hash::Sha512) => HashAlgorithm::Sha512,
        _ => HashAlgorithm::Sha256,
    }
}

/// AES192/256 map explicitly, every other code is AES128
pub fn cipher_from_code(code: i32) -> CipherAlgorithm {
    match proto::Cipher::try_from(code) {
        Ok(proto::Cipher::Aes192) => CipherAlgorithm::Aes192,
        Ok(proto::Cipher::Aes256) => CipherAlgorithm::Aes256,
        _ => CipherAlgorithm::Aes128,
    }
}

/// ZIP/ZLIB map explicitly, every other code is no compression
pub fn compression_from_code(code: i32) -> CompressionAlgorithm {
    match proto::Compression::try_from(code) {
        Ok(proto::Compression::Zip) => CompressionAlgorithm::Zip,
        Ok(proto::Compression::Zlib) => CompressionAlgorithm::Zlib,
        _ => CompressionAlgorithm::None,
    }
}

pub fn algorithm_from_code(code: i32) -> KeyAlgorithm {
    match proto::Algorithm::try_from(code) {
        Ok(proto::Algorithm::Ecdsa) => KeyAlgorithm::Ecdsa,
        Ok(proto::Algorithm::Eddsa) => KeyAlgorithm::Eddsa,
        Ok(proto::Algorithm::Echd) => KeyAlgorithm::Echd,
        Ok(proto::Algorithm::Dsa) => KeyAlgorithm::Dsa,
        Ok(proto::Algorithm::Elgamal) => KeyAlgorithm::Elgamal,
        _ => KeyAlgorithm::Rsa,
    }
}

/// Known curves map explicitly; unknown codes fall back to P256
pub fn curve_from_code(code: i32) -> Curve {
    match proto::Curve::try_from(code) {
        Ok(proto::Curve::Curve25519) => Curve::Curve25519,
        Ok(proto::Curve::Curve448) => Curve::Curve448,
        Ok(proto::Curve::P256) => Curve::P256,
        Ok(proto::Curve::P384) => Curve::P384,
        Ok(proto::Curve::P521) => Curve::P521,
        Ok(proto::Curve::Secp256k1) => Curve::Secp256k1,
        Ok(proto::Curve::Brainpoolp256) => Curve::BrainpoolP256,
        Ok(proto::Curve::Brainpoolp384) => Curve::BrainpoolP384,
        Ok(proto::Curve::Brainpoolp512) => Curve::BrainpoolP512,
        Err(_) => Curve::default(),
    }
}

// Enum encoders

impl From<HashAlgorithm> for proto::Hash {
    fn from(hash: HashAlgorithm) -> Self {
        match hash {
            HashAlgorithm::Sha256 => proto::Hash::Sha256,
            HashAlgorithm::Sha224 => proto::Hash::Sha224,
            HashAlgorithm::Sha384 => proto::Hash::Sha384,
            HashAlgorithm::Sha512 => proto::Hash::Sha512,
        }
    }
}

impl From<CipherAlgorithm> for proto::Cipher {
    fn from(cipher: CipherAlgorithm) -> Self {
        match cipher {
            CipherAlgorithm::Aes128 => proto::Cipher::Aes128,
            CipherAlgorithm::Aes192 => proto::Cipher::Aes192,
            CipherAlgorithm::Aes256 => proto::Cipher::Aes256,
        }
    }
}

impl From<CompressionAlgorithm> for proto::Compression {
    fn from(compression: CompressionAlgorithm) -> Self {
        match compression {
            CompressionAlgorithm::None => proto::Compression::None,
            CompressionAlgorithm::Zlib => proto::Compression::Zlib,
            CompressionAlgorithm::Zip => proto::Compression::Zip,
        }
    }
}

impl From<KeyAlgorithm> for proto::Algorithm {
    fn from(algorithm: KeyAlgorithm) -> Self {
        match algorithm {
            KeyAlgorithm::Rsa => proto::Algorithm::Rsa,
            KeyAlgorithm::Ecdsa => proto::Algorithm::Ecdsa,
            KeyAlgorithm::Eddsa => proto::Algorithm::Eddsa,
            KeyAlgorithm::Echd => proto::Algorithm::Echd,
            KeyAlgorithm::Dsa => proto::Algorithm::Dsa,
            KeyAlgorithm::Elgamal => proto::Algorithm::Elgamal,
        }
    }
}

impl From<Curve> for proto::Curve {
    fn from(curve: Curve) -> Self {
        match curve {
            Curve::Curve25519 => proto::Curve::Curve25519,
            Curve::Curve448 => proto::Curve::Curve448,
            Curve::P256 => proto::Curve::P256,
            Curve::P384 => proto::Curve::P384,
            Curve::P521 => proto::Curve::P521,
            Curve::Secp256k1 => proto::Curve::Secp256k1,
            Curve::BrainpoolP256 => proto::Curve::Brainpoolp256,
            Curve::BrainpoolP384 => proto::Curve::Brainpoolp384,
            Curve::BrainpoolP512 => proto::Curve::Brainpoolp512,
        }
    }
}

// KeyOptions conversions
impl From<proto::KeyOptions> for KeyOptions {
    fn from(msg: proto::KeyOptions) -> Self {
        KeyOptions {
            algorithm: algorithm_from_code(msg.algorithm),
            curve: curve_from_code(msg.curve),
            hash: hash_from_code(msg.hash),
            cipher: cipher_from_code(msg.cipher),
            compression: compression_from_code(msg.compression),
            compression_level: msg.compression_level,
            rsa_bits: msg.rsa_bits,
        }
    }
}

impl From<&KeyOptions> for proto::KeyOptions {
    fn from(opts: &KeyOptions) -> Self {
        proto::KeyOptions {
            algorithm: proto::Algorithm::from(opts.algorithm) as i32,
            curve: proto::Curve::from(opts.curve) as i32,
            hash: proto::Hash::from(opts.hash) as i32,
            cipher: proto::Cipher::from(opts.cipher) as i32,
            compression: proto::Compression::from(opts.compression) as i32,
            compression_level: opts.compression_level,
            rsa_bits: opts.rsa_bits,
        }
    }
}

// FileHints conversions
impl From<proto::FileHints> for FileHints {
    fn from(msg: proto::FileHints) -> Self {
        FileHints {
            is_binary: msg.is_binary,
            file_name: msg.file_name,
            mod_time: msg.mod_time,
        }
    }
}

impl From<&FileHints> for proto::FileHints {
    fn from(hints: &FileHints) -> Self {
        proto::FileHints {
            is_binary: hints.is_binary,
            file_name: hints.file_name.clone(),
            mod_time: hints.mod_time.clone(),
        }
    }
}

// Entity conversions
impl From<proto::Entity> for Entity {
    fn from(msg: proto::Entity) -> Self {
        Entity {
            public_key: msg.public_key,
            private_key: msg.private_key,
            passphrase: msg.passphrase,
        }
    }
}

impl From<&Entity> for proto::Entity {
    fn from(entity: &Entity) -> Self {
        proto::Entity {
            public_key: entity.public_key.clone(),
            private_key: entity.private_key.clone(),
            passphrase: entity.passphrase.clone(),
        }
    }
}

// Options conversions
impl From<proto::Options> for Options {
    fn from(msg: proto::Options) -> Self {
        Options {
            name: msg.name,
            comment: msg.comment,
            email: msg.email,
            passphrase: msg.passphrase,
            key_options: key_options_or_default(msg.key_options),
        }
    }
}

impl From<&Options> for proto::Options {
    fn from(opts: &Options) -> Self {
        proto::Options {
            name: opts.name.clone(),
            comment: opts.comment.clone(),
            email: opts.email.clone(),
            passphrase: opts.passphrase.clone(),
            key_options: Some(proto::KeyOptions::from(&opts.key_options)),
        }
    }
}

// KeyPair conversions
impl From<KeyPair> for proto::KeyPair {
    fn from(pair: KeyPair) -> Self {
        proto::KeyPair {
            public_key: pair.public_key,
            private_key: pair.private_key,
        }
    }
}

impl From<proto::KeyPair> for KeyPair {
    fn from(msg: proto::KeyPair) -> Self {
        KeyPair {
            public_key: msg.public_key,
            private_key: msg.private_key,
        }
    }
}

// Decode-or-default factories for optional nested messages

pub fn key_options_or_default(msg: Option<proto::KeyOptions>) -> KeyOptions {
    msg.map(KeyOptions::from).unwrap_or_default()
}

pub fn file_hints_or_default(msg: Option<proto::FileHints>) -> FileHints {
    msg.map(FileHints::from).unwrap_or_default()
}

pub fn options_or_default(msg: Option<proto::Options>) -> Options {
    msg.map(Options::from).unwrap_or_default()
}

/// An absent signer stays absent
pub fn signer(msg: Option<proto::Entity>) -> Option<Entity> {
    msg.map(Entity::from)
}
