//! Semantic parameter types handed to the engine
//!
//! Every type here is fully resolved: defaults are concrete values, never
//! "unset". Decoding wire codes into these types lives in `pgpbridge-proto`.

/// Hash algorithm for signatures and key derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashAlgorithm {
    #[default]
    Sha256,
    Sha224,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha224 => "sha224",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }
}

/// Symmetric cipher for message encryption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CipherAlgorithm {
    #[default]
    Aes128,
    Aes192,
    Aes256,
}

impl CipherAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aes128 => "aes128",
            Self::Aes192 => "aes192",
            Self::Aes256 => "aes256",
        }
    }
}

/// Compression applied before encryption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompressionAlgorithm {
    #[default]
    None,
    Zlib,
    Zip,
}

impl CompressionAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Zlib => "zlib",
            Self::Zip => "zip",
        }
    }
}

/// Public key algorithm used by key generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyAlgorithm {
    #[default]
    Rsa,
    Ecdsa,
    Eddsa,
    Echd,
    Dsa,
    Elgamal,
}

impl KeyAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rsa => "rsa",
            Self::Ecdsa => "ecdsa",
            Self::Eddsa => "eddsa",
            Self::Echd => "echd",
            Self::Dsa => "dsa",
            Self::Elgamal => "elgamal",
        }
    }
}

/// Elliptic curve for ECC key algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Curve {
    Curve25519,
    Curve448,
    #[default]
    P256,
    P384,
    P521,
    Secp256k1,
    BrainpoolP256,
    BrainpoolP384,
    BrainpoolP512,
}

impl Curve {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Curve25519 => "curve25519",
            Self::Curve448 => "curve448",
            Self::P256 => "p256",
            Self::P384 => "p384",
            Self::P521 => "p521",
            Self::Secp256k1 => "secp256k1",
            Self::BrainpoolP256 => "brainpoolp256",
            Self::BrainpoolP384 => "brainpoolp384",
            Self::BrainpoolP512 => "brainpoolp512",
        }
    }
}

/// Algorithm and parameter selection forwarded with most operations
///
/// `compression_level` and `rsa_bits` of 0 mean "engine default".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOptions {
    pub algorithm: KeyAlgorithm,
    pub curve: Curve,
    pub hash: HashAlgorithm,
    pub cipher: CipherAlgorithm,
    pub compression: CompressionAlgorithm,
    pub compression_level: i32,
    pub rsa_bits: i32,
}

/// Key generation parameters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    pub name: String,
    pub comment: String,
    pub email: String,
    pub passphrase: String,
    pub key_options: KeyOptions,
}

impl Options {
    /// OpenPGP user id in `Name (Comment) <email>` form, omitting empty parts
    pub fn user_id(&self) -> String {
        let mut parts = Vec::new();
        if !self.name.is_empty() {
            parts.push(self.name.clone());
        }
        if !self.comment.is_empty() {
            parts.push(format!("({})", self.comment));
        }
        if !self.email.is_empty() {
            parts.push(format!("<{}>", self.email));
        }
        parts.join(" ")
    }
}

/// Literal-data metadata attached to encryption
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileHints {
    pub is_binary: bool,
    pub file_name: String,
    /// RFC 3339 timestamp, empty when unknown
    pub mod_time: String,
}

/// Signer identity for encrypt-and-sign
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Entity {
    pub public_key: String,
    pub private_key: String,
    pub passphrase: String,
}

/// Armored key pair produced by key generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub public_key: String,
    pub private_key: String,
}
