use thiserror::Error;

/// Failures reported by a [`PgpEngine`](crate::PgpEngine).
///
/// The `Display` text is what the bridge writes into a response's error slot,
/// so messages should stay readable without the variant name.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid passphrase")]
    Passphrase,

    #[error("Encryption failed: {0}")]
    Encryption(String),

    #[error("Decryption failed: {0}")]
    Decryption(String),

    #[error("Signing failed: {0}")]
    Signing(String),

    #[error("Verification failed: {0}")]
    Verification(String),

    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    #[error("Armor error: {0}")]
    Armor(#[from] ArmorError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Errors from parsing ASCII armor
#[derive(Error, Debug)]
pub enum ArmorError {
    #[error("Missing BEGIN line")]
    MissingBegin,

    #[error("Missing END line for {0}")]
    MissingEnd(&'static str),

    #[error("Unknown armor type: {0}")]
    UnknownType(String),

    #[error("Expected {expected}, got {actual}")]
    UnexpectedType {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Checksum mismatch: expected {expected:06x}, computed {computed:06x}")]
    Checksum { expected: u32, computed: u32 },
}

pub type ArmorResult<T> = Result<T, ArmorError>;
