//! The operation catalog
//!
//! A closed set of case-sensitive names. Each operation has exactly one
//! request schema and one response shape.

use crate::error::BridgeError;
use std::fmt;
use std::str::FromStr;

/// One bridge operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Decrypt,
    DecryptFile,
    DecryptBytes,
    Encrypt,
    EncryptFile,
    EncryptBytes,
    Sign,
    SignFile,
    SignBytes,
    SignBytesToString,
    Verify,
    VerifyFile,
    VerifyBytes,
    DecryptSymmetric,
    DecryptSymmetricFile,
    DecryptSymmetricBytes,
    EncryptSymmetric,
    EncryptSymmetricFile,
    EncryptSymmetricBytes,
    Generate,
    ArmorEncode,
}

/// Response shape of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    Text,
    Bytes,
    Int,
    Bool,
    KeyPair,
}

impl Operation {
    pub const ALL: [Operation; 21] = [
        Operation::Decrypt,
        Operation::DecryptFile,
        Operation::DecryptBytes,
        Operation::Encrypt,
        Operation::EncryptFile,
        Operation::EncryptBytes,
        Operation::Sign,
        Operation::SignFile,
        Operation::SignBytes,
        Operation::SignBytesToString,
        Operation::Verify,
        Operation::VerifyFile,
        Operation::VerifyBytes,
        Operation::DecryptSymmetric,
        Operation::DecryptSymmetricFile,
        Operation::DecryptSymmetricBytes,
        Operation::EncryptSymmetric,
        Operation::EncryptSymmetricFile,
        Operation::EncryptSymmetricBytes,
        Operation::Generate,
        Operation::ArmorEncode,
    ];

    /// Wire name used at the call boundary
    pub fn name(&self) -> &'static str {
        match self {
            Self::Decrypt => "decrypt",
            Self::DecryptFile => "decryptFile",
            Self::DecryptBytes => "decryptBytes",
            Self::Encrypt => "encrypt",
            Self::EncryptFile => "encryptFile",
            Self::EncryptBytes => "encryptBytes",
            Self::Sign => "sign",
            Self::SignFile => "signFile",
            Self::SignBytes => "signBytes",
            Self::SignBytesToString => "signBytesToString",
            Self::Verify => "verify",
            Self::VerifyFile => "verifyFile",
            Self::VerifyBytes => "verifyBytes",
            Self::DecryptSymmetric => "decryptSymmetric",
            Self::DecryptSymmetricFile => "decryptSymmetricFile",
            Self::DecryptSymmetricBytes => "decryptSymmetricBytes",
            Self::EncryptSymmetric => "encryptSymmetric",
            Self::EncryptSymmetricFile => "encryptSymmetricFile",
            Self::EncryptSymmetricBytes => "encryptSymmetricBytes",
            Self::Generate => "generate",
            Self::ArmorEncode => "armorEncode",
        }
    }

    pub fn shape(&self) -> ResponseShape {
        match self {
            Self::Decrypt
            | Self::Encrypt
            | Self::Sign
            | Self::SignFile
            | Self::SignBytesToString
            | Self::DecryptSymmetric
            | Self::EncryptSymmetric
            | Self::ArmorEncode => ResponseShape::Text,
            Self::DecryptBytes
            | Self::EncryptBytes
            | Self::SignBytes
            | Self::DecryptSymmetricBytes
            | Self::EncryptSymmetricBytes => ResponseShape::Bytes,
            Self::DecryptFile
            | Self::EncryptFile
            | Self::DecryptSymmetricFile
            | Self::EncryptSymmetricFile => ResponseShape::Int,
            Self::Verify | Self::VerifyFile | Self::VerifyBytes => ResponseShape::Bool,
            Self::Generate => ResponseShape::KeyPair,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = BridgeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == name)
            .ok_or_else(|| BridgeError::NotImplemented(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_roundtrip() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = Operation::ALL.iter().map(Operation::name).collect();
        assert_eq!(names.len(), Operation::ALL.len());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let err = "Decrypt".parse::<Operation>().unwrap_err();
        assert_eq!(err.to_string(), "not implemented: Decrypt");
        assert!("armor_encode".parse::<Operation>().is_err());
    }

    #[test]
    fn test_shapes() {
        assert_eq!(Operation::SignFile.shape(), ResponseShape::Text);
        assert_eq!(Operation::SignBytes.shape(), ResponseShape::Bytes);
        assert_eq!(Operation::SignBytesToString.shape(), ResponseShape::Text);
        assert_eq!(Operation::EncryptSymmetricFile.shape(), ResponseShape::Int);
        assert_eq!(Operation::VerifyBytes.shape(), ResponseShape::Bool);
        assert_eq!(Operation::Generate.shape(), ResponseShape::KeyPair);
    }
}
