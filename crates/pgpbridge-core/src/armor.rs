//! OpenPGP ASCII armor (RFC 4880 §6)
//!
//! Format:
//! ```text
//! -----BEGIN PGP MESSAGE-----
//! Comment: optional headers
//!
//! wcBMA0rHaXs...
//! (base64 continues, 64 columns)
//! =njUN
//! -----END PGP MESSAGE-----
//! ```

use crate::error::{ArmorError, ArmorResult};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use std::collections::HashMap;

const CRC24_INIT: u32 = 0x00B7_04CE;
const CRC24_POLY: u32 = 0x0186_4CFB;

/// Types of armored content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmorType {
    Message,
    PublicKey,
    PrivateKey,
    Signature,
}

impl ArmorType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Message => "MESSAGE",
            Self::PublicKey => "PUBLIC KEY BLOCK",
            Self::PrivateKey => "PRIVATE KEY BLOCK",
            Self::Signature => "SIGNATURE",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "MESSAGE" => Some(Self::Message),
            "PUBLIC KEY BLOCK" => Some(Self::PublicKey),
            "PRIVATE KEY BLOCK" => Some(Self::PrivateKey),
            "SIGNATURE" => Some(Self::Signature),
            _ => None,
        }
    }
}

/// Parsed armor block
#[derive(Debug)]
pub struct ArmorBlock {
    pub armor_type: ArmorType,
    pub headers: HashMap<String, String>,
    pub payload: Vec<u8>,
}

impl ArmorBlock {
    /// Reject blocks whose label differs from `expected`
    pub fn require_type(self, expected: ArmorType) -> ArmorResult<Self> {
        if self.armor_type != expected {
            return Err(ArmorError::UnexpectedType {
                expected: expected.label(),
                actual: self.armor_type.label(),
            });
        }
        Ok(self)
    }
}

/// CRC-24 over `data`, as used by the armor checksum line
pub fn crc24(data: &[u8]) -> u32 {
    let mut crc = CRC24_INIT;
    for byte in data {
        crc ^= u32::from(*byte) << 16;
        for _ in 0..8 {
            crc <<= 1;
            if crc & 0x0100_0000 != 0 {
                crc ^= CRC24_POLY;
            }
        }
    }
    crc & 0x00FF_FFFF
}

/// Encode data as ASCII armor
pub fn armor_encode(armor_type: ArmorType, headers: &[(&str, &str)], payload: &[u8]) -> String {
    let mut result = format!("-----BEGIN PGP {}-----\n", armor_type.label());

    for (key, value) in headers {
        result.push_str(&format!("{key}: {value}\n"));
    }
    result.push('\n');

    // Base64 is ASCII, so splitting at any byte offset stays on a char boundary
    let b64 = BASE64.encode(payload);
    let mut rest = b64.as_str();
    while !rest.is_empty() {
        let (line, tail) = rest.split_at(rest.len().min(64));
        result.push_str(line);
        result.push('\n');
        rest = tail;
    }

    let crc = crc24(payload).to_be_bytes();
    result.push('=');
    result.push_str(&BASE64.encode(&crc[1..]));
    result.push('\n');

    result.push_str(&format!("-----END PGP {}-----\n", armor_type.label()));
    result
}

/// Decode ASCII armor to bytes
pub fn armor_decode(s: &str) -> ArmorResult<ArmorBlock> {
    let lines: Vec<&str> = s.lines().map(str::trim_end).collect();

    let begin_idx = lines
        .iter()
        .position(|l| l.starts_with("-----BEGIN PGP "))
        .ok_or(ArmorError::MissingBegin)?;

    let type_str = lines[begin_idx]
        .strip_prefix("-----BEGIN PGP ")
        .and_then(|s| s.strip_suffix("-----"))
        .ok_or(ArmorError::MissingBegin)?;

    let armor_type = ArmorType::from_label(type_str)
        .ok_or_else(|| ArmorError::UnknownType(type_str.to_string()))?;

    let end_marker = format!("-----END PGP {}-----", armor_type.label());
    let end_idx = lines[begin_idx..]
        .iter()
        .position(|l| *l == end_marker)
        .map(|i| begin_idx + i)
        .ok_or(ArmorError::MissingEnd(armor_type.label()))?;

    // Headers run until the first blank line; a block without headers may
    // omit them entirely.
    let mut headers = HashMap::new();
    let mut payload_start = begin_idx + 1;
    for (i, line) in lines[begin_idx + 1..end_idx].iter().enumerate() {
        if line.is_empty() {
            payload_start = begin_idx + 1 + i + 1;
            break;
        }
        match line.split_once(": ") {
            Some((key, value)) => {
                headers.insert(key.to_string(), value.to_string());
            }
            None => break,
        }
    }

    let mut body = String::new();
    let mut checksum = None;
    for line in &lines[payload_start..end_idx] {
        match line.strip_prefix('=') {
            Some(crc) => checksum = Some(crc.trim()),
            None => body.extend(line.chars().filter(|c| !c.is_whitespace())),
        }
    }

    let payload = BASE64.decode(&body)?;

    if let Some(crc) = checksum {
        let raw = BASE64.decode(crc)?;
        let expected = raw
            .iter()
            .fold(0u32, |acc, b| (acc << 8) | u32::from(*b));
        let computed = crc24(&payload);
        if expected != computed {
            return Err(ArmorError::Checksum { expected, computed });
        }
    }

    Ok(ArmorBlock {
        armor_type,
        headers,
        payload,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_armor_roundtrip() {
        let payload = b"Hello, OpenPGP!";
        let headers = [("Version", "pgpbridge"), ("Comment", "test")];

        let armored = armor_encode(ArmorType::PublicKey, &headers, payload);
        assert!(armored.starts_with("-----BEGIN PGP PUBLIC KEY BLOCK-----\n"));
        assert!(armored.ends_with("-----END PGP PUBLIC KEY BLOCK-----\n"));

        let decoded = armor_decode(&armored).unwrap();
        assert_eq!(decoded.armor_type, ArmorType::PublicKey);
        assert_eq!(decoded.headers.get("Comment"), Some(&"test".to_string()));
        assert_eq!(decoded.payload, payload);
    }

    #[test]
    fn test_armor_long_payload_wraps() {
        let payload = vec![7u8; 1024];
        let armored = armor_encode(ArmorType::Message, &[], &payload);

        assert!(armored.lines().all(|l| l.len() <= 64));
        assert_eq!(armor_decode(&armored).unwrap().payload, payload);
    }

    #[test]
    fn test_crc24_known_value() {
        // Empty input yields the initial register
        assert_eq!(crc24(b""), CRC24_INIT);
        assert_ne!(crc24(b"a"), crc24(b"b"));
    }

    #[test]
    fn test_armor_checksum_mismatch() {
        let armored = armor_encode(ArmorType::Message, &[], b"original");
        let tampered = armored.replacen(
            &BASE64.encode(b"original"),
            &BASE64.encode(b"tampered"),
            1,
        );

        assert!(matches!(
            armor_decode(&tampered),
            Err(ArmorError::Checksum { .. })
        ));
    }

    #[test]
    fn test_armor_missing_end() {
        let armored = "-----BEGIN PGP MESSAGE-----\n\nAAAA\n";
        assert!(matches!(
            armor_decode(armored),
            Err(ArmorError::MissingEnd("MESSAGE"))
        ));
    }

    #[test]
    fn test_armor_unknown_label() {
        let armored = "-----BEGIN PGP SECRET THING-----\n\n-----END PGP SECRET THING-----\n";
        assert!(matches!(
            armor_decode(armored),
            Err(ArmorError::UnknownType(_))
        ));
    }

    #[test]
    fn test_expect_rejects_other_type() {
        let armored = armor_encode(ArmorType::Signature, &[], b"sig");
        let block = armor_decode(&armored).unwrap();
        assert!(block.require_type(ArmorType::Message).is_err());
    }
}
