//! Text encode/decode for hosts without a native codec
//!
//! Supports UTF-8 and UTF-16 in either byte order. Decoding follows
//! `TextDecoder` rules: with `fatal` unset malformed input becomes U+FFFD,
//! and a leading byte order mark is stripped unless `ignore_bom` is set.

use std::str::FromStr;
use thiserror::Error;

const BOM: char = '\u{FEFF}';

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TextError {
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("Malformed {0} input")]
    Malformed(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl TextEncoding {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16Le => "utf-16le",
            Self::Utf16Be => "utf-16be",
        }
    }
}

impl FromStr for TextEncoding {
    type Err = TextError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" | "unicode-1-1-utf-8" => Ok(Self::Utf8),
            // "utf-16" means little endian, as in the WHATWG encoding table
            "utf-16le" | "utf-16" => Ok(Self::Utf16Le),
            "utf-16be" => Ok(Self::Utf16Be),
            _ => Err(TextError::UnsupportedEncoding(label.to_string())),
        }
    }
}

pub fn encode_text(input: &str, encoding: TextEncoding) -> Vec<u8> {
    match encoding {
        TextEncoding::Utf8 => input.as_bytes().to_vec(),
        TextEncoding::Utf16Le => input.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        TextEncoding::Utf16Be => input.encode_utf16().flat_map(u16::to_be_bytes).collect(),
    }
}

pub fn decode_text(
    input: &[u8],
    encoding: TextEncoding,
    fatal: bool,
    ignore_bom: bool,
) -> Result<String, TextError> {
    let decoded = match encoding {
        TextEncoding::Utf8 if fatal => std::str::from_utf8(input)
            .map_err(|_| TextError::Malformed(encoding.label()))?
            .to_string(),
        TextEncoding::Utf8 => String::from_utf8_lossy(input).into_owned(),
        TextEncoding::Utf16Le => decode_utf16(input, u16::from_le_bytes, fatal)?,
        TextEncoding::Utf16Be => decode_utf16(input, u16::from_be_bytes, fatal)?,
    };

    match decoded.strip_prefix(BOM) {
        Some(rest) if !ignore_bom => Ok(rest.to_string()),
        _ => Ok(decoded),
    }
}

fn decode_utf16(input: &[u8], unit: fn([u8; 2]) -> u16, fatal: bool) -> Result<String, TextError> {
    let chunks = input.chunks_exact(2);
    let trailing = !chunks.remainder().is_empty();
    let units = chunks.map(|pair| unit([pair[0], pair[1]]));

    let mut out = String::with_capacity(input.len() / 2);
    for c in char::decode_utf16(units) {
        match c {
            Ok(c) => out.push(c),
            Err(_) if fatal => return Err(TextError::Malformed("utf-16")),
            Err(_) => out.push(char::REPLACEMENT_CHARACTER),
        }
    }

    if trailing {
        if fatal {
            return Err(TextError::Malformed("utf-16"));
        }
        out.push(char::REPLACEMENT_CHARACTER);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!("UTF-8".parse::<TextEncoding>().unwrap(), TextEncoding::Utf8);
        assert_eq!("utf8".parse::<TextEncoding>().unwrap(), TextEncoding::Utf8);
        assert_eq!(
            "unicode-1-1-utf-8".parse::<TextEncoding>().unwrap(),
            TextEncoding::Utf8
        );
        assert_eq!(
            "utf-16be".parse::<TextEncoding>().unwrap(),
            TextEncoding::Utf16Be
        );
        assert_eq!(
            "latin1".parse::<TextEncoding>(),
            Err(TextError::UnsupportedEncoding("latin1".into()))
        );
    }

    #[test]
    fn test_utf16_roundtrip() {
        let text = "Grüße, 世界 🦀";
        for encoding in [TextEncoding::Utf16Le, TextEncoding::Utf16Be] {
            let bytes = encode_text(text, encoding);
            assert_eq!(decode_text(&bytes, encoding, true, false).unwrap(), text);
        }
        assert_eq!(encode_text("A", TextEncoding::Utf16Le), vec![0x41, 0x00]);
        assert_eq!(encode_text("A", TextEncoding::Utf16Be), vec![0x00, 0x41]);
    }

    #[test]
    fn test_malformed_utf8() {
        let bytes = b"ok\xFFok";
        assert_eq!(
            decode_text(bytes, TextEncoding::Utf8, false, false).unwrap(),
            "ok\u{FFFD}ok"
        );
        assert!(decode_text(bytes, TextEncoding::Utf8, true, false).is_err());
    }

    #[test]
    fn test_odd_length_utf16() {
        let bytes = [0x41, 0x00, 0x42];
        assert_eq!(
            decode_text(&bytes, TextEncoding::Utf16Le, false, false).unwrap(),
            "A\u{FFFD}"
        );
        assert!(decode_text(&bytes, TextEncoding::Utf16Le, true, false).is_err());
    }

    #[test]
    fn test_lone_surrogate() {
        let bytes = [0x00, 0xD8, 0x41, 0x00];
        assert_eq!(
            decode_text(&bytes, TextEncoding::Utf16Le, false, false).unwrap(),
            "\u{FFFD}A"
        );
        assert!(decode_text(&bytes, TextEncoding::Utf16Le, true, false).is_err());
    }

    #[test]
    fn test_bom_handling() {
        let bytes = b"\xEF\xBB\xBFhi";
        assert_eq!(
            decode_text(bytes, TextEncoding::Utf8, false, false).unwrap(),
            "hi"
        );
        assert_eq!(
            decode_text(bytes, TextEncoding::Utf8, false, true).unwrap(),
            "\u{FEFF}hi"
        );

        let be = [0xFE, 0xFF, 0x00, 0x41];
        assert_eq!(
            decode_text(&be, TextEncoding::Utf16Be, true, false).unwrap(),
            "A"
        );
    }
}
