//! Mock OpenPGP engine for testing
//!
//! NOT SECURE and NOT OpenPGP - the "public key" is the shared secret, messages
//! are sealed with XChaCha20 plus a keyed BLAKE3 tag, and signatures are
//! keyed BLAKE3 MACs. Output is armored with real PGP armor so hosts can
//! exercise every bridge operation end to end without a native PGP library.
//!
//! Algorithm selections in `KeyOptions` are accepted and ignored.

use crate::armor::{ArmorType, armor_decode, armor_encode};
use crate::engine::PgpEngine;
use crate::error::{EngineError, EngineResult};
use crate::options::{Entity, FileHints, KeyOptions, KeyPair, Options};
use chacha20::XChaCha20;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use rand::{RngCore, rngs::OsRng};
use tracing::debug;
use zeroize::Zeroizing;

const KEY_LEN: usize = 32;
const NONCE_LEN: usize = 24;
const TAG_LEN: usize = 16;
const SIGNATURE_LEN: usize = 32;

const FLAG_PLAIN: u8 = 0;
const FLAG_PROTECTED: u8 = 1;

const PRIVATE_KEY_CONTEXT: &str = "pgpbridge mock 2024-01-01 private key passphrase";
const SYMMETRIC_CONTEXT: &str = "pgpbridge mock 2024-01-01 symmetric passphrase";

type KeyMaterial = Zeroizing<[u8; KEY_LEN]>;

#[derive(Debug, Clone, Copy, Default)]
pub struct MockEngine;

impl MockEngine {
    fn public_key(armored: &str) -> EngineResult<KeyMaterial> {
        let block = armor_decode(armored)
            .and_then(|b| b.require_type(ArmorType::PublicKey))
            .map_err(|e| EngineError::InvalidKey(e.to_string()))?;
        to_key(&block.payload)
    }

    fn private_key(armored: &str, passphrase: &str) -> EngineResult<KeyMaterial> {
        let block = armor_decode(armored)
            .and_then(|b| b.require_type(ArmorType::PrivateKey))
            .map_err(|e| EngineError::InvalidKey(e.to_string()))?;

        match block.payload.split_first() {
            Some((&FLAG_PLAIN, key)) => to_key(key),
            Some((&FLAG_PROTECTED, sealed)) => {
                let wrap = Zeroizing::new(blake3::derive_key(
                    PRIVATE_KEY_CONTEXT,
                    passphrase.as_bytes(),
                ));
                let key = open(&wrap, sealed).map_err(|_| EngineError::Passphrase)?;
                to_key(&key)
            }
            _ => Err(EngineError::InvalidKey("Unknown private key format".into())),
        }
    }

    /// Unlock the signing key, checking it against `public_key` when given
    fn signing_key(
        public_key: &str,
        private_key: &str,
        passphrase: &str,
    ) -> EngineResult<KeyMaterial> {
        let key = Self::private_key(private_key, passphrase)?;
        if !public_key.is_empty() && *Self::public_key(public_key)? != *key {
            return Err(EngineError::InvalidKey(
                "Public key does not match private key".into(),
            ));
        }
        Ok(key)
    }

    fn symmetric_key(passphrase: &str) -> EngineResult<KeyMaterial> {
        if passphrase.is_empty() {
            return Err(EngineError::Passphrase);
        }
        Ok(Zeroizing::new(blake3::derive_key(
            SYMMETRIC_CONTEXT,
            passphrase.as_bytes(),
        )))
    }

    fn check_signer(signed: Option<&Entity>) -> EngineResult<()> {
        if let Some(entity) = signed {
            Self::signing_key(&entity.public_key, &entity.private_key, &entity.passphrase)
                .map_err(|e| EngineError::Signing(e.to_string()))?;
        }
        Ok(())
    }

    fn signature(key: &KeyMaterial, message: &[u8]) -> [u8; SIGNATURE_LEN] {
        *blake3::keyed_hash(key, message).as_bytes()
    }

    fn check_signature(signature: &str, message: &[u8], public_key: &str) -> EngineResult<bool> {
        let key = Self::public_key(public_key)?;
        let block = armor_decode(signature)
            .and_then(|b| b.require_type(ArmorType::Signature))
            .map_err(|e| EngineError::Verification(e.to_string()))?;
        if block.payload.len() != SIGNATURE_LEN {
            return Err(EngineError::Verification(format!(
                "Signature must be {SIGNATURE_LEN} bytes, got {}",
                block.payload.len()
            )));
        }
        Ok(Self::signature(&key, message)[..] == block.payload[..])
    }
}

fn to_key(bytes: &[u8]) -> EngineResult<KeyMaterial> {
    let key: [u8; KEY_LEN] = bytes
        .try_into()
        .map_err(|_| EngineError::InvalidKey(format!("Key must be {KEY_LEN} bytes")))?;
    Ok(Zeroizing::new(key))
}

/// nonce || XChaCha20(plaintext) || tag
fn seal(key: &[u8; KEY_LEN], plaintext: &[u8]) -> Vec<u8> {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);

    let mut ct = plaintext.to_vec();
    let mut cipher = XChaCha20::new(key.into(), &nonce.into());
    cipher.apply_keystream(&mut ct);

    let mut sealed = nonce.to_vec();
    sealed.extend(ct);
    let tag = blake3::keyed_hash(key, &sealed);
    sealed.extend_from_slice(&tag.as_bytes()[..TAG_LEN]);
    sealed
}

fn open(key: &[u8; KEY_LEN], sealed: &[u8]) -> EngineResult<Vec<u8>> {
    if sealed.len() < NONCE_LEN + TAG_LEN {
        return Err(EngineError::Decryption("Ciphertext too short".into()));
    }

    let (body, tag) = sealed.split_at(sealed.len() - TAG_LEN);
    if blake3::keyed_hash(key, body).as_bytes()[..TAG_LEN] != *tag {
        return Err(EngineError::Decryption("Authentication failed".into()));
    }

    let (nonce, ct) = body.split_at(NONCE_LEN);
    let nonce: [u8; NONCE_LEN] = nonce
        .try_into()
        .map_err(|_| EngineError::Decryption("Invalid nonce".into()))?;

    let mut pt = ct.to_vec();
    let mut cipher = XChaCha20::new(key.into(), &nonce.into());
    cipher.apply_keystream(&mut pt);
    Ok(pt)
}

fn dearmor_message(message: &str) -> EngineResult<Vec<u8>> {
    let block = armor_decode(message)?.require_type(ArmorType::Message)?;
    Ok(block.payload)
}

fn into_text(plaintext: Vec<u8>) -> EngineResult<String> {
    String::from_utf8(plaintext)
        .map_err(|_| EngineError::Decryption("Plaintext is not valid UTF-8".into()))
}

fn write_output(output: &str, data: &[u8]) -> EngineResult<i64> {
    std::fs::write(output, data)?;
    debug!(bytes = data.len(), "wrote output file");
    Ok(data.len() as i64)
}

impl PgpEngine for MockEngine {
    fn name(&self) -> &'static str {
        "Mock (TESTING ONLY)"
    }

    fn decrypt(
        &self,
        message: &str,
        private_key: &str,
        passphrase: &str,
        _options: &KeyOptions,
    ) -> EngineResult<String> {
        let key = Self::private_key(private_key, passphrase)?;
        into_text(open(&key, &dearmor_message(message)?)?)
    }

    fn decrypt_file(
        &self,
        input: &str,
        output: &str,
        private_key: &str,
        passphrase: &str,
        _options: &KeyOptions,
    ) -> EngineResult<i64> {
        let key = Self::private_key(private_key, passphrase)?;
        let plaintext = open(&key, &std::fs::read(input)?)?;
        write_output(output, &plaintext)
    }

    fn decrypt_bytes(
        &self,
        message: &[u8],
        private_key: &str,
        passphrase: &str,
        _options: &KeyOptions,
    ) -> EngineResult<Vec<u8>> {
        let key = Self::private_key(private_key, passphrase)?;
        open(&key, message)
    }

    fn encrypt(
        &self,
        message: &str,
        public_key: &str,
        signed: Option<&Entity>,
        _file_hints: &FileHints,
        _options: &KeyOptions,
    ) -> EngineResult<String> {
        let key = Self::public_key(public_key)?;
        Self::check_signer(signed)?;
        Ok(armor_encode(
            ArmorType::Message,
            &[],
            &seal(&key, message.as_bytes()),
        ))
    }

    fn encrypt_file(
        &self,
        input: &str,
        output: &str,
        public_key: &str,
        signed: Option<&Entity>,
        _file_hints: &FileHints,
        _options: &KeyOptions,
    ) -> EngineResult<i64> {
        let key = Self::public_key(public_key)?;
        Self::check_signer(signed)?;
        let sealed = seal(&key, &std::fs::read(input)?);
        write_output(output, &sealed)
    }

    fn encrypt_bytes(
        &self,
        message: &[u8],
        public_key: &str,
        signed: Option<&Entity>,
        _file_hints: &FileHints,
        _options: &KeyOptions,
    ) -> EngineResult<Vec<u8>> {
        let key = Self::public_key(public_key)?;
        Self::check_signer(signed)?;
        Ok(seal(&key, message))
    }

    fn sign(
        &self,
        message: &str,
        public_key: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<String> {
        let key = Self::signing_key(public_key, private_key, passphrase)?;
        let sig = Self::signature(&key, message.as_bytes());
        Ok(armor_encode(ArmorType::Signature, &[("Hash", options.hash.as_str())], &sig))
    }

    fn sign_file(
        &self,
        input: &str,
        public_key: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<String> {
        let key = Self::signing_key(public_key, private_key, passphrase)?;
        let sig = Self::signature(&key, &std::fs::read(input)?);
        Ok(armor_encode(ArmorType::Signature, &[("Hash", options.hash.as_str())], &sig))
    }

    fn sign_bytes(
        &self,
        message: &[u8],
        public_key: &str,
        private_key: &str,
        passphrase: &str,
        _options: &KeyOptions,
    ) -> EngineResult<Vec<u8>> {
        let key = Self::signing_key(public_key, private_key, passphrase)?;
        Ok(Self::signature(&key, message).to_vec())
    }

    fn sign_bytes_to_string(
        &self,
        message: &[u8],
        public_key: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<String> {
        let key = Self::signing_key(public_key, private_key, passphrase)?;
        let sig = Self::signature(&key, message);
        Ok(armor_encode(ArmorType::Signature, &[("Hash", options.hash.as_str())], &sig))
    }

    fn verify(&self, signature: &str, message: &str, public_key: &str) -> EngineResult<bool> {
        Self::check_signature(signature, message.as_bytes(), public_key)
    }

    fn verify_file(&self, signature: &str, input: &str, public_key: &str) -> EngineResult<bool> {
        Self::check_signature(signature, &std::fs::read(input)?, public_key)
    }

    fn verify_bytes(
        &self,
        signature: &str,
        message: &[u8],
        public_key: &str,
    ) -> EngineResult<bool> {
        Self::check_signature(signature, message, public_key)
    }

    fn decrypt_symmetric(
        &self,
        message: &str,
        passphrase: &str,
        _options: &KeyOptions,
    ) -> EngineResult<String> {
        let key = Self::symmetric_key(passphrase)?;
        into_text(open(&key, &dearmor_message(message)?)?)
    }

    fn decrypt_symmetric_file(
        &self,
        input: &str,
        output: &str,
        passphrase: &str,
        _options: &KeyOptions,
    ) -> EngineResult<i64> {
        let key = Self::symmetric_key(passphrase)?;
        let plaintext = open(&key, &std::fs::read(input)?)?;
        write_output(output, &plaintext)
    }

    fn decrypt_symmetric_bytes(
        &self,
        message: &[u8],
        passphrase: &str,
        _options: &KeyOptions,
    ) -> EngineResult<Vec<u8>> {
        let key = Self::symmetric_key(passphrase)?;
        open(&key, message)
    }

    fn encrypt_symmetric(
        &self,
        message: &str,
        passphrase: &str,
        _file_hints: &FileHints,
        _options: &KeyOptions,
    ) -> EngineResult<String> {
        let key = Self::symmetric_key(passphrase)?;
        Ok(armor_encode(
            ArmorType::Message,
            &[],
            &seal(&key, message.as_bytes()),
        ))
    }

    fn encrypt_symmetric_file(
        &self,
        input: &str,
        output: &str,
        passphrase: &str,
        _file_hints: &FileHints,
        _options: &KeyOptions,
    ) -> EngineResult<i64> {
        let key = Self::symmetric_key(passphrase)?;
        let sealed = seal(&key, &std::fs::read(input)?);
        write_output(output, &sealed)
    }

    fn encrypt_symmetric_bytes(
        &self,
        message: &[u8],
        passphrase: &str,
        _file_hints: &FileHints,
        _options: &KeyOptions,
    ) -> EngineResult<Vec<u8>> {
        let key = Self::symmetric_key(passphrase)?;
        Ok(seal(&key, message))
    }

    fn generate(&self, options: &Options) -> EngineResult<KeyPair> {
        let mut key: KeyMaterial = Zeroizing::new([0u8; KEY_LEN]);
        OsRng.fill_bytes(&mut key[..]);

        let user_id = options.user_id();
        let mut headers = vec![("Version", "pgpbridge mock")];
        if !user_id.is_empty() {
            headers.push(("Comment", user_id.as_str()));
        }

        let private_payload = if options.passphrase.is_empty() {
            let mut payload = Zeroizing::new(vec![FLAG_PLAIN]);
            payload.extend_from_slice(&key[..]);
            payload
        } else {
            let wrap = Zeroizing::new(blake3::derive_key(
                PRIVATE_KEY_CONTEXT,
                options.passphrase.as_bytes(),
            ));
            let mut payload = Zeroizing::new(vec![FLAG_PROTECTED]);
            payload.extend(seal(&wrap, &key[..]));
            payload
        };

        Ok(KeyPair {
            public_key: armor_encode(ArmorType::PublicKey, &headers, &key[..]),
            private_key: armor_encode(ArmorType::PrivateKey, &headers, &private_payload),
        })
    }

    fn armor_encode(&self, packet: &[u8]) -> EngineResult<String> {
        Ok(armor_encode(ArmorType::Message, &[], packet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::HashAlgorithm;

    fn keypair(passphrase: &str) -> KeyPair {
        MockEngine
            .generate(&Options {
                name: "Test".into(),
                email: "test@example.com".into(),
                passphrase: passphrase.into(),
                ..Default::default()
            })
            .unwrap()
    }

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let kp = keypair("secret");
        let opts = KeyOptions::default();

        let encrypted = MockEngine
            .encrypt("hello", &kp.public_key, None, &FileHints::default(), &opts)
            .unwrap();
        assert!(encrypted.starts_with("-----BEGIN PGP MESSAGE-----"));

        let decrypted = MockEngine
            .decrypt(&encrypted, &kp.private_key, "secret", &opts)
            .unwrap();
        assert_eq!(decrypted, "hello");
    }

    #[test]
    fn test_wrong_passphrase() {
        let kp = keypair("secret");
        let opts = KeyOptions::default();
        let encrypted = MockEngine
            .encrypt_bytes(b"data", &kp.public_key, None, &FileHints::default(), &opts)
            .unwrap();

        let err = MockEngine
            .decrypt_bytes(&encrypted, &kp.private_key, "wrong", &opts)
            .unwrap_err();
        assert!(matches!(err, EngineError::Passphrase));
    }

    #[test]
    fn test_unprotected_key_ignores_passphrase() {
        let kp = keypair("");
        let opts = KeyOptions::default();
        let encrypted = MockEngine
            .encrypt_bytes(b"data", &kp.public_key, None, &FileHints::default(), &opts)
            .unwrap();

        let decrypted = MockEngine
            .decrypt_bytes(&encrypted, &kp.private_key, "anything", &opts)
            .unwrap();
        assert_eq!(decrypted, b"data");
    }

    #[test]
    fn test_wrong_key_fails_authentication() {
        let alice = keypair("");
        let bob = keypair("");
        let opts = KeyOptions::default();
        let encrypted = MockEngine
            .encrypt_bytes(b"data", &alice.public_key, None, &FileHints::default(), &opts)
            .unwrap();

        let err = MockEngine
            .decrypt_bytes(&encrypted, &bob.private_key, "", &opts)
            .unwrap_err();
        assert!(matches!(err, EngineError::Decryption(_)));
    }

    #[test]
    fn test_sign_verify() {
        let kp = keypair("pw");
        let opts = KeyOptions::default();
        let sig = MockEngine
            .sign("message", &kp.public_key, &kp.private_key, "pw", &opts)
            .unwrap();

        assert!(MockEngine.verify(&sig, "message", &kp.public_key).unwrap());
        assert!(!MockEngine.verify(&sig, "tampered", &kp.public_key).unwrap());
    }

    #[test]
    fn test_signature_names_hash() {
        let kp = keypair("");
        let opts = KeyOptions {
            hash: HashAlgorithm::Sha512,
            ..Default::default()
        };
        let sig = MockEngine
            .sign("message", &kp.public_key, &kp.private_key, "", &opts)
            .unwrap();

        let block = armor_decode(&sig).unwrap();
        assert_eq!(block.headers.get("Hash").map(String::as_str), Some("sha512"));
    }

    #[test]
    fn test_sign_rejects_mismatched_public_key() {
        let alice = keypair("");
        let bob = keypair("");
        let err = MockEngine
            .sign(
                "message",
                &bob.public_key,
                &alice.private_key,
                "",
                &KeyOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidKey(_)));
    }

    #[test]
    fn test_encrypt_with_bad_signer_fails() {
        let kp = keypair("");
        let signer = Entity {
            private_key: "not a key".into(),
            ..Default::default()
        };
        let err = MockEngine
            .encrypt(
                "hello",
                &kp.public_key,
                Some(&signer),
                &FileHints::default(),
                &KeyOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::Signing(_)));
    }

    #[test]
    fn test_symmetric_requires_passphrase() {
        let err = MockEngine
            .encrypt_symmetric("hi", "", &FileHints::default(), &KeyOptions::default())
            .unwrap_err();
        assert!(matches!(err, EngineError::Passphrase));
    }

    #[test]
    fn test_symmetric_file_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let plain = dir.path().join("plain.txt");
        let sealed = dir.path().join("sealed.bin");
        let restored = dir.path().join("restored.txt");
        std::fs::write(&plain, b"file contents").unwrap();

        let opts = KeyOptions::default();
        let written = MockEngine
            .encrypt_symmetric_file(
                plain.to_str().unwrap(),
                sealed.to_str().unwrap(),
                "pw",
                &FileHints::default(),
                &opts,
            )
            .unwrap();
        assert_eq!(written as usize, 13 + NONCE_LEN + TAG_LEN);

        let written = MockEngine
            .decrypt_symmetric_file(
                sealed.to_str().unwrap(),
                restored.to_str().unwrap(),
                "pw",
                &opts,
            )
            .unwrap();
        assert_eq!(written, 13);
        assert_eq!(std::fs::read(&restored).unwrap(), b"file contents");
    }

    #[test]
    fn test_missing_input_file_is_io_error() {
        let err = MockEngine
            .decrypt_symmetric_file(
                "/nonexistent/in",
                "/nonexistent/out",
                "pw",
                &KeyOptions::default(),
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::Io(_)));
    }
}
