use crate::error::EngineResult;
use crate::options::{Entity, FileHints, KeyOptions, KeyPair, Options};
use std::sync::Arc;

/// An OpenPGP engine
///
/// One method per bridge operation. The bridge never interprets the
/// cryptography: it forwards decoded parameters and reshapes the result.
/// Text variants take and return armored text, `*_bytes` variants take and
/// return raw packets, `*_file` variants stream between paths and return the
/// number of bytes written.
///
/// Implementations must be reentrant: a single handle is shared read-only by
/// concurrent boundary calls.
pub trait PgpEngine: Send + Sync {
    /// Human-readable name
    fn name(&self) -> &'static str;

    fn decrypt(
        &self,
        message: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<String>;

    fn decrypt_file(
        &self,
        input: &str,
        output: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<i64>;

    fn decrypt_bytes(
        &self,
        message: &[u8],
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<Vec<u8>>;

    /// Encrypt for `public_key`, signing with `signed` when present
    fn encrypt(
        &self,
        message: &str,
        public_key: &str,
        signed: Option<&Entity>,
        file_hints: &FileHints,
        options: &KeyOptions,
    ) -> EngineResult<String>;

    fn encrypt_file(
        &self,
        input: &str,
        output: &str,
        public_key: &str,
        signed: Option<&Entity>,
        file_hints: &FileHints,
        options: &KeyOptions,
    ) -> EngineResult<i64>;

    fn encrypt_bytes(
        &self,
        message: &[u8],
        public_key: &str,
        signed: Option<&Entity>,
        file_hints: &FileHints,
        options: &KeyOptions,
    ) -> EngineResult<Vec<u8>>;

    fn sign(
        &self,
        message: &str,
        public_key: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<String>;

    fn sign_file(
        &self,
        input: &str,
        public_key: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<String>;

    fn sign_bytes(
        &self,
        message: &[u8],
        public_key: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<Vec<u8>>;

    /// Sign raw bytes, returning an armored signature
    fn sign_bytes_to_string(
        &self,
        message: &[u8],
        public_key: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<String>;

    fn verify(&self, signature: &str, message: &str, public_key: &str) -> EngineResult<bool>;

    fn verify_file(&self, signature: &str, input: &str, public_key: &str) -> EngineResult<bool>;

    fn verify_bytes(&self, signature: &str, message: &[u8], public_key: &str)
    -> EngineResult<bool>;

    fn decrypt_symmetric(
        &self,
        message: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<String>;

    fn decrypt_symmetric_file(
        &self,
        input: &str,
        output: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<i64>;

    fn decrypt_symmetric_bytes(
        &self,
        message: &[u8],
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<Vec<u8>>;

    fn encrypt_symmetric(
        &self,
        message: &str,
        passphrase: &str,
        file_hints: &FileHints,
        options: &KeyOptions,
    ) -> EngineResult<String>;

    fn encrypt_symmetric_file(
        &self,
        input: &str,
        output: &str,
        passphrase: &str,
        file_hints: &FileHints,
        options: &KeyOptions,
    ) -> EngineResult<i64>;

    fn encrypt_symmetric_bytes(
        &self,
        message: &[u8],
        passphrase: &str,
        file_hints: &FileHints,
        options: &KeyOptions,
    ) -> EngineResult<Vec<u8>>;

    /// Generate a new armored key pair
    fn generate(&self, options: &Options) -> EngineResult<KeyPair>;

    /// Wrap a binary packet in ASCII armor
    fn armor_encode(&self, packet: &[u8]) -> EngineResult<String>;
}

/// Shared handles forward to the engine they point at
impl<E: PgpEngine + ?Sized> PgpEngine for Arc<E> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn decrypt(
        &self,
        message: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<String> {
        (**self).decrypt(message, private_key, passphrase, options)
    }

    fn decrypt_file(
        &self,
        input: &str,
        output: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<i64> {
        (**self).decrypt_file(input, output, private_key, passphrase, options)
    }

    fn decrypt_bytes(
        &self,
        message: &[u8],
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<Vec<u8>> {
        (**self).decrypt_bytes(message, private_key, passphrase, options)
    }

    fn encrypt(
        &self,
        message: &str,
        public_key: &str,
        signed: Option<&Entity>,
        file_hints: &FileHints,
        options: &KeyOptions,
    ) -> EngineResult<String> {
        (**self).encrypt(message, public_key, signed, file_hints, options)
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
        (**self).encrypt_file(input, output, public_key, signed, file_hints, options)
    }

    fn encrypt_bytes(
        &self,
        message: &[u8],
        public_key: &str,
        signed: Option<&Entity>,
        file_hints: &FileHints,
        options: &KeyOptions,
    ) -> EngineResult<Vec<u8>> {
        (**self).encrypt_bytes(message, public_key, signed, file_hints, options)
    }

    fn sign(
        &self,
        message: &str,
        public_key: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<String> {
        (**self).sign(message, public_key, private_key, passphrase, options)
    }

    fn sign_file(
        &self,
        input: &str,
        public_key: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<String> {
        (**self).sign_file(input, public_key, private_key, passphrase, options)
    }

    fn sign_bytes(
        &self,
        message: &[u8],
        public_key: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<Vec<u8>> {
        (**self).sign_bytes(message, public_key, private_key, passphrase, options)
    }

    fn sign_bytes_to_string(
        &self,
        message: &[u8],
        public_key: &str,
        private_key: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<String> {
        (**self).sign_bytes_to_string(message, public_key, private_key, passphrase, options)
    }

    fn verify(&self, signature: &str, message: &str, public_key: &str) -> EngineResult<bool> {
        (**self).verify(signature, message, public_key)
    }

    fn verify_file(&self, signature: &str, input: &str, public_key: &str) -> EngineResult<bool> {
        (**self).verify_file(signature, input, public_key)
    }

    fn verify_bytes(
        &self,
        signature: &str,
        message: &[u8],
        public_key: &str,
    ) -> EngineResult<bool> {
        (**self).verify_bytes(signature, message, public_key)
    }

    fn decrypt_symmetric(
        &self,
        message: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<String> {
        (**self).decrypt_symmetric(message, passphrase, options)
    }

    fn decrypt_symmetric_file(
        &self,
        input: &str,
        output: &str,
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<i64> {
        (**self).decrypt_symmetric_file(input, output, passphrase, options)
    }

    fn decrypt_symmetric_bytes(
        &self,
        message: &[u8],
        passphrase: &str,
        options: &KeyOptions,
    ) -> EngineResult<Vec<u8>> {
        (**self).decrypt_symmetric_bytes(message, passphrase, options)
    }

    fn encrypt_symmetric(
        &self,
        message: &str,
        passphrase: &str,
        file_hints: &FileHints,
        options: &KeyOptions,
    ) -> EngineResult<String> {
        (**self).encrypt_symmetric(message, passphrase, file_hints, options)
    }

    fn encrypt_symmetric_file(
        &self,
        input: &str,
        output: &str,
        passphrase: &str,
        file_hints: &FileHints,
        options: &KeyOptions,
    ) -> EngineResult<i64> {
        (**self).encrypt_symmetric_file(input, output, passphrase, file_hints, options)
    }

    fn encrypt_symmetric_bytes(
        &self,
        message: &[u8],
        passphrase: &str,
        file_hints: &FileHints,
        options: &KeyOptions,
    ) -> EngineResult<Vec<u8>> {
        (**self).encrypt_symmetric_bytes(message, passphrase, file_hints, options)
    }

    fn generate(&self, options: &Options) -> EngineResult<KeyPair> {
        (**self).generate(options)
    }

    fn armor_encode(&self, packet: &[u8]) -> EngineResult<String> {
        (**self).armor_encode(packet)
    }
}
