//! Name-based dispatch
//!
//! `dispatch` resolves the name against the catalog, decodes the request,
//! calls the engine and encodes the result. Unknown names and corrupt
//! buffers are the only failures returned as `Err`; engine failures are
//! encoded into the response.

use crate::error::{BridgeError, BridgeResult};
use crate::operation::Operation;
use crate::request::{
    ArmorEncodeParams, DecodeRequest, DecryptFileParams, DecryptParams, EncryptFileParams,
    EncryptParams, GenerateParams, SignFileParams, SignParams, SymmetricDecryptFileParams,
    SymmetricDecryptParams, SymmetricEncryptFileParams, SymmetricEncryptParams, VerifyFileParams,
    VerifyParams,
};
use crate::response::{ResponseValue, encode_response};
use pgpbridge_core::{EngineResult, PgpEngine};
use tracing::{debug, instrument, warn};

/// Run one boundary call against `engine`
#[instrument(
    level = "debug",
    skip(engine, payload),
    fields(engine = engine.name(), payload_len = payload.len())
)]
pub fn dispatch<E>(engine: &E, name: &str, payload: &[u8]) -> BridgeResult<Vec<u8>>
where
    E: PgpEngine + ?Sized,
{
    let operation: Operation = name.parse().inspect_err(|_| {
        warn!("Unknown operation");
    })?;
    operation.invoke(engine, payload)
}

impl Operation {
    /// Decode `payload` as this operation's request and run it
    pub fn invoke<E>(self, engine: &E, payload: &[u8]) -> BridgeResult<Vec<u8>>
    where
        E: PgpEngine + ?Sized,
    {
        match self {
            Self::Decrypt => self.handle(payload, |p: DecryptParams<String>| {
                engine.decrypt(&p.message, &p.private_key, &p.passphrase, &p.options)
            }),
            Self::DecryptFile => self.handle(payload, |p: DecryptFileParams| {
                engine.decrypt_file(&p.input, &p.output, &p.private_key, &p.passphrase, &p.options)
            }),
            Self::DecryptBytes => self.handle(payload, |p: DecryptParams<Vec<u8>>| {
                engine.decrypt_bytes(&p.message, &p.private_key, &p.passphrase, &p.options)
            }),
            Self::Encrypt => self.handle(payload, |p: EncryptParams<String>| {
                engine.encrypt(
                    &p.message,
                    &p.public_key,
                    p.signed.as_ref(),
                    &p.file_hints,
                    &p.options,
                )
            }),
            Self::EncryptFile => self.handle(payload, |p: EncryptFileParams| {
                engine.encrypt_file(
                    &p.input,
                    &p.output,
                    &p.public_key,
                    p.signed.as_ref(),
                    &p.file_hints,
                    &p.options,
                )
            }),
            Self::EncryptBytes => self.handle(payload, |p: EncryptParams<Vec<u8>>| {
                engine.encrypt_bytes(
                    &p.message,
                    &p.public_key,
                    p.signed.as_ref(),
                    &p.file_hints,
                    &p.options,
                )
            }),
            Self::Sign => self.handle(payload, |p: SignParams<String>| {
                engine.sign(
                    &p.message,
                    &p.public_key,
                    &p.private_key,
                    &p.passphrase,
                    &p.options,
                )
            }),
            Self::SignFile => self.handle(payload, |p: SignFileParams| {
                engine.sign_file(
                    &p.input,
                    &p.public_key,
                    &p.private_key,
                    &p.passphrase,
                    &p.options,
                )
            }),
            Self::SignBytes => self.handle(payload, |p: SignParams<Vec<u8>>| {
                engine.sign_bytes(
                    &p.message,
                    &p.public_key,
                    &p.private_key,
                    &p.passphrase,
                    &p.options,
                )
            }),
            Self::SignBytesToString => self.handle(payload, |p: SignParams<Vec<u8>>| {
                engine.sign_bytes_to_string(
                    &p.message,
                    &p.public_key,
                    &p.private_key,
                    &p.passphrase,
                    &p.options,
                )
            }),
            Self::Verify => self.handle(payload, |p: VerifyParams<String>| {
                engine.verify(&p.signature, &p.message, &p.public_key)
            }),
            Self::VerifyFile => self.handle(payload, |p: VerifyFileParams| {
                engine.verify_file(&p.signature, &p.input, &p.public_key)
            }),
            Self::VerifyBytes => self.handle(payload, |p: VerifyParams<Vec<u8>>| {
                engine.verify_bytes(&p.signature, &p.message, &p.public_key)
            }),
            Self::DecryptSymmetric => self.handle(payload, |p: SymmetricDecryptParams<String>| {
                engine.decrypt_symmetric(&p.message, &p.passphrase, &p.options)
            }),
            Self::DecryptSymmetricFile => {
                self.handle(payload, |p: SymmetricDecryptFileParams| {
                    engine.decrypt_symmetric_file(&p.input, &p.output, &p.passphrase, &p.options)
                })
            }
            Self::DecryptSymmetricBytes => {
                self.handle(payload, |p: SymmetricDecryptParams<Vec<u8>>| {
                    engine.decrypt_symmetric_bytes(&p.message, &p.passphrase, &p.options)
                })
            }
            Self::EncryptSymmetric => self.handle(payload, |p: SymmetricEncryptParams<String>| {
                engine.encrypt_symmetric(&p.message, &p.passphrase, &p.file_hints, &p.options)
            }),
            Self::EncryptSymmetricFile => {
                self.handle(payload, |p: SymmetricEncryptFileParams| {
                    engine.encrypt_symmetric_file(
                        &p.input,
                        &p.output,
                        &p.passphrase,
                        &p.file_hints,
                        &p.options,
                    )
                })
            }
            Self::EncryptSymmetricBytes => {
                self.handle(payload, |p: SymmetricEncryptParams<Vec<u8>>| {
                    engine.encrypt_symmetric_bytes(
                        &p.message,
                        &p.passphrase,
                        &p.file_hints,
                        &p.options,
                    )
                })
            }
            Self::Generate => {
                self.handle(payload, |p: GenerateParams| engine.generate(&p.options))
            }
            Self::ArmorEncode => {
                self.handle(payload, |p: ArmorEncodeParams| engine.armor_encode(&p.packet))
            }
        }
    }

    fn handle<P, T>(
        self,
        payload: &[u8],
        call: impl FnOnce(P) -> EngineResult<T>,
    ) -> BridgeResult<Vec<u8>>
    where
        P: DecodeRequest,
        T: ResponseValue,
    {
        debug_assert_eq!(T::SHAPE, self.shape());

        let params = P::decode(payload).map_err(|source| {
            warn!(operation = %self, error = %source, "Failed to decode request");
            BridgeError::Decode {
                operation: self,
                source,
            }
        })?;

        let result = call(params);
        if let Err(e) = &result {
            debug!(operation = %self, error = %e, "Engine call failed");
        }
        Ok(encode_response(result))
    }
}

/// An engine bound to the dispatcher
///
/// Holds no per-call state; one `Bridge` may serve concurrent callers when
/// the engine is shareable.
#[derive(Debug, Clone, Default)]
pub struct Bridge<E> {
    engine: E,
}

impl<E: PgpEngine> Bridge<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Name-based boundary call
    pub fn call(&self, name: &str, payload: &[u8]) -> BridgeResult<Vec<u8>> {
        dispatch(&self.engine, name, payload)
    }
}
