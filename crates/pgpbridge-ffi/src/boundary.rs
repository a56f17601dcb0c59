//! Exported C symbols
//!
//! Every buffer handed to the host is owned by this library and must be
//! returned through [`OpenPGPFreeBytesReturn`] or [`OpenPGPFreeString`].

#![allow(non_snake_case)]

use crate::state;
use crate::text::{self, TextEncoding};
use std::ffi::{CStr, CString, c_char, c_int, c_void};
use std::panic::{self, AssertUnwindSafe};
use std::ptr;

/// Result of a boundary call
///
/// Exactly one of `message` and `error` is non-null. `size` is the length of
/// `message` in bytes and zero when `error` is set.
#[repr(C)]
#[derive(Debug)]
pub struct BytesReturn {
    pub message: *mut c_void,
    pub size: c_int,
    pub error: *mut c_char,
}

impl BytesReturn {
    fn from_result(result: Result<Vec<u8>, String>) -> *mut Self {
        let value = match result {
            Ok(bytes) => match c_int::try_from(bytes.len()) {
                Ok(size) => {
                    let message = Box::into_raw(bytes.into_boxed_slice()).cast::<c_void>();
                    Self {
                        message,
                        size,
                        error: ptr::null_mut(),
                    }
                }
                Err(_) => Self::failure(format!("Response too large: {} bytes", bytes.len())),
            },
            Err(e) => Self::failure(e),
        };
        Box::into_raw(Box::new(value))
    }

    fn failure(error: String) -> Self {
        Self {
            message: ptr::null_mut(),
            size: 0,
            error: c_string(error),
        }
    }
}

/// Allocate a C string, replacing interior NULs
fn c_string(s: String) -> *mut c_char {
    CString::new(s.replace('\0', " "))
        .unwrap_or_default()
        .into_raw()
}

/// Run `f` without letting a panic cross the boundary
fn guarded<T>(f: impl FnOnce() -> Result<T, String>) -> Result<T, String> {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        let reason = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        tracing::error!("Panic inside bridge call: {reason}");
        Err(format!("internal error: {reason}"))
    })
}

/// Borrow a NUL-terminated UTF-8 argument
///
/// # Safety
///
/// `ptr` must be null or point to a valid NUL-terminated string.
unsafe fn str_arg<'a>(ptr: *const c_char, what: &str) -> Result<&'a str, String> {
    if ptr.is_null() {
        return Err(format!("{what} is null"));
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|_| format!("{what} is not valid UTF-8"))
}

/// Borrow a length-delimited byte argument
///
/// # Safety
///
/// When `size > 0`, `ptr` must point to `size` readable bytes.
unsafe fn bytes_arg<'a>(ptr: *const c_void, size: c_int, what: &str) -> Result<&'a [u8], String> {
    let len = usize::try_from(size).map_err(|_| format!("{what} size is negative: {size}"))?;
    if len == 0 {
        return Ok(&[]);
    }
    if ptr.is_null() {
        return Err(format!("{what} is null but size is {size}"));
    }
    Ok(unsafe { std::slice::from_raw_parts(ptr.cast::<u8>(), len) })
}

/// Invoke the named operation with an encoded request
///
/// Engine failures come back inside `message` as an encoded response.
/// `error` is set only for failures of the call itself: unknown operation,
/// undecodable payload, bad arguments or no usable engine.
///
/// # Safety
///
/// `name` must be a valid NUL-terminated string. When `payload_size > 0`,
/// `payload` must point to `payload_size` readable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn OpenPGPBridgeCall(
    name: *const c_char,
    payload: *const c_void,
    payload_size: c_int,
) -> *mut BytesReturn {
    let result = guarded(|| {
        let name = unsafe { str_arg(name, "operation name") }?;
        let payload = unsafe { bytes_arg(payload, payload_size, "payload") }?;
        let engine = state::engine().map_err(|e| format!("{e:#}"))?;
        pgpbridge::dispatch(engine, name, payload).map_err(|e| e.to_string())
    });
    BytesReturn::from_result(result)
}

/// Release a [`BytesReturn`] and the buffers it owns
///
/// # Safety
///
/// `ptr` must be null or a value returned by this library that has not
/// already been freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn OpenPGPFreeBytesReturn(ptr: *mut BytesReturn) {
    if ptr.is_null() {
        return;
    }
    let value = unsafe { Box::from_raw(ptr) };
    if !value.message.is_null() {
        let len = usize::try_from(value.size).unwrap_or(0);
        let slice = ptr::slice_from_raw_parts_mut(value.message.cast::<u8>(), len);
        drop(unsafe { Box::from_raw(slice) });
    }
    unsafe { OpenPGPFreeString(value.error) };
}

/// Release a string allocated by this library
///
/// # Safety
///
/// `ptr` must be null or a string returned by this library that has not
/// already been freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn OpenPGPFreeString(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(unsafe { CString::from_raw(ptr) });
    }
}

/// Encode `input` into `encoding`
///
/// # Safety
///
/// `input` and `encoding` must be valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn OpenPGPEncodeText(
    input: *const c_char,
    encoding: *const c_char,
) -> *mut BytesReturn {
    let result = guarded(|| {
        let input = unsafe { str_arg(input, "input") }?;
        let encoding = unsafe { str_arg(encoding, "encoding") }?;
        let encoding: TextEncoding = encoding.parse().map_err(|e: text::TextError| e.to_string())?;
        Ok(text::encode_text(input, encoding))
    });
    BytesReturn::from_result(result)
}

/// Decode `size` bytes of `input` from `encoding`
///
/// Returns null when the encoding is unsupported, when `fatal` is set and the
/// input is malformed, or when the decoded text holds a NUL. `stream` is
/// accepted for compatibility; every call decodes a complete buffer.
///
/// # Safety
///
/// When `size > 0`, `input` must point to `size` readable bytes. `encoding`
/// must be a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn OpenPGPDecodeText(
    input: *const c_void,
    size: c_int,
    encoding: *const c_char,
    fatal: c_int,
    ignore_bom: c_int,
    _stream: c_int,
) -> *mut c_char {
    let result = guarded(|| {
        let input = unsafe { bytes_arg(input, size, "input") }?;
        let encoding = unsafe { str_arg(encoding, "encoding") }?;
        let encoding: TextEncoding = encoding.parse().map_err(|e: text::TextError| e.to_string())?;
        text::decode_text(input, encoding, fatal != 0, ignore_bom != 0).map_err(|e| e.to_string())
    });

    match result.map(CString::new) {
        Ok(Ok(decoded)) => decoded.into_raw(),
        Ok(Err(_)) => {
            tracing::debug!("Decoded text contains a NUL byte");
            ptr::null_mut()
        }
        Err(e) => {
            tracing::debug!("Text decode failed: {e}");
            ptr::null_mut()
        }
    }
}
