//! Hex byte decoding.
//!
//! Circuits consume Merkle roots, SSZ hashes, and bitfields as plain byte
//! arrays; this module is the single place wire-format hex is turned into
//! those arrays. Byte order is preserved most-significant-first, exactly as
//! written in the source string. Any reordering is the caller's problem.

use crate::error::{EncodeError, Result};

/// Strip an optional `0x`/`0X` prefix.
pub fn strip_prefix(hex: &str) -> &str {
    if hex.len() >= 2 && (hex.starts_with("0x") || hex.starts_with("0X")) {
        &hex[2..]
    } else {
        hex
    }
}

/// Decode a hex string (optionally `0x`-prefixed) into bytes.
///
/// An empty body is a malformed record, not an empty success: a zero-length
/// hash or pubkey in a batch file always means upstream data loss.
pub fn decode_bytes(hex: &str) -> Result<Vec<u8>> {
    let body = strip_prefix(hex);
    if body.is_empty() {
        return Err(EncodeError::MalformedHex {
            input: hex.to_string(),
            reason: "empty hex string".to_string(),
        });
    }
    if body.len() % 2 != 0 {
        return Err(EncodeError::MalformedHex {
            input: EncodeError::clip(hex),
            reason: format!("odd number of hex digits ({})", body.len()),
        });
    }
    const_hex::decode(body).map_err(|e| EncodeError::MalformedHex {
        input: EncodeError::clip(hex),
        reason: e.to_string(),
    })
}

/// The circuit-facing byte-array form: one integer in `[0, 255]` per byte.
///
/// Identical to [`decode_bytes`] today; kept as the named entry point the
/// drivers call so the output contract is explicit at the call sites.
pub fn byte_array(hex: &str) -> Result<Vec<u8>> {
    decode_bytes(hex)
}
