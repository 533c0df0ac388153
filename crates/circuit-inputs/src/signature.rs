//! Signature encoding for circuit consumption.
//!
//! A signature is a compressed G2 point. Depending on the circuit, it is
//! consumed either as the raw compressed bytes (`Array` mode) or as the
//! limb-encoded affine coordinates (`Limbs` mode). The mode is an explicit
//! input at every call site, never inferred.

use serde::Serialize;

use crate::error::Result;
use crate::hexutil;
use crate::limbs::{LimbConfig, Limbs};
use crate::point::G2Affine;

/// How a value is presented to the circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Raw byte array, one integer in `[0, 255]` per byte.
    Array,
    /// Per-coordinate fixed-width limb sequences.
    Limbs,
}

/// A value in one of the two circuit input shapes.
///
/// Serializes untagged: a flat byte array or the `[[x.c0, x.c1],
/// [y.c0, y.c1]]` limb nesting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CircuitValue {
    Bytes(Vec<u8>),
    G2Limbs([[Limbs; 2]; 2]),
}

/// Encode a hex-encoded compressed G2 signature for the selected mode.
///
/// `Array` mode passes the compressed bytes through unchanged (the circuit
/// unpacks them bit-wise itself); `Limbs` mode decompresses and validates
/// the point first, so a forged or off-subgroup signature fails here rather
/// than inside the prover.
pub fn encode_signature(hex: &str, mode: OutputMode, cfg: LimbConfig) -> Result<CircuitValue> {
    match mode {
        OutputMode::Array => Ok(CircuitValue::Bytes(hexutil::byte_array(hex)?)),
        OutputMode::Limbs => {
            let point = G2Affine::from_hex(hex)?;
            Ok(CircuitValue::G2Limbs(point.to_limbs(cfg)?))
        }
    }
}
