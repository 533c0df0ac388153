//! BLS12-381 point normalization.
//!
//! Decompression and validation are delegated to blst; this module's own
//! job is to get from a hex-encoded point to canonical affine coordinates
//! as arbitrary-precision integers, and from there to limb sequences.
//!
//! Subgroup membership is always enforced, and the point at infinity is
//! rejected outright: there is no circuit input representation for it, and
//! silently emitting `(0, 0)` would alias a malformed key to a plausible
//! looking input.

use blst::{
    blst_bendian_from_fp, blst_fp, blst_p1_affine, blst_p1_affine_in_g1, blst_p1_affine_is_inf,
    blst_p1_deserialize, blst_p1_uncompress, blst_p2_affine, blst_p2_affine_in_g2,
    blst_p2_affine_is_inf, blst_p2_deserialize, blst_p2_uncompress, BLST_ERROR,
};
use num_bigint::BigUint;

use crate::error::{EncodeError, Result};
use crate::hexutil;
use crate::limbs::{LimbConfig, Limbs};

/// Compressed G1 point length (48 bytes).
pub const G1_COMPRESSED_LEN: usize = 48;

/// Uncompressed G1 point length (96 bytes).
pub const G1_UNCOMPRESSED_LEN: usize = 96;

/// Compressed G2 point length (96 bytes).
pub const G2_COMPRESSED_LEN: usize = 96;

/// Uncompressed G2 point length (192 bytes).
pub const G2_UNCOMPRESSED_LEN: usize = 192;

/// An affine G1 point (public-key subgroup), coordinates in canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct G1Affine {
    pub x: BigUint,
    pub y: BigUint,
}

/// An affine G2 point (signature subgroup). Each Fp2 coordinate is
/// `(c0, c1)` with `c0` the real component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct G2Affine {
    pub x: [BigUint; 2],
    pub y: [BigUint; 2],
}

impl G1Affine {
    /// Decode a hex-encoded G1 point (48-byte compressed or 96-byte
    /// uncompressed serialization, optional `0x` prefix).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let bytes = hexutil::decode_bytes(hex)?;

        let mut affine = blst_p1_affine::default();
        let status = match bytes.len() {
            // SAFETY: blst validates the encoding and on-curve condition
            G1_COMPRESSED_LEN => unsafe { blst_p1_uncompress(&mut affine, bytes.as_ptr()) },
            G1_UNCOMPRESSED_LEN => unsafe { blst_p1_deserialize(&mut affine, bytes.as_ptr()) },
            other => {
                return Err(invalid_point(
                    "G1",
                    hex,
                    format!("expected 48 or 96 bytes, got {other}"),
                ));
            }
        };
        if status != BLST_ERROR::BLST_SUCCESS {
            return Err(invalid_point("G1", hex, format!("{status:?}")));
        }

        // SAFETY: affine was fully initialized by the successful decode
        if unsafe { blst_p1_affine_is_inf(&affine) } {
            return Err(invalid_point("G1", hex, "point at infinity".to_string()));
        }
        if !unsafe { blst_p1_affine_in_g1(&affine) } {
            return Err(invalid_point("G1", hex, "not in the G1 subgroup".to_string()));
        }

        Ok(Self {
            x: fp_to_biguint(&affine.x),
            y: fp_to_biguint(&affine.y),
        })
    }

    /// Limb-encode both coordinates as `(x_limbs, y_limbs)`.
    pub fn to_limbs(&self, cfg: LimbConfig) -> Result<(Limbs, Limbs)> {
        Ok((Limbs::encode(&self.x, cfg)?, Limbs::encode(&self.y, cfg)?))
    }
}

impl G2Affine {
    /// Decode a hex-encoded G2 point (96-byte compressed or 192-byte
    /// uncompressed serialization, optional `0x` prefix).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let bytes = hexutil::decode_bytes(hex)?;

        let mut affine = blst_p2_affine::default();
        let status = match bytes.len() {
            // SAFETY: blst validates the encoding and on-curve condition
            G2_COMPRESSED_LEN => unsafe { blst_p2_uncompress(&mut affine, bytes.as_ptr()) },
            G2_UNCOMPRESSED_LEN => unsafe { blst_p2_deserialize(&mut affine, bytes.as_ptr()) },
            other => {
                return Err(invalid_point(
                    "G2",
                    hex,
                    format!("expected 96 or 192 bytes, got {other}"),
                ));
            }
        };
        if status != BLST_ERROR::BLST_SUCCESS {
            return Err(invalid_point("G2", hex, format!("{status:?}")));
        }

        // SAFETY: affine was fully initialized by the successful decode
        if unsafe { blst_p2_affine_is_inf(&affine) } {
            return Err(invalid_point("G2", hex, "point at infinity".to_string()));
        }
        if !unsafe { blst_p2_affine_in_g2(&affine) } {
            return Err(invalid_point("G2", hex, "not in the G2 subgroup".to_string()));
        }

        Ok(Self::from_affine(&affine))
    }

    pub(crate) fn from_affine(affine: &blst_p2_affine) -> Self {
        Self {
            x: [
                fp_to_biguint(&affine.x.fp[0]),
                fp_to_biguint(&affine.x.fp[1]),
            ],
            y: [
                fp_to_biguint(&affine.y.fp[0]),
                fp_to_biguint(&affine.y.fp[1]),
            ],
        }
    }

    /// Limb-encode all four Fp components as `[[x.c0, x.c1], [y.c0, y.c1]]`,
    /// the nesting the verification circuits template over.
    pub fn to_limbs(&self, cfg: LimbConfig) -> Result<[[Limbs; 2]; 2]> {
        Ok([
            [
                Limbs::encode(&self.x[0], cfg)?,
                Limbs::encode(&self.x[1], cfg)?,
            ],
            [
                Limbs::encode(&self.y[0], cfg)?,
                Limbs::encode(&self.y[1], cfg)?,
            ],
        ])
    }
}

/// Convert a blst Fp to a canonical big-endian integer.
fn fp_to_biguint(fp: &blst_fp) -> BigUint {
    let mut be = [0u8; 48];
    // SAFETY: blst_bendian_from_fp writes exactly 48 bytes, converting out
    // of blst's internal representation
    unsafe { blst_bendian_from_fp(be.as_mut_ptr(), fp) };
    BigUint::from_bytes_be(&be)
}

fn invalid_point(group: &'static str, input: &str, reason: String) -> EncodeError {
    EncodeError::InvalidPoint {
        group,
        input: EncodeError::clip(input),
        reason,
    }
}
