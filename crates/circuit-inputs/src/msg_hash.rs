//! Canonical message hash for signature verification.
//!
//! The signed message a verification circuit checks is not the signing root
//! itself but its RFC 9380 hash-to-curve image on G2, computed under the
//! proof-of-possession ciphersuite DST. The DST must match the signature
//! scheme byte for byte: a deviation produces a point that looks valid
//! everywhere except inside the circuit's constraints.

use blst::{blst_hash_to_g2, blst_p2, blst_p2_affine, blst_p2_affine_serialize, blst_p2_to_affine};

use crate::error::{EncodeError, Result};
use crate::hexutil;
use crate::limbs::LimbConfig;
use crate::point::{G2Affine, G2_UNCOMPRESSED_LEN};
use crate::signature::{CircuitValue, OutputMode};

/// Domain separation tag of the BLS proof-of-possession scheme used for
/// consensus signatures.
pub const SIGNATURE_DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

/// Hash a hex-encoded signing root to the G2 message point.
///
/// Message expansion is CPU-heavy relative to the rest of the layer, so the
/// hash runs on a blocking worker; the call is single-shot and runs to
/// completion or failure once started. A failed join surfaces as
/// [`EncodeError::ProviderUnavailable`].
///
/// `Limbs` mode returns the limb-encoded affine coordinates; `Array` mode
/// returns the 192-byte uncompressed serialization of the point as a byte
/// array.
pub async fn hash_signing_root(
    signing_root_hex: &str,
    mode: OutputMode,
    cfg: LimbConfig,
) -> Result<CircuitValue> {
    let root = hexutil::decode_bytes(signing_root_hex)?;

    let affine = tokio::task::spawn_blocking(move || hash_to_g2_affine(&root))
        .await
        .map_err(|e| EncodeError::ProviderUnavailable(e.to_string()))?;

    match mode {
        OutputMode::Array => {
            let mut out = [0u8; G2_UNCOMPRESSED_LEN];
            // SAFETY: blst_p2_affine_serialize writes exactly 192 bytes
            unsafe { blst_p2_affine_serialize(out.as_mut_ptr(), &affine) };
            Ok(CircuitValue::Bytes(out.to_vec()))
        }
        OutputMode::Limbs => {
            let point = G2Affine::from_affine(&affine);
            Ok(CircuitValue::G2Limbs(point.to_limbs(cfg)?))
        }
    }
}

fn hash_to_g2_affine(msg: &[u8]) -> blst_p2_affine {
    let mut point = blst_p2::default();
    // SAFETY: all pointers are valid for the given lengths; the null aug
    // pointer with length 0 is the documented "no augmentation" form
    unsafe {
        blst_hash_to_g2(
            &mut point,
            msg.as_ptr(),
            msg.len(),
            SIGNATURE_DST.as_ptr(),
            SIGNATURE_DST.len(),
            std::ptr::null(),
            0,
        );
    }
    let mut affine = blst_p2_affine::default();
    // SAFETY: point was initialized by blst_hash_to_g2
    unsafe { blst_p2_to_affine(&mut affine, &point) };
    affine
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "0x69b7b8c4f9b8e4b3a2c1d0e9f8a7b6c5d4e3f2a1b0c9d8e7f6a5b4c3d2e1f0a9";

    #[tokio::test]
    async fn deterministic_for_the_same_root() {
        let a = hash_signing_root(ROOT, OutputMode::Array, LimbConfig::DEFAULT)
            .await
            .unwrap();
        let b = hash_signing_root(ROOT, OutputMode::Array, LimbConfig::DEFAULT)
            .await
            .unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn different_roots_hash_to_different_points() {
        let other = "0x0000000000000000000000000000000000000000000000000000000000000001";
        let a = hash_signing_root(ROOT, OutputMode::Array, LimbConfig::DEFAULT)
            .await
            .unwrap();
        let b = hash_signing_root(other, OutputMode::Array, LimbConfig::DEFAULT)
            .await
            .unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn array_mode_serializes_the_limb_mode_point() {
        let bytes = match hash_signing_root(ROOT, OutputMode::Array, LimbConfig::DEFAULT)
            .await
            .unwrap()
        {
            CircuitValue::Bytes(bytes) => bytes,
            other => panic!("expected bytes, got {other:?}"),
        };
        assert_eq!(bytes.len(), G2_UNCOMPRESSED_LEN);

        let limbs = match hash_signing_root(ROOT, OutputMode::Limbs, LimbConfig::DEFAULT)
            .await
            .unwrap()
        {
            CircuitValue::G2Limbs(limbs) => limbs,
            other => panic!("expected limbs, got {other:?}"),
        };

        // Uncompressed serialization is x.c1 || x.c0 || y.c1 || y.c0,
        // 48 big-endian bytes each.
        use num_bigint::BigUint;
        let x_c1 = BigUint::from_bytes_be(&bytes[0..48]);
        let x_c0 = BigUint::from_bytes_be(&bytes[48..96]);
        assert_eq!(limbs[0][1].decode(LimbConfig::DEFAULT).unwrap(), x_c1);
        assert_eq!(limbs[0][0].decode(LimbConfig::DEFAULT).unwrap(), x_c0);
    }

    #[tokio::test]
    async fn malformed_root_is_rejected_before_hashing() {
        let err = hash_signing_root("0xabc", OutputMode::Array, LimbConfig::DEFAULT)
            .await
            .unwrap_err();
        assert!(matches!(err, EncodeError::MalformedHex { .. }));
    }
}
