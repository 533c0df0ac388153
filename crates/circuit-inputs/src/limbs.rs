//! Fixed-bit-width limb codec.
//!
//! Circuits over a narrow native field consume a 381-bit BLS12-381 base
//! field element as `k` limbs of `n` bits each, little-endian:
//!
//! `value == Σ limb[i] * 2^(n*i)` for `i` in `[0, k)`
//!
//! The default registers (`n = 55`, `k = 7`) give 385 bits of capacity,
//! enough for any base field element with headroom.

use num_bigint::BigUint;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::{EncodeError, Result};

/// Limb layout shared by every limb-encoded value in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimbConfig {
    /// Bits per limb (`n`).
    pub bits: u32,
    /// Number of limbs (`k`).
    pub count: usize,
}

impl LimbConfig {
    /// The layout used by the signature-verification circuits.
    pub const DEFAULT: Self = Self { bits: 55, count: 7 };

    /// Total capacity in bits (`n * k`).
    pub const fn capacity_bits(&self) -> u64 {
        self.bits as u64 * self.count as u64
    }
}

impl Default for LimbConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A little-endian limb decomposition of a non-negative integer.
///
/// Serializes as an array of decimal strings: limbs can exceed the exact
/// integer range of common fixed-width JSON consumers, and truncating one
/// is a protocol violation, not a cosmetic choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limbs(pub Vec<BigUint>);

impl Limbs {
    /// Decompose `value` into `cfg.count` limbs of `cfg.bits` bits.
    ///
    /// Fails with [`EncodeError::OutOfRange`] if `value` does not fit;
    /// never truncates.
    pub fn encode(value: &BigUint, cfg: LimbConfig) -> Result<Self> {
        if value.bits() > cfg.capacity_bits() {
            return Err(EncodeError::OutOfRange {
                bits_needed: value.bits(),
                capacity: cfg.capacity_bits(),
            });
        }

        let mask = (BigUint::from(1u8) << cfg.bits) - 1u8;
        let mut rest = value.clone();
        let mut limbs = Vec::with_capacity(cfg.count);
        for _ in 0..cfg.count {
            limbs.push(&rest & &mask);
            rest >>= cfg.bits;
        }
        Ok(Self(limbs))
    }

    /// Reassemble the integer. Exact left inverse of [`Limbs::encode`].
    ///
    /// Fails with [`EncodeError::MalformedLimb`] if any limb exceeds
    /// `2^cfg.bits - 1`.
    pub fn decode(&self, cfg: LimbConfig) -> Result<BigUint> {
        for (index, limb) in self.0.iter().enumerate() {
            if limb.bits() > cfg.bits as u64 {
                return Err(EncodeError::MalformedLimb {
                    index,
                    bits: limb.bits(),
                    max_bits: cfg.bits,
                });
            }
        }

        let mut value = BigUint::default();
        for limb in self.0.iter().rev() {
            value = (value << cfg.bits) + limb;
        }
        Ok(value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Limbs {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for limb in &self.0 {
            seq.serialize_element(&limb.to_string())?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Limbs {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<String>::deserialize(deserializer)?;
        let limbs = raw
            .iter()
            .map(|s| s.parse::<BigUint>().map_err(de::Error::custom))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self(limbs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> LimbConfig {
        LimbConfig::DEFAULT
    }

    #[test]
    fn round_trip_small_value() {
        let v = BigUint::from(123_456_789_u64);
        let limbs = Limbs::encode(&v, cfg()).unwrap();
        assert_eq!(limbs.len(), 7);
        assert_eq!(limbs.decode(cfg()).unwrap(), v);
    }

    #[test]
    fn zero_is_seven_zero_limbs() {
        let limbs = Limbs::encode(&BigUint::default(), cfg()).unwrap();
        assert_eq!(limbs.0, vec![BigUint::default(); 7]);
    }

    #[test]
    fn max_capacity_round_trips() {
        let max = (BigUint::from(1u8) << 385u32) - 1u8;
        let limbs = Limbs::encode(&max, cfg()).unwrap();
        assert_eq!(limbs.decode(cfg()).unwrap(), max);
        // every limb saturated at 2^55 - 1
        let full = (BigUint::from(1u8) << 55u32) - 1u8;
        assert!(limbs.0.iter().all(|l| *l == full));
    }

    #[test]
    fn over_capacity_is_rejected() {
        let too_big = BigUint::from(1u8) << 385u32;
        let err = Limbs::encode(&too_big, cfg()).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::OutOfRange {
                bits_needed: 386,
                capacity: 385
            }
        ));
    }

    #[test]
    fn oversized_limb_is_rejected_on_decode() {
        let mut limbs = Limbs::encode(&BigUint::from(1u8), cfg()).unwrap();
        limbs.0[3] = BigUint::from(1u8) << 55u32;
        let err = limbs.decode(cfg()).unwrap_err();
        assert!(matches!(err, EncodeError::MalformedLimb { index: 3, .. }));
    }

    #[test]
    fn limb_order_is_little_endian() {
        // 2^55 has limb[0] == 0, limb[1] == 1
        let v = BigUint::from(1u8) << 55u32;
        let limbs = Limbs::encode(&v, cfg()).unwrap();
        assert_eq!(limbs.0[0], BigUint::default());
        assert_eq!(limbs.0[1], BigUint::from(1u8));
    }

    #[test]
    fn serializes_as_decimal_strings() {
        let v = (BigUint::from(1u8) << 60u32) + 5u8;
        let limbs = Limbs::encode(&v, cfg()).unwrap();
        let json = serde_json::to_value(&limbs).unwrap();
        assert_eq!(json[0], "5");
        assert_eq!(json[1], "32");
        let back: Limbs = serde_json::from_value(json).unwrap();
        assert_eq!(back, limbs);
    }
}
