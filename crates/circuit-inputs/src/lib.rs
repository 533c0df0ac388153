//! Circuit input encoding for BLS12-381 consensus artifacts.
//!
//! Converts hex-encoded public keys, signatures, and signing roots into the
//! fixed-width numeric arrays consumed by signature-verification circuits
//! that have no native 256+ bit integer type.
//!
//! ## Components
//!
//! - **limbs**: fixed-bit-width limb codec for arbitrary-precision integers
//! - **hexutil**: hex string to byte-array decoding
//! - **point**: G1/G2 point decompression and affine coordinate extraction
//! - **signature**: G2 signature encoding (byte array or limb coordinates)
//! - **msg_hash**: hash-to-curve of the signing root
//! - **error**: error types

pub mod error;
pub mod hexutil;
pub mod limbs;
pub mod msg_hash;
pub mod point;
pub mod signature;

pub use error::{EncodeError, Result};
pub use limbs::{LimbConfig, Limbs};
pub use msg_hash::hash_signing_root;
pub use point::{G1Affine, G2Affine};
pub use signature::{encode_signature, CircuitValue, OutputMode};
