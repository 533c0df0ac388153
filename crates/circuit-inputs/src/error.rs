use thiserror::Error;

/// Errors produced by the encoding layer.
///
/// Every variant carries the offending input (or enough of it to locate the
/// record); nothing is coerced to a default value and nothing is retried
/// here. Batch-level policy (skip vs abort) belongs to the caller.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Input is not a decodable hex byte string.
    #[error("malformed hex {input:?}: {reason}")]
    MalformedHex { input: String, reason: String },

    /// Value does not fit in the configured limb capacity.
    #[error("value needs {bits_needed} bits but limb capacity is {capacity}")]
    OutOfRange { bits_needed: u64, capacity: u64 },

    /// A supplied limb exceeds the per-limb bit width during decode.
    #[error("limb {index} has {bits} bits, exceeds the {max_bits}-bit limb width")]
    MalformedLimb {
        index: usize,
        bits: u64,
        max_bits: u32,
    },

    /// Point decompression or validation failed.
    #[error("invalid {group} point {input:?}: {reason}")]
    InvalidPoint {
        group: &'static str,
        input: String,
        reason: String,
    },

    /// The external hashing provider failed to complete.
    #[error("hash provider unavailable: {0}")]
    ProviderUnavailable(String),
}

impl EncodeError {
    /// Truncate long inputs (committee pubkeys are 96+ hex chars) so error
    /// messages stay readable while still identifying the record.
    pub(crate) fn clip(input: &str) -> String {
        const MAX: usize = 32;
        match input.get(..MAX) {
            Some(head) if input.len() > MAX => format!("{head}.."),
            _ => input.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EncodeError>;
