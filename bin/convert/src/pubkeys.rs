//! Shared pubkey conversion: every driver turns the committee's compressed
//! G1 pubkeys into per-coordinate limb sequences, index order preserved.

use eyre::{Result, WrapErr};
use zklc_circuit_inputs::{G1Affine, LimbConfig, Limbs};

/// Limb-encode each pubkey as an `[x_limbs, y_limbs]` pair.
pub fn to_limb_pairs(pubkeys: &[String], cfg: LimbConfig) -> Result<Vec<[Limbs; 2]>> {
    pubkeys
        .iter()
        .enumerate()
        .map(|(idx, pubkey)| {
            let point = G1Affine::from_hex(pubkey)
                .wrap_err_with(|| format!("pubkey at index {idx}"))?;
            let (x, y) = point
                .to_limbs(cfg)
                .wrap_err_with(|| format!("pubkey at index {idx}"))?;
            Ok([x, y])
        })
        .collect()
}

/// Limb-encode each pubkey and split the pairs into parallel X and Y
/// arrays, the layout the step and rotation circuits expect.
pub fn to_split_limbs(pubkeys: &[String], cfg: LimbConfig) -> Result<(Vec<Limbs>, Vec<Limbs>)> {
    let pairs = to_limb_pairs(pubkeys, cfg)?;
    Ok(pairs.into_iter().map(|[x, y]| (x, y)).unzip())
}
