//! Committee driver: inputs for the committee-commitment circuit, both
//! limb-encoded and raw-byte pubkey forms.

use std::path::Path;

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use tracing::info;
use zklc_circuit_inputs::{hexutil, LimbConfig, Limbs};

use crate::io;
use crate::pubkeys;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommitteeData {
    pubkeys: Vec<String>,
    aggregate_pubkey: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CommitteeInput {
    pubkeys: Vec<[Limbs; 2]>,
    pubkey_hex: Vec<Vec<u8>>,
    aggregate_pubkey_hex: Vec<u8>,
}

fn convert(data: CommitteeData) -> Result<CommitteeInput> {
    let cfg = LimbConfig::DEFAULT;

    let pubkey_hex = data
        .pubkeys
        .iter()
        .enumerate()
        .map(|(idx, pubkey)| {
            hexutil::byte_array(pubkey).wrap_err_with(|| format!("pubkey at index {idx}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CommitteeInput {
        pubkeys: pubkeys::to_limb_pairs(&data.pubkeys, cfg)?,
        pubkey_hex,
        aggregate_pubkey_hex: hexutil::byte_array(&data.aggregate_pubkey)
            .wrap_err("aggregatePubkey")?,
    })
}

pub fn run(input: &Path, output: &Path) -> Result<()> {
    let data: CommitteeData = io::read_json(input)?;
    info!(pubkeys = data.pubkeys.len(), "converting committee data");
    let converted = convert(data)?;
    io::write_json(output, &converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use serde_json::json;

    const PUBKEY: &str = "0x97f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb";

    #[test]
    fn emits_both_limb_and_byte_forms() {
        let data: CommitteeData = serde_json::from_value(json!({
            "pubkeys": [PUBKEY],
            "aggregatePubkey": PUBKEY,
        }))
        .unwrap();

        let out = convert(data).unwrap();
        assert_eq!(out.pubkeys.len(), 1);
        assert_eq!(out.pubkey_hex[0].len(), 48);
        assert_eq!(out.aggregate_pubkey_hex.len(), 48);

        // limb form decodes back to the x coordinate the bytes encode the
        // compressed form of
        let x = out.pubkeys[0][0].decode(LimbConfig::DEFAULT).unwrap();
        let expected = "3685416753713387016781088315183077757961620795782546409894578378688607592378376318836054947676345821548104185464507"
            .parse::<BigUint>()
            .unwrap();
        assert_eq!(x, expected);
    }
}
