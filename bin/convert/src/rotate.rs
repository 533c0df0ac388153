//! Rotate driver: inputs for the committee-rotation circuit.

use std::path::Path;

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use tracing::info;
use zklc_circuit_inputs::{hexutil, LimbConfig, Limbs};

use crate::io;
use crate::pubkeys;

#[derive(Debug, Deserialize)]
struct RotateData {
    pubkeys: Vec<String>,
    #[serde(rename = "syncCommitteeSSZ")]
    sync_committee_ssz: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RotateInput {
    pubkeys_big_int_x: Vec<Limbs>,
    pubkeys_big_int_y: Vec<Limbs>,
    #[serde(rename = "syncCommitteeSSZ")]
    sync_committee_ssz: Vec<u8>,
}

fn convert(data: RotateData) -> Result<RotateInput> {
    let cfg = LimbConfig::DEFAULT;
    let (pubkeys_big_int_x, pubkeys_big_int_y) = pubkeys::to_split_limbs(&data.pubkeys, cfg)?;

    Ok(RotateInput {
        pubkeys_big_int_x,
        pubkeys_big_int_y,
        sync_committee_ssz: hexutil::byte_array(&data.sync_committee_ssz)
            .wrap_err("syncCommitteeSSZ")?,
    })
}

pub fn run(input: &Path, output: &Path) -> Result<()> {
    let data: RotateData = io::read_json(input)?;
    info!(pubkeys = data.pubkeys.len(), "converting rotate data");
    let converted = convert(data)?;
    io::write_json(output, &converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PUBKEY: &str = "0x97f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb";

    #[test]
    fn converts_committee_and_ssz_root() {
        let data: RotateData = serde_json::from_value(json!({
            "pubkeys": [PUBKEY],
            "syncCommitteeSSZ": format!("0x{}", "22".repeat(32)),
        }))
        .unwrap();

        let out = convert(data).unwrap();
        assert_eq!(out.pubkeys_big_int_x.len(), 1);
        assert_eq!(out.sync_committee_ssz, vec![0x22; 32]);

        let json = serde_json::to_value(&out).unwrap();
        assert!(json.get("syncCommitteeSSZ").is_some());
    }
}
