//! Step driver: inputs for the signature-verification step circuit.

use std::path::Path;

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use zklc_circuit_inputs::{encode_signature, hexutil, CircuitValue, LimbConfig, Limbs, OutputMode};

use crate::io;
use crate::pubkeys;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StepData {
    pubkeys: Vec<String>,
    pubkeybits: Value,
    signature: String,
    signing_root: String,
    participation: Value,
    sync_committee_poseidon: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StepInput {
    pubkeys_big_int_x: Vec<Limbs>,
    pubkeys_big_int_y: Vec<Limbs>,
    aggregation_bits: Value,
    signature: CircuitValue,
    signing_root: Vec<u8>,
    participation: Value,
    sync_committee_poseidon: Value,
}

fn convert(data: StepData) -> Result<StepInput> {
    let cfg = LimbConfig::DEFAULT;
    let (pubkeys_big_int_x, pubkeys_big_int_y) = pubkeys::to_split_limbs(&data.pubkeys, cfg)?;

    Ok(StepInput {
        pubkeys_big_int_x,
        pubkeys_big_int_y,
        aggregation_bits: data.pubkeybits,
        signature: encode_signature(&data.signature, OutputMode::Array, cfg)
            .wrap_err("signature")?,
        signing_root: hexutil::byte_array(&data.signing_root).wrap_err("signingRoot")?,
        participation: data.participation,
        sync_committee_poseidon: data.sync_committee_poseidon,
    })
}

pub fn run(input: &Path, output: &Path) -> Result<()> {
    let data: StepData = io::read_json(input)?;
    info!(pubkeys = data.pubkeys.len(), "converting step data");
    let converted = convert(data)?;
    io::write_json(output, &converted)
}
