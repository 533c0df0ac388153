//! Signed-header driver: inputs for the header-signature verification
//! circuit, including the hash-to-curve message point.

use std::path::Path;

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use zklc_circuit_inputs::{
    encode_signature, hash_signing_root, CircuitValue, LimbConfig, Limbs, OutputMode,
};

use crate::io;
use crate::pubkeys;

#[derive(Debug, Deserialize)]
struct SignedHeaderData {
    pubkeys: Vec<String>,
    pubkeybits: Value,
    signature: String,
    #[serde(rename = "Hm")]
    hm: String,
}

#[derive(Debug, Serialize)]
struct SignedHeaderInput {
    pubkeys: Vec<[Limbs; 2]>,
    pubkeybits: Value,
    signature: CircuitValue,
    #[serde(rename = "Hm")]
    hm: CircuitValue,
}

async fn convert(data: SignedHeaderData) -> Result<SignedHeaderInput> {
    let cfg = LimbConfig::DEFAULT;

    Ok(SignedHeaderInput {
        pubkeys: pubkeys::to_limb_pairs(&data.pubkeys, cfg)?,
        pubkeybits: data.pubkeybits,
        signature: encode_signature(&data.signature, OutputMode::Array, cfg)
            .wrap_err("signature")?,
        hm: hash_signing_root(&data.hm, OutputMode::Array, cfg)
            .await
            .wrap_err("Hm")?,
    })
}

pub async fn run(input: &Path, output: &Path) -> Result<()> {
    let data: SignedHeaderData = io::read_json(input)?;
    info!(pubkeys = data.pubkeys.len(), "converting signed header data");
    let converted = convert(data).await?;
    io::write_json(output, &converted)
}
