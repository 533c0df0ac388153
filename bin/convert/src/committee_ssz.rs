//! Committee SSZ driver: byte-array-only inputs for the SSZ commitment
//! circuit. No limb encoding on this path.

use std::path::Path;

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use tracing::info;
use zklc_circuit_inputs::hexutil;

use crate::io;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommitteeSszData {
    pubkeys: Vec<String>,
    aggregate_pubkey: String,
    #[serde(rename = "syncCommitteeSSZ")]
    sync_committee_ssz: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CommitteeSszInput {
    pubkeys_bytes: Vec<Vec<u8>>,
    aggregate_pubkey_bytes: Vec<u8>,
    #[serde(rename = "syncCommitteeSSZ")]
    sync_committee_ssz: Vec<u8>,
}

fn convert(data: CommitteeSszData) -> Result<CommitteeSszInput> {
    let pubkeys_bytes = data
        .pubkeys
        .iter()
        .enumerate()
        .map(|(idx, pubkey)| {
            hexutil::byte_array(pubkey).wrap_err_with(|| format!("pubkey at index {idx}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CommitteeSszInput {
        pubkeys_bytes,
        aggregate_pubkey_bytes: hexutil::byte_array(&data.aggregate_pubkey)
            .wrap_err("aggregatePubkey")?,
        sync_committee_ssz: hexutil::byte_array(&data.sync_committee_ssz)
            .wrap_err("syncCommitteeSSZ")?,
    })
}

pub fn run(input: &Path, output: &Path) -> Result<()> {
    let data: CommitteeSszData = io::read_json(input)?;
    info!(pubkeys = data.pubkeys.len(), "converting committee SSZ data");
    let converted = convert(data)?;
    io::write_json(output, &converted)
}
