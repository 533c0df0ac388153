//! Finality driver: rotation inputs extended with the finalized header
//! fields and the committee Merkle branch.

use std::path::Path;

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use zklc_circuit_inputs::{hexutil, LimbConfig, Limbs};

use crate::io;
use crate::pubkeys;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FinalityData {
    pubkeys: Vec<String>,
    #[serde(rename = "syncCommitteeSSZ")]
    sync_committee_ssz: String,
    sync_committee_branch: Vec<String>,
    sync_committee_poseidon: Value,
    finalized_header_root: String,
    finalized_slot: String,
    finalized_proposer_index: String,
    finalized_parent_root: String,
    finalized_state_root: String,
    finalized_body_root: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FinalityInput {
    pubkeys_big_int_x: Vec<Limbs>,
    pubkeys_big_int_y: Vec<Limbs>,
    #[serde(rename = "syncCommitteeSSZ")]
    sync_committee_ssz: Vec<u8>,
    sync_committee_branch: Vec<Vec<u8>>,
    sync_committee_poseidon: Value,
    finalized_header_root: Vec<u8>,
    finalized_slot: Vec<u8>,
    finalized_proposer_index: Vec<u8>,
    finalized_parent_root: Vec<u8>,
    finalized_state_root: Vec<u8>,
    finalized_body_root: Vec<u8>,
}

fn convert(data: FinalityData) -> Result<FinalityInput> {
    let cfg = LimbConfig::DEFAULT;
    let (pubkeys_big_int_x, pubkeys_big_int_y) = pubkeys::to_split_limbs(&data.pubkeys, cfg)?;

    let sync_committee_branch = data
        .sync_committee_branch
        .iter()
        .enumerate()
        .map(|(idx, node)| {
            hexutil::byte_array(node).wrap_err_with(|| format!("branch node at index {idx}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(FinalityInput {
        pubkeys_big_int_x,
        pubkeys_big_int_y,
        sync_committee_ssz: hexutil::byte_array(&data.sync_committee_ssz)
            .wrap_err("syncCommitteeSSZ")?,
        sync_committee_branch,
        sync_committee_poseidon: data.sync_committee_poseidon,
        finalized_header_root: hexutil::byte_array(&data.finalized_header_root)
            .wrap_err("finalizedHeaderRoot")?,
        finalized_slot: hexutil::byte_array(&data.finalized_slot).wrap_err("finalizedSlot")?,
        finalized_proposer_index: hexutil::byte_array(&data.finalized_proposer_index)
            .wrap_err("finalizedProposerIndex")?,
        finalized_parent_root: hexutil::byte_array(&data.finalized_parent_root)
            .wrap_err("finalizedParentRoot")?,
        finalized_state_root: hexutil::byte_array(&data.finalized_state_root)
            .wrap_err("finalizedStateRoot")?,
        finalized_body_root: hexutil::byte_array(&data.finalized_body_root)
            .wrap_err("finalizedBodyRoot")?,
    })
}

pub fn run(input: &Path, output: &Path) -> Result<()> {
    let data: FinalityData = io::read_json(input)?;
    info!(
        pubkeys = data.pubkeys.len(),
        branch_nodes = data.sync_committee_branch.len(),
        "converting finality data"
    );
    let converted = convert(data)?;
    io::write_json(output, &converted)
}
