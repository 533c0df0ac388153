//! Batch converter for ZK light-client circuit inputs.
//!
//! Reads a JSON batch of consensus artifacts (pubkeys, signature, signing
//! root, Merkle branches), runs the encoding layer over every record, and
//! writes the circuit input JSON. One subcommand per circuit; the drivers
//! supply only paths and which transformation to apply.

mod committee;
mod committee_ssz;
mod finality;
mod io;
mod pubkeys;
mod rotate;
mod signed_header;
mod step;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "zklc-convert")]
#[command(about = "Convert consensus artifacts into circuit input JSON")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Signature-verification step inputs (pubkey limbs, signature,
    /// signing root, participation)
    Step(IoArgs),
    /// Committee rotation inputs (pubkey limbs, committee SSZ root)
    Rotate(IoArgs),
    /// Rotation inputs extended with the finalized header and its
    /// Merkle branch
    Finality(IoArgs),
    /// Committee commitment inputs (pubkey limbs plus raw pubkey bytes)
    Committee(IoArgs),
    /// Committee commitment inputs, byte arrays only
    CommitteeSsz(IoArgs),
    /// Signed-header verification inputs (includes the hashed message)
    SignedHeader(IoArgs),
}

#[derive(clap::Args, Debug)]
struct IoArgs {
    /// Input JSON file
    #[arg(long)]
    input: PathBuf,

    /// Output JSON file
    #[arg(long)]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("zklc_convert=info".parse()?))
        .init();

    let args = Args::parse();

    match args.command {
        Command::Step(io) => step::run(&io.input, &io.output),
        Command::Rotate(io) => rotate::run(&io.input, &io.output),
        Command::Finality(io) => finality::run(&io.input, &io.output),
        Command::Committee(io) => committee::run(&io.input, &io.output),
        Command::CommitteeSsz(io) => committee_ssz::run(&io.input, &io.output),
        Command::SignedHeader(io) => signed_header::run(&io.input, &io.output).await,
    }
}
