use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use eyre::{eyre, Result};
use plonk_verifier::{
    encode_verify_call, Client, PlonkProof, PlonkVerifier, VerifierOracle, VerifyProofSignature,
};
use tracing::{info, warn};

use crate::args::Args;
use crate::config::{load_proof, Config, ENV_PREFIX};

mod args;
mod config;
mod logging;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = color_eyre::install() {
        eprintln!("{err}");
    }

    let result = run(Args::parse()).await;
    if let Err(err) = &result {
        eprintln!("{err:?}");
    }

    ExitCode::from(exit_status(&result))
}

/// 0 accepted, 1 rejected, 2 anything else
fn exit_status(result: &Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

/// Returns whether the proof was accepted
async fn run(args: Args) -> Result<bool> {
    let config = Config::load(&args)?;
    logging::init(config.log_json);

    let proof = load_proof(&args.proof)?;
    if !proof.is_canonical() {
        warn!("proof contains values outside the scalar field, verifiers reject these");
    }

    let mut stdout = std::io::stdout().lock();

    if args.calldata {
        write_calldata(&proof, &mut stdout)?;
        return Ok(true);
    }

    let client = Client::new(&config.rpc)?.at_height(config.block);
    verify(&config, &proof, client, &mut stdout).await
}

/// Writes the `verifyProof` payload for `proof` as `0x` prefixed hex
fn write_calldata(proof: &PlonkProof, out: &mut impl Write) -> Result<()> {
    let signature = VerifyProofSignature::new(proof.public_signals.len())?;
    let calldata = encode_verify_call(
        signature.selector(),
        &proof.proof,
        proof.public_signals.as_slice(),
    );

    writeln!(out, "0x{}", hex::encode(calldata))?;

    Ok(())
}

/// Asks the configured verifier about `proof` and writes the verdict
async fn verify<O: VerifierOracle>(
    config: &Config,
    proof: &PlonkProof,
    oracle: O,
    out: &mut impl Write,
) -> Result<bool> {
    let verifier_address = config.verifier.ok_or_else(|| {
        eyre!("no verifier address, pass --verifier or set {ENV_PREFIX}VERIFIER")
    })?;

    let verifier = PlonkVerifier::new(oracle);

    info!(
        signals = proof.public_signals.len(),
        verifier = ?verifier_address,
        rpc = %config.rpc,
        "verifying proof"
    );

    let accepted = match config.expected_signals {
        Some(expected) => {
            verifier
                .verify_proof_safe(verifier_address, proof, expected)
                .await?
        }
        None => verifier.verify_proof(verifier_address, proof).await?,
    };

    writeln!(out, "{}", if accepted { "accepted" } else { "rejected" })?;

    Ok(accepted)
}
