use std::path::PathBuf;

use clap::Parser;
use plonk_verifier::Address;
use serde::Serialize;

/// Check a plonk proof against a deployed verifier contract
#[derive(Debug, Clone, Parser)]
#[command(name = "plonk-verify", version)]
pub struct Args {
    /// Proof file, either `{"proof": [...], "publicSignals": [...]}` JSON or snarkjs solidity
    /// calldata
    #[arg(long)]
    pub proof: PathBuf,

    /// TOML config file, defaults to `plonk-verify.toml` in the working directory if present
    #[arg(long, env = "PLONK_VERIFY_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON-RPC url of the node
    #[arg(long)]
    pub rpc: Option<String>,

    /// Address of the verifier contract
    #[arg(long, value_parser = parse_address)]
    pub verifier: Option<Address>,

    /// Fail without calling the verifier unless the proof has exactly this many public signals
    #[arg(long)]
    pub expected_signals: Option<usize>,

    /// Block height to verify against, defaults to latest
    #[arg(long)]
    pub block: Option<u64>,

    /// Print the encoded `verifyProof` calldata instead of calling the verifier
    #[arg(long)]
    pub calldata: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

/// The subset of [`Args`] that overrides file and environment config, only set fields are
/// serialized
#[derive(Debug, Default, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verifier: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_signals: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_json: Option<bool>,
}

fn parse_address(s: &str) -> Result<Address, String> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    s.parse().map_err(|err| format!("invalid address: {err}"))
}

impl Args {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            rpc: self.rpc.clone(),
            verifier: self.verifier,
            expected_signals: self.expected_signals,
            block: self.block,
            log_json: self.log_json.then_some(true),
        }
    }
}
