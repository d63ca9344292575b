use std::path::Path;

use eyre::{bail, Result, WrapErr};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use plonk_verifier::{Address, PlonkProof};
use serde::{Deserialize, Serialize};

use crate::args::Args;

pub const DEFAULT_CONFIG_FILE: &str = "plonk-verify.toml";
pub const ENV_PREFIX: &str = "PLONK_VERIFY_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub rpc: String,
    pub verifier: Option<Address>,
    pub expected_signals: Option<usize>,
    pub block: Option<u64>,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc: "http://127.0.0.1:8545".to_string(),
            verifier: None,
            expected_signals: None,
            block: None,
            log_json: false,
        }
    }
}

impl Config {
    /// Defaults, then the TOML file, then `PLONK_VERIFY_*` env vars, then command line flags
    pub fn load(args: &Args) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        match &args.config {
            Some(path) if !path.exists() => {
                bail!("config file {} does not exist", path.display())
            }
            Some(path) => figment = figment.merge(Toml::file(path)),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE))
            }
            None => {}
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(args.overrides()))
            .extract()
            .wrap_err("Could not parse configuration")
    }
}

/// Reads a proof as JSON when the file holds an object, otherwise as snarkjs solidity calldata
pub fn load_proof(path: &Path) -> Result<PlonkProof> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("could not read proof file {}", path.display()))?;

    let proof = if contents.trim_start().starts_with('{') {
        serde_json::from_str(&contents).wrap_err("invalid proof json")?
    } else {
        PlonkProof::from_solidity_calldata(&contents).wrap_err("invalid proof calldata")?
    };

    Ok(proof)
}
