use crate::constants::PROOF_POINTS;
use crate::oracle::CallError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("public signal count mismatch: got {actual}, expected {expected}")]
    SignalCountMismatch { actual: usize, expected: usize },

    #[error("verifier call failed")]
    CallFailed(#[from] CallError),

    #[error("too many public signals: {count} exceeds the maximum of {max}")]
    TooManySignals { count: usize, max: usize },

    #[error("expected {expected} proof points, got {actual}", expected = PROOF_POINTS)]
    ProofPointCount { actual: usize },

    #[error("malformed solidity calldata: {0}")]
    MalformedCalldata(String),

    #[error("invalid element")]
    InvalidElement(#[from] zk_primitives::ParseElementError),

    #[error("web3 error")]
    Web3(#[from] web3::Error),

    #[error("serde_json error")]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
