use std::sync::Arc;

use async_trait::async_trait;
use ethereum_types::Address;

/// A deployed verifier routine, reached through a non-mutating call
///
/// Implementations return the raw return payload of the routine. Decoding it is left to the
/// caller.
#[async_trait]
pub trait VerifierOracle: Send + Sync {
    async fn static_call(&self, handle: Address, calldata: Vec<u8>) -> Result<Vec<u8>, CallError>;
}

#[async_trait]
impl<T: VerifierOracle + ?Sized> VerifierOracle for Arc<T> {
    async fn static_call(&self, handle: Address, calldata: Vec<u8>) -> Result<Vec<u8>, CallError> {
        (**self).static_call(handle, calldata).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CallError {
    #[error("verifier reverted: 0x{}", hex::encode(.0))]
    Reverted(Vec<u8>),

    #[error("verifier returned undecodable data: 0x{}", hex::encode(.0))]
    InvalidReturnData(Vec<u8>),

    #[error("web3 error")]
    Web3(#[from] web3::Error),
}

impl CallError {
    /// Whether the routine itself ran and reverted, as opposed to the call never reaching it
    pub fn is_revert(&self) -> bool {
        matches!(self, CallError::Reverted(_))
    }
}
