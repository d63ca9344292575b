use ethereum_types::Address;
use tracing::{debug, warn};
use zk_primitives::Element;

use crate::encoding::{decode_bool, encode_verify_call};
use crate::error::{Error, Result};
use crate::oracle::{CallError, VerifierOracle};
use crate::proof::{PlonkProof, ProofPoints};
use crate::signature::VerifyProofSignature;

/// Dispatches proofs to verifier routines compiled for any public signal count
///
/// The adapter holds no state of its own, so concurrent verifications through a shared
/// `PlonkVerifier` are independent of each other.
#[derive(Debug, Clone)]
pub struct PlonkVerifier<O> {
    oracle: O,
}

impl<O: VerifierOracle> PlonkVerifier<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Calls `verifyProof(uint256[24],uint256[N])` on `handle`, with `N` taken from
    /// `public_signals`.
    ///
    /// Returns the verifier's answer. A proof the verifier rejects is `Ok(false)`, not an error.
    #[tracing::instrument(err, skip(self, proof, public_signals), fields(signals = public_signals.len()))]
    pub async fn verify(
        &self,
        handle: Address,
        proof: &ProofPoints,
        public_signals: &[Element],
    ) -> Result<bool> {
        let signature = VerifyProofSignature::new(public_signals.len())?;
        let calldata = encode_verify_call(signature.selector(), proof, public_signals);

        debug!(
            %signature,
            selector = %hex::encode(signature.selector()),
            calldata_len = calldata.len(),
            "calling verifier"
        );

        let output = self
            .oracle
            .static_call(handle, calldata)
            .await
            .map_err(|err| {
                warn!(?err, "verifier call did not complete");
                Error::CallFailed(err)
            })?;

        let accepted =
            decode_bool(&output).ok_or(Error::CallFailed(CallError::InvalidReturnData(output)))?;

        debug!(accepted, "verifier returned");

        Ok(accepted)
    }

    /// Like [`PlonkVerifier::verify`], but first checks that the proof carries the number of
    /// public signals the caller expects.
    ///
    /// A mismatch fails with [`Error::SignalCountMismatch`] without calling the verifier.
    #[tracing::instrument(err, skip(self, proof, public_signals), fields(signals = public_signals.len()))]
    pub async fn verify_safe(
        &self,
        handle: Address,
        proof: &ProofPoints,
        public_signals: &[Element],
        expected: usize,
    ) -> Result<bool> {
        if public_signals.len() != expected {
            return Err(Error::SignalCountMismatch {
                actual: public_signals.len(),
                expected,
            });
        }

        self.verify(handle, proof, public_signals).await
    }

    /// Statically sized entry point for callers that know the circuit's arity at compile time
    pub async fn verify_fixed<const N: usize>(
        &self,
        handle: Address,
        proof: &ProofPoints,
        public_signals: &[Element; N],
    ) -> Result<bool> {
        self.verify(handle, proof, public_signals).await
    }

    pub async fn verify_proof(&self, handle: Address, proof: &PlonkProof) -> Result<bool> {
        self.verify(handle, &proof.proof, proof.public_signals.as_slice())
            .await
    }

    pub async fn verify_proof_safe(
        &self,
        handle: Address,
        proof: &PlonkProof,
        expected: usize,
    ) -> Result<bool> {
        self.verify_safe(handle, &proof.proof, proof.public_signals.as_slice(), expected)
            .await
    }
}
