#![deny(clippy::disallowed_methods)]

//! Calls code-generated plonk verifier contracts whose `verifyProof` signature depends on the
//! number of public signals.

mod client;
mod constants;
mod encoding;
mod error;
#[cfg(any(test, feature = "test-api"))]
pub mod fake;
mod oracle;
mod proof;
mod signature;
mod verifier;

pub use client::Client;
pub use constants::{MAX_PUBLIC_SIGNALS, PROOF_POINTS, SELECTOR_SIZE, WORD_SIZE};
pub use encoding::{decode_bool, decode_verify_call, encode_verify_call};
pub use error::{Error, Result};
pub use oracle::{CallError, VerifierOracle};
pub use proof::{PlonkProof, ProofPoints, PublicSignals};
pub use signature::{function_selector, selector_for, Selector, VerifyProofSignature};
pub use verifier::PlonkVerifier;

pub use ethereum_types::Address;
pub use zk_primitives::Element;
