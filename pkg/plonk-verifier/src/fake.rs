//! An in-process stand-in for a deployed verifier routine

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use ethereum_types::Address;
use parking_lot::Mutex;

use crate::constants::WORD_SIZE;
use crate::encoding::decode_verify_call;
use crate::oracle::{CallError, VerifierOracle};
use crate::signature::selector_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Return `true`
    Accept,
    /// Return `false`
    Reject,
    /// Revert with empty data
    Revert,
    /// Return nothing, like a call to an address without code
    NoCode,
    /// Return a word that is not a valid bool
    Garbage,
}

#[derive(Debug)]
pub struct FakeVerifier {
    outcome: Mutex<Outcome>,
    /// Public signal count the routine was "compiled" for, calls with any other selector revert
    arity: Option<usize>,
    calls: AtomicUsize,
    last_call: Mutex<Option<(Address, Vec<u8>)>>,
}

impl FakeVerifier {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome: Mutex::new(outcome),
            arity: None,
            calls: AtomicUsize::new(0),
            last_call: Mutex::new(None),
        }
    }

    pub fn for_arity(arity: usize, outcome: Outcome) -> Self {
        Self {
            arity: Some(arity),
            ..Self::new(outcome)
        }
    }

    pub fn set_outcome(&self, outcome: Outcome) {
        *self.outcome.lock() = outcome;
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_call(&self) -> Option<(Address, Vec<u8>)> {
        self.last_call.lock().clone()
    }

    fn dispatches(&self, calldata: &[u8]) -> bool {
        let Some(arity) = self.arity else {
            return true;
        };

        match (decode_verify_call(calldata), selector_for(arity)) {
            (Some((selector, _, signals)), Ok(expected)) => {
                selector == expected && signals.len() == arity
            }
            _ => false,
        }
    }
}

#[async_trait]
impl VerifierOracle for FakeVerifier {
    async fn static_call(&self, handle: Address, calldata: Vec<u8>) -> Result<Vec<u8>, CallError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_call.lock() = Some((handle, calldata.clone()));

        if !self.dispatches(&calldata) {
            // no matching function and no fallback
            return Err(CallError::Reverted(vec![]));
        }

        let outcome = *self.outcome.lock();
        match outcome {
            Outcome::Accept => Ok(bool_word(true)),
            Outcome::Reject => Ok(bool_word(false)),
            Outcome::Revert => Err(CallError::Reverted(vec![])),
            Outcome::NoCode => Ok(vec![]),
            Outcome::Garbage => Ok(vec![0xff; WORD_SIZE]),
        }
    }
}

fn bool_word(value: bool) -> Vec<u8> {
    let mut word = vec![0u8; WORD_SIZE];
    word[WORD_SIZE - 1] = u8::from(value);
    word
}
