use std::fmt;

use once_cell::sync::Lazy;
use sha3::{Digest, Keccak256};

use crate::constants::{MAX_PUBLIC_SIGNALS, PROOF_POINTS, SELECTOR_SIZE};
use crate::error::{Error, Result};

pub type Selector = [u8; SELECTOR_SIZE];

/// Selectors for every supported arity, indexed by public signal count
static SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    (0..=MAX_PUBLIC_SIGNALS)
        .map(|arity| function_selector(&VerifyProofSignature { arity }.to_string()))
        .collect()
});

/// First four bytes of the Keccak-256 hash of a canonical function signature
pub fn function_selector(signature: &str) -> Selector {
    let hash = Keccak256::digest(signature.as_bytes());

    let mut selector = [0u8; SELECTOR_SIZE];
    selector.copy_from_slice(&hash[..SELECTOR_SIZE]);
    selector
}

pub fn selector_for(arity: usize) -> Result<Selector> {
    Ok(VerifyProofSignature::new(arity)?.selector())
}

/// `verifyProof(uint256[24],uint256[N])` for a verifier compiled with `N` public signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VerifyProofSignature {
    arity: usize,
}

impl VerifyProofSignature {
    pub fn new(arity: usize) -> Result<Self> {
        if arity > MAX_PUBLIC_SIGNALS {
            return Err(Error::TooManySignals {
                count: arity,
                max: MAX_PUBLIC_SIGNALS,
            });
        }

        Ok(Self { arity })
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn selector(&self) -> Selector {
        SELECTORS[self.arity]
    }
}

impl fmt::Display for VerifyProofSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "verifyProof(uint256[{PROOF_POINTS}],uint256[{}])",
            self.arity
        )
    }
}

#[cfg(test)]
mod tests {
    use expect_test::expect;
    use proptest::prelude::*;
    use test_strategy::proptest;

    use super::*;

    #[test]
    fn known_selector() {
        assert_eq!(
            hex::encode(function_selector("transfer(address,uint256)")),
            "a9059cbb"
        );
    }

    #[test]
    fn signature_text() {
        let signature = VerifyProofSignature::new(3).unwrap();

        expect!["verifyProof(uint256[24],uint256[3])"].assert_eq(&signature.to_string());
    }

    #[test]
    fn verify_proof_selectors() {
        let selectors = [0, 1, 3, 5]
            .map(|arity| hex::encode(selector_for(arity).unwrap()))
            .join(" ");

        expect!["ebe344aa ff7240a7 1d5803fe 4f6baab2"].assert_eq(&selectors);
    }

    #[test]
    fn arity_above_maximum_is_rejected() {
        assert!(selector_for(MAX_PUBLIC_SIGNALS).is_ok());

        let err = selector_for(MAX_PUBLIC_SIGNALS + 1).unwrap_err();
        assert!(
            matches!(
                err,
                Error::TooManySignals {
                    count,
                    max: MAX_PUBLIC_SIGNALS
                } if count == MAX_PUBLIC_SIGNALS + 1
            ),
            "{err:?}"
        );
    }

    #[proptest]
    fn signature_embeds_arity(#[strategy(0..=MAX_PUBLIC_SIGNALS)] arity: usize) {
        let signature = VerifyProofSignature::new(arity).unwrap();
        let text = signature.to_string();

        let expected_suffix = format!(",uint256[{arity}])");
        let embeds_arity = text.ends_with(&expected_suffix);
        prop_assert!(embeds_arity);
        prop_assert_eq!(signature.selector(), function_selector(&text));
    }
}
