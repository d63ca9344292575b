//! Calldata layout for `verifyProof(uint256[24],uint256[N])`
//!
//! Both arguments are fixed-size arrays, so they are written inline: the selector followed by
//! `24 + N` big-endian words. There is no offset table and no length prefix for either array.

use zk_primitives::Element;

use crate::constants::{PROOF_POINTS, SELECTOR_SIZE, WORD_SIZE};
use crate::proof::ProofPoints;
use crate::signature::Selector;

pub fn encode_verify_call(
    selector: Selector,
    proof: &ProofPoints,
    public_signals: &[Element],
) -> Vec<u8> {
    let mut calldata =
        Vec::with_capacity(SELECTOR_SIZE + WORD_SIZE * (PROOF_POINTS + public_signals.len()));

    calldata.extend_from_slice(&selector);
    for word in proof.iter().chain(public_signals) {
        calldata.extend_from_slice(&word.to_be_bytes());
    }

    calldata
}

/// Splits calldata produced by [`encode_verify_call`] back into its parts
///
/// The signal count is inferred from the payload length, so this only returns `None` when the
/// payload is not a selector followed by at least [`PROOF_POINTS`] whole words.
pub fn decode_verify_call(calldata: &[u8]) -> Option<(Selector, ProofPoints, Vec<Element>)> {
    if calldata.len() < SELECTOR_SIZE {
        return None;
    }

    let (selector, words) = calldata.split_at(SELECTOR_SIZE);
    if words.len() % WORD_SIZE != 0 || words.len() / WORD_SIZE < PROOF_POINTS {
        return None;
    }

    let elements = words
        .chunks_exact(WORD_SIZE)
        .map(word_to_element)
        .collect::<Vec<_>>();
    let (proof, public_signals) = elements.split_at(PROOF_POINTS);
    let proof = ProofPoints::try_from(proof).ok()?;

    let mut selector_bytes = [0u8; SELECTOR_SIZE];
    selector_bytes.copy_from_slice(selector);

    Some((selector_bytes, proof, public_signals.to_vec()))
}

/// Decodes a single ABI-encoded `bool` return value
///
/// Trailing data after the first word is ignored. The first word must be exactly `0` or `1`.
pub fn decode_bool(output: &[u8]) -> Option<bool> {
    let word = output.get(..WORD_SIZE)?;
    let (padding, value) = word.split_at(WORD_SIZE - 1);

    if padding.iter().any(|byte| *byte != 0) {
        return None;
    }

    match value[0] {
        0 => Some(false),
        1 => Some(true),
        _ => None,
    }
}

fn word_to_element(word: &[u8]) -> Element {
    let mut bytes = [0u8; WORD_SIZE];
    bytes.copy_from_slice(word);
    Element::from_be_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use ethereum_types::U256;
    use proptest::prelude::*;
    use test_strategy::proptest;
    use web3::ethabi::{self, ParamType, Token};

    use super::*;
    use crate::signature::{selector_for, VerifyProofSignature};

    fn uint_token(element: &Element) -> Token {
        Token::Uint(U256::from_big_endian(&element.to_be_bytes()))
    }

    fn proof_points(seed: u64) -> ProofPoints {
        ProofPoints::new(core::array::from_fn(|i| Element::new(seed + i as u64)))
    }

    #[test]
    fn layout_is_selector_then_words() {
        let signals = [Element::new(1), Element::new(2), Element::new(3)];
        let calldata = encode_verify_call(selector_for(3).unwrap(), &ProofPoints::zero(), &signals);

        assert_eq!(calldata.len(), SELECTOR_SIZE + WORD_SIZE * 27);
        assert_eq!(hex::encode(&calldata[..4]), "1d5803fe");
        assert!(calldata[4..4 + WORD_SIZE * 24].iter().all(|byte| *byte == 0));

        let first_signal = &calldata[4 + WORD_SIZE * 24..4 + WORD_SIZE * 25];
        assert_eq!(first_signal, Element::new(1).to_be_bytes());
        assert_eq!(calldata[calldata.len() - 1], 3);
    }

    #[test]
    fn matches_ethabi_static_array_encoding() {
        let proof = proof_points(7);
        let signals = vec![Element::new(10), Element::MAX, Element::ZERO];

        let uint = || Box::new(ParamType::Uint(256));
        let selector = ethabi::short_signature(
            "verifyProof",
            &[
                ParamType::FixedArray(uint(), PROOF_POINTS),
                ParamType::FixedArray(uint(), signals.len()),
            ],
        );
        let mut expected = selector.to_vec();
        expected.extend(ethabi::encode(&[
            Token::FixedArray(proof.iter().map(uint_token).collect()),
            Token::FixedArray(signals.iter().map(uint_token).collect()),
        ]));

        let calldata = encode_verify_call(selector_for(signals.len()).unwrap(), &proof, &signals);

        assert_eq!(calldata, expected);
    }

    #[test]
    fn differs_from_dynamic_array_encoding() {
        let proof = ProofPoints::zero();
        let signals = vec![Element::new(1)];

        let dynamic = ethabi::encode(&[
            Token::FixedArray(proof.iter().map(uint_token).collect()),
            Token::Array(signals.iter().map(uint_token).collect()),
        ]);
        let calldata = encode_verify_call(selector_for(1).unwrap(), &proof, &signals);

        // offset word and length word
        assert_eq!(dynamic.len(), calldata.len() - SELECTOR_SIZE + 2 * WORD_SIZE);
        assert_ne!(&calldata[SELECTOR_SIZE..], dynamic.as_slice());
    }

    #[test]
    fn decode_bool_values() {
        let mut word = [0u8; WORD_SIZE];
        assert_eq!(decode_bool(&word), Some(false));

        word[WORD_SIZE - 1] = 1;
        assert_eq!(decode_bool(&word), Some(true));

        let mut longer = word.to_vec();
        longer.extend_from_slice(&[0xff; WORD_SIZE]);
        assert_eq!(decode_bool(&longer), Some(true));
    }

    #[test]
    fn decode_bool_rejects_non_bool_words() {
        assert_eq!(decode_bool(&[]), None);
        assert_eq!(decode_bool(&[1]), None);
        assert_eq!(decode_bool(&[0u8; WORD_SIZE - 1]), None);

        let mut word = [0u8; WORD_SIZE];
        word[WORD_SIZE - 1] = 2;
        assert_eq!(decode_bool(&word), None);

        let mut word = [0u8; WORD_SIZE];
        word[0] = 1;
        word[WORD_SIZE - 1] = 1;
        assert_eq!(decode_bool(&word), None);
    }

    #[test]
    fn decode_call_rejects_truncated_payloads() {
        assert!(decode_verify_call(&[]).is_none());
        assert!(decode_verify_call(&[0; SELECTOR_SIZE + WORD_SIZE * 23]).is_none());
        assert!(decode_verify_call(&[0; SELECTOR_SIZE + WORD_SIZE * 24 + 1]).is_none());
        assert!(decode_verify_call(&[0; SELECTOR_SIZE + WORD_SIZE * 24]).is_some());
    }

    #[proptest]
    fn decode_recovers_encoded_call(
        seed: u32,
        #[strategy(prop::collection::vec(any::<Element>(), 0..16))] signals: Vec<Element>,
    ) {
        let proof = proof_points(u64::from(seed));
        let signature = VerifyProofSignature::new(signals.len()).unwrap();

        let calldata = encode_verify_call(signature.selector(), &proof, &signals);
        let (selector, proof_again, signals_again) = decode_verify_call(&calldata).unwrap();

        prop_assert_eq!(selector, signature.selector());
        prop_assert_eq!(proof_again, proof);
        prop_assert_eq!(signals_again, signals);
    }
}
