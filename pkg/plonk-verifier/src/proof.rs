use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zk_primitives::Element;

use crate::constants::PROOF_POINTS;
use crate::error::{Error, Result};

/// The fixed-size part of a plonk proof
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProofPoints([Element; PROOF_POINTS]);

impl ProofPoints {
    pub fn new(points: [Element; PROOF_POINTS]) -> Self {
        Self(points)
    }

    pub fn zero() -> Self {
        Self([Element::ZERO; PROOF_POINTS])
    }

    pub fn into_inner(self) -> [Element; PROOF_POINTS] {
        self.0
    }
}

impl Deref for ProofPoints {
    type Target = [Element];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<[Element; PROOF_POINTS]> for ProofPoints {
    fn from(points: [Element; PROOF_POINTS]) -> Self {
        Self(points)
    }
}

impl TryFrom<&[Element]> for ProofPoints {
    type Error = Error;

    fn try_from(points: &[Element]) -> Result<Self> {
        let points = <[Element; PROOF_POINTS]>::try_from(points).map_err(|_| {
            Error::ProofPointCount {
                actual: points.len(),
            }
        })?;

        Ok(Self(points))
    }
}

impl TryFrom<Vec<Element>> for ProofPoints {
    type Error = Error;

    fn try_from(points: Vec<Element>) -> Result<Self> {
        Self::try_from(points.as_slice())
    }
}

/// The public inputs and outputs a proof is bound to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicSignals(Vec<Element>);

impl PublicSignals {
    pub fn new(signals: Vec<Element>) -> Self {
        Self(signals)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Element] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Element> {
        self.0
    }
}

impl From<Vec<Element>> for PublicSignals {
    fn from(signals: Vec<Element>) -> Self {
        Self(signals)
    }
}

impl FromIterator<Element> for PublicSignals {
    fn from_iter<T: IntoIterator<Item = Element>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlonkProof {
    pub proof: ProofPoints,
    pub public_signals: PublicSignals,
}

impl PlonkProof {
    pub fn new(proof: ProofPoints, public_signals: PublicSignals) -> Self {
        Self {
            proof,
            public_signals,
        }
    }

    /// Parses the `[proof...],[signals...]` text printed by `snarkjs zkey export soliditycalldata`
    pub fn from_solidity_calldata(calldata: &str) -> Result<Self> {
        let groups: Vec<Vec<String>> = serde_json::from_str(&format!("[{}]", calldata.trim()))?;

        let [proof, public_signals]: [Vec<String>; 2] = groups.try_into().map_err(|groups: Vec<_>| {
            Error::MalformedCalldata(format!("expected 2 arrays, got {}", groups.len()))
        })?;

        let proof = proof
            .iter()
            .map(|word| Element::from_str(word))
            .collect::<Result<Vec<_>, _>>()?;
        let public_signals = public_signals
            .iter()
            .map(|word| Element::from_str(word))
            .collect::<Result<PublicSignals, _>>()?;

        Ok(Self {
            proof: ProofPoints::try_from(proof)?,
            public_signals,
        })
    }

    /// Whether every proof point and public signal is a canonical field element
    pub fn is_canonical(&self) -> bool {
        self.proof
            .iter()
            .chain(self.public_signals.as_slice())
            .all(Element::is_canonical)
    }
}
