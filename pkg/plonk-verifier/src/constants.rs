/// Number of proof points (commitments and evaluations) in a plonk proof
pub const PROOF_POINTS: usize = 24;

/// Largest public signal count the adapter will build a call for
pub const MAX_PUBLIC_SIGNALS: usize = 256;

/// Size of a function selector
pub const SELECTOR_SIZE: usize = 4;

/// Size of an ABI word
pub const WORD_SIZE: usize = 32;
