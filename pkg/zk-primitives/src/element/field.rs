use ethnum::U256;

use crate::Element;

impl Element {
    /// The modulus of the BN254 scalar field
    pub const MODULUS: Element = Element(U256::from_words(
        0x3064_4e72_e131_a029_b850_45b6_8181_585d,
        0x2833_e848_79b9_7091_43e1_f593_f000_0001,
    ));

    /// Reduce this element to its canonical form
    ///
    /// An [`Element`] is just a 256-bit unsigned integer, while field values are integers modulo
    /// [`Element::MODULUS`]. Verifier routines reject proofs whose inputs are outside the field,
    /// so callers that build signals from arbitrary integers should canonicalize first.
    #[inline]
    pub fn canonicalize(&mut self) {
        self.0 %= Self::MODULUS.0;
    }

    /// Whether this [`Element`] is in its canonical form
    ///
    /// See [`Element::canonicalize`]
    #[inline]
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.0 < Self::MODULUS.0
    }
}
