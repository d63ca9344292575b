use ethnum::U256;

#[cfg(feature = "borsh")]
mod borsh_impls;
mod convert;
mod field;

#[cfg(feature = "serde")]
mod serde;

pub use convert::ParseElementError;

/// A 256-bit unsigned integer
///
/// This type is a wrapper around a [`U256`], so can represent any value in the range `0..=(2^256 -
/// 1)`.
/// Proof points and public signals are values of the BN254 scalar field, which restricts the
/// meaningful values to those below [`Element::MODULUS`]. Elements are not reduced on
/// construction, see [`Element::canonicalize`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Element(#[cfg_attr(feature = "serde", serde(with = "serde"))] pub(crate) U256);

impl Element {
    /// The zero element
    pub const ZERO: Self = Self(U256::ZERO);

    /// The one element
    pub const ONE: Self = Self(U256::ONE);

    /// The largest possible element (note that this is not canonical)
    pub const MAX: Self = Self(U256::MAX);

    /// Size of an element when encoded as a big-endian word
    pub const BYTES: usize = 32;

    /// Create a new [`Element`] from a u64
    ///
    /// This is largely provided to help type inference in simple cases
    #[inline]
    #[must_use]
    pub fn new(i: u64) -> Self {
        Self(U256::from(i))
    }

    /// Convert this [`Element`] to a U256
    #[inline]
    #[must_use]
    pub fn to_u256(self) -> U256 {
        self.0
    }

    /// Convert this [`Element`] to a hex string (64 chars, no prefix)
    #[inline]
    #[must_use]
    pub fn to_hex(self) -> String {
        hex::encode(self.to_be_bytes())
    }

    /// If this element is zero, returns true
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

macro_rules! fmt_impl {
    ($t:ident, $u:ident) => {
        impl core::fmt::$u for Element {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                <U256 as core::fmt::$t>::fmt(&self.0, f)
            }
        }
    };
}

fmt_impl!(LowerHex, Display);
fmt_impl!(LowerHex, Debug);
fmt_impl!(LowerHex, LowerHex);
fmt_impl!(UpperHex, UpperHex);

macro_rules! partial_eq_impl {
    ($int:ty) => {
        impl PartialEq<$int> for Element {
            fn eq(&self, other: &$int) -> bool {
                *self == Element::from(*other)
            }
        }
    };
}

partial_eq_impl!(bool);
partial_eq_impl!(u8);
partial_eq_impl!(u16);
partial_eq_impl!(u32);
partial_eq_impl!(u64);
partial_eq_impl!(u128);

#[cfg(any(test, feature = "proptest"))]
pub mod proptest {
    use super::Element;
    use ::proptest::{arbitrary::StrategyFor, prelude::*, strategy::Map};
    use ethnum::U256;

    impl Arbitrary for Element {
        type Strategy = Map<StrategyFor<[u8; 32]>, fn([u8; 32]) -> Self>;
        type Parameters = ();

        fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
            any::<[u8; 32]>().prop_map(|array| Self(U256::from_be_bytes(array)))
        }
    }
}
