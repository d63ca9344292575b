use crate::Element;
use core::num::TryFromIntError;
use ethnum::U256;
use std::str::FromStr;

/// Error returned when parsing an [`Element`] from a string
pub type ParseElementError = core::num::ParseIntError;

macro_rules! from_int_impls {
    ($t:ty) => {
        impl From<$t> for Element {
            #[inline]
            fn from(value: $t) -> Self {
                Element(U256::from(value))
            }
        }

        impl TryFrom<Element> for $t {
            type Error = TryFromIntError;

            #[inline]
            fn try_from(value: Element) -> Result<Self, Self::Error> {
                <$t>::try_from(value.0)
            }
        }
    };
}

from_int_impls!(u8);
from_int_impls!(u16);
from_int_impls!(u32);
from_int_impls!(u64);
from_int_impls!(u128);

impl From<bool> for Element {
    #[inline]
    fn from(value: bool) -> Self {
        match value {
            false => Self::ZERO,
            true => Self::ONE,
        }
    }
}

/// Parses a hex string, with or without a `0x` prefix
impl FromStr for Element {
    type Err = ParseElementError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        Ok(Self(U256::from_str_radix(s, 16)?))
    }
}

impl From<U256> for Element {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<Element> for U256 {
    fn from(value: Element) -> Self {
        value.0
    }
}

impl Element {
    /// Parse a decimal string, the format proving tools use for public signals
    ///
    /// ```rust
    /// # use zk_primitives::*;
    /// assert_eq!(Element::from_dec_str("42").unwrap(), Element::new(42));
    /// assert!(Element::from_dec_str("0x2a").is_err());
    /// ```
    #[inline]
    pub fn from_dec_str(s: &str) -> Result<Self, ParseElementError> {
        Ok(Self(U256::from_str_radix(s, 10)?))
    }

    /// Convert the [`Element`] to its bytes in big-endian format
    ///
    /// This is the layout of a single ABI word.
    ///
    /// ```rust
    /// # use zk_primitives::*;
    /// let element = Element::ONE;
    /// assert_eq!(element.to_be_bytes(), {
    ///     let mut temp = [0; 32];
    ///     temp[31] = 1;
    ///     temp
    /// });
    /// ```
    #[inline]
    #[must_use]
    pub fn to_be_bytes(self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    /// Convert the [`Element`] to its bytes in little-endian format
    #[inline]
    #[must_use]
    pub fn to_le_bytes(self) -> [u8; 32] {
        self.0.to_le_bytes()
    }

    /// Convert big-endian bytes into an [`Element`]
    #[inline]
    #[must_use]
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self(U256::from_be_bytes(bytes))
    }

    /// Convert little-endian bytes into an [`Element`]
    #[inline]
    #[must_use]
    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        Self(U256::from_le_bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn test_from_str() {
        assert_eq!(Element::from_str("0").unwrap(), Element::ZERO);
        assert_eq!(Element::from_str("0x0").unwrap(), Element::ZERO);
        assert_eq!(Element::from_str("0x1").unwrap(), Element::ONE);
        assert_eq!(Element::from_str("0xB").unwrap(), Element::from(11u64));
        assert!(Element::from_str("0xzz").is_err());
        assert!(Element::from_str("").is_err());
    }

    #[test]
    fn test_from_dec_str() {
        assert_eq!(Element::from_dec_str("0").unwrap(), Element::ZERO);
        assert_eq!(Element::from_dec_str("255").unwrap(), Element::new(255));
        assert!(Element::from_dec_str("ff").is_err());
    }

    #[test]
    fn narrowing_conversion_fails_when_too_large() {
        assert_eq!(u8::try_from(Element::new(255)).unwrap(), 255);
        assert!(u8::try_from(Element::new(256)).is_err());
        assert!(u128::try_from(Element::MAX).is_err());
    }

    #[proptest]
    fn be_and_le_bytes_are_reversed(element: Element) {
        let mut le = element.to_le_bytes();
        le.reverse();

        assert_eq!(le, element.to_be_bytes());
        assert_eq!(Element::from_be_bytes(element.to_be_bytes()), element);
    }
}
