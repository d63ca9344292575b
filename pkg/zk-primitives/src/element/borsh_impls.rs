use borsh::{BorshDeserialize, BorshSerialize};
use ethnum::U256;

use super::Element;

/// Written as a single big-endian ABI word
impl BorshSerialize for Element {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        self.to_be_bytes().serialize(writer)
    }
}

impl BorshDeserialize for Element {
    fn deserialize_reader<R: std::io::Read>(reader: &mut R) -> std::io::Result<Self> {
        let word = <[u8; Element::BYTES]>::deserialize_reader(reader)?;
        Ok(Self(U256::from_be_bytes(word)))
    }
}

#[cfg(test)]
mod tests {
    use test_strategy::proptest;

    use super::*;

    #[test]
    fn encodes_as_big_endian_word() {
        let bytes = borsh::to_vec(&Element::new(0x0102)).unwrap();

        assert_eq!(bytes.len(), Element::BYTES);
        assert!(bytes[..30].iter().all(|byte| *byte == 0));
        assert_eq!(&bytes[30..], &[0x01, 0x02]);
    }

    #[test]
    fn short_input_is_rejected() {
        let result = Element::try_from_slice(&[0u8; Element::BYTES - 1]);

        assert!(result.is_err());
    }

    #[proptest]
    fn borsh_matches_abi_word(element: Element) {
        let bytes = borsh::to_vec(&element).unwrap();

        assert_eq!(bytes, element.to_be_bytes());
        assert_eq!(Element::try_from_slice(&bytes).unwrap(), element);
    }
}
