//! Envelope type detection for encoded transactions.

use alloy_primitives::hex;
use primitives::{TransactionType, TypeTag};

pub use hex::FromHexError;

/// Largest first byte of a typed (EIP-2718) envelope.
///
/// A legacy transaction is an RLP list, whose first byte is always `0xc0` or more.
pub const MAX_TYPED_PREFIX: u8 = 0x7f;

/// Returns the envelope type of an encoded transaction by looking at its first byte.
///
/// Bytes above [`MAX_TYPED_PREFIX`] mean a legacy transaction, anything else is the type
/// tag itself. Only empty input yields [`None`].
pub fn sniff(encoded: &[u8]) -> Option<TypeTag> {
    let first = *encoded.first()?;
    if first > MAX_TYPED_PREFIX {
        Some(TransactionType::Legacy.tag())
    } else {
        Some(TypeTag::from(first))
    }
}

/// [`sniff`] over hex input, with or without a `0x` prefix.
pub fn sniff_hex(encoded: &str) -> Result<Option<TypeTag>, FromHexError> {
    let bytes = hex::decode(encoded.trim())?;
    Ok(sniff(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_rlp_list() {
        assert_eq!(sniff(&[0xc0]), Some(TypeTag(0)));
        assert_eq!(sniff(&[0xf8, 0x6c, 0x80]), Some(TypeTag(0)));
        assert_eq!(sniff(&[0x80]), Some(TypeTag(0)));
        assert_eq!(sniff(&[0xff]), Some(TypeTag(0)));
    }

    #[test]
    fn typed_envelopes() {
        assert_eq!(sniff(&[0x02, 0xf8]), Some(TypeTag(2)));
        assert_eq!(sniff(&[0x01]), Some(TypeTag(1)));
        assert_eq!(sniff(&[0x00]), Some(TypeTag(0)));
        assert_eq!(sniff(&[0x7e]).map(|tag| tag.to_string()), Some("0x7e".into()));
        assert_eq!(sniff(&[0x7f]), Some(TypeTag(0x7f)));
    }

    #[test]
    fn empty_input() {
        assert_eq!(sniff(&[]), None);
    }

    #[test]
    fn hex_input() {
        assert_eq!(sniff_hex("0x02f87001"), Ok(Some(TypeTag(2))));
        assert_eq!(sniff_hex("f86c80"), Ok(Some(TypeTag(0))));
        assert_eq!(sniff_hex(" 0x01 \n"), Ok(Some(TypeTag(1))));
        assert_eq!(sniff_hex("0x"), Ok(None));
        assert!(sniff_hex("0xzz").is_err());
    }
}
