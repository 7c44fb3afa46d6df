use crate::TxField;
use core::{fmt, str::FromStr};
use num_enum::TryFromPrimitive;

/// Transaction envelope types understood by the classifier.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransactionType {
    /// Legacy transaction type
    Legacy = 0,
    /// EIP-2930 Access List transaction type
    Eip2930 = 1,
    /// EIP-1559 Fee market change transaction type
    Eip1559 = 2,
}

impl TransactionType {
    /// Fields that must be absent for a transaction of this type.
    ///
    /// Order is stable and is the order in which violations are reported.
    pub const fn forbidden_fields(self) -> &'static [TxField] {
        match self {
            Self::Legacy => &[
                TxField::AccessList,
                TxField::MaxFeePerGas,
                TxField::MaxPriorityFeePerGas,
            ],
            Self::Eip2930 => &[TxField::MaxFeePerGas, TxField::MaxPriorityFeePerGas],
            Self::Eip1559 => &[TxField::GasPrice],
        }
    }

    /// Returns the wire tag of this type.
    #[inline]
    pub const fn tag(self) -> TypeTag {
        TypeTag(self as u64)
    }
}

impl PartialEq<u8> for TransactionType {
    fn eq(&self, other: &u8) -> bool {
        (*self as u8) == *other
    }
}

impl PartialEq<TransactionType> for u8 {
    fn eq(&self, other: &TransactionType) -> bool {
        *self == (*other as u8)
    }
}

impl From<TransactionType> for u8 {
    fn from(tx_type: TransactionType) -> u8 {
        tx_type as u8
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tag(), f)
    }
}

/// Transaction type tag as found in a transaction object or on the wire.
///
/// Tags the classifier does not know are carried through unchanged, so a
/// `TypeTag` is not limited to [`TransactionType`] values. The canonical text
/// form is minimal lowercase hex, e.g. `0x0` or `0x7e`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeTag(pub u64);

impl TypeTag {
    /// Returns the [`TransactionType`] for this tag, if it is a known one.
    #[inline]
    pub fn known(self) -> Option<TransactionType> {
        u8::try_from(self.0)
            .ok()
            .and_then(|tag| TransactionType::try_from(tag).ok())
    }
}

impl From<TransactionType> for TypeTag {
    fn from(tx_type: TransactionType) -> Self {
        tx_type.tag()
    }
}

impl From<u8> for TypeTag {
    fn from(tag: u8) -> Self {
        Self(tag as u64)
    }
}

impl PartialEq<TransactionType> for TypeTag {
    fn eq(&self, other: &TransactionType) -> bool {
        *self == other.tag()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Error returned when a type tag string is neither hex nor decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidTypeTag;

impl fmt::Display for InvalidTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid transaction type tag")
    }
}

impl core::error::Error for InvalidTypeTag {}

impl FromStr for TypeTag {
    type Err = InvalidTypeTag;

    /// Parses `0x`-prefixed hex or plain decimal.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            u64::from_str_radix(hex, 16)
        } else {
            s.parse()
        }
        .map(Self)
        .map_err(|_| InvalidTypeTag)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TypeTag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TypeTag {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::{self, Unexpected};

        struct TagVisitor;

        impl de::Visitor<'_> for TagVisitor {
            type Value = TypeTag;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a transaction type as a hex string or an integer")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<TypeTag, E> {
                Ok(TypeTag(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<TypeTag, E> {
                u64::try_from(v)
                    .map(TypeTag)
                    .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<TypeTag, E> {
                v.parse()
                    .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(TagVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_form() {
        assert_eq!(TransactionType::Legacy.tag().to_string(), "0x0");
        assert_eq!(TransactionType::Eip2930.tag().to_string(), "0x1");
        assert_eq!(TransactionType::Eip1559.tag().to_string(), "0x2");
        assert_eq!(TypeTag(0x7e).to_string(), "0x7e");
    }

    #[test]
    fn parse_tag() {
        assert_eq!("0x2".parse::<TypeTag>(), Ok(TypeTag(2)));
        assert_eq!("0x02".parse::<TypeTag>(), Ok(TypeTag(2)));
        assert_eq!("0X7E".parse::<TypeTag>(), Ok(TypeTag(0x7e)));
        assert_eq!("1".parse::<TypeTag>(), Ok(TypeTag(1)));
        assert_eq!("0x".parse::<TypeTag>(), Err(InvalidTypeTag));
        assert_eq!("legacy".parse::<TypeTag>(), Err(InvalidTypeTag));
    }

    #[test]
    fn known_types() {
        assert_eq!(TypeTag(0).known(), Some(TransactionType::Legacy));
        assert_eq!(TypeTag(1).known(), Some(TransactionType::Eip2930));
        assert_eq!(TypeTag(2).known(), Some(TransactionType::Eip1559));
        assert_eq!(TypeTag(3).known(), None);
        assert_eq!(TypeTag(0x100).known(), None);
        assert_eq!(TypeTag(2), TransactionType::Eip1559);
        assert_eq!(2u8, TransactionType::Eip1559);
    }

    #[test]
    fn forbidden_fields_per_type() {
        assert_eq!(
            TransactionType::Legacy.forbidden_fields(),
            &[
                TxField::AccessList,
                TxField::MaxFeePerGas,
                TxField::MaxPriorityFeePerGas
            ]
        );
        assert_eq!(
            TransactionType::Eip2930.forbidden_fields(),
            &[TxField::MaxFeePerGas, TxField::MaxPriorityFeePerGas]
        );
        assert_eq!(
            TransactionType::Eip1559.forbidden_fields(),
            &[TxField::GasPrice]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_tag() {
        let tag: TypeTag = serde_json::from_str("\"0x1\"").unwrap();
        assert_eq!(tag, TypeTag(1));
        let tag: TypeTag = serde_json::from_str("2").unwrap();
        assert_eq!(tag, TypeTag(2));
        assert!(serde_json::from_str::<TypeTag>("-1").is_err());
        assert!(serde_json::from_str::<TypeTag>("\"zz\"").is_err());
        assert_eq!(serde_json::to_string(&TypeTag(0x7e)).unwrap(), "\"0x7e\"");
    }
}
