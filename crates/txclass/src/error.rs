//! Classification errors.

use core::fmt;
use primitives::{TransactionType, TxField};

/// Fields that are set on a transaction but forbidden for its type.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("incompatible fields [{}] for transaction type {tx_type}", FieldList(.fields))]
pub struct IncompatibleFieldsError {
    /// Offending fields, in schema order.
    pub fields: Vec<TxField>,
    /// Type the fields were checked against.
    pub tx_type: TransactionType,
}

struct FieldList<'a>(&'a [TxField]);

impl fmt::Display for FieldList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(field.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let error = IncompatibleFieldsError {
            fields: vec![TxField::AccessList, TxField::MaxFeePerGas],
            tx_type: TransactionType::Legacy,
        };
        assert_eq!(
            error.to_string(),
            "incompatible fields [accessList, maxFeePerGas] for transaction type 0x0"
        );

        let error = IncompatibleFieldsError {
            fields: vec![TxField::GasPrice],
            tx_type: TransactionType::Eip1559,
        };
        assert_eq!(
            error.to_string(),
            "incompatible fields [gasPrice] for transaction type 0x2"
        );
    }
}
