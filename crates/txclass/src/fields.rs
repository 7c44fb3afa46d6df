//! Transaction request fields relevant to classification.

use alloy_eip2930::AccessList;
use alloy_primitives::U256;
use primitives::{TxField, TypeTag};
use serde::{Deserialize, Serialize};

/// The parts of a transaction request that decide its envelope type.
///
/// Every field is optional. A JSON `null` and a missing key both deserialize to
/// [`None`], and both mean the field is not set. An empty access list is set.
/// Unrelated transaction keys (`from`, `to`, `value`, ...) are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFields {
    /// Explicit envelope type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub tx_type: Option<TypeTag>,
    /// Gas limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<U256>,
    /// Legacy gas price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    /// EIP-1559 fee cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<U256>,
    /// EIP-1559 priority fee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<U256>,
    /// EIP-2930 access list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_list: Option<AccessList>,
    /// Hardfork the transaction targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardfork: Option<String>,
    /// Hardfork taken from the shared chain configuration. Used when `hardfork` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_hardfork: Option<String>,
}

impl TransactionFields {
    /// Returns `true` if `field` is set.
    pub fn is_present(&self, field: TxField) -> bool {
        match field {
            TxField::Gas => self.gas.is_some(),
            TxField::GasPrice => self.gas_price.is_some(),
            TxField::MaxFeePerGas => self.max_fee_per_gas.is_some(),
            TxField::MaxPriorityFeePerGas => self.max_priority_fee_per_gas.is_some(),
            TxField::AccessList => self.access_list.is_some(),
        }
    }

    /// Iterates over the classification fields that are set.
    pub fn present_fields(&self) -> impl Iterator<Item = TxField> + '_ {
        TxField::ALL
            .into_iter()
            .filter(move |field| self.is_present(*field))
    }

    /// Sets the explicit transaction type.
    pub fn with_type(mut self, tx_type: impl Into<TypeTag>) -> Self {
        self.tx_type = Some(tx_type.into());
        self
    }

    /// Sets the gas limit.
    pub fn with_gas(mut self, gas: U256) -> Self {
        self.gas = Some(gas);
        self
    }

    /// Sets the legacy gas price.
    pub fn with_gas_price(mut self, gas_price: U256) -> Self {
        self.gas_price = Some(gas_price);
        self
    }

    /// Sets the EIP-1559 fee cap.
    pub fn with_max_fee_per_gas(mut self, max_fee_per_gas: U256) -> Self {
        self.max_fee_per_gas = Some(max_fee_per_gas);
        self
    }

    /// Sets the EIP-1559 priority fee.
    pub fn with_max_priority_fee_per_gas(mut self, max_priority_fee_per_gas: U256) -> Self {
        self.max_priority_fee_per_gas = Some(max_priority_fee_per_gas);
        self
    }

    /// Sets the access list.
    pub fn with_access_list(mut self, access_list: AccessList) -> Self {
        self.access_list = Some(access_list);
        self
    }

    /// Sets the target hardfork.
    pub fn with_hardfork(mut self, hardfork: impl Into<String>) -> Self {
        self.hardfork = Some(hardfork.into());
        self
    }

    /// Sets the hardfork from the shared chain configuration.
    pub fn with_common_hardfork(mut self, hardfork: impl Into<String>) -> Self {
        self.common_hardfork = Some(hardfork.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_missing_are_absent() {
        let fields: TransactionFields = serde_json::from_str(
            r#"{"gasPrice":null,"maxFeePerGas":null,"accessList":null,"to":"0x0000000000000000000000000000000000000001"}"#,
        )
        .unwrap();
        assert_eq!(fields, TransactionFields::default());
        assert_eq!(fields.present_fields().count(), 0);
    }

    #[test]
    fn empty_access_list_is_present() {
        let fields: TransactionFields = serde_json::from_str(r#"{"accessList":[]}"#).unwrap();
        assert!(fields.is_present(TxField::AccessList));
        assert_eq!(
            fields.present_fields().collect::<Vec<_>>(),
            vec![TxField::AccessList]
        );
    }

    #[test]
    fn deserialize_rpc_request() {
        let fields: TransactionFields = serde_json::from_str(
            r#"{
                "type": "0x2",
                "gas": "0x5208",
                "maxFeePerGas": "0x3b9aca00",
                "maxPriorityFeePerGas": "0x1",
                "hardfork": "london",
                "commonHardfork": "berlin"
            }"#,
        )
        .unwrap();
        assert_eq!(fields.tx_type, Some(TypeTag(2)));
        assert_eq!(fields.gas, Some(U256::from(21_000)));
        assert_eq!(fields.max_fee_per_gas, Some(U256::from(1_000_000_000u64)));
        assert_eq!(fields.hardfork.as_deref(), Some("london"));
        assert_eq!(fields.common_hardfork.as_deref(), Some("berlin"));
        assert_eq!(
            fields.present_fields().collect::<Vec<_>>(),
            vec![
                TxField::Gas,
                TxField::MaxFeePerGas,
                TxField::MaxPriorityFeePerGas
            ]
        );
    }

    #[test]
    fn serialize_skips_absent_fields() {
        let fields = TransactionFields::default()
            .with_type(primitives::TransactionType::Legacy)
            .with_gas_price(U256::from(1));
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(json, serde_json::json!({"type": "0x0", "gasPrice": "0x1"}));
    }
}
