use core::fmt;

/// Transaction fields that take part in envelope classification.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum TxField {
    /// Gas limit.
    Gas,
    /// Legacy single gas price.
    GasPrice,
    /// EIP-1559 fee cap.
    MaxFeePerGas,
    /// EIP-1559 priority fee.
    MaxPriorityFeePerGas,
    /// EIP-2930 access list.
    AccessList,
}

impl TxField {
    /// Every classification field, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Gas,
        Self::GasPrice,
        Self::MaxFeePerGas,
        Self::MaxPriorityFeePerGas,
        Self::AccessList,
    ];

    /// Name of the field in JSON-RPC transaction objects.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gas => "gas",
            Self::GasPrice => "gasPrice",
            Self::MaxFeePerGas => "maxFeePerGas",
            Self::MaxPriorityFeePerGas => "maxPriorityFeePerGas",
            Self::AccessList => "accessList",
        }
    }
}

impl fmt::Display for TxField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
