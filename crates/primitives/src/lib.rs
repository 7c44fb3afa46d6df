//! Hardfork ordering and transaction type primitives shared by the txclass crates.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod field;
pub mod hardfork;
pub mod transaction_type;

pub use field::TxField;
pub use hardfork::{Hardfork, UnknownHardfork};
pub use transaction_type::{InvalidTypeTag, TransactionType, TypeTag};
