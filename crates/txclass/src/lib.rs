//! Envelope type classification and cross field validation for Ethereum transactions.
//!
//! Two entry points:
//! - [`classify`] infers the type of a transaction request from the fields it sets,
//!   falling back to the hardfork the network is at.
//! - [`sniff`] reads the type of an already encoded transaction from its first byte.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod classify;
pub mod context;
pub mod error;
pub mod fields;
pub mod sniff;
pub mod validate;

pub use classify::{classify, classify_detailed, Decision, Outcome, Rule, RULES};
pub use context::{CommonConfig, NetworkContext};
pub use error::IncompatibleFieldsError;
pub use fields::TransactionFields;
pub use sniff::{sniff, sniff_hex};
pub use validate::validate;

pub use primitives;
pub use primitives::{Hardfork, TransactionType, TxField, TypeTag};
