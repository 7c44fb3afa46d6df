//! Per type field compatibility checks.

use crate::{IncompatibleFieldsError, TransactionFields};
use primitives::TransactionType;

/// Checks that none of the fields forbidden for `tx_type` are set.
///
/// Every offending field is reported, not just the first one. See
/// [`TransactionType::forbidden_fields`] for the per type schema.
pub fn validate(
    tx_type: TransactionType,
    fields: &TransactionFields,
) -> Result<(), IncompatibleFieldsError> {
    let violations: Vec<_> = tx_type
        .forbidden_fields()
        .iter()
        .copied()
        .filter(|field| fields.is_present(*field))
        .collect();

    if violations.is_empty() {
        return Ok(());
    }

    Err(IncompatibleFieldsError {
        fields: violations,
        tx_type,
    })
}
