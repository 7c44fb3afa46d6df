//! Field based envelope classification.
//!
//! A transaction request is matched against [`RULES`] in order, the first rule that
//! resolves decides the outcome. Any concrete type is checked with [`validate`] before it
//! is returned, so a type never comes back together with fields it forbids.

use crate::{validate, IncompatibleFieldsError, NetworkContext, TransactionFields};
use primitives::{Hardfork, TransactionType, TypeTag};
use tracing::{debug, trace};

/// What a single rule made of a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The rule does not apply, try the next one.
    Continue,
    /// Classification is finished. [`None`] means indeterminate.
    Resolved(Option<TypeTag>),
}

/// Signature of a rule: the transaction and the context's common hardfork.
pub type RuleFn =
    fn(&TransactionFields, Option<&str>) -> Result<Decision, IncompatibleFieldsError>;

/// A named classification rule.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    /// Rule name, reported in [`Outcome::rule`].
    pub name: &'static str,
    /// Rule body.
    pub apply: RuleFn,
}

/// Classification rules, highest precedence first.
pub const RULES: [Rule; 6] = [
    Rule {
        name: "explicit_type",
        apply: explicit_type,
    },
    Rule {
        name: "legacy_fee",
        apply: legacy_fee,
    },
    Rule {
        name: "dynamic_fee",
        apply: dynamic_fee,
    },
    Rule {
        name: "access_list",
        apply: access_list,
    },
    Rule {
        name: "gas_price_only",
        apply: gas_price_only,
    },
    Rule {
        name: "hardfork_fallback",
        apply: hardfork_fallback,
    },
];

/// Classification result together with the rule that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Envelope type, [`None`] if it can't be determined.
    pub tag: Option<TypeTag>,
    /// Name of the deciding rule.
    pub rule: &'static str,
}

/// Determines the envelope type of a transaction request.
///
/// Returns `Ok(None)` when the type can't be determined from the fields and the hardfork
/// context. Picking a default in that case is up to the caller.
///
/// # Errors
///
/// Returns [`IncompatibleFieldsError`] if the chosen type forbids a field that is set.
pub fn classify(
    fields: &TransactionFields,
    context: impl NetworkContext,
) -> Result<Option<TypeTag>, IncompatibleFieldsError> {
    classify_detailed(fields, context).map(|outcome| outcome.tag)
}

/// Same as [`classify`], also reporting which rule decided.
pub fn classify_detailed(
    fields: &TransactionFields,
    context: impl NetworkContext,
) -> Result<Outcome, IncompatibleFieldsError> {
    let common_hardfork = context.common_hardfork();
    for rule in &RULES {
        trace!(rule = rule.name, "evaluating classification rule");
        if let Decision::Resolved(tag) = (rule.apply)(fields, common_hardfork)? {
            debug!(rule = rule.name, tag = ?tag, "classified transaction");
            return Ok(Outcome {
                tag,
                rule: rule.name,
            });
        }
    }
    // Not reached while `hardfork_fallback` is the last rule.
    Ok(Outcome {
        tag: None,
        rule: RULES[RULES.len() - 1].name,
    })
}

/// Validates `fields` against `tx_type` and resolves to it.
fn resolve(
    tx_type: TransactionType,
    fields: &TransactionFields,
) -> Result<Decision, IncompatibleFieldsError> {
    validate(tx_type, fields)?;
    Ok(Decision::Resolved(Some(tx_type.tag())))
}

fn explicit_type(
    fields: &TransactionFields,
    _: Option<&str>,
) -> Result<Decision, IncompatibleFieldsError> {
    let Some(tag) = fields.tx_type else {
        return Ok(Decision::Continue);
    };
    match tag.known() {
        Some(tx_type) => resolve(tx_type, fields),
        None => {
            debug!(%tag, "passing through unknown transaction type");
            Ok(Decision::Resolved(Some(tag)))
        }
    }
}

fn legacy_fee(
    fields: &TransactionFields,
    _: Option<&str>,
) -> Result<Decision, IncompatibleFieldsError> {
    if fields.gas.is_some() && fields.gas_price.is_some() {
        return resolve(TransactionType::Legacy, fields);
    }
    Ok(Decision::Continue)
}

fn dynamic_fee(
    fields: &TransactionFields,
    _: Option<&str>,
) -> Result<Decision, IncompatibleFieldsError> {
    if fields.max_fee_per_gas.is_some() || fields.max_priority_fee_per_gas.is_some() {
        return resolve(TransactionType::Eip1559, fields);
    }
    Ok(Decision::Continue)
}

fn access_list(
    fields: &TransactionFields,
    _: Option<&str>,
) -> Result<Decision, IncompatibleFieldsError> {
    if fields.access_list.is_some() {
        return resolve(TransactionType::Eip2930, fields);
    }
    Ok(Decision::Continue)
}

/// A lone `gasPrice` fits legacy transactions both before and after typed envelopes
/// exist, so it is only checked here and the hardfork decides.
fn gas_price_only(
    fields: &TransactionFields,
    _: Option<&str>,
) -> Result<Decision, IncompatibleFieldsError> {
    if fields.gas_price.is_some() {
        validate(TransactionType::Legacy, fields)?;
    }
    Ok(Decision::Continue)
}

fn hardfork_fallback(
    fields: &TransactionFields,
    common_hardfork: Option<&str>,
) -> Result<Decision, IncompatibleFieldsError> {
    let Some(name) = fields
        .hardfork
        .as_deref()
        .or(fields.common_hardfork.as_deref())
        .or(common_hardfork)
    else {
        return Ok(Decision::Resolved(None));
    };

    let Ok(hardfork) = name.parse::<Hardfork>() else {
        debug!(hardfork = name, "unknown hardfork, transaction type left undetermined");
        return Ok(Decision::Resolved(None));
    };

    if hardfork.is_enabled_in(Hardfork::LONDON) {
        if fields.gas_price.is_some() {
            resolve(TransactionType::Legacy, fields)
        } else {
            resolve(TransactionType::Eip1559, fields)
        }
    } else if hardfork == Hardfork::BERLIN {
        resolve(TransactionType::Legacy, fields)
    } else {
        // No typed envelopes before Berlin.
        Ok(Decision::Resolved(None))
    }
}
