//! Network context consulted by the hardfork fallback.

use auto_impl::auto_impl;
use primitives::Hardfork;
use serde::{Deserialize, Serialize};

/// Network information the classifier may consult.
///
/// Only read when a transaction carries neither a type nor a shape that determines
/// one, and neither `hardfork` nor `commonHardfork` is set on the transaction itself.
#[auto_impl(&, &mut, Box, Arc)]
pub trait NetworkContext {
    /// Hardfork name from the shared chain configuration, if known.
    fn common_hardfork(&self) -> Option<&str>;
}

/// No network context.
impl NetworkContext for () {
    fn common_hardfork(&self) -> Option<&str> {
        None
    }
}

impl NetworkContext for Hardfork {
    fn common_hardfork(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: AsRef<str>> NetworkContext for Option<T> {
    fn common_hardfork(&self) -> Option<&str> {
        self.as_ref().map(AsRef::as_ref)
    }
}

/// Shared chain configuration, usually loaded from a JSON file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonConfig {
    /// Chain id, informational.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    /// Hardfork the chain is at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hardfork: Option<String>,
}

impl NetworkContext for CommonConfig {
    fn common_hardfork(&self) -> Option<&str> {
        self.hardfork.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn hardfork_of(context: impl NetworkContext) -> Option<String> {
        context.common_hardfork().map(str::to_owned)
    }

    #[test]
    fn contexts() {
        assert_eq!(hardfork_of(()), None);
        assert_eq!(hardfork_of(Hardfork::LONDON), Some("london".into()));
        assert_eq!(hardfork_of(Some("berlin")), Some("berlin".into()));
        assert_eq!(hardfork_of(None::<String>), None);

        let config = CommonConfig {
            chain_id: Some(1),
            hardfork: Some("shanghai".into()),
        };
        assert_eq!(hardfork_of(&config), Some("shanghai".into()));
        assert_eq!(hardfork_of(Arc::new(config)), Some("shanghai".into()));
    }

    #[test]
    fn config_from_json() {
        let config: CommonConfig =
            serde_json::from_str(r#"{"chainId": 5, "hardfork": "london"}"#).unwrap();
        assert_eq!(config.chain_id, Some(5));
        assert_eq!(config.common_hardfork(), Some("london"));

        let config: CommonConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.common_hardfork(), None);
    }
}
