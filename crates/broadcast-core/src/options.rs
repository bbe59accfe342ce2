//! Broadcaster construction options

use serde::{Deserialize, Serialize};

/// Options recognised when constructing a [`Broadcaster`](crate::Broadcaster).
///
/// Unknown keys are ignored when deserialising.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BroadcastOptions {
    /// Expose the `on` / `trigger` alias surface.
    #[serde(alias = "aliasOn")]
    pub alias_on: bool,
}

impl BroadcastOptions {
    /// Options with the alias surface disabled.
    pub fn without_aliases() -> Self {
        Self { alias_on: false }
    }
}

impl Default for BroadcastOptions {
    fn default() -> Self {
        Self { alias_on: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_aliases() {
        assert!(BroadcastOptions::default().alias_on);
        assert!(!BroadcastOptions::without_aliases().alias_on);
    }

    #[test]
    fn test_deserialize_ignores_unknown_keys() {
        let options: BroadcastOptions =
            serde_json::from_str(r#"{"alias_on": false, "verbose": true}"#)
                .expect("valid options");
        assert!(!options.alias_on);
    }

    #[test]
    fn test_deserialize_accepts_camel_case_key() {
        let options: BroadcastOptions =
            serde_json::from_str(r#"{"aliasOn": false}"#).expect("valid options");
        assert!(!options.alias_on);

        let options: BroadcastOptions = serde_json::from_str("{}").expect("valid options");
        assert!(options.alias_on);
    }
}
