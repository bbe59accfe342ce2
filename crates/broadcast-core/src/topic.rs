//! Topic string parsing
//!
//! A topic token is either `name` or `name.namespace`, split at the last `.`.
//! A token with an empty name (`.namespace`) addresses every topic carrying
//! that namespace. Several tokens may be given in one string separated by
//! whitespace.

use std::fmt;

/// Name of the catch-all topic.
///
/// Subscribers of `"all"` are notified after every publish to any other
/// topic, receiving the original topic name as their first argument.
pub const ALL_TOPIC: &str = "all";

/// Separator between a topic name and its namespace.
pub const NAMESPACE_SEPARATOR: char = '.';

/// A single parsed topic token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Topic {
    name: String,
    namespace: Option<String>,
}

impl Topic {
    /// Parse one token, splitting at the last `.`.
    ///
    /// An empty namespace (`"change."`) is treated as no namespace.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        match token.rfind(NAMESPACE_SEPARATOR) {
            Some(index) => {
                let namespace = &token[index + NAMESPACE_SEPARATOR.len_utf8()..];
                Self {
                    name: token[..index].to_string(),
                    namespace: (!namespace.is_empty()).then(|| namespace.to_string()),
                }
            }
            None => Self::bare(token),
        }
    }

    /// A topic without namespace.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
        }
    }

    /// Bare topic name (may be empty for the pure namespace form).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace suffix, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// True for the `.namespace` form, which addresses every topic.
    pub fn is_namespace_only(&self) -> bool {
        self.name.is_empty() && self.namespace.is_some()
    }

    /// True for the reserved catch-all topic.
    pub fn is_all(&self) -> bool {
        self.name == ALL_TOPIC
    }

    /// Whether a subscription registered under `namespace` is addressed by
    /// this topic. A topic without namespace addresses every namespace.
    pub fn accepts(&self, namespace: Option<&str>) -> bool {
        match &self.namespace {
            None => true,
            Some(wanted) => namespace == Some(wanted.as_str()),
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{}{}{}", self.name, NAMESPACE_SEPARATOR, namespace),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Split a topic specification into its whitespace-separated tokens.
///
/// Empty specifications yield nothing.
pub fn parse_topics(spec: &str) -> impl Iterator<Item = Topic> + '_ {
    spec.split_whitespace().map(Topic::parse)
}
