//! Entity kind allow-list

use std::collections::BTreeSet;

/// Which entity kinds the annotator may touch
///
/// Kinds are compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AllowedKinds {
    /// Every kind is processed
    #[default]
    Any,
    /// Only the listed kinds (stored lowercased)
    Only(BTreeSet<String>),
}

impl AllowedKinds {
    /// Restrict processing to the given kinds
    #[must_use]
    pub fn only<I, S>(kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::Only(kinds.into_iter().map(|k| k.as_ref().trim().to_lowercase()).collect())
    }

    /// Check whether an entity of this kind may be processed
    #[must_use]
    pub fn allows(&self, kind: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Only(kinds) => kinds.contains(&kind.to_lowercase()),
        }
    }
}

impl From<Option<Vec<String>>> for AllowedKinds {
    fn from(kinds: Option<Vec<String>>) -> Self {
        kinds.map_or(Self::Any, Self::only)
    }
}
