//! Location metadata: where an entity's definition was read from

use serde::{Deserialize, Serialize};

/// Location type for URL-addressed sources
pub const URL_LOCATION_TYPE: &str = "url";

/// Describes the source of an entity definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSpec {
    /// Discriminator, e.g. `url` or `file`
    #[serde(rename = "type")]
    pub location_type: String,

    /// Location target; a full URL for `url` locations
    pub target: String,
}

impl LocationSpec {
    /// Create a location of any type
    #[must_use]
    pub fn new(location_type: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            location_type: location_type.into(),
            target: target.into(),
        }
    }

    /// Create a `url` location
    #[must_use]
    pub fn url(target: impl Into<String>) -> Self {
        Self::new(URL_LOCATION_TYPE, target)
    }

    /// Whether the target is a URL
    #[must_use]
    pub fn is_url(&self) -> bool {
        self.location_type == URL_LOCATION_TYPE
    }
}

impl std::fmt::Display for LocationSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.location_type, self.target)
    }
}
