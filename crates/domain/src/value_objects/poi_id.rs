//! POI identifier, namespaced by data source

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A stable POI identifier
///
/// Ids are namespaced by source (e.g. `osm-2938471`) so that entries from
/// different datasets cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoiId(String);

impl PoiId {
    /// Create an id for an OSM element
    #[must_use]
    pub fn from_osm_element(element_id: i64) -> Self {
        Self(format!("osm-{element_id}"))
    }

    /// Create an id for a curated catalog entry
    #[must_use]
    pub fn curated(slug: &str) -> Self {
        Self(format!("curated-{slug}"))
    }

    /// Parse an id from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or whitespace-only.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidPoiId(s.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PoiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
