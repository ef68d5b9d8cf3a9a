//! Point-of-interest entity - the canonical search result

use serde::{Deserialize, Serialize};

use crate::value_objects::{GeoLocation, PoiId, Specialty};

/// A point of interest (veterinary clinic or pet store)
///
/// Constructed fresh per search, never mutated afterwards. The `rating`,
/// `reviews`, `distance`, and `is_open` fields are synthesized placeholders
/// absent from the upstream data source and must be treated as
/// non-authoritative presentation data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    /// Stable source-namespaced identifier
    pub id: PoiId,
    /// Display name; synthesized positionally when the source has none
    pub name: String,
    /// Assembled address, or the "Address not available" placeholder
    pub address: String,
    /// Coordinates; entities without coordinates are never constructed
    pub location: GeoLocation,
    /// Specialty tags in insertion order, starting with General Care
    pub specialties: Vec<Specialty>,
    /// Synthesized rating placeholder, in [4.5, 5.0)
    pub rating: f64,
    /// Synthesized review-count placeholder, in [50, 450)
    pub reviews: u32,
    /// Synthesized distance string, e.g. "3.2 km"
    pub distance: String,
    /// Synthesized open/closed placeholder (~80% open)
    pub is_open: bool,
    /// Image URL; present only for curated entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Poi {
    /// Check whether this entity carries a given specialty tag
    #[must_use]
    pub fn has_specialty(&self, specialty: Specialty) -> bool {
        self.specialties.contains(&specialty)
    }
}
