//! Result normalization
//!
//! Maps raw Overpass elements into domain [`Poi`] entities. Records without
//! coordinates are dropped silently; partial upstream coverage is expected
//! and is not an error. Presentation-only fields absent from OSM (rating,
//! reviews, distance, open state) are synthesized behind the [`Enrichment`]
//! seam so a real data source can replace them without touching the
//! mapping logic.

use domain::{GeoLocation, PlaceCategory, Poi, PoiId, Specialty};
use rand::Rng;
use tracing::debug;

/// Address placeholder when no structured address fields are present
const ADDRESS_NOT_AVAILABLE: &str = "Address not available";

/// Synthesized presentation fields for a single POI
#[derive(Debug, Clone, PartialEq)]
pub struct Enriched {
    /// Rating, conventionally in [4.5, 5.0)
    pub rating: f64,
    /// Review count
    pub reviews: u32,
    /// Display distance, e.g. "3.2 km"
    pub distance: String,
    /// Open/closed state
    pub is_open: bool,
}

/// Pluggable source for the presentation-only placeholder fields
///
/// OSM carries none of these, so the default implementation synthesizes
/// demo values. Non-authoritative by design.
pub trait Enrichment: Send + Sync {
    /// Produce placeholder fields for one POI
    fn enrich(&self) -> Enriched;
}

/// Randomized placeholder policy, reproduced exactly for UI parity:
/// rating in [4.5, 5.0), reviews in [50, 450), distance in [0, 10) km at
/// one decimal, open with probability 0.8.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomEnrichment;

impl Enrichment for RandomEnrichment {
    fn enrich(&self) -> Enriched {
        let mut rng = rand::rng();
        Enriched {
            rating: 4.5 + rng.random::<f64>() * 0.5,
            reviews: 50 + rng.random_range(0..400),
            distance: format!("{:.1} km", rng.random_range(0.0..10.0)),
            is_open: rng.random_bool(0.8),
        }
    }
}

/// Deterministic enrichment stub for tests
#[derive(Debug, Clone)]
pub struct FixedEnrichment(pub Enriched);

impl Default for FixedEnrichment {
    fn default() -> Self {
        Self(Enriched {
            rating: 4.8,
            reviews: 120,
            distance: "1.0 km".to_string(),
            is_open: true,
        })
    }
}

impl Enrichment for FixedEnrichment {
    fn enrich(&self) -> Enriched {
        self.0.clone()
    }
}

use crate::models::OverpassElement;

/// Normalize raw Overpass elements into POI entities
///
/// Applies the result cap in source order, synthesizes positional
/// placeholder names, assembles addresses, infers specialty tags, and
/// attaches enrichment fields. No entity is fabricated: every output
/// corresponds to an input element with valid coordinates.
#[must_use]
pub fn normalize_elements(
    elements: Vec<OverpassElement>,
    category: PlaceCategory,
    enrichment: &dyn Enrichment,
    cap: usize,
) -> Vec<Poi> {
    let total = elements.len();
    let pois: Vec<Poi> = elements
        .into_iter()
        .filter_map(|el| {
            let (lat, lon) = el.coordinates()?;
            let location = GeoLocation::new(lat, lon).ok()?;
            Some((el, location))
        })
        .take(cap)
        .enumerate()
        .map(|(index, (el, location))| to_poi(&el, location, category, enrichment, index))
        .collect();

    if pois.len() < total {
        debug!(
            total,
            kept = pois.len(),
            "Dropped elements without coordinates or beyond the result cap"
        );
    }
    pois
}

fn to_poi(
    el: &OverpassElement,
    location: GeoLocation,
    category: PlaceCategory,
    enrichment: &dyn Enrichment,
    index: usize,
) -> Poi {
    let name = el.tags.get("name").map_or_else(
        || format!("{} {}", category.label(), index + 1),
        Clone::clone,
    );

    let enriched = enrichment.enrich();

    Poi {
        id: PoiId::from_osm_element(el.id),
        name,
        address: assemble_address(el),
        location,
        specialties: infer_specialties(el),
        rating: enriched.rating,
        reviews: enriched.reviews,
        distance: enriched.distance,
        is_open: enriched.is_open,
        image: None,
    }
}

/// Join present structured address components with ", "
fn assemble_address(el: &OverpassElement) -> String {
    let city = el.tags.get("addr:city").or_else(|| el.tags.get("addr:town"));
    let parts: Vec<&str> = [
        el.tags.get("addr:street"),
        city,
        el.tags.get("addr:postcode"),
        el.tags.get("addr:country"),
    ]
    .into_iter()
    .flatten()
    .map(String::as_str)
    .collect();

    if parts.is_empty() {
        ADDRESS_NOT_AVAILABLE.to_string()
    } else {
        parts.join(", ")
    }
}

/// Baseline General Care plus attribute-flag tags in fixed order
fn infer_specialties(el: &OverpassElement) -> Vec<Specialty> {
    let mut specialties = vec![Specialty::GeneralCare];
    for specialty in Specialty::INFERRED {
        if let Some(attr) = specialty.osm_attribute() {
            if el.tags.get(attr).map(String::as_str) == Some("yes") {
                specialties.push(specialty);
            }
        }
    }
    specialties
}
