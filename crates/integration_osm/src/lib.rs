//! OpenStreetMap integration for PawFinder
//!
//! Provides free-text geocoding via
//! [Nominatim](https://nominatim.openstreetmap.org) and point-of-interest
//! search via the [Overpass API](https://overpass-api.de).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern. [`GeocodingClient`] resolves
//! place names to [`PlaceCandidate`]s, implemented by [`NominatimClient`].
//! [`PoiClient`] runs category-filtered spatial queries, implemented by
//! [`OverpassClient`], which owns the bounded-retry policy for the shared,
//! rate-limited Overpass backend and normalizes raw elements into domain
//! [`Poi`](domain::Poi) entities via a pluggable [`Enrichment`] seam.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::{BoundingRegion, GeoLocation, PlaceCategory, DEFAULT_RADIUS_DEG};
//! use integration_osm::{NominatimClient, NominatimConfig, OverpassClient, OverpassConfig};
//!
//! let geocoder = NominatimClient::new(&NominatimConfig::default())?;
//! let candidate = geocoder.geocode("Sydney NSW").await?;
//!
//! let pois = OverpassClient::new(&OverpassConfig::default())?
//!     .find_pois(
//!         &candidate.region(DEFAULT_RADIUS_DEG),
//!         PlaceCategory::Veterinary,
//!         Some("emergency surgery"),
//!     )
//!     .await?;
//! ```

mod config;
mod error;
mod geocoding;
mod models;
mod normalize;
mod overpass;
mod query;

pub use config::OverpassConfig;
pub use error::OsmError;
pub use geocoding::{GeocodingClient, NominatimClient, NominatimConfig};
pub use models::{OverpassCenter, OverpassElement, PlaceBounds, PlaceCandidate};
pub use normalize::{Enriched, Enrichment, FixedEnrichment, RandomEnrichment, normalize_elements};
pub use overpass::{OverpassClient, PoiClient};
pub use query::{build_query, matched_specialties};
