//! Value Objects - Immutable, identity-less domain primitives

mod bounding_region;
mod geo_location;
mod place_category;
mod poi_id;
mod specialty;

pub use bounding_region::{BoundingRegion, DEFAULT_RADIUS_DEG};
pub use geo_location::GeoLocation;
pub use place_category::PlaceCategory;
pub use poi_id::PoiId;
pub use specialty::Specialty;
