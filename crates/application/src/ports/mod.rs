//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod external;
mod geocoder_port;
mod poi_search_port;

pub use external::{
    ChangeEvent, ChatStorePort, Document, IdentityPort, ListingStorePort, MediaStorePort, Session,
};
#[cfg(test)]
pub use geocoder_port::MockGeocoderPort;
pub use geocoder_port::{GeocoderPort, ResolvedPlace};
#[cfg(test)]
pub use poi_search_port::MockPoiSearchPort;
pub use poi_search_port::PoiSearchPort;
