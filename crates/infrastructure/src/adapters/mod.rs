//! Port adapters

mod geocoder_adapter;
mod poi_search_adapter;

pub use geocoder_adapter::GeocoderAdapter;
pub use poi_search_adapter::PoiSearchAdapter;

use application::error::ApplicationError;
use integration_osm::OsmError;

/// Map an integration-layer error to an application error
fn map_osm_error(err: OsmError) -> ApplicationError {
    match err {
        OsmError::LocationNotFound(input) => ApplicationError::LocationNotFound(input),
        OsmError::ServiceUnavailable(message) => ApplicationError::ServiceUnavailable(message),
        OsmError::GatewayTimeout => {
            ApplicationError::ServiceUnavailable("spatial backend overloaded".to_string())
        },
        OsmError::ConnectionFailed(message) => ApplicationError::Network(message),
        OsmError::Timeout { timeout_secs } => {
            ApplicationError::Network(format!("request timed out after {timeout_secs}s"))
        },
        OsmError::RequestFailed(message) | OsmError::ParseError(message) => {
            ApplicationError::ExternalService(message)
        },
    }
}
