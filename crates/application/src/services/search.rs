//! Search orchestrator
//!
//! Drives one search end to end: resolve the location to a region,
//! run the spatial query, and publish the outcome as a snapshot the
//! presentation layer can render. Concurrent searches are serialized
//! by a request generation; a completion is applied only while its
//! generation is still current, so a slow early response can never
//! overwrite the state of a later search.

use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};

use domain::{BoundingRegion, DEFAULT_RADIUS_DEG, GeoLocation, PlaceCategory, Poi};
use parking_lot::RwLock;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::{ApplicationError, ErrorKind};
use crate::ports::{GeocoderPort, PoiSearchPort};

/// Matches a raw `"lat, lon"` pair, which skips geocoding entirely
static COORDINATE_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^(-?\d+\.?\d*)\s*,\s*(-?\d+\.?\d*)$").expect("coordinate pattern is valid")
});

/// One search request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchInput {
    /// Free-text location, or a raw `"lat, lon"` pair
    #[serde(default)]
    pub location: String,
    /// Free-text query used for keyword widening; geocoded as the
    /// place when `location` is empty
    #[serde(default)]
    pub query: String,
    /// Category to search for
    pub category: PlaceCategory,
}

/// Renderable search state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchSnapshot {
    /// Current result set, superseded wholesale per search
    pub results: Vec<Poi>,
    /// Whether a search is in flight
    pub loading: bool,
    /// User-facing error message, when the last search failed
    pub error: Option<String>,
    /// Classification of the error, for status mapping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

/// Orchestrates geocoding and POI search behind a published snapshot
pub struct SearchService {
    geocoder: std::sync::Arc<dyn GeocoderPort>,
    poi_search: std::sync::Arc<dyn PoiSearchPort>,
    snapshot: RwLock<SearchSnapshot>,
    generation: AtomicU64,
}

impl std::fmt::Debug for SearchService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchService")
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

impl SearchService {
    /// Create a new search service
    #[must_use]
    pub fn new(
        geocoder: std::sync::Arc<dyn GeocoderPort>,
        poi_search: std::sync::Arc<dyn PoiSearchPort>,
    ) -> Self {
        Self {
            geocoder,
            poi_search,
            snapshot: RwLock::new(SearchSnapshot::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Current snapshot
    #[must_use]
    pub fn snapshot(&self) -> SearchSnapshot {
        self.snapshot.read().clone()
    }

    /// Run a search and return the resulting snapshot
    ///
    /// Empty location and query reset to the idle state without any
    /// network traffic. The returned snapshot is the published state
    /// after this search applied (or was suppressed as stale).
    #[instrument(skip(self), fields(category = ?input.category))]
    pub async fn search(&self, input: &SearchInput) -> SearchSnapshot {
        let location = input.location.trim();
        let query = input.query.trim();

        if location.is_empty() && query.is_empty() {
            // Invalidate in-flight searches too
            self.generation.fetch_add(1, Ordering::SeqCst);
            *self.snapshot.write() = SearchSnapshot::default();
            return self.snapshot();
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut snapshot = self.snapshot.write();
            snapshot.loading = true;
            snapshot.error = None;
        }

        match self.perform(location, query, input.category).await {
            Ok(results) => {
                debug!(count = results.len(), "search completed");
                self.apply_if_current(
                    generation,
                    SearchSnapshot {
                        results,
                        loading: false,
                        error: None,
                        error_kind: None,
                    },
                );
            },
            Err(err) => {
                warn!(error = %err, "search failed");
                self.apply_if_current(
                    generation,
                    SearchSnapshot {
                        results: Vec::new(),
                        loading: false,
                        error: Some(err.user_message()),
                        error_kind: Some(err.kind()),
                    },
                );
            },
        }

        self.snapshot()
    }

    async fn perform(
        &self,
        location: &str,
        query: &str,
        category: PlaceCategory,
    ) -> Result<Vec<Poi>, ApplicationError> {
        let region = self.resolve_region(location, query).await?;
        let widening = if query.is_empty() { None } else { Some(query) };
        self.poi_search
            .find_in_region(&region, category, widening)
            .await
    }

    /// Resolve the search region: raw coordinates bypass the geocoder;
    /// a query-only search geocodes the query text as the place
    async fn resolve_region(
        &self,
        location: &str,
        query: &str,
    ) -> Result<BoundingRegion, ApplicationError> {
        if !location.is_empty() {
            if let Some(point) = parse_coordinate_pair(location) {
                debug!(%point, "coordinate input, skipping geocoder");
                return Ok(BoundingRegion::around(point, DEFAULT_RADIUS_DEG));
            }
            return Ok(self.geocoder.resolve(location).await?.region);
        }
        Ok(self.geocoder.resolve(query).await?.region)
    }

    /// Resolve coordinates to a human-readable place description
    ///
    /// Backs the current-location flow: the client supplies raw
    /// browser coordinates and the label comes from reverse geocoding.
    /// Does not touch the published snapshot.
    ///
    /// # Errors
    ///
    /// Propagates geocoder failures.
    pub async fn describe_location(
        &self,
        location: GeoLocation,
    ) -> Result<String, ApplicationError> {
        self.geocoder.describe(location).await
    }

    /// Write the snapshot only if this search is still the newest one
    fn apply_if_current(&self, generation: u64, next: SearchSnapshot) -> bool {
        let mut snapshot = self.snapshot.write();
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "stale search result dropped");
            return false;
        }
        *snapshot = next;
        true
    }
}

/// Parse a `"lat, lon"` input, rejecting out-of-range coordinates
fn parse_coordinate_pair(input: &str) -> Option<GeoLocation> {
    let captures = COORDINATE_PAIR.captures(input)?;
    let latitude = captures.get(1)?.as_str().parse::<f64>().ok()?;
    let longitude = captures.get(2)?.as_str().parse::<f64>().ok()?;
    GeoLocation::new(latitude, longitude).ok()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::mpsc;

    use domain::{PoiId, Specialty};
    use parking_lot::Mutex;

    use super::*;
    use crate::ports::{MockGeocoderPort, MockPoiSearchPort, ResolvedPlace};

    fn poi(id: i64) -> Poi {
        Poi {
            id: PoiId::from_osm_element(id),
            name: format!("Clinic {id}"),
            address: "Address not available".to_string(),
            location: GeoLocation::new_unchecked(-33.87, 151.21),
            specialties: vec![Specialty::GeneralCare],
            rating: 4.8,
            reviews: 120,
            distance: "1.0 km".to_string(),
            is_open: true,
            image: None,
        }
    }

    fn sydney_place() -> ResolvedPlace {
        let location = GeoLocation::new_unchecked(-33.8688, 151.2093);
        ResolvedPlace {
            display_name: "Sydney, Australia".to_string(),
            location,
            region: BoundingRegion::around(location, DEFAULT_RADIUS_DEG),
        }
    }

    fn service(geocoder: MockGeocoderPort, poi_search: MockPoiSearchPort) -> SearchService {
        SearchService::new(Arc::new(geocoder), Arc::new(poi_search))
    }

    #[test]
    fn test_parse_coordinate_pair() {
        let point = parse_coordinate_pair("-33.8688, 151.2093");
        assert!(point.is_some());

        assert!(parse_coordinate_pair("Sydney NSW").is_none());
        assert!(parse_coordinate_pair("12.3, 45.6, 78.9").is_none());
        // Out-of-range latitude falls through to geocoding
        assert!(parse_coordinate_pair("123.0, 45.0").is_none());
    }

    #[tokio::test]
    async fn test_empty_input_stays_idle_without_network() {
        // No expectations: any port call would panic
        let svc = service(MockGeocoderPort::new(), MockPoiSearchPort::new());

        let snapshot = svc
            .search(&SearchInput {
                location: "  ".to_string(),
                query: String::new(),
                category: PlaceCategory::Veterinary,
            })
            .await;

        assert!(snapshot.results.is_empty());
        assert!(!snapshot.loading);
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn test_describe_location_reverse_geocodes() {
        let mut geocoder = MockGeocoderPort::new();
        geocoder
            .expect_describe()
            .withf(|location| location.to_string().starts_with("-33.87"))
            .times(1)
            .returning(|_| Ok("George Street, Sydney NSW 2000".to_string()));

        let svc = service(geocoder, MockPoiSearchPort::new());
        let name = svc
            .describe_location(GeoLocation::new_unchecked(-33.87, 151.21))
            .await
            .expect("description");
        assert_eq!(name, "George Street, Sydney NSW 2000");

        // Reverse lookup leaves the published snapshot untouched
        assert!(svc.snapshot().results.is_empty());
        assert!(!svc.snapshot().loading);
    }

    #[tokio::test]
    async fn test_coordinate_input_bypasses_geocoder() {
        // Geocoder has no expectations: a call would panic
        let geocoder = MockGeocoderPort::new();
        let mut poi_search = MockPoiSearchPort::new();
        poi_search
            .expect_find_in_region()
            .withf(|region, category, query| {
                region.contains(&GeoLocation::new_unchecked(-33.8688, 151.2093))
                    && (region.north() - region.south() - 0.16).abs() < 1e-9
                    && *category == PlaceCategory::Veterinary
                    && query.is_none()
            })
            .times(1)
            .returning(|_, _, _| Ok(vec![poi(1)]));

        let svc = service(geocoder, poi_search);
        let snapshot = svc
            .search(&SearchInput {
                location: "-33.8688, 151.2093".to_string(),
                query: String::new(),
                category: PlaceCategory::Veterinary,
            })
            .await;

        assert_eq!(snapshot.results.len(), 1);
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn test_query_only_search_geocodes_query_text() {
        let mut geocoder = MockGeocoderPort::new();
        geocoder
            .expect_resolve()
            .withf(|input| input == "emergency vet sydney")
            .times(1)
            .returning(|_| Ok(sydney_place()));
        let mut poi_search = MockPoiSearchPort::new();
        poi_search
            .expect_find_in_region()
            .withf(|_, _, query| *query == Some("emergency vet sydney"))
            .times(1)
            .returning(|_, _, _| Ok(vec![poi(1), poi(2)]));

        let svc = service(geocoder, poi_search);
        let snapshot = svc
            .search(&SearchInput {
                location: String::new(),
                query: "emergency vet sydney".to_string(),
                category: PlaceCategory::Veterinary,
            })
            .await;

        assert_eq!(snapshot.results.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_geocode_publishes_not_found_error() {
        let mut geocoder = MockGeocoderPort::new();
        geocoder
            .expect_resolve()
            .returning(|input| Err(ApplicationError::LocationNotFound(input.to_string())));

        let svc = service(geocoder, MockPoiSearchPort::new());
        let snapshot = svc
            .search(&SearchInput {
                location: "Atlantis".to_string(),
                query: String::new(),
                category: PlaceCategory::Veterinary,
            })
            .await;

        assert!(snapshot.results.is_empty());
        assert!(!snapshot.loading);
        let message = snapshot.error.as_deref().unwrap_or_default();
        assert!(message.contains("Atlantis"));
        assert_eq!(snapshot.error_kind, Some(ErrorKind::LocationNotFound));
        assert_ne!(
            message,
            ApplicationError::ServiceUnavailable(String::new()).user_message()
        );
    }

    #[tokio::test]
    async fn test_upstream_outage_publishes_retry_message() {
        let mut geocoder = MockGeocoderPort::new();
        geocoder.expect_resolve().returning(|_| Ok(sydney_place()));
        let mut poi_search = MockPoiSearchPort::new();
        poi_search.expect_find_in_region().returning(|_, _, _| {
            Err(ApplicationError::ServiceUnavailable("overpass".to_string()))
        });

        let svc = service(geocoder, poi_search);
        let snapshot = svc
            .search(&SearchInput {
                location: "Sydney".to_string(),
                query: String::new(),
                category: PlaceCategory::PetFood,
            })
            .await;

        let message = snapshot.error.as_deref().unwrap_or_default();
        assert!(message.contains("try again"));
        assert_eq!(snapshot.error_kind, Some(ErrorKind::ServiceUnavailable));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_stale_response_never_overwrites_newer_state() {
        let (release_slow, slow_gate) = mpsc::channel::<()>();
        let slow_gate = Mutex::new(Some(slow_gate));

        let geocoder = MockGeocoderPort::new();
        let mut poi_search = MockPoiSearchPort::new();
        // First search: blocks until released, then reports Sydney
        poi_search
            .expect_find_in_region()
            .withf(|region, _, _| region.contains(&GeoLocation::new_unchecked(-33.8688, 151.2093)))
            .times(1)
            .returning(move |_, _, _| {
                if let Some(gate) = slow_gate.lock().take() {
                    let _ = gate.recv();
                }
                Ok(vec![poi(1)])
            });
        // Second search: resolves immediately with Melbourne
        poi_search
            .expect_find_in_region()
            .withf(|region, _, _| region.contains(&GeoLocation::new_unchecked(-37.8136, 144.9631)))
            .times(1)
            .returning(|_, _, _| Ok(vec![poi(2), poi(3)]));

        let svc = Arc::new(service(geocoder, poi_search));

        let slow = {
            let svc = Arc::clone(&svc);
            tokio::spawn(async move {
                svc.search(&SearchInput {
                    location: "-33.8688, 151.2093".to_string(),
                    query: String::new(),
                    category: PlaceCategory::Veterinary,
                })
                .await
            })
        };
        // Let the slow search reach its port call before the fast one starts
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        let fast = svc
            .search(&SearchInput {
                location: "-37.8136, 144.9631".to_string(),
                query: String::new(),
                category: PlaceCategory::Veterinary,
            })
            .await;
        assert_eq!(fast.results.len(), 2);

        release_slow.send(()).ok();
        #[allow(clippy::expect_used)]
        slow.await.expect("slow search task panicked");

        // The late completion must not have clobbered the newer results
        let final_snapshot = svc.snapshot();
        assert_eq!(final_snapshot.results.len(), 2);
        assert!(final_snapshot.error.is_none());
        assert!(!final_snapshot.loading);
    }
}
