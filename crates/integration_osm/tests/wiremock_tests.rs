//! Integration tests for the OSM clients using wiremock
//!
//! These tests verify the Nominatim and Overpass clients against a mock
//! HTTP server: geocode resolution, retry/backoff on 504, fail-fast on
//! other statuses, and keyword widening at the wire level.

use std::time::Instant;

use domain::{BoundingRegion, GeoLocation, PlaceCategory, Specialty};
use integration_osm::{
    FixedEnrichment, GeocodingClient, NominatimClient, NominatimConfig, OsmError, OverpassClient,
    OverpassConfig, PoiClient,
};
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Sample Nominatim response for a city with a bounding box
fn sample_geocode_response() -> serde_json::Value {
    serde_json::json!([{
        "lat": "-33.8688",
        "lon": "151.2093",
        "display_name": "Sydney, New South Wales, Australia",
        "boundingbox": ["-34.1", "-33.5", "150.5", "151.5"]
    }])
}

/// Sample Overpass response with a node, a way with center, and a
/// coordinate-less element
fn sample_overpass_response() -> serde_json::Value {
    serde_json::json!({
        "version": 0.6,
        "elements": [
            {
                "id": 101,
                "type": "node",
                "lat": -33.8688,
                "lon": 151.2093,
                "tags": {
                    "name": "Sydney Animal Hospital",
                    "addr:street": "123 George St",
                    "addr:city": "Sydney",
                    "veterinary:surgery": "yes"
                }
            },
            {
                "id": 202,
                "type": "way",
                "center": {"lat": -33.8700, "lon": 151.2100},
                "tags": {"emergency:veterinary": "yes"}
            },
            {
                "id": 303,
                "type": "node",
                "tags": {"name": "No Coordinates Clinic"}
            }
        ]
    })
}

/// Create a geocoding client pointed at the mock server
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn geocoder(mock_server: &MockServer) -> NominatimClient {
    let config = NominatimConfig {
        base_url: mock_server.uri(),
        ..NominatimConfig::for_testing()
    };
    #[allow(clippy::expect_used)]
    NominatimClient::new(&config).expect("Failed to create geocoding client")
}

/// Create an Overpass client with deterministic enrichment
///
/// # Panics
///
/// Panics if the client cannot be created (should not happen in tests).
fn overpass(mock_server: &MockServer) -> OverpassClient {
    let config = OverpassConfig {
        base_url: mock_server.uri(),
        ..OverpassConfig::for_testing()
    };
    #[allow(clippy::expect_used)]
    OverpassClient::with_enrichment(&config, Box::new(FixedEnrichment::default()))
        .expect("Failed to create Overpass client")
}

fn sydney_region() -> BoundingRegion {
    BoundingRegion::around(GeoLocation::new_unchecked(-33.8688, 151.2093), 0.08)
}

// ============================================================================
// Geocoding scenarios
// ============================================================================

#[tokio::test]
async fn geocode_success_with_bounding_box() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Sydney NSW"))
        .and(query_param("countrycodes", "au"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_geocode_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let candidate = geocoder(&mock_server)
        .geocode("Sydney NSW")
        .await
        .expect("geocode succeeds");

    assert_eq!(candidate.display_name, "Sydney, New South Wales, Australia");
    assert!((candidate.location.latitude() - -33.8688).abs() < 1e-6);

    let region = candidate.region(0.08);
    assert!((region.south() - -34.1).abs() < f64::EPSILON);
    assert!((region.east() - 151.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn geocode_zero_results_is_location_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let result = geocoder(&mock_server).geocode("Nowhere 9999").await;

    match result {
        Err(OsmError::LocationNotFound(input)) => assert_eq!(input, "Nowhere 9999"),
        other => panic!("Expected LocationNotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn geocode_server_error_is_request_failed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let result = geocoder(&mock_server).geocode("Sydney").await;
    assert!(
        matches!(result, Err(OsmError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn reverse_geocode_returns_display_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("lat", "-33.8688"))
        .and(query_param("lon", "151.2093"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "lat": "-33.8688",
            "lon": "151.2093",
            "display_name": "123 George St, Sydney NSW 2000, Australia"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let address = geocoder(&mock_server)
        .reverse_geocode(-33.8688, 151.2093)
        .await
        .expect("reverse geocode succeeds");

    assert_eq!(address, "123 George St, Sydney NSW 2000, Australia");
}

// ============================================================================
// Overpass search scenarios
// ============================================================================

#[tokio::test]
async fn find_pois_normalizes_and_drops_coordinate_less_elements() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_overpass_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pois = overpass(&mock_server)
        .find_pois(&sydney_region(), PlaceCategory::Veterinary, None)
        .await
        .expect("search succeeds");

    // Element 303 has no coordinates and must be absent; nothing fabricated
    assert_eq!(pois.len(), 2);
    assert_eq!(pois[0].id.as_str(), "osm-101");
    assert_eq!(pois[0].name, "Sydney Animal Hospital");
    assert!(pois[0].has_specialty(Specialty::Surgery));
    assert_eq!(pois[1].id.as_str(), "osm-202");
    assert_eq!(pois[1].name, "Veterinary Clinic 2");
    assert!(pois[1].has_specialty(Specialty::Emergency));
    assert_eq!(pois[1].address, "Address not available");
}

#[tokio::test]
async fn find_pois_sends_widened_query_for_emergency_keyword() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .and(body_string_contains("amenity\"=\"veterinary"))
        .and(body_string_contains("emergency:veterinary\"=\"yes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_overpass_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = overpass(&mock_server)
        .find_pois(
            &sydney_region(),
            PlaceCategory::Veterinary,
            Some("emergency care"),
        )
        .await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

// ============================================================================
// Retry/backoff scenarios
// ============================================================================

#[tokio::test]
async fn retries_on_504_then_succeeds() {
    let mock_server = MockServer::start().await;

    // Three 504s, then success: four attempts total
    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(504))
        .up_to_n_times(3)
        .expect(3)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_overpass_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let start = Instant::now();
    let pois = overpass(&mock_server)
        .find_pois(&sydney_region(), PlaceCategory::Veterinary, None)
        .await
        .expect("search succeeds after retries");

    assert_eq!(pois.len(), 2);
    // Backoff delays d, 2d, 4d with d = 10ms (testing config)
    assert!(start.elapsed().as_millis() >= 70);
}

#[tokio::test]
async fn exhausted_retries_yield_service_unavailable() {
    let mock_server = MockServer::start().await;

    // Initial attempt + 3 retries, all 504
    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(504))
        .expect(4)
        .mount(&mock_server)
        .await;

    let result = overpass(&mock_server)
        .find_pois(&sydney_region(), PlaceCategory::Veterinary, None)
        .await;

    match result {
        Err(OsmError::ServiceUnavailable(msg)) => {
            assert!(msg.contains("try again"));
        },
        other => panic!("Expected ServiceUnavailable, got: {other:?}"),
    }
}

#[tokio::test]
async fn non_transient_status_fails_without_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Bad Request"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = overpass(&mock_server)
        .find_pois(&sydney_region(), PlaceCategory::Veterinary, None)
        .await;

    match result {
        Err(OsmError::RequestFailed(msg)) => assert!(msg.contains("400")),
        other => panic!("Expected RequestFailed, got: {other:?}"),
    }
}

#[tokio::test]
async fn invalid_json_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let result = overpass(&mock_server)
        .find_pois(&sydney_region(), PlaceCategory::Veterinary, None)
        .await;

    assert!(
        matches!(result, Err(OsmError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

// ============================================================================
// Query payload verification
// ============================================================================

#[tokio::test]
async fn query_payload_contains_bbox_and_terminator() {
    let mock_server = MockServer::start().await;

    let region = sydney_region();
    let bbox = region.to_string();

    Mock::given(method("POST"))
        .and(path("/api/interpreter"))
        .and(move |req: &Request| {
            let body = String::from_utf8_lossy(&req.body);
            body.starts_with("[out:json];(")
                && body.ends_with(");out center;")
                && body.contains(&bbox)
        })
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_overpass_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = overpass(&mock_server)
        .find_pois(&region, PlaceCategory::Veterinary, None)
        .await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
}
