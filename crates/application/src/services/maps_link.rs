//! Maps link utilities
//!
//! Outbound Google Maps links for marker popups and result cards.

/// Generate a Google Maps link from coordinates
///
/// The link opens in the native Maps app on mobile (iOS/Android) or
/// in the browser on desktop.
#[must_use]
pub fn generate_maps_link_coords(latitude: f64, longitude: f64) -> String {
    format!("https://maps.google.com/maps?q={latitude},{longitude}")
}
