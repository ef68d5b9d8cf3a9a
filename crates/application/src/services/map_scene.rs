//! Map scene builder
//!
//! Builds a declarative scene description from a result set and the
//! host-owned selection. The renderer is a controlled view: the scene
//! is rebuilt wholesale per (results, selection) pair, markers keyed by
//! POI id so popup state carries across rebuilds within a result set.

use domain::{BoundingRegion, GeoLocation, Poi, PoiId};
use serde::{Deserialize, Serialize};

use crate::services::maps_link::generate_maps_link_coords;

/// Continental overview zoom used when there is nothing to show
pub const DEFAULT_ZOOM: u8 = 4;
/// Close-up zoom applied when the host selects a result
pub const SELECTION_ZOOM: u8 = 16;
/// Pixel padding around fitted bounds
pub const FIT_PADDING_PX: u32 = 50;

/// A complete, renderable map state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapScene {
    /// Markers in result order, keyed by POI id
    pub markers: Vec<Marker>,
    /// Where the camera should be
    pub viewport: Viewport,
    /// The host's current selection, echoed back for list sync
    pub selected_id: Option<PoiId>,
}

/// A single map marker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marker {
    /// POI id, handed back to the host on marker click
    pub id: PoiId,
    /// Marker position
    pub position: GeoLocation,
    /// Popup content
    pub popup: MarkerPopup,
    /// Whether the popup is open (true for the selected marker)
    pub popup_open: bool,
}

/// Content of a marker's detail popup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerPopup {
    /// Display name
    pub name: String,
    /// Street address or placeholder
    pub address: String,
    /// Rating summary, e.g. `"4.7 (245 reviews)"`
    pub rating_display: String,
    /// Distance string, e.g. `"2.1 km"`
    pub distance: String,
    /// Specialty tag labels
    pub specialties: Vec<String>,
    /// Outbound maps link keyed by raw coordinates
    pub maps_url: String,
}

/// Camera placement for the scene
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum Viewport {
    /// Fit the given bounds with pixel padding
    FitBounds {
        /// Southern bound in degrees
        south: f64,
        /// Western bound in degrees
        west: f64,
        /// Northern bound in degrees
        north: f64,
        /// Eastern bound in degrees
        east: f64,
        /// Padding around the bounds in pixels
        padding_px: u32,
    },
    /// Center on a point at a fixed zoom
    Centered {
        /// Camera center
        center: GeoLocation,
        /// Zoom level
        zoom: u8,
    },
}

/// Build the scene for a result set and the host's selection
///
/// Selection drives the camera: a selected POI centers the viewport on
/// it at close-up zoom and opens its popup. Without a selection the
/// camera fits all markers, falling back to a continental overview when
/// the result set is empty. An unknown `selected_id` is ignored.
#[must_use]
pub fn build_scene(pois: &[Poi], selected_id: Option<&PoiId>) -> MapScene {
    let selected = selected_id.and_then(|id| pois.iter().find(|poi| &poi.id == id));

    let markers = pois
        .iter()
        .map(|poi| Marker {
            id: poi.id.clone(),
            position: poi.location,
            popup: popup_for(poi),
            popup_open: selected.is_some_and(|sel| sel.id == poi.id),
        })
        .collect::<Vec<_>>();

    let viewport = if let Some(poi) = selected {
        Viewport::Centered {
            center: poi.location,
            zoom: SELECTION_ZOOM,
        }
    } else {
        let positions = pois.iter().map(|poi| poi.location).collect::<Vec<_>>();
        match BoundingRegion::enclosing(&positions) {
            Some(bounds) => Viewport::FitBounds {
                south: bounds.south(),
                west: bounds.west(),
                north: bounds.north(),
                east: bounds.east(),
                padding_px: FIT_PADDING_PX,
            },
            None => Viewport::Centered {
                center: GeoLocation::default_view_center(),
                zoom: DEFAULT_ZOOM,
            },
        }
    };

    MapScene {
        markers,
        viewport,
        selected_id: selected.map(|poi| poi.id.clone()),
    }
}

fn popup_for(poi: &Poi) -> MarkerPopup {
    MarkerPopup {
        name: poi.name.clone(),
        address: poi.address.clone(),
        rating_display: format!("{:.1} ({} reviews)", poi.rating, poi.reviews),
        distance: poi.distance.clone(),
        specialties: poi
            .specialties
            .iter()
            .map(|specialty| specialty.label().to_string())
            .collect(),
        maps_url: generate_maps_link_coords(poi.location.latitude(), poi.location.longitude()),
    }
}
