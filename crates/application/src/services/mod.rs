//! Application services

pub mod featured;
pub mod map_scene;
pub mod maps_link;
pub mod search;

pub use featured::featured_pois;
pub use map_scene::{MapScene, Marker, MarkerPopup, Viewport, build_scene};
pub use maps_link::generate_maps_link_coords;
pub use search::{SearchInput, SearchService, SearchSnapshot};
