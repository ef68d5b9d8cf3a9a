//! Domain entities

mod poi;

pub use poi::Poi;
