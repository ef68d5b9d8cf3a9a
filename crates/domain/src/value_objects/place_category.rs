//! Place category value object

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// The kind of point of interest a search targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    /// Veterinary clinics (`amenity=veterinary`)
    Veterinary,
    /// Pet-food and pet-supply stores (`shop=pet`)
    #[serde(alias = "petfood")]
    PetFood,
}

impl PlaceCategory {
    /// The OSM tag key/value pair selecting this category
    #[must_use]
    pub const fn osm_filter(&self) -> (&'static str, &'static str) {
        match self {
            Self::Veterinary => ("amenity", "veterinary"),
            Self::PetFood => ("shop", "pet"),
        }
    }

    /// Human-readable singular label, also used for placeholder names
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Veterinary => "Veterinary Clinic",
            Self::PetFood => "Pet Store",
        }
    }
}

impl std::fmt::Display for PlaceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PlaceCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "veterinary" | "vets" => Ok(Self::Veterinary),
            "petfood" | "pet_food" | "pet-food" => Ok(Self::PetFood),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}
