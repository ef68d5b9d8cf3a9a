//! Specialty tags inferred from POI attributes

use serde::{Deserialize, Serialize};

/// A service/specialty tag attached to a POI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialty {
    /// Baseline tag, always present
    GeneralCare,
    /// Surgical services (`veterinary:surgery=yes`)
    Surgery,
    /// Emergency care (`emergency:veterinary=yes`)
    Emergency,
    /// Dental care (`veterinary:dental=yes`)
    Dental,
    /// Exotic-animal care (`veterinary:exotic=yes`)
    ExoticPets,
    /// Vaccination services (`veterinary:vaccination=yes`)
    Vaccinations,
}

impl Specialty {
    /// Specialties inferable from source attribute flags, in the fixed
    /// insertion order used when building a POI's tag list
    pub const INFERRED: [Self; 5] = [
        Self::Surgery,
        Self::Emergency,
        Self::Dental,
        Self::ExoticPets,
        Self::Vaccinations,
    ];

    /// The OSM attribute key whose literal value `"yes"` implies this tag
    ///
    /// `GeneralCare` has no source attribute; it is the unconditional
    /// baseline.
    #[must_use]
    pub const fn osm_attribute(&self) -> Option<&'static str> {
        match self {
            Self::GeneralCare => None,
            Self::Surgery => Some("veterinary:surgery"),
            Self::Emergency => Some("emergency:veterinary"),
            Self::Dental => Some("veterinary:dental"),
            Self::ExoticPets => Some("veterinary:exotic"),
            Self::Vaccinations => Some("veterinary:vaccination"),
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::GeneralCare => "General Care",
            Self::Surgery => "Surgery",
            Self::Emergency => "Emergency",
            Self::Dental => "Dental",
            Self::ExoticPets => "Exotic Pets",
            Self::Vaccinations => "Vaccinations",
        }
    }
}

impl std::fmt::Display for Specialty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
