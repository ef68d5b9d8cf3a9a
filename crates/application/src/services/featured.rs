//! Curated featured catalog
//!
//! Hand-picked, top-rated places shown before a user has searched.
//! Entries carry images, unlike organic search results.

use domain::{GeoLocation, PlaceCategory, Poi, PoiId, Specialty};

/// Curated entries for a category, in editorial order
#[must_use]
pub fn featured_pois(category: PlaceCategory) -> Vec<Poi> {
    match category {
        PlaceCategory::Veterinary => featured_vets(),
        PlaceCategory::PetFood => featured_stores(),
    }
}

#[allow(clippy::too_many_arguments)]
fn entry(
    slug: &str,
    name: &str,
    address: &str,
    location: GeoLocation,
    specialties: Vec<Specialty>,
    rating: f64,
    reviews: u32,
    distance: &str,
    is_open: bool,
    image: &str,
) -> Poi {
    Poi {
        id: PoiId::curated(slug),
        name: name.to_string(),
        address: address.to_string(),
        location,
        specialties,
        rating,
        reviews,
        distance: distance.to_string(),
        is_open,
        image: Some(image.to_string()),
    }
}

fn featured_vets() -> Vec<Poi> {
    vec![
        entry(
            "sydney-animal-hospitals",
            "Sydney Animal Hospitals",
            "69-73 Erskineville Rd, Erskineville NSW 2043",
            GeoLocation::new_unchecked(-33.9024, 151.1857),
            vec![Specialty::GeneralCare, Specialty::Surgery],
            4.9,
            312,
            "2.1 km",
            true,
            "https://images.unsplash.com/photo-1629909613654-28e377c37b09?w=600&h=450&fit=crop",
        ),
        entry(
            "melbourne-dog-clinic",
            "Melbourne Dog Clinic",
            "u2/1221 Toorak Rd, Camberwell VIC 3124",
            GeoLocation::new_unchecked(-37.8470, 145.0810),
            vec![Specialty::GeneralCare, Specialty::Emergency, Specialty::ExoticPets],
            4.8,
            256,
            "3.5 km",
            true,
            "https://images.unsplash.com/photo-1587300003388-59208cc962cb?w=600&h=450&fit=crop",
        ),
        entry(
            "fortitude-valley-vet",
            "Fortitude Valley Vet",
            "Shop 15/1000 Ann St, Fortitude Valley QLD 4006",
            GeoLocation::new_unchecked(-27.4545, 153.0375),
            vec![Specialty::GeneralCare, Specialty::Dental, Specialty::Vaccinations],
            4.7,
            189,
            "1.8 km",
            false,
            "https://images.unsplash.com/photo-1628009368231-7bb7cfcb0def?w=600&h=450&fit=crop",
        ),
        entry(
            "vogue-vets-wellness",
            "Vogue Vets and Wellness Centre",
            "5/36 Cedric St, Stirling WA 6021",
            GeoLocation::new_unchecked(-31.8849, 115.8065),
            vec![Specialty::GeneralCare, Specialty::Surgery, Specialty::Vaccinations],
            4.9,
            421,
            "4.2 km",
            true,
            "https://images.unsplash.com/photo-1548199973-03cce0bbc87b?w=600&h=450&fit=crop",
        ),
    ]
}

fn featured_stores() -> Vec<Poi> {
    vec![
        entry(
            "pupnpussy-sydney",
            "PUPNPUSSY Sydney",
            "185 Campbell St, Surry Hills NSW 2010",
            GeoLocation::new_unchecked(-33.8832, 151.2140),
            vec![Specialty::GeneralCare],
            4.8,
            128,
            "1.2 km",
            true,
            "https://images.unsplash.com/photo-1543852786-1cf6624b9987?w=800&h=600&fit=crop",
        ),
        entry(
            "the-pet-grocer",
            "The Pet Grocer",
            "126 Bank St, South Melbourne VIC 3205",
            GeoLocation::new_unchecked(-37.8316, 144.9580),
            vec![Specialty::GeneralCare],
            4.7,
            92,
            "3.7 km",
            true,
            "https://images.unsplash.com/photo-1518791841217-8f162f1e1131?w=800&h=600&fit=crop",
        ),
        entry(
            "brisbane-pet-super-store",
            "Brisbane Pet Super Store",
            "Shop 100/400 Stafford Rd, Stafford QLD 4053",
            GeoLocation::new_unchecked(-27.4108, 153.0111),
            vec![Specialty::GeneralCare],
            4.6,
            64,
            "2.0 km",
            false,
            "https://images.unsplash.com/photo-1517423440428-a5a00ad493e8?w=800&h=600&fit=crop",
        ),
        entry(
            "direct-pet-supplies-perth",
            "Direct Pet Supplies Perth",
            "Online Only, Perth WA 6000",
            GeoLocation::new_unchecked(-31.9514, 115.8617),
            vec![Specialty::GeneralCare],
            4.9,
            210,
            "4.0 km",
            true,
            "https://images.unsplash.com/photo-1504208434309-cb69f4fe52b0?w=800&h=600&fit=crop",
        ),
    ]
}
