//! Overpass query builder
//!
//! Builds the textual Overpass QL payload for a category-filtered spatial
//! search. Free-text queries are scanned for a fixed set of specialty
//! keywords; every hit widens the query with an additional attribute
//! clause (logical OR). Widening is deliberately recall-biased: keyword
//! matches only add candidate entities, they never narrow the result set.

use std::fmt::Write as _;
use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use domain::{BoundingRegion, PlaceCategory, Specialty};

/// Recognized keyword tokens, matched case-insensitively as substrings
const KEYWORDS: [(&str, Specialty); 6] = [
    ("emergency", Specialty::Emergency),
    ("surgery", Specialty::Surgery),
    ("dental", Specialty::Dental),
    ("exotic", Specialty::ExoticPets),
    ("vaccination", Specialty::Vaccinations),
    ("vaccine", Specialty::Vaccinations),
];

static KEYWORD_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(KEYWORDS.iter().map(|(kw, _)| *kw))
        .expect("static keyword patterns are valid")
});

/// Specialties whose keywords appear in the free-text query
///
/// Returned in the fixed inference order, without duplicates ("vaccine"
/// and "vaccination" both map to `Vaccinations`).
#[must_use]
pub fn matched_specialties(query: &str) -> Vec<Specialty> {
    let mut hits = [false; KEYWORDS.len()];
    for mat in KEYWORD_MATCHER.find_iter(query) {
        hits[mat.pattern().as_usize()] = true;
    }

    let mut specialties = Vec::new();
    for specialty in Specialty::INFERRED {
        let matched = KEYWORDS
            .iter()
            .zip(hits)
            .any(|((_, s), hit)| hit && *s == specialty);
        if matched {
            specialties.push(specialty);
        }
    }
    specialties
}

/// Build the Overpass QL payload for a spatial search
///
/// The base filter selects the category's canonical tag for both nodes and
/// ways; specialty clauses from `matched_specialties` widen it.
#[must_use]
pub fn build_query(
    region: &BoundingRegion,
    category: PlaceCategory,
    query: Option<&str>,
) -> String {
    let bbox = region.to_string();
    let (key, value) = category.osm_filter();

    let mut out = String::from("[out:json];(");
    let _ = write!(
        out,
        "node[\"{key}\"=\"{value}\"]({bbox});way[\"{key}\"=\"{value}\"]({bbox});"
    );

    for specialty in query.map(matched_specialties).unwrap_or_default() {
        if let Some(attr) = specialty.osm_attribute() {
            let _ = write!(
                out,
                "node[\"{attr}\"=\"yes\"]({bbox});way[\"{attr}\"=\"yes\"]({bbox});"
            );
        }
    }

    out.push_str(");out center;");
    out
}
