//! Artist filter engine
//!
//! A pure, stable filter: the output keeps the relative order of the input
//! and nothing is mutated. An artist passes when every active criterion
//! holds:
//!
//! - **category**: shares at least one label with the requested set
//!   (case-sensitive exact match)
//! - **location**: equals the requested city exactly
//! - **price range**: equals the requested fee band label exactly
//! - **search**: the query is a case-insensitive substring of the name,
//!   the bio, or any category label
//!
//! Location text is deliberately not part of the search haystack.

use crate::types::{Artist, FilterOptions};

/// Filter `items` down to the artists matching `filters`
///
/// Empty `filters` return a copy of `items` unchanged.
pub fn apply(items: &[Artist], filters: &FilterOptions) -> Vec<Artist> {
    if filters.is_empty() {
        return items.to_vec();
    }

    // Lower-case the query once rather than per artist
    let query = filters.active_search().map(str::to_lowercase);

    items
        .iter()
        .filter(|artist| passes(artist, filters, query.as_deref()))
        .cloned()
        .collect()
}

/// Whether a single artist satisfies `filters`
pub fn matches(artist: &Artist, filters: &FilterOptions) -> bool {
    let query = filters.active_search().map(str::to_lowercase);
    passes(artist, filters, query.as_deref())
}

fn passes(artist: &Artist, filters: &FilterOptions, query: Option<&str>) -> bool {
    let mut wanted = filters.active_categories().peekable();
    if wanted.peek().is_some() && !wanted.any(|c| artist.category.iter().any(|have| have == c)) {
        return false;
    }

    if let Some(location) = filters.active_location() {
        if artist.location != location {
            return false;
        }
    }

    if let Some(price_range) = filters.active_price_range() {
        if artist.fee_range != price_range {
            return false;
        }
    }

    match query {
        Some(q) if !q.is_empty() => matches_search(artist, q),
        _ => true,
    }
}

/// `query` must already be lower-cased
fn matches_search(artist: &Artist, query: &str) -> bool {
    artist.name.to_lowercase().contains(query)
        || artist.bio.to_lowercase().contains(query)
        || artist
            .category
            .iter()
            .any(|label| label.to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::reference_artists;

    fn names(artists: &[Artist]) -> Vec<&str> {
        artists.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn empty_filters_are_identity() {
        let artists = reference_artists();
        assert_eq!(apply(&artists, &FilterOptions::default()), artists);
    }

    #[test]
    fn empty_strings_from_a_request_body_are_identity() {
        let artists = reference_artists();
        let filters: FilterOptions = serde_json::from_str(
            r#"{"category":[""],"location":"","priceRange":"","searchQuery":""}"#,
        )
        .unwrap();

        assert_eq!(apply(&artists, &filters), artists);
        assert!(artists.iter().all(|a| matches(a, &filters)));

        // A blank label next to a real one only narrows by the real one
        let filters = FilterOptions {
            category: vec![String::new(), "DJs".to_string()],
            ..FilterOptions::default()
        };
        assert_eq!(names(&apply(&artists, &filters)), vec!["DJ Arjun"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let filters = FilterOptions::new().with_location("Mumbai");
        assert!(apply(&[], &filters).is_empty());
    }

    #[test]
    fn location_filter_is_exact() {
        let artists = reference_artists();

        let result = apply(&artists, &FilterOptions::new().with_location("Mumbai"));
        assert_eq!(names(&result), vec!["Priya Sharma"]);

        let result = apply(&artists, &FilterOptions::new().with_location("mumbai"));
        assert!(result.is_empty());
    }

    #[test]
    fn category_filter_preserves_source_order() {
        let artists = reference_artists();
        let result = apply(&artists, &FilterOptions::new().with_category("Singers"));
        assert_eq!(names(&result), vec!["Priya Sharma", "The Harmony Band"]);
    }

    #[test]
    fn category_filter_is_or_within_criterion() {
        let artists = reference_artists();
        let filters = FilterOptions::new()
            .with_category("DJs")
            .with_category("Comedians");
        let result = apply(&artists, &filters);
        assert_eq!(names(&result), vec!["DJ Arjun", "Comedy King Rajesh"]);
    }

    #[test]
    fn price_range_is_label_equality() {
        let artists = reference_artists();

        let result = apply(
            &artists,
            &FilterOptions::new().with_price_range("Above ₹1,00,000"),
        );
        assert_eq!(names(&result), vec!["The Harmony Band"]);

        // A value that looks numeric is not interpreted as a range
        let result = apply(&artists, &FilterOptions::new().with_price_range("150000"));
        assert!(result.is_empty());
    }

    #[test]
    fn search_is_case_insensitive() {
        let artists = reference_artists();
        let result = apply(&artists, &FilterOptions::new().with_search("dj"));
        assert_eq!(names(&result), vec!["DJ Arjun"]);
    }

    #[test]
    fn search_covers_bio_and_category_labels() {
        let artists = reference_artists();

        let result = apply(&artists, &FilterOptions::new().with_search("CHOREOGRAPHY"));
        assert_eq!(names(&result), vec!["Kavya Dance Troupe"]);

        let result = apply(&artists, &FilterOptions::new().with_search("musician"));
        assert_eq!(names(&result), vec!["The Harmony Band"]);
    }

    #[test]
    fn search_does_not_look_at_location() {
        let artists = reference_artists();
        let result = apply(&artists, &FilterOptions::new().with_search("Ahmedabad"));
        assert!(result.is_empty());
    }

    #[test]
    fn criteria_combine_with_and() {
        let artists = reference_artists();

        let filters = FilterOptions::new()
            .with_category("Singers")
            .with_location("Bangalore");
        assert_eq!(names(&apply(&artists, &filters)), vec!["The Harmony Band"]);

        let filters = FilterOptions::new()
            .with_category("Singers")
            .with_location("Delhi");
        assert!(apply(&artists, &filters).is_empty());
    }

    #[test]
    fn unknown_values_match_nothing() {
        let artists = reference_artists();
        let filters = FilterOptions::new().with_category("Jugglers");
        assert!(apply(&artists, &filters).is_empty());
    }

    #[test]
    fn matches_agrees_with_apply() {
        let artists = reference_artists();
        let filters = FilterOptions::new().with_price_range("₹10,000 - ₹25,000");
        let via_matches: Vec<_> = artists
            .iter()
            .filter(|a| matches(a, &filters))
            .cloned()
            .collect();
        assert_eq!(via_matches, apply(&artists, &filters));
    }
}
