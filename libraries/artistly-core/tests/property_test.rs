//! Property-based tests for the filter engine and query adapter
//!
//! Uses proptest to verify the listing laws across many random catalogs
//! and criteria.

use artistly_core::types::{
    DEFAULT_CATEGORIES, DEFAULT_FEE_RANGES, DEFAULT_LANGUAGES, DEFAULT_LOCATIONS,
};
use artistly_core::{filter, query, Artist, ArtistId, FilterOptions};
use chrono::Utc;
use proptest::prelude::*;
use std::collections::BTreeSet;

// ===== Helpers =====

fn labels(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}

fn arbitrary_artist() -> impl Strategy<Value = Artist> {
    (
        "[a-z0-9]{1,8}",                                           // id
        "[A-Za-z ]{2,30}",                                         // name
        "[A-Za-z ,.]{0,80}",                                       // bio
        prop::sample::subsequence(DEFAULT_CATEGORIES.to_vec(), 1..=3), // category
        prop::sample::subsequence(DEFAULT_LANGUAGES.to_vec(), 1..=3),  // languages
        prop::sample::select(DEFAULT_FEE_RANGES.to_vec()),         // fee range
        prop::sample::select(DEFAULT_LOCATIONS.to_vec()),          // location
        0.0f32..=5.0,                                              // rating
    )
        .prop_map(
            |(id, name, bio, category, languages, fee_range, location, rating)| Artist {
                id: ArtistId::new(id),
                name,
                bio,
                category: labels(category),
                languages: labels(languages),
                fee_range: fee_range.to_string(),
                location: location.to_string(),
                profile_image: None,
                rating,
                review_count: 0,
                is_verified: false,
                created_at: Utc::now(),
            },
        )
}

fn arbitrary_artists() -> impl Strategy<Value = Vec<Artist>> {
    prop::collection::vec(arbitrary_artist(), 0..30)
}

fn arbitrary_filters() -> impl Strategy<Value = FilterOptions> {
    (
        prop::sample::subsequence(DEFAULT_CATEGORIES.to_vec(), 0..=3),
        prop::option::of(prop::sample::select(DEFAULT_LOCATIONS.to_vec())),
        prop::option::of(prop::sample::select(DEFAULT_FEE_RANGES.to_vec())),
        prop::option::of("[A-Za-z]{1,4}"),
    )
        .prop_map(|(category, location, price_range, search)| FilterOptions {
            category: labels(category),
            location: location.map(str::to_string),
            price_range: price_range.map(str::to_string),
            search_query: search,
        })
}

/// Filters built only from values the query adapter can carry unchanged
fn encodable_filters() -> impl Strategy<Value = FilterOptions> {
    (
        prop::collection::btree_set("[A-Za-z][A-Za-z0-9]{0,11}", 0..5),
        prop::option::of("[^,]{1,20}"),
        prop::option::of(prop::sample::select(DEFAULT_FEE_RANGES.to_vec())),
        prop::option::of(".{1,20}"),
    )
        .prop_map(|(category, location, price_range, search)| FilterOptions {
            category: category.into_iter().collect(),
            location,
            price_range: price_range.map(str::to_string),
            search_query: search,
        })
}

fn shares_category(artist: &Artist, wanted: &[String]) -> bool {
    let have: BTreeSet<&String> = artist.category.iter().collect();
    wanted.iter().any(|c| have.contains(c))
}

// ===== Property Tests =====

proptest! {
    /// Property: empty criteria return the input unchanged
    #[test]
    fn empty_filters_are_identity(artists in arbitrary_artists()) {
        prop_assert_eq!(filter::apply(&artists, &FilterOptions::default()), artists);
    }

    /// Property: blank values mean "no constraint" for every field
    #[test]
    fn blank_criteria_are_identity(
        artists in arbitrary_artists(),
        blank_labels in 0usize..3,
        location in prop::option::of(Just(String::new())),
        price_range in prop::option::of(Just(String::new())),
        search in prop::option::of(Just(String::new()))
    ) {
        let filters = FilterOptions {
            category: vec![String::new(); blank_labels],
            location,
            price_range,
            search_query: search,
        };
        prop_assert!(filters.is_empty());
        prop_assert_eq!(filter::apply(&artists, &filters), artists);
    }

    /// Property: filtering twice with the same criteria changes nothing more
    #[test]
    fn filtering_is_idempotent(artists in arbitrary_artists(), filters in arbitrary_filters()) {
        let once = filter::apply(&artists, &filters);
        let twice = filter::apply(&once, &filters);
        prop_assert_eq!(once, twice);
    }

    /// Property: result is an order-preserving subsequence of the input
    #[test]
    fn filtering_preserves_relative_order(
        artists in arbitrary_artists(),
        filters in arbitrary_filters()
    ) {
        let result = filter::apply(&artists, &filters);
        let mut remaining = artists.iter();
        for kept in &result {
            prop_assert!(remaining.any(|a| a == kept), "Result is not a subsequence of the input");
        }
    }

    /// Property: category filter keeps exactly the artists sharing a category
    #[test]
    fn category_filter_partitions_by_intersection(
        artists in arbitrary_artists(),
        wanted in prop::sample::subsequence(DEFAULT_CATEGORIES.to_vec(), 1..=3)
    ) {
        let wanted = labels(wanted);
        let filters = FilterOptions { category: wanted.clone(), ..Default::default() };

        let result = filter::apply(&artists, &filters);
        prop_assert!(result.iter().all(|a| shares_category(a, &wanted)));

        let excluded = artists.iter().filter(|a| !result.contains(a));
        for artist in excluded {
            prop_assert!(!shares_category(artist, &wanted));
        }
    }

    /// Property: adding a criterion never grows the result
    #[test]
    fn extra_criteria_only_narrow(
        artists in arbitrary_artists(),
        filters in arbitrary_filters(),
        location in prop::sample::select(DEFAULT_LOCATIONS.to_vec())
    ) {
        let base = FilterOptions { location: None, ..filters };
        let narrowed = base.clone().with_location(location);

        let wide = filter::apply(&artists, &base);
        let narrow = filter::apply(&artists, &narrowed);
        prop_assert!(narrow.len() <= wide.len());
        prop_assert!(narrow.iter().all(|a| wide.contains(a)));
    }

    /// Property: decode(encode(f)) == f
    #[test]
    fn decode_inverts_encode(filters in encodable_filters()) {
        prop_assert_eq!(query::parse(query::serialize(&filters)), filters.clone());
        prop_assert_eq!(query::from_query_string(&query::to_query_string(&filters)), filters);
    }
}
