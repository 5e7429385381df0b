//! Query adapter: `FilterOptions` <-> query-string parameters
//!
//! Canonical keys are `category`, `location`, `priceRange` and `search`.
//! Decoding also understands the older UI keys `price` and `searchQuery`;
//! when both spellings are present the canonical one wins. Encoding only
//! ever emits canonical keys, omitting unconstrained fields.
//!
//! `category` travels as one comma-separated value. Labels containing a
//! comma cannot be represented.
//!
//! When a key is repeated only its first value counts, matching
//! `URLSearchParams.get` in browser clients.

use crate::types::{non_empty, FilterOptions};
use std::collections::BTreeMap;

pub const CATEGORY_KEY: &str = "category";
pub const LOCATION_KEY: &str = "location";
pub const PRICE_RANGE_KEY: &str = "priceRange";
pub const SEARCH_KEY: &str = "search";

/// Legacy alias for `priceRange`
pub const PRICE_ALIAS: &str = "price";
/// Legacy alias for `search`
pub const SEARCH_ALIAS: &str = "searchQuery";

const CATEGORY_SEPARATOR: &str = ",";

/// Encoded parameters. Key order is the canonical order
/// (`category`, `location`, `priceRange`, `search`).
pub type QueryParams = BTreeMap<String, String>;

/// Decode query parameters into filter criteria
///
/// Unrecognized keys are ignored and missing keys mean "no constraint".
/// Never fails: odd values simply become criteria that match nothing.
pub fn parse<I, K, V>(params: I) -> FilterOptions
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut category = None;
    let mut location = None;
    let (mut price_range, mut price_alias) = (None, None);
    let (mut search, mut search_alias) = (None, None);

    for (key, value) in params {
        let slot = match key.as_ref() {
            CATEGORY_KEY => &mut category,
            LOCATION_KEY => &mut location,
            PRICE_RANGE_KEY => &mut price_range,
            PRICE_ALIAS => &mut price_alias,
            SEARCH_KEY => &mut search,
            SEARCH_ALIAS => &mut search_alias,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.as_ref().to_string());
        }
    }

    FilterOptions {
        category: category.as_deref().map(split_categories).unwrap_or_default(),
        location: location.and_then(non_empty),
        price_range: price_range.or(price_alias).and_then(non_empty),
        search_query: search.or(search_alias).and_then(non_empty),
    }
}

/// Encode filter criteria as canonical query parameters
pub fn serialize(filters: &FilterOptions) -> QueryParams {
    let mut params = QueryParams::new();

    let categories: Vec<&str> = filters.active_categories().collect();
    if !categories.is_empty() {
        params.insert(
            CATEGORY_KEY.to_string(),
            categories.join(CATEGORY_SEPARATOR),
        );
    }

    let singles = [
        (LOCATION_KEY, filters.active_location()),
        (PRICE_RANGE_KEY, filters.active_price_range()),
        (SEARCH_KEY, filters.active_search()),
    ];
    for (key, value) in singles {
        if let Some(value) = value {
            params.insert(key.to_string(), value.to_string());
        }
    }

    params
}

/// Render criteria as an `application/x-www-form-urlencoded` string,
/// suitable for appending to `/api/artists?`
pub fn to_query_string(filters: &FilterOptions) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(serialize(filters))
        .finish()
}

/// Parse criteria out of a raw query string (without the leading `?`)
pub fn from_query_string(query: &str) -> FilterOptions {
    parse(url::form_urlencoded::parse(query.as_bytes()))
}

/// Split a comma-separated category list, trimming labels and dropping
/// blanks and repeats
fn split_categories(raw: &str) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for label in raw.split(CATEGORY_SEPARATOR).map(str::trim) {
        if !label.is_empty() && !categories.iter().any(|c| c == label) {
            categories.push(label.to_string());
        }
    }
    categories
}
