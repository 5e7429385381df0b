//! Listing filter criteria

use serde::{Deserialize, Serialize};

/// Criteria narrowing an artist listing
///
/// Every field defaults to "no constraint": an empty category list, or
/// `None` for the single-valued fields. Builders drop empty strings, and
/// an empty string that arrives another way (a deserialized body, direct
/// field access) is also treated as no constraint by the `active_*`
/// accessors the filter engine reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Match any of these categories
    #[serde(default)]
    pub category: Vec<String>,

    /// Exact city match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Exact fee band match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,

    /// Case-insensitive substring over name, bio and category labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        if !category.is_empty() && !self.category.contains(&category) {
            self.category.push(category);
        }
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = non_empty(location.into());
        self
    }

    pub fn with_price_range(mut self, price_range: impl Into<String>) -> Self {
        self.price_range = non_empty(price_range.into());
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = non_empty(query.into());
        self
    }

    /// Selected category labels, skipping empty ones
    pub fn active_categories(&self) -> impl Iterator<Item = &str> {
        self.category
            .iter()
            .map(String::as_str)
            .filter(|c| !c.is_empty())
    }

    pub fn active_location(&self) -> Option<&str> {
        active(self.location.as_deref())
    }

    pub fn active_price_range(&self) -> Option<&str> {
        active(self.price_range.as_deref())
    }

    pub fn active_search(&self) -> Option<&str> {
        active(self.search_query.as_deref())
    }

    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of active constraints, counting each selected category
    pub fn active_count(&self) -> usize {
        self.active_categories().count()
            + usize::from(self.active_location().is_some())
            + usize::from(self.active_price_range().is_some())
            + usize::from(self.active_search().is_some())
    }
}

fn active(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

pub(crate) fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
