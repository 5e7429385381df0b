/// Closed enumerations offered to artists and planners
use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Singers",
    "Dancers",
    "Speakers",
    "DJs",
    "Musicians",
    "Comedians",
    "Magicians",
    "Bands",
];

pub const DEFAULT_LANGUAGES: [&str; 8] = [
    "English", "Hindi", "Tamil", "Telugu", "Marathi", "Bengali", "Gujarati", "Punjabi",
];

pub const DEFAULT_FEE_RANGES: [&str; 5] = [
    "Under ₹10,000",
    "₹10,000 - ₹25,000",
    "₹25,000 - ₹50,000",
    "₹50,000 - ₹1,00,000",
    "Above ₹1,00,000",
];

pub const DEFAULT_LOCATIONS: [&str; 8] = [
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Chennai",
    "Kolkata",
    "Hyderabad",
    "Pune",
    "Ahmedabad",
];

/// Labels accepted at onboarding time
///
/// Fee ranges are bucket labels compared as exact strings, never parsed
/// as numbers. The listing filter does not consult the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    #[serde(default = "default_fee_ranges")]
    pub fee_ranges: Vec<String>,

    #[serde(default = "default_locations")]
    pub locations: Vec<String>,
}

impl Catalog {
    pub fn has_category(&self, value: &str) -> bool {
        self.categories.iter().any(|c| c == value)
    }

    pub fn has_language(&self, value: &str) -> bool {
        self.languages.iter().any(|l| l == value)
    }

    pub fn has_fee_range(&self, value: &str) -> bool {
        self.fee_ranges.iter().any(|f| f == value)
    }

    pub fn has_location(&self, value: &str) -> bool {
        self.locations.iter().any(|l| l == value)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            languages: default_languages(),
            fee_ranges: default_fee_ranges(),
            locations: default_locations(),
        }
    }
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn default_categories() -> Vec<String> {
    to_owned(&DEFAULT_CATEGORIES)
}

fn default_languages() -> Vec<String> {
    to_owned(&DEFAULT_LANGUAGES)
}

fn default_fee_ranges() -> Vec<String> {
    to_owned(&DEFAULT_FEE_RANGES)
}

fn default_locations() -> Vec<String> {
    to_owned(&DEFAULT_LOCATIONS)
}
