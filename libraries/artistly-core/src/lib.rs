//! Artistly Core
//!
//! Domain types, the artist filter engine, the listing query adapter and the
//! booking lifecycle for the Artistly performer marketplace.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Artist`, `BookingRequest`, `FilterOptions`, `Catalog`
//! - **Filter Engine**: [`filter::apply`], a pure and order-preserving filter
//! - **Query Adapter**: [`query::parse`] / [`query::serialize`]
//! - **Data Source port**: the [`DataSource`] trait implemented by storage crates
//! - **Services**: [`ListingService`] and [`BookingService`]
//! - **Error Handling**: unified `ArtistlyError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use artistly_core::{filter, query, seed};
//!
//! let criteria = query::parse([("category", "Singers"), ("location", "Mumbai")]);
//! let artists = filter::apply(&seed::reference_artists(), &criteria);
//!
//! assert_eq!(artists.len(), 1);
//! assert_eq!(artists[0].name, "Priya Sharma");
//! assert_eq!(query::to_query_string(&criteria), "category=Singers&location=Mumbai");
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod filter;
pub mod query;
pub mod seed;
pub mod services;
pub mod stats;
pub mod storage;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{ArtistlyError, Result};
pub use services::{ArtistListing, BookingListing, BookingService, ListingService};
pub use stats::BookingStats;
pub use storage::DataSource;
pub use validation::{OnboardingStage, ValidationErrors};

pub use types::{
    Artist, ArtistId, BookingId, BookingRequest, BookingStatus, Catalog, CreateArtist,
    CreateBooking, FilterOptions,
};
