/// Application services over a `DataSource`
pub mod booking;
pub mod listing;

pub use booking::{BookingListing, BookingService};
pub use listing::{ArtistListing, ListingService};
