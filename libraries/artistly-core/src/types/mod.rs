mod artist;
mod booking;
mod catalog;
mod filter_options;
mod ids;

pub use artist::{Artist, CreateArtist};
pub use booking::{BookingRequest, BookingStatus, CreateBooking};
pub use catalog::{
    Catalog, DEFAULT_CATEGORIES, DEFAULT_FEE_RANGES, DEFAULT_LANGUAGES, DEFAULT_LOCATIONS,
};
pub use filter_options::FilterOptions;
pub(crate) use filter_options::non_empty;
pub use ids::{ArtistId, BookingId};
