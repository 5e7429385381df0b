/// API route modules
pub mod artists;
pub mod bookings;
pub mod catalog;
pub mod health;
