/// Manager dashboard statistics
use crate::types::{BookingRequest, BookingStatus};
use serde::{Deserialize, Serialize};

/// Booking counts by status, plus the acceptance rate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStats {
    pub total_bookings: usize,
    pub pending_bookings: usize,
    pub accepted_bookings: usize,
    pub rejected_bookings: usize,
    /// Accepted share of all requests as a whole percentage (0 when empty)
    pub acceptance_rate: u32,
}

impl BookingStats {
    pub fn from_bookings(bookings: &[BookingRequest]) -> Self {
        let mut stats = BookingStats {
            total_bookings: bookings.len(),
            ..Default::default()
        };

        for booking in bookings {
            match booking.status {
                BookingStatus::Pending => stats.pending_bookings += 1,
                BookingStatus::Accepted => stats.accepted_bookings += 1,
                BookingStatus::Rejected => stats.rejected_bookings += 1,
            }
        }

        if stats.total_bookings > 0 {
            let rate = stats.accepted_bookings as f64 / stats.total_bookings as f64 * 100.0;
            stats.acceptance_rate = rate.round() as u32;
        }

        stats
    }
}
