//! Booking request types

use crate::types::{ArtistId, BookingId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Lifecycle state of a booking request
///
/// Requests are created `Pending` and move to `Accepted` or `Rejected`
/// exactly once. Both outcomes are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Accepted,
    Rejected,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Accepted => "accepted",
            BookingStatus::Rejected => "rejected",
        }
    }

    /// Parse status from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BookingStatus::Pending),
            "accepted" => Some(BookingStatus::Accepted),
            "rejected" => Some(BookingStatus::Rejected),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, BookingStatus::Pending)
    }

    /// Whether a manager action may move a request from `self` to `next`
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (
                BookingStatus::Pending,
                BookingStatus::Accepted | BookingStatus::Rejected
            )
        )
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event planner's inquiry to an artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub id: BookingId,

    pub artist_id: ArtistId,

    /// Denormalized artist name, captured at submission time
    pub artist_name: String,

    /// Requested event date; `None` means "to be decided"
    #[serde(default, deserialize_with = "deserialize_event_date")]
    pub event_date: Option<NaiveDate>,

    pub location: String,

    /// Free-text budget, e.g. "₹30,000"
    pub budget: String,

    pub status: BookingStatus,

    pub created_at: DateTime<Utc>,
}

impl BookingRequest {
    /// Build a new request from a submission. Always starts `Pending`.
    pub fn from_create(create: CreateBooking) -> Self {
        Self {
            id: BookingId::generate(),
            artist_id: create.artist_id,
            artist_name: create.artist_name,
            event_date: create.event_date,
            location: create.location,
            budget: create.budget,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

/// Data for submitting a booking request (quote)
///
/// Unknown fields such as `status` or `id` in the incoming body are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub artist_id: ArtistId,
    #[serde(default)]
    pub artist_name: String,
    #[serde(default, deserialize_with = "deserialize_event_date")]
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub budget: String,
}

/// Accepts `null`, `""` (both "to be decided") or an ISO `YYYY-MM-DD` date.
fn deserialize_event_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_string_conversion() {
        assert_eq!(BookingStatus::Accepted.as_str(), "accepted");
        assert_eq!(BookingStatus::from_str("rejected"), Some(BookingStatus::Rejected));
        assert_eq!(BookingStatus::from_str("cancelled"), None);
    }

    #[test]
    fn only_pending_can_transition() {
        use BookingStatus::*;

        assert!(Pending.can_transition_to(Accepted));
        assert!(Pending.can_transition_to(Rejected));
        assert!(!Pending.can_transition_to(Pending));
        for terminal in [Accepted, Rejected] {
            assert!(terminal.is_terminal());
            for next in [Pending, Accepted, Rejected] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn create_booking_ignores_client_status() {
        let body = serde_json::json!({
            "artistId": "1",
            "artistName": "Priya Sharma",
            "eventDate": "2024-07-15",
            "location": "Mumbai",
            "budget": "₹30,000",
            "status": "accepted"
        });
        let create: CreateBooking = serde_json::from_value(body).unwrap();
        let booking = BookingRequest::from_create(create);

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.event_date, NaiveDate::from_ymd_opt(2024, 7, 15));
    }

    #[test]
    fn empty_event_date_is_to_be_decided() {
        let body = serde_json::json!({
            "artistId": "2",
            "artistName": "DJ Arjun",
            "eventDate": "",
            "location": "",
            "budget": "₹50,000 - ₹1,00,000"
        });
        let create: CreateBooking = serde_json::from_value(body).unwrap();
        assert_eq!(create.event_date, None);
    }

    #[test]
    fn malformed_event_date_is_rejected() {
        let body = serde_json::json!({ "artistId": "2", "eventDate": "next friday" });
        assert!(serde_json::from_value::<CreateBooking>(body).is_err());
    }
}
