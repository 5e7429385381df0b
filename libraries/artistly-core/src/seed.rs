//! Reference dataset
//!
//! Six artists and two booking requests used to seed a fresh data source
//! and as fixtures in tests.

use crate::types::{Artist, ArtistId, BookingId, BookingRequest, BookingStatus};
use chrono::{DateTime, NaiveDate, Utc};

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn artist(
    id: &str,
    name: &str,
    bio: &str,
    category: &[&str],
    languages: &[&str],
    fee_range: &str,
    location: &str,
    rating: f32,
    review_count: u32,
    is_verified: bool,
    created_at: DateTime<Utc>,
) -> Artist {
    Artist {
        id: ArtistId::new(id),
        name: name.to_string(),
        bio: bio.to_string(),
        category: labels(category),
        languages: labels(languages),
        fee_range: fee_range.to_string(),
        location: location.to_string(),
        profile_image: None,
        rating,
        review_count,
        is_verified,
        created_at,
    }
}

/// The six reference artist profiles, in listing order
pub fn reference_artists() -> Vec<Artist> {
    vec![
        artist(
            "1",
            "Priya Sharma",
            "Professional classical singer with 10+ years of experience in Bollywood and regional music.",
            &["Singers"],
            &["Hindi", "English", "Punjabi"],
            "₹25,000 - ₹50,000",
            "Mumbai",
            4.8,
            127,
            true,
            day(2024, 1, 15),
        ),
        artist(
            "2",
            "DJ Arjun",
            "Electronic music producer and DJ specializing in wedding and corporate events.",
            &["DJs"],
            &["Hindi", "English"],
            "₹50,000 - ₹1,00,000",
            "Delhi",
            4.9,
            89,
            true,
            day(2024, 2, 1),
        ),
        artist(
            "3",
            "Kavya Dance Troupe",
            "Contemporary and classical dance group with award-winning choreography.",
            &["Dancers"],
            &["Tamil", "English", "Hindi"],
            "₹10,000 - ₹25,000",
            "Chennai",
            4.7,
            156,
            true,
            day(2024, 1, 20),
        ),
        artist(
            "4",
            "Rohit Motivational Speaker",
            "Corporate trainer and motivational speaker with expertise in leadership development.",
            &["Speakers"],
            &["English", "Hindi", "Marathi"],
            "₹25,000 - ₹50,000",
            "Pune",
            4.6,
            73,
            false,
            day(2024, 2, 10),
        ),
        artist(
            "5",
            "The Harmony Band",
            "Live music band specializing in rock, pop, and fusion performances.",
            &["Musicians", "Singers"],
            &["English", "Hindi"],
            "Above ₹1,00,000",
            "Bangalore",
            4.9,
            201,
            true,
            day(2024, 1, 5),
        ),
        artist(
            "6",
            "Comedy King Rajesh",
            "Stand-up comedian with viral social media presence and corporate show experience.",
            &["Comedians"],
            &["Hindi", "English", "Gujarati"],
            "₹10,000 - ₹25,000",
            "Ahmedabad",
            4.5,
            94,
            true,
            day(2024, 2, 5),
        ),
    ]
}

/// The two reference booking requests: one pending, one accepted
pub fn reference_bookings() -> Vec<BookingRequest> {
    vec![
        BookingRequest {
            id: BookingId::new("1"),
            artist_id: ArtistId::new("1"),
            artist_name: "Priya Sharma".to_string(),
            event_date: NaiveDate::from_ymd_opt(2024, 7, 15),
            location: "Mumbai".to_string(),
            budget: "₹30,000".to_string(),
            status: BookingStatus::Pending,
            created_at: day(2024, 6, 20),
        },
        BookingRequest {
            id: BookingId::new("2"),
            artist_id: ArtistId::new("2"),
            artist_name: "DJ Arjun".to_string(),
            event_date: NaiveDate::from_ymd_opt(2024, 8, 1),
            location: "Delhi".to_string(),
            budget: "₹75,000".to_string(),
            status: BookingStatus::Accepted,
            created_at: day(2024, 6, 18),
        },
    ]
}
