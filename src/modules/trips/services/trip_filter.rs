use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::modules::trips::models::{Trip, TripType};

/// Discovery page filters. Unset fields match every trip.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TripFilter {
    #[serde(default, rename = "type")]
    pub trip_type: Option<TripType>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub max_budget: Option<Decimal>,
}

impl TripFilter {
    pub fn matches(&self, trip: &Trip) -> bool {
        if let Some(trip_type) = self.trip_type {
            if trip.trip_type != trip_type {
                return false;
            }
        }

        if let Some(location) = self.location.as_deref().filter(|l| !l.is_empty()) {
            if !trip
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
            {
                return false;
            }
        }

        // A half-open range does not filter
        if let (Some(from), Some(to)) = (self.from, self.to) {
            if trip.start_date < from || trip.end_date > to {
                return false;
            }
        }

        if let Some(max_budget) = self.max_budget {
            if trip.price > max_budget {
                return false;
            }
        }

        true
    }

    /// Matching trips in catalog order
    pub fn apply<'a>(&self, trips: &'a [Trip]) -> Vec<&'a Trip> {
        trips.iter().filter(|t| self.matches(t)).collect()
    }

    /// Fill in the budget cap the discovery slider starts at
    pub fn with_default_budget(mut self, cap: Decimal) -> Self {
        self.max_budget.get_or_insert(cap);
        self
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Trips shown on the discovery page
pub fn sample_trips() -> Vec<Trip> {
    vec![
        Trip {
            id: 1,
            title: "Bali Adventure".to_string(),
            location: "Bali, Indonesia".to_string(),
            description: "Explore beautiful beaches, temples, and rice terraces with fellow travelers.".to_string(),
            start_date: date(2025, 6, 15),
            end_date: date(2025, 6, 22),
            price: Decimal::from(1200),
            rating: 4.8,
            review_count: 24,
            trip_type: TripType::Community,
            organizer: None,
            max_participants: Some(8),
            current_participants: Some(5),
        },
        Trip {
            id: 2,
            title: "Tokyo Explorer".to_string(),
            location: "Tokyo, Japan".to_string(),
            description: "Discover the bustling metropolis and serene temples with our expert local guide.".to_string(),
            start_date: date(2025, 7, 10),
            end_date: date(2025, 7, 15),
            price: Decimal::from(1800),
            rating: 4.9,
            review_count: 36,
            trip_type: TripType::Guided,
            organizer: Some("Akira Tours".to_string()),
            max_participants: None,
            current_participants: None,
        },
        Trip {
            id: 3,
            title: "Costa Rica Wildlife".to_string(),
            location: "Costa Rica".to_string(),
            description: "Experience the lush rainforests and amazing wildlife in this tropical paradise.".to_string(),
            start_date: date(2025, 8, 5),
            end_date: date(2025, 8, 15),
            price: Decimal::from(1500),
            rating: 4.7,
            review_count: 19,
            trip_type: TripType::Community,
            organizer: None,
            max_participants: Some(10),
            current_participants: Some(4),
        },
        Trip {
            id: 4,
            title: "Rome & Tuscany".to_string(),
            location: "Italy".to_string(),
            description: "Explore Rome's ancient history and enjoy Tuscany's delicious food and wine.".to_string(),
            start_date: date(2025, 9, 12),
            end_date: date(2025, 9, 20),
            price: Decimal::from(2200),
            rating: 4.9,
            review_count: 42,
            trip_type: TripType::Guided,
            organizer: Some("Italia Expeditions".to_string()),
            max_participants: None,
            current_participants: None,
        },
        Trip {
            id: 5,
            title: "Thailand Beach Hopping".to_string(),
            location: "Thailand".to_string(),
            description: "Island hop through Thailand's most beautiful beaches with new friends.".to_string(),
            start_date: date(2025, 10, 1),
            end_date: date(2025, 10, 10),
            price: Decimal::from(1100),
            rating: 4.6,
            review_count: 28,
            trip_type: TripType::Community,
            organizer: None,
            max_participants: Some(12),
            current_participants: Some(8),
        },
        Trip {
            id: 6,
            title: "Peruvian Andes".to_string(),
            location: "Peru".to_string(),
            description: "Hike the majestic Andes mountains and visit ancient Incan ruins.".to_string(),
            start_date: date(2025, 11, 5),
            end_date: date(2025, 11, 15),
            price: Decimal::from(1900),
            rating: 4.8,
            review_count: 31,
            trip_type: TripType::Guided,
            organizer: Some("Andean Explorers".to_string()),
            max_participants: None,
            current_participants: None,
        },
    ]
}
