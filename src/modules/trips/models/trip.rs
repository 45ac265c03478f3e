use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Who runs the trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    /// Organized by travelers, costs shared within the group
    Community,
    /// Sold by an agent with a payment plan
    Guided,
}

impl std::str::FromStr for TripType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "community" => Ok(Self::Community),
            "guided" => Ok(Self::Guided),
            other => Err(format!("Unknown trip type: {}", other)),
        }
    }
}

/// A trip listed on the discovery page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: u32,
    pub title: String,
    pub location: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: Decimal,
    pub rating: f32,
    pub review_count: u32,
    pub trip_type: TripType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_participants: Option<u32>,
}

impl Trip {
    /// Open places on a community trip; `None` when the trip has no cap
    pub fn spots_left(&self) -> Option<u32> {
        match (self.max_participants, self.current_participants) {
            (Some(max), current) => Some(max.saturating_sub(current.unwrap_or(0))),
            (None, _) => None,
        }
    }
}
