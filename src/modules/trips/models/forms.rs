use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// Both ends present
    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }

    /// False only when both ends are set and out of order
    pub fn is_ordered(&self) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= to,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItineraryDay {
    pub day: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Traveler-created community trip
#[derive(Debug, Clone, Deserialize)]
pub struct CommunityTripForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date_range: DateRange,
    pub group_size: u32,
    pub budget: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
}

/// Agent-created guided trip.
///
/// Numeric fields arrive as the text typed into the form so an unparsable
/// value is reported against its field.
#[derive(Debug, Clone, Deserialize)]
pub struct GuidedTripForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub inclusions: Option<String>,
    #[serde(default)]
    pub exclusions: Option<String>,
    #[serde(default)]
    pub available_dates: Vec<NaiveDate>,
    #[serde(default)]
    pub base_price: String,
    #[serde(default)]
    pub deposit_percentage: String,
    #[serde(default)]
    pub max_participants: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub payment_schedule: String,
}
