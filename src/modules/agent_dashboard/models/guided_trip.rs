use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuidedTripStatus {
    Active,
    Draft,
    Upcoming,
    Completed,
}

/// One row of the agent's trip table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidedTripSummary {
    pub id: String,
    pub title: String,
    pub location: String,
    pub duration_days: u32,
    pub price: Decimal,
    pub next_departure: NaiveDate,
    pub total_participants: u32,
    pub confirmed_participants: u32,
    pub total_revenue: Decimal,
    /// Share of the expected amount collected so far, 0 to 100
    pub percent_paid: u8,
    pub status: GuidedTripStatus,
}

/// Headline numbers above the trip table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub active_trips: usize,
    pub total_revenue: Decimal,
    pub total_travelers: u32,
    pub upcoming_departures: usize,
}
