use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::modules::agent_dashboard::models::{
    DashboardStats, GuidedTripStatus, GuidedTripSummary,
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub status: Option<GuidedTripStatus>,
    #[serde(default)]
    pub search: Option<String>,
}

impl DashboardQuery {
    /// Status must match when set; search looks at title, location and id
    pub fn matches(&self, trip: &GuidedTripSummary) -> bool {
        if self.status.is_some_and(|s| s != trip.status) {
            return false;
        }

        let needle = self.search.as_deref().unwrap_or_default().to_lowercase();
        trip.title.to_lowercase().contains(&needle)
            || trip.location.to_lowercase().contains(&needle)
            || trip.id.to_lowercase().contains(&needle)
    }

    pub fn apply<'a>(&self, trips: &'a [GuidedTripSummary]) -> Vec<&'a GuidedTripSummary> {
        trips.iter().filter(|t| self.matches(t)).collect()
    }
}

/// Stats over the whole catalog, independent of any filter
pub fn dashboard_stats(trips: &[GuidedTripSummary], today: NaiveDate) -> DashboardStats {
    DashboardStats {
        active_trips: trips
            .iter()
            .filter(|t| t.status == GuidedTripStatus::Active)
            .count(),
        total_revenue: trips.iter().map(|t| t.total_revenue).sum(),
        total_travelers: trips.iter().map(|t| t.confirmed_participants).sum(),
        upcoming_departures: trips
            .iter()
            .filter(|t| {
                matches!(t.status, GuidedTripStatus::Active | GuidedTripStatus::Upcoming)
                    && t.next_departure > today
            })
            .count(),
    }
}

#[allow(clippy::too_many_arguments)]
fn summary(
    id: &str,
    title: &str,
    location: &str,
    duration_days: u32,
    price: i64,
    next_departure: (i32, u32, u32),
    participants: (u32, u32),
    total_revenue: Decimal,
    percent_paid: u8,
    status: GuidedTripStatus,
) -> GuidedTripSummary {
    GuidedTripSummary {
        id: id.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        duration_days,
        price: Decimal::from(price),
        next_departure: NaiveDate::from_ymd_opt(next_departure.0, next_departure.1, next_departure.2)
            .unwrap_or_default(),
        total_participants: participants.0,
        confirmed_participants: participants.1,
        total_revenue,
        percent_paid,
        status,
    }
}

/// Guided trips owned by the signed-in agent
pub fn sample_guided_trips() -> Vec<GuidedTripSummary> {
    use GuidedTripStatus::*;

    vec![
        summary("GT-12345", "Sacred Temples of Bali Tour", "Bali, Indonesia", 7, 1499, (2025, 6, 15), (10, 6), Decimal::from(8994), 85, Active),
        summary("GT-12346", "Northern Lights Explorer", "Iceland", 5, 1899, (2025, 9, 20), (8, 8), Decimal::from(15192), 100, Active),
        summary("GT-12347", "Kyoto Cultural Immersion", "Japan", 8, 2299, (2025, 5, 10), (6, 3), Decimal::new(344850, 2), 50, Active),
        summary("GT-12348", "Amazon Rainforest Expedition", "Brazil", 9, 2599, (2025, 8, 5), (12, 0), Decimal::ZERO, 0, Draft),
        summary("GT-12349", "Ancient Egypt Discovery", "Egypt", 10, 1899, (2025, 11, 12), (14, 0), Decimal::ZERO, 0, Draft),
        summary("GT-12350", "Tuscan Wine Trail", "Italy", 6, 1699, (2025, 7, 18), (10, 0), Decimal::ZERO, 0, Upcoming),
        summary("GT-12351", "New Zealand Adventure", "New Zealand", 12, 2999, (2025, 3, 15), (8, 8), Decimal::from(23992), 100, Completed),
        summary("GT-12352", "Moroccan Desert Expedition", "Morocco", 8, 1399, (2025, 10, 5), (10, 0), Decimal::ZERO, 0, Upcoming),
    ]
}
