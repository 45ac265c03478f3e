use std::str::FromStr;

use rust_decimal::Decimal;

use crate::core::{ValidationReport, ValidationRules};
use crate::modules::trips::models::{CommunityTripForm, GuidedTripForm};

fn min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Parse a number typed into a form field
fn parse_number(value: &str) -> Option<Decimal> {
    Decimal::from_str(value.trim()).ok()
}

pub fn community_trip_rules() -> ValidationRules<CommunityTripForm> {
    ValidationRules::new()
        .rule(
            "title",
            |f: &CommunityTripForm| min_chars(&f.title, 5),
            "Title must be at least 5 characters.",
        )
        .rule(
            "location",
            |f: &CommunityTripForm| min_chars(&f.location, 3),
            "Location is required.",
        )
        .rule(
            "date_range",
            |f: &CommunityTripForm| f.date_range.is_complete(),
            "Date range is required.",
        )
        .rule(
            "date_range",
            |f: &CommunityTripForm| f.date_range.is_ordered(),
            "End date must be on or after the start date.",
        )
        .rule(
            "group_size",
            |f: &CommunityTripForm| f.group_size >= 2,
            "Group size must be at least 2.",
        )
        .rule(
            "group_size",
            |f: &CommunityTripForm| f.group_size <= 20,
            "Group size cannot exceed 20.",
        )
        .rule(
            "budget",
            |f: &CommunityTripForm| f.budget >= Decimal::ONE_HUNDRED,
            "Budget must be at least $100.",
        )
        .rule(
            "description",
            |f: &CommunityTripForm| min_chars(&f.description, 20),
            "Description must be at least 20 characters.",
        )
        .rule(
            "tags",
            |f: &CommunityTripForm| !f.tags.is_empty(),
            "Add at least one tag.",
        )
        .rule(
            "itinerary",
            |f: &CommunityTripForm| !f.itinerary.is_empty(),
            "Add at least one day to your itinerary.",
        )
        .rule(
            "itinerary",
            |f: &CommunityTripForm| f.itinerary.iter().all(|d| !d.title.is_empty()),
            "Activity title is required",
        )
        .rule(
            "itinerary",
            |f: &CommunityTripForm| f.itinerary.iter().all(|d| !d.description.is_empty()),
            "Activity description is required",
        )
}

pub fn guided_trip_rules() -> ValidationRules<GuidedTripForm> {
    ValidationRules::new()
        .rule(
            "title",
            |f: &GuidedTripForm| min_chars(&f.title, 5),
            "Title must be at least 5 characters",
        )
        .rule(
            "location",
            |f: &GuidedTripForm| min_chars(&f.location, 3),
            "Location is required",
        )
        .rule(
            "description",
            |f: &GuidedTripForm| min_chars(&f.description, 20),
            "Description must be at least 20 characters",
        )
        .rule(
            "available_dates",
            |f: &GuidedTripForm| !f.available_dates.is_empty(),
            "At least one date is required",
        )
        .rule(
            "base_price",
            |f: &GuidedTripForm| parse_number(&f.base_price).is_some_and(|p| p > Decimal::ZERO),
            "Price must be a positive number",
        )
        .rule(
            "deposit_percentage",
            |f: &GuidedTripForm| {
                parse_number(&f.deposit_percentage)
                    .is_some_and(|p| p >= Decimal::ZERO && p <= Decimal::ONE_HUNDRED)
            },
            "Deposit must be between 0% and 100%",
        )
        .rule(
            "max_participants",
            |f: &GuidedTripForm| {
                parse_number(&f.max_participants).is_some_and(|n| n > Decimal::ZERO)
            },
            "Number of participants must be a positive number",
        )
        .rule(
            "duration",
            |f: &GuidedTripForm| parse_number(&f.duration).is_some_and(|n| n > Decimal::ZERO),
            "Duration must be a positive number",
        )
}

pub fn validate_community_trip(form: &CommunityTripForm) -> ValidationReport {
    community_trip_rules().validate(form).into()
}

pub fn validate_guided_trip(form: &GuidedTripForm) -> ValidationReport {
    guided_trip_rules().validate(form).into()
}
