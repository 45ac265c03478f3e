// Field validation for community and guided trip forms

use chrono::NaiveDate;
use ketravelan::modules::trips::models::{CommunityTripForm, DateRange, GuidedTripForm, ItineraryDay};
use ketravelan::modules::trips::services::{
    community_trip_rules, validate_community_trip, validate_guided_trip,
};
use rust_decimal_macros::dec;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap()
}

fn community_form() -> CommunityTripForm {
    CommunityTripForm {
        title: "Langkawi Island Hop".to_string(),
        location: "Langkawi, Malaysia".to_string(),
        date_range: DateRange {
            from: Some(date(8, 1)),
            to: Some(date(8, 5)),
        },
        group_size: 6,
        budget: dec!(800),
        description: "Beaches, mangroves and a cable car ride with new friends.".to_string(),
        tags: vec!["beach".to_string()],
        itinerary: vec![ItineraryDay {
            day: 1,
            title: "Arrival".to_string(),
            description: "Check in and sunset at Cenang".to_string(),
        }],
    }
}

fn guided_form() -> GuidedTripForm {
    GuidedTripForm {
        title: "Sacred Temples of Bali Tour".to_string(),
        location: "Bali, Indonesia".to_string(),
        description: "Seven days of temples, rice terraces and local cooking.".to_string(),
        inclusions: Some("Hotels, breakfast".to_string()),
        exclusions: None,
        available_dates: vec![date(6, 15)],
        base_price: "1499".to_string(),
        deposit_percentage: "20".to_string(),
        max_participants: "10".to_string(),
        duration: "7".to_string(),
        payment_schedule: "monthly".to_string(),
    }
}

#[test]
fn test_valid_community_trip() {
    let report = validate_community_trip(&community_form());
    assert!(report.valid);
    assert!(report.errors.is_empty());
}

/// Every failing rule is reported, in field order
#[test]
fn test_community_trip_reports_all_failures_in_order() {
    let form = CommunityTripForm {
        title: "Trip".to_string(),
        location: String::new(),
        date_range: DateRange::default(),
        group_size: 1,
        budget: dec!(50),
        description: "Too short".to_string(),
        tags: Vec::new(),
        itinerary: Vec::new(),
    };

    let report = validate_community_trip(&form);
    assert!(!report.valid);

    let fields: Vec<&str> = report.errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec![
            "title",
            "location",
            "date_range",
            "group_size",
            "budget",
            "description",
            "tags",
            "itinerary",
        ]
    );
    assert_eq!(report.errors[0].message, "Title must be at least 5 characters.");
}

#[test]
fn test_community_group_size_upper_bound() {
    let mut form = community_form();
    form.group_size = 21;

    let errors = community_trip_rules().validate(&form).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Group size cannot exceed 20.");
}

#[test]
fn test_community_reversed_dates() {
    let mut form = community_form();
    form.date_range = DateRange {
        from: Some(date(8, 5)),
        to: Some(date(8, 1)),
    };

    let errors = community_trip_rules().validate(&form).unwrap_err();
    assert_eq!(errors[0].field, "date_range");
}

#[test]
fn test_community_itinerary_day_needs_text() {
    let mut form = community_form();
    form.itinerary.push(ItineraryDay {
        day: 2,
        title: String::new(),
        description: String::new(),
    });

    let messages: Vec<String> = validate_community_trip(&form)
        .errors
        .into_iter()
        .map(|e| e.message)
        .collect();
    assert_eq!(
        messages,
        vec!["Activity title is required", "Activity description is required"]
    );
}

#[test]
fn test_valid_guided_trip() {
    assert!(validate_guided_trip(&guided_form()).valid);
}

#[test]
fn test_guided_trip_numeric_fields() {
    let mut form = guided_form();
    form.base_price = "abc".to_string();
    form.deposit_percentage = "120".to_string();
    form.max_participants = "0".to_string();
    form.duration = "-3".to_string();
    form.available_dates.clear();

    let report = validate_guided_trip(&form);
    let fields: Vec<&str> = report.errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec![
            "available_dates",
            "base_price",
            "deposit_percentage",
            "max_participants",
            "duration",
        ]
    );
}

#[test]
fn test_guided_deposit_bounds_inclusive() {
    let mut form = guided_form();
    form.deposit_percentage = "0".to_string();
    assert!(validate_guided_trip(&form).valid);

    form.deposit_percentage = "100".to_string();
    assert!(validate_guided_trip(&form).valid);
}
