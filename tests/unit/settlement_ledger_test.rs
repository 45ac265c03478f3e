// Property-based and example tests for settlement balances

use chrono::{TimeZone, Utc};
use chrono::NaiveDate;
use ketravelan::core::{Currency, FixedClock};
use ketravelan::modules::settlements::models::{Settlement, SettlementRequest, SettlementStatus};
use ketravelan::modules::settlements::services::SettlementLedger;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn settlement(from: &str, to: &str, amount: Decimal, status: SettlementStatus) -> Settlement {
    Settlement {
        id: format!("settlement-{}-{}-{}", from, to, amount),
        from_user_id: from.to_string(),
        to_user_id: to.to_string(),
        amount,
        description: format!("Payment from {} to {}", from, to),
        date: Utc.with_ymd_and_hms(2025, 6, 20, 12, 0, 0).unwrap(),
        status,
        related_expenses: Vec::new(),
    }
}

/// A completed payment made by the user raises their balance
#[test]
fn test_payer_balance() {
    let history = [settlement("u", "v", dec!(40), SettlementStatus::Completed)];
    assert_eq!(SettlementLedger::net_balance("u", dec!(100), &history), dec!(140));
}

/// A completed payment received by the user lowers their balance
#[test]
fn test_payee_balance() {
    let history = [settlement("v", "u", dec!(40), SettlementStatus::Completed)];
    assert_eq!(SettlementLedger::net_balance("u", dec!(-100), &history), dec!(-140));
}

/// Paying and receiving the same amount cancels out
#[test]
fn test_round_trip_cancels() {
    let history = [
        settlement("u", "v", dec!(25.50), SettlementStatus::Completed),
        settlement("v", "u", dec!(25.50), SettlementStatus::Completed),
    ];
    assert_eq!(SettlementLedger::net_balance("u", dec!(12), &history), dec!(12));
}

fn request(amount: Decimal) -> SettlementRequest {
    SettlementRequest {
        from_user_id: "u".to_string(),
        to_user_id: "v".to_string(),
        amount,
        description: None,
    }
}

/// Amounts that would round to zero, or lose precision, are never recorded
#[test]
fn test_sub_cent_settlements_rejected() {
    let clock = FixedClock::on(NaiveDate::from_ymd_opt(2025, 6, 20).unwrap());
    let ledger = SettlementLedger::new(Currency::USD);

    for amount in [dec!(0.001), dec!(0.004), dec!(12.345)] {
        assert!(ledger.process_settlement(request(amount), &clock).is_err());
        assert!(!ledger.validate_request(&request(amount), dec!(100)).is_valid);
    }

    let smallest = ledger.process_settlement(request(dec!(0.01)), &clock).unwrap();
    assert_eq!(smallest.amount, dec!(0.01));
}

fn status_strategy() -> impl Strategy<Value = SettlementStatus> {
    prop_oneof![
        Just(SettlementStatus::Pending),
        Just(SettlementStatus::Confirmed),
        Just(SettlementStatus::Completed),
    ]
}

fn user_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("u"), Just("v"), Just("w")]
}

fn settlement_strategy() -> impl Strategy<Value = Settlement> {
    (user_strategy(), user_strategy(), 1i64..100_000i64, status_strategy())
        .prop_filter("nobody settles with themselves", |(from, to, _, _)| from != to)
        .prop_map(|(from, to, cents, status)| settlement(from, to, Decimal::new(cents, 2), status))
}

proptest! {
    /// Pending and confirmed settlements never change a balance
    #[test]
    fn prop_unfinished_settlements_ignored(
        gross_cents in -1_000_000i64..1_000_000i64,
        history in prop::collection::vec(settlement_strategy(), 0..20),
    ) {
        let gross = Decimal::new(gross_cents, 2);
        let completed: Vec<Settlement> = history
            .iter()
            .filter(|s| s.status == SettlementStatus::Completed)
            .cloned()
            .collect();

        prop_assert_eq!(
            SettlementLedger::net_balance("u", gross, &history),
            SettlementLedger::net_balance("u", gross, &completed)
        );
    }

    /// Every recorded settlement carries a positive amount at currency scale
    #[test]
    fn prop_recorded_amount_positive(mills in 1i64..1_000_000i64) {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2025, 6, 20).unwrap());
        let amount = Decimal::new(mills, 3);

        match SettlementLedger::default().process_settlement(request(amount), &clock) {
            Ok(settlement) => {
                prop_assert!(settlement.amount > Decimal::ZERO);
                prop_assert_eq!(settlement.amount, amount);
            }
            Err(_) => prop_assert!(mills % 10 != 0),
        }
    }

    /// Net equals gross plus what the user paid minus what they received
    #[test]
    fn prop_net_balance_formula(
        gross_cents in -1_000_000i64..1_000_000i64,
        history in prop::collection::vec(settlement_strategy(), 0..20),
    ) {
        let gross = Decimal::new(gross_cents, 2);
        let completed = history.iter().filter(|s| s.status == SettlementStatus::Completed);
        let paid: Decimal = completed
            .clone()
            .filter(|s| s.from_user_id == "u")
            .map(|s| s.amount)
            .sum();
        let received: Decimal = completed
            .filter(|s| s.to_user_id == "u")
            .map(|s| s.amount)
            .sum();

        prop_assert_eq!(
            SettlementLedger::net_balance("u", gross, &history),
            gross + paid - received
        );
    }
}
