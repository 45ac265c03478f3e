use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::modules::payment_history::models::{PaymentKind, PaymentRecord, PaymentRecordStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentSort {
    #[default]
    DateDesc,
    DateAsc,
    AmountDesc,
    AmountAsc,
}

/// Search, filters and ordering for the payment history table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaymentHistoryQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<PaymentRecordStatus>,
    #[serde(default)]
    pub kind: Option<PaymentKind>,
    #[serde(default)]
    pub sort: PaymentSort,
}

impl PaymentHistoryQuery {
    pub fn matches(&self, record: &PaymentRecord) -> bool {
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            if !record.trip_name.to_lowercase().contains(&needle)
                && !record.reference.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if self.status.is_some_and(|s| s != record.status) {
            return false;
        }

        if self.kind.is_some_and(|k| k != record.kind) {
            return false;
        }

        true
    }

    /// Matching records, ordered. Ties keep their original order.
    pub fn apply(&self, records: &[PaymentRecord]) -> Vec<PaymentRecord> {
        let mut matched: Vec<PaymentRecord> =
            records.iter().filter(|r| self.matches(r)).cloned().collect();

        match self.sort {
            PaymentSort::DateDesc => matched.sort_by(|a, b| b.date.cmp(&a.date)),
            PaymentSort::DateAsc => matched.sort_by(|a, b| a.date.cmp(&b.date)),
            PaymentSort::AmountDesc => matched.sort_by(|a, b| b.amount.cmp(&a.amount)),
            PaymentSort::AmountAsc => matched.sort_by(|a, b| a.amount.cmp(&b.amount)),
        }

        matched
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    trip_name: &str,
    amount: i64,
    date: (i32, u32, u32),
    status: PaymentRecordStatus,
    kind: PaymentKind,
    payment_method: &str,
    reference: &str,
) -> PaymentRecord {
    PaymentRecord {
        id: id.to_string(),
        trip_name: trip_name.to_string(),
        amount: Decimal::from(amount),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
        status,
        kind,
        payment_method: payment_method.to_string(),
        reference: reference.to_string(),
    }
}

/// Payment history shown to the signed-in traveler
pub fn sample_payment_history() -> Vec<PaymentRecord> {
    use PaymentKind::*;
    use PaymentRecordStatus::*;

    vec![
        record("p1", "Bali Adventure", 1200, (2025, 4, 15), Completed, Payment, "Credit Card", "BAL-1234-5678"),
        record("p2", "Tokyo Explorer", 1800, (2025, 3, 22), Completed, Payment, "PayPal", "TOK-2345-6789"),
        record("p3", "Costa Rica Retreat", 350, (2025, 3, 10), Pending, Payment, "Bank Transfer", "COS-3456-7890"),
        record("p4", "Rome & Tuscany", 500, (2025, 2, 28), Failed, Payment, "Credit Card", "ROM-4567-8901"),
        record("p5", "Thailand Beach Hopping", 1100, (2025, 2, 14), Completed, Payment, "Credit Card", "THA-5678-9012"),
        record("p6", "Peruvian Andes", 750, (2025, 1, 30), Completed, Refund, "Original Method", "REF-6789-0123"),
        record("p7", "Greek Islands", 2200, (2025, 1, 15), Completed, Payment, "Credit Card", "GRE-7890-1234"),
        record("p8", "Morocco Desert Tour", 1600, (2024, 12, 20), Completed, Payment, "PayPal", "MOR-8901-2345"),
    ]
}
