use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentRecordStatus {
    Completed,
    Pending,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    Payment,
    Refund,
}

/// One line in a traveler's payment history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: String,
    pub trip_name: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub status: PaymentRecordStatus,
    pub kind: PaymentKind,
    pub payment_method: String,
    pub reference: String,
}

impl PaymentRecord {
    /// Receipts exist only for completed payments
    pub fn has_receipt(&self) -> bool {
        self.status == PaymentRecordStatus::Completed
    }

    /// Amount as listed; refunds carry a leading "+"
    pub fn display_amount(&self, currency: Currency) -> String {
        let formatted = currency.format_amount(self.amount);
        match self.kind {
            PaymentKind::Refund => format!("+{}", formatted),
            PaymentKind::Payment => formatted,
        }
    }
}
