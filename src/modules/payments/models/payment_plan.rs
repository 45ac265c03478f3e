use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Currency, Result};

/// How the agent offering a guided trip is presented on the plan and receipts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentBranding {
    pub business_name: String,
    pub contact_info: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Installment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallmentStatus {
    /// Not yet paid
    Pending,
    /// Payment received
    Paid,
    /// Due date passed without payment
    Overdue,
}

impl InstallmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
        }
    }
}

impl std::fmt::Display for InstallmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// When an installment falls due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "date", rename_all = "snake_case")]
pub enum DueDate {
    /// The deposit is collected when the booking is made
    UponBooking,
    On(NaiveDate),
}

impl DueDate {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::UponBooking => None,
            Self::On(date) => Some(*date),
        }
    }
}

impl std::fmt::Display for DueDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UponBooking => write!(f, "Upon booking"),
            Self::On(date) => write!(f, "{}", date.format("%b %-d, %Y")),
        }
    }
}

/// One line of a payment plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    /// `initial` for the deposit, `payment-N` for monthly installments
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub due: DueDate,
    pub status: InstallmentStatus,
}

impl Installment {
    /// The deposit line, due on booking
    pub fn initial(amount: Decimal) -> Self {
        Self {
            id: "initial".to_string(),
            description: "Initial Payment (Deposit)".to_string(),
            amount,
            due: DueDate::UponBooking,
            status: InstallmentStatus::Pending,
        }
    }

    /// Monthly installment `number` of `term` (1-based)
    pub fn monthly(number: u32, term: u32, amount: Decimal, due_date: NaiveDate) -> Self {
        Self {
            id: format!("payment-{}", number),
            description: format!("Payment {} of {}", number, term),
            amount,
            due: DueDate::On(due_date),
            status: InstallmentStatus::Pending,
        }
    }

    /// Mark installment as paid
    pub fn mark_as_paid(&mut self) -> Result<()> {
        if self.status == InstallmentStatus::Paid {
            return Err(AppError::validation(format!(
                "{} is already paid",
                self.description
            )));
        }

        self.status = InstallmentStatus::Paid;
        Ok(())
    }

    /// Mark installment as overdue
    pub fn mark_as_overdue(&mut self) -> Result<()> {
        if self.status == InstallmentStatus::Paid {
            return Err(AppError::validation(
                "Cannot mark paid installment as overdue",
            ));
        }

        self.status = InstallmentStatus::Overdue;
        Ok(())
    }

    /// Check if installment is past its due date on `today`.
    /// The booking deposit has no calendar date and is never past due.
    pub fn is_past_due(&self, today: NaiveDate) -> bool {
        if self.status == InstallmentStatus::Paid {
            return false;
        }

        matches!(self.due, DueDate::On(date) if date < today)
    }
}

/// Inputs a traveler and agent agree on before the schedule is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTerms {
    pub total_amount: Decimal,
    pub minimum_deposit: Decimal,
    pub initial_payment: Decimal,
    pub term_months: u32,
}

impl PaymentTerms {
    /// Validate the terms before any schedule is derived from them.
    ///
    /// The initial payment is checked against the minimum deposit first and
    /// the total second, so an initial payment under the deposit always
    /// reports "below minimum" even when the deposit itself is out of range.
    /// Term length is unbounded unless `max_term_months` is given.
    pub fn validate(&self, currency: Currency, max_term_months: Option<u32>) -> Result<()> {
        for (label, amount) in [
            ("Total amount", self.total_amount),
            ("Minimum deposit", self.minimum_deposit),
            ("Initial payment", self.initial_payment),
        ] {
            currency
                .validate_amount(amount)
                .map_err(|e| AppError::validation(format!("{}: {}", label, e)))?;
        }

        if self.term_months == 0 {
            return Err(AppError::validation(
                "Payment term must be at least 1 month",
            ));
        }

        if let Some(max) = max_term_months {
            if self.term_months > max {
                return Err(AppError::validation(format!(
                    "Payment term must be at most {} months, got {}",
                    max, self.term_months
                )));
            }
        }

        if self.initial_payment < self.minimum_deposit {
            return Err(AppError::validation(format!(
                "Initial payment {} is below minimum deposit {}",
                currency.format_amount(self.initial_payment),
                currency.format_amount(self.minimum_deposit)
            )));
        }

        if self.initial_payment > self.total_amount {
            return Err(AppError::validation(format!(
                "Initial payment {} exceeds total amount {}",
                currency.format_amount(self.initial_payment),
                currency.format_amount(self.total_amount)
            )));
        }

        Ok(())
    }

    pub fn remaining_balance(&self) -> Decimal {
        self.total_amount - self.initial_payment
    }
}

/// Derived payment plan for a guided trip booking.
///
/// Never edited in place: any change to the terms produces a new plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
    pub currency: Currency,
    pub total_amount: Decimal,
    pub minimum_deposit: Decimal,
    pub initial_payment: Decimal,
    pub remaining_balance: Decimal,
    pub term_months: u32,
    pub agent: AgentBranding,
    /// Deposit first, then monthly installments in due-date order
    pub installments: Vec<Installment>,
}

impl PaymentPlan {
    /// Monthly installments, excluding the deposit
    pub fn monthly_installments(&self) -> impl Iterator<Item = &Installment> {
        self.installments
            .iter()
            .filter(|i| matches!(i.due, DueDate::On(_)))
    }

    /// Per-month amount shown in the plan summary; zero when paid in full upfront
    pub fn monthly_payment(&self) -> Decimal {
        self.monthly_installments()
            .next()
            .map(|i| i.amount)
            .unwrap_or(Decimal::ZERO)
    }

    /// Sum of all installments
    pub fn scheduled_total(&self) -> Decimal {
        self.installments.iter().map(|i| i.amount).sum()
    }

    /// Amount still to be paid across pending and overdue installments
    pub fn outstanding(&self) -> Decimal {
        self.installments
            .iter()
            .filter(|i| i.status != InstallmentStatus::Paid)
            .map(|i| i.amount)
            .sum()
    }

    /// Flag every pending installment whose date has passed as overdue;
    /// returns how many were flagged
    pub fn mark_overdue(&mut self, today: NaiveDate) -> usize {
        let mut flagged = 0;
        for installment in self.installments.iter_mut() {
            if installment.is_past_due(today) && installment.status == InstallmentStatus::Pending {
                installment.status = InstallmentStatus::Overdue;
                flagged += 1;
            }
        }
        flagged
    }
}
