use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Settlement status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementStatus {
    /// Recorded by the payer, not yet acknowledged
    Pending,
    /// Acknowledged by the payee
    Confirmed,
    /// Money has changed hands; counts toward balances
    Completed,
}

impl SettlementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Confirmed => 1,
            Self::Completed => 2,
        }
    }
}

impl std::fmt::Display for SettlementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A peer-to-peer payment that offsets shared trip expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub id: String,
    pub from_user_id: String,
    pub to_user_id: String,
    pub amount: Decimal,
    pub description: String,
    pub date: DateTime<Utc>,
    pub status: SettlementStatus,
    /// Expense ids this settlement pays down
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_expenses: Vec<String>,
}

impl Settlement {
    pub fn involves(&self, user_id: &str) -> bool {
        self.from_user_id == user_id || self.to_user_id == user_id
    }

    /// True when the settlement is between `a` and `b`, in either direction
    pub fn is_between(&self, a: &str, b: &str) -> bool {
        (self.from_user_id == a && self.to_user_id == b)
            || (self.from_user_id == b && self.to_user_id == a)
    }

    pub fn is_completed(&self) -> bool {
        self.status == SettlementStatus::Completed
    }

    /// Move to `next`. Status only moves forward:
    /// pending -> confirmed -> completed, or pending -> completed.
    ///
    /// The service stores no settlements, so whoever holds the record drives
    /// these transitions and resubmits it for balance calculations.
    pub fn advance(&mut self, next: SettlementStatus) -> Result<()> {
        if next.rank() <= self.status.rank() {
            return Err(AppError::validation(format!(
                "Settlement {} cannot move from {} to {}",
                self.id, self.status, next
            )));
        }

        self.status = next;
        Ok(())
    }

    pub fn confirm(&mut self) -> Result<()> {
        self.advance(SettlementStatus::Confirmed)
    }

    pub fn complete(&mut self) -> Result<()> {
        self.advance(SettlementStatus::Completed)
    }
}

/// What a user submits from the "Settle up" dialog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementRequest {
    pub from_user_id: String,
    pub to_user_id: String,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SettlementRequest {
    /// Invariants every stored settlement must satisfy
    pub fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(AppError::validation(
                "Settlement amount must be greater than 0",
            ));
        }

        if self.from_user_id == self.to_user_id {
            return Err(AppError::validation("Cannot settle with yourself"));
        }

        Ok(())
    }
}

/// A participant's standing within a community trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBalance {
    pub user_id: String,
    pub name: String,
    /// Positive: the group owes this user. Negative: this user owes the group.
    pub gross_balance: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tips_received: Option<Decimal>,
    #[serde(default)]
    pub settlements: Vec<Settlement>,
    /// `gross_balance` after completed settlements; derived, never entered
    #[serde(default)]
    pub net_balance: Decimal,
}
