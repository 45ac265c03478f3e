use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::{AmountValidation, AppError, Clock, Currency, Result};
use crate::modules::settlements::models::{
    Settlement, SettlementRequest, SettlementStatus, UserBalance,
};

/// Balance arithmetic and bookkeeping for community trip settlements.
///
/// Nothing here keeps state between calls: callers pass the full settlement
/// history every time a balance is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettlementLedger {
    currency: Currency,
}

impl SettlementLedger {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    /// Net balance of `user_id` after completed settlements.
    ///
    /// A settlement the user paid moves their balance up (less debt, or more
    /// owed to them); one they received moves it down. Pending and confirmed
    /// settlements are ignored, as are settlements between other users.
    pub fn net_balance(user_id: &str, gross_balance: Decimal, settlements: &[Settlement]) -> Decimal {
        let adjustment: Decimal = settlements
            .iter()
            .filter(|s| s.is_completed())
            .map(|s| {
                if s.from_user_id == user_id {
                    -s.amount
                } else if s.to_user_id == user_id {
                    s.amount
                } else {
                    Decimal::ZERO
                }
            })
            .sum();

        gross_balance - adjustment
    }

    /// Check a settlement request as the "Settle up" dialog does.
    ///
    /// `user_balance` is the amount the dialog offers to settle; when it is
    /// non-negative the request may not exceed it.
    pub fn validate_request(
        &self,
        request: &SettlementRequest,
        user_balance: Decimal,
    ) -> AmountValidation {
        if let Err(e) = self.check(request) {
            return AmountValidation::rejected(validation_message(&e));
        }

        if user_balance >= Decimal::ZERO && request.amount > user_balance {
            return AmountValidation::rejected(format!(
                "Cannot settle more than what's owed: {}",
                self.currency.format_amount(user_balance.abs())
            ));
        }

        AmountValidation::ok()
    }

    /// Record a settlement the payer has already made. The result is
    /// `completed` and counts toward balances immediately.
    pub fn process_settlement(
        &self,
        request: SettlementRequest,
        clock: &dyn Clock,
    ) -> Result<Settlement> {
        self.record(request, SettlementStatus::Completed, clock)
    }

    /// Record a settlement awaiting confirmation by the payee
    pub fn open_settlement(
        &self,
        request: SettlementRequest,
        clock: &dyn Clock,
    ) -> Result<Settlement> {
        self.record(request, SettlementStatus::Pending, clock)
    }

    fn record(
        &self,
        request: SettlementRequest,
        status: SettlementStatus,
        clock: &dyn Clock,
    ) -> Result<Settlement> {
        if let Err(e) = self.check(&request) {
            warn!(
                from = request.from_user_id.as_str(),
                to = request.to_user_id.as_str(),
                amount = %request.amount,
                "Rejected settlement request: {}",
                e
            );
            return Err(e);
        }

        let description = request
            .description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| {
                format!(
                    "Payment from {} to {}",
                    request.from_user_id, request.to_user_id
                )
            });

        let settlement = Settlement {
            id: format!("settlement-{}", Uuid::new_v4()),
            from_user_id: request.from_user_id,
            to_user_id: request.to_user_id,
            amount: self.currency.normalize(request.amount),
            description,
            date: clock.now(),
            status,
            related_expenses: Vec::new(),
        };

        info!(
            settlement_id = settlement.id.as_str(),
            from = settlement.from_user_id.as_str(),
            to = settlement.to_user_id.as_str(),
            amount = %settlement.amount,
            status = %settlement.status,
            "Recorded settlement"
        );

        Ok(settlement)
    }

    /// Request invariants plus the currency scale, so a stored amount is never
    /// rounded down to zero
    fn check(&self, request: &SettlementRequest) -> Result<()> {
        request.validate()?;
        self.currency
            .validate_amount(request.amount)
            .map_err(AppError::validation)
    }

    /// Settlements the user paid or received, in their original order
    pub fn user_settlements<'a>(settlements: &'a [Settlement], user_id: &str) -> Vec<&'a Settlement> {
        settlements.iter().filter(|s| s.involves(user_id)).collect()
    }

    /// Whether a pending settlement exists between the two users, either direction
    pub fn has_pending_settlements(settlements: &[Settlement], user_a: &str, user_b: &str) -> bool {
        settlements
            .iter()
            .any(|s| s.status == SettlementStatus::Pending && s.is_between(user_a, user_b))
    }

    /// One-line description from the viewpoint of `current_user_id`
    pub fn describe_for(&self, settlement: &Settlement, current_user_id: &str) -> String {
        let amount = self.currency.format_amount(settlement.amount.abs());

        if settlement.from_user_id == current_user_id {
            format!("You paid {}", amount)
        } else if settlement.to_user_id == current_user_id {
            format!("You received {}", amount)
        } else {
            settlement.description.clone()
        }
    }

    /// Recompute every user's settlements and net balance from the full history
    pub fn reconcile(balances: Vec<UserBalance>, settlements: &[Settlement]) -> Vec<UserBalance> {
        balances
            .into_iter()
            .map(|balance| {
                let net_balance =
                    Self::net_balance(&balance.user_id, balance.gross_balance, settlements);
                let own = Self::user_settlements(settlements, &balance.user_id)
                    .into_iter()
                    .cloned()
                    .collect();

                UserBalance {
                    settlements: own,
                    net_balance,
                    ..balance
                }
            })
            .collect()
    }
}

/// Strip the error-kind prefix so the dialog shows the bare message
fn validation_message(error: &AppError) -> String {
    match error {
        AppError::Validation(message) => message.clone(),
        other => other.to_string(),
    }
}
