use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::core::{AppError, Clock, Currency, Result};
use crate::modules::tips::models::{Tip, TipRequest};

/// One-tap amounts offered by the tip dialog
pub const PRESET_TIP_AMOUNTS: [u32; 3] = [5, 10, 20];

#[derive(Debug, Clone, Copy, Default)]
pub struct TipService {
    currency: Currency,
}

impl TipService {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    pub fn preset_amounts() -> Vec<Decimal> {
        PRESET_TIP_AMOUNTS.iter().map(|a| Decimal::from(*a)).collect()
    }

    /// Create a tip. Blank messages are dropped.
    pub fn send_tip(&self, request: TipRequest, clock: &dyn Clock) -> Result<Tip> {
        if request.amount <= Decimal::ZERO {
            return Err(AppError::validation("Tip amount must be greater than 0"));
        }

        if request.from.id == request.to.id {
            return Err(AppError::validation("Cannot tip yourself"));
        }

        self.currency
            .validate_amount(request.amount)
            .map_err(AppError::validation)?;

        let tip = Tip {
            id: format!("tip-{}", Uuid::new_v4()),
            amount: self.currency.normalize(request.amount),
            message: request.message.filter(|m| !m.trim().is_empty()),
            from: request.from,
            to: request.to,
            timestamp: clock.now(),
        };

        info!(
            tip_id = tip.id.as_str(),
            from = tip.from.id.as_str(),
            to = tip.to.id.as_str(),
            amount = %tip.amount,
            "Tip sent"
        );

        Ok(tip)
    }

    /// Sum of tips received by `user_id`
    pub fn total_received(tips: &[Tip], user_id: &str) -> Decimal {
        tips.iter()
            .filter(|t| t.to.id == user_id)
            .map(|t| t.amount)
            .sum()
    }

    pub fn format_tip_amount(&self, amount: Decimal) -> String {
        self.currency.format_amount(amount)
    }
}
