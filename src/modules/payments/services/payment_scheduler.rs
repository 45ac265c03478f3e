use chrono::{Months, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, info};

use crate::core::{AmountValidation, AppError, Clock, Currency, Result};
use crate::modules::payments::models::{AgentBranding, Installment, PaymentPlan, PaymentTerms};

/// Splits a guided trip price into a deposit plus equal monthly installments
#[derive(Debug, Clone, Copy)]
pub struct PaymentScheduler {
    currency: Currency,
    /// No cap unless configured
    max_term_months: Option<u32>,
}

impl Default for PaymentScheduler {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

impl PaymentScheduler {
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            max_term_months: None,
        }
    }

    pub fn with_max_term(mut self, max_term_months: Option<u32>) -> Self {
        self.max_term_months = max_term_months;
        self
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Compute the payment plan, anchoring monthly due dates to the clock's today
    pub fn compute_schedule_now(
        &self,
        terms: &PaymentTerms,
        agent: AgentBranding,
        clock: &dyn Clock,
    ) -> Result<PaymentPlan> {
        self.compute_schedule(terms, agent, clock.today())
    }

    /// Compute a payment plan.
    ///
    /// The first installment is the initial payment, due upon booking. When a
    /// balance remains, exactly `term_months` installments follow, one month
    /// apart starting one month after `anchor`, on the anchor's day of month
    /// (clamped to the end of shorter months). Each monthly amount is the
    /// remaining balance divided by the term, truncated to the currency scale;
    /// the last installment absorbs the remainder so the plan sums
    /// to the total exactly.
    ///
    /// # Errors
    /// `AppError::Validation` when the initial payment is below the minimum
    /// deposit or exceeds the total, when the term is zero or above a
    /// configured maximum, or when an amount is negative or finer than the
    /// currency allows.
    pub fn compute_schedule(
        &self,
        terms: &PaymentTerms,
        agent: AgentBranding,
        anchor: NaiveDate,
    ) -> Result<PaymentPlan> {
        terms.validate(self.currency, self.max_term_months)?;

        let remaining_balance = terms.remaining_balance();
        let mut installments = Vec::with_capacity(terms.term_months as usize + 1);
        installments.push(Installment::initial(
            self.currency.normalize(terms.initial_payment),
        ));

        if remaining_balance > Decimal::ZERO {
            let amounts = Self::split_evenly(remaining_balance, terms.term_months, self.currency)?;

            for (i, amount) in amounts.into_iter().enumerate() {
                let number = i as u32 + 1;
                let due_date = anchor
                    .checked_add_months(Months::new(number))
                    .ok_or_else(|| AppError::validation("Failed to calculate due date"))?;

                installments.push(Installment::monthly(
                    number,
                    terms.term_months,
                    amount,
                    due_date,
                ));
            }
        }

        let plan = PaymentPlan {
            trip_id: None,
            currency: self.currency,
            total_amount: self.currency.normalize(terms.total_amount),
            minimum_deposit: self.currency.normalize(terms.minimum_deposit),
            initial_payment: self.currency.normalize(terms.initial_payment),
            remaining_balance: self.currency.normalize(remaining_balance),
            term_months: terms.term_months,
            agent,
            installments,
        };

        if plan.scheduled_total() != plan.total_amount {
            return Err(AppError::internal(format!(
                "Installments ({}) do not sum to total amount ({})",
                plan.scheduled_total(),
                plan.total_amount
            )));
        }

        info!(
            total_amount = %plan.total_amount,
            initial_payment = %plan.initial_payment,
            term_months = plan.term_months,
            installments = plan.installments.len(),
            "Computed payment plan"
        );

        Ok(plan)
    }

    /// Equal shares truncated to the currency scale, with the last absorbing
    /// the remainder
    fn split_evenly(total: Decimal, count: u32, currency: Currency) -> Result<Vec<Decimal>> {
        if count == 0 {
            return Err(AppError::validation("Installment count cannot be zero"));
        }

        let count = count as usize;
        // Truncate so the last share can only grow, never go negative
        let mut base_amount = (total / Decimal::from(count))
            .round_dp_with_strategy(currency.scale(), RoundingStrategy::ToZero);
        base_amount.rescale(currency.scale());
        let mut amounts = Vec::with_capacity(count);
        let mut distributed = Decimal::ZERO;

        for i in 0..count {
            let amount = if i == count - 1 {
                currency.normalize(total - distributed)
            } else {
                base_amount
            };

            amounts.push(amount);
            distributed += amount;
        }

        if amounts[count - 1] != base_amount {
            debug!(
                base = %base_amount,
                last = %amounts[count - 1],
                "Last installment absorbed rounding difference"
            );
        }

        Ok(amounts)
    }

    /// Check an initial payment amount the way the calculator form does,
    /// without building a plan
    pub fn validate_payment_amount(
        &self,
        amount: Decimal,
        minimum_deposit: Decimal,
        total_amount: Decimal,
    ) -> AmountValidation {
        if amount < minimum_deposit {
            return AmountValidation::rejected(format!(
                "Minimum payment required: {}",
                self.currency.format_amount(minimum_deposit)
            ));
        }

        if amount > total_amount {
            return AmountValidation::rejected(format!(
                "Payment cannot exceed total amount: {}",
                self.currency.format_amount(total_amount)
            ));
        }

        AmountValidation::ok()
    }
}
