use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Currency, Result};
use crate::modules::payments::models::{AgentBranding, Installment, InstallmentStatus};

/// Traveler details printed on a receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
}

/// Render the plain-text receipt for a paid installment.
///
/// Receipts are only issued once money has actually moved, so pending and
/// overdue installments are rejected.
pub fn generate_receipt(
    installment: &Installment,
    agent: &AgentBranding,
    customer: &CustomerInfo,
    issued_on: NaiveDate,
    currency: Currency,
) -> Result<String> {
    if installment.status != InstallmentStatus::Paid {
        return Err(AppError::validation(format!(
            "Receipts are only issued for paid installments; {} is {}",
            installment.description, installment.status
        )));
    }

    let receipt = format!(
        "PAYMENT RECEIPT\n\
         ===============\n\
         \n\
         {business}\n\
         {contact}\n\
         \n\
         Customer: {customer}\n\
         Email: {email}\n\
         Date: {date}\n\
         \n\
         Payment Details:\n\
         {description}\n\
         Amount: {amount}\n\
         Status: {status}\n\
         \n\
         Thank you for your payment!",
        business = agent.business_name,
        contact = agent.contact_info,
        customer = customer.name,
        email = customer.email,
        date = issued_on.format("%-m/%-d/%Y"),
        description = installment.description,
        amount = currency.format_amount(installment.amount),
        status = installment.status.as_str().to_uppercase(),
    );

    Ok(receipt)
}
