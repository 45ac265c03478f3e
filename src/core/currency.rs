use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies with their decimal precision rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar (2 decimal places)
    #[default]
    USD,
    /// Malaysian Ringgit (2 decimal places)
    MYR,
    /// Indonesian Rupiah (no decimal places)
    IDR,
}

impl Currency {
    /// Returns the decimal scale for this currency
    /// - IDR: 0 (no decimals)
    /// - USD/MYR: 2 (2 decimal places)
    pub fn scale(&self) -> u32 {
        match self {
            Currency::IDR => 0,
            Currency::USD | Currency::MYR => 2,
        }
    }

    /// Rounds a decimal value to the appropriate scale for this currency
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp(self.scale())
    }

    /// Rounds and pads to exactly the currency scale (250 -> 250.00 for USD)
    pub fn normalize(&self, amount: Decimal) -> Decimal {
        let mut rounded = self.round(amount);
        rounded.rescale(self.scale());
        rounded
    }

    /// Validates that a decimal value has the correct scale for this currency
    pub fn validate_amount(&self, amount: Decimal) -> Result<(), String> {
        let scale = amount.normalize().scale();
        let expected_scale = self.scale();

        if scale > expected_scale {
            return Err(format!(
                "{} amounts must have at most {} decimal places, got {}",
                self, expected_scale, scale
            ));
        }

        if amount < Decimal::ZERO {
            return Err(format!("{} amount cannot be negative", self));
        }

        Ok(())
    }

    /// Display symbol used in traveler-facing text
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::MYR => "RM",
            Currency::IDR => "Rp",
        }
    }

    /// Formats an amount the way the booking screens show it: symbol,
    /// thousands separators, and the currency's fixed number of decimals.
    ///
    /// `Currency::USD.format_amount(dec!(1200))` gives `"$1,200.00"`.
    pub fn format_amount(&self, amount: Decimal) -> String {
        let rounded = self.round(amount.abs());
        let text = format!("{:.width$}", rounded, width = self.scale() as usize);
        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (text.as_str(), None),
        };

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if amount < Decimal::ZERO && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        match fraction {
            Some(fraction) => format!("{}{}{}.{}", sign, self.symbol(), grouped, fraction),
            None => format!("{}{}{}", sign, self.symbol(), grouped),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::USD => write!(f, "USD"),
            Currency::MYR => write!(f, "MYR"),
            Currency::IDR => write!(f, "IDR"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "MYR" => Ok(Currency::MYR),
            "IDR" => Ok(Currency::IDR),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}
