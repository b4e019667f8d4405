use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven base inputs of a bridging scenario.
///
/// Editing any of these invalidates confirmed overrides, see
/// [`CalculatorSession`](crate::calculator::session::CalculatorSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    SellingPrice,
    CurrentMortgage,
    ContractPrice,
    StampDuty,
    SundryCosts,
    CurrentFunds,
    InterestRate,
}

impl InputField {
    pub const ALL: [InputField; 7] = [
        InputField::SellingPrice,
        InputField::CurrentMortgage,
        InputField::ContractPrice,
        InputField::StampDuty,
        InputField::SundryCosts,
        InputField::CurrentFunds,
        InputField::InterestRate,
    ];

    /// Stable field identifier, as used by the form.
    pub fn id(&self) -> &'static str {
        match self {
            InputField::SellingPrice => "selling-price",
            InputField::CurrentMortgage => "current-mortgage",
            InputField::ContractPrice => "contract-price",
            InputField::StampDuty => "stamp-duty",
            InputField::SundryCosts => "sundry-costs",
            InputField::CurrentFunds => "current-funds",
            InputField::InterestRate => "interest-rate",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            InputField::SellingPrice => "Current Property Value",
            InputField::CurrentMortgage => "Current Mortgage",
            InputField::ContractPrice => "New Property Contract Price",
            InputField::StampDuty => "Stamp Duty",
            InputField::SundryCosts => "Sundry Costs",
            InputField::CurrentFunds => "Current Funds",
            InputField::InterestRate => "Interest Rate (%)",
        }
    }

    /// Currency fields get digit grouping while typing; the rate does not.
    pub fn is_currency(&self) -> bool {
        !matches!(self, InputField::InterestRate)
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// The user-entered scenario, already normalised to numbers.
///
/// All values are non-negative. `interest_rate_percent` is a percentage,
/// so `6.5` means 6.5% p.a.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    pub selling_price: Decimal,
    pub current_mortgage: Decimal,
    pub contract_price: Decimal,
    pub stamp_duty: Decimal,
    pub sundry_costs: Decimal,
    pub current_funds: Decimal,
    pub interest_rate_percent: Decimal,
}

impl CalculatorInputs {
    pub fn get(&self, field: InputField) -> Decimal {
        match field {
            InputField::SellingPrice => self.selling_price,
            InputField::CurrentMortgage => self.current_mortgage,
            InputField::ContractPrice => self.contract_price,
            InputField::StampDuty => self.stamp_duty,
            InputField::SundryCosts => self.sundry_costs,
            InputField::CurrentFunds => self.current_funds,
            InputField::InterestRate => self.interest_rate_percent,
        }
    }

    /// Set a field. Negative values are floored at zero.
    pub fn set(&mut self, field: InputField, value: Decimal) {
        let value = value.max(Decimal::ZERO);
        match field {
            InputField::SellingPrice => self.selling_price = value,
            InputField::CurrentMortgage => self.current_mortgage = value,
            InputField::ContractPrice => self.contract_price = value,
            InputField::StampDuty => self.stamp_duty = value,
            InputField::SundryCosts => self.sundry_costs = value,
            InputField::CurrentFunds => self.current_funds = value,
            InputField::InterestRate => self.interest_rate_percent = value,
        }
    }
}
