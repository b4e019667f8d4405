//! Scenario files: a bridging scenario saved as JSON.
//!
//! ```json
//! {
//!   "selling_price": "800,000",
//!   "current_mortgage": 300000,
//!   "contract_price": "900000",
//!   "stamp_duty": "45000",
//!   "sundry_costs": "5000",
//!   "current_funds": "50000",
//!   "interest_rate": "6.0",
//!   "additional_loan": "100000"
//! }
//! ```
//!
//! Amounts may be strings or numbers and go through the same normalisation
//! as typed input, so a malformed amount reads as zero rather than failing.

use crate::core::inputs::{CalculatorInputs, InputField};
use crate::core::money::parse_amount;
use crate::core::overrides::OverrideState;
use crate::error::CalculatorError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// An amount as written in a scenario file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountText {
    Number(serde_json::Number),
    Text(String),
}

impl AmountText {
    /// The amount as a `Decimal`. Text goes through [`parse_amount`]; JSON
    /// numbers are converted directly, exponent forms included.
    pub fn value(&self) -> Decimal {
        match self {
            AmountText::Number(n) => number_value(n),
            AmountText::Text(s) => parse_amount(s),
        }
    }
}

fn number_value(n: &serde_json::Number) -> Decimal {
    let text = n.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
        .or_else(|| n.as_f64().and_then(Decimal::from_f64_retain))
        .unwrap_or_else(|| {
            log::warn!("number {} out of range, reading as zero", text);
            Decimal::ZERO
        })
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
    #[serde(default)]
    pub selling_price: Option<AmountText>,
    #[serde(default)]
    pub current_mortgage: Option<AmountText>,
    #[serde(default)]
    pub contract_price: Option<AmountText>,
    #[serde(default)]
    pub stamp_duty: Option<AmountText>,
    #[serde(default)]
    pub sundry_costs: Option<AmountText>,
    #[serde(default)]
    pub current_funds: Option<AmountText>,
    #[serde(default)]
    pub interest_rate: Option<AmountText>,
    /// Confirmed additional new loan.
    #[serde(default)]
    pub additional_loan: Option<AmountText>,
    /// Self-entered capitalised interest.
    #[serde(default)]
    pub capitalized_interest: Option<AmountText>,
}

impl ScenarioFile {
    pub fn from_json(json: &str) -> Result<Self, CalculatorError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CalculatorError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CalculatorError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    fn field(&self, field: InputField) -> Option<&AmountText> {
        match field {
            InputField::SellingPrice => self.selling_price.as_ref(),
            InputField::CurrentMortgage => self.current_mortgage.as_ref(),
            InputField::ContractPrice => self.contract_price.as_ref(),
            InputField::StampDuty => self.stamp_duty.as_ref(),
            InputField::SundryCosts => self.sundry_costs.as_ref(),
            InputField::CurrentFunds => self.current_funds.as_ref(),
            InputField::InterestRate => self.interest_rate.as_ref(),
        }
    }

    pub fn inputs(&self) -> CalculatorInputs {
        let mut inputs = CalculatorInputs::default();
        for field in InputField::ALL {
            if let Some(amount) = self.field(field) {
                inputs.set(field, amount.value());
            }
        }
        inputs
    }

    pub fn overrides(&self) -> OverrideState {
        let mut overrides = OverrideState::new();
        if let Some(loan) = &self.additional_loan {
            overrides.confirm_additional_loan(loan.value());
        }
        if let Some(icap) = &self.capitalized_interest {
            overrides.pin_icap(icap.value());
        }
        overrides
    }
}
