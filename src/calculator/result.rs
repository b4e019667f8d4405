use crate::core::money::{format_currency, format_percent};
use crate::schedule::calendar::YearMonth;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the capitalised interest figure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum IcapSource {
    /// Computed by the 12-month walk at the assessed rate (percent).
    Calculated { assessed_rate: Decimal },
    /// Typed in by the user and accepted as-is.
    SelfEntered,
}

impl IcapSource {
    /// Caption shown under the capitalised interest field.
    pub fn caption(&self) -> String {
        match self {
            IcapSource::Calculated { assessed_rate } => format!(
                "(Calculated at assessed rate of {})",
                format_percent(*assessed_rate)
            ),
            IcapSource::SelfEntered => "(Self Entered)".to_string(),
        }
    }

    pub fn is_self_entered(&self) -> bool {
        matches!(self, IcapSource::SelfEntered)
    }
}

/// Every quantity derived for one bridging scenario.
///
/// Produced by [`BridgingCalculator::compute`](crate::calculator::engine::BridgingCalculator::compute);
/// has no lifecycle of its own and is rebuilt on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Contract price plus stamp duty and sundry costs.
    pub funds_for_new_purchase: Decimal,
    /// Existing mortgage to be paid out.
    pub funds_to_pay_off_mortgage: Decimal,
    pub total_funds_required: Decimal,
    /// Lower of 85% of the existing property's value and total funds required.
    pub max_bridging_loan: Decimal,
    /// Total funds required less the borrower's own funds.
    pub peak_debt: Decimal,
    /// Entered rate plus the assessment margin, in percent.
    pub assessed_rate: Decimal,
    /// Confirmed additional new loan, clamped to `[0, max_bridging_loan]`.
    pub additional_new_loan: Decimal,
    pub final_bridging_loan: Decimal,
    /// Capitalised interest in effect (user value when self entered).
    pub capitalized_interest: Decimal,
    /// The calculated value, kept even while a user value is in effect.
    pub auto_capitalized_interest: Decimal,
    pub icap_source: IcapSource,
    /// First month of the capitalisation window.
    pub capitalization_start: YearMonth,
    pub total_peak_debt: Decimal,
    pub peak_security: Decimal,
    pub peak_lvr_percent: Decimal,
    pub lvr_breached: bool,
    /// Contribution that brings peak LVR back to the limit; only when breached.
    pub extra_funds_needed: Option<Decimal>,
    pub minimum_end_debt: Decimal,
    /// Minimum end debt over end security, with a zero security read as 1.
    pub minimum_end_lvr_percent: Decimal,
    pub total_end_debt: Decimal,
    pub end_security: Decimal,
    pub end_lvr_percent: Decimal,
    /// End LVR above the limit. Display only; nothing is clamped.
    pub end_lvr_warning: bool,
}

impl CalculationResult {
    pub fn has_additional_loan(&self) -> bool {
        self.additional_new_loan > Decimal::ZERO
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Bridging Scenario ===")?;
        writeln!(f, "Total Funds Required: {}", format_currency(self.total_funds_required))?;
        writeln!(f, "Max Bridging Loan:    {}", format_currency(self.max_bridging_loan))?;
        writeln!(f, "Final Bridging Loan:  {}", format_currency(self.final_bridging_loan))?;
        writeln!(
            f,
            "Capitalised Interest: {} {}",
            format_currency(self.capitalized_interest),
            self.icap_source.caption()
        )?;
        writeln!(f, "Total Peak Debt:      {}", format_currency(self.total_peak_debt))?;
        writeln!(f, "Peak LVR:             {}", format_percent(self.peak_lvr_percent))?;
        writeln!(f, "Total End Debt:       {}", format_currency(self.total_end_debt))?;
        writeln!(f, "End LVR:              {}", format_percent(self.end_lvr_percent))?;
        if let Some(extra) = self.extra_funds_needed {
            writeln!(f, "Extra Funds Needed:   {}", format_currency(extra))?;
        }
        Ok(())
    }
}
