use crate::calculator::result::{CalculationResult, IcapSource};
use crate::core::arith;
use crate::core::inputs::CalculatorInputs;
use crate::core::overrides::OverrideState;
use crate::core::policy::{
    ASSESSMENT_MARGIN, BRIDGING_CAP_RATIO, LVR_LIMIT_PERCENT, LVR_LIMIT_RATIO,
};
use crate::schedule::calendar::YearMonth;
use crate::schedule::capitalization::capitalized_interest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The bridging loan calculation.
///
/// Stateless: every call derives the whole scenario from its arguments.
/// Override flags live in [`OverrideState`], owned by the caller.
pub struct BridgingCalculator;

impl BridgingCalculator {
    /// Compute a bridging scenario.
    ///
    /// `start` is the first month of the capitalisation window; callers
    /// normally pass [`YearMonth::current`].
    ///
    /// # Algorithm
    ///
    /// 1. Funds required = new purchase costs + existing mortgage.
    /// 2. Max bridging loan = min(85% of selling price, funds required).
    /// 3. A confirmed additional loan is clamped to `[0, max]` and comes off
    ///    the bridging loan.
    /// 4. Capitalised interest is 12 months of monthly-compounded interest on
    ///    the final bridging loan at the entered rate + 1 point, unless the
    ///    user pinned a value.
    /// 5. Peak and end LVR; a zero security gives a zero ratio.
    ///
    /// Never panics: figures that exceed the `Decimal` range saturate, see
    /// [`arith`].
    pub fn compute(
        inputs: &CalculatorInputs,
        overrides: &OverrideState,
        start: YearMonth,
    ) -> CalculationResult {
        let funds_for_new_purchase = arith::add(
            arith::add(inputs.contract_price, inputs.stamp_duty),
            inputs.sundry_costs,
        );
        let funds_to_pay_off_mortgage = inputs.current_mortgage;
        let total_funds_required = arith::add(funds_for_new_purchase, funds_to_pay_off_mortgage);
        let max_bridging_loan = Self::max_bridging_loan(inputs.selling_price, total_funds_required);
        let peak_debt = arith::sub(total_funds_required, inputs.current_funds);
        let assessed_rate = Self::assessed_rate(inputs.interest_rate_percent);

        let additional_new_loan = Self::clamp_additional_loan(
            overrides.additional_loan().unwrap_or(Decimal::ZERO),
            max_bridging_loan,
        );
        let final_bridging_loan = arith::sub(max_bridging_loan, additional_new_loan).max(Decimal::ZERO);

        let auto_capitalized_interest = capitalized_interest(final_bridging_loan, assessed_rate, start);
        let (capitalized_interest, icap_source) = match overrides.icap() {
            Some(pinned) => (pinned, IcapSource::SelfEntered),
            None => (
                auto_capitalized_interest,
                IcapSource::Calculated { assessed_rate },
            ),
        };

        let total_peak_debt = arith::add(peak_debt, capitalized_interest);
        let peak_security = arith::add(inputs.selling_price, inputs.contract_price);
        let peak_lvr_percent = lvr_percent(total_peak_debt, peak_security);
        let lvr_breached = peak_lvr_percent > LVR_LIMIT_PERCENT;
        let extra_funds_needed = lvr_breached
            .then(|| arith::sub(total_peak_debt, arith::mul(peak_security, LVR_LIMIT_RATIO)));

        let minimum_end_debt = arith::sub(total_peak_debt, max_bridging_loan);
        let total_end_debt = arith::add(minimum_end_debt, additional_new_loan);
        let end_security = inputs.contract_price;
        let end_lvr_percent = lvr_percent(total_end_debt, end_security);
        let minimum_end_lvr_percent = if end_security.is_zero() {
            arith::mul(minimum_end_debt, dec!(100))
        } else {
            arith::mul(arith::div(minimum_end_debt, end_security), dec!(100))
        };

        log::debug!(
            "scenario: max bridging {}, final bridging {}, icap {} ({:?}), peak LVR {}%, end LVR {}%",
            max_bridging_loan,
            final_bridging_loan,
            capitalized_interest,
            icap_source,
            peak_lvr_percent.round_dp(2),
            end_lvr_percent.round_dp(2)
        );

        CalculationResult {
            funds_for_new_purchase,
            funds_to_pay_off_mortgage,
            total_funds_required,
            max_bridging_loan,
            peak_debt,
            assessed_rate,
            additional_new_loan,
            final_bridging_loan,
            capitalized_interest,
            auto_capitalized_interest,
            icap_source,
            capitalization_start: start,
            total_peak_debt,
            peak_security,
            peak_lvr_percent,
            lvr_breached,
            extra_funds_needed,
            minimum_end_debt,
            minimum_end_lvr_percent,
            total_end_debt,
            end_security,
            end_lvr_percent,
            end_lvr_warning: end_lvr_percent > LVR_LIMIT_PERCENT,
        }
    }

    /// Lower of the bridging cap on the existing property and total funds required.
    pub fn max_bridging_loan(selling_price: Decimal, total_funds_required: Decimal) -> Decimal {
        arith::mul(selling_price, BRIDGING_CAP_RATIO).min(total_funds_required)
    }

    /// Entered rate plus the assessment margin.
    pub fn assessed_rate(interest_rate_percent: Decimal) -> Decimal {
        arith::add(interest_rate_percent, ASSESSMENT_MARGIN)
    }

    /// Clamp a requested additional loan into `[0, max_bridging_loan]`.
    ///
    /// Requests above the cap are truncated silently.
    pub fn clamp_additional_loan(requested: Decimal, max_bridging_loan: Decimal) -> Decimal {
        requested.max(Decimal::ZERO).min(max_bridging_loan)
    }
}

fn lvr_percent(debt: Decimal, security: Decimal) -> Decimal {
    if security > Decimal::ZERO {
        arith::mul(arith::div(debt, security), dec!(100))
    } else {
        Decimal::ZERO
    }
}
