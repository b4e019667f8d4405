//! Plain-language walk through a bridging scenario.

use crate::calculator::result::CalculationResult;
use crate::core::money::{format_currency, format_percent};

/// The ordered steps explaining `result`, naming `lender` where the
/// product is described.
///
/// Two steps are conditional: the LVR step switches to a contribution
/// request when peak LVR is breached, and an extra step appears when an
/// additional new loan has been confirmed.
pub fn narrative(result: &CalculationResult, lender: &str) -> Vec<String> {
    let mut steps = Vec::with_capacity(11);

    steps.push(format!(
        "After the bridging loan is settled, first of all your existing mortgage will be \
         refinanced. {lender} will pay the {} to your existing lender and possess the current \
         property to be later sold as collateral.",
        format_currency(result.funds_to_pay_off_mortgage)
    ));
    steps.push(format!(
        "Total funds required initially is {} which covers your current mortgage plus the \
         purchase price of new property along with stamp duty and fees.",
        format_currency(result.peak_debt)
    ));
    steps.push(format!(
        "{lender} will calculate 12 months of interest on the bridging loan portion and \
         capitalize it to your peak debt. The capitalized interest is {} in your case.",
        format_currency(result.capitalized_interest)
    ));

    match result.extra_funds_needed {
        Some(extra) => steps.push(format!(
            "The maximum LVR allowed by {lender} on peak debt is 80%, so you will need to \
             contribute {} to get the final peak LVR at 80.00%.",
            format_currency(extra)
        )),
        None => steps.push(format!(
            "The maximum LVR allowed by {lender} on peak debt is 80%. Your peak LVR is {} \
             which is within {lender}'s policy requirement.",
            format_percent(result.peak_lvr_percent)
        )),
    }

    steps.push(
        "Once the purchase settles, you will have 12 months of bridging period within which \
         you will need to sell the current property."
            .to_string(),
    );
    steps.push(
        "Since the interest amount for 12 months is already capitalized to the peak debt, you \
         are not required to pay any interest up until the first 12 months or till the current \
         property is sold, whichever occurs first."
            .to_string(),
    );
    steps.push(format!(
        "The 85% of your current property's valuation is considered as the maximum bridging \
         loan amount which is {} in your case. The 15% is considered as a buffer for any \
         fluctuation on the sale price.",
        format_currency(result.max_bridging_loan)
    ));
    steps.push(format!(
        "Once the property is sold, the amount equaling to the bridging loan i.e, {} will be \
         used to pay off the peak debt. Any sale proceed over the bridging loan amount will be \
         available to you.",
        format_currency(result.final_bridging_loan)
    ));
    steps.push(format!(
        "So after paying the peak debt down by {}, your end debt will be {}. This is the \
         minimum end debt amount, and your end LVR will be {}.",
        format_currency(result.max_bridging_loan),
        format_currency(result.minimum_end_debt),
        format_percent(result.minimum_end_lvr_percent)
    ));

    if result.has_additional_loan() {
        steps.push(format!(
            "If your borrowing capacity allows, you can increase your end debt by {} such that \
             the total end debt becomes {} at an end LVR of {}. This also reduces your bridging \
             loan amount meaning you will retain the additional amount from the net sale \
             proceeds of your property.",
            format_currency(result.additional_new_loan),
            format_currency(result.total_end_debt),
            format_percent(result.end_lvr_percent)
        ));
    }

    steps.push(format!(
        "So your final end debt will be {} and you will start paying P&I repayments on this \
         amount moving forward.",
        format_currency(result.total_end_debt)
    ));

    steps
}

/// Numbered text rendering of [`narrative`].
pub fn render_narrative(result: &CalculationResult, lender: &str) -> String {
    narrative(result, lender)
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{:>2}. {}", i + 1, step))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::engine::BridgingCalculator;
    use crate::core::inputs::CalculatorInputs;
    use crate::core::overrides::OverrideState;
    use crate::core::policy::DEFAULT_LENDER;
    use crate::schedule::calendar::YearMonth;
    use rust_decimal_macros::dec;

    fn inputs() -> CalculatorInputs {
        CalculatorInputs {
            selling_price: dec!(800000),
            current_mortgage: dec!(300000),
            contract_price: dec!(900000),
            stamp_duty: dec!(45000),
            sundry_costs: dec!(5000),
            current_funds: dec!(50000),
            interest_rate_percent: dec!(6.0),
        }
    }

    fn compute(inputs: &CalculatorInputs, overrides: &OverrideState) -> CalculationResult {
        BridgingCalculator::compute(inputs, overrides, YearMonth::new(2026, 10).unwrap())
    }

    #[test]
    fn test_base_narrative_has_ten_steps() {
        let steps = narrative(&compute(&inputs(), &OverrideState::new()), DEFAULT_LENDER);
        assert_eq!(steps.len(), 10);
        assert!(steps[0].contains("$300,000.00"));
        assert!(steps[1].contains("$1,200,000.00"));
        assert!(steps[3].contains("within SGB's policy requirement"));
        assert!(steps[9].starts_with("So your final end debt"));
    }

    #[test]
    fn test_breach_sentence() {
        let mut breached = inputs();
        breached.selling_price = dec!(100000);
        let r = compute(&breached, &OverrideState::new());
        let extra = r.extra_funds_needed.unwrap();
        let steps = narrative(&r, "Acme Bank");
        assert!(steps[3].contains("you will need to contribute"));
        assert!(steps[3].contains(&format_currency(extra)));
        assert!(steps[3].contains("Acme Bank"));
    }

    #[test]
    fn test_additional_loan_sentence() {
        let r = compute(
            &inputs(),
            &OverrideState::new().with_additional_loan(dec!(100000)),
        );
        let steps = narrative(&r, DEFAULT_LENDER);
        assert_eq!(steps.len(), 11);
        assert!(steps[9].contains("increase your end debt by $100,000.00"));
        assert!(steps[7].contains("$580,000.00"));
    }

    #[test]
    fn test_render_is_numbered() {
        let text = render_narrative(&compute(&inputs(), &OverrideState::new()), "SGB");
        assert!(text.starts_with(" 1. After the bridging loan"));
        assert!(text.contains("10. So your final end debt"));
    }
}
