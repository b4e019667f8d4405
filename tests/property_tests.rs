use bridging_calculator::calculator::engine::BridgingCalculator;
use bridging_calculator::calculator::session::CalculatorSession;
use bridging_calculator::core::inputs::{CalculatorInputs, InputField};
use bridging_calculator::core::overrides::OverrideState;
use bridging_calculator::schedule::calendar::YearMonth;
use bridging_calculator::schedule::capitalization::capitalized_interest;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Whole-dollar amount up to 5,000,000.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0u64..5_000_000u64).prop_map(Decimal::from)
}

/// Rate between 0.00% and 19.99%.
fn arb_rate() -> impl Strategy<Value = Decimal> {
    (0i64..2000i64).prop_map(|bp| Decimal::new(bp, 2))
}

fn arb_start() -> impl Strategy<Value = YearMonth> {
    (2000i32..2100i32, 1u32..=12u32).prop_map(|(y, m)| YearMonth::new(y, m).unwrap())
}

fn arb_inputs() -> impl Strategy<Value = CalculatorInputs> {
    (
        arb_amount(),
        arb_amount(),
        arb_amount(),
        arb_amount(),
        arb_amount(),
        arb_amount(),
        arb_rate(),
    )
        .prop_map(
            |(selling, mortgage, contract, duty, sundry, funds, rate)| CalculatorInputs {
                selling_price: selling,
                current_mortgage: mortgage,
                contract_price: contract,
                stamp_duty: duty,
                sundry_costs: sundry,
                current_funds: funds,
                interest_rate_percent: rate,
            },
        )
}

fn arb_overrides() -> impl Strategy<Value = OverrideState> {
    (
        any::<bool>(),
        arb_amount(),
        any::<bool>(),
        (0u64..20_000_000u64).prop_map(Decimal::from),
    )
        .prop_map(|(icap_on, icap, loan_on, loan)| OverrideState {
            icap_override_active: icap_on,
            icap_override_value: icap,
            additional_loan_override_active: loan_on,
            additional_loan_override_value: loan,
        })
}

proptest! {
    // Funds required is the purchase costs plus the mortgage payout.
    #[test]
    fn total_funds_is_sum(inputs in arb_inputs(), start in arb_start()) {
        let r = BridgingCalculator::compute(&inputs, &OverrideState::new(), start);
        prop_assert_eq!(r.total_funds_required, r.funds_for_new_purchase + inputs.current_mortgage);
    }

    // Bridging loan is capped by 85% of the sale value and by funds required.
    #[test]
    fn max_bridging_is_lower_of_caps(inputs in arb_inputs(), start in arb_start()) {
        let r = BridgingCalculator::compute(&inputs, &OverrideState::new(), start);
        let cap = inputs.selling_price * dec!(0.85);
        prop_assert_eq!(r.max_bridging_loan, cap.min(r.total_funds_required));
    }

    // Additional loan stays within [0, max bridging loan] whatever was entered.
    #[test]
    fn additional_loan_within_bounds(
        inputs in arb_inputs(),
        overrides in arb_overrides(),
        start in arb_start(),
    ) {
        let r = BridgingCalculator::compute(&inputs, &overrides, start);
        prop_assert!(r.additional_new_loan >= Decimal::ZERO);
        prop_assert!(r.additional_new_loan <= r.max_bridging_loan);
        prop_assert_eq!(
            BridgingCalculator::clamp_additional_loan(r.additional_new_loan, r.max_bridging_loan),
            r.additional_new_loan
        );
        prop_assert!(r.final_bridging_loan >= Decimal::ZERO);
    }

    // More principal never means less capitalised interest.
    #[test]
    fn interest_monotone_in_principal(
        a in arb_amount(),
        b in arb_amount(),
        rate in arb_rate(),
        start in arb_start(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(capitalized_interest(lo, rate, start) <= capitalized_interest(hi, rate, start));
    }

    // A higher rate never means less capitalised interest.
    #[test]
    fn interest_monotone_in_rate(
        principal in arb_amount(),
        a in arb_rate(),
        b in arb_rate(),
        start in arb_start(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            capitalized_interest(principal, lo, start) <= capitalized_interest(principal, hi, start)
        );
    }

    // Pinning and then resetting ICAP restores the calculated value exactly.
    #[test]
    fn icap_pin_reset_round_trip(
        inputs in arb_inputs(),
        pinned in arb_amount(),
        start in arb_start(),
    ) {
        let mut session = CalculatorSession::with_inputs(inputs, start);
        let before = session.calculate();
        session.commit_icap(&pinned.to_string());
        let after = session.reset_icap();
        prop_assert_eq!(before.capitalized_interest, after.capitalized_interest);
        prop_assert_eq!(before, after);
    }

    // Breach flag, extra funds and the 80% threshold always agree.
    #[test]
    fn lvr_breach_consistent(
        inputs in arb_inputs(),
        overrides in arb_overrides(),
        start in arb_start(),
    ) {
        let r = BridgingCalculator::compute(&inputs, &overrides, start);
        prop_assert_eq!(r.lvr_breached, r.peak_lvr_percent > dec!(80));
        match r.extra_funds_needed {
            Some(extra) => {
                prop_assert!(r.lvr_breached);
                prop_assert_eq!(extra, r.total_peak_debt - r.peak_security * dec!(0.8));
            }
            None => prop_assert!(!r.lvr_breached),
        }
    }

    // Editing any base field after overrides were set deactivates them.
    #[test]
    fn base_edit_resets_overrides(
        inputs in arb_inputs(),
        icap in arb_amount(),
        loan in arb_amount(),
        field_idx in 0usize..7,
        text in "[0-9]{0,7}",
        start in arb_start(),
    ) {
        let mut session = CalculatorSession::with_inputs(inputs, start);
        session.commit_icap(&icap.to_string());
        session.confirm_additional_loan(&loan.to_string());
        session.set_input(InputField::ALL[field_idx], &text);
        prop_assert!(!session.overrides().icap_override_active);
        prop_assert!(!session.overrides().additional_loan_override_active);
    }

    // No end security means an end LVR of zero, never a division fault.
    #[test]
    fn zero_end_security_gives_zero_lvr(
        mut inputs in arb_inputs(),
        overrides in arb_overrides(),
        start in arb_start(),
    ) {
        inputs.contract_price = Decimal::ZERO;
        let r = BridgingCalculator::compute(&inputs, &overrides, start);
        prop_assert_eq!(r.end_security, Decimal::ZERO);
        prop_assert_eq!(r.end_lvr_percent, Decimal::ZERO);
    }

    // Same inputs, same start month, same result.
    #[test]
    fn compute_is_deterministic(
        inputs in arb_inputs(),
        overrides in arb_overrides(),
        start in arb_start(),
    ) {
        let a = BridgingCalculator::compute(&inputs, &overrides, start);
        let b = BridgingCalculator::compute(&inputs, &overrides, start);
        prop_assert_eq!(a, b);
    }

    // Any run of digits a user can type is accepted, however large.
    #[test]
    fn oversized_text_never_panics(
        texts in proptest::collection::vec("[0-9]{1,29}(\\.[0-9]{1,4})?", 7),
        start in arb_start(),
    ) {
        let mut session = CalculatorSession::new(start);
        let mut r = session.calculate();
        for (field, text) in InputField::ALL.into_iter().zip(&texts) {
            r = session.set_input(field, text);
        }
        prop_assert!(r.max_bridging_loan <= r.total_funds_required);
        prop_assert!(r.capitalized_interest >= Decimal::ZERO);
        prop_assert!(r.final_bridging_loan >= Decimal::ZERO);
    }
}
