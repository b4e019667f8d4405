//! Reference bridging scenario.
//!
//! Sells an $800k home with a $300k mortgage to buy at $900k, and prints
//! the summary panels and the narrative.

use bridging_calculator::calculator::engine::BridgingCalculator;
use bridging_calculator::core::inputs::CalculatorInputs;
use bridging_calculator::core::overrides::OverrideState;
use bridging_calculator::core::policy::DEFAULT_LENDER;
use bridging_calculator::report::narrative::render_narrative;
use bridging_calculator::report::panels::render_panels;
use bridging_calculator::schedule::calendar::YearMonth;
use rust_decimal_macros::dec;

fn main() {
    println!("╔══════════════════════════════════════════════╗");
    println!("║  bridging-calculator: Reference Scenario     ║");
    println!("╚══════════════════════════════════════════════╝\n");

    let inputs = CalculatorInputs {
        selling_price: dec!(800000),
        current_mortgage: dec!(300000),
        contract_price: dec!(900000),
        stamp_duty: dec!(45000),
        sundry_costs: dec!(5000),
        current_funds: dec!(50000),
        interest_rate_percent: dec!(6.0),
    };

    let result = BridgingCalculator::compute(&inputs, &OverrideState::new(), YearMonth::current());

    println!("{}", render_panels(&result));
    println!("━━━ How It Works ━━━\n");
    println!("{}", render_narrative(&result, DEFAULT_LENDER));
}
