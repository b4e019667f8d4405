//! Walk through a session the way the form drives it: type the inputs,
//! pin the capitalised interest, confirm an additional loan, reset, and
//! finally edit a base field, which drops every override.

use bridging_calculator::calculator::result::CalculationResult;
use bridging_calculator::calculator::session::CalculatorSession;
use bridging_calculator::core::inputs::InputField;
use bridging_calculator::core::money::{format_currency, format_percent};
use bridging_calculator::schedule::calendar::YearMonth;

fn summary(step: &str, r: &CalculationResult) {
    println!("━━━ {} ━━━", step);
    println!(
        "  ICAP {:>14} {}",
        format_currency(r.capitalized_interest),
        r.icap_source.caption()
    );
    println!("  Final bridging loan {:>14}", format_currency(r.final_bridging_loan));
    println!("  Additional new loan {:>14}", format_currency(r.additional_new_loan));
    println!(
        "  Peak LVR {:>8}   End LVR {:>8}\n",
        format_percent(r.peak_lvr_percent),
        format_percent(r.end_lvr_percent)
    );
}

fn main() {
    let mut session = CalculatorSession::new(YearMonth::current());
    for (field, text) in [
        (InputField::SellingPrice, "800000"),
        (InputField::CurrentMortgage, "300000"),
        (InputField::ContractPrice, "900000"),
        (InputField::StampDuty, "45000"),
        (InputField::SundryCosts, "5000"),
        (InputField::CurrentFunds, "50000"),
        (InputField::InterestRate, "6.0"),
    ] {
        session.set_input(field, text);
    }
    summary("Calculated", &session.calculate());

    summary("ICAP pinned at 55,000", &session.commit_icap("55,000"));
    summary("Additional loan 150,000", &session.confirm_additional_loan("150,000"));
    summary("ICAP reset", &session.reset_icap());
    summary(
        "Stamp duty edited",
        &session.set_input(InputField::StampDuty, "47,500"),
    );
}
