//! bridging-calculator CLI
//!
//! Work through a bridging loan scenario from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Panels and narrative for a scenario
//! bridging-calculator calc --selling-price 800000 --current-mortgage 300000 \
//!     --contract-price 900000 --stamp-duty 45000 --sundry-costs 5000 \
//!     --current-funds 50000 --interest-rate 6.0
//!
//! # Confirm an additional loan and fix the capitalisation start month
//! bridging-calculator calc ... --additional-loan 100000 --start 2026-10
//!
//! # Read the scenario from a file, print JSON
//! bridging-calculator scenario --input scenario.json --format json
//!
//! # Month-by-month capitalised interest
//! bridging-calculator schedule ... --start 2026-10
//! ```
//!
//! Set `RUST_LOG=debug` to trace override handling and the computed figures.

use bridging_calculator::calculator::result::CalculationResult;
use bridging_calculator::calculator::session::CalculatorSession;
use bridging_calculator::core::inputs::{CalculatorInputs, InputField};
use bridging_calculator::core::money::format_currency;
use bridging_calculator::core::overrides::OverrideState;
use bridging_calculator::core::policy::DEFAULT_LENDER;
use bridging_calculator::error::CalculatorError;
use bridging_calculator::report::narrative::{narrative, render_narrative};
use bridging_calculator::report::panels::{inputs_panel, render_panels};
use bridging_calculator::scenario::ScenarioFile;
use bridging_calculator::schedule::calendar::YearMonth;
use bridging_calculator::schedule::capitalization::CapitalizationSchedule;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(
    name = "bridging-calculator",
    version,
    about = "Bridging loan calculator: peak debt, capitalised interest, LVR and end debt"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    format: OutputFormat,

    /// First month of the capitalisation window (YYYY-MM); defaults to this month
    #[arg(long, global = true)]
    start: Option<String>,

    /// Lender named in the narrative
    #[arg(long, default_value = DEFAULT_LENDER, global = true)]
    lender: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a scenario given on the command line
    Calc(ScenarioArgs),
    /// Compute a scenario read from a JSON file
    Scenario {
        /// Path to the scenario JSON file
        #[arg(long)]
        input: PathBuf,
    },
    /// Show the month-by-month capitalised interest
    Schedule(ScenarioArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Amounts are read like the form fields: `$800,000` and `800000` are equal,
/// anything unparseable counts as zero.
#[derive(Args)]
struct ScenarioArgs {
    /// Value of the property being sold
    #[arg(long, default_value = "0")]
    selling_price: String,
    /// Mortgage outstanding on the property being sold
    #[arg(long, default_value = "0")]
    current_mortgage: String,
    /// Contract price of the new property
    #[arg(long, default_value = "0")]
    contract_price: String,
    #[arg(long, default_value = "0")]
    stamp_duty: String,
    #[arg(long, default_value = "0")]
    sundry_costs: String,
    /// Funds the borrower contributes
    #[arg(long, default_value = "0")]
    current_funds: String,
    /// Interest rate in percent, e.g. 6.5
    #[arg(long, default_value = "0")]
    interest_rate: String,
    /// Confirm an additional new loan (capped at the max bridging loan)
    #[arg(long)]
    additional_loan: Option<String>,
    /// Use this capitalised interest instead of the calculated one
    #[arg(long)]
    icap: Option<String>,
}

impl ScenarioArgs {
    fn text(&self, field: InputField) -> &str {
        match field {
            InputField::SellingPrice => self.selling_price.as_str(),
            InputField::CurrentMortgage => self.current_mortgage.as_str(),
            InputField::ContractPrice => self.contract_price.as_str(),
            InputField::StampDuty => self.stamp_duty.as_str(),
            InputField::SundryCosts => self.sundry_costs.as_str(),
            InputField::CurrentFunds => self.current_funds.as_str(),
            InputField::InterestRate => self.interest_rate.as_str(),
        }
    }

    fn session(&self, start: YearMonth) -> CalculatorSession {
        let mut session = CalculatorSession::new(start);
        for field in InputField::ALL {
            session.set_input(field, self.text(field));
        }
        if let Some(loan) = &self.additional_loan {
            session.confirm_additional_loan(loan);
        }
        if let Some(icap) = &self.icap {
            session.commit_icap(icap);
        }
        session
    }
}

#[derive(serde::Serialize)]
struct ReportOutput<'a> {
    inputs: &'a CalculatorInputs,
    overrides: &'a OverrideState,
    result: &'a CalculationResult,
    narrative: Vec<String>,
}

fn print_report(
    session: &CalculatorSession,
    format: OutputFormat,
    lender: &str,
) -> Result<(), CalculatorError> {
    let result = session.calculate();
    match format {
        OutputFormat::Json => {
            let output = ReportOutput {
                inputs: session.inputs(),
                overrides: session.overrides(),
                result: &result,
                narrative: narrative(&result, lender),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            println!("{}", inputs_panel(session.inputs()));
            println!("{}", render_panels(&result));
            println!("=== How It Works ===");
            println!("{}", render_narrative(&result, lender));
        }
    }
    Ok(())
}

fn print_schedule(session: &CalculatorSession, format: OutputFormat) -> Result<(), CalculatorError> {
    let result = session.calculate();
    let schedule = CapitalizationSchedule::build(
        result.final_bridging_loan,
        result.assessed_rate,
        session.start(),
    );
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&schedule)?),
        OutputFormat::Text => {
            print!("{}", schedule);
            if result.icap_source.is_self_entered() {
                println!(
                    "Note: capitalised interest is self entered as {}; the schedule shows the calculated value.",
                    format_currency(result.capitalized_interest)
                );
            }
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CalculatorError> {
    let start = match &cli.start {
        Some(text) => text.parse::<YearMonth>()?,
        None => YearMonth::current(),
    };
    log::debug!("capitalisation window starts {}", start);

    match &cli.command {
        Commands::Calc(args) => print_report(&args.session(start), cli.format, &cli.lender),
        Commands::Scenario { input } => {
            let file = ScenarioFile::load(input)?;
            let session =
                CalculatorSession::with_inputs(file.inputs(), start).with_overrides(file.overrides());
            print_report(&session, cli.format, &cli.lender)
        }
        Commands::Schedule(args) => print_schedule(&args.session(start), cli.format),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
