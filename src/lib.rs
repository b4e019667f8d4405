//! # bridging-calculator
//!
//! Bridging loan calculator for buying a new property before the current
//! one has sold.
//!
//! Given the sale value of the existing property, the outstanding mortgage,
//! the new purchase costs, the borrower's own funds and an interest rate,
//! the calculator derives peak debt, twelve months of capitalised interest,
//! peak and end loan-to-value ratios and the residual end debt.
//!
//! ## Architecture
//!
//! - **core** — Inputs, overrides, amount parsing/formatting, product policy
//! - **schedule** — Calendar walk and monthly interest capitalisation
//! - **calculator** — The pure computation and the override-owning session
//! - **report** — Summary panels and the narrative explanation
//! - **scenario** — JSON scenario files

pub mod calculator;
pub mod core;
pub mod error;
pub mod report;
pub mod scenario;
pub mod schedule;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::calculator::engine::BridgingCalculator;
    pub use crate::calculator::result::{CalculationResult, IcapSource};
    pub use crate::calculator::session::CalculatorSession;
    pub use crate::core::inputs::{CalculatorInputs, InputField};
    pub use crate::core::overrides::OverrideState;
    pub use crate::error::CalculatorError;
    pub use crate::schedule::calendar::YearMonth;
}
