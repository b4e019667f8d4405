//! Session state between recalculations.
//!
//! The session is the single writer of [`OverrideState`]. Every mutator
//! recomputes and returns the full result, so a caller can re-render after
//! any event without tracking what changed.

use crate::calculator::engine::BridgingCalculator;
use crate::calculator::result::CalculationResult;
use crate::core::inputs::{CalculatorInputs, InputField};
use crate::core::money::{group_digits, parse_amount};
use crate::core::overrides::OverrideState;
use crate::schedule::calendar::YearMonth;
use std::collections::BTreeMap;

/// One user's calculator session.
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    start: YearMonth,
    field_text: BTreeMap<InputField, String>,
    inputs: CalculatorInputs,
    overrides: OverrideState,
}

impl CalculatorSession {
    /// Empty session whose capitalisation window starts at `start`.
    pub fn new(start: YearMonth) -> Self {
        Self {
            start,
            field_text: BTreeMap::new(),
            inputs: CalculatorInputs::default(),
            overrides: OverrideState::new(),
        }
    }

    /// Session pre-filled with already-parsed inputs.
    pub fn with_inputs(inputs: CalculatorInputs, start: YearMonth) -> Self {
        let mut session = Self::new(start);
        session.inputs = inputs;
        session
    }

    /// Carry overrides confirmed elsewhere, e.g. loaded from a scenario file.
    pub fn with_overrides(mut self, overrides: OverrideState) -> Self {
        self.overrides = overrides;
        self
    }

    /// Edit a base input.
    ///
    /// The value is read from `text` as typed. Currency fields are shown
    /// regrouped and the rate verbatim. Any confirmed override was made against the previous scenario, so
    /// both are dropped.
    pub fn set_input(&mut self, field: InputField, text: &str) -> CalculationResult {
        let shown = if field.is_currency() {
            group_digits(text)
        } else {
            text.to_string()
        };
        self.inputs.set(field, parse_amount(text));
        self.field_text.insert(field, shown);

        if self.overrides.any_active() {
            log::debug!("{} edited, clearing overrides", field);
        }
        self.overrides.clear();
        self.calculate()
    }

    /// The confirm action on the additional-loan field.
    pub fn confirm_additional_loan(&mut self, text: &str) -> CalculationResult {
        let value = parse_amount(text);
        log::debug!("additional loan confirmed at {}", value);
        self.overrides.confirm_additional_loan(value);
        self.calculate()
    }

    /// The capitalised-interest field lost focus: pin whatever it holds.
    pub fn commit_icap(&mut self, text: &str) -> CalculationResult {
        let value = parse_amount(text);
        log::debug!("capitalised interest pinned at {}", value);
        self.overrides.pin_icap(value);
        self.calculate()
    }

    /// Go back to the calculated capitalised interest.
    pub fn reset_icap(&mut self) -> CalculationResult {
        log::debug!("capitalised interest reset to calculated value");
        self.overrides.reset_icap();
        self.calculate()
    }

    pub fn calculate(&self) -> CalculationResult {
        BridgingCalculator::compute(&self.inputs, &self.overrides, self.start)
    }

    pub fn inputs(&self) -> &CalculatorInputs {
        &self.inputs
    }

    pub fn overrides(&self) -> &OverrideState {
        &self.overrides
    }

    pub fn start(&self) -> YearMonth {
        self.start
    }

    /// Text currently shown in a base field (empty if never edited).
    pub fn field_text(&self, field: InputField) -> &str {
        self.field_text.get(&field).map(String::as_str).unwrap_or("")
    }
}
