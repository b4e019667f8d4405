use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Values the user pinned against the currently displayed scenario.
///
/// Each value is only meaningful while its flag is active. Both flags are
/// cleared whenever a base input changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideState {
    pub icap_override_active: bool,
    pub icap_override_value: Decimal,
    pub additional_loan_override_active: bool,
    pub additional_loan_override_value: Decimal,
}

impl OverrideState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the capitalised interest to a user-entered value. Not clamped.
    pub fn with_icap(mut self, value: Decimal) -> Self {
        self.pin_icap(value);
        self
    }

    /// Confirm an additional new loan. Clamping happens at compute time.
    pub fn with_additional_loan(mut self, value: Decimal) -> Self {
        self.confirm_additional_loan(value);
        self
    }

    pub fn pin_icap(&mut self, value: Decimal) {
        self.icap_override_active = true;
        self.icap_override_value = value;
    }

    pub fn reset_icap(&mut self) {
        self.icap_override_active = false;
    }

    pub fn confirm_additional_loan(&mut self, value: Decimal) {
        self.additional_loan_override_active = true;
        self.additional_loan_override_value = value;
    }

    /// Drop both overrides.
    pub fn clear(&mut self) {
        self.icap_override_active = false;
        self.additional_loan_override_active = false;
    }

    /// Active capitalised-interest override, if any.
    pub fn icap(&self) -> Option<Decimal> {
        self.icap_override_active.then_some(self.icap_override_value)
    }

    /// Active additional-loan override, if any (unclamped).
    pub fn additional_loan(&self) -> Option<Decimal> {
        self.additional_loan_override_active
            .then_some(self.additional_loan_override_value)
    }

    pub fn any_active(&self) -> bool {
        self.icap_override_active || self.additional_loan_override_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_inactive_values_are_hidden() {
        let mut state = OverrideState::new().with_icap(dec!(5000));
        assert_eq!(state.icap(), Some(dec!(5000)));
        state.reset_icap();
        assert_eq!(state.icap(), None);
        assert_eq!(state.additional_loan(), None);
    }

    #[test]
    fn test_clear_drops_both() {
        let mut state = OverrideState::new()
            .with_icap(dec!(1))
            .with_additional_loan(dec!(2));
        assert!(state.any_active());
        state.clear();
        assert!(!state.any_active());
    }
}
