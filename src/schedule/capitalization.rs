//! Interest capitalisation over the bridging period.
//!
//! Interest accrues daily at the assessed rate on a 365-day basis and is
//! added to principal at the end of each calendar month, so every month
//! accrues on the previous months' interest as well. Actual day counts are
//! used per month, which makes the total depend on the start month (a window
//! containing 29 February accrues one extra day). Balances that outgrow the
//! `Decimal` range saturate rather than overflow.

use crate::core::arith;
use crate::core::policy::{CAPITALIZATION_MONTHS, DAYS_PER_YEAR};
use crate::schedule::calendar::{month_sequence, YearMonth};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One month of the capitalisation walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalizedMonth {
    pub period: YearMonth,
    pub days: u32,
    pub opening_principal: Decimal,
    pub interest: Decimal,
    pub closing_principal: Decimal,
}

/// The full month-by-month capitalisation of a bridging loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalizationSchedule {
    principal: Decimal,
    assessed_rate: Decimal,
    months: Vec<CapitalizedMonth>,
    total_interest: Decimal,
}

impl CapitalizationSchedule {
    /// Walk the standard capitalisation window from `start`.
    ///
    /// `assessed_rate` is a percentage (7.0 means 7% p.a.).
    pub fn build(principal: Decimal, assessed_rate: Decimal, start: YearMonth) -> Self {
        Self::build_for(principal, assessed_rate, start, CAPITALIZATION_MONTHS)
    }

    fn build_for(
        principal: Decimal,
        assessed_rate: Decimal,
        start: YearMonth,
        month_count: usize,
    ) -> Self {
        let daily_rate = assessed_rate / dec!(100) / DAYS_PER_YEAR;
        let mut balance = principal;
        let mut total_interest = Decimal::ZERO;
        let mut months = Vec::with_capacity(month_count);

        for (period, days) in month_sequence(start, month_count) {
            let interest = arith::mul(arith::mul(balance, daily_rate), Decimal::from(days));
            log::trace!(
                "{}: {} days on {} accrues {}",
                period,
                days,
                balance,
                interest
            );
            let opening_principal = balance;
            total_interest = arith::add(total_interest, interest);
            balance = arith::add(balance, interest);
            months.push(CapitalizedMonth {
                period,
                days,
                opening_principal,
                interest,
                closing_principal: balance,
            });
        }

        Self {
            principal,
            assessed_rate,
            months,
            total_interest,
        }
    }

    pub fn months(&self) -> &[CapitalizedMonth] {
        &self.months
    }

    /// Interest capitalised across the whole window.
    pub fn total_interest(&self) -> Decimal {
        self.total_interest
    }

    /// Principal after the last month's interest has been added.
    pub fn closing_principal(&self) -> Decimal {
        self.months
            .last()
            .map(|m| m.closing_principal)
            .unwrap_or(self.principal)
    }

    pub fn total_days(&self) -> u32 {
        self.months.iter().map(|m| m.days).sum()
    }
}

impl fmt::Display for CapitalizationSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::core::money::{format_currency, format_percent};

        writeln!(f, "=== Capitalised Interest Schedule ===")?;
        writeln!(f, "Principal:     {}", format_currency(self.principal))?;
        writeln!(f, "Assessed rate: {}", format_percent(self.assessed_rate))?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<8} {:>4} {:>18} {:>16} {:>18}",
            "Month", "Days", "Opening", "Interest", "Closing"
        )?;
        for m in &self.months {
            writeln!(
                f,
                "{:<8} {:>4} {:>18} {:>16} {:>18}",
                m.period.to_string(),
                m.days,
                format_currency(m.opening_principal),
                format_currency(m.interest),
                format_currency(m.closing_principal)
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Total interest over {} days: {}",
            self.total_days(),
            format_currency(self.total_interest)
        )
    }
}

/// Capitalised interest on `principal` over the standard window from `start`.
///
/// ```
/// use bridging_calculator::schedule::calendar::YearMonth;
/// use bridging_calculator::schedule::capitalization::capitalized_interest;
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
///
/// let start = YearMonth::new(2026, 1).unwrap();
/// assert_eq!(capitalized_interest(Decimal::ZERO, dec!(7), start), Decimal::ZERO);
/// assert!(capitalized_interest(dec!(680000), dec!(7), start) > dec!(47600));
/// ```
pub fn capitalized_interest(principal: Decimal, assessed_rate: Decimal, start: YearMonth) -> Decimal {
    CapitalizationSchedule::build(principal, assessed_rate, start).total_interest()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_2026() -> YearMonth {
        YearMonth::new(2026, 1).unwrap()
    }

    #[test]
    fn test_first_month_is_simple_interest() {
        let schedule = CapitalizationSchedule::build(dec!(365000), dec!(10), jan_2026());
        let first = &schedule.months()[0];
        // 365000 * 0.10 / 365 * 31, up to the precision of the daily rate
        assert!((first.interest - dec!(3100)).abs() < dec!(0.000001));
        assert_eq!(first.closing_principal, first.opening_principal + first.interest);
        assert_eq!(schedule.months()[1].opening_principal, first.closing_principal);
    }

    #[test]
    fn test_twelve_months_and_balances_chain() {
        let schedule = CapitalizationSchedule::build(dec!(500000), dec!(7.5), jan_2026());
        assert_eq!(schedule.months().len(), CAPITALIZATION_MONTHS);
        assert_eq!(schedule.total_days(), 365);
        for pair in schedule.months().windows(2) {
            assert_eq!(pair[0].closing_principal, pair[1].opening_principal);
        }
        let last = schedule.months().last().unwrap();
        assert_eq!(last.closing_principal, schedule.closing_principal());
    }

    #[test]
    fn test_compounding_beats_simple_interest() {
        let total = capitalized_interest(dec!(680000), dec!(7), jan_2026());
        let simple = dec!(680000) * dec!(0.07);
        assert!(total > simple);
        // Monthly compounding at 7% adds well under 0.5% on top.
        assert!(total < simple * dec!(1.05));
    }

    #[test]
    fn test_zero_rate_or_principal() {
        assert_eq!(capitalized_interest(dec!(680000), Decimal::ZERO, jan_2026()), Decimal::ZERO);
        assert_eq!(capitalized_interest(Decimal::ZERO, dec!(7), jan_2026()), Decimal::ZERO);
    }

    #[test]
    fn test_leap_window_accrues_more() {
        let common = capitalized_interest(dec!(680000), dec!(7), jan_2026());
        let leap = capitalized_interest(dec!(680000), dec!(7), YearMonth::new(2028, 1).unwrap());
        assert!(leap > common);
    }

    #[test]
    fn test_runaway_rate_saturates() {
        let schedule = CapitalizationSchedule::build(dec!(680000), dec!(1000001), jan_2026());
        assert_eq!(schedule.months().len(), CAPITALIZATION_MONTHS);
        assert_eq!(schedule.total_interest(), Decimal::MAX);
        assert_eq!(schedule.closing_principal(), Decimal::MAX);
    }

    #[test]
    fn test_display_lists_every_month() {
        let schedule = CapitalizationSchedule::build(dec!(100000), dec!(7), jan_2026());
        let text = schedule.to_string();
        assert!(text.contains("2026-01"));
        assert!(text.contains("2026-12"));
        assert!(text.contains("Total interest over 365 days"));
    }
}
