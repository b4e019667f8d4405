//! Saturating `Decimal` arithmetic.
//!
//! Amounts and rates are user-entered and unbounded, so the calculation
//! can exceed what a `Decimal` represents (about 7.9e28). Instead of
//! panicking, results pin to `Decimal::MAX` / `Decimal::MIN` and a warning
//! is logged.

use rust_decimal::Decimal;

fn saturate(op: &str, positive: bool) -> Decimal {
    log::warn!("{} overflowed, saturating", op);
    if positive {
        Decimal::MAX
    } else {
        Decimal::MIN
    }
}

pub fn add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b)
        .unwrap_or_else(|| saturate("addition", a.is_sign_positive()))
}

pub fn sub(a: Decimal, b: Decimal) -> Decimal {
    a.checked_sub(b)
        .unwrap_or_else(|| saturate("subtraction", a.is_sign_positive()))
}

pub fn mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or_else(|| {
        saturate(
            "multiplication",
            a.is_sign_positive() == b.is_sign_positive(),
        )
    })
}

/// Divide by a non-zero `b`. A zero divisor yields zero.
pub fn div(a: Decimal, b: Decimal) -> Decimal {
    if b.is_zero() {
        return Decimal::ZERO;
    }
    a.checked_div(b).unwrap_or_else(|| {
        saturate("division", a.is_sign_positive() == b.is_sign_positive())
    })
}
