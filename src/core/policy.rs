//! Fixed policy constants of the bridging loan product.
//!
//! The calculator models exactly one product; these values are not
//! user-configurable.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Share of the existing property's value that may be lent as bridging finance.
pub const BRIDGING_CAP_RATIO: Decimal = dec!(0.85);

/// Maximum loan-to-value ratio (in percent) allowed on peak and end debt.
pub const LVR_LIMIT_PERCENT: Decimal = dec!(80);

/// `LVR_LIMIT_PERCENT` as a ratio, used to size the extra contribution.
pub const LVR_LIMIT_RATIO: Decimal = dec!(0.8);

/// Number of calendar months of interest capitalised onto peak debt.
pub const CAPITALIZATION_MONTHS: usize = 12;

/// Percentage points added to the entered rate when assessing interest.
pub const ASSESSMENT_MARGIN: Decimal = dec!(1.0);

/// Day-count basis for the daily interest rate.
pub const DAYS_PER_YEAR: Decimal = dec!(365);

/// Lender named in the narrative when the caller doesn't supply one.
pub const DEFAULT_LENDER: &str = "SGB";
