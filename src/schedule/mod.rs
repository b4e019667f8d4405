//! Calendar walk and interest capitalisation over the bridging period.

pub mod calendar;
pub mod capitalization;
