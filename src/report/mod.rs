//! Text rendering of a computed scenario: the four summary panels and the
//! step-by-step narrative.

pub mod narrative;
pub mod panels;
