//! Jokenpo domain: moves, outcomes and the decision rule.
//!
//! Everything here is pure; no HTTP or database types leak in.

mod moves;
mod rules;

pub use moves::{Move, ParseMoveError};
pub use rules::{decide, Outcome, ParseOutcomeError, Verdict};

#[cfg(test)]
mod tests_props_rules;
#[cfg(test)]
mod tests_rules;
