//! Logistic acceptance model.
//!
//! `P(accept) = 1 / (1 + exp(-k (B - αE)))` where `B` is the rounded offer,
//! `E` the mean of the remaining boxes and `α` the trial's risk appetite.
//! Offers above the risk-discounted expectation are taken almost surely,
//! offers far below it almost never.
use crate::EXPONENT_LIMIT;
use crate::Probability;
use crate::STEEPNESS;
use crate::Utility;
use crate::strategy::Alpha;

/// Acceptance probability at the default steepness.
pub fn probability(offer: Utility, expected: Utility, alpha: Alpha) -> Probability {
    logistic(offer, expected, alpha, STEEPNESS)
}

/// Acceptance probability at steepness `k`.
/// Exponents beyond `±EXPONENT_LIMIT` saturate to exactly 0 or 1.
pub fn logistic(offer: Utility, expected: Utility, alpha: Alpha, k: Utility) -> Probability {
    let exponent = -k * (offer - alpha.get() * expected);
    if exponent > EXPONENT_LIMIT {
        0.0
    } else if exponent < -EXPONENT_LIMIT {
        1.0
    } else {
        1.0 / (1.0 + exponent.exp())
    }
}
