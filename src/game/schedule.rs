use crate::DECISION_ROUNDS;
use crate::OPENING_REVEALS;

/// When boxes are opened and when offers are made.
///
/// `opening` boxes are revealed up front. Afterwards one box is revealed per
/// round, and an offer is tested whenever the remaining count is listed in
/// `decisions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    opening: usize,
    decisions: &'static [usize],
}

impl Schedule {
    pub const fn new(opening: usize, decisions: &'static [usize]) -> Self {
        Self { opening, decisions }
    }
    pub fn opening(&self) -> usize {
        self.opening
    }
    pub fn decisions(&self) -> &'static [usize] {
        self.decisions
    }
    /// Whether an offer is tested with `boxes` still unopened.
    pub fn decides(&self, boxes: usize) -> bool {
        self.decisions.contains(&boxes)
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new(OPENING_REVEALS, &DECISION_ROUNDS)
    }
}
