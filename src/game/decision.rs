use crate::Money;
use crate::Probability;
use crate::Utility;
use crate::format;
use crate::strategy::Alpha;
use crate::strategy::Strategy;

/// Snapshot of one decision round, handed to an [`super::Observer`].
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub simulation: usize,
    pub strategy: Strategy,
    pub alpha: Alpha,
    pub boxes: usize,
    /// Unopened values, ascending.
    pub remaining: Vec<Money>,
    pub expected: Utility,
    pub offer: Money,
    pub probability: Probability,
    pub accepted: bool,
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let remaining = self
            .remaining
            .iter()
            .map(|v| format::price(*v))
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "sim {:<6} {:<16} boxes {} [{}] alpha {}",
            self.simulation, self.strategy, self.boxes, remaining, self.alpha
        )?;
        if let Some(beta) = self.strategy.beta() {
            write!(f, " beta {}", beta)?;
        }
        write!(
            f,
            " E {} offer {} P(accept) {:.2}% {}",
            format::price_decimal(self.expected),
            format::price(self.offer),
            self.probability * 100.0,
            if self.accepted { "ACCEPT" } else { "REJECT" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Beta;

    fn decision(strategy: Strategy) -> Decision {
        Decision {
            simulation: 7,
            strategy,
            alpha: Alpha::try_from(0.5).unwrap(),
            boxes: 5,
            remaining: vec![10, 100, 1_000, 10_000, 100_000],
            expected: 22_222.0,
            offer: 22_222,
            probability: 1.0,
            accepted: true,
        }
    }

    #[test]
    fn trace_line_fields() {
        let line = decision(Strategy::Expected).to_string();
        assert!(line.contains("Expected Value"));
        assert!(line.contains("[10 TL, 100 TL, 1,000 TL, 10,000 TL, 100,000 TL]"));
        assert!(line.contains("alpha 0.500"));
        assert!(line.contains("E 22,222.00 TL"));
        assert!(line.contains("offer 22,222 TL"));
        assert!(line.contains("P(accept) 100.00%"));
        assert!(line.ends_with("ACCEPT"));
        assert!(!line.contains("beta"));
    }

    #[test]
    fn beta_only_for_aggressive() {
        let beta = Beta::try_from(0.3).unwrap();
        let line = decision(Strategy::Aggressive(beta)).to_string();
        assert!(line.contains("beta 0.300"));
    }
}
