use super::Alpha;
use crate::Error;
use crate::Utility;

/// Aggressiveness in `(0, 1]`, used only by the Aggressive strategy.
///
/// Derived from [`Alpha`] by a decreasing step function: the more risk a
/// player tolerates, the closer to the floor their Aggressive offer sits.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Beta(Utility);

impl Beta {
    /// Step thresholds on alpha and the beta each band maps to.
    const STEPS: [(Utility, Utility); 3] = [(0.3, 0.50), (0.5, 0.40), (0.7, 0.30)];
    const FLOOR: Utility = 0.20;

    pub fn get(&self) -> Utility {
        self.0
    }
}

impl From<Alpha> for Beta {
    fn from(alpha: Alpha) -> Self {
        Self(
            Self::STEPS
                .iter()
                .find(|(threshold, _)| alpha.get() < *threshold)
                .map(|(_, beta)| *beta)
                .unwrap_or(Self::FLOOR),
        )
    }
}

impl TryFrom<Utility> for Beta {
    type Error = Error;
    fn try_from(value: Utility) -> Result<Self, Self::Error> {
        if value.is_finite() && value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(Error::invalid("beta", value))
        }
    }
}

impl std::fmt::Display for Beta {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beta(alpha: Utility) -> Utility {
        Beta::from(Alpha::try_from(alpha).unwrap()).get()
    }

    #[test]
    fn step_boundaries() {
        assert_eq!(beta(0.0), 0.50);
        assert_eq!(beta(0.2999), 0.50);
        assert_eq!(beta(0.3), 0.40);
        assert_eq!(beta(0.4999), 0.40);
        assert_eq!(beta(0.5), 0.30);
        assert_eq!(beta(0.6999), 0.30);
        assert_eq!(beta(0.7), 0.20);
        assert_eq!(beta(0.9999), 0.20);
    }

    #[test]
    fn decreasing_in_alpha() {
        let betas = (0..100).map(|i| beta(i as Utility / 100.0)).collect::<Vec<_>>();
        assert!(betas.windows(2).all(|w| w[0] >= w[1]));
        assert!(betas.iter().all(|b| [0.50, 0.40, 0.30, 0.20].contains(b)));
    }

    #[test]
    fn validates_explicit_values() {
        assert!(Beta::try_from(1.0).is_ok());
        assert!(Beta::try_from(0.0).is_err());
        assert!(Beta::try_from(1.01).is_err());
        assert!(Beta::try_from(Utility::NAN).is_err());
    }
}
