use crate::Error;
use crate::Utility;

/// Per-trial risk appetite in `[0, 1)`.
///
/// Scales the Dynamic and Smart Hybrid offers and discounts the expected
/// value the acceptance model compares against.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Alpha(Utility);

impl Alpha {
    pub fn get(&self) -> Utility {
        self.0
    }
}

impl TryFrom<Utility> for Alpha {
    type Error = Error;
    fn try_from(value: Utility) -> Result<Self, Self::Error> {
        if value.is_finite() && (0.0..1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::invalid("alpha", value))
        }
    }
}

impl From<Alpha> for Utility {
    fn from(alpha: Alpha) -> Self {
        alpha.0
    }
}

impl std::fmt::Display for Alpha {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}
