use super::Alpha;
use super::Beta;
use super::Kind;
use crate::Error;
use crate::Money;
use crate::Utility;
use crate::pool::Remaining;

/// Anything that can propose a settlement for the boxes still in play.
pub trait Offer {
    /// Raw offer, before rounding.
    fn offer(&self, remaining: &Remaining) -> Result<Utility, Error>;
    /// Offer rounded up to a whole currency unit, as used for acceptance.
    fn bid(&self, remaining: &Remaining) -> Result<Money, Error> {
        Ok(self.offer(remaining)?.ceil() as Money)
    }
}

/// An offer strategy together with exactly the parameters it reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// `(max + min) / 2`
    Simple,
    /// `mean`
    Expected,
    /// `α · mean`. May fall below the minimum remaining value.
    Dynamic(Alpha),
    /// `min + β · (max − min)`
    Aggressive(Beta),
    /// `α · mean + (1 − α) · (max + min) / 2`
    Hybrid(Alpha),
}

impl Strategy {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Simple => Kind::Simple,
            Self::Expected => Kind::Expected,
            Self::Dynamic(_) => Kind::Dynamic,
            Self::Aggressive(_) => Kind::Aggressive,
            Self::Hybrid(_) => Kind::Hybrid,
        }
    }
    /// Beta, for strategies that carry one.
    pub fn beta(&self) -> Option<Beta> {
        match self {
            Self::Aggressive(beta) => Some(*beta),
            _ => None,
        }
    }
}

impl Offer for Strategy {
    fn offer(&self, remaining: &Remaining) -> Result<Utility, Error> {
        match self {
            Self::Simple => remaining.midpoint(),
            Self::Expected => remaining.mean(),
            Self::Dynamic(alpha) => Ok(alpha.get() * remaining.mean()?),
            Self::Aggressive(beta) => {
                let lo = remaining.min()? as Utility;
                let hi = remaining.max()? as Utility;
                Ok(lo + beta.get() * (hi - lo))
            }
            Self::Hybrid(alpha) => {
                let a = alpha.get();
                Ok(a * remaining.mean()? + (1.0 - a) * remaining.midpoint()?)
            }
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.kind().name())
    }
}
