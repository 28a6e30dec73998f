use super::Alpha;
use super::Beta;
use super::Strategy;

/// The five offer strategies, without their parameters.
///
/// Ordering follows [`Kind::ALL`], which is also the order reports list them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Simple,
    Expected,
    Dynamic,
    Aggressive,
    Hybrid,
}

impl Kind {
    pub const ALL: [Self; 5] = [
        Self::Simple,
        Self::Expected,
        Self::Dynamic,
        Self::Aggressive,
        Self::Hybrid,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Expected => "Expected Value",
            Self::Dynamic => "Dynamic",
            Self::Aggressive => "Aggressive",
            Self::Hybrid => "Smart Hybrid",
        }
    }

    /// Attach the parameters this kind needs for one trial.
    pub fn with(&self, alpha: Alpha) -> Strategy {
        match self {
            Self::Simple => Strategy::Simple,
            Self::Expected => Strategy::Expected,
            Self::Dynamic => Strategy::Dynamic(alpha),
            Self::Aggressive => Strategy::Aggressive(Beta::from(alpha)),
            Self::Hybrid => Strategy::Hybrid(alpha),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.name())
    }
}
