/// How box reveals are shared between strategies within one trial.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Sampling {
    /// Every strategy plays its own, freshly drawn game.
    #[default]
    Independent,
    /// Every strategy in a trial replays the same seeded random stream, so
    /// all of them see identical reveals and acceptance draws.
    Paired,
}

impl std::fmt::Display for Sampling {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Independent => write!(f, "independent"),
            Self::Paired => write!(f, "paired"),
        }
    }
}
