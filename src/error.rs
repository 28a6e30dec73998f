use crate::Utility;

/// Failures that abort a simulation run.
///
/// Neither variant is retried: a game that fails is a defect in its inputs or
/// its schedule, and skipping it would bias the aggregate averages.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A risk parameter outside its documented range, or not finite.
    #[error("invalid parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: Utility },
    /// A statistic or draw was requested from an empty set of boxes.
    #[error("depleted pool: no boxes remain to {context}")]
    DepletedPool { context: &'static str },
}

impl Error {
    pub fn invalid(name: &'static str, value: Utility) -> Self {
        Self::InvalidParameter { name, value }
    }
    pub fn depleted(context: &'static str) -> Self {
        Self::DepletedPool { context }
    }
}
