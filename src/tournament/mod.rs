pub mod report;
pub use report::*;

pub mod sampling;
pub use sampling::*;

pub mod tournament;
pub use tournament::*;

use crate::Error;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Run every strategy for `num_trials` independent trials from an OS-seeded
/// random source, optionally tracing each decision round to stdout.
pub fn run_all_strategies(num_trials: usize, verbose: bool) -> Result<Report, Error> {
    Tournament::new(num_trials)
        .verbose(verbose)
        .run(&mut SmallRng::from_rng(&mut rand::rng()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PRIZES;
    use crate::strategy::Kind;

    #[test]
    fn averages_stay_within_prize_range() {
        let report = run_all_strategies(crate::DEFAULT_TRIALS, false).unwrap();
        assert_eq!(report.trials(), 100);
        for kind in Kind::ALL {
            assert!(report.average(kind) <= PRIZES[PRIZES.len() - 1]);
        }
    }
}
