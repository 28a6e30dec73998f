//! Monte Carlo comparison of offer strategies in a box-opening negotiation game.
//!
//! A game starts from the 26-box [`PRIZES`] pool, reveals most boxes at random,
//! then asks a [`strategy::Strategy`] for an offer at each decision round.
//! A logistic [`acceptance`] model decides whether the offer is taken.
//! The [`tournament`] runs many games per strategy and ranks them by the
//! average payout they cost.
pub mod acceptance;
pub mod chance;
pub mod error;
pub mod format;
pub mod game;
pub mod pool;
pub mod strategy;
pub mod tournament;

pub use error::Error;
pub use tournament::run_all_strategies;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Box values, rounded offers, payouts and running totals.
pub type Money = u64;
/// Means, midpoints and raw (unrounded) offers.
pub type Utility = f64;
/// Acceptance probabilities and uniform draws.
pub type Probability = f64;

// ============================================================================
// PRIZE POOL
// ============================================================================
/// Number of boxes in one game.
pub const BOXES: usize = 26;
/// Box contents, ascending. Every game starts from a copy of this pool.
pub const PRIZES: [Money; BOXES] = [
    1, 10, 50, 100, 250, 500, 750, 1_000, 2_500, 5_000, 7_500, 10_000, 15_000, 20_000, 25_000,
    50_000, 75_000, 100_000, 150_000, 200_000, 250_000, 300_000, 400_000, 500_000, 750_000,
    1_000_000,
];
/// Suffix appended to every currency amount in traces and reports.
pub const CURRENCY: &str = " TL";

// ============================================================================
// GAME SCHEDULE
// ============================================================================
/// Boxes opened at random before the first decision round.
pub const OPENING_REVEALS: usize = 21;
/// Remaining-box counts at which an offer is computed and tested.
pub const DECISION_ROUNDS: [usize; 2] = [5, 2];

// ============================================================================
// ACCEPTANCE MODEL
// ============================================================================
/// Logistic steepness `k` in `1 / (1 + exp(-k (B - αE)))`.
pub const STEEPNESS: Utility = 5.0;
/// Exponent magnitude beyond which the logistic is treated as saturated.
pub const EXPONENT_LIMIT: Utility = 700.0;

// ============================================================================
// TOURNAMENT
// ============================================================================
/// Trials run by the parameterless entry point.
pub const DEFAULT_TRIALS: usize = 100;
/// Cyclic risk-parameter sequence. Trial `i` plays with `ALPHAS[i % 100]`.
pub const ALPHAS: [Utility; 100] = [
    0.74, 0.28, 0.66, 0.41, 0.91, 0.57, 0.37, 0.79, 0.48, 0.25, //
    0.85, 0.72, 0.52, 0.46, 0.29, 0.58, 0.43, 0.93, 0.64, 0.27, //
    0.87, 0.32, 0.76, 0.68, 0.49, 0.35, 0.59, 0.82, 0.24, 0.65, //
    0.31, 0.44, 0.92, 0.39, 0.84, 0.23, 0.73, 0.34, 0.62, 0.77, //
    0.71, 0.38, 0.63, 0.45, 0.33, 0.81, 0.53, 0.36, 0.30, 0.26, //
    0.47, 0.86, 0.22, 0.61, 0.42, 0.55, 0.78, 0.40, 0.54, 0.50, //
    0.83, 0.67, 0.60, 0.20, 0.69, 0.51, 0.80, 0.75, 0.90, 0.21, //
    0.70, 0.56, 0.95, 0.88, 0.66, 0.59, 0.46, 0.35, 0.53, 0.74, //
    0.29, 0.68, 0.43, 0.32, 0.26, 0.91, 0.34, 0.60, 0.22, 0.44, //
    0.40, 0.36, 0.82, 0.48, 0.30, 0.28, 0.63, 0.23, 0.25, 0.38, //
];

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr.
/// The report and the decision trace own stdout, so logs stay out of the way.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
