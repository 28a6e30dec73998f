use super::Decision;
use super::Payout;
use crate::format;
use crate::strategy::Strategy;

/// Receives the progress of every game played.
///
/// Only decision rounds are mandatory; game start and settlement default to
/// no-ops.
pub trait Observer {
    /// A game for `strategy` is about to open its first box.
    fn begin(&mut self, _simulation: usize, _strategy: &Strategy) {}
    fn observe(&mut self, decision: &Decision);
    /// The game resolved to `payout`, by deal or by opening the last box.
    fn settle(&mut self, _simulation: usize, _strategy: &Strategy, _payout: &Payout) {}
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Observer for Silent {
    fn observe(&mut self, _: &Decision) {}
}

/// Prints a header per game, one trace line per decision round, and the
/// opened box when no offer was accepted.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tracer;

impl Tracer {
    pub fn header(simulation: usize, strategy: &Strategy) -> String {
        format!("\n=== Simulation {}, Strategy: {} ===", simulation, strategy)
    }
    /// Settlement line, present only for games that ended without a deal.
    pub fn fallback(payout: &Payout) -> Option<String> {
        match payout {
            Payout::Deal(_) => None,
            Payout::Opened(amount) => Some(format!(
                "At the end of the game, one of the remaining boxes was chosen: {}",
                format::price_decimal(*amount as crate::Utility)
            )),
        }
    }
}

impl Observer for Tracer {
    fn begin(&mut self, simulation: usize, strategy: &Strategy) {
        println!("{}", Self::header(simulation, strategy));
    }
    fn observe(&mut self, decision: &Decision) {
        println!("{}", decision);
    }
    fn settle(&mut self, _: usize, _: &Strategy, payout: &Payout) {
        if let Some(line) = Self::fallback(payout) {
            println!("{}", line);
        }
    }
}

/// Keeps decisions for later inspection.
impl Observer for Vec<Decision> {
    fn observe(&mut self, decision: &Decision) {
        self.push(decision.clone());
    }
}
