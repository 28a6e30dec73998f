use super::Report;
use super::Sampling;
use crate::ALPHAS;
use crate::Error;
use crate::Utility;
use crate::game::Game;
use crate::game::Observer;
use crate::game::Schedule;
use crate::game::Silent;
use crate::game::Tracer;
use crate::strategy::Alpha;
use crate::strategy::Kind;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Runs every strategy over many trials and totals what each one pays out.
///
/// Trial `i` plays with risk appetite `ALPHAS[i % ALPHAS.len()]`. Each strategy
/// gets its own game per trial; see [`Sampling`] for whether those games share
/// their random stream.
#[derive(Debug, Clone, Copy)]
pub struct Tournament {
    trials: usize,
    verbose: bool,
    sampling: Sampling,
    schedule: Schedule,
}

impl Tournament {
    pub fn new(trials: usize) -> Self {
        Self {
            trials,
            verbose: false,
            sampling: Sampling::default(),
            schedule: Schedule::default(),
        }
    }
    /// Print a trace line for every decision round.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
    pub fn sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }
    pub fn schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn run(&self, rng: &mut impl rand::Rng) -> Result<Report, Error> {
        if self.verbose {
            self.observe(rng, &mut Tracer)
        } else {
            self.observe(rng, &mut Silent)
        }
    }

    /// Run all trials, reporting every decision round to `observer`.
    /// The first failing game aborts the run.
    pub fn observe(
        &self,
        rng: &mut impl rand::Rng,
        observer: &mut impl Observer,
    ) -> Result<Report, Error> {
        if self.trials == 0 {
            return Err(Error::invalid("trials", 0 as Utility));
        }
        log::info!(
            "{:<32}{:<32}",
            "running tournament",
            format!("{} trials, {} sampling", self.trials, self.sampling)
        );
        let mut report = Report::new(self.trials);
        let checkpoint = (self.trials / 10).max(1);
        for trial in 0..self.trials {
            let alpha = Alpha::try_from(ALPHAS[trial % ALPHAS.len()])?;
            let seed = match self.sampling {
                Sampling::Paired => Some(rng.random::<u64>()),
                Sampling::Independent => None,
            };
            for kind in Kind::ALL {
                let game = Game::new(kind.with(alpha), alpha)
                    .schedule(self.schedule)
                    .simulation(trial + 1);
                let payout = match seed {
                    Some(seed) => game.play(&mut SmallRng::seed_from_u64(seed), observer)?,
                    None => game.play(rng, observer)?,
                };
                log::trace!("{:<16}{:<8}{}", kind.name(), trial, payout);
                report.add(kind, payout.value());
            }
            if (trial + 1) % checkpoint == 0 {
                log::debug!("{:<32}{:<32}", "completed trials", trial + 1);
            }
        }
        log::info!(
            "{:<32}{:<32}",
            "cheapest strategy",
            report.cheapest().map(|k| k.name()).unwrap_or("none")
        );
        Ok(report)
    }
}
