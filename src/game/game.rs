use super::Decision;
use super::Observer;
use super::Payout;
use super::Schedule;
use crate::Error;
use crate::Money;
use crate::Utility;
use crate::acceptance;
use crate::chance::Chance;
use crate::pool::Remaining;
use crate::strategy::Alpha;
use crate::strategy::Offer;
use crate::strategy::Strategy;

/// One playthrough of the box-opening game under a fixed strategy.
///
/// The game itself performs no I/O. Every decision round is reported to the
/// [`Observer`] passed to [`Game::play`], and every random draw comes from the
/// injected [`Chance`].
#[derive(Debug, Clone, Copy)]
pub struct Game {
    strategy: Strategy,
    alpha: Alpha,
    schedule: Schedule,
    simulation: usize,
}

impl Game {
    pub fn new(strategy: Strategy, alpha: Alpha) -> Self {
        Self {
            strategy,
            alpha,
            schedule: Schedule::default(),
            simulation: 1,
        }
    }
    pub fn schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }
    /// One-based trial number reported to the observer.
    pub fn simulation(mut self, simulation: usize) -> Self {
        self.simulation = simulation;
        self
    }

    /// Play to completion.
    ///
    /// Opens the scheduled number of boxes, then counts the remaining boxes
    /// down to one, opening one box per round after the first. An accepted
    /// offer ends the game immediately. Otherwise one of the boxes left at the
    /// end is paid out.
    pub fn play(
        &self,
        chance: &mut impl Chance,
        observer: &mut impl Observer,
    ) -> Result<Payout, Error> {
        observer.begin(self.simulation, &self.strategy);
        let payout = self.resolve(chance, observer)?;
        observer.settle(self.simulation, &self.strategy, &payout);
        Ok(payout)
    }

    fn resolve(
        &self,
        chance: &mut impl Chance,
        observer: &mut impl Observer,
    ) -> Result<Payout, Error> {
        let mut remaining = Remaining::default();
        for _ in 0..self.schedule.opening() {
            remaining.reveal(chance)?;
        }
        let start = remaining.len();
        for boxes in (1..=start).rev() {
            if boxes < start {
                remaining.reveal(chance)?;
            }
            if self.schedule.decides(boxes) {
                if let Some(offer) = self.decide(boxes, &remaining, chance, observer)? {
                    return Ok(Payout::Deal(offer));
                }
            }
        }
        remaining.draw(chance).map(Payout::Opened)
    }

    /// Compute, test and report one offer. Returns the offer if accepted.
    fn decide(
        &self,
        boxes: usize,
        remaining: &Remaining,
        chance: &mut impl Chance,
        observer: &mut impl Observer,
    ) -> Result<Option<Money>, Error> {
        let expected = remaining.mean()?;
        let offer = self.strategy.bid(remaining)?;
        let probability = acceptance::probability(offer as Utility, expected, self.alpha);
        let accepted = chance.unit() < probability;
        observer.observe(&Decision {
            simulation: self.simulation,
            strategy: self.strategy,
            alpha: self.alpha,
            boxes,
            remaining: remaining.sorted(),
            expected,
            offer,
            probability,
            accepted,
        });
        if accepted {
            log::debug!(
                "{:<16}{:<16}{}",
                self.strategy.kind().name(),
                format!("deal at {}", boxes),
                offer
            );
        }
        Ok(accepted.then_some(offer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PRIZES;
    use crate::Probability;
    use crate::game::Silent;
    use crate::strategy::Kind;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::VecDeque;

    /// Replays fixed indices and unit draws, then falls back to 0.
    struct Script {
        indices: VecDeque<usize>,
        units: VecDeque<Probability>,
    }

    impl Chance for Script {
        fn index(&mut self, _: usize) -> usize {
            self.indices.pop_front().unwrap_or(0)
        }
        fn unit(&mut self) -> Probability {
            self.units.pop_front().unwrap_or(0.0)
        }
    }

    /// Indices that open every prize except `keep`.
    fn reveals_keeping(keep: &[Money]) -> VecDeque<usize> {
        let mut pool = PRIZES.to_vec();
        let mut indices = VecDeque::new();
        while pool.len() > keep.len() {
            let i = pool.iter().position(|v| !keep.contains(v)).unwrap();
            pool.remove(i);
            indices.push_back(i);
        }
        indices
    }

    fn alpha(a: Utility) -> Alpha {
        Alpha::try_from(a).unwrap()
    }

    /// Records every observer callback in order.
    #[derive(Default)]
    struct Journal(Vec<String>);

    impl Observer for Journal {
        fn begin(&mut self, simulation: usize, strategy: &Strategy) {
            self.0.push(format!("begin {} {}", simulation, strategy));
        }
        fn observe(&mut self, decision: &Decision) {
            self.0.push(format!("decide {} {}", decision.simulation, decision.boxes));
        }
        fn settle(&mut self, simulation: usize, _: &Strategy, payout: &Payout) {
            self.0.push(format!("settle {} {:?}", simulation, payout));
        }
    }

    #[test]
    fn observer_sees_start_rounds_and_settlement() {
        let ref mut script = Script {
            indices: VecDeque::new(),
            units: VecDeque::from([0.99, 0.99]),
        };
        let ref mut journal = Journal::default();
        Game::new(Strategy::Dynamic(alpha(0.0)), alpha(0.0))
            .simulation(3)
            .play(script, journal)
            .unwrap();
        assert_eq!(
            journal.0,
            vec![
                "begin 3 Dynamic",
                "decide 3 5",
                "decide 3 2",
                "settle 3 Opened(1000000)",
            ]
        );
    }

    #[test]
    fn observer_settles_deals_too() {
        let ref mut script = Script {
            indices: reveals_keeping(&[10, 100, 1_000, 10_000, 100_000]),
            units: VecDeque::from([0.5]),
        };
        let ref mut journal = Journal::default();
        Game::new(Strategy::Expected, alpha(0.5))
            .play(script, journal)
            .unwrap();
        assert_eq!(
            journal.0,
            vec![
                "begin 1 Expected Value",
                "decide 1 5",
                "settle 1 Deal(22222)",
            ]
        );
    }

    #[test]
    fn forced_five_box_round_accepts_expected_value() {
        let keep: [Money; 5] = [10, 100, 1_000, 10_000, 100_000];
        let ref mut script = Script {
            indices: reveals_keeping(&keep),
            units: VecDeque::from([0.5]),
        };
        let ref mut decisions = Vec::<Decision>::new();
        let payout = Game::new(Strategy::Expected, alpha(0.5))
            .play(script, decisions)
            .unwrap();
        assert_eq!(payout, Payout::Deal(22_222));
        assert_eq!(decisions.len(), 1);
        let decision = &decisions[0];
        assert_eq!(decision.boxes, 5);
        assert_eq!(decision.remaining, keep.to_vec());
        assert_eq!(decision.expected, 22_222.0);
        assert_eq!(decision.offer, 22_222);
        assert_eq!(decision.probability, 1.0);
        assert!(decision.accepted);
    }

    #[test]
    fn rejected_offers_open_the_last_box() {
        // alpha = 0 makes Dynamic bid 0 against a discounted expectation of 0
        let ref mut script = Script {
            indices: VecDeque::new(),
            units: VecDeque::from([0.99, 0.99]),
        };
        let ref mut decisions = Vec::<Decision>::new();
        let payout = Game::new(Strategy::Dynamic(alpha(0.0)), alpha(0.0))
            .play(script, decisions)
            .unwrap();
        assert_eq!(payout, Payout::Opened(1_000_000));
        assert_eq!(
            decisions.iter().map(|d| d.boxes).collect::<Vec<_>>(),
            vec![5, 2]
        );
        assert!(decisions.iter().all(|d| d.probability == 0.5 && !d.accepted));
        assert_eq!(decisions[1].remaining, vec![750_000, 1_000_000]);
    }

    #[test]
    fn opened_payouts_come_from_the_pool() {
        for seed in 0..2_000 {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let a = alpha((seed % 100) as Utility / 100.0);
            let strategy = Kind::ALL[seed as usize % Kind::ALL.len()].with(a);
            let ref mut decisions = Vec::<Decision>::new();
            let payout = Game::new(strategy, a).play(rng, decisions).unwrap();
            assert_eq!(payout.is_deal(), decisions.iter().any(|d| d.accepted));
            match payout {
                Payout::Opened(value) => {
                    assert!(PRIZES.contains(&value));
                    assert!(decisions.iter().all(|d| !d.accepted));
                }
                Payout::Deal(offer) => {
                    let last = decisions.last().unwrap();
                    assert!(last.accepted);
                    assert_eq!(last.offer, offer);
                }
            }
        }
    }

    #[test]
    fn seeded_games_repeat() {
        let game = Game::new(Strategy::Hybrid(alpha(0.42)), alpha(0.42));
        for seed in 0..64 {
            let play = || {
                let ref mut rng = SmallRng::seed_from_u64(seed);
                game.play(rng, &mut Silent).unwrap()
            };
            assert_eq!(play(), play());
        }
    }

    #[test]
    fn over_scheduled_opening_depletes_pool() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let all = Game::new(Strategy::Simple, alpha(0.5)).schedule(Schedule::new(26, &[5, 2]));
        assert!(matches!(
            all.play(rng, &mut Silent),
            Err(Error::DepletedPool { .. })
        ));
        let more = Game::new(Strategy::Simple, alpha(0.5)).schedule(Schedule::new(27, &[5, 2]));
        assert!(matches!(
            more.play(rng, &mut Silent),
            Err(Error::DepletedPool { .. })
        ));
    }
}
