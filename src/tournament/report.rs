use crate::CURRENCY;
use crate::Money;
use crate::format;
use crate::strategy::Kind;
use std::collections::BTreeMap;

/// Per-strategy payout totals over a fixed number of trials.
///
/// Totals are kept in whole currency units and averages use integer ceiling
/// division, so the displayed average is always exactly `ceil(total / trials)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    trials: usize,
    totals: BTreeMap<Kind, Money>,
}

impl Report {
    const VERDICT: &'static str = "The strategy that minimizes the bank's payment:";

    pub fn new(trials: usize) -> Self {
        Self {
            trials,
            totals: Kind::ALL.iter().map(|k| (*k, 0)).collect(),
        }
    }
    pub fn add(&mut self, kind: Kind, amount: Money) {
        *self.totals.entry(kind).or_default() += amount;
    }
    pub fn trials(&self) -> usize {
        self.trials
    }
    pub fn total(&self, kind: Kind) -> Money {
        self.totals.get(&kind).copied().unwrap_or_default()
    }
    /// Ceiling of the mean payout. Zero for an empty report.
    pub fn average(&self, kind: Kind) -> Money {
        match self.trials {
            0 => 0,
            n => self.total(kind).div_ceil(n as Money),
        }
    }
    /// Strategy with the lowest total payout; the earliest listed wins ties.
    pub fn cheapest(&self) -> Option<Kind> {
        self.totals
            .iter()
            .min_by_key(|(_, total)| **total)
            .map(|(kind, _)| *kind)
    }

    /// Two-column table of strategy names and average payouts.
    pub fn table(&self) -> String {
        let mut table = format!("{:<15} | {:>20}\n", "Strategy", "Average Payment");
        table.push_str(&format!("{}\n", "-".repeat(40)));
        for kind in self.totals.keys() {
            let average = format::money(self.average(*kind));
            table.push_str(&format!(
                "{:<15} | {:>20}{}\n",
                kind.name(),
                average,
                CURRENCY
            ));
        }
        table
    }
    /// Line naming the cheapest strategy.
    pub fn verdict(&self) -> String {
        match self.cheapest() {
            Some(kind) => format!("{} {}", Self::VERDICT, kind),
            None => format!("{} none", Self::VERDICT),
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.table(), self.verdict())
    }
}

#[derive(serde::Serialize)]
struct Row {
    strategy: &'static str,
    total: Money,
    average: Money,
}

#[derive(serde::Serialize)]
struct Summary {
    trials: usize,
    strategies: Vec<Row>,
    cheapest: Option<&'static str>,
}

impl serde::Serialize for Report {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Summary {
            trials: self.trials,
            strategies: self
                .totals
                .keys()
                .map(|k| Row {
                    strategy: k.name(),
                    total: self.total(*k),
                    average: self.average(*k),
                })
                .collect(),
            cheapest: self.cheapest().map(|k| k.name()),
        }
        .serialize(serializer)
    }
}
