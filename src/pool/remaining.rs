use crate::Error;
use crate::Money;
use crate::Utility;
use crate::chance::Chance;

/// The unopened boxes of one game.
///
/// Starts as a copy of the prize pool and only ever shrinks. Every statistic
/// fails with [`Error::DepletedPool`] once nothing is left, rather than
/// dividing by zero or reading past the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remaining(Vec<Money>);

impl Remaining {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Remaining values in ascending order, for display.
    pub fn sorted(&self) -> Vec<Money> {
        let mut values = self.0.clone();
        values.sort_unstable();
        values
    }

    /// Open one box chosen uniformly at random and return its value.
    pub fn reveal(&mut self, chance: &mut impl Chance) -> Result<Money, Error> {
        match self.0.len() {
            0 => Err(Error::depleted("reveal")),
            n => Ok(self.0.remove(chance.index(n))),
        }
    }
    /// Pick one remaining value uniformly at random without removing it.
    pub fn draw(&self, chance: &mut impl Chance) -> Result<Money, Error> {
        match self.0.len() {
            0 => Err(Error::depleted("draw")),
            n => Ok(self.0[chance.index(n)]),
        }
    }

    pub fn min(&self) -> Result<Money, Error> {
        self.0.iter().copied().min().ok_or(Error::depleted("take a minimum"))
    }
    pub fn max(&self) -> Result<Money, Error> {
        self.0.iter().copied().max().ok_or(Error::depleted("take a maximum"))
    }
    /// Arithmetic mean, the expected value of opening a random box.
    pub fn mean(&self) -> Result<Utility, Error> {
        match self.0.len() {
            0 => Err(Error::depleted("take a mean")),
            n => Ok(self.0.iter().sum::<Money>() as Utility / n as Utility),
        }
    }
    /// Halfway between the smallest and largest remaining value.
    pub fn midpoint(&self) -> Result<Utility, Error> {
        Ok((self.min()? as Utility + self.max()? as Utility) / 2.0)
    }
}

impl From<&[Money]> for Remaining {
    fn from(values: &[Money]) -> Self {
        Self(values.to_vec())
    }
}

impl From<Vec<Money>> for Remaining {
    fn from(values: Vec<Money>) -> Self {
        Self(values)
    }
}

impl Default for Remaining {
    /// A fresh copy of the full prize pool.
    fn default() -> Self {
        Self::from(&crate::PRIZES[..])
    }
}

impl std::fmt::Display for Remaining {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let values = self
            .sorted()
            .into_iter()
            .map(crate::format::price)
            .collect::<Vec<_>>();
        write!(f, "[{}]", values.join(", "))
    }
}
