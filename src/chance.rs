use crate::Probability;

/// Source of every random draw a game makes.
///
/// Any [`rand::Rng`] is a `Chance`. Tests substitute scripted sources to force
/// particular reveals and acceptance draws.
pub trait Chance {
    /// Uniform index in `0..n`. Callers guarantee `n > 0`.
    fn index(&mut self, n: usize) -> usize;
    /// Uniform draw in `[0, 1)`.
    fn unit(&mut self) -> Probability;
}

impl<R> Chance for R
where
    R: rand::Rng,
{
    fn index(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }
    fn unit(&mut self) -> Probability {
        self.random::<Probability>()
    }
}
