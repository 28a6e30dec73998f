use crate::Money;

/// How a single game resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Payout {
    /// An offer was accepted at a decision round.
    Deal(Money),
    /// No offer was accepted, so the last box was opened.
    Opened(Money),
}

impl Payout {
    pub fn value(&self) -> Money {
        match self {
            Self::Deal(amount) | Self::Opened(amount) => *amount,
        }
    }
    pub fn is_deal(&self) -> bool {
        matches!(self, Self::Deal(_))
    }
}

impl std::fmt::Display for Payout {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Deal(amount) => write!(f, "DEAL {}", crate::format::price(*amount)),
            Self::Opened(amount) => write!(f, "OPEN {}", crate::format::price(*amount)),
        }
    }
}
