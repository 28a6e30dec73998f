pub mod alpha;
pub use alpha::*;

pub mod beta;
pub use beta::*;

pub mod kind;
pub use kind::*;

pub mod strategy;
pub use strategy::*;
