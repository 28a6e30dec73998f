pub mod decision;
pub use decision::*;

pub mod game;
pub use game::*;

pub mod observer;
pub use observer::*;

pub mod payout;
pub use payout::*;

pub mod schedule;
pub use schedule::*;
