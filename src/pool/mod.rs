pub mod remaining;
pub use remaining::*;
