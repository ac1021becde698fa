pub mod classifier;
pub mod counters;

pub use classifier::*;
pub use counters::*;
