// euclid-core/src/types/mod.rs

pub mod distribution;
pub mod params;
pub mod pulse;
pub mod sequence;

pub use distribution::Distribution;
pub use params::{PatternParams, MAX_BEATS, MAX_OFFSET};
pub use pulse::Pulse;
pub use sequence::Sequence;
