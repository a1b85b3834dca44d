//! Sequence generation pipeline
//!
//! Parameters flow strictly forward through four stages:
//! bucket initialization, Euclidean distribution, rotation, and (in ping-pong
//! mode) mirroring. Nothing is retained between calls.

mod bucket;
mod distributor;
mod mirror;
mod rotate;


pub use bucket::{initialize, Bucket};
pub use distributor::distribute;
pub use mirror::mirror_extend;
pub use rotate::rotate;

use crate::types::{Distribution, PatternParams, Sequence};
use tracing::debug;

/// Generate the sequence for `params` with the default (Bjorklund) distribution
pub fn generate(params: &PatternParams) -> Sequence {
    generate_with(params, Distribution::default())
}

/// Generate the sequence for `params` with an explicit distribution strategy
pub fn generate_with(params: &PatternParams, distribution: Distribution) -> Sequence {
    let (hits, beats) = (params.hits(), params.beats());

    let buckets = initialize(hits, beats);
    let flat = distribute(buckets, hits, beats, distribution);
    let rotated = rotate(flat, params.offset(), beats);
    let sequence = if params.ping_pong() {
        mirror_extend(rotated, beats)
    } else {
        rotated
    };
    debug_assert_eq!(sequence.len(), params.output_len());

    debug!(%params, %distribution, grid = %sequence.to_grid(), "generated sequence");
    sequence
}

/// Clamp raw host values into range, then generate
pub fn generate_raw(hits: i64, beats: i64, offset: i64, ping_pong: bool) -> Sequence {
    generate(&PatternParams::new(hits, beats, offset, ping_pong))
}
