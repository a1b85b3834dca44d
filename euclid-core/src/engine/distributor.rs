//! Euclidean distribution by recursive bucket grouping.
//!
//! Every round counts the buckets that match the last bucket's kind (the
//! remainder) against those that do not (the denominator), then folds
//! remainder buckets taken from the tail into the leading buckets. The
//! multiset of pulses never changes, only their grouping.

use super::bucket::Bucket;
use crate::types::{Distribution, Sequence};
use tracing::trace;

/// Distribute `buckets` and flatten the result into a sequence of `beats` pulses
pub fn distribute(
    buckets: Vec<Bucket>,
    hits: u32,
    beats: u32,
    distribution: Distribution,
) -> Sequence {
    let grouped = match distribution {
        Distribution::Bjorklund => bjorklund(buckets),
        Distribution::Legacy => legacy(buckets, hits, beats),
    };
    debug_assert_eq!(grouped.iter().map(Bucket::size).sum::<usize>(), beats as usize);
    let sequence: Sequence = grouped.into_iter().flat_map(Bucket::into_pulses).collect();
    debug_assert_eq!(sequence.hit_count(), hits as usize);
    sequence
}

/// Remainder/denominator counts for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tally {
    remainder: usize,
    denominator: usize,
}

fn tally(buckets: &[Bucket]) -> Tally {
    let Some(last) = buckets.last() else {
        return Tally {
            remainder: 0,
            denominator: 0,
        };
    };
    let remainder = buckets.iter().filter(|b| *b == last).count();
    Tally {
        remainder,
        denominator: buckets.len() - remainder,
    }
}

/// Fold `zero_sets` tail buckets into each of the first `distributions` buckets
///
/// Tail buckets are consumed highest index first and leave the active set.
fn fold(mut buckets: Vec<Bucket>, distributions: usize, zero_sets: usize) -> Vec<Bucket> {
    let consumed = distributions * zero_sets;
    debug_assert!(distributions + consumed <= buckets.len());

    let mut donors = buckets.split_off(buckets.len() - consumed).into_iter().rev();
    let mut folded = Vec::with_capacity(buckets.len());
    for (i, bucket) in buckets.into_iter().enumerate() {
        if i < distributions {
            folded.push(donors.by_ref().take(zero_sets).fold(bucket, Bucket::absorb));
        } else {
            folded.push(bucket);
        }
    }
    folded
}

/// Canonical Bjorklund grouping
///
/// Stops once every bucket is of one kind or a single remainder bucket is left.
fn bjorklund(buckets: Vec<Bucket>) -> Vec<Bucket> {
    let Tally {
        remainder,
        denominator,
    } = tally(&buckets);
    if denominator == 0 || remainder <= 1 {
        return buckets;
    }

    let (distributions, zero_sets) = if remainder >= denominator {
        (denominator, remainder / denominator)
    } else {
        (remainder, 1)
    };
    trace!(
        remainder,
        denominator,
        distributions,
        zero_sets,
        active = buckets.len(),
        "bjorklund round"
    );

    bjorklund(fold(buckets, distributions, zero_sets))
}

/// Zero-set grouping of the mattbot.euclid Max external
///
/// Recurses on `(beats % hits, hits)` and stops when `hits` reaches zero.
fn legacy(buckets: Vec<Bucket>, hits: u32, beats: u32) -> Vec<Bucket> {
    if hits == 0 || buckets.is_empty() {
        return buckets;
    }

    let Tally {
        remainder,
        denominator,
    } = tally(&buckets);
    let last_index = buckets.len() - 1;

    let zero_sets = if beats > hits * 2 {
        // Grab as many tail groups as possible, but never more than exist
        let mut zero_sets = if denominator == 0 {
            1
        } else {
            remainder / denominator
        };
        if zero_sets > last_index {
            zero_sets = 0;
        }
        if zero_sets == 0 && remainder > 1 {
            zero_sets = 1;
        }
        zero_sets
    } else {
        1
    };
    let distributions = remainder.min(denominator);
    trace!(
        hits,
        beats,
        remainder,
        denominator,
        distributions,
        zero_sets,
        "legacy round"
    );

    legacy(fold(buckets, distributions, zero_sets), beats % hits, hits)
}
