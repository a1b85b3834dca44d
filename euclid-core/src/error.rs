use thiserror::Error;

/// Errors raised at the textual boundary (notation, names, adapter messages).
///
/// Generation itself never fails: out-of-range numbers are clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EuclidError {
    #[error("Invalid integer '{0}'")]
    InvalidNumber(String),

    #[error("Expected 2 or 3 values (hits, beats[, offset]), got {0}")]
    WrongArity(usize),

    #[error("Malformed pattern notation '{0}'. Use (hits,beats) or (hits,beats,offset)")]
    MalformedNotation(String),

    #[error("Unknown distribution '{0}'. Use 'bjorklund' or 'legacy'")]
    UnknownDistribution(String),
}
