//! Distribution strategy selection.

use crate::error::EuclidError;
use std::fmt;
use std::str::FromStr;

/// Which bucket-grouping rule the distributor applies
///
/// - `Bjorklund`: canonical construction, E(3,8) = `x..x..x.`
/// - `Legacy`: the zero-set recipe of the mattbot.euclid Max external, which yields
///   evenly spread patterns in a different order (E(3,8) = `x..x.x..`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Distribution {
    #[default]
    Bjorklund,
    Legacy,
}

impl Distribution {
    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Bjorklund => "bjorklund",
            Distribution::Legacy => "legacy",
        }
    }
}

impl FromStr for Distribution {
    type Err = EuclidError;

    /// Parse distribution from string (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bjorklund" | "canonical" | "b" => Ok(Distribution::Bjorklund),
            "legacy" | "mattbot" | "l" => Ok(Distribution::Legacy),
            other => Err(EuclidError::UnknownDistribution(other.to_string())),
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_distribution_names() {
        assert_eq!("Bjorklund".parse::<Distribution>(), Ok(Distribution::Bjorklund));
        assert_eq!(" legacy ".parse::<Distribution>(), Ok(Distribution::Legacy));
        assert_eq!(
            "fibonacci".parse::<Distribution>(),
            Err(EuclidError::UnknownDistribution("fibonacci".to_string()))
        );
    }

    #[test]
    fn test_name_round_trips_through_parse() {
        for d in [Distribution::Bjorklund, Distribution::Legacy] {
            assert_eq!(d.name().parse::<Distribution>(), Ok(d));
        }
    }
}
