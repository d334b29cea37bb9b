//! Confidence levels for Value-at-Risk estimation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence level for a VaR estimate.
///
/// The dashboard contract uses a fixed set of levels; the numeric level and
/// the tail probability are exposed for the estimators, the label for the
/// wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ConfidenceLevel {
    /// 90% confidence (10% tail).
    Ninety,
    /// 95% confidence (5% tail) - the dashboard's headline level.
    #[default]
    NinetyFive,
    /// 99% confidence (1% tail).
    NinetyNine,
}

impl ConfidenceLevel {
    /// All levels, in ascending order. VaR analysis reports each of these.
    pub const ALL: [Self; 3] = [Self::Ninety, Self::NinetyFive, Self::NinetyNine];

    /// Returns the confidence level as a probability in (0, 1).
    #[must_use]
    pub fn level(&self) -> f64 {
        match self {
            Self::Ninety => 0.90,
            Self::NinetyFive => 0.95,
            Self::NinetyNine => 0.99,
        }
    }

    /// Returns the tail probability, 1 − level.
    #[must_use]
    pub fn tail(&self) -> f64 {
        1.0 - self.level()
    }

    /// Returns the wire label used as a map key in serialized results.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ninety => "90%",
            Self::NinetyFive => "95%",
            Self::NinetyNine => "99%",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_and_tails() {
        assert_eq!(ConfidenceLevel::Ninety.level(), 0.90);
        assert_eq!(ConfidenceLevel::NinetyNine.label(), "99%");
        assert!((ConfidenceLevel::NinetyFive.tail() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_all_is_ascending() {
        let levels: Vec<f64> = ConfidenceLevel::ALL.iter().map(|c| c.level()).collect();
        assert!(levels.windows(2).all(|w| w[0] < w[1]));
    }
}
