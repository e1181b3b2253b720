use super::equivalence::EquivalencePoint;
use super::titration_error::{TitrationError, require_non_negative};
use super::volume_grid::VolumeInterval;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three chemically distinct stretches of the titration.
///
/// | regime     | interval          | dominant equilibrium               |
/// |------------|-------------------|------------------------------------|
/// | PRE_HALF   | [0, V_half)       | HA + H2O <=> H3O+ + A-             |
/// | HALF_TO_EQ | [V_half, V_eq)    | A- + H2O <=> HA + OH-              |
/// | POST_EQ    | [V_eq, V_max]     | excess strong base                 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Regime {
    PreHalf,
    HalfToEq,
    PostEq,
}

#[allow(non_snake_case)]
impl Regime {
    /// regimes in curve order
    pub const ALL: [Regime; 3] = [Regime::PreHalf, Regime::HalfToEq, Regime::PostEq];

    /// The single place where a volume is mapped onto its regime.
    ///
    /// # Errors
    /// `DomainError` for a negative or non-finite volume.
    pub fn classify(volume: f64, eq: &EquivalencePoint) -> Result<Regime, TitrationError> {
        require_non_negative("volume of added titrant", volume)?;
        let regime = if volume < eq.V_half {
            Regime::PreHalf
        } else if volume < eq.V_eq {
            Regime::HalfToEq
        } else {
            Regime::PostEq
        };
        Ok(regime)
    }

    /// volume interval of the regime; only POST_EQ is closed, at `V_max`
    pub fn interval(&self, eq: &EquivalencePoint, V_max: f64) -> VolumeInterval {
        match self {
            Regime::PreHalf => VolumeInterval::half_open(0.0, eq.V_half),
            Regime::HalfToEq => VolumeInterval::half_open(eq.V_half, eq.V_eq),
            Regime::PostEq => VolumeInterval::closed(eq.V_eq, V_max),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Regime::PreHalf => "PRE_HALF",
            Regime::HalfToEq => "HALF_TO_EQ",
            Regime::PostEq => "POST_EQ",
        }
    }

    pub fn next(&self) -> Option<Regime> {
        match self {
            Regime::PreHalf => Some(Regime::HalfToEq),
            Regime::HalfToEq => Some(Regime::PostEq),
            Regime::PostEq => None,
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Titration::equivalence::compute_equivalence;

    #[test]
    fn test_classify_boundaries() {
        let eq = compute_equivalence(0.0513, 0.131, 0.0953).unwrap();
        assert_eq!(Regime::classify(0.0, &eq).unwrap(), Regime::PreHalf);
        assert_eq!(
            Regime::classify(eq.V_half * (1.0 - 1e-12), &eq).unwrap(),
            Regime::PreHalf
        );
        assert_eq!(Regime::classify(eq.V_half, &eq).unwrap(), Regime::HalfToEq);
        assert_eq!(
            Regime::classify(eq.V_eq * (1.0 - 1e-12), &eq).unwrap(),
            Regime::HalfToEq
        );
        assert_eq!(Regime::classify(eq.V_eq, &eq).unwrap(), Regime::PostEq);
        assert_eq!(Regime::classify(1.0, &eq).unwrap(), Regime::PostEq);
        assert!(Regime::classify(-1e-6, &eq).is_err());
    }

    #[test]
    fn test_intervals_are_disjoint_and_cover() {
        let eq = compute_equivalence(0.0513, 0.131, 0.0953).unwrap();
        let intervals: Vec<VolumeInterval> =
            Regime::ALL.iter().map(|r| r.interval(&eq, 0.15)).collect();
        assert_eq!(intervals[0].lo, 0.0);
        assert_eq!(intervals[0].hi, intervals[1].lo);
        assert_eq!(intervals[1].hi, intervals[2].lo);
        assert_eq!(intervals[2].hi, 0.15);
        for v in [0.0, 0.01, eq.V_half, 0.05, eq.V_eq, 0.1, 0.15] {
            let owners = intervals.iter().filter(|i| i.contains(v)).count();
            assert_eq!(owners, 1, "volume {} must belong to exactly one regime", v);
            let regime = Regime::classify(v, &eq).unwrap();
            assert!(regime.interval(&eq, 0.15).contains(v));
        }
    }

    #[test]
    fn test_order_and_names() {
        assert_eq!(Regime::PreHalf.next(), Some(Regime::HalfToEq));
        assert_eq!(Regime::PostEq.next(), None);
        assert!(Regime::PreHalf < Regime::PostEq);
        assert_eq!(Regime::HalfToEq.to_string(), "HALF_TO_EQ");
    }
}
