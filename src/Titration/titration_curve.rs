use super::regime::Regime;
use super::titration_error::TitrationError;
use log::warn;
use serde::{Deserialize, Serialize};

/// one point of the titration curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct SamplePoint {
    /// volume of titrant added, L
    pub volume: f64,
    pub pH: f64,
    /// regime whose model produced the point
    pub regime: Regime,
}

/// pH jump across the border of two consecutive regimes
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(non_snake_case)]
pub struct BoundaryGap {
    pub from: Regime,
    pub to: Regime,
    /// volume of the first sample of `to`
    pub volume: f64,
    /// pH(first sample of `to`) - pH(last sample of `from`)
    pub delta_pH: f64,
}

/// Titration curve: samples of all regimes ordered by added volume.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TitrationCurve {
    points: Vec<SamplePoint>,
}

#[allow(non_snake_case)]
impl TitrationCurve {
    /// Concatenates the per-regime samples in PRE_HALF, HALF_TO_EQ, POST_EQ
    /// order. Nothing is resorted: every segment must already be the ascending
    /// grid of its own regime.
    ///
    /// The regime models meet continuously, so pH may only rise across a
    /// boundary. A drop larger than `boundary_tolerance` is a model fault and
    /// trips a debug assertion. Upward jumps above the tolerance are expected
    /// on coarse grids and are only logged; callers that need continuity
    /// check [`TitrationCurve::boundary_gaps`].
    ///
    /// # Errors
    /// `DomainError` if a segment is empty or holds points of another regime.
    pub fn assemble(
        pre_half: Vec<SamplePoint>,
        half_to_eq: Vec<SamplePoint>,
        post_eq: Vec<SamplePoint>,
        boundary_tolerance: f64,
    ) -> Result<Self, TitrationError> {
        let segments = [
            (Regime::PreHalf, pre_half),
            (Regime::HalfToEq, half_to_eq),
            (Regime::PostEq, post_eq),
        ];
        let mut points = Vec::with_capacity(segments.iter().map(|(_, s)| s.len()).sum());
        for (regime, segment) in segments {
            if segment.is_empty() {
                return Err(TitrationError::domain(format!(
                    "no samples for regime {}",
                    regime
                )));
            }
            if let Some(stray) = segment.iter().find(|p| p.regime != regime) {
                return Err(TitrationError::domain(format!(
                    "sample at V = {:e} L belongs to {}, not to {}",
                    stray.volume, stray.regime, regime
                )));
            }
            points.extend(segment);
        }
        debug_assert!(
            points.windows(2).all(|w| w[0].volume <= w[1].volume),
            "regime grids must be ascending and disjoint"
        );
        let curve = Self { points };
        for gap in curve.boundary_gaps() {
            debug_assert!(
                gap.delta_pH >= -boundary_tolerance,
                "pH drops by {:.4} between {} and {} at V = {:.6e} L",
                -gap.delta_pH,
                gap.from,
                gap.to,
                gap.volume
            );
            if gap.delta_pH.abs() > boundary_tolerance {
                warn!(
                    "pH jumps by {:.4} between {} and {} at V = {:.6e} L",
                    gap.delta_pH, gap.from, gap.to, gap.volume
                );
            }
        }
        Ok(curve)
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.volume).collect()
    }

    pub fn ph_values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.pH).collect()
    }

    /// (volume, pH) pairs, the form a plotting layer consumes
    pub fn pairs(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.volume, p.pH)).collect()
    }

    pub fn regime_points(&self, regime: Regime) -> impl Iterator<Item = &SamplePoint> + '_ {
        self.points.iter().filter(move |p| p.regime == regime)
    }

    /// true if pH never decreases from one sample to the next
    pub fn is_monotonic(&self) -> bool {
        self.points.windows(2).all(|w| w[1].pH >= w[0].pH)
    }

    pub fn boundary_gaps(&self) -> Vec<BoundaryGap> {
        self.points
            .windows(2)
            .filter(|w| w[0].regime != w[1].regime)
            .map(|w| BoundaryGap {
                from: w[0].regime,
                to: w[1].regime,
                volume: w[1].volume,
                delta_pH: w[1].pH - w[0].pH,
            })
            .collect()
    }

    /// Linear interpolation of pH between the two samples around `volume`.
    /// `None` outside the sampled range.
    pub fn interpolate_ph(&self, volume: f64) -> Option<f64> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        if !(first.volume <= volume && volume <= last.volume) {
            return None;
        }
        let upper = self.points.partition_point(|p| p.volume < volume);
        if upper == 0 {
            return Some(first.pH);
        }
        let (a, b) = (&self.points[upper - 1], &self.points[upper]);
        if b.volume == a.volume {
            return Some(b.pH);
        }
        let t = (volume - a.volume) / (b.volume - a.volume);
        Some(a.pH + t * (b.pH - a.pH))
    }

    /// Midpoint volume and slope dpH/dV of the steepest pair of samples,
    /// an estimate of the equivalence point read off the curve.
    pub fn steepest_point(&self) -> Option<(f64, f64)> {
        self.points
            .windows(2)
            .filter(|w| w[1].volume > w[0].volume)
            .map(|w| {
                let slope = (w[1].pH - w[0].pH) / (w[1].volume - w[0].volume);
                (0.5 * (w[0].volume + w[1].volume), slope)
            })
            .fold(None, |best: Option<(f64, f64)>, candidate| match best {
                Some(b) if b.1 >= candidate.1 => Some(b),
                _ => Some(candidate),
            })
    }
}
