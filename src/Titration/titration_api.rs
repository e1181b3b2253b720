//! Entry points of the titration engine.
//!
//! Data flows strictly forward: a [`TitrationSpec`] gives the [`EquivalencePoint`], which
//! gives one [`VolumeGrid`] per [`Regime`]; each grid is run through the
//! regime's [`RegimeModel`] and the three sample sequences are assembled into
//! a [`TitrationCurve`].
use super::equilibrium_models::{EquilibriumModel, RegimeModel};
use super::equivalence::{EquivalencePoint, compute_equivalence};
use super::regime::Regime;
use super::titration_config::{TitrationSpec, TitrationTask};
use super::titration_curve::{SamplePoint, TitrationCurve};
use super::titration_error::{TitrationError, require_positive};
use super::volume_grid::VolumeGrid;
use log::{debug, info};

/// Generates the titration curve from 0 to `V_max` liters of titrant with
/// `samples_per_regime` samples in each of the three regimes.
///
/// # Errors
/// `DomainError` for an invalid spec, `V_max <= V_eq` or
/// `samples_per_regime == 0`; `ModelInconsistencyError` if a regime model
/// finds no physical root. No partial curve is returned.
#[allow(non_snake_case)]
pub fn generate_curve(
    spec: TitrationSpec,
    V_max: f64,
    samples_per_regime: usize,
) -> Result<TitrationCurve, TitrationError> {
    Titration::new(spec)?.curve(V_max, samples_per_regime)
}

/// a validated spec together with its equivalence geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Titration {
    spec: TitrationSpec,
    eq: EquivalencePoint,
}

/// pH at the landmarks of the titration
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(non_snake_case)]
pub struct TitrationSummary {
    pub equivalence: EquivalencePoint,
    pub pKa: f64,
    /// pH before any titrant is added
    pub initial_pH: f64,
    pub half_equivalence_pH: f64,
    pub equivalence_pH: f64,
}

#[allow(non_snake_case)]
impl Titration {
    pub fn new(spec: TitrationSpec) -> Result<Self, TitrationError> {
        spec.validate()?;
        let eq = compute_equivalence(spec.V_a, spec.C_a, spec.C_b)?;
        info!(
            "initial moles {:.6e} mol, V_half = {:.6e} L, V_eq = {:.6e} L",
            eq.initial_moles, eq.V_half, eq.V_eq
        );
        Ok(Self { spec, eq })
    }

    pub fn spec(&self) -> &TitrationSpec {
        &self.spec
    }

    pub fn equivalence(&self) -> &EquivalencePoint {
        &self.eq
    }

    pub fn model(&self, regime: Regime) -> RegimeModel {
        RegimeModel::for_regime(regime, self.spec, self.eq)
    }

    /// pH after `volume` liters of titrant, using the model of the regime
    /// the volume falls into
    pub fn ph_at(&self, volume: f64) -> Result<f64, TitrationError> {
        let regime = Regime::classify(volume, &self.eq)?;
        self.model(regime).ph(volume)
    }

    pub fn sample(&self, volume: f64) -> Result<SamplePoint, TitrationError> {
        let regime = Regime::classify(volume, &self.eq)?;
        let pH = self.model(regime).ph(volume)?;
        Ok(SamplePoint {
            volume,
            pH,
            regime,
        })
    }

    /// samples of one regime over its own interval
    pub fn sample_regime(
        &self,
        regime: Regime,
        V_max: f64,
        samples: usize,
    ) -> Result<Vec<SamplePoint>, TitrationError> {
        self.check_v_max(V_max)?;
        let grid = VolumeGrid::new(regime.interval(&self.eq, V_max), samples)?;
        debug!(
            "{}: {} samples over [{:.6e}, {:.6e}] L",
            regime,
            grid.len(),
            grid.interval().lo,
            grid.interval().hi
        );
        let model = self.model(regime);
        grid.iter()
            .map(|volume| -> Result<SamplePoint, TitrationError> {
                Ok(SamplePoint {
                    volume,
                    pH: model.ph(volume)?,
                    regime,
                })
            })
            .collect()
    }

    pub fn curve(
        &self,
        V_max: f64,
        samples_per_regime: usize,
    ) -> Result<TitrationCurve, TitrationError> {
        self.check_v_max(V_max)?;
        let pre_half = self.sample_regime(Regime::PreHalf, V_max, samples_per_regime)?;
        let half_to_eq = self.sample_regime(Regime::HalfToEq, V_max, samples_per_regime)?;
        let post_eq = self.sample_regime(Regime::PostEq, V_max, samples_per_regime)?;
        let curve = TitrationCurve::assemble(
            pre_half,
            half_to_eq,
            post_eq,
            self.spec.config.boundary_tolerance,
        )?;
        info!("titration curve of {} points up to {:.4} L", curve.len(), V_max);
        Ok(curve)
    }

    pub fn summary(&self) -> Result<TitrationSummary, TitrationError> {
        Ok(TitrationSummary {
            equivalence: self.eq,
            pKa: self.spec.pKa(),
            initial_pH: self.ph_at(0.0)?,
            half_equivalence_pH: self.ph_at(self.eq.V_half)?,
            equivalence_pH: self.ph_at(self.eq.V_eq)?,
        })
    }

    fn check_v_max(&self, V_max: f64) -> Result<(), TitrationError> {
        require_positive("V_max", V_max)?;
        if V_max <= self.eq.V_eq {
            return Err(TitrationError::domain(format!(
                "V_max = {:.6e} L must exceed the equivalence volume {:.6e} L",
                V_max, self.eq.V_eq
            )));
        }
        Ok(())
    }
}

impl TitrationTask {
    pub fn run(&self) -> Result<TitrationCurve, TitrationError> {
        generate_curve(self.spec, self.V_max, self.samples_per_regime)
    }
}
