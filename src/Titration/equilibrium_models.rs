//! Closed-form equilibrium models of the three titration regimes.
//!
//! Each model is an ICE table (initial, change, equilibrium) whose change
//! obeys a quadratic:
//! - [`AcidBufferModel`] (PRE_HALF): the weak acid is in excess;
//!   HA + H2O <=> H3O+ + A- starting from the water hydronium floor,
//!   `x^2 + ([A-] + Ka + H_w) x + ([A-] H_w - [HA] Ka) = 0`, [H3O+] = H_w + x.
//!   Above pH 7 the change `x` is negative.
//! - [`BaseBufferModel`] (HALF_TO_EQ): the conjugate base is in excess;
//!   A- + H2O <=> HA + OH- with Kb = Kw / Ka, starting from the water
//!   hydroxide floor and from the acid dissociation `h` carried over from
//!   the excess-acid side, `[HA]' = [HA] - h`, `[A-]' = [A-] + h`,
//!   `y^2 + ([HA]' + Kb + OH_w) y + ([HA]' OH_w - [A-]' Kb) = 0`,
//!   [OH-] = OH_w + y.
//! - [`ExcessBaseModel`] (POST_EQ): the acid is consumed; [OH-] is the water
//!   floor plus the excess titrant over the total volume plus the hydrolysis
//!   of the acetate formed, `y^2 + (OH_w + E + Kb) y - [A-] Kb = 0`,
//!   [OH-] = OH_w + E + y. At V_eq the excess E is exactly zero and the
//!   hydrolysis term keeps [OH-] finite.
//!
//! The carried term `h` is the bare dissociation of the remaining acid plus a
//! correction fixed at V_half and scaled with [HA]/[A-]. At V_half it makes
//! the two buffer models describe the same equilibrium state, and it vanishes
//! at V_eq where the excess-base buffer meets the POST_EQ model. Both regime
//! boundaries are therefore continuous.
//!
//! Every quadratic goes through [`solve_quadratic`] and
//! [`select_physical_root`]; a model never clamps a root on its own.
use super::equivalence::EquivalencePoint;
use super::quadratic::solve_quadratic;
use super::regime::Regime;
use super::titration_config::TitrationSpec;
use super::titration_error::{TitrationError, require_non_negative};
use enum_dispatch::enum_dispatch;
use log::debug;

#[enum_dispatch]
pub trait EquilibriumModel {
    /// regime the model is built for
    fn regime(&self) -> Regime;
    /// pH of the solution after `volume` liters of titrant were added
    fn ph(&self, volume: f64) -> Result<f64, TitrationError>;
}

/// the equilibrium model of one regime
#[derive(Debug, Clone, Copy, PartialEq)]
#[enum_dispatch(EquilibriumModel)]
pub enum RegimeModel {
    AcidBuffer(AcidBufferModel),
    BaseBuffer(BaseBufferModel),
    ExcessBase(ExcessBaseModel),
}

impl RegimeModel {
    pub fn for_regime(regime: Regime, spec: TitrationSpec, eq: EquivalencePoint) -> Self {
        match regime {
            Regime::PreHalf => RegimeModel::AcidBuffer(AcidBufferModel::new(spec, eq)),
            Regime::HalfToEq => RegimeModel::BaseBuffer(BaseBufferModel::new(spec, eq)),
            Regime::PostEq => RegimeModel::ExcessBase(ExcessBaseModel::new(spec, eq)),
        }
    }
}

/// Root selection policy for the change of an ICE table.
///
/// `bounds = (lo, hi)` is the inclusive range of the change for which every
/// equilibrium concentration of the table stays non-negative. Exactly one
/// root must fall inside it; it is returned. No admissible root, or two,
/// means the model is outside its range of validity and is reported as
/// `ModelInconsistencyError`.
pub fn select_physical_root(
    roots: (f64, f64),
    bounds: (f64, f64),
    regime: Regime,
    volume: f64,
) -> Result<f64, TitrationError> {
    let (r1, r2) = roots;
    let (lo, hi) = bounds;
    let admissible = |r: f64| lo <= r && r <= hi;
    match (admissible(r1), admissible(r2)) {
        (true, false) => Ok(r1),
        (false, true) => Ok(r2),
        _ => Err(TitrationError::ModelInconsistencyError {
            regime,
            volume,
            roots,
        }),
    }
}

/// moles of acid and of conjugate base left after `volume` of titrant, as
/// concentrations in the total volume
fn buffer_concentrations(
    spec: &TitrationSpec,
    eq: &EquivalencePoint,
    volume: f64,
) -> (f64, f64) {
    let total_volume = spec.V_a + volume;
    let base_added = volume * spec.C_b;
    let acid_left = eq.initial_moles - base_added;
    (acid_left / total_volume, base_added / total_volume)
}

/// buffer models need acid left in solution
fn check_before_equivalence(
    eq: &EquivalencePoint,
    regime: Regime,
    volume: f64,
) -> Result<(), TitrationError> {
    require_non_negative("volume of added titrant", volume)?;
    if volume < eq.V_eq {
        Ok(())
    } else {
        Err(TitrationError::domain(format!(
            "{} model is valid only below V_eq = {:.6e} L, got V = {:.6e} L",
            regime, eq.V_eq, volume
        )))
    }
}

fn p_value(
    concentration: f64,
    regime: Regime,
    volume: f64,
    roots: (f64, f64),
) -> Result<f64, TitrationError> {
    if concentration > 0.0 && concentration.is_finite() {
        Ok(-concentration.log10())
    } else {
        Err(TitrationError::ModelInconsistencyError {
            regime,
            volume,
            roots,
        })
    }
}

/// dissociation of the acid left at `volume` with no water ions,
/// `x^2 + ([A-] + Ka) x - [HA] Ka = 0`
#[allow(non_snake_case)]
fn bare_dissociation(
    spec: &TitrationSpec,
    eq: &EquivalencePoint,
    regime: Regime,
    volume: f64,
) -> Result<f64, TitrationError> {
    let (HA, A) = buffer_concentrations(spec, eq, volume);
    let roots = solve_quadratic(1.0, A + spec.Ka, -HA * spec.Ka)?;
    select_physical_root(roots, (0.0, HA), regime, volume)
}

/// PRE_HALF: weak acid in excess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcidBufferModel {
    spec: TitrationSpec,
    eq: EquivalencePoint,
}

impl AcidBufferModel {
    pub fn new(spec: TitrationSpec, eq: EquivalencePoint) -> Self {
        Self { spec, eq }
    }

    /// returns (change x of the ICE table, roots of its quadratic)
    #[allow(non_snake_case)]
    fn change_with_roots(&self, volume: f64) -> Result<(f64, (f64, f64)), TitrationError> {
        check_before_equivalence(&self.eq, Regime::PreHalf, volume)?;
        let (HA, A) = buffer_concentrations(&self.spec, &self.eq, volume);
        let Ka = self.spec.Ka;
        let H_w = self.spec.config.hydronium_floor;
        let roots = solve_quadratic(1.0, A + Ka + H_w, A * H_w - HA * Ka)?;
        // [H3O+] = H_w + x, [A-] + x and [HA] - x must not go negative
        let x = select_physical_root(roots, (-(H_w.min(A)), HA), Regime::PreHalf, volume)?;
        Ok((x, roots))
    }

    /// equilibrium [H3O+], mol/L
    pub fn hydronium(&self, volume: f64) -> Result<f64, TitrationError> {
        Ok(self.spec.config.hydronium_floor + self.change_with_roots(volume)?.0)
    }

    /// net dissociation of the acid, the change x of the ICE table
    pub fn dissociation(&self, volume: f64) -> Result<f64, TitrationError> {
        Ok(self.change_with_roots(volume)?.0)
    }
}

impl EquilibriumModel for AcidBufferModel {
    fn regime(&self) -> Regime {
        Regime::PreHalf
    }

    fn ph(&self, volume: f64) -> Result<f64, TitrationError> {
        let (x, roots) = self.change_with_roots(volume)?;
        let hydronium = self.spec.config.hydronium_floor + x;
        p_value(hydronium, Regime::PreHalf, volume, roots)
    }
}

/// HALF_TO_EQ: conjugate base in excess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseBufferModel {
    spec: TitrationSpec,
    eq: EquivalencePoint,
}

#[allow(non_snake_case)]
impl BaseBufferModel {
    pub fn new(spec: TitrationSpec, eq: EquivalencePoint) -> Self {
        Self { spec, eq }
    }

    /// Acid dissociation carried into the hydrolysis table at `volume`.
    ///
    /// At V_half it equals the excess-acid dissociation plus the water
    /// hydroxide of that state (less the hydroxide floor), so both buffer
    /// models give the same pH there.
    fn carried_dissociation(&self, volume: f64) -> Result<f64, TitrationError> {
        let half = self.eq.V_half;
        let acid = AcidBufferModel::new(self.spec, self.eq);
        let x_half = acid.dissociation(half)?;
        let OH_half = self.spec.config.Kw / acid.hydronium(half)?;
        let correction = x_half + OH_half
            - self.spec.config.hydroxide_floor
            - bare_dissociation(&self.spec, &self.eq, Regime::HalfToEq, half)?;
        let (HA, A) = buffer_concentrations(&self.spec, &self.eq, volume);
        let bare = bare_dissociation(&self.spec, &self.eq, Regime::HalfToEq, volume)?;
        Ok(bare + correction * HA / A)
    }

    fn hydroxide_with_roots(&self, volume: f64) -> Result<(f64, (f64, f64)), TitrationError> {
        check_before_equivalence(&self.eq, Regime::HalfToEq, volume)?;
        if volume < self.eq.V_half {
            return Err(TitrationError::domain(format!(
                "{} model is valid only from V_half = {:.6e} L on, got V = {:.6e} L",
                Regime::HalfToEq,
                self.eq.V_half,
                volume
            )));
        }
        let (HA, A) = buffer_concentrations(&self.spec, &self.eq, volume);
        let h = self.carried_dissociation(volume)?;
        let (HA_0, A_0) = (HA - h, A + h);
        let Kb = self.spec.Kb();
        let OH_w = self.spec.config.hydroxide_floor;
        let roots = solve_quadratic(1.0, HA_0 + Kb + OH_w, HA_0 * OH_w - A_0 * Kb)?;
        if HA_0 < 0.0 || A_0 < 0.0 {
            // hydrolysis outweighs the buffer: the excess-acid state at
            // V_half already holds more hydroxide than acid
            debug!(
                "carried dissociation {:.3e} M leaves [HA] = {:.3e} M, [A-] = {:.3e} M at V = {:.6e} L",
                h, HA_0, A_0, volume
            );
            return Err(TitrationError::ModelInconsistencyError {
                regime: Regime::HalfToEq,
                volume,
                roots,
            });
        }
        // [OH-] = OH_w + y, [HA]' + y and [A-]' - y must not go negative
        let y = select_physical_root(
            roots,
            ((-OH_w).max(-HA_0), A_0),
            Regime::HalfToEq,
            volume,
        )?;
        Ok((OH_w + y, roots))
    }

    /// equilibrium [OH-], mol/L
    pub fn hydroxide(&self, volume: f64) -> Result<f64, TitrationError> {
        Ok(self.hydroxide_with_roots(volume)?.0)
    }
}

#[allow(non_snake_case)]
impl EquilibriumModel for BaseBufferModel {
    fn regime(&self) -> Regime {
        Regime::HalfToEq
    }

    fn ph(&self, volume: f64) -> Result<f64, TitrationError> {
        let (hydroxide, roots) = self.hydroxide_with_roots(volume)?;
        let pOH = p_value(hydroxide, Regime::HalfToEq, volume, roots)?;
        Ok(self.spec.config.pKw() - pOH)
    }
}

/// POST_EQ: strong base in excess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExcessBaseModel {
    spec: TitrationSpec,
    eq: EquivalencePoint,
}

impl ExcessBaseModel {
    pub fn new(spec: TitrationSpec, eq: EquivalencePoint) -> Self {
        Self { spec, eq }
    }

    #[allow(non_snake_case)]
    fn hydroxide_with_roots(&self, volume: f64) -> Result<(f64, (f64, f64)), TitrationError> {
        require_non_negative("volume of added titrant", volume)?;
        if volume < self.eq.V_eq {
            return Err(TitrationError::domain(format!(
                "{} model is valid only from V_eq = {:.6e} L on, got V = {:.6e} L",
                Regime::PostEq,
                self.eq.V_eq,
                volume
            )));
        }
        let total_volume = self.spec.V_a + volume;
        // V_eq * C_b may differ from initial_moles in the last bit
        let excess_moles = (volume * self.spec.C_b - self.eq.initial_moles).max(0.0);
        let E = excess_moles / total_volume;
        let A = self.eq.initial_moles / total_volume;
        let Kb = self.spec.Kb();
        let OH_w = self.spec.config.hydroxide_floor;
        let roots = solve_quadratic(1.0, OH_w + E + Kb, -A * Kb)?;
        // [HA] = y and [A-] - y must not go negative
        let y = select_physical_root(roots, (0.0, A), Regime::PostEq, volume)?;
        if E > 0.0 && y > 1e-3 * E {
            debug!(
                "hydrolysis contributes {:.3e} M next to {:.3e} M excess base at V = {:.6e} L",
                y, E, volume
            );
        }
        Ok((OH_w + E + y, roots))
    }

    /// equilibrium [OH-], mol/L
    pub fn hydroxide(&self, volume: f64) -> Result<f64, TitrationError> {
        Ok(self.hydroxide_with_roots(volume)?.0)
    }
}

#[allow(non_snake_case)]
impl EquilibriumModel for ExcessBaseModel {
    fn regime(&self) -> Regime {
        Regime::PostEq
    }

    fn ph(&self, volume: f64) -> Result<f64, TitrationError> {
        let (hydroxide, roots) = self.hydroxide_with_roots(volume)?;
        let pOH = p_value(hydroxide, Regime::PostEq, volume, roots)?;
        Ok(self.spec.config.pKw() - pOH)
    }
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;
    use crate::Titration::equivalence::compute_equivalence;
    use crate::Titration::titration_config::TitrationConfig;
    use approx::assert_relative_eq;

    fn acetic_acid() -> (TitrationSpec, EquivalencePoint) {
        let spec = TitrationSpec::new(0.0513, 0.131, 0.0953, 1.76e-5).unwrap();
        let eq = compute_equivalence(spec.V_a, spec.C_a, spec.C_b).unwrap();
        (spec, eq)
    }

    #[test]
    fn test_pure_weak_acid_ph() {
        let (spec, eq) = acetic_acid();
        let model = AcidBufferModel::new(spec, eq);
        assert_relative_eq!(model.ph(0.0).unwrap(), 2.82, epsilon = 0.01);
        // sqrt(Ka * C_a) estimate for a weak acid
        let hydronium = model.hydronium(0.0).unwrap();
        assert_relative_eq!(hydronium, (1.76e-5 * 0.131_f64).sqrt(), max_relative = 0.01);
    }

    #[test]
    fn test_half_equivalence_gives_pka() {
        let (spec, eq) = acetic_acid();
        let pKa = -(1.76e-5_f64).log10();
        let acid = AcidBufferModel::new(spec, eq);
        assert_relative_eq!(acid.ph(eq.V_half).unwrap(), pKa, epsilon = 0.01);
        assert_relative_eq!(acid.ph(eq.V_half).unwrap(), 4.754, epsilon = 0.01);
        let base = BaseBufferModel::new(spec, eq);
        assert_relative_eq!(base.ph(eq.V_half).unwrap(), pKa, epsilon = 0.01);
    }

    #[test]
    fn test_equivalence_point_is_basic() {
        let (spec, eq) = acetic_acid();
        let model = ExcessBaseModel::new(spec, eq);
        // pOH = (pKb - log10[A-]) / 2 for the acetate solution at V_eq
        let ph = model.ph(eq.V_eq).unwrap();
        assert_relative_eq!(ph, 8.748, epsilon = 0.01);
        assert!(ph.is_finite());
    }

    #[test]
    fn test_excess_base_matches_closed_form_far_from_eq() {
        let (spec, eq) = acetic_acid();
        let model = ExcessBaseModel::new(spec, eq);
        let v = 0.15;
        let excess = (v * spec.C_b - eq.initial_moles) / (spec.V_a + v);
        let closed_form = 14.0 + excess.log10();
        assert_relative_eq!(model.ph(v).unwrap(), closed_form, epsilon = 1e-3);
        assert_relative_eq!(model.ph(v).unwrap(), 12.576, epsilon = 1e-3);
    }

    #[test]
    fn test_models_reject_foreign_volumes() {
        let (spec, eq) = acetic_acid();
        assert!(AcidBufferModel::new(spec, eq).ph(eq.V_eq).is_err());
        assert!(BaseBufferModel::new(spec, eq).ph(0.1).is_err());
        assert!(BaseBufferModel::new(spec, eq).ph(0.5 * eq.V_half).is_err());
        assert!(ExcessBaseModel::new(spec, eq).ph(eq.V_half).is_err());
        assert!(AcidBufferModel::new(spec, eq).ph(-0.01).is_err());
    }

    #[test]
    fn test_buffer_models_meet_at_half_equivalence() {
        // acetic, a stronger dilute acid, chloroacetic and hydrocyanic acid
        let systems = [
            (0.0513, 0.131, 0.0953, 1.76e-5),
            (0.05, 0.01, 0.01, 1e-3),
            (0.05, 0.1, 0.1, 1.4e-3),
            (0.05, 0.1, 0.1, 1e-10),
        ];
        for (V_a, C_a, C_b, Ka) in systems {
            let spec = TitrationSpec::new(V_a, C_a, C_b, Ka).unwrap();
            let eq = compute_equivalence(V_a, C_a, C_b).unwrap();
            let acid = AcidBufferModel::new(spec, eq).ph(eq.V_half).unwrap();
            let base = BaseBufferModel::new(spec, eq).ph(eq.V_half).unwrap();
            assert_relative_eq!(acid, base, epsilon = 1e-9);
        }
        let spec = TitrationSpec::new(0.05, 0.01, 0.01, 1e-3).unwrap();
        let eq = compute_equivalence(0.05, 0.01, 0.01).unwrap();
        assert_relative_eq!(
            BaseBufferModel::new(spec, eq).ph(eq.V_half).unwrap(),
            3.1761,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_carried_dissociation_vanishes_at_equivalence() {
        let (spec, eq) = acetic_acid();
        let base = BaseBufferModel::new(spec, eq);
        let acid = AcidBufferModel::new(spec, eq);
        // at V_half the acid side dissociation plus the water hydroxide
        let at_half = base.carried_dissociation(eq.V_half).unwrap();
        let OH_half = spec.config.Kw / acid.hydronium(eq.V_half).unwrap();
        assert_relative_eq!(
            at_half,
            acid.dissociation(eq.V_half).unwrap() + OH_half,
            max_relative = 1e-9
        );
        let near_eq = eq.V_eq * (1.0 - 1e-9);
        assert!(base.carried_dissociation(near_eq).unwrap() < 1e-12);
        let post = ExcessBaseModel::new(spec, eq).ph(eq.V_eq).unwrap();
        assert_relative_eq!(base.ph(near_eq).unwrap(), post, epsilon = 1e-4);
        assert!(base.ph(near_eq).unwrap() <= post);
    }

    #[test]
    fn test_weak_acid_buffer_above_ph_7() {
        // hydrocyanic acid, pKa 10: the buffer turns basic right after the
        // first drop of titrant and the ICE change x goes negative
        let spec = TitrationSpec::new(0.05, 0.1, 0.1, 1e-10).unwrap();
        let eq = compute_equivalence(spec.V_a, spec.C_a, spec.C_b).unwrap();
        let acid = AcidBufferModel::new(spec, eq);
        assert_relative_eq!(acid.ph(0.0).unwrap(), 5.4931, epsilon = 1e-4);
        let x = acid.dissociation(0.00025).unwrap();
        assert!(x < 0.0);
        assert_relative_eq!(x, -8.0097e-8, max_relative = 1e-3);
        assert_relative_eq!(acid.hydronium(0.00025).unwrap(), 1.99e-8, max_relative = 1e-2);
        assert_relative_eq!(acid.ph(0.00025).unwrap(), 7.701, epsilon = 1e-3);
        assert_relative_eq!(acid.ph(eq.V_half).unwrap(), 10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_hydroxide_floor_keeps_models_in_step() {
        let config = TitrationConfig {
            hydroxide_floor: 1e-7,
            ..TitrationConfig::default()
        };
        let spec = TitrationSpec::with_config(0.0513, 0.131, 0.0953, 1.76e-5, config).unwrap();
        let eq = compute_equivalence(spec.V_a, spec.C_a, spec.C_b).unwrap();
        let acid = AcidBufferModel::new(spec, eq).ph(eq.V_half).unwrap();
        let base = BaseBufferModel::new(spec, eq);
        assert_relative_eq!(base.ph(eq.V_half).unwrap(), acid, epsilon = 1e-9);
        // the floor shifts [OH-] at V_eq and nothing far past it
        let post = ExcessBaseModel::new(spec, eq);
        assert_relative_eq!(post.ph(eq.V_eq).unwrap(), 8.7519, epsilon = 1e-3);
        assert_relative_eq!(post.ph(0.15).unwrap(), 12.5755, epsilon = 1e-3);
        let near_eq = eq.V_eq * (1.0 - 1e-9);
        assert_relative_eq!(
            base.ph(near_eq).unwrap(),
            post.ph(eq.V_eq).unwrap(),
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_hydrolysis_dominated_buffer_is_inconsistent() {
        // pKa 12 at 0.01 M: at V_half the conjugate base hydrolyses more
        // than the acid left in solution
        let spec = TitrationSpec::new(0.05, 0.01, 0.01, 1e-12).unwrap();
        let eq = compute_equivalence(spec.V_a, spec.C_a, spec.C_b).unwrap();
        let err = BaseBufferModel::new(spec, eq).ph(eq.V_half).unwrap_err();
        match err {
            TitrationError::ModelInconsistencyError { regime, volume, .. } => {
                assert_eq!(regime, Regime::HalfToEq);
                assert_eq!(volume, eq.V_half);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_root_selection_policy() {
        let unit = (0.0, 1.0);
        assert_eq!(
            select_physical_root((1e-5, -0.04), unit, Regime::PreHalf, 0.0).unwrap(),
            1e-5
        );
        assert_eq!(
            select_physical_root((-0.04, 2e-3), unit, Regime::PreHalf, 0.0).unwrap(),
            2e-3
        );
        assert_eq!(
            select_physical_root((0.0, -1.0), unit, Regime::PreHalf, 0.0).unwrap(),
            0.0
        );
        // a negative change is fine as long as the concentrations stay >= 0
        assert_eq!(
            select_physical_root((-8e-8, -4.975e-4), (-1e-7, 0.1), Regime::PreHalf, 0.0)
                .unwrap(),
            -8e-8
        );
        assert_eq!(
            select_physical_root((0.5, 2.0), unit, Regime::PostEq, 0.1).unwrap(),
            0.5
        );
        assert!(matches!(
            select_physical_root((-1.0, -2.0), unit, Regime::PreHalf, 0.0),
            Err(TitrationError::ModelInconsistencyError { .. })
        ));
        assert!(matches!(
            select_physical_root((1.0, 2.0), (0.0, 3.0), Regime::PostEq, 0.1),
            Err(TitrationError::ModelInconsistencyError { .. })
        ));
    }

    #[test]
    fn test_regime_model_dispatch() {
        let (spec, eq) = acetic_acid();
        for regime in Regime::ALL {
            let model = RegimeModel::for_regime(regime, spec, eq);
            assert_eq!(model.regime(), regime);
        }
        let pre = RegimeModel::for_regime(Regime::PreHalf, spec, eq);
        assert_eq!(
            pre.ph(0.01).unwrap(),
            AcidBufferModel::new(spec, eq).ph(0.01).unwrap()
        );
    }

    #[test]
    fn test_ph_rises_within_each_model() {
        let (spec, eq) = acetic_acid();
        let acid = AcidBufferModel::new(spec, eq);
        let base = BaseBufferModel::new(spec, eq);
        let post = ExcessBaseModel::new(spec, eq);
        assert!(acid.ph(0.01).unwrap() < acid.ph(0.02).unwrap());
        assert!(base.ph(0.04).unwrap() < base.ph(0.06).unwrap());
        assert!(post.ph(0.08).unwrap() < post.ph(0.12).unwrap());
    }
}
