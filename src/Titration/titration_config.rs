//! Input data of a titration: the global equilibrium constants
//! ([`TitrationConfig`]), the chemical system ([`TitrationSpec`]) and a complete
//! task for curve generation ([`TitrationTask`]).
//!
//! All of them are plain values that can be built in code or deserialized
//! from JSON, e.g.
//! ```json
//! {
//!   "spec": { "V_a": 0.0513, "C_a": 0.131, "C_b": 0.0953, "Ka": 1.76e-5 },
//!   "V_max": 0.15,
//!   "samples_per_regime": 100
//! }
//! ```
//! Omitted `config` fields fall back to [`TitrationConfig::default`].
use super::titration_error::{TitrationError, require_non_negative, require_positive};
use serde::{Deserialize, Serialize};

/// global constants of the equilibrium models
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[allow(non_snake_case)]
#[serde(default)]
pub struct TitrationConfig {
    /// ion product of water
    pub Kw: f64,
    /// hydronium supplied by water autoionization, used as the initial [H3O+]
    /// of the excess-acid buffer model. Kept as an independent constant
    /// (1e-7 M) rather than sqrt(Kw)
    pub hydronium_floor: f64,
    /// hydroxide supplied by water autoionization, used as the initial [OH-]
    /// of the excess-base buffer and excess-base models. The default is 0
    pub hydroxide_floor: f64,
    /// largest pH jump between the last sample of one regime and the first
    /// sample of the next before the assembler reports a discontinuity
    pub boundary_tolerance: f64,
}

impl Default for TitrationConfig {
    fn default() -> Self {
        Self {
            Kw: 1.0e-14,
            hydronium_floor: 1.0e-7,
            hydroxide_floor: 0.0,
            boundary_tolerance: 0.05,
        }
    }
}

#[allow(non_snake_case)]
impl TitrationConfig {
    pub fn validate(&self) -> Result<(), TitrationError> {
        require_positive("Kw", self.Kw)?;
        require_non_negative("hydronium_floor", self.hydronium_floor)?;
        require_non_negative("hydroxide_floor", self.hydroxide_floor)?;
        require_positive("boundary_tolerance", self.boundary_tolerance)?;
        Ok(())
    }

    /// -log10(Kw), 14 for the default configuration
    pub fn pKw(&self) -> f64 {
        -self.Kw.log10()
    }
}

/// Immutable description of a monoprotic weak acid titrated with a strong base.
///
/// Volumes are in liters, concentrations in mol/L.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct TitrationSpec {
    /// initial volume of the analyte (weak acid) solution
    pub V_a: f64,
    /// initial concentration of the weak acid
    pub C_a: f64,
    /// concentration of the strong-base titrant
    pub C_b: f64,
    /// acid dissociation constant
    pub Ka: f64,
    #[serde(default)]
    pub config: TitrationConfig,
}

#[allow(non_snake_case)]
impl TitrationSpec {
    /// creates a validated spec with the default constants
    pub fn new(V_a: f64, C_a: f64, C_b: f64, Ka: f64) -> Result<Self, TitrationError> {
        Self::with_config(V_a, C_a, C_b, Ka, TitrationConfig::default())
    }

    pub fn with_config(
        V_a: f64,
        C_a: f64,
        C_b: f64,
        Ka: f64,
        config: TitrationConfig,
    ) -> Result<Self, TitrationError> {
        let spec = Self {
            V_a,
            C_a,
            C_b,
            Ka,
            config,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Fields are public, so every entry point of the engine re-validates.
    pub fn validate(&self) -> Result<(), TitrationError> {
        require_positive("V_a", self.V_a)?;
        require_positive("C_a", self.C_a)?;
        require_positive("C_b", self.C_b)?;
        require_positive("Ka", self.Ka)?;
        self.config.validate()
    }

    /// base constant of the conjugate base, Kb = Kw / Ka
    pub fn Kb(&self) -> f64 {
        self.config.Kw / self.Ka
    }

    pub fn pKa(&self) -> f64 {
        -self.Ka.log10()
    }
}

/// a complete curve generation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct TitrationTask {
    pub spec: TitrationSpec,
    /// largest volume of titrant on the curve, L
    pub V_max: f64,
    pub samples_per_regime: usize,
}

impl TitrationTask {
    pub fn from_json_str(json: &str) -> Result<Self, TitrationError> {
        let task: TitrationTask = serde_json::from_str(json)?;
        task.spec.validate()?;
        Ok(task)
    }
}
