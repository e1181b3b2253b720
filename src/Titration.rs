/// acid-base titration of a monoprotic weak acid with a strong base
/// # Examples
/// ```
/// use titration::Titration::titration_api::{Titration, generate_curve};
/// use titration::Titration::titration_config::TitrationSpec;
/// use approx::assert_relative_eq;
/// // 51.3 mL of 0.131 M acetic acid titrated with 0.0953 M NaOH
/// let spec = TitrationSpec::new(0.0513, 0.131, 0.0953, 1.76e-5).unwrap();
/// let curve = generate_curve(spec, 0.15, 100).unwrap();
/// assert_eq!(curve.len(), 300);
/// assert!(curve.is_monotonic());
/// // (volume, pH) pairs for a plotting layer
/// let pairs = curve.pairs();
/// assert_relative_eq!(pairs[0].1, 2.82, epsilon = 0.01);
///
/// let titration = Titration::new(spec).unwrap();
/// let eq = titration.equivalence();
/// assert_relative_eq!(eq.V_eq, 0.0705, max_relative = 1e-3);
/// // at half equivalence [HA] = [A-] and pH = pKa
/// let ph = titration.ph_at(eq.V_half).unwrap();
/// assert_relative_eq!(ph, spec.pKa(), epsilon = 0.01);
/// titration.summary().unwrap().pretty_print();
/// ```
pub mod titration_api;
pub mod equilibrium_models;
pub mod equivalence;
pub mod quadratic;
pub mod regime;
pub mod titration_config;
pub mod titration_curve;
pub mod titration_error;
/// tables and scalar formatting of the results
pub mod titration_output;
pub mod volume_grid;
