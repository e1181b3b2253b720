use super::titration_error::{TitrationError, require_positive};
use serde::{Deserialize, Serialize};

/// stoichiometric landmarks of the titration, derived once from a `TitrationSpec`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct EquivalencePoint {
    /// moles of weak acid initially present, V_a * C_a
    pub initial_moles: f64,
    /// titrant volume that delivers exactly `initial_moles` of base
    pub V_eq: f64,
    /// V_eq / 2, where [HA] = [A-] and pH = pKa
    pub V_half: f64,
}

/// Computes the equivalence geometry from the analyte volume `V_a`, the analyte
/// concentration `C_a` and the titrant concentration `C_b`.
///
/// # Errors
/// `DomainError` if any input is not a finite positive number.
#[allow(non_snake_case)]
pub fn compute_equivalence(
    V_a: f64,
    C_a: f64,
    C_b: f64,
) -> Result<EquivalencePoint, TitrationError> {
    require_positive("V_a", V_a)?;
    require_positive("C_a", C_a)?;
    require_positive("C_b", C_b)?;
    let initial_moles = V_a * C_a;
    let V_eq = initial_moles / C_b;
    let V_half = V_eq / 2.0;
    // underflow of extremely small inputs would break 0 < V_half < V_eq
    if !(V_half > 0.0 && V_half < V_eq && V_eq.is_finite()) {
        return Err(TitrationError::domain(format!(
            "degenerate equivalence geometry: V_half = {:e}, V_eq = {:e}",
            V_half, V_eq
        )));
    }
    Ok(EquivalencePoint {
        initial_moles,
        V_eq,
        V_half,
    })
}
