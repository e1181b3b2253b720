use super::titration_error::TitrationError;

/// Solves a*x^2 + b*x + c = 0 and returns the roots in the fixed order
/// (r1, r2) = ((-b + sqrt(D)) / 2a, (-b - sqrt(D)) / 2a), D = b^2 - 4ac.
///
/// The roots are not sorted by magnitude. The root that would suffer from
/// cancellation in the textbook formula is obtained from Vieta's relation
/// r1*r2 = c/a instead, which matters for the equilibrium models: there b is
/// of the order of a concentration (~1e-2) while the physical root is of the
/// order of an equilibrium constant (~1e-5 .. 1e-10).
///
/// # Errors
/// `DomainError` if `a == 0`, if a coefficient is not finite, or if the
/// discriminant is negative.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Result<(f64, f64), TitrationError> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return Err(TitrationError::domain(format!(
            "quadratic coefficients must be finite, got a = {}, b = {}, c = {}",
            a, b, c
        )));
    }
    if a == 0.0 {
        return Err(TitrationError::domain(
            "leading coefficient of the quadratic is zero",
        ));
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Err(TitrationError::domain(format!(
            "negative discriminant {:.6e} for a = {:.6e}, b = {:.6e}, c = {:.6e}: no real root",
            discriminant, a, b, c
        )));
    }
    let sqrt_d = discriminant.sqrt();
    // q carries the sign of -b so that b and sqrt(D) never cancel
    let q = if b >= 0.0 {
        -0.5 * (b + sqrt_d)
    } else {
        -0.5 * (b - sqrt_d)
    };
    if q == 0.0 {
        // b == 0 and D == 0, hence c == 0 as well
        return Ok((0.0, 0.0));
    }
    let (r1, r2) = if b >= 0.0 {
        // q/a is the "-sqrt" root
        (c / q, q / a)
    } else {
        (q / a, c / q)
    };
    Ok((r1, r2))
}
