//! Chebyshev series evaluation via Clenshaw's recurrence.
//!
//! SPK Type 2 records store a body's position, per axis, as coefficients
//! of a Chebyshev series in a normalised argument `s ∈ [-1, 1]`. Clenshaw
//! recurrence sums the series without ever forming an individual `T_n(s)`
//! term, and differentiating the recurrence gives velocity from the same
//! coefficient set.

/// Sum `coeffs[0]*T_0(s) + coeffs[1]*T_1(s) + ...` via Clenshaw's recurrence.
pub fn sum_chebyshev(coeffs: &[f64], s: f64) -> f64 {
    match coeffs.len() {
        0 => return 0.0,
        1 => return coeffs[0],
        _ => {}
    }

    let two_s = 2.0 * s;
    let (mut prev, mut prev2) = (0.0, 0.0);
    for &c in coeffs[1..].iter().rev() {
        let cur = c + two_s * prev - prev2;
        prev2 = prev;
        prev = cur;
    }
    coeffs[0] + s * prev - prev2
}

/// `d/ds` of the series [`sum_chebyshev`] evaluates, at the same `s`.
///
/// Built from the standard Chebyshev-derivative recurrence (each `T_n`'s
/// derivative re-expressed as a combination of lower-order `T_k`), then
/// folded through [`sum_chebyshev`] again. Callers wanting `d/dt` divide
/// the result by the segment's time radius, since `s` is itself a linear
/// rescaling of time.
pub fn chebyshev_derivative(coeffs: &[f64], s: f64) -> f64 {
    let n = coeffs.len();
    if n < 2 {
        return 0.0;
    }

    let mut deriv = vec![0.0; n - 1];
    deriv[n - 2] = 2.0 * (n - 1) as f64 * coeffs[n - 1];
    for k in (1..n - 1).rev() {
        let above = deriv.get(k + 1).copied().unwrap_or(0.0);
        deriv[k - 1] = above + 2.0 * k as f64 * coeffs[k];
    }
    // Clenshaw halves the constant term implicitly; match that convention
    // for the k=0 coefficient of the derivative series too.
    deriv[0] *= 0.5;

    sum_chebyshev(&deriv, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_is_zero() {
        assert_eq!(sum_chebyshev(&[], 0.8), 0.0);
    }

    #[test]
    fn constant_series() {
        assert_eq!(sum_chebyshev(&[5.0], 0.3), 5.0);
    }

    #[test]
    fn linear_series_matches_closed_form() {
        // c0 + c1 * T1(s) = c0 + c1*s
        let v = sum_chebyshev(&[1.0, 2.0], 0.5);
        assert!((v - 2.0).abs() < 1e-12);
    }

    #[test]
    fn quadratic_series_matches_t2_identity() {
        // T2(s) = 2s^2 - 1
        let s = 0.37;
        let expected = 2.0 * s * s - 1.0;
        assert!((sum_chebyshev(&[0.0, 0.0, 1.0], s) - expected).abs() < 1e-12);
    }

    #[test]
    fn derivative_of_linear_series_is_flat() {
        let d = chebyshev_derivative(&[1.0, 3.0], 0.5);
        assert!((d - 3.0).abs() < 1e-12);
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let coeffs = [0.3, -1.2, 0.7, 2.1];
        let s = 0.2;
        let h = 1e-6;
        let numeric = (sum_chebyshev(&coeffs, s + h) - sum_chebyshev(&coeffs, s - h)) / (2.0 * h);
        let analytic = chebyshev_derivative(&coeffs, s);
        assert!((numeric - analytic).abs() < 1e-5, "numeric={numeric}, analytic={analytic}");
    }

    #[test]
    fn derivative_of_constant_series_is_zero() {
        assert_eq!(chebyshev_derivative(&[4.2], 0.1), 0.0);
    }
}
