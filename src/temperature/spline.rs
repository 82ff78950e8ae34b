//! Natural cubic spline interpolation.

/// A natural cubic spline: piecewise-cubic interpolant with continuous first
/// and second derivatives and zero second derivative at both endpoints.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    knots_x: Vec<f64>,
    knots_y: Vec<f64>,
    /// Second derivative at each knot; zero at both ends (natural boundary).
    second_derivs: Vec<f64>,
}

impl CubicSpline {
    /// Fits a natural cubic spline through the given knots.
    ///
    /// `xs` must be strictly increasing and parallel to `ys`, with at least
    /// two entries; the temperature profile validates this at construction.
    pub fn natural(xs: &[f64], ys: &[f64]) -> Self {
        debug_assert!(xs.len() >= 2);
        debug_assert_eq!(xs.len(), ys.len());

        let n = xs.len();
        let mut second_derivs = vec![0.0; n];

        // With only two knots the spline degenerates to a line.
        if n > 2 {
            let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();

            // Tridiagonal system for the interior second derivatives;
            // the natural boundary pins the first and last to zero.
            let interior = n - 2;
            let mut sub = vec![0.0; interior];
            let mut dia = vec![0.0; interior];
            let mut sup = vec![0.0; interior];
            let mut rhs = vec![0.0; interior];

            for i in 0..interior {
                let k = i + 1;
                sub[i] = h[k - 1];
                dia[i] = 2.0 * (h[k - 1] + h[k]);
                sup[i] = h[k];
                rhs[i] = 6.0 * ((ys[k + 1] - ys[k]) / h[k] - (ys[k] - ys[k - 1]) / h[k - 1]);
            }

            thomas_solve(&sub, &mut dia, &sup, &mut rhs);
            second_derivs[1..=interior].copy_from_slice(&rhs);
        }

        Self {
            knots_x: xs.to_vec(),
            knots_y: ys.to_vec(),
            second_derivs,
        }
    }

    /// Evaluates the spline at `x`.
    ///
    /// Queries outside the knot span clamp to the nearest endpoint, so the
    /// spline never extrapolates.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.knots_x.len();
        let t = x.clamp(self.knots_x[0], self.knots_x[n - 1]);

        let seg = self
            .knots_x
            .partition_point(|&k| k <= t)
            .saturating_sub(1)
            .min(n - 2);

        let h = self.knots_x[seg + 1] - self.knots_x[seg];
        let dx = t - self.knots_x[seg];
        let (m0, m1) = (self.second_derivs[seg], self.second_derivs[seg + 1]);
        let (y0, y1) = (self.knots_y[seg], self.knots_y[seg + 1]);

        let b = (y1 - y0) / h - h * (2.0 * m0 + m1) / 6.0;
        let c = m0 / 2.0;
        let d = (m1 - m0) / (6.0 * h);

        y0 + dx * (b + dx * (c + dx * d))
    }

    /// First and last knot x-values, the closed evaluation interval.
    pub fn span(&self) -> (f64, f64) {
        (self.knots_x[0], self.knots_x[self.knots_x.len() - 1])
    }
}

/// Solve tridiagonal system Ax = rhs in-place using the Thomas algorithm.
///
/// `sub[i]`, `dia[i]`, `sup[i]` are the sub/main/super diagonal coefficients.
/// `rhs` is overwritten with the solution; `dia` is consumed by elimination.
fn thomas_solve(sub: &[f64], dia: &mut [f64], sup: &[f64], rhs: &mut [f64]) {
    let n = dia.len();
    for i in 1..n {
        let w = sub[i] / dia[i - 1];
        dia[i] -= w * sup[i - 1];
        rhs[i] -= w * rhs[i - 1];
    }
    rhs[n - 1] /= dia[n - 1];
    for i in (0..n - 1).rev() {
        rhs[i] = (rhs[i] - sup[i] * rhs[i + 1]) / dia[i];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spline_passes_through_knots() {
        let xs = [0.0, 60.0, 120.0, 180.0, 240.0];
        let ys = [-7.0, -8.0, -6.5, -3.0, 1.0];
        let spline = CubicSpline::natural(&xs, &ys);

        for (&x, &y) in xs.iter().zip(ys.iter()) {
            assert!((spline.eval(x) - y).abs() < 1e-9, "knot at {}", x);
        }
    }

    #[test]
    fn spline_reproduces_lines_exactly() {
        let xs = [0.0, 100.0, 250.0, 400.0];
        let ys: Vec<f64> = xs.iter().map(|x| 0.5 * x - 3.0).collect();
        let spline = CubicSpline::natural(&xs, &ys);

        for x in [0.0, 17.0, 99.0, 125.0, 333.0, 400.0] {
            assert!((spline.eval(x) - (0.5 * x - 3.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn spline_has_natural_boundary() {
        let xs = [0.0, 60.0, 120.0, 180.0, 240.0, 300.0];
        let ys = [-7.0, -8.0, -6.5, -3.0, 1.0, 4.0];
        let spline = CubicSpline::natural(&xs, &ys);

        // Second derivative from central differences should vanish at both
        // ends of the knot span.
        let eps = 1e-3;
        for x in [xs[0] + eps, xs[5] - eps] {
            let dd = (spline.eval(x + eps) - 2.0 * spline.eval(x) + spline.eval(x - eps))
                / (eps * eps);
            assert!(dd.abs() < 1e-3, "second derivative {} at {}", dd, x);
        }
    }

    #[test]
    fn spline_is_smooth_across_knots() {
        let xs = [0.0, 60.0, 120.0, 180.0];
        let ys = [0.0, 5.0, -2.0, 3.0];
        let spline = CubicSpline::natural(&xs, &ys);

        // First derivative should be continuous at the interior knots.
        let eps = 1e-6;
        for &knot in &xs[1..3] {
            let left = (spline.eval(knot) - spline.eval(knot - eps)) / eps;
            let right = (spline.eval(knot + eps) - spline.eval(knot)) / eps;
            assert!((left - right).abs() < 1e-3, "kink at {}", knot);
        }
    }

    #[test]
    fn eval_clamps_outside_knot_span() {
        let xs = [60.0, 120.0, 180.0];
        let ys = [1.0, 4.0, 2.0];
        let spline = CubicSpline::natural(&xs, &ys);

        assert_eq!(spline.eval(-100.0), spline.eval(60.0));
        assert_eq!(spline.eval(0.0), 1.0);
        assert_eq!(spline.eval(1440.0), 2.0);
    }

    #[test]
    fn two_knots_degenerate_to_line() {
        let spline = CubicSpline::natural(&[0.0, 100.0], &[2.0, 12.0]);
        assert!((spline.eval(50.0) - 7.0).abs() < 1e-12);
        assert_eq!(spline.span(), (0.0, 100.0));
    }
}
