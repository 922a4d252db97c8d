//! Numeric kernels consumed by the plot widgets: a least-squares line fit
//! for the scatter trend line and a Gaussian kernel density estimate for
//! the ridge plot.

// ---------------------------------------------------------------------------
// Ordinary least squares
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fit `y = a + b·x` by simple least squares.
///
/// Returns `None` for fewer than two points or a degenerate x spread
/// (vertical line), where the fit is undefined.
pub fn linear_fit(points: &[[f64; 2]]) -> Option<LinearFit> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p[0]).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p[1]).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for p in points {
        let dx = p[0] - mean_x;
        sxx += dx * dx;
        sxy += dx * (p[1] - mean_y);
    }
    if sxx <= f64::EPSILON {
        return None;
    }
    let slope = sxy / sxx;
    Some(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

// ---------------------------------------------------------------------------
// Gaussian kernel density estimation
// ---------------------------------------------------------------------------

/// Grid resolution for the evaluated density curve.
const KDE_GRID: usize = 200;

/// Evaluate a Gaussian KDE of `samples` on an evenly spaced grid spanning
/// the sample extent padded by three bandwidths. Returns `(x, density)`
/// pairs; empty input yields an empty curve.
pub fn gaussian_kde(samples: &[f64], bandwidth: f64) -> Vec<[f64; 2]> {
    if samples.is_empty() || bandwidth <= 0.0 {
        return Vec::new();
    }
    let lo = samples.iter().cloned().fold(f64::INFINITY, f64::min) - 3.0 * bandwidth;
    let hi = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max) + 3.0 * bandwidth;
    let step = (hi - lo) / (KDE_GRID - 1) as f64;

    let norm = 1.0 / (samples.len() as f64 * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    (0..KDE_GRID)
        .map(|i| {
            let x = lo + i as f64 * step;
            let density: f64 = samples
                .iter()
                .map(|&s| (-0.5 * ((x - s) / bandwidth).powi(2)).exp())
                .sum::<f64>()
                * norm;
            [x, density]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_recovers_an_exact_line() {
        let points = [[0.0, 1.0], [1.0, 3.0], [2.0, 5.0], [3.0, 7.0]];
        let fit = linear_fit(&points).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!((fit.at(10.0) - 21.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_inputs_have_no_fit() {
        assert!(linear_fit(&[]).is_none());
        assert!(linear_fit(&[[1.0, 2.0]]).is_none());
        // All x identical: vertical spread, undefined slope.
        assert!(linear_fit(&[[2.0, 1.0], [2.0, 5.0], [2.0, 9.0]]).is_none());
    }

    #[test]
    fn kde_integrates_to_one() {
        let samples = [0.10, 0.12, 0.15, 0.16, 0.18, 0.22];
        let curve = gaussian_kde(&samples, 0.01);
        assert_eq!(curve.len(), 200);

        // Trapezoidal integral over the padded grid.
        let mut integral = 0.0;
        for pair in curve.windows(2) {
            let dx = pair[1][0] - pair[0][0];
            integral += 0.5 * (pair[0][1] + pair[1][1]) * dx;
        }
        assert!((integral - 1.0).abs() < 0.02, "integral = {integral}");
    }

    #[test]
    fn kde_peaks_near_the_sample_mass() {
        let samples = [0.15, 0.15, 0.15, 0.16, 0.14];
        let curve = gaussian_kde(&samples, 0.01);
        let peak = curve
            .iter()
            .cloned()
            .max_by(|a, b| a[1].total_cmp(&b[1]))
            .unwrap();
        assert!((peak[0] - 0.15).abs() < 0.01, "peak at {}", peak[0]);
    }

    #[test]
    fn kde_of_nothing_is_empty() {
        assert!(gaussian_kde(&[], 0.01).is_empty());
        assert!(gaussian_kde(&[0.15], 0.0).is_empty());
    }
}
