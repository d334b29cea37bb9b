//! Statistical estimators.
//!
//! Sample moments use ddof = 1; skewness and kurtosis carry the standard
//! bias corrections; the percentile uses linear interpolation between order
//! statistics. These are the NumPy/pandas conventions, kept so the
//! dashboard's numbers stay stable across stack changes.

use crate::error::{MathError, MathResult};
use nalgebra::DMatrix;
use statrs::distribution::{ContinuousCDF, Normal};

/// Arithmetic mean. `None` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance (ddof = 1). `None` below 2 observations.
#[must_use]
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Some(ss / (n - 1) as f64)
}

/// Sample standard deviation (ddof = 1). `None` below 2 observations.
#[must_use]
pub fn sample_std(values: &[f64]) -> Option<f64> {
    sample_variance(values).map(f64::sqrt)
}

/// Percentile with linear interpolation between order statistics.
///
/// `pct` is in [0, 100]. The position is `pct/100 × (n−1)`; fractional
/// positions interpolate between the surrounding sorted values.
///
/// # Errors
///
/// Returns an error for an empty slice or an out-of-range `pct`.
pub fn percentile(values: &[f64], pct: f64) -> MathResult<f64> {
    if values.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    if !(0.0..=100.0).contains(&pct) || !pct.is_finite() {
        return Err(MathError::invalid_probability(pct, 0.0, 100.0));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let position = pct / 100.0 * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let fraction = position - lower as f64;

    if fraction == 0.0 || lower + 1 >= sorted.len() {
        Ok(sorted[lower])
    } else {
        Ok(sorted[lower] + fraction * (sorted[lower + 1] - sorted[lower]))
    }
}

/// Bias-corrected sample skewness (G1). `None` below 3 observations; 0 for
/// a zero-variance sample.
///
/// ## Formula
///
/// ```text
/// G1 = n·√(n−1)/(n−2) × S3 / S2^(3/2)
/// ```
///
/// where S2, S3 are the sums of squared and cubed deviations.
#[must_use]
pub fn skewness(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 3 {
        return None;
    }
    let m = mean(values)?;
    let s2: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    let s3: f64 = values.iter().map(|v| (v - m).powi(3)).sum();

    if s2 == 0.0 {
        return Some(0.0);
    }

    let n_f = n as f64;
    Some(n_f * (n_f - 1.0).sqrt() / (n_f - 2.0) * s3 / s2.powf(1.5))
}

/// Bias-corrected excess kurtosis (G2). `None` below 4 observations; 0 for
/// a zero-variance sample.
///
/// ## Formula
///
/// ```text
/// G2 = n(n+1)(n−1)·S4 / [(n−2)(n−3)·S2²] − 3(n−1)² / [(n−2)(n−3)]
/// ```
///
/// where S2, S4 are the sums of squared and fourth-power deviations. A
/// normal sample has G2 ≈ 0.
#[must_use]
pub fn excess_kurtosis(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 4 {
        return None;
    }
    let m = mean(values)?;
    let s2: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    let s4: f64 = values.iter().map(|v| (v - m).powi(4)).sum();

    if s2 == 0.0 {
        return Some(0.0);
    }

    let n_f = n as f64;
    let numerator = n_f * (n_f + 1.0) * (n_f - 1.0) * s4;
    let denominator = (n_f - 2.0) * (n_f - 3.0) * s2 * s2;
    let adjustment = 3.0 * (n_f - 1.0) * (n_f - 1.0) / ((n_f - 2.0) * (n_f - 3.0));

    Some(numerator / denominator - adjustment)
}

/// Sample covariance matrix (ddof = 1) over column variables.
///
/// # Errors
///
/// Returns an error below 2 rows.
pub fn covariance_matrix(data: &DMatrix<f64>) -> MathResult<DMatrix<f64>> {
    let n = data.nrows();
    if n < 2 {
        return Err(MathError::insufficient_data(2, n));
    }

    let mut centered = data.clone();
    for mut column in centered.column_iter_mut() {
        let m = column.sum() / n as f64;
        column.add_scalar_mut(-m);
    }

    Ok(centered.transpose() * &centered / (n - 1) as f64)
}

/// Pearson correlation matrix over column variables.
///
/// Entries involving a zero-variance column are NaN; the caller decides
/// how undefined correlations serialize. Defined entries are clamped to
/// [−1, 1].
///
/// # Errors
///
/// Returns an error below 2 rows.
pub fn correlation_matrix(data: &DMatrix<f64>) -> MathResult<DMatrix<f64>> {
    let cov = covariance_matrix(data)?;
    let k = cov.nrows();

    let mut corr = DMatrix::from_element(k, k, f64::NAN);
    for i in 0..k {
        if cov[(i, i)] > 0.0 {
            corr[(i, i)] = 1.0;
        }
        for j in (i + 1)..k {
            let denom_sq = cov[(i, i)] * cov[(j, j)];
            if denom_sq > 0.0 {
                let r = (cov[(i, j)] / denom_sq.sqrt()).clamp(-1.0, 1.0);
                corr[(i, j)] = r;
                corr[(j, i)] = r;
            }
        }
    }
    Ok(corr)
}

/// Quantile of the standard normal distribution.
///
/// # Errors
///
/// Returns an error unless `p` is strictly inside (0, 1).
pub fn normal_quantile(p: f64) -> MathResult<f64> {
    if !(p > 0.0 && p < 1.0) {
        return Err(MathError::invalid_probability(p, 0.0, 1.0));
    }
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| MathError::invalid_input(format!("standard normal: {e}")))?;
    Ok(normal.inverse_cdf(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_sample_std() {
        // ddof = 1: var([1,2,3,4]) = 5/3
        let std = sample_std(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_relative_eq!(std, (5.0_f64 / 3.0).sqrt(), epsilon = 1e-12);

        assert_eq!(sample_std(&[1.0]), None);
        assert_eq!(sample_std(&[]), None);
    }

    #[test]
    fn test_percentile_interpolates() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(percentile(&values, 25.0).unwrap(), 1.75);
        assert_relative_eq!(percentile(&values, 0.0).unwrap(), 1.0);
        assert_relative_eq!(percentile(&values, 100.0).unwrap(), 4.0);
        assert_relative_eq!(percentile(&values, 50.0).unwrap(), 2.5);
    }

    #[test]
    fn test_percentile_single_value() {
        assert_eq!(percentile(&[7.0], 5.0).unwrap(), 7.0);
        assert_eq!(percentile(&[7.0], 95.0).unwrap(), 7.0);
    }

    #[test]
    fn test_percentile_unsorted_input() {
        let values = [3.0, 1.0, 4.0, 2.0];
        assert_relative_eq!(percentile(&values, 25.0).unwrap(), 1.75);
    }

    #[test]
    fn test_percentile_rejects_bad_pct() {
        assert!(percentile(&[1.0], -1.0).is_err());
        assert!(percentile(&[1.0], 101.0).is_err());
        assert!(percentile(&[], 50.0).is_err());
    }

    #[test]
    fn test_skewness_symmetric_is_zero() {
        assert_relative_eq!(
            skewness(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(),
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_skewness_right_tail_positive() {
        let g1 = skewness(&[1.0, 2.0, 3.0, 4.0, 10.0]).unwrap();
        assert!(g1 > 1.0);
    }

    #[test]
    fn test_skewness_needs_three_points() {
        assert_eq!(skewness(&[1.0, 2.0]), None);
    }

    #[test]
    fn test_skewness_constant_is_zero() {
        assert_eq!(skewness(&[2.0, 2.0, 2.0]), Some(0.0));
    }

    #[test]
    fn test_kurtosis_uniform_five_points() {
        // Known bias-corrected value for [1..5].
        assert_relative_eq!(
            excess_kurtosis(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap(),
            -1.2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_kurtosis_needs_four_points() {
        assert_eq!(excess_kurtosis(&[1.0, 2.0, 3.0]), None);
    }

    #[test]
    fn test_kurtosis_constant_is_zero() {
        assert_eq!(excess_kurtosis(&[1.0, 1.0, 1.0, 1.0]), Some(0.0));
    }

    #[test]
    fn test_covariance_matrix() {
        // Columns [1,2,3] and [2,4,6]: var 1 and 4, cov 2.
        let data = DMatrix::from_row_slice(3, 2, &[1.0, 2.0, 2.0, 4.0, 3.0, 6.0]);
        let cov = covariance_matrix(&data).unwrap();

        assert_relative_eq!(cov[(0, 0)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(cov[(1, 1)], 4.0, epsilon = 1e-12);
        assert_relative_eq!(cov[(0, 1)], 2.0, epsilon = 1e-12);
        assert_relative_eq!(cov[(1, 0)], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_covariance_needs_two_rows() {
        let data = DMatrix::from_row_slice(1, 2, &[1.0, 2.0]);
        assert!(covariance_matrix(&data).is_err());
    }

    #[test]
    fn test_correlation_perfect() {
        let data = DMatrix::from_row_slice(3, 2, &[1.0, 2.0, 2.0, 4.0, 3.0, 6.0]);
        let corr = correlation_matrix(&data).unwrap();

        assert_eq!(corr[(0, 1)], 1.0);
        assert_eq!(corr[(0, 0)], 1.0);
        assert_eq!(corr[(1, 1)], 1.0);
    }

    #[test]
    fn test_correlation_identical_columns_is_exactly_one() {
        let data = DMatrix::from_row_slice(4, 2, &[0.02, 0.02, -0.01, -0.01, 0.04, 0.04, -0.07, -0.07]);
        let corr = correlation_matrix(&data).unwrap();
        assert_eq!(corr[(0, 1)], 1.0);
    }

    #[test]
    fn test_correlation_zero_variance_is_nan() {
        let data = DMatrix::from_row_slice(3, 2, &[1.0, 5.0, 2.0, 5.0, 3.0, 5.0]);
        let corr = correlation_matrix(&data).unwrap();

        assert!(corr[(0, 1)].is_nan());
        assert!(corr[(1, 1)].is_nan());
        assert_eq!(corr[(0, 0)], 1.0);
    }

    #[test]
    fn test_normal_quantile() {
        assert_relative_eq!(normal_quantile(0.05).unwrap(), -1.6448536, epsilon = 1e-6);
        assert_relative_eq!(normal_quantile(0.5).unwrap(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(normal_quantile(0.99).unwrap(), 2.3263479, epsilon = 1e-6);
        assert!(normal_quantile(0.0).is_err());
        assert!(normal_quantile(1.0).is_err());
    }
}
