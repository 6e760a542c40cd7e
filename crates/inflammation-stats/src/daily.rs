//! Daily statistics across a cohort.
//!
//! Each function reduces an inflammation table of shape `(patients, days)`
//! down its columns, producing one value per day. A table with no patients
//! has nothing to reduce, so every function returns `None` for it.

use ndarray::{Array1, ArrayBase, ArrayView1, Axis, Data, Ix2};

/// Calculates the arithmetic mean of each day across all patients.
///
/// # Examples
///
/// ```
/// use inflammation_stats::daily::daily_mean;
/// use ndarray::array;
///
/// let data = array![[0.0, 0.0], [0.0, 0.0], [0.0, 0.0]];
/// assert_eq!(daily_mean(&data).unwrap(), array![0.0, 0.0]);
/// ```
#[must_use]
pub fn daily_mean<S>(data: &ArrayBase<S, Ix2>) -> Option<Array1<f64>>
where
    S: Data<Elem = f64>,
{
    data.mean_axis(Axis(0))
}

/// Calculates the maximum of each day across all patients.
///
/// A NaN reading makes that day's maximum NaN.
#[must_use]
pub fn daily_max<S>(data: &ArrayBase<S, Ix2>) -> Option<Array1<f64>>
where
    S: Data<Elem = f64>,
{
    reduce_days(data, f64::NEG_INFINITY, f64::max)
}

/// Calculates the minimum of each day across all patients.
///
/// A NaN reading makes that day's minimum NaN.
#[must_use]
pub fn daily_min<S>(data: &ArrayBase<S, Ix2>) -> Option<Array1<f64>>
where
    S: Data<Elem = f64>,
{
    reduce_days(data, f64::INFINITY, f64::min)
}

/// Calculates the population standard deviation of each day across all
/// patients, ignoring NaN readings.
///
/// A day on which every reading is NaN has a standard deviation of NaN.
///
/// # Examples
///
/// ```
/// use inflammation_stats::daily::daily_sd;
/// use ndarray::array;
///
/// let data = array![[1.0, f64::NAN], [3.0, 5.0]];
/// assert_eq!(daily_sd(&data).unwrap(), array![1.0, 0.0]);
/// ```
#[must_use]
pub fn daily_sd<S>(data: &ArrayBase<S, Ix2>) -> Option<Array1<f64>>
where
    S: Data<Elem = f64>,
{
    if data.nrows() == 0 {
        return None;
    }
    Some(data.map_axis(Axis(0), nan_std))
}

fn reduce_days<S, F>(data: &ArrayBase<S, Ix2>, init: f64, f: F) -> Option<Array1<f64>>
where
    S: Data<Elem = f64>,
    F: Fn(f64, f64) -> f64,
{
    if data.nrows() == 0 {
        return None;
    }
    // `f64::max`/`f64::min` drop NaN operands; a reading of NaN must win instead.
    Some(data.fold_axis(Axis(0), init, |&acc, &value| {
        if acc.is_nan() || value.is_nan() {
            f64::NAN
        } else {
            f(acc, value)
        }
    }))
}

#[expect(clippy::cast_precision_loss)]
fn nan_std(values: ArrayView1<'_, f64>) -> f64 {
    let (sum, count) = values
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0_usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return f64::NAN;
    }

    let n = count as f64;
    let mean = sum / n;
    let variance = values
        .iter()
        .filter(|v| !v.is_nan())
        .map(|v| (v - mean).powi(2))
        .sum::<f64>()
        / n;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};

    use super::*;

    fn assert_all_close(actual: &Array1<f64>, expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "length mismatch: {actual}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "expected {expected:?}, got {actual}");
        }
    }

    fn sample() -> Array2<f64> {
        array![[1.0, 2.0, 1.0, 7.0], [3.0, 4.0, 4.0, 1.0], [5.0, 6.0, 5.0, 3.0]]
    }

    #[test]
    fn test_daily_mean_zeros() {
        let data = Array2::<f64>::zeros((3, 2));
        assert_all_close(&daily_mean(&data).unwrap(), &[0.0, 0.0]);
    }

    #[test]
    fn test_daily_mean_integers() {
        let data = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        assert_all_close(&daily_mean(&data).unwrap(), &[3.0, 4.0]);
    }

    #[test]
    fn test_daily_mean_per_column() {
        assert_all_close(
            &daily_mean(&sample()).unwrap(),
            &[3.0, 4.0, 10.0 / 3.0, 11.0 / 3.0],
        );
    }

    #[test]
    fn test_daily_max_and_min() {
        assert_all_close(&daily_max(&sample()).unwrap(), &[5.0, 6.0, 5.0, 7.0]);
        assert_all_close(&daily_min(&sample()).unwrap(), &[1.0, 2.0, 1.0, 1.0]);
    }

    #[test]
    fn test_daily_max_min_propagate_nan() {
        let data = array![[1.0, f64::NAN], [2.0, 3.0]];
        let max = daily_max(&data).unwrap();
        let min = daily_min(&data).unwrap();
        assert!((max[0] - 2.0).abs() < f64::EPSILON);
        assert!(max[1].is_nan());
        assert!((min[0] - 1.0).abs() < f64::EPSILON);
        assert!(min[1].is_nan());
    }

    #[test]
    fn test_daily_sd_population() {
        // Column [1, 3, 5]: mean 3, squared deviations 4 + 0 + 4, variance 8/3
        let sd = daily_sd(&sample()).unwrap();
        assert!((sd[0] - (8.0_f64 / 3.0).sqrt()).abs() < 1e-9);
        assert_eq!(sd.len(), 4);
    }

    #[test]
    fn test_daily_sd_ignores_nan() {
        let data = array![[2.0, f64::NAN], [4.0, f64::NAN], [f64::NAN, f64::NAN]];
        let sd = daily_sd(&data).unwrap();
        assert!((sd[0] - 1.0).abs() < 1e-9);
        assert!(sd[1].is_nan());
    }

    #[test]
    fn test_no_patients() {
        let data = Array2::<f64>::zeros((0, 4));
        assert!(daily_mean(&data).is_none());
        assert!(daily_max(&data).is_none());
        assert!(daily_min(&data).is_none());
        assert!(daily_sd(&data).is_none());
    }

    #[test]
    fn test_no_days() {
        let data = Array2::<f64>::zeros((3, 0));
        assert_eq!(daily_mean(&data).unwrap().len(), 0);
        assert_eq!(daily_max(&data).unwrap().len(), 0);
        assert_eq!(daily_sd(&data).unwrap().len(), 0);
    }
}
