//! Per-patient normalisation of inflammation tables.

use ndarray::{Array2, ArrayBase, ArrayView1, Data, Dimension, Ix2};

/// Error returned when a table cannot be normalised.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum NormaliseError {
    #[display("inflammation array should be 2-dimensional, got {ndim} dimension(s)")]
    Dimensionality { ndim: usize },
    #[display("inflammation values should be non-negative, got {value} at row {row}, column {column}")]
    NegativeValue { row: usize, column: usize, value: f64 },
}

/// Normalises each patient's readings by that patient's maximum reading.
///
/// The maximum of a row ignores NaN readings. Where the division is undefined
/// (a row maximum of zero or NaN, or a NaN reading) the output is `0.0`, so
/// every output value lies in `[0, 1]`. The input is left untouched.
///
/// Any array dimensionality is accepted by the signature, but only 2D tables
/// are valid inflammation data.
///
/// # Examples
///
/// ```
/// use inflammation_stats::normalise::patient_normalise;
/// use ndarray::array;
///
/// let data = array![[1.0, 2.0, 4.0], [0.0, 0.0, 0.0]];
/// let normalised = patient_normalise(&data).unwrap();
/// assert_eq!(normalised, array![[0.25, 0.5, 1.0], [0.0, 0.0, 0.0]]);
/// ```
///
/// Arrays of the wrong dimensionality or with negative readings are rejected:
///
/// ```
/// use inflammation_stats::normalise::{NormaliseError, patient_normalise};
/// use ndarray::array;
///
/// let err = patient_normalise(&array![1.0, 2.0]).unwrap_err();
/// assert_eq!(err, NormaliseError::Dimensionality { ndim: 1 });
///
/// assert!(matches!(
///     patient_normalise(&array![[1.0, -2.0]]),
///     Err(NormaliseError::NegativeValue { row: 0, column: 1, .. })
/// ));
/// ```
///
/// Anything that is not an array does not type-check:
///
/// ```compile_fail
/// use inflammation_stats::normalise::patient_normalise;
///
/// let _ = patient_normalise(&vec![1.0, 2.0, 3.0]);
/// ```
pub fn patient_normalise<S, D>(data: &ArrayBase<S, D>) -> Result<Array2<f64>, NormaliseError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let ndim = data.ndim();
    let data = data
        .view()
        .into_dimensionality::<Ix2>()
        .map_err(|_| NormaliseError::Dimensionality { ndim })?;

    if let Some(((row, column), &value)) = data.indexed_iter().find(|(_, value)| **value < 0.0) {
        return Err(NormaliseError::NegativeValue { row, column, value });
    }

    let mut normalised = data.to_owned();
    for mut row in normalised.rows_mut() {
        let max = nan_max(row.view());
        row.mapv_inplace(|value| guarded_div(value, max));
    }
    Ok(normalised)
}

fn nan_max(values: ArrayView1<'_, f64>) -> f64 {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .reduce(f64::max)
        .unwrap_or(f64::NAN)
}

fn guarded_div(value: f64, max: f64) -> f64 {
    if max.is_nan() || max <= 0.0 {
        return 0.0;
    }
    let ratio = value / max;
    if ratio.is_nan() { 0.0 } else { ratio }
}
