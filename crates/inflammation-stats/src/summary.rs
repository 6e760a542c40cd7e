//! Named daily statistics and ordered summaries of an inflammation table.

use std::{fmt, str::FromStr};

use ndarray::{Array1, ArrayBase, Data, Ix2};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::daily;

/// A daily statistic that can be computed over an inflammation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Statistic {
    /// Arithmetic mean, see [`daily::daily_mean`].
    Average,
    /// Maximum, see [`daily::daily_max`].
    Max,
    /// Minimum, see [`daily::daily_min`].
    Min,
    /// Population standard deviation, see [`daily::daily_sd`].
    Std,
}

impl Statistic {
    /// All statistics in their default presentation order.
    pub const ALL: [Self; 4] = [Self::Average, Self::Max, Self::Min, Self::Std];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Average => "average",
            Self::Max => "max",
            Self::Min => "min",
            Self::Std => "std",
        }
    }

    /// Computes this statistic for every day of `data`.
    ///
    /// Returns `None` if the table has no patients.
    #[must_use]
    pub fn compute<S>(self, data: &ArrayBase<S, Ix2>) -> Option<Array1<f64>>
    where
        S: Data<Elem = f64>,
    {
        match self {
            Self::Average => daily::daily_mean(data),
            Self::Max => daily::daily_max(data),
            Self::Min => daily::daily_min(data),
            Self::Std => daily::daily_sd(data),
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown statistic {name:?}, expected one of: average, max, min, std")]
pub struct ParseStatisticError {
    pub name: String,
}

impl FromStr for Statistic {
    type Err = ParseStatisticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "average" | "mean" => Ok(Self::Average),
            "max" => Ok(Self::Max),
            "min" => Ok(Self::Min),
            "std" | "sd" => Ok(Self::Std),
            _ => Err(ParseStatisticError { name: s.to_owned() }),
        }
    }
}

/// Daily statistics of an inflammation table, keyed by statistic.
///
/// Entries keep the order in which they were requested; this is also the
/// order in which they are serialized and plotted.
///
/// # Examples
///
/// ```
/// use inflammation_stats::summary::{DailySummary, Statistic};
/// use ndarray::array;
///
/// let data = array![[1.0, 2.0, 1.0, 7.0], [3.0, 4.0, 4.0, 1.0], [5.0, 6.0, 5.0, 3.0]];
/// let summary = DailySummary::from_table(&data).unwrap();
///
/// assert_eq!(summary.len(), 4);
/// assert_eq!(summary.get(Statistic::Max).unwrap(), &array![5.0, 6.0, 5.0, 7.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    entries: Vec<(Statistic, Array1<f64>)>,
}

impl DailySummary {
    /// Computes every statistic in [`Statistic::ALL`].
    ///
    /// Returns `None` if the table has no patients.
    #[must_use]
    pub fn from_table<S>(data: &ArrayBase<S, Ix2>) -> Option<Self>
    where
        S: Data<Elem = f64>,
    {
        Self::with_statistics(data, &Statistic::ALL)
    }

    /// Computes the given statistics, in the given order.
    ///
    /// A statistic listed more than once is computed once, at its first
    /// position. Returns `None` if the table has no patients.
    #[must_use]
    pub fn with_statistics<S>(data: &ArrayBase<S, Ix2>, statistics: &[Statistic]) -> Option<Self>
    where
        S: Data<Elem = f64>,
    {
        if data.nrows() == 0 {
            return None;
        }
        let mut entries = Vec::<(Statistic, Array1<f64>)>::with_capacity(statistics.len());
        for &statistic in statistics {
            if entries.iter().any(|(s, _)| *s == statistic) {
                continue;
            }
            entries.push((statistic, statistic.compute(data)?));
        }
        Some(Self { entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of days covered by each entry.
    #[must_use]
    pub fn num_days(&self) -> usize {
        self.entries.first().map_or(0, |(_, values)| values.len())
    }

    #[must_use]
    pub fn get(&self, statistic: Statistic) -> Option<&Array1<f64>> {
        self.entries
            .iter()
            .find_map(|(s, values)| (*s == statistic).then_some(values))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Statistic, &Array1<f64>)> {
        self.entries.iter().map(|(s, values)| (*s, values))
    }
}

impl<'a> IntoIterator for &'a DailySummary {
    type Item = (Statistic, &'a Array1<f64>);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl Serialize for DailySummary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (statistic, values) in &self.entries {
            map.serialize_entry(statistic, &values.to_vec())?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};

    use super::*;

    fn sample() -> Array2<f64> {
        array![[1.0, 2.0, 1.0, 7.0], [3.0, 4.0, 4.0, 1.0], [5.0, 6.0, 5.0, 3.0]]
    }

    #[test]
    fn test_default_order() {
        let summary = DailySummary::from_table(&sample()).unwrap();
        let order = summary.iter().map(|(s, _)| s).collect::<Vec<_>>();
        assert_eq!(order, Statistic::ALL);
        assert_eq!(summary.num_days(), 4);
    }

    #[test]
    fn test_entries_match_daily_functions() {
        let data = sample();
        let summary = DailySummary::from_table(&data).unwrap();
        assert_eq!(summary.get(Statistic::Average), daily::daily_mean(&data).as_ref());
        assert_eq!(summary.get(Statistic::Max), daily::daily_max(&data).as_ref());
        assert_eq!(summary.get(Statistic::Min), daily::daily_min(&data).as_ref());
        assert_eq!(summary.get(Statistic::Std), daily::daily_sd(&data).as_ref());
    }

    #[test]
    fn test_selected_statistics_keep_order_and_skip_duplicates() {
        let summary = DailySummary::with_statistics(
            &sample(),
            &[Statistic::Min, Statistic::Average, Statistic::Min],
        )
        .unwrap();
        let order = summary.iter().map(|(s, _)| s).collect::<Vec<_>>();
        assert_eq!(order, [Statistic::Min, Statistic::Average]);
        assert!(summary.get(Statistic::Std).is_none());
    }

    #[test]
    fn test_no_patients() {
        assert!(DailySummary::from_table(&Array2::<f64>::zeros((0, 3))).is_none());
    }

    #[test]
    fn test_parse_statistic() {
        assert_eq!("average".parse(), Ok(Statistic::Average));
        assert_eq!("Mean".parse(), Ok(Statistic::Average));
        assert_eq!(" std ".parse(), Ok(Statistic::Std));
        assert_eq!("sd".parse(), Ok(Statistic::Std));
        assert!("median".parse::<Statistic>().is_err());
        for statistic in Statistic::ALL {
            assert_eq!(statistic.to_string().parse(), Ok(statistic));
        }
    }

    #[test]
    fn test_serialize_as_ordered_map() {
        let data = array![[1.0, 2.0], [3.0, 2.0]];
        let summary =
            DailySummary::with_statistics(&data, &[Statistic::Max, Statistic::Average]).unwrap();
        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(json, r#"{"max":[3.0,2.0],"average":[2.0,2.0]}"#);
    }
}
