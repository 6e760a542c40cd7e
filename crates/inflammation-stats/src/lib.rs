//! Statistics over patient inflammation tables.
//!
//! An inflammation table is an [`ndarray::Array2<f64>`] in which each row
//! holds one patient's readings and each column one day across all patients.
//! This crate provides:
//!
//! - **Loading**: Read and write tables as flat comma-separated text
//! - **Daily statistics**: Mean, maximum, minimum and standard deviation of each day
//! - **Normalisation**: Scale each patient's readings by their own maximum
//! - **Summaries**: An ordered collection of daily statistics, ready to plot or serialize
//!
//! # Modules
//!
//! - [`table`]: CSV loading and saving
//! - [`daily`]: Column-wise reductions across patients
//! - [`normalise`]: Per-patient normalisation
//! - [`summary`]: Named daily statistics in presentation order
//!
//! # Examples
//!
//! ## Computing daily statistics
//!
//! ```
//! use inflammation_stats::daily::{daily_max, daily_mean, daily_min};
//! use ndarray::array;
//!
//! let data = array![[1.0, 2.0, 1.0, 7.0], [3.0, 4.0, 4.0, 1.0], [5.0, 6.0, 5.0, 3.0]];
//! assert_eq!(daily_max(&data).unwrap(), array![5.0, 6.0, 5.0, 7.0]);
//! assert_eq!(daily_min(&data).unwrap(), array![1.0, 2.0, 1.0, 1.0]);
//! assert_eq!(daily_mean(&data).unwrap()[0], 3.0);
//! ```
//!
//! ## Normalising patients
//!
//! ```
//! use inflammation_stats::normalise::patient_normalise;
//! use ndarray::array;
//!
//! let data = array![[2.0, 4.0], [0.0, 0.0]];
//! assert_eq!(patient_normalise(&data).unwrap(), array![[0.5, 1.0], [0.0, 0.0]]);
//! ```
//!
//! ## Summarizing a file
//!
//! ```no_run
//! use inflammation_stats::{summary::DailySummary, table};
//!
//! let data = table::load_csv("inflammation-01.csv").unwrap();
//! if let Some(summary) = DailySummary::from_table(&data) {
//!     for (statistic, values) in &summary {
//!         println!("{statistic}: {values}");
//!     }
//! }
//! ```

pub mod daily;
pub mod normalise;
pub mod summary;
pub mod table;
