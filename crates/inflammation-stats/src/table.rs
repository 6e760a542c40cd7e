//! Loading and saving inflammation tables.
//!
//! An inflammation table is a 2D array of `f64` where each row holds the
//! readings of one patient and each column one day across all patients.
//! On disk it is plain comma-separated text with no header row.

use std::{
    fs::File,
    io::{self, BufReader},
    num::ParseFloatError,
    path::{Path, PathBuf},
};

use ndarray::{Array2, ArrayBase, Data, Ix2, ShapeError};

/// Error returned when an inflammation table cannot be loaded.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    #[display("cannot open inflammation file {}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[display("malformed CSV input")]
    Csv { source: csv::Error },
    #[display("line {line}, column {column}: {field:?} is not a number")]
    Parse {
        line: u64,
        column: usize,
        field: String,
        source: ParseFloatError,
    },
    #[display("line {line}: expected {expected} fields, found {found}")]
    Ragged {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[display("cannot shape readings into a table")]
    Shape { source: ShapeError },
}

/// Loads an inflammation table from a CSV file.
///
/// # Examples
///
/// ```no_run
/// let table = inflammation_stats::table::load_csv("data/inflammation-01.csv").unwrap();
/// println!("{} patients over {} days", table.nrows(), table.ncols());
/// ```
pub fn load_csv<P>(path: P) -> Result<Array2<f64>, LoadError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;
    let table = read_csv(BufReader::new(file))?;
    tracing::debug!(
        path = %path.display(),
        patients = table.nrows(),
        days = table.ncols(),
        "loaded inflammation table"
    );
    Ok(table)
}

/// Reads an inflammation table from any CSV source.
///
/// Every line must carry the same number of fields. Whitespace around a field
/// is ignored and empty lines are skipped. An empty input yields a `0 x 0`
/// table.
///
/// # Examples
///
/// ```
/// use inflammation_stats::table::read_csv;
///
/// let table = read_csv("0,1,2\n3,4,5\n".as_bytes()).unwrap();
/// assert_eq!(table.dim(), (2, 3));
/// assert_eq!(table[[1, 2]], 5.0);
/// ```
pub fn read_csv<R>(reader: R) -> Result<Array2<f64>, LoadError>
where
    R: io::Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut values = vec![];
    let mut num_rows = 0;
    let mut num_columns = None;

    for record in reader.records() {
        let record = record.map_err(|source| LoadError::Csv { source })?;
        // Whitespace-only lines trim down to a single empty field.
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record.position().map_or(0, csv::Position::line);

        let expected = *num_columns.get_or_insert(record.len());
        if record.len() != expected {
            return Err(LoadError::Ragged {
                line,
                expected,
                found: record.len(),
            });
        }

        for (column, field) in record.iter().enumerate() {
            let value = field.parse::<f64>().map_err(|source| LoadError::Parse {
                line,
                column: column + 1,
                field: field.to_owned(),
                source,
            })?;
            values.push(value);
        }
        num_rows += 1;
    }

    Array2::from_shape_vec((num_rows, num_columns.unwrap_or(0)), values)
        .map_err(|source| LoadError::Shape { source })
}

/// Writes a table in the same comma-separated format [`read_csv`] accepts.
pub fn write_csv<W, S>(writer: W, table: &ArrayBase<S, Ix2>) -> csv::Result<()>
where
    W: io::Write,
    S: Data<Elem = f64>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for row in table.rows() {
        writer.write_record(row.iter().map(f64::to_string))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use ndarray::array;

    use super::*;

    #[test]
    fn test_read_shape_matches_lines_and_fields() {
        let table = read_csv("1,2,1,7\n3,4,4,1\n5,6,5,3\n".as_bytes()).unwrap();
        assert_eq!(
            table,
            array![[1.0, 2.0, 1.0, 7.0], [3.0, 4.0, 4.0, 1.0], [5.0, 6.0, 5.0, 3.0]]
        );
    }

    #[test]
    fn test_read_trims_whitespace_and_skips_blank_lines() {
        let table = read_csv(" 0.5, 1 \n\n2 ,3.25\n".as_bytes()).unwrap();
        assert_eq!(table, array![[0.5, 1.0], [2.0, 3.25]]);
    }

    #[test]
    fn test_read_skips_whitespace_only_lines() {
        let table = read_csv("1,2\n   \n3,4\n \t \n".as_bytes()).unwrap();
        assert_eq!(table, array![[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn test_read_keeps_line_numbers_after_whitespace_only_lines() {
        let err = read_csv("1,2\n  \n3,x\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 3, column: 2, .. }), "{err}");
    }

    #[test]
    fn test_read_empty_input() {
        let table = read_csv("".as_bytes()).unwrap();
        assert_eq!(table.dim(), (0, 0));
    }

    #[test]
    fn test_read_rejects_non_numeric_field() {
        let err = read_csv("1,2\n3,abc\n".as_bytes()).unwrap_err();
        match err {
            LoadError::Parse {
                line, column, field, ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(column, 2);
                assert_eq!(field, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_rejects_ragged_rows() {
        let err = read_csv("1,2,3\n4,5\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Ragged {
                line: 2,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");
        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("missing.csv"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0,0,1").unwrap();
        writeln!(file, "0,1,2").unwrap();
        file.flush().unwrap();

        let table = load_csv(file.path()).unwrap();
        assert_eq!(table, array![[0.0, 0.0, 1.0], [0.0, 1.0, 2.0]]);
    }

    #[test]
    fn test_write_then_read_preserves_table() {
        let table = array![[0.0, 0.5, 1.0], [0.25, 1.0, 0.0]];
        let mut buf = vec![];
        write_csv(&mut buf, &table).unwrap();
        assert_eq!(String::from_utf8(buf.clone()).unwrap(), "0,0.5,1\n0.25,1,0\n");
        assert_eq!(read_csv(buf.as_slice()).unwrap(), table);
    }
}
