//! Column-wise integer encoding of categorical tables.
//!
//! Every column gets its own alphabet: distinct values are numbered `0, 1, 2, …` in order
//! of first appearance. Codes from different columns are unrelated, so `"Red"` in column 0
//! and `"Red"` in column 2 may well get different codes.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{Error, Result};

/// A rectangular table of categorical codes, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedTable {
    codes: Vec<u32>,
    n_rows: usize,
    n_cols: usize,
    cardinalities: Vec<usize>,
}

impl EncodedTable {
    /// Encode a raw table of categorical values.
    ///
    /// Fails on an empty table, zero-width rows, or rows of inconsistent length.
    pub fn from_rows<T: Eq + Hash>(data: &[Vec<T>]) -> Result<Self> {
        let n_cols = validate_shape(data)?;
        let n_rows = data.len();

        let mut codes = vec![0u32; n_rows * n_cols];
        let mut cardinalities = Vec::with_capacity(n_cols);
        for col in 0..n_cols {
            let mut dict: HashMap<&T, u32> = HashMap::new();
            for (row, record) in data.iter().enumerate() {
                let next = dict.len() as u32;
                let code = *dict.entry(&record[col]).or_insert(next);
                codes[row * n_cols + col] = code;
            }
            cardinalities.push(dict.len());
        }

        Ok(Self {
            codes,
            n_rows,
            n_cols,
            cardinalities,
        })
    }

    /// Number of records (N).
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of attribute columns (M).
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Encoded values of one record.
    #[inline]
    pub fn row(&self, idx: usize) -> &[u32] {
        &self.codes[idx * self.n_cols..(idx + 1) * self.n_cols]
    }

    /// Alphabet size of each column.
    pub fn cardinalities(&self) -> &[usize] {
        &self.cardinalities
    }
}

/// Check that `data` is a non-empty rectangular table and return its width.
pub(crate) fn validate_shape<T>(data: &[Vec<T>]) -> Result<usize> {
    let first = data.first().ok_or(Error::EmptyInput)?;
    let m = first.len();
    if m == 0 {
        return Err(Error::InvalidParameter {
            name: "columns",
            message: "must be at least 1",
        });
    }
    for record in data.iter().skip(1) {
        if record.len() != m {
            return Err(Error::DimensionMismatch {
                expected: m,
                found: record.len(),
            });
        }
    }
    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_first_appearance_per_column() {
        let data = vec![
            vec!["Red", "Small"],
            vec!["Blue", "Red"],
            vec!["Red", "Large"],
            vec!["Green", "Small"],
        ];
        let table = EncodedTable::from_rows(&data).unwrap();

        assert_eq!(table.n_rows(), 4);
        assert_eq!(table.n_cols(), 2);
        assert_eq!(table.row(0), &[0, 0]);
        assert_eq!(table.row(1), &[1, 1]);
        assert_eq!(table.row(2), &[0, 2]);
        assert_eq!(table.row(3), &[2, 0]);
        assert_eq!(table.cardinalities(), &[3, 3]);
    }

    #[test]
    fn works_with_owned_strings_and_integers() {
        let strings: Vec<Vec<String>> = vec![
            vec!["a".to_string(), "x".to_string()],
            vec!["a".to_string(), "y".to_string()],
        ];
        let table = EncodedTable::from_rows(&strings).unwrap();
        assert_eq!(table.cardinalities(), &[1, 2]);

        let ints = vec![vec![7u8, 7], vec![3, 7], vec![7, 1]];
        let table = EncodedTable::from_rows(&ints).unwrap();
        assert_eq!(table.row(1), &[1, 0]);
        assert_eq!(table.row(2), &[0, 1]);
    }

    #[test]
    fn rejects_bad_shapes() {
        let empty: Vec<Vec<&str>> = vec![];
        assert!(matches!(
            EncodedTable::from_rows(&empty),
            Err(Error::EmptyInput)
        ));

        let zero_width: Vec<Vec<&str>> = vec![vec![], vec![]];
        assert!(matches!(
            EncodedTable::from_rows(&zero_width),
            Err(Error::InvalidParameter { name: "columns", .. })
        ));

        let ragged = vec![vec!["a", "b"], vec!["a"]];
        assert!(matches!(
            EncodedTable::from_rows(&ragged),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 1
            })
        ));
    }
}
