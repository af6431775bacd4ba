//! Row-oriented integer matrix.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

use super::reduce::Echelon;
use super::vector::ZVector;
use crate::error::MatrixError;

/// Integer matrix stored as a list of rows of a fixed width.
///
/// Invariants:
/// - Every row has exactly `width` entries (also when there are no rows).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ZMatrix {
    width: usize,
    rows: Vec<ZVector>,
}

impl ZMatrix {
    /// Matrix with no rows.
    #[inline]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            rows: Vec::new(),
        }
    }

    pub fn identity(n: usize) -> Self {
        Self {
            width: n,
            rows: (0..n).map(|i| ZVector::unit(n, i)).collect(),
        }
    }

    /// Unchecked construction; rows must have length `width`.
    pub fn from_rows(width: usize, rows: Vec<ZVector>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == width), "row width mismatch");
        Self { width, rows }
    }

    /// Checked construction for callers validating input up front.
    pub fn try_from_rows(width: usize, rows: Vec<ZVector>) -> Result<Self, MatrixError> {
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(MatrixError::RaggedRows {
                row,
                expected: width,
                found: r.len(),
            });
        }
        Ok(Self { width, rows })
    }

    /// Convenience constructor from small integer rows.
    pub fn from_i64_rows<R: AsRef<[i64]>>(width: usize, rows: &[R]) -> Self {
        let rows: Vec<ZVector> = rows.iter().map(|r| ZVector::from_i64(r.as_ref())).collect();
        assert!(
            rows.iter().all(|r| r.len() == width),
            "row width mismatch in from_i64_rows"
        );
        Self { width, rows }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    pub fn row(&self, i: usize) -> &ZVector {
        &self.rows[i]
    }

    #[inline]
    pub fn rows(&self) -> &[ZVector] {
        &self.rows
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, ZVector> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<ZVector> {
        self.rows
    }

    pub fn append_row(&mut self, row: ZVector) {
        assert_eq!(row.len(), self.width, "appended row has wrong width");
        self.rows.push(row);
    }

    /// Append all rows of `other` (same width) below `self`.
    pub fn append(&mut self, other: &ZMatrix) {
        assert_eq!(other.width, self.width, "appended matrix has wrong width");
        self.rows.extend(other.rows.iter().cloned());
    }

    pub fn remove_row(&mut self, i: usize) -> ZVector {
        self.rows.remove(i)
    }

    /// `self` stacked on top of `other`.
    pub fn combine_on_top(&self, other: &ZMatrix) -> ZMatrix {
        let mut out = self.clone();
        out.append(other);
        out
    }

    /// `[self | other]`; both must have the same height.
    pub fn combine_left_right(&self, other: &ZMatrix) -> ZMatrix {
        assert_eq!(self.height(), other.height(), "height mismatch");
        let rows = self
            .rows
            .iter()
            .zip(&other.rows)
            .map(|(a, b)| a.concat(b))
            .collect();
        ZMatrix::from_rows(self.width + other.width, rows)
    }

    /// Block-diagonal matrix `[self 0; 0 other]`.
    pub fn block_diagonal(&self, other: &ZMatrix) -> ZMatrix {
        let left = ZVector::zeros(self.width);
        let right = ZVector::zeros(other.width);
        let mut rows = Vec::with_capacity(self.height() + other.height());
        rows.extend(self.rows.iter().map(|r| r.concat(&right)));
        rows.extend(other.rows.iter().map(|r| left.concat(r)));
        ZMatrix::from_rows(self.width + other.width, rows)
    }

    pub fn transposed(&self) -> ZMatrix {
        let rows = (0..self.width)
            .map(|j| ZVector::from_vec(self.rows.iter().map(|r| r[j].clone()).collect()))
            .collect();
        ZMatrix::from_rows(self.height(), rows)
    }

    pub fn negated(&self) -> ZMatrix {
        ZMatrix::from_rows(self.width, self.rows.iter().map(|r| -r).collect())
    }

    /// Sum of all rows (the zero vector when empty).
    pub fn row_sum(&self) -> ZVector {
        self.rows
            .iter()
            .fold(ZVector::zeros(self.width), |acc, r| &acc + r)
    }

    pub fn sort_rows(&mut self) {
        self.rows.sort();
    }

    pub fn sort_and_remove_duplicate_rows(&mut self) {
        self.rows.sort();
        self.rows.dedup();
    }

    pub fn remove_zero_rows(&mut self) {
        self.rows.retain(|r| !r.is_zero());
    }

    pub fn rank(&self) -> usize {
        Echelon::new(self.width, &self.rows).rank()
    }

    /// Primitive integer basis of `{x : self·x = 0}`.
    pub fn kernel(&self) -> ZMatrix {
        ZMatrix::from_rows(self.width, Echelon::new(self.width, &self.rows).kernel())
    }

    /// Canonical basis of the row space (reduced echelon rows, primitive,
    /// positive pivots, ordered by pivot column).
    pub fn reduced_basis(&self) -> ZMatrix {
        ZMatrix::from_rows(self.width, Echelon::new(self.width, &self.rows).basis())
    }

    /// All entries are zero (also true without rows).
    pub fn is_zero(&self) -> bool {
        self.rows.iter().all(|r| r.is_zero())
    }
}

impl Index<usize> for ZMatrix {
    type Output = ZVector;
    #[inline]
    fn index(&self, i: usize) -> &ZVector {
        &self.rows[i]
    }
}

impl<'a> IntoIterator for &'a ZMatrix {
    type Item = &'a ZVector;
    type IntoIter = std::slice::Iter<'a, ZVector>;
    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl Ord for ZMatrix {
    fn cmp(&self, other: &Self) -> Ordering {
        self.width
            .cmp(&other.width)
            .then_with(|| self.height().cmp(&other.height()))
            .then_with(|| self.rows.cmp(&other.rows))
    }
}

impl PartialOrd for ZMatrix {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ZMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}x{}", self.height(), self.width)?;
        for r in &self.rows {
            writeln!(f, "  {r}")?;
        }
        Ok(())
    }
}
