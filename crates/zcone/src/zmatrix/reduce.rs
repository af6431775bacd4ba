//! Row reductions: rational reduced row echelon form and integral echelon form.

use num_bigint::BigInt;
use num_integer::Integer as _;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::vector::ZVector;

/// Reduced row echelon form of a set of integer rows, computed over Q.
///
/// Every stored row has a leading 1 in its pivot column and zeros in all other
/// pivot columns. Rows are ordered by pivot column.
#[derive(Clone, Debug)]
pub(crate) struct Echelon {
    width: usize,
    rows: Vec<Vec<BigRational>>,
    pivots: Vec<usize>,
}

impl Echelon {
    pub(crate) fn new<'a, I>(width: usize, rows: I) -> Self
    where
        I: IntoIterator<Item = &'a ZVector>,
    {
        let mut m: Vec<Vec<BigRational>> = rows.into_iter().map(|r| r.to_rational()).collect();
        let mut pivots = Vec::new();
        let mut top = 0;
        for col in 0..width {
            if top == m.len() {
                break;
            }
            let Some(p) = (top..m.len()).find(|&i| !m[i][col].is_zero()) else {
                continue;
            };
            m.swap(top, p);
            let inv = m[top][col].recip();
            for x in m[top].iter_mut() {
                *x *= &inv;
            }
            let pivot_row = m[top].clone();
            for (i, row) in m.iter_mut().enumerate() {
                if i == top || row[col].is_zero() {
                    continue;
                }
                let f = row[col].clone();
                for (x, y) in row.iter_mut().zip(&pivot_row) {
                    *x -= &f * y;
                }
            }
            pivots.push(col);
            top += 1;
        }
        m.truncate(top);
        Self {
            width,
            rows: m,
            pivots,
        }
    }

    #[inline]
    pub(crate) fn rank(&self) -> usize {
        self.pivots.len()
    }

    /// Primitive integer rows, positive at their pivot.
    pub(crate) fn basis(&self) -> Vec<ZVector> {
        self.rows
            .iter()
            .map(|r| ZVector::from_rational_primitive(r))
            .collect()
    }

    /// Primitive integer basis of the null space, one vector per free column.
    pub(crate) fn kernel(&self) -> Vec<ZVector> {
        let mut out = Vec::with_capacity(self.width - self.rank());
        let mut next_pivot = 0;
        for free in 0..self.width {
            if next_pivot < self.pivots.len() && self.pivots[next_pivot] == free {
                next_pivot += 1;
                continue;
            }
            let mut x = vec![BigRational::zero(); self.width];
            x[free] = BigRational::one();
            for (row, &p) in self.rows.iter().zip(&self.pivots) {
                x[p] = -row[free].clone();
            }
            out.push(ZVector::from_rational_primitive(&x));
        }
        out
    }

    /// Normal form of `v` modulo the row space: zero in every pivot column,
    /// made primitive. Two vectors differing by an element of the row space
    /// (up to positive scaling) reduce to the same result.
    pub(crate) fn reduce(&self, v: &ZVector) -> ZVector {
        let mut x = v.to_rational();
        for (row, &p) in self.rows.iter().zip(&self.pivots) {
            if x[p].is_zero() {
                continue;
            }
            let f = x[p].clone();
            for (a, b) in x.iter_mut().zip(row) {
                *a -= &f * b;
            }
        }
        ZVector::from_rational_primitive(&x)
    }
}

/// Unimodular row reduction of the first `cols` columns of `rows`.
///
/// Only row swaps, negations and adding integer multiples of one row to
/// another are used, so the lattice spanned by the rows is unchanged. On
/// return the leading `cols` columns are in (row) echelon form with positive
/// pivots.
pub(crate) fn integral_row_echelon(rows: &mut [Vec<BigInt>], cols: usize) {
    let mut top = 0;
    for col in 0..cols {
        if top == rows.len() {
            break;
        }
        loop {
            // Smallest nonzero absolute value in this column below `top`.
            let pick = (top..rows.len())
                .filter(|&i| !rows[i][col].is_zero())
                .min_by(|&a, &b| rows[a][col].abs().cmp(&rows[b][col].abs()));
            let Some(p) = pick else {
                break;
            };
            rows.swap(top, p);
            if rows[top][col].is_negative() {
                for x in rows[top].iter_mut() {
                    *x = -&*x;
                }
            }
            let pivot_row = rows[top].clone();
            let mut done = true;
            for row in rows.iter_mut().skip(top + 1) {
                if row[col].is_zero() {
                    continue;
                }
                let q = row[col].div_floor(&pivot_row[col]);
                for (x, y) in row.iter_mut().zip(&pivot_row) {
                    *x -= &q * y;
                }
                if !row[col].is_zero() {
                    done = false;
                }
            }
            if done {
                top += 1;
                break;
            }
        }
    }
}
