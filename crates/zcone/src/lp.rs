//! Exact rational feasibility for small homogeneous systems.
//!
//! Purpose
//! - Decide whether `{x : a_i·x >= b_i, c_j·x <= d_j, e_k·x = 0}` is nonempty
//!   and return a witness. This is the only LP the cone engine needs: implied
//!   equation detection asks "can row i be strictly positive?", redundancy
//!   asks "can row i be negative while the others hold?".
//!
//! Method
//! - Phase-one simplex on a dense `BigRational` tableau. Free variables are
//!   split as `x = u − v`, every inequality gets a slack, every row gets an
//!   artificial. Bland's rule (lowest entering index, ties in the ratio test
//!   broken by lowest basic index) guarantees termination on degenerate
//!   problems, which homogeneous cones produce constantly.
//!
//! References
//! - Code cross-refs: `crate::cone::state` (both LP-driven transitions),
//!   `Cone::get_relative_interior_point`

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};
use tracing::trace;

use crate::zmatrix::ZVector;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Relation {
    AtLeast,
    AtMost,
    Equal,
}

#[derive(Clone, Debug)]
struct Constraint {
    row: ZVector,
    relation: Relation,
    rhs: BigInt,
}

/// Builder for a system of linear constraints over `n` free rational variables.
#[derive(Clone, Debug)]
pub struct LinearSystem {
    n: usize,
    constraints: Vec<Constraint>,
}

impl LinearSystem {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            constraints: Vec::new(),
        }
    }

    fn push(&mut self, row: &ZVector, relation: Relation, rhs: BigInt) -> &mut Self {
        debug_assert_eq!(row.len(), self.n, "constraint has wrong width");
        self.constraints.push(Constraint {
            row: row.clone(),
            relation,
            rhs,
        });
        self
    }

    /// `row·x >= rhs`
    pub fn at_least(&mut self, row: &ZVector, rhs: impl Into<BigInt>) -> &mut Self {
        self.push(row, Relation::AtLeast, rhs.into())
    }

    /// `row·x <= rhs`
    pub fn at_most(&mut self, row: &ZVector, rhs: impl Into<BigInt>) -> &mut Self {
        self.push(row, Relation::AtMost, rhs.into())
    }

    /// `row·x = 0`
    pub fn equal_zero(&mut self, row: &ZVector) -> &mut Self {
        self.push(row, Relation::Equal, BigInt::zero())
    }

    pub fn is_feasible(&self) -> bool {
        self.find_point().is_some()
    }

    /// A point satisfying every constraint, or `None` if there is none.
    pub fn find_point(&self) -> Option<Vec<BigRational>> {
        let mut tab = Tableau::phase_one(self);
        tab.solve();
        if !tab.objective_value().is_zero() {
            trace!(rows = self.constraints.len(), "lp infeasible");
            return None;
        }
        Some(tab.witness(self.n))
    }
}

/// Dense simplex tableau. Columns: `u` (n), `v` (n), one slack per inequality,
/// then the right-hand side. Artificial variables have no columns; they are
/// identified by basic index `>= structural` and never re-enter.
struct Tableau {
    rows: Vec<Vec<BigRational>>,
    objective: Vec<BigRational>,
    basis: Vec<usize>,
    structural: usize,
}

impl Tableau {
    fn phase_one(sys: &LinearSystem) -> Self {
        let n = sys.n;
        let slacks = sys
            .constraints
            .iter()
            .filter(|c| c.relation != Relation::Equal)
            .count();
        let structural = 2 * n + slacks;
        let rhs_col = structural;
        let mut rows = Vec::with_capacity(sys.constraints.len());
        let mut slack = 2 * n;
        for c in &sys.constraints {
            let mut t = vec![BigRational::zero(); structural + 1];
            for (j, a) in c.row.iter().enumerate() {
                let q = BigRational::from_integer(a.clone());
                t[n + j] = -q.clone();
                t[j] = q;
            }
            match c.relation {
                Relation::AtLeast => {
                    t[slack] = -BigRational::from_integer(1.into());
                    slack += 1;
                }
                Relation::AtMost => {
                    t[slack] = BigRational::from_integer(1.into());
                    slack += 1;
                }
                Relation::Equal => {}
            }
            t[rhs_col] = BigRational::from_integer(c.rhs.clone());
            if t[rhs_col].is_negative() {
                for x in t.iter_mut() {
                    *x = -x.clone();
                }
            }
            rows.push(t);
        }
        // Minimize the sum of artificials: reduced costs are minus the column sums.
        let mut objective = vec![BigRational::zero(); structural + 1];
        for t in &rows {
            for (o, x) in objective.iter_mut().zip(t) {
                *o -= x;
            }
        }
        let basis = (0..rows.len()).map(|r| structural + r).collect();
        Self {
            rows,
            objective,
            basis,
            structural,
        }
    }

    /// Minus the current sum of artificials; zero iff feasible at optimum.
    fn objective_value(&self) -> &BigRational {
        &self.objective[self.structural]
    }

    fn solve(&mut self) {
        let mut pivots = 0usize;
        while let Some(col) = (0..self.structural).find(|&j| self.objective[j].is_negative()) {
            let Some(row) = self.leaving_row(col) else {
                // Unbounded direction; cannot happen for the phase-one objective.
                break;
            };
            self.pivot(row, col);
            pivots += 1;
        }
        trace!(pivots, "lp phase one done");
    }

    fn leaving_row(&self, col: usize) -> Option<usize> {
        let rhs = self.structural;
        let mut best: Option<(usize, BigRational)> = None;
        for (r, t) in self.rows.iter().enumerate() {
            if !t[col].is_positive() {
                continue;
            }
            let ratio = &t[rhs] / &t[col];
            let better = match &best {
                None => true,
                Some((b, q)) => ratio < *q || (ratio == *q && self.basis[r] < self.basis[*b]),
            };
            if better {
                best = Some((r, ratio));
            }
        }
        best.map(|(r, _)| r)
    }

    fn pivot(&mut self, row: usize, col: usize) {
        let inv = self.rows[row][col].recip();
        for x in self.rows[row].iter_mut() {
            *x *= &inv;
        }
        let p = self.rows[row].clone();
        for (r, t) in self.rows.iter_mut().enumerate() {
            if r != row {
                eliminate(t, &p, col);
            }
        }
        eliminate(&mut self.objective, &p, col);
        self.basis[row] = col;
    }

    fn witness(&self, n: usize) -> Vec<BigRational> {
        let rhs = self.structural;
        let mut x = vec![BigRational::zero(); n];
        for (t, &b) in self.rows.iter().zip(&self.basis) {
            if b < n {
                x[b] += &t[rhs];
            } else if b < 2 * n {
                x[b - n] -= &t[rhs];
            }
        }
        x
    }
}

fn eliminate(t: &mut [BigRational], p: &[BigRational], col: usize) {
    if t[col].is_zero() {
        return;
    }
    let f = t[col].clone();
    for (x, y) in t.iter_mut().zip(p) {
        *x -= &f * y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(xs: &[i64]) -> ZVector {
        ZVector::from_i64(xs)
    }

    fn dot(row: &ZVector, x: &[BigRational]) -> BigRational {
        row.iter()
            .zip(x)
            .map(|(a, b)| BigRational::from_integer(a.clone()) * b)
            .fold(BigRational::zero(), |s, t| s + t)
    }

    #[test]
    fn orthant_row_can_be_strict() {
        let mut sys = LinearSystem::new(2);
        sys.at_least(&v(&[1, 0]), 0)
            .at_least(&v(&[0, 1]), 0)
            .at_least(&v(&[1, 0]), 1);
        let x = sys.find_point().expect("feasible");
        assert!(dot(&v(&[1, 0]), &x) >= BigRational::from_integer(1.into()));
        assert!(!dot(&v(&[0, 1]), &x).is_negative());
    }

    #[test]
    fn opposite_halfspaces_force_equation() {
        // x >= 0, -x >= 0, x >= 1 is empty.
        let mut sys = LinearSystem::new(1);
        sys.at_least(&v(&[1]), 0)
            .at_least(&v(&[-1]), 0)
            .at_least(&v(&[1]), 1);
        assert!(!sys.is_feasible());
    }

    #[test]
    fn equations_and_negative_targets() {
        // x + y = 0, x <= -2: witness has y >= 2.
        let mut sys = LinearSystem::new(2);
        sys.equal_zero(&v(&[1, 1])).at_most(&v(&[1, 0]), -2);
        let x = sys.find_point().expect("feasible");
        assert!(dot(&v(&[1, 1]), &x).is_zero());
        assert!(dot(&v(&[1, 0]), &x) <= BigRational::from_integer((-2).into()));
    }

    #[test]
    fn redundant_row_is_detected() {
        // x >= 0, y >= 0; is x + y >= 0 redundant? Ask for x + y <= -1.
        let mut sys = LinearSystem::new(2);
        sys.at_least(&v(&[1, 0]), 0)
            .at_least(&v(&[0, 1]), 0)
            .at_most(&v(&[1, 1]), -1);
        assert!(!sys.is_feasible());
    }

    #[test]
    fn empty_system_is_feasible_at_origin() {
        let sys = LinearSystem::new(3);
        assert_eq!(sys.find_point(), Some(vec![BigRational::zero(); 3]));
    }
}
