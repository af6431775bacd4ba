//! State machine: implied equations, facets, canonical form.

use std::collections::HashSet;

use num_traits::Signed;
use tracing::{debug, trace};

use super::{Cone, ConeState, Description};
use crate::cfg::MIN_ROWS_FOR_REDUNDANCY;
use crate::lp::LinearSystem;
use crate::zmatrix::{Echelon, ZMatrix, ZVector};

impl Cone {
    /// Current knowledge level (ignores preassumption flags).
    pub fn state(&self) -> ConeState {
        self.description.borrow().state
    }

    /// `state >= target`, or the flag standing in for `target` is set.
    pub fn is_in_state_minimum(&self, target: ConeState) -> bool {
        self.state() >= target || self.preassumptions.covers(target)
    }

    /// Reduce the description until it is at least at `target`. Idempotent.
    pub fn ensure_state_as_minimum(&self, target: ConeState) {
        let mut d = self.description.borrow_mut();
        if d.state >= target {
            return;
        }
        let before = d.state;
        for level in ConeState::ADVANCING {
            if level > target {
                break;
            }
            if d.state >= level {
                continue;
            }
            match level {
                ConeState::EquationsKnown => self.find_equations_in(&mut d),
                ConeState::FacetsKnown => {
                    if !self.preassumptions.facets_known {
                        remove_redundant_rows(self.n, &mut d);
                    }
                }
                ConeState::Canonical => canonicalize_rows(&mut d),
                ConeState::Raw => {}
            }
            d.state = level;
        }
        debug!(
            n = self.n,
            from = %before,
            to = %d.state,
            inequalities = d.inequalities.height(),
            equations = d.equations.height(),
            "cone state advanced"
        );
    }

    fn find_equations_in(&self, d: &mut Description) {
        if self.preassumptions.implied_equations_known {
            d.equations = d.equations.reduced_basis();
            return;
        }
        let (_, strict) = strict_witness(self.n, d.inequalities.rows(), d.equations.rows());
        let mut kept = Vec::new();
        let mut implied = 0usize;
        for (row, s) in std::mem::replace(&mut d.inequalities, ZMatrix::new(self.n))
            .into_rows()
            .into_iter()
            .zip(strict)
        {
            if s {
                kept.push(row);
            } else {
                d.equations.append_row(row);
                implied += 1;
            }
        }
        d.inequalities = ZMatrix::from_rows(self.n, kept);
        d.equations = d.equations.reduced_basis();
        debug!(implied, rank = d.equations.height(), "implied equations found");
    }

    /// Advance to `EquationsKnown`.
    pub fn find_implied_equations(&self) {
        self.ensure_state_as_minimum(ConeState::EquationsKnown);
    }

    /// Advance to `FacetsKnown`.
    pub fn find_facets(&self) {
        self.ensure_state_as_minimum(ConeState::FacetsKnown);
    }

    /// Advance to `Canonical`.
    pub fn canonicalize(&self) {
        self.ensure_state_as_minimum(ConeState::Canonical);
    }

    pub fn are_implied_equations_known(&self) -> bool {
        self.is_in_state_minimum(ConeState::EquationsKnown)
    }

    pub fn are_facets_known(&self) -> bool {
        self.is_in_state_minimum(ConeState::FacetsKnown)
    }

    /// Facet normals (advances to `FacetsKnown`).
    pub fn facets(&self) -> ZMatrix {
        self.find_facets();
        self.inequalities()
    }

    /// Basis of the linear forms vanishing on the cone (advances to `EquationsKnown`).
    pub fn implied_equations(&self) -> ZMatrix {
        self.find_implied_equations();
        self.equations()
    }
}

/// Accumulate a point that is strict on as many rows as possible.
///
/// Returns the primitive point and, per row, whether some point of the cone
/// makes it strictly positive. Each LP witness is added to the running point,
/// so rows already strict there are never tested again.
pub(super) fn strict_witness(
    n: usize,
    inequalities: &[ZVector],
    equations: &[ZVector],
) -> (ZVector, Vec<bool>) {
    let mut w = ZVector::zeros(n);
    let mut strict = vec![false; inequalities.len()];
    let mut lps = 0usize;
    for (i, a) in inequalities.iter().enumerate() {
        if a.dot(&w).is_positive() {
            strict[i] = true;
            continue;
        }
        let mut sys = LinearSystem::new(n);
        for b in inequalities {
            sys.at_least(b, 0);
        }
        for e in equations {
            sys.equal_zero(e);
        }
        sys.at_least(a, 1);
        lps += 1;
        if let Some(p) = sys.find_point() {
            let p = ZVector::from_rational_primitive(&p);
            w = &w + &p;
            strict[i] = true;
        }
    }
    trace!(rows = inequalities.len(), lps, "strict witness");
    (w.normalized(), strict)
}

/// Normalize, dedup and drop every row implied by the others plus equations.
fn remove_redundant_rows(n: usize, d: &mut Description) {
    let mut seen = HashSet::new();
    let mut rows: Vec<ZVector> = Vec::with_capacity(d.inequalities.height());
    for r in d.inequalities.iter() {
        let r = r.normalized();
        if !r.is_zero() && seen.insert(r.clone()) {
            rows.push(r);
        }
    }
    let before = d.inequalities.height();
    if rows.len() >= MIN_ROWS_FOR_REDUNDANCY {
        let mut i = 0;
        while i < rows.len() {
            let mut sys = LinearSystem::new(n);
            for (j, b) in rows.iter().enumerate() {
                if j != i {
                    sys.at_least(b, 0);
                }
            }
            for e in d.equations.iter() {
                sys.equal_zero(e);
            }
            sys.at_most(&rows[i], -1);
            if sys.is_feasible() {
                i += 1;
            } else {
                trace!(row = %rows[i], "redundant inequality");
                rows.remove(i);
            }
        }
    }
    debug!(before, after = rows.len(), "redundant inequalities removed");
    d.inequalities = ZMatrix::from_rows(n, rows);
}

/// Echelon equations; inequalities reduced modulo their span, primitive, sorted.
fn canonicalize_rows(d: &mut Description) {
    let n = d.equations.width();
    let mut equations = d.equations.reduced_basis();
    equations.sort_rows();
    let echelon = Echelon::new(n, equations.rows());
    let mut inequalities =
        ZMatrix::from_rows(n, d.inequalities.iter().map(|r| echelon.reduce(r)).collect());
    inequalities.sort_and_remove_duplicate_rows();
    d.equations = equations;
    d.inequalities = inequalities;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cone::Preassumptions;
    use num_traits::Zero;

    #[test]
    fn witness_is_strict_where_possible() {
        let rows = [
            ZVector::from_i64(&[1, 0]),
            ZVector::from_i64(&[0, 1]),
            ZVector::from_i64(&[0, -1]),
        ];
        let (w, strict) = strict_witness(2, &rows, &[]);
        assert_eq!(strict, vec![true, false, false]);
        assert!(w[0].is_positive());
        assert!(w[1].is_zero());
    }

    #[test]
    fn levels_are_reached_in_order() {
        let c = Cone::from_inequalities(ZMatrix::from_i64_rows(
            2,
            &[[1, 0], [2, 0], [0, 1], [1, 1]],
        ));
        assert_eq!(c.state(), ConeState::Raw);
        c.ensure_state_as_minimum(ConeState::FacetsKnown);
        assert_eq!(c.state(), ConeState::FacetsKnown);
        assert_eq!(c.inequalities().height(), 2);
        c.ensure_state_as_minimum(ConeState::EquationsKnown);
        assert_eq!(c.state(), ConeState::FacetsKnown);
    }

    #[test]
    fn flags_satisfy_the_predicate_without_work() {
        let c = Cone::new(
            ZMatrix::from_i64_rows(2, &[[1, 0], [1, 0]]),
            ZMatrix::new(2),
            Preassumptions::FACETS_KNOWN,
        );
        assert!(c.is_in_state_minimum(ConeState::FacetsKnown));
        assert!(!c.is_in_state_minimum(ConeState::EquationsKnown));
        c.find_facets();
        // Trusted: the duplicate row is not removed.
        assert_eq!(c.inequalities().height(), 2);
    }

    #[test]
    fn trusted_equations_skip_the_lp_pass() {
        // x >= 0 and -x >= 0 imply x = 0, but the flag says otherwise.
        let c = Cone::new(
            ZMatrix::from_i64_rows(2, &[[1, 0], [-1, 0]]),
            ZMatrix::new(2),
            Preassumptions::IMPLIED_EQUATIONS_KNOWN,
        );
        c.find_implied_equations();
        assert_eq!(c.state(), ConeState::EquationsKnown);
        assert!(c.equations().is_empty());
        assert_eq!(c.inequalities().height(), 2);
        assert_eq!(c.dimension(), 2);
    }

    #[test]
    fn trusted_equations_are_reduced_to_a_basis() {
        let c = Cone::new(
            ZMatrix::new(2),
            ZMatrix::from_i64_rows(2, &[[2, 0], [1, 0]]),
            Preassumptions::IMPLIED_EQUATIONS_KNOWN,
        );
        assert_eq!(c.implied_equations().height(), 1);
    }
}
