//! Generators, interior points and lattice data.

use std::collections::BTreeSet;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use tracing::debug;

use super::state::strict_witness;
use super::{Cone, ConeState};
use crate::dd;
use crate::zmatrix::{integral_row_echelon, ZMatrix, ZVector};

impl Cone {
    /// Primitive generators of the extreme rays modulo the lineality space,
    /// each orthogonal to it, rows sorted.
    ///
    /// `lineality_generators`, if given, replaces the lineality computation and
    /// is trusted. The result is computed once per value; later calls return
    /// the cached rows whatever they pass.
    pub fn extreme_rays(&self, lineality_generators: Option<&ZMatrix>) -> ZMatrix {
        self.extreme_rays
            .get_or_init(|| self.compute_extreme_rays(lineality_generators))
            .clone()
    }

    fn compute_extreme_rays(&self, lineality_generators: Option<&ZMatrix>) -> ZMatrix {
        self.find_facets();
        let lineality = match lineality_generators {
            Some(l) => l.clone(),
            None => self.generators_of_lineality_space(),
        };
        let (inequalities, mut equations) = self.rows();
        equations.append(&lineality);
        let g = dd::enumerate(self.n, inequalities.rows(), equations.rows());
        debug_assert!(g.lineality.is_empty(), "cone modulo lineality must be pointed");
        let mut rays = ZMatrix::from_rows(self.n, g.rays);
        rays.sort_and_remove_duplicate_rows();
        debug!(n = self.n, rays = rays.height(), "extreme rays");
        rays
    }

    /// Basis of the linear span of the cone.
    pub fn generators_of_span(&self) -> ZMatrix {
        self.find_implied_equations();
        self.description.borrow().equations.kernel()
    }

    /// Basis of the lineality space `{x : A·x = 0, E·x = 0}`.
    pub fn generators_of_lineality_space(&self) -> ZMatrix {
        let (inequalities, equations) = self.rows();
        inequalities.combine_on_top(&equations).kernel()
    }

    /// A primitive point in the relative interior.
    pub fn get_relative_interior_point(&self) -> ZVector {
        self.find_implied_equations();
        let d = self.description.borrow();
        strict_witness(self.n, d.inequalities.rows(), d.equations.rows()).0
    }

    /// Sum of the extreme rays: a relative-interior point depending only on the
    /// cone, so it commutes with lattice maps preserving angles and the
    /// lineality space. Panics unless the cone is canonical.
    pub fn get_unique_point(&self) -> ZVector {
        assert!(
            self.is_in_state_minimum(ConeState::Canonical),
            "get_unique_point needs a canonical cone"
        );
        self.extreme_rays(None).row_sum()
    }

    /// Sum of the distinct candidate rows lying in the cone.
    pub fn get_unique_point_from_extreme_rays(&self, candidates: &ZMatrix) -> ZVector {
        let distinct: BTreeSet<&ZVector> = candidates.iter().collect();
        distinct
            .into_iter()
            .filter(|r| self.contains(r))
            .fold(ZVector::zeros(self.n), |acc, r| &acc + r)
    }

    /// Basis of `(Z^n ∩ span) / (Z^n ∩ lineality)`, as vectors in the span.
    ///
    /// Panics unless the implied equations are known.
    pub fn quotient_lattice_basis(&self) -> ZMatrix {
        assert!(
            self.is_in_state_minimum(ConeState::EquationsKnown),
            "quotient_lattice_basis needs the implied equations"
        );
        let (inequalities, equations) = self.rows();
        let a = equations.height();
        let b = inequalities.height();
        let n = self.n;
        // Row i is [E e_i | A e_i | e_i].
        let mut m: Vec<Vec<BigInt>> = (0..n)
            .map(|i| {
                let mut row = Vec::with_capacity(a + b + n);
                row.extend(equations.iter().map(|e| e[i].clone()));
                row.extend(inequalities.iter().map(|r| r[i].clone()));
                row.extend(ZVector::unit(n, i).iter().cloned());
                row
            })
            .collect();
        integral_row_echelon(&mut m, a + b);
        let rows = m
            .into_iter()
            .filter(|r| {
                r[..a].iter().all(|x| x.is_zero()) && r[a..a + b].iter().any(|x| !x.is_zero())
            })
            .map(|r| ZVector::from_vec(r[a + b..].to_vec()))
            .collect();
        ZMatrix::from_rows(n, rows)
    }

    /// The lattice generator of a ray cone, oriented into the cone.
    ///
    /// Panics unless the implied equations are known and the cone is a ray.
    pub fn semi_group_generator_of_ray(&self) -> ZVector {
        let basis = self.quotient_lattice_basis();
        assert_eq!(basis.height(), 1, "semi_group_generator_of_ray needs a ray");
        let g = basis.row(0).clone();
        let flip = self
            .description
            .borrow()
            .inequalities
            .iter()
            .any(|r| r.dot(&g).is_negative());
        if flip {
            -g
        } else {
            g
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cone::Preassumptions;

    #[test]
    fn quotient_basis_of_a_ray_with_lineality() {
        // {x >= 0} in R^2: span is R^2, lineality is the y-axis.
        let c = Cone::from_inequalities(ZMatrix::from_i64_rows(2, &[[1, 0]]));
        c.find_implied_equations();
        let q = c.quotient_lattice_basis();
        assert_eq!(q.height(), 1);
        assert_eq!(q.row(0)[0].abs(), BigInt::from(1));
        let g = c.semi_group_generator_of_ray();
        assert_eq!(g[0], BigInt::from(1));
    }

    #[test]
    fn quotient_basis_sees_the_lattice_index() {
        // Ray spanned by (1, 2) with lineality 0: generator is (1, 2) itself.
        let c = Cone::new(
            ZMatrix::from_i64_rows(2, &[[1, 0]]),
            ZMatrix::from_i64_rows(2, &[[2, -1]]),
            Preassumptions::ALL,
        );
        let g = c.semi_group_generator_of_ray();
        assert_eq!(g, ZVector::from_i64(&[1, 2]));
    }

    #[test]
    #[should_panic(expected = "canonical")]
    fn unique_point_requires_canonical_state() {
        Cone::positive_orthant(2).get_unique_point();
    }

    #[test]
    #[should_panic(expected = "needs the implied equations")]
    fn quotient_basis_requires_implied_equations() {
        Cone::from_inequalities(ZMatrix::from_i64_rows(2, &[[1, 0], [0, 1]]))
            .quotient_lattice_basis();
    }

    #[test]
    #[should_panic(expected = "needs a ray")]
    fn semi_group_generator_requires_a_ray() {
        let c = Cone::positive_orthant(2);
        c.find_implied_equations();
        c.semi_group_generator_of_ray();
    }

    #[test]
    fn unique_point_from_candidates_skips_outsiders_and_duplicates() {
        let c = Cone::positive_orthant(2);
        let cand = ZMatrix::from_i64_rows(2, &[[1, 0], [1, 0], [-1, 0], [0, 1]]);
        assert_eq!(
            c.get_unique_point_from_extreme_rays(&cand),
            ZVector::from_i64(&[1, 1])
        );
    }
}
