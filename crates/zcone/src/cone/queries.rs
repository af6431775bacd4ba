//! Membership and dimension queries.

use num_traits::{Signed, Zero};

use super::{intersection, Cone, ConeState};
use crate::zmatrix::{ZMatrix, ZVector};

impl Cone {
    /// `A·v >= 0` and `E·v = 0` on the rows as stored. Never changes state.
    pub fn contains(&self, v: &ZVector) -> bool {
        debug_assert_eq!(v.len(), self.n, "vector has wrong length");
        let d = self.description.borrow();
        d.inequalities.iter().all(|a| !a.dot(v).is_negative())
            && d.equations.iter().all(|e| e.dot(v).is_zero())
    }

    /// Every row of `m` is contained.
    pub fn contains_rows_of(&self, m: &ZMatrix) -> bool {
        m.iter().all(|r| self.contains(r))
    }

    /// `v` lies in the relative interior. Advances to `EquationsKnown`.
    pub fn contains_relatively(&self, v: &ZVector) -> bool {
        self.find_implied_equations();
        let d = self.description.borrow();
        d.inequalities.iter().all(|a| a.dot(v).is_positive())
            && d.equations.iter().all(|e| e.dot(v).is_zero())
    }

    /// `other ⊆ self`.
    pub fn contains_cone(&self, other: &Cone) -> bool {
        assert_eq!(self.n, other.n, "cones live in different ambient spaces");
        let lineality = other.generators_of_lineality_space();
        if !self.contains_rows_of(&other.extreme_rays(Some(&lineality))) {
            return false;
        }
        lineality
            .iter()
            .all(|l| self.contains(l) && self.contains(&-l))
    }

    /// `f` is a face of `self`.
    pub fn has_face(&self, f: &Cone) -> bool {
        let p = f.get_relative_interior_point();
        if !self.contains(&p) {
            return false;
        }
        self.face_containing(&p) == *f
    }

    /// Some strictly positive vector lies in the cone.
    pub fn contains_positive_vector(&self) -> bool {
        intersection(self, &Cone::positive_orthant(self.n))
            .get_relative_interior_point()
            .is_positive()
    }

    /// Dimension of the linear span. Advances to `EquationsKnown`.
    pub fn dimension(&self) -> usize {
        self.find_implied_equations();
        self.n - self.description.borrow().equations.height()
    }

    pub fn codimension(&self) -> usize {
        self.n - self.dimension()
    }

    /// `n − rank(A ∪ E)`; works on the stored rows.
    pub fn dimension_of_lineality_space(&self) -> usize {
        let d = self.description.borrow();
        self.n - d.inequalities.combine_on_top(&d.equations).rank()
    }

    pub fn is_origin(&self) -> bool {
        self.dimension() == 0
    }

    /// No nonzero row among inequalities and equations.
    pub fn is_full_space(&self) -> bool {
        let d = self.description.borrow();
        d.inequalities.is_zero() && d.equations.is_zero()
    }

    /// The facet count equals the dimension modulo lineality.
    pub fn is_simplicial(&self) -> bool {
        let facets = self.facets().height();
        self.codimension() + facets + self.dimension_of_lineality_space() == self.n
    }

    /// Dimension equals lineality dimension plus one.
    pub fn is_ray(&self) -> bool {
        self.dimension() == self.dimension_of_lineality_space() + 1
    }

    /// Shortcut for `state() == Canonical`.
    pub fn is_canonical(&self) -> bool {
        self.state() == ConeState::Canonical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_containment_uses_implied_equations() {
        // x >= 0, -x >= 0, y >= 0: the ray along y.
        let c = Cone::from_inequalities(ZMatrix::from_i64_rows(2, &[[1, 0], [-1, 0], [0, 1]]));
        assert!(c.contains_relatively(&ZVector::from_i64(&[0, 3])));
        assert!(!c.contains_relatively(&ZVector::from_i64(&[0, 0])));
        assert!(c.is_ray());
        assert_eq!(c.dimension(), 1);
    }

    #[test]
    fn lineality_dimension_reads_raw_rows() {
        let c = Cone::from_inequalities(ZMatrix::from_i64_rows(3, &[[1, 0, 0]]));
        assert_eq!(c.dimension_of_lineality_space(), 2);
        assert_eq!(c.state(), ConeState::Raw);
    }

    #[test]
    fn positive_vector_test() {
        assert!(Cone::positive_orthant(3).contains_positive_vector());
        let c = Cone::from_inequalities(ZMatrix::from_i64_rows(2, &[[-1, 0]]));
        assert!(!c.contains_positive_vector());
    }

    #[test]
    fn canonical_flag_follows_the_state() {
        let c = Cone::positive_orthant(2);
        assert!(!c.is_canonical());
        c.find_facets();
        assert!(!c.is_canonical());
        c.canonicalize();
        assert!(c.is_canonical());
    }
}
