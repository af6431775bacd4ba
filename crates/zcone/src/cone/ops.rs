//! Constructions combining or transforming cones.
//!
//! Flags carried to the result are only those the construction cannot break:
//! a product keeps what both factors know, negation keeps everything, link and
//! face keep what survives restriction. Intersection and dual start raw.

use num_traits::Zero;

use super::{Cone, ConeState, Preassumptions};
use crate::zmatrix::{ZMatrix, ZVector};

/// `a ∩ b`, both systems concatenated with duplicate rows removed.
pub fn intersection(a: &Cone, b: &Cone) -> Cone {
    assert_eq!(a.n, b.n, "cones live in different ambient spaces");
    let (ai, ae) = a.rows();
    let (bi, be) = b.rows();
    let mut inequalities = ai.combine_on_top(&bi);
    let mut equations = ae.combine_on_top(&be);
    inequalities.sort_and_remove_duplicate_rows();
    equations.sort_and_remove_duplicate_rows();
    Cone::new(inequalities, equations, Preassumptions::NONE)
}

/// `a × b` in dimension `n_a + n_b`. Multiplicities multiply.
pub fn product(a: &Cone, b: &Cone) -> Cone {
    let (ai, ae) = a.rows();
    let (bi, be) = b.rows();
    let flags = a.known().intersect(b.known());
    let mut c = Cone::new(ai.block_diagonal(&bi), ae.block_diagonal(&be), flags);
    c.multiplicity = a.multiplicity() * b.multiplicity();
    c
}

impl Cone {
    /// Flags describing what is known about the stored rows right now.
    pub(super) fn known(&self) -> Preassumptions {
        Preassumptions {
            implied_equations_known: self.are_implied_equations_known(),
            facets_known: self.are_facets_known(),
        }
    }

    /// `{y : y·x >= 0 for all x in the cone}`.
    pub fn dual_cone(&self) -> Cone {
        let lineality = self.generators_of_lineality_space();
        let rays = self.extreme_rays(Some(&lineality));
        Cone::new(rays, lineality, Preassumptions::NONE)
    }

    /// `−C`.
    pub fn negated(&self) -> Cone {
        let (inequalities, equations) = self.rows();
        Cone::new(inequalities.negated(), equations, self.known())
    }

    /// The lineality space as a cone: every row becomes an equation.
    pub fn lineality_space(&self) -> Cone {
        let (inequalities, equations) = self.rows();
        Cone::new(
            ZMatrix::new(self.n),
            equations.combine_on_top(&inequalities),
            Preassumptions::NONE,
        )
    }

    /// Tangent cone at the face containing `w` in its relative interior:
    /// only the inequalities tight at `w` are kept.
    pub fn link(&self, w: &ZVector) -> Cone {
        let state = self.state();
        let (inequalities, equations) = self.rows();
        let tight = inequalities
            .into_rows()
            .into_iter()
            .filter(|a| a.dot(w).is_zero())
            .collect();
        let mut c = Cone::new(ZMatrix::from_rows(self.n, tight), equations, self.known());
        c.ensure_state_as_minimum(state);
        c.multiplicity = self.multiplicity();
        c.linear_forms = self.linear_forms();
        c
    }

    /// The face having `v` in its relative interior. Panics if `v` is not in the cone.
    pub fn face_containing(&self, v: &ZVector) -> Cone {
        assert!(self.contains(v), "face_containing needs a point of the cone");
        let state = self.state();
        let (inequalities, mut equations) = self.rows();
        let mut strict = Vec::new();
        for a in inequalities.into_rows() {
            if a.dot(v).is_zero() {
                equations.append_row(a);
            } else {
                strict.push(a);
            }
        }
        let flags = if state >= ConeState::EquationsKnown {
            Preassumptions::IMPLIED_EQUATIONS_KNOWN
        } else {
            Preassumptions::NONE
        };
        let c = Cone::new(ZMatrix::from_rows(self.n, strict), equations, flags);
        c.ensure_state_as_minimum(state);
        c
    }

    /// `cone(generators) + span(lineality)`, described by facets and implied
    /// equations.
    pub fn given_by_rays(generators: &ZMatrix, lineality: &ZMatrix) -> Cone {
        let dual = Cone::new(generators.clone(), lineality.clone(), Preassumptions::NONE);
        let equations = dual.generators_of_lineality_space();
        let inequalities = dual.extreme_rays(Some(&equations));
        Cone::new(inequalities, equations, Preassumptions::ALL)
    }
}
