//! Double-description enumeration of cone generators.
//!
//! Purpose
//! - Turn an H-description `{x : E·x = 0, a_k·x >= 0}` into generators: a
//!   basis of the lineality space and one vector per extreme ray modulo it.
//!
//! Method
//! - Start from the kernel of `E` as lineality and no rays. Inequalities are
//!   added one at a time. If the new row is nonzero on the current lineality,
//!   one lineality vector becomes a ray and the rest are projected onto the
//!   row's hyperplane. Otherwise rays are split by sign and every adjacent
//!   (positive, negative) pair contributes the ray where their segment crosses
//!   the hyperplane.
//! - Adjacency is decided combinatorially: two rays are adjacent iff no third
//!   ray is tight on every row both of them are tight on.
//!
//! Assumptions and conventions
//! - All vectors are kept primitive; combinations use positive factors only,
//!   so ray directions never flip.
//!
//! References
//! - Code cross-refs: `Cone::extreme_rays`, `Cone::dual_cone`,
//!   `Cone::given_by_rays`

use std::collections::BTreeSet;

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use tracing::{debug, trace};

use crate::zmatrix::{Echelon, ZVector};

/// Generators of a cone: `C = span(lineality) + cone(rays)`.
#[derive(Clone, Debug, Default)]
pub(crate) struct Generators {
    pub lineality: Vec<ZVector>,
    pub rays: Vec<ZVector>,
}

#[derive(Clone, Debug)]
struct Ray {
    v: ZVector,
    /// Indices of processed inequalities vanishing on `v`.
    zeros: BTreeSet<usize>,
}

/// Enumerate generators of `{x : equations·x = 0, inequalities·x >= 0}`.
pub(crate) fn enumerate(n: usize, inequalities: &[ZVector], equations: &[ZVector]) -> Generators {
    let mut lineality = Echelon::new(n, equations).kernel();
    let mut rays: Vec<Ray> = Vec::new();

    for (k, a) in inequalities.iter().enumerate() {
        if let Some(idx) = lineality.iter().position(|l| !a.dot(l).is_zero()) {
            let mut l0 = lineality.swap_remove(idx);
            let mut s0 = a.dot(&l0);
            if s0.is_negative() {
                l0 = -l0;
                s0 = -s0;
            }
            for l in lineality.iter_mut() {
                let s = a.dot(l);
                if !s.is_zero() {
                    *l = l.combination(&s0, &l0, &s);
                }
            }
            for r in rays.iter_mut() {
                let s = a.dot(&r.v);
                if !s.is_zero() {
                    r.v = r.v.combination(&s0, &l0, &s);
                }
                r.zeros.insert(k);
            }
            trace!(row = k, "lineality direction turned into a ray");
            rays.push(Ray {
                v: l0,
                zeros: (0..k).collect(),
            });
            continue;
        }

        let values: Vec<BigInt> = rays.iter().map(|r| a.dot(&r.v)).collect();
        let positive: Vec<usize> = (0..rays.len()).filter(|&i| values[i].is_positive()).collect();
        let negative: Vec<usize> = (0..rays.len()).filter(|&i| values[i].is_negative()).collect();

        let mut created = Vec::new();
        for &p in &positive {
            for &q in &negative {
                if !adjacent(&rays, p, q) {
                    continue;
                }
                let v = rays[q].v.combination(&values[p], &rays[p].v, &values[q]);
                let mut zeros: BTreeSet<usize> =
                    rays[p].zeros.intersection(&rays[q].zeros).copied().collect();
                zeros.insert(k);
                created.push(Ray { v, zeros });
            }
        }
        trace!(
            row = k,
            positive = positive.len(),
            negative = negative.len(),
            created = created.len(),
            "dd step"
        );

        let mut kept = Vec::with_capacity(rays.len() - negative.len() + created.len());
        for (mut r, val) in rays.into_iter().zip(&values) {
            if val.is_negative() {
                continue;
            }
            if val.is_zero() {
                r.zeros.insert(k);
            }
            kept.push(r);
        }
        kept.extend(created);
        rays = kept;
    }

    debug!(
        n,
        inequalities = inequalities.len(),
        lineality = lineality.len(),
        rays = rays.len(),
        "double description done"
    );
    Generators {
        lineality,
        rays: rays.into_iter().map(|r| r.v).collect(),
    }
}

fn adjacent(rays: &[Ray], p: usize, q: usize) -> bool {
    let common: BTreeSet<usize> = rays[p].zeros.intersection(&rays[q].zeros).copied().collect();
    !rays
        .iter()
        .enumerate()
        .any(|(i, r)| i != p && i != q && common.is_subset(&r.zeros))
}
