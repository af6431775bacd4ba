//! Orbits of a small fan under coordinate sign changes.
//!
//! Purpose
//! - Show the intended use of `get_unique_point`: deciding whether two cones
//!   of a fan are related by a symmetry without enumerating the group on the
//!   cones themselves.
//!
//! Setup
//! - The fan is the eight orthants of R^3 plus their codimension-one faces,
//!   each written with a deliberately redundant description. The symmetry
//!   group is coordinate sign changes. Cones are grouped by the orbit of their
//!   unique point; the orbit representative is the point with all entries made
//!   non-negative.
//!
//! Run:
//!   cargo run -p zcone --example fan_symmetry

use std::collections::BTreeMap;

use anyhow::{ensure, Result};
use num_traits::Signed;
use tracing_subscriber::fmt::SubscriberBuilder;
use zcone::prelude::*;

fn orthant(signs: [i64; 3]) -> Cone {
    let rows: Vec<[i64; 3]> = vec![
        [signs[0], 0, 0],
        [0, signs[1], 0],
        [0, 0, signs[2]],
        // Redundant: implied by the three rows above.
        [signs[0], signs[1], signs[2]],
    ];
    Cone::from_inequalities(ZMatrix::from_i64_rows(3, &rows))
}

fn orbit_key(p: &ZVector) -> ZVector {
    ZVector::from_vec(p.iter().map(|x| x.abs()).collect())
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();

    let mut cones = Vec::new();
    for s0 in [-1, 1] {
        for s1 in [-1, 1] {
            for s2 in [-1, 1] {
                let c = orthant([s0, s1, s2]);
                // Facets of the orthant are faces at points with one zero coordinate.
                let facets: Vec<Cone> = [[0, s1, s2], [s0, 0, s2], [s0, s1, 0]]
                    .iter()
                    .map(|p| c.face_containing(&ZVector::from_i64(p)))
                    .collect();
                cones.push(c);
                cones.extend(facets);
            }
        }
    }

    for c in &cones {
        c.canonicalize();
    }
    // Shared facets show up twice; equality is by point set.
    cones.sort();
    cones.dedup();

    let mut orbits: BTreeMap<ZVector, Vec<usize>> = BTreeMap::new();
    for (i, c) in cones.iter().enumerate() {
        let p = c.get_unique_point();
        ensure!(c.contains_relatively(&p), "unique point must be relatively interior");
        orbits.entry(orbit_key(&p)).or_default().push(i);
    }

    tracing::info!(cones = cones.len(), orbits = orbits.len(), "fan");
    for (key, members) in &orbits {
        let dim = cones[members[0]].dimension();
        println!("orbit {key}: dimension {dim}, {} cones", members.len());
    }
    ensure!(cones.len() == 8 + 12, "expected 8 orthants and 12 walls");
    ensure!(orbits.len() == 4, "expected one orbit for orthants and three for walls");
    Ok(())
}
