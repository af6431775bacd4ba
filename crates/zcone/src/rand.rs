//! Random cones with small integer rows (replayable draws).
//!
//! Purpose
//! - Deterministic test and benchmark inputs. A draw is fixed by a
//!   `(seed, index)` replay token, so failing cases can be reproduced from the
//!   token alone.
//!
//! Model
//! - Entries are uniform in `[-entry_bound, entry_bound]`. Inequality rows are
//!   shifted towards a fixed positive direction with probability
//!   `bias_towards_positive`, which keeps most draws full-dimensional while
//!   still producing redundant rows and occasional implied equations.
//!
//! References
//! - Code cross-refs: `Cone::new`, `Cone::given_by_rays`

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cone::{Cone, Preassumptions};
use crate::zmatrix::{ZMatrix, ZVector};

/// Row count distribution.
#[derive(Clone, Copy, Debug)]
pub enum RowCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl RowCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            RowCount::Fixed(k) => k,
            RowCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RandomConeCfg {
    pub ambient_dimension: usize,
    pub inequalities: RowCount,
    pub equations: RowCount,
    /// Entries lie in `[-entry_bound, entry_bound]`.
    pub entry_bound: i64,
    /// Probability that an inequality row is made positive on `(1, ..., 1)`.
    pub bias_towards_positive: f64,
}
impl Default for RandomConeCfg {
    fn default() -> Self {
        Self {
            ambient_dimension: 4,
            inequalities: RowCount::Uniform { min: 3, max: 8 },
            equations: RowCount::Fixed(0),
            entry_bound: 3,
            bias_towards_positive: 0.8,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

fn random_row<R: Rng>(rng: &mut R, n: usize, bound: i64) -> ZVector {
    let bound = bound.max(1);
    let entries: Vec<i64> = (0..n).map(|_| rng.gen_range(-bound..=bound)).collect();
    ZVector::from_i64(&entries)
}

/// Raw cone from random rows; no preassumptions.
pub fn draw_cone(cfg: RandomConeCfg, tok: ReplayToken) -> Cone {
    let mut rng = tok.to_std_rng();
    let n = cfg.ambient_dimension;
    let k = cfg.inequalities.sample(&mut rng);
    let p = cfg.bias_towards_positive.clamp(0.0, 1.0);
    let mut inequalities = ZMatrix::new(n);
    for _ in 0..k {
        let mut row = random_row(&mut rng, n, cfg.entry_bound);
        if rng.gen::<f64>() < p {
            // Make the row positive on the all-ones vector by raising one entry.
            let s: i64 = row
                .iter()
                .map(|x| i64::try_from(x).unwrap_or(0))
                .sum();
            if s <= 0 && n > 0 {
                let j = rng.gen_range(0..n);
                row[j] += 1 - s;
            }
        }
        inequalities.append_row(row);
    }
    let mut equations = ZMatrix::new(n);
    for _ in 0..cfg.equations.sample(&mut rng) {
        equations.append_row(random_row(&mut rng, n, cfg.entry_bound));
    }
    Cone::new(inequalities, equations, Preassumptions::NONE)
}

/// Random generator rows, suitable for `Cone::given_by_rays`.
pub fn draw_rays(cfg: RandomConeCfg, tok: ReplayToken) -> ZMatrix {
    let mut rng = tok.to_std_rng();
    let n = cfg.ambient_dimension;
    let k = cfg.inequalities.sample(&mut rng);
    let rows = (0..k)
        .map(|_| random_row(&mut rng, n, cfg.entry_bound))
        .collect();
    ZMatrix::from_rows(n, rows)
}
