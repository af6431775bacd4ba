//! Exact polyhedral cones over the integer lattice.
//!
//! A [`Cone`] is stored as the inequalities and equations it was built from and
//! reduced on demand: implied equations, then facets, then a canonical form.
//! Extreme rays are enumerated by double description and cached.
//!
//! All arithmetic is exact (`num-bigint`/`num-rational`); there are no
//! tolerances. The library never installs a `tracing` subscriber; state
//! transitions emit `debug!` events, LP and DD steps `trace!` events.

pub mod cone;
pub mod error;
pub mod rand;
pub mod zmatrix;

mod cfg;
mod dd;
mod lp;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cone::{intersection, product, Cone, ConeState, Preassumptions};
pub use error::{ConeError, MatrixError};
pub use lp::LinearSystem;
pub use zmatrix::{Integer, ZMatrix, ZVector};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cone::{intersection, product, Cone, ConeState, Preassumptions};
    pub use crate::rand::{draw_cone, draw_rays, RandomConeCfg, ReplayToken};
    pub use crate::zmatrix::{Integer, ZMatrix, ZVector};
}
