//! Single-Qubit Bloch Sphere Toolkit
//!
//! This crate models one two-level quantum system (qubit) as a unit complex
//! vector, applies named unitary gates to it, and projects any resulting
//! state to its (x, y, z) Bloch sphere coordinates. It is a teaching tool
//! for building intuition about single-qubit states, not a general quantum
//! simulator: there is no entanglement tracking, no density matrices, no
//! stochastic measurement.
//!
//! A typical session builds a state, runs it through a gate sequence, and
//! asks for plot-ready coordinates:
//!
//! ```
//! use bloch::prelude::*;
//!
//! let state = Qubit::zero().apply_sequence(&[Gate::T, Gate::H]);
//! let coords = bloch_coords(&state);
//! assert!((coords.z).abs() < 1e-10);
//! ```
//!
//! Rendering the sphere itself (wireframe, arrows, legends) is left to the
//! consumer; the crate only produces the coordinate triples such a renderer
//! needs.

pub mod bloch;
pub mod error;
pub mod gate;
pub mod state;

pub use bloch::{bloch_coords, bloch_coords_batch, BlochCoords};
pub use error::QubitError;
pub use gate::{cnot, compose, phase_shift, Gate};
pub use state::Qubit;

// Re-export commonly used types and functions
pub mod prelude {
    pub use crate::bloch::{bloch_coords, bloch_coords_batch, BlochCoords};
    pub use crate::error::QubitError;
    pub use crate::gate::{cnot, compose, phase_shift, Gate};
    pub use crate::state::Qubit;
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
