// src/state.rs
//! Qubit state representation
//!
//! A [`Qubit`] is a value type holding the two complex amplitudes of a
//! single two-level system, α|0⟩ + β|1⟩. States are never mutated in
//! place; every gate application produces a new value.

use ndarray::Array1;
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt::{self, Display};

use crate::error::QubitError;
use crate::gate::Gate;

/// Absolute tolerance on p0 + p1 = 1 in [`Qubit::from_probabilities`].
pub const PROB_SUM_TOLERANCE: f64 = 1e-4;

/// Tolerance on the unit-norm check in [`Qubit::is_normalized`].
pub const NORM_TOLERANCE: f64 = 1e-10;

/// A single-qubit state in the form α|0⟩ + β|1⟩.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Qubit {
    alpha: Complex64,
    beta: Complex64,
}

impl Qubit {
    /// Create a qubit state from raw amplitudes.
    ///
    /// The caller is responsible for providing a unit-norm pair; nothing is
    /// validated here. Downstream operations silently produce degraded
    /// output for non-normalized states (see [`crate::bloch_coords`]), so
    /// check with [`Qubit::is_normalized`] when in doubt.
    pub fn new(alpha: Complex64, beta: Complex64) -> Self {
        Qubit { alpha, beta }
    }

    /// The |0⟩ state (Z-axis eigenstate).
    pub fn zero() -> Self {
        Qubit {
            alpha: Complex64::new(1.0, 0.0),
            beta: Complex64::new(0.0, 0.0),
        }
    }

    /// The |1⟩ state (Z-axis eigenstate).
    pub fn one() -> Self {
        Qubit {
            alpha: Complex64::new(0.0, 0.0),
            beta: Complex64::new(1.0, 0.0),
        }
    }

    /// The |+⟩ state (X-axis eigenstate), (1, 1)/√2.
    pub fn plus() -> Self {
        Qubit {
            alpha: Complex64::new(FRAC_1_SQRT_2, 0.0),
            beta: Complex64::new(FRAC_1_SQRT_2, 0.0),
        }
    }

    /// The |−⟩ state (X-axis eigenstate), (1, −1)/√2.
    pub fn minus() -> Self {
        Qubit {
            alpha: Complex64::new(FRAC_1_SQRT_2, 0.0),
            beta: Complex64::new(-FRAC_1_SQRT_2, 0.0),
        }
    }

    /// The |↻⟩ state (Y-axis eigenstate), (1, i)/√2.
    pub fn cw() -> Self {
        Qubit {
            alpha: Complex64::new(FRAC_1_SQRT_2, 0.0),
            beta: Complex64::new(0.0, FRAC_1_SQRT_2),
        }
    }

    /// The |↺⟩ state (Y-axis eigenstate), (1, −i)/√2.
    pub fn ccw() -> Self {
        Qubit {
            alpha: Complex64::new(FRAC_1_SQRT_2, 0.0),
            beta: Complex64::new(0.0, -FRAC_1_SQRT_2),
        }
    }

    /// Build the state (√p0, √p1) from the two outcome probabilities.
    ///
    /// Both inputs must be non-negative and sum to 1 within
    /// [`PROB_SUM_TOLERANCE`], otherwise [`QubitError::InvalidProbability`]
    /// is returned. The result is the unique state with non-negative real
    /// amplitudes matching the given probabilities; states with relative
    /// phase between the amplitudes cannot be expressed through this
    /// constructor and must be reached by gate application instead.
    pub fn from_probabilities(p0: f64, p1: f64) -> Result<Self, QubitError> {
        if p0 < 0.0 || p1 < 0.0 || (p0 + p1 - 1.0).abs() > PROB_SUM_TOLERANCE {
            return Err(QubitError::InvalidProbability { p0, p1 });
        }

        Ok(Qubit {
            alpha: Complex64::new(p0.sqrt(), 0.0),
            beta: Complex64::new(p1.sqrt(), 0.0),
        })
    }

    /// Apply a gate to this state, returning the transformed state.
    pub fn apply(&self, gate: &Gate) -> Self {
        let matrix = gate.matrix();
        let amplitudes = matrix.dot(&self.to_vector());

        Qubit {
            alpha: amplitudes[0],
            beta: amplitudes[1],
        }
    }

    /// Apply a gate sequence written in operator order.
    ///
    /// The rightmost gate in the slice is applied first, matching the
    /// right-to-left convention of [`crate::gate::compose`]:
    /// `q.apply_sequence(&[Gate::T, Gate::H])` computes T·(H·q).
    pub fn apply_sequence(&self, gates: &[Gate]) -> Self {
        gates.iter().rev().fold(*self, |state, gate| state.apply(gate))
    }

    /// The probabilities of measuring outcome 0 and outcome 1.
    pub fn probabilities(&self) -> (f64, f64) {
        (self.alpha.norm_sqr(), self.beta.norm_sqr())
    }

    /// Check whether |α|² + |β|² is 1 within [`NORM_TOLERANCE`].
    pub fn is_normalized(&self) -> bool {
        let norm_sqr = self.alpha.norm_sqr() + self.beta.norm_sqr();
        (norm_sqr - 1.0).abs() < NORM_TOLERANCE
    }

    /// The amplitude of the |0⟩ component.
    pub fn alpha(&self) -> Complex64 {
        self.alpha
    }

    /// The amplitude of the |1⟩ component.
    pub fn beta(&self) -> Complex64 {
        self.beta
    }

    /// The state as a 2-element column vector.
    pub fn to_vector(&self) -> Array1<Complex64> {
        Array1::from(vec![self.alpha, self.beta])
    }
}

impl Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({:.6}{:+.6}i)|0⟩ + ({:.6}{:+.6}i)|1⟩",
            self.alpha.re, self.alpha.im, self.beta.re, self.beta.im
        )
    }
}
