// src/gate.rs
//! Quantum gate catalog
//!
//! This module defines the single-qubit unitaries used throughout the
//! crate, the phase-shift family they specialize, and their composition
//! rule. Matrices are built once per call from `array!` literals; gates
//! themselves are plain enum values and can be copied freely.

use ndarray::{array, Array1, Array2};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Common complex numbers used in quantum gates
pub mod constants {
    use num_complex::Complex64;

    /// The imaginary unit i
    pub const I: Complex64 = Complex64::new(0.0, 1.0);

    /// 1/sqrt(2)
    pub const FRAC_1_SQRT_2: f64 = 0.7071067811865475;
}

/// Returns the phase-shift matrix diag(1, e^{iφ}).
///
/// Total over all real φ. Multiplies the |1⟩ amplitude by a unit-modulus
/// factor, leaving Z-basis probabilities unchanged while rotating the
/// state about the Z axis.
pub fn phase_shift(phi: f64) -> Array2<Complex64> {
    array![
        [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
        [Complex64::new(0.0, 0.0), Complex64::new(phi.cos(), phi.sin())]
    ]
}

/// Single-qubit gates.
///
/// The named variants are fixed unitaries; `Phase(φ)` is the generator
/// they specialize: `S` is `Phase(π/2)`, `T` is `Phase(π/4)`, and `Sdg`/
/// `Tdg` are the negated-angle adjoints. All variants are 2×2; the one
/// two-qubit operator in the catalog lives in [`cnot`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// Pauli-X (bit flip)
    X,
    /// Pauli-Y
    Y,
    /// Pauli-Z (sign flip)
    Z,
    /// Hadamard
    H,
    /// Quarter-turn phase shift (π/2 about Z)
    S,
    /// Adjoint of S
    Sdg,
    /// Eighth-turn phase shift (π/4 about Z)
    T,
    /// Adjoint of T
    Tdg,
    /// Phase shift by an arbitrary angle
    Phase(f64),
}

impl Gate {
    /// The named (non-parametrized) gates, in catalog order.
    pub const CATALOG: [Gate; 8] = [
        Gate::X,
        Gate::Y,
        Gate::Z,
        Gate::H,
        Gate::S,
        Gate::Sdg,
        Gate::T,
        Gate::Tdg,
    ];

    /// Returns the 2×2 matrix representation of this gate.
    pub fn matrix(&self) -> Array2<Complex64> {
        use constants::*;
        match self {
            Gate::X => {
                array![
                    [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)]
                ]
            }
            Gate::Y => {
                array![
                    [Complex64::new(0.0, 0.0), -I],
                    [I, Complex64::new(0.0, 0.0)]
                ]
            }
            Gate::Z => {
                array![
                    [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                    [Complex64::new(0.0, 0.0), Complex64::new(-1.0, 0.0)]
                ]
            }
            Gate::H => {
                let factor = Complex64::new(FRAC_1_SQRT_2, 0.0);
                array![[factor, factor], [factor, -factor]]
            }
            Gate::S => phase_shift(FRAC_PI_2),
            Gate::Sdg => phase_shift(-FRAC_PI_2),
            Gate::T => phase_shift(FRAC_PI_4),
            Gate::Tdg => phase_shift(-FRAC_PI_4),
            Gate::Phase(phi) => phase_shift(*phi),
        }
    }

    /// Returns the adjoint (Hermitian conjugate) of this gate.
    ///
    /// Pauli gates and Hadamard are self-adjoint; the phase-shift family
    /// conjugates by negating the angle.
    pub fn adjoint(&self) -> Gate {
        match self {
            Gate::X | Gate::Y | Gate::Z | Gate::H => *self,
            Gate::S => Gate::Sdg,
            Gate::Sdg => Gate::S,
            Gate::T => Gate::Tdg,
            Gate::Tdg => Gate::T,
            Gate::Phase(phi) => Gate::Phase(-phi),
        }
    }

    /// Returns a display name for this gate.
    pub fn name(&self) -> String {
        match self {
            Gate::X => "X".to_string(),
            Gate::Y => "Y".to_string(),
            Gate::Z => "Z".to_string(),
            Gate::H => "H".to_string(),
            Gate::S => "S".to_string(),
            Gate::Sdg => "S†".to_string(),
            Gate::T => "T".to_string(),
            Gate::Tdg => "T†".to_string(),
            Gate::Phase(phi) => format!("P({:.2})", phi),
        }
    }
}

/// Composes a gate sequence into a single 2×2 operator.
///
/// The slice is read in operator order, so the rightmost gate is the one
/// applied to a state first: `compose(&[Gate::T, Gate::H])` is the matrix
/// product T·H. Matrix multiplication is associative but not commutative,
/// so reordering the slice generally changes the result. Returns the
/// identity for an empty slice.
pub fn compose(gates: &[Gate]) -> Array2<Complex64> {
    let identity = Array2::from_diag(&Array1::from_elem(2, Complex64::new(1.0, 0.0)));
    gates.iter().fold(identity, |acc, gate| acc.dot(&gate.matrix()))
}

/// Returns the 4×4 controlled-NOT matrix.
///
/// Basis order is (00, 01, 10, 11): the control-0 block is the identity
/// and the control-1 block flips the target, |a, b⟩ → |a, a ⊕ b⟩. Part of
/// the catalog for completeness; the Bloch projection never consumes it.
pub fn cnot() -> Array2<Complex64> {
    array![
        [
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0)
        ],
        [
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0)
        ],
        [
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0)
        ],
        [
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 0.0)
        ]
    ]
}
