use bloch::gate::constants;
use bloch::gate::*;
use bloch::state::Qubit;
use ndarray::{Array1, Array2};
use num_complex::Complex64;

#[cfg(test)]
mod gate_catalog_tests {
    use super::*;
    use std::f64::consts::PI;

    fn unit_states() -> Vec<Qubit> {
        vec![
            Qubit::zero(),
            Qubit::one(),
            Qubit::plus(),
            Qubit::minus(),
            Qubit::cw(),
            Qubit::ccw(),
            Qubit::zero().apply_sequence(&[Gate::T, Gate::H]),
        ]
    }

    #[test]
    fn test_catalog_gates_preserve_norm() {
        // Unitarity closure: |G·s| = 1 for every catalog gate and unit state
        for gate in Gate::CATALOG {
            for state in unit_states() {
                let transformed = state.apply(&gate);
                assert!(
                    transformed.is_normalized(),
                    "{} broke normalization of {}",
                    gate.name(),
                    state
                );
            }
        }
    }

    #[test]
    fn test_phase_shift_preserves_norm_over_angle_sweep() {
        let state = Qubit::plus();
        for step in 0..16 {
            let phi = step as f64 * PI / 8.0;
            assert!(state.apply(&Gate::Phase(phi)).is_normalized());
        }
    }

    #[test]
    fn test_catalog_matrices_are_unitary() {
        // G†·G = I, checked element-wise on the matrices themselves
        for gate in Gate::CATALOG {
            let matrix = gate.matrix();
            let adjoint = gate.adjoint().matrix();
            let product = adjoint.dot(&matrix);

            for i in 0..2 {
                for j in 0..2 {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    let diff = (product[[i, j]] - Complex64::new(expected, 0.0)).norm();
                    assert!(diff < 1e-10, "{}†·{} differs from I", gate.name(), gate.name());
                }
            }
        }
    }

    #[test]
    fn test_hadamard_matches_hand_written_matrix() {
        let factor = Complex64::new(constants::FRAC_1_SQRT_2, 0.0);
        let h = Gate::H.matrix();
        assert_eq!(h[[0, 0]], factor);
        assert_eq!(h[[0, 1]], factor);
        assert_eq!(h[[1, 0]], factor);
        assert_eq!(h[[1, 1]], -factor);
    }

    #[test]
    fn test_pauli_y_uses_the_imaginary_unit() {
        let y = Gate::Y.matrix();
        assert_eq!(y[[0, 1]], -constants::I);
        assert_eq!(y[[1, 0]], constants::I);
    }

    #[test]
    fn test_compose_matches_successive_application() {
        let state = Qubit::zero();
        let sequence = [Gate::T, Gate::S, Gate::H];

        let composed = compose(&sequence);
        let via_matrix = composed.dot(&state.to_vector());
        let via_application = state.apply_sequence(&sequence).to_vector();

        for i in 0..2 {
            assert!((via_matrix[i] - via_application[i]).norm() < 1e-10);
        }
    }

    #[test]
    fn test_cnot_preserves_norm_of_two_qubit_states() {
        let cx = cnot();
        // (|00⟩ + |11⟩)/√2 and a non-uniform unit vector
        let bell = Array1::from(vec![
            Complex64::new(constants::FRAC_1_SQRT_2, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(0.0, 0.0),
            Complex64::new(constants::FRAC_1_SQRT_2, 0.0),
        ]);
        let skewed = Array1::from(vec![
            Complex64::new(0.5, 0.0),
            Complex64::new(0.0, 0.5),
            Complex64::new(-0.5, 0.0),
            Complex64::new(0.0, -0.5),
        ]);

        for vector in [bell, skewed] {
            let transformed = cx.dot(&vector);
            let norm_sqr: f64 = transformed.iter().map(|amp| amp.norm_sqr()).sum();
            assert!((norm_sqr - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_cnot_is_self_inverse() {
        let cx = cnot();
        let squared = cx.dot(&cx);
        let identity =
            Array2::from_diag(&Array1::from_elem(4, Complex64::new(1.0, 0.0)));

        for i in 0..4 {
            for j in 0..4 {
                assert!((squared[[i, j]] - identity[[i, j]]).norm() < 1e-10);
            }
        }
    }
}
