//! Prints the Bloch coordinates a renderer would draw: one reference state
//! per axis, plus T·H|0⟩ on the equator between +x and +y.
//!
//! Run with: cargo run --example bloch_coords

use bloch::prelude::*;

fn main() {
    let states = [
        (Qubit::zero(), "red", "|0⟩"),
        (Qubit::plus(), "green", "|+⟩"),
        (Qubit::cw(), "blue", "|↻⟩"),
        (
            Qubit::zero().apply_sequence(&[Gate::T, Gate::H]),
            "teal",
            "|v⟩",
        ),
    ];

    for (state, color, label) in states {
        let coords = bloch_coords(&state);
        println!(
            "{:>4} [{:>5}]  x = {:+.4}  y = {:+.4}  z = {:+.4}",
            label, color, coords.x, coords.y, coords.z
        );
    }
}
