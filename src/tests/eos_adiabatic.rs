// src/tests/eos_adiabatic.rs

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::eos::adiabatic::EquationOfState;
use crate::eos::floors::FloorReport;
use crate::eos::Eos;
use crate::field::field_array::FieldArray;
use crate::field::variables::{ConsVar, Conserved, PrimVar, Primitive};
use crate::space::index_range::IndexRange;

/// Convert a single conserved cell through the array sweep.
fn c2p_one(eos: &EquationOfState<f64>, u: Conserved<f64>) -> (Conserved<f64>, Primitive<f64>, FloorReport) {
    let mut cons = FieldArray::hydro(1, 1, 1);
    let mut prim = FieldArray::hydro(1, 1, 1);
    let prim_old = prim.clone();
    cons.store_cons(0, 0, 0, u);
    let report = eos.conserved_to_primitive(&mut cons, &prim_old, None, &mut prim, IndexRange::cell(0, 0, 0));
    (cons.load_cons(0, 0, 0), prim.load_prim(0, 0, 0), report)
}

fn random_prim_block(rng: &mut StdRng, nk: usize, nj: usize, ni: usize) -> FieldArray<f64> {
    let mut prim = FieldArray::hydro(nk, nj, ni);
    for k in 0..nk {
        for j in 0..nj {
            for i in 0..ni {
                let w = Primitive::new(
                    rng.random_range(0.1..10.0),
                    [rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0)],
                    rng.random_range(0.01..100.0),
                );
                prim.store_prim(k, j, i, w);
            }
        }
    }
    prim
}

// ======================================================================================
// ------------------------------------ Scenarios ---------------------------------------
// ======================================================================================

#[test]
fn primitive_to_conserved_moving_cell() {
    let eos = EquationOfState::new(1.4);
    let mut prim = FieldArray::hydro(1, 1, 1);
    let mut cons = FieldArray::hydro(1, 1, 1);
    prim.store_prim(0, 0, 0, Primitive::new(1.0, [1.0, 0.0, 0.0], 1.0));
    let range = IndexRange::full(&cons);

    eos.primitive_to_conserved(&prim, None, &mut cons, range);

    let u = cons.load_cons(0, 0, 0);
    assert_eq!(u.density, 1.0);
    assert_eq!(u.momentum, [1.0, 0.0, 0.0]);
    assert_relative_eq!(u.energy, 3.0, max_relative = 1e-14);
}

#[test]
fn near_vacuum_cell_lands_on_both_floors() {
    let (dfloor, pfloor) = (1e-8, 1e-8);
    let eos = EquationOfState::with_floors(1.4, Some(dfloor), Some(pfloor), None);

    let (u, w, report) = c2p_one(&eos, Conserved::new(1e-10, [0.0; 3], 1e-10));

    assert_eq!(w.density, dfloor);
    assert_eq!(w.velocity, [0.0; 3]);
    assert_eq!(w.pressure, pfloor);
    assert_eq!(u.density, dfloor);
    assert_eq!(u.energy, pfloor / (1.4 - 1.0));
    assert_eq!(report, FloorReport { cells: 1, density_floors: 1, pressure_floors: 1 });
}

#[test]
fn near_vacuum_cell_is_above_default_floors() {
    let eos = EquationOfState::new(1.4);
    let (u, w, report) = c2p_one(&eos, Conserved::new(1e-10, [0.0; 3], 1e-10));

    assert!(report.is_clean());
    assert_eq!(u, Conserved::new(1e-10, [0.0; 3], 1e-10));
    assert_eq!(w.density, 1e-10);
    assert_relative_eq!(w.pressure, 0.4e-10, max_relative = 1e-12);
}

#[test]
fn sound_speed_of_unit_state() {
    let eos = EquationOfState::new(5.0 / 3.0);
    let w = Primitive::new(1.0, [0.3, -2.0, 0.0], 1.0);
    assert_relative_eq!(eos.sound_speed(&w), (5.0f64 / 3.0).sqrt(), max_relative = 1e-15);

    let w = Primitive::new(4.0, [0.0; 3], 2.4);
    assert_relative_eq!(eos.sound_speed(&w), (5.0 / 3.0 * 0.6f64).sqrt(), max_relative = 1e-14);
}

// ======================================================================================
// ------------------------------------ Properties --------------------------------------
// ======================================================================================

#[test]
fn round_trip_recovers_primitives() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let eos = EquationOfState::new(5.0 / 3.0);
    let prim = random_prim_block(&mut rng, 4, 5, 6);

    let mut cons = FieldArray::hydro(4, 5, 6);
    let mut back = FieldArray::hydro(4, 5, 6);
    let range = IndexRange::full(&prim);

    eos.primitive_to_conserved(&prim, None, &mut cons, range);
    let report = eos.conserved_to_primitive(&mut cons, &prim, None, &mut back, range);

    assert!(report.is_clean());
    assert_eq!(report.cells, range.num_cells());
    for k in 0..4 {
        for j in 0..5 {
            for i in 0..6 {
                let (w0, w1) = (prim.load_prim(k, j, i), back.load_prim(k, j, i));
                assert_eq!(w1.density, w0.density);
                for d in 0..3 {
                    assert_relative_eq!(w1.velocity[d], w0.velocity[d], epsilon = 1e-14, max_relative = 1e-12);
                }
                assert_relative_eq!(w1.pressure, w0.pressure, max_relative = 1e-9);
            }
        }
    }
}

#[test]
fn density_floor_keeps_momentum_and_energy() {
    let dfloor = 1e-6;
    let eos = EquationOfState::with_floors(1.4, Some(dfloor), None, None);
    let m = [2e-12, -1e-12, 0.0];

    let (u, w, report) = c2p_one(&eos, Conserved::new(1e-12, m, 1.0));

    assert_eq!(report, FloorReport { cells: 1, density_floors: 1, pressure_floors: 0 });
    assert_eq!(u.density, dfloor);
    assert_eq!(u.momentum, m);
    assert_eq!(u.energy, 1.0);
    assert_eq!(w.density, dfloor);
    for d in 0..3 {
        assert_relative_eq!(w.velocity[d], m[d] / dfloor, max_relative = 1e-14);
    }
}

#[test]
fn pressure_floor_rewrites_energy_consistently() {
    let gamma = 1.4;
    let pfloor = 1e-6;
    let eos = EquationOfState::with_floors(gamma, None, Some(pfloor), None);

    // e_k = 4.5 > E, so the raw pressure is negative
    let (u, w, report) = c2p_one(&eos, Conserved::new(1.0, [3.0, 0.0, 0.0], 4.0));

    assert_eq!(report, FloorReport { cells: 1, density_floors: 0, pressure_floors: 1 });
    assert_eq!(w.pressure, pfloor);
    assert_eq!(w.velocity, [3.0, 0.0, 0.0]);
    let e_k = 0.5 * u.momentum_sqr() / u.density;
    assert_relative_eq!((gamma - 1.0) * (u.energy - e_k), pfloor, max_relative = 1e-8);
}

#[test]
fn pressure_equal_to_floor_counts_as_floored() {
    let eos = EquationOfState::with_floors(1.5, None, Some(0.25), None);
    assert_eq!(eos.floors().pressure, 0.25);

    // p = (1.5 - 1) * 0.5 = 0.25 exactly
    let (u, w, report) = c2p_one(&eos, Conserved::new(1.0, [0.0; 3], 0.5));

    assert_eq!(report, FloorReport { cells: 1, density_floors: 0, pressure_floors: 1 });
    assert_eq!(w.pressure, 0.25);
    assert_eq!(u.energy, 0.5);
}

#[test]
fn pressure_floor_uses_floored_density() {
    let gamma = 1.4;
    let (dfloor, pfloor) = (1e-3, 1e-7);
    let eos = EquationOfState::with_floors(gamma, Some(dfloor), Some(pfloor), None);

    let (u, w, report) = c2p_one(&eos, Conserved::new(-1.0, [1e-3, 2e-3, 0.0], 0.0));

    assert_eq!(report, FloorReport { cells: 1, density_floors: 1, pressure_floors: 1 });
    assert_eq!(w.density, dfloor);
    assert_eq!(w.pressure, pfloor);
    let e_k = 0.5 * u.momentum_sqr() / dfloor;
    assert_relative_eq!((gamma - 1.0) * (u.energy - e_k), pfloor, max_relative = 1e-8);
    assert!(w.pressure > 0.0 && w.density > 0.0);
}

#[test]
fn sweep_touches_only_the_range() {
    let eos = EquationOfState::new(1.4);
    let mut cons = FieldArray::hydro(3, 3, 3);
    let mut prim = FieldArray::hydro(3, 3, 3);
    for k in 0..3 {
        for j in 0..3 {
            for i in 0..3 {
                cons.store_cons(k, j, i, Conserved::new(1e-30, [0.0; 3], -1.0));
            }
        }
    }
    let before = cons.clone();
    let range = IndexRange::cell(1, 1, 1);

    let prim_old = prim.clone();
    let report = eos.conserved_to_primitive(&mut cons, &prim_old, None, &mut prim, range);
    assert_eq!(report, FloorReport { cells: 1, density_floors: 1, pressure_floors: 1 });

    for k in 0..3 {
        for j in 0..3 {
            for i in 0..3 {
                if range.contains(k, j, i) {
                    assert_eq!(prim.prim(PrimVar::Density, k, j, i), eos.density_floor());
                    assert_eq!(prim.prim(PrimVar::Pressure, k, j, i), eos.pressure_floor());
                } else {
                    assert_eq!(prim.load_prim(k, j, i), Primitive::default());
                    assert_eq!(cons.load_cons(k, j, i), before.load_cons(k, j, i));
                }
            }
        }
    }
}

#[test]
fn parallel_sweep_matches_cell_kernel() {
    let mut rng = StdRng::seed_from_u64(42);
    let eos = EquationOfState::with_floors(1.4, Some(1e-4), Some(1e-5), None);
    let (nk, nj, ni) = (6, 4, 7);

    let mut cons = FieldArray::hydro(nk, nj, ni);
    for k in 0..nk {
        for j in 0..nj {
            for i in 0..ni {
                let u = Conserved::new(
                    rng.random_range(-0.5..2.0),
                    [rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)],
                    rng.random_range(-0.5..5.0),
                );
                cons.store_cons(k, j, i, u);
            }
        }
    }
    // one cell in range certainly hits both floors
    cons.store_cons(2, 1, 3, Conserved::new(-1.0, [0.0; 3], -1.0));
    let mut expected_cons = cons.clone();
    let mut expected_prim = FieldArray::hydro(nk, nj, ni);
    let range = IndexRange::interior(&cons, 1);

    let mut expected_report = FloorReport::default();
    for k in range.k_range() {
        for j in range.j_range() {
            for i in range.i_range() {
                let mut u = expected_cons.load_cons(k, j, i);
                let (w, r) = eos.cons_to_prim_cell(&mut u);
                expected_cons.store_cons(k, j, i, u);
                expected_prim.store_prim(k, j, i, w);
                expected_report += r;
            }
        }
    }

    let mut prim = FieldArray::hydro(nk, nj, ni);
    let prim_old = prim.clone();
    let report = eos.conserved_to_primitive(&mut cons, &prim_old, None, &mut prim, range);

    assert_eq!(report, expected_report);
    assert!(report.density_floors > 0 && report.pressure_floors > 0);
    assert_eq!(cons, expected_cons);
    assert_eq!(prim, expected_prim);
}

#[test]
fn single_precision_conversions() {
    let eos = EquationOfState::<f32>::new(1.4);
    let mut prim = FieldArray::hydro_1d(2);
    let mut cons = FieldArray::hydro_1d(2);
    prim.store_prim(0, 0, 1, Primitive::new(1.0, [1.0, 0.0, 0.0], 1.0));
    prim.store_prim(0, 0, 0, Primitive::new(2.0, [0.0, -0.5, 0.0], 0.5));

    eos.primitive_to_conserved(&prim, None, &mut cons, IndexRange::full(&prim));
    assert_relative_eq!(cons.cons(ConsVar::Energy, 0, 0, 1), 3.0f32, max_relative = 1e-6);

    let mut back = FieldArray::hydro_1d(2);
    eos.conserved_to_primitive(&mut cons, &prim, None, &mut back, IndexRange::full(&prim));
    assert_relative_eq!(back.prim(PrimVar::Pressure, 0, 0, 0), 0.5f32, max_relative = 1e-5);
    assert_relative_eq!(back.prim(PrimVar::Velocity2, 0, 0, 0), -0.5f32, max_relative = 1e-6);
}

// ======================================================================================
// ---------------------------------- Single-cell floors --------------------------------
// ======================================================================================

#[test]
fn primitive_floors_are_idempotent_and_leave_velocity() {
    let eos = EquationOfState::with_floors(1.4, Some(1e-6), Some(1e-8), None);
    let mut w = Primitive::new(-2.0, [1.0, -3.0, 0.5], 0.0);

    eos.apply_primitive_floors(&mut w);
    assert_eq!(w, Primitive::new(1e-6, [1.0, -3.0, 0.5], 1e-8));

    let once = w;
    eos.apply_primitive_floors(&mut w);
    assert_eq!(w, once);

    // physical states are untouched
    let mut ok = Primitive::new(1.0, [0.0; 3], 2.0);
    eos.apply_primitive_floors(&mut ok);
    assert_eq!(ok, Primitive::new(1.0, [0.0; 3], 2.0));
}

#[test]
fn interface_states_are_refloored_in_place() {
    let eos = EquationOfState::with_floors(1.4, Some(1e-6), Some(1e-8), None);
    let mut wl = FieldArray::hydro_1d(4);
    wl.store_prim(0, 0, 2, Primitive::new(0.0, [4.0, 0.0, 0.0], -1.0));
    wl.store_prim(0, 0, 3, Primitive::new(1.0, [0.0; 3], 1.0));

    for i in 0..4 {
        eos.apply_primitive_floors_at(&mut wl, 0, 0, i);
    }

    assert_eq!(wl.get_1d(PrimVar::Density.idx(), 2), 1e-6);
    assert_eq!(wl.get_1d(PrimVar::Velocity1.idx(), 2), 4.0);
    assert_eq!(wl.get_1d(PrimVar::Pressure.idx(), 2), 1e-8);
    assert_eq!(wl.load_prim(0, 0, 3), Primitive::new(1.0, [0.0; 3], 1.0));
    // untouched zero state also floored
    assert_eq!(wl.get_1d(PrimVar::Density.idx(), 0), 1e-6);
}

#[test]
fn primitive_conserved_floors_repair_both_states() {
    let gamma = 1.4;
    let (dfloor, pfloor) = (1e-6, 1e-8);
    let eos = EquationOfState::with_floors(gamma, Some(dfloor), Some(pfloor), None);

    let mut w = Primitive::new(1e-12, [1.0, 2.0, 0.0], -1.0);
    let mut u = Conserved::new(5.0, [9.0, 9.0, 9.0], 7.0);
    eos.apply_primitive_conserved_floors(&mut w, &mut u);

    assert_eq!(w.density, dfloor);
    assert_eq!(w.velocity, [1.0, 2.0, 0.0]);
    assert_eq!(w.pressure, pfloor);
    assert_eq!(u.density, dfloor);
    assert_eq!(u.momentum, [9.0, 9.0, 9.0]);
    let e_k = 0.5 * dfloor * 5.0;
    assert_relative_eq!(u.energy, pfloor / (gamma - 1.0) + e_k, max_relative = 1e-14);
    assert_relative_eq!((gamma - 1.0) * (u.energy - e_k), pfloor, max_relative = 1e-8);
}

#[test]
fn primitive_conserved_floors_pass_physical_states() {
    let eos = EquationOfState::new(1.4);
    let w0 = Primitive::new(1.0, [0.5, 0.0, 0.0], 1.0);
    let u0 = eos.prim_to_cons_cell(&w0);

    let (mut w, mut u) = (w0, u0);
    eos.apply_primitive_conserved_floors(&mut w, &mut u);
    assert_eq!(w, w0);
    assert_eq!(u, u0);
}

#[test]
fn sweep_output_is_stable_under_cell_floors() {
    let eos = EquationOfState::with_floors(5.0 / 3.0, Some(1e-3), Some(1e-3), None);
    let mut cons = FieldArray::hydro(1, 2, 2);
    cons.store_cons(0, 0, 0, Conserved::new(1e-9, [1e-4, 0.0, 0.0], 1e-9));
    cons.store_cons(0, 0, 1, Conserved::new(1.0, [2.0, 0.0, 0.0], 1.0));
    cons.store_cons(0, 1, 0, Conserved::new(1.0, [0.0; 3], 1.0));
    cons.store_cons(0, 1, 1, Conserved::new(-1.0, [0.0; 3], -1.0));
    let mut prim = FieldArray::hydro(1, 2, 2);
    let prim_old = prim.clone();
    let range = IndexRange::full(&cons);

    eos.conserved_to_primitive(&mut cons, &prim_old, None, &mut prim, range);

    let (mut prim2, mut cons2) = (prim.clone(), cons.clone());
    for j in 0..2 {
        for i in 0..2 {
            eos.apply_primitive_conserved_floors_at(&mut prim2, &mut cons2, 0, j, i);
        }
    }
    for j in 0..2 {
        for i in 0..2 {
            let (w, w2) = (prim.load_prim(0, j, i), prim2.load_prim(0, j, i));
            let (u, u2) = (cons.load_cons(0, j, i), cons2.load_cons(0, j, i));
            assert_eq!(w2, w);
            assert_eq!(u2.density, u.density);
            assert_eq!(u2.momentum, u.momentum);
            assert_relative_eq!(u2.energy, u.energy, max_relative = 1e-12);
        }
    }
}

#[test]
fn passive_scalars_are_floored() {
    let eos = EquationOfState::with_floors(1.4, None, None, Some(1e-10));
    let mut s = [0.3, -1.0, 0.0, 1e-12];
    eos.apply_passive_scalar_floors(&mut s);
    assert_eq!(s, [0.3, 1e-10, 1e-10, 1e-10]);
}

#[test]
#[should_panic]
fn mismatched_blocks_panic() {
    let eos = EquationOfState::new(1.4);
    let prim = FieldArray::hydro(2, 2, 2);
    let mut cons = FieldArray::hydro(2, 2, 3);
    eos.primitive_to_conserved(&prim, None, &mut cons, IndexRange::full(&prim));
}
