// src/eos/adiabatic.rs
/*!
**Adiabatic (ideal-gas) hydrodynamics** equation of state.

Pressure and total energy are tied by `E = p/(γ−1) + ½ρ|v|²`.

# Conversions

- `U → W`: density floor on `ρ` (momentum and energy kept), `v = m/ρ`,
  `p = (γ−1)(E − ½|m|²/ρ)`, then the pressure floor, which rewrites `E` when it fires.
- `W → U`: `m = ρv`, `E = p/(γ−1) + ½ρ|v|²`, no floors.

Off the floors the two maps are inverses of each other.

# Parallelism

Array sweeps split both arrays into per-`k` plane views (`FieldArray::planes_mut`)
and hand matching planes to rayon workers. Inside a plane the `j`, `i` loops are plain
serial loops over contiguous slices, so the per-cell kernel stays branch-light and
auto-vectorizable. No cell reads another cell's result.
*/

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::Result;
use crate::field::field_array::FieldArray;
use crate::field::variables::{Conserved, Primitive};
use crate::math::scalar::Real;
use crate::space::index_range::IndexRange;

use super::config::EosConfig;
use super::floors::{FloorReport, Floors};
use super::Eos;

// ======================================================================================
// ------------------------------------ Struct ------------------------------------------
// ======================================================================================

/// Adiabatic hydro EOS: `γ` plus the three floors. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquationOfState<T: Real> {
    gamma: T,
    floors: Floors<T>,
}

impl<T: Real> EquationOfState<T> {
    /// EOS with default floors. `gamma` is taken as given.
    #[inline]
    pub fn new(gamma: T) -> Self {
        Self::with_floors(gamma, None, None, None)
    }

    /// EOS with optional floors; each missing one defaults to `sqrt(1024 * f32::MIN_POSITIVE)`.
    pub fn with_floors(
        gamma: T,
        density_floor: Option<T>,
        pressure_floor: Option<T>,
        scalar_floor: Option<T>,
    ) -> Self {
        let floors = Floors::new(density_floor, pressure_floor, scalar_floor);
        debug!(
            gamma = %gamma,
            dfloor = %floors.density,
            pfloor = %floors.pressure,
            sfloor = %floors.scalar,
            "adiabatic EOS constructed"
        );
        Self { gamma, floors }
    }

    /// Validate `cfg` and build the EOS in precision `T`.
    pub fn from_config(cfg: &EosConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self::with_floors(
            T::lit(cfg.gamma),
            cfg.density_floor.map(T::lit),
            cfg.pressure_floor.map(T::lit),
            cfg.scalar_floor.map(T::lit),
        ))
    }

    #[inline] pub fn density_floor(&self) -> T { self.floors.density }
    #[inline] pub fn pressure_floor(&self) -> T { self.floors.pressure }
    #[inline] pub fn scalar_floor(&self) -> T { self.floors.scalar }
    #[inline] pub fn floors(&self) -> &Floors<T> { &self.floors }

    #[inline(always)]
    fn gm1(&self) -> T {
        self.gamma - T::one()
    }
}

// ======================================================================================
// --------------------------------- Per-cell kernels -----------------------------------
// ======================================================================================

impl<T: Real> EquationOfState<T> {
    /// `U → W` for one cell, flooring `u` in place. This is the body of the
    /// `conserved_to_primitive` sweep.
    #[inline(always)]
    pub fn cons_to_prim_cell(&self, u: &mut Conserved<T>) -> (Primitive<T>, FloorReport) {
        let gm1 = self.gm1();

        let (d, d_floored) = self.floors.density(u.density);
        u.density = d;

        let di = T::one() / d;
        let velocity = u.momentum.map(|m| m * di);

        let e_k = T::half() * di * u.momentum_sqr();
        let p = gm1 * (u.energy - e_k);

        let (p, e, p_floored) = self.floors.pressure_with_energy(p, u.energy, e_k, gm1);
        u.energy = e;

        (Primitive { density: d, velocity, pressure: p }, FloorReport::cell(d_floored, p_floored))
    }

    /// `W → U` for one cell.
    #[inline(always)]
    pub fn prim_to_cons_cell(&self, w: &Primitive<T>) -> Conserved<T> {
        let igm1 = T::one() / self.gm1();
        let d = w.density;
        Conserved {
            density: d,
            momentum: w.velocity.map(|v| v * d),
            energy: w.pressure * igm1 + w.kinetic_energy(),
        }
    }
}

// ======================================================================================
// ---------------------------------- Eos Trait Impl ------------------------------------
// ======================================================================================

impl<T: Real> Eos<T> for EquationOfState<T> {
    #[inline]
    fn gamma(&self) -> T {
        self.gamma
    }

    fn conserved_to_primitive(
        &self,
        cons: &mut FieldArray<T>,
        _prim_old: &FieldArray<T>,
        _b: Option<&FieldArray<T>>,
        prim: &mut FieldArray<T>,
        range: IndexRange,
    ) -> FloorReport {
        check_sweep(cons, prim, &range);
        let ni = cons.ni();

        let cons_planes = cons.planes_mut(range.k_range());
        let prim_planes = prim.planes_mut(range.k_range());

        let report = cons_planes
            .into_par_iter()
            .zip(prim_planes.into_par_iter())
            .map(|(mut u, mut w)| {
                let mut report = FloorReport::default();
                for j in range.j_range() {
                    for i in range.i_range() {
                        let n = j * ni + i;
                        let mut cell = u.load_cons(n);
                        let (wc, r) = self.cons_to_prim_cell(&mut cell);
                        u.store_cons(n, cell);
                        w.store_prim(n, wc);
                        report += r;
                    }
                }
                report
            })
            .reduce(FloorReport::default, |a, b| a + b);

        if !report.is_clean() {
            trace!(
                cells = report.cells,
                density_floors = report.density_floors,
                pressure_floors = report.pressure_floors,
                "floors applied in conserved-to-primitive sweep"
            );
        }
        report
    }

    fn primitive_to_conserved(
        &self,
        prim: &FieldArray<T>,
        _bcc: Option<&FieldArray<T>>,
        cons: &mut FieldArray<T>,
        range: IndexRange,
    ) {
        check_sweep(cons, prim, &range);
        let ni = prim.ni();

        let prim_planes = prim.planes(range.k_range());
        let cons_planes = cons.planes_mut(range.k_range());

        cons_planes
            .into_par_iter()
            .zip(prim_planes.into_par_iter())
            .for_each(|(mut u, w)| {
                for j in range.j_range() {
                    for i in range.i_range() {
                        let n = j * ni + i;
                        u.store_cons(n, self.prim_to_cons_cell(&w.load_prim(n)));
                    }
                }
            });
    }

    #[inline]
    fn sound_speed(&self, w: &Primitive<T>) -> T {
        (self.gamma * w.pressure / w.density).sqrt()
    }

    #[inline]
    fn apply_primitive_floors(&self, w: &mut Primitive<T>) {
        w.density = self.floors.density(w.density).0;
        w.pressure = self.floors.pressure(w.pressure).0;
    }

    #[inline]
    fn apply_primitive_conserved_floors(&self, w: &mut Primitive<T>, u: &mut Conserved<T>) {
        let gm1 = self.gm1();

        w.density = self.floors.density(w.density).0;
        u.density = w.density;

        let e_k = w.kinetic_energy();
        let (p, e, _) = self.floors.pressure_with_energy(w.pressure, u.energy, e_k, gm1);
        w.pressure = p;
        u.energy = e;
    }

    #[inline]
    fn apply_passive_scalar_floors(&self, s: &mut [T]) {
        s.iter_mut().for_each(|x| *x = self.floors.scalar(*x));
    }
}

/// Contract check shared by both sweeps.
#[inline]
fn check_sweep<T: Real>(cons: &FieldArray<T>, prim: &FieldArray<T>, range: &IndexRange) {
    assert!(
        cons.same_extents(prim),
        "conserved {:?} and primitive {:?} extents differ",
        cons.extents(),
        prim.extents()
    );
    assert!(range.fits(cons), "{range:?} does not fit block {:?}", cons.extents());
}
