// src/eos/mod.rs
/*!
The **equation-of-state** interface of the hydro solver.

An EOS converts between the conserved state `U = (ρ, m, E)` advanced by the update
step and the primitive state `W = (ρ, v, p)` used by reconstruction and the Riemann
solver, and owns the positivity floors that keep both states physical.

Array operations take an inclusive `IndexRange` and visit each cell independently;
single-cell operations take the per-cell records. Unphysical states are never reported
as errors: they are floored.
*/

pub mod adiabatic;
pub mod config;
pub mod floors;

use crate::field::field_array::FieldArray;
use crate::field::variables::{Conserved, Primitive};
use crate::math::scalar::Real;
use crate::space::index_range::IndexRange;

use floors::FloorReport;

/// Unified EOS behaviour. The magnetic-field and previous-primitive arguments are part
/// of the interface for variants that need them; the adiabatic hydro EOS ignores them.
pub trait Eos<T: Real>: Send + Sync {
    /// Ratio of specific heats.
    fn gamma(&self) -> T;

    /// Convert `cons` to `prim` over `range`, flooring density and pressure.
    ///
    /// `cons` is an output as well: the density floor raises the conserved density and
    /// the pressure floor rewrites the conserved energy so both arrays stay consistent.
    ///
    /// # Panics
    /// Panics if the arrays differ in extents or `range` does not fit them.
    fn conserved_to_primitive(
        &self,
        cons: &mut FieldArray<T>,
        prim_old: &FieldArray<T>,
        b: Option<&FieldArray<T>>,
        prim: &mut FieldArray<T>,
        range: IndexRange,
    ) -> FloorReport;

    /// Convert `prim` to `cons` over `range`. Pure algebraic map; no floors.
    ///
    /// # Panics
    /// Panics if the arrays differ in extents or `range` does not fit them.
    fn primitive_to_conserved(
        &self,
        prim: &FieldArray<T>,
        bcc: Option<&FieldArray<T>>,
        cons: &mut FieldArray<T>,
        range: IndexRange,
    );

    /// Sound speed of one (already floored) primitive state.
    fn sound_speed(&self, w: &Primitive<T>) -> T;

    /// Floor density and pressure of one primitive state; velocity is untouched.
    fn apply_primitive_floors(&self, w: &mut Primitive<T>);

    /// Floor one primitive state and keep the matching conserved state consistent.
    fn apply_primitive_conserved_floors(&self, w: &mut Primitive<T>, u: &mut Conserved<T>);

    /// Floor the passive-scalar concentrations of one cell.
    fn apply_passive_scalar_floors(&self, s: &mut [T]);

    /// `apply_primitive_floors` on cell `(k, j, i)` of an array
    /// (`(0, 0, i)` addresses an interface slice).
    fn apply_primitive_floors_at(&self, prim: &mut FieldArray<T>, k: usize, j: usize, i: usize) {
        let mut w = prim.load_prim(k, j, i);
        self.apply_primitive_floors(&mut w);
        prim.store_prim(k, j, i, w);
    }

    /// `apply_primitive_conserved_floors` on cell `(k, j, i)` of a pair of arrays.
    fn apply_primitive_conserved_floors_at(
        &self,
        prim: &mut FieldArray<T>,
        cons: &mut FieldArray<T>,
        k: usize,
        j: usize,
        i: usize,
    ) {
        let mut w = prim.load_prim(k, j, i);
        let mut u = cons.load_cons(k, j, i);
        self.apply_primitive_conserved_floors(&mut w, &mut u);
        prim.store_prim(k, j, i, w);
        cons.store_cons(k, j, i, u);
    }
}
