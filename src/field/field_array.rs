// src/field/field_array.rs
/*!
A **Structure-of-Arrays (SoA)** wrapper over the dense `Tensor<T>` type holding the
hydro variables of a mesh block. The underlying `Tensor` has shape
**[nvar, nk, nj, ni]** where:

- `nvar` is the number of variables per cell (at least `NHYDRO`).
- `nk`, `nj`, `ni` are the block extents, ghost zones included (`i` fastest).

This layout stores every cell's density together, then every cell's first
momentum/velocity component, and so on. A reconstructed-interface slice is the
`nk = nj = 1` case and is addressed as `(field, i)` through the `*_1d` helpers.

For parallel sweeps, `planes_mut` hands out one `PlaneMut` per `k` index: a set of
disjoint `&mut` slices, one per hydro variable, covering that plane.
*/

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::math::scalar::Real;
use crate::math::tensor::dense::Tensor;

use super::variables::{ConsVar, Conserved, PrimVar, Primitive, NHYDRO};

// ============================================================================
// --------------------------- Struct Def: SoA --------------------------------
// ============================================================================

/// Hydro variables of one block in **Structure-of-Arrays** form backed by `Tensor<T>`.
/// Invariant: `data.shape == [nvar, nk, nj, ni]` with `nvar >= NHYDRO`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldArray<T: Real> {
    /// Underlying dense storage; always rank 4.
    pub data: Tensor<T>,
}

// ============================================================================
// ------------------------------ Constructors --------------------------------
// ============================================================================

impl<T: Real> FieldArray<T> {
    /// Create a zero-filled array of `nvar` variables on an `nk × nj × ni` block.
    #[inline]
    pub fn new(nvar: usize, nk: usize, nj: usize, ni: usize) -> Self {
        assert!(nvar >= NHYDRO, "FieldArray::new: nvar {nvar} < NHYDRO ({NHYDRO})");
        Self { data: Tensor::new(vec![nvar, nk, nj, ni]) }
    }

    /// Hydro-only array (`nvar == NHYDRO`).
    #[inline]
    pub fn hydro(nk: usize, nj: usize, ni: usize) -> Self {
        Self::new(NHYDRO, nk, nj, ni)
    }

    /// Interface slice of `ni` cells, addressed as `(field, i)`.
    #[inline]
    pub fn hydro_1d(ni: usize) -> Self {
        Self::new(NHYDRO, 1, 1, ni)
    }

    /// Wrap an existing rank-4 tensor, asserting shape `[nvar, nk, nj, ni]`.
    #[inline]
    pub fn from_tensor(t: Tensor<T>) -> Self {
        assert!(t.shape.len() == 4, "FieldArray expects rank-4 tensor [nvar, nk, nj, ni]");
        assert!(t.shape[0] >= NHYDRO, "FieldArray expects at least {NHYDRO} variables");
        Self { data: t }
    }

    #[inline] pub fn nvar(&self) -> usize { self.data.shape[0] }
    #[inline] pub fn nk(&self) -> usize { self.data.shape[1] }
    #[inline] pub fn nj(&self) -> usize { self.data.shape[2] }
    #[inline] pub fn ni(&self) -> usize { self.data.shape[3] }

    /// `[nk, nj, ni]`
    #[inline]
    pub fn extents(&self) -> [usize; 3] { [self.nk(), self.nj(), self.ni()] }

    /// Cells in one `k` plane (`nj * ni`).
    #[inline]
    pub fn plane_len(&self) -> usize { self.nj() * self.ni() }

    /// Cells in one variable (`nk * nj * ni`).
    #[inline]
    pub fn field_len(&self) -> usize { self.nk() * self.plane_len() }

    /// True iff `other` has the same block extents (the variable count may differ).
    #[inline]
    pub fn same_extents(&self, other: &Self) -> bool {
        self.extents() == other.extents()
    }

    #[inline] pub fn as_tensor(&self) -> &Tensor<T> { &self.data }
    #[inline] pub fn into_tensor(self) -> Tensor<T> { self.data }
}

// ============================================================================
// ----------------------------- Accessors ------------------------------------
// ============================================================================

impl<T: Real> FieldArray<T> {
    /// Contiguous storage of variable `n` (length `nk * nj * ni`).
    #[inline]
    pub fn field_slice(&self, n: usize) -> &[T] {
        assert!(n < self.nvar(), "field_slice: n {} out of range (nvar={})", n, self.nvar());
        let len = self.field_len();
        &self.data.data[n * len..(n + 1) * len]
    }

    #[inline]
    pub fn field_slice_mut(&mut self, n: usize) -> &mut [T] {
        assert!(n < self.nvar(), "field_slice_mut: n {} out of range (nvar={})", n, self.nvar());
        let len = self.field_len();
        &mut self.data.data[n * len..(n + 1) * len]
    }

    #[inline]
    pub fn get(&self, n: usize, k: usize, j: usize, i: usize) -> T {
        self.data.get(&[n, k, j, i])
    }

    #[inline]
    pub fn set(&mut self, n: usize, k: usize, j: usize, i: usize, val: T) {
        self.data.set(&[n, k, j, i], val);
    }

    #[inline]
    pub fn cons(&self, var: ConsVar, k: usize, j: usize, i: usize) -> T {
        self.get(var.idx(), k, j, i)
    }

    #[inline]
    pub fn prim(&self, var: PrimVar, k: usize, j: usize, i: usize) -> T {
        self.get(var.idx(), k, j, i)
    }

    /// `(field, i)` read on an interface slice.
    #[inline]
    pub fn get_1d(&self, n: usize, i: usize) -> T {
        self.get(n, 0, 0, i)
    }

    /// `(field, i)` write on an interface slice.
    #[inline]
    pub fn set_1d(&mut self, n: usize, i: usize, val: T) {
        self.set(n, 0, 0, i, val);
    }

    /// Read the conserved record of cell `(k, j, i)`.
    #[inline]
    pub fn load_cons(&self, k: usize, j: usize, i: usize) -> Conserved<T> {
        Conserved::from_array(ConsVar::ALL.map(|v| self.cons(v, k, j, i)))
    }

    /// Write the conserved record of cell `(k, j, i)`.
    #[inline]
    pub fn store_cons(&mut self, k: usize, j: usize, i: usize, u: Conserved<T>) {
        for (v, x) in ConsVar::ALL.into_iter().zip(u.to_array()) {
            self.set(v.idx(), k, j, i, x);
        }
    }

    /// Read the primitive record of cell `(k, j, i)`.
    #[inline]
    pub fn load_prim(&self, k: usize, j: usize, i: usize) -> Primitive<T> {
        Primitive::from_array(PrimVar::ALL.map(|v| self.prim(v, k, j, i)))
    }

    /// Write the primitive record of cell `(k, j, i)`.
    #[inline]
    pub fn store_prim(&mut self, k: usize, j: usize, i: usize, w: Primitive<T>) {
        for (v, x) in PrimVar::ALL.into_iter().zip(w.to_array()) {
            self.set(v.idx(), k, j, i, x);
        }
    }
}

// ============================================================================
// ------------------------------ Plane views ---------------------------------
// ============================================================================

/// Read-only view of the hydro variables of one `k` plane.
pub struct Plane<'a, T: Real> {
    fields: Vec<&'a [T]>,
}

/// Mutable view of the hydro variables of one `k` plane.
/// Holds `NHYDRO` disjoint slices of length `nj * ni`.
pub struct PlaneMut<'a, T: Real> {
    fields: Vec<&'a mut [T]>,
}

impl<'a, T: Real> Plane<'a, T> {
    /// Primitive record at in-plane offset `n = j * ni + i`.
    #[inline(always)]
    pub fn load_prim(&self, n: usize) -> Primitive<T> {
        Primitive::from_array(PrimVar::ALL.map(|v| self.fields[v.idx()][n]))
    }

    #[inline(always)]
    pub fn load_cons(&self, n: usize) -> Conserved<T> {
        Conserved::from_array(ConsVar::ALL.map(|v| self.fields[v.idx()][n]))
    }
}

impl<'a, T: Real> PlaneMut<'a, T> {
    #[inline(always)]
    pub fn load_cons(&self, n: usize) -> Conserved<T> {
        Conserved::from_array(ConsVar::ALL.map(|v| self.fields[v.idx()][n]))
    }

    #[inline(always)]
    pub fn store_cons(&mut self, n: usize, u: Conserved<T>) {
        for (f, x) in self.fields.iter_mut().zip(u.to_array()) {
            f[n] = x;
        }
    }

    #[inline(always)]
    pub fn load_prim(&self, n: usize) -> Primitive<T> {
        Primitive::from_array(PrimVar::ALL.map(|v| self.fields[v.idx()][n]))
    }

    #[inline(always)]
    pub fn store_prim(&mut self, n: usize, w: Primitive<T>) {
        for (f, x) in self.fields.iter_mut().zip(w.to_array()) {
            f[n] = x;
        }
    }
}

impl<T: Real> FieldArray<T> {
    /// One read-only `Plane` per `k` in `ks`, in order.
    ///
    /// # Panics
    /// Panics if `ks` reaches past `nk`.
    pub fn planes(&self, ks: RangeInclusive<usize>) -> Vec<Plane<'_, T>> {
        let (k0, count) = self.plane_span(&ks);
        let plane = self.plane_len();

        let mut planes: Vec<Plane<'_, T>> =
            (0..count).map(|_| Plane { fields: Vec::with_capacity(NHYDRO) }).collect();
        for field in self.data.data.chunks_exact(self.field_len()).take(NHYDRO) {
            for (dst, chunk) in planes.iter_mut().zip(field.chunks_exact(plane).skip(k0)) {
                dst.fields.push(chunk);
            }
        }
        planes
    }

    /// One `PlaneMut` per `k` in `ks`, in order. The views are disjoint and `Send`,
    /// so they can be handed to rayon workers directly.
    ///
    /// # Panics
    /// Panics if `ks` reaches past `nk`.
    pub fn planes_mut(&mut self, ks: RangeInclusive<usize>) -> Vec<PlaneMut<'_, T>> {
        let (k0, count) = self.plane_span(&ks);
        let plane = self.plane_len();
        let field_len = self.field_len();

        let mut planes: Vec<PlaneMut<'_, T>> =
            (0..count).map(|_| PlaneMut { fields: Vec::with_capacity(NHYDRO) }).collect();
        for field in self.data.data.chunks_exact_mut(field_len).take(NHYDRO) {
            for (dst, chunk) in planes.iter_mut().zip(field.chunks_exact_mut(plane).skip(k0)) {
                dst.fields.push(chunk);
            }
        }
        planes
    }

    /// `(first k, number of planes)` of a plane range, bounds-checked.
    #[inline]
    fn plane_span(&self, ks: &RangeInclusive<usize>) -> (usize, usize) {
        let (k0, k1) = (*ks.start(), *ks.end());
        assert!(k1 < self.nk(), "plane range {k0}..={k1} out of range (nk={})", self.nk());
        (k0, if k1 >= k0 { k1 - k0 + 1 } else { 0 })
    }
}
