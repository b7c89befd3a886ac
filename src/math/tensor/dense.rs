// src/math/tensor/dense.rs
/*!
A **general-purpose N-dimensional dense tensor** backed by a flat `Vec<T>`.

Goals:
- **Performance-first**: contiguous memory layout with cache-friendly linear indexing.
- **Strictness**: multi-index access is bounds-checked; an out-of-range index is a
  caller bug and panics rather than wrapping.
- **Parallelism**: `rayon`-powered in-place fill and map.

# Highlights

- `Tensor<T>::new(shape)`: zero-initialized tensor of shape `shape`.
- `Tensor<T>::from_vec(shape, data)`: wrap existing storage (length must match).
- `index`, `get`, `get_mut`, `set`: row-major multi-index access.
- `par_fill`, `par_map_in_place`: parallel in-place transforms.

> **Semantics**
> - Row-major (C-style): the last axis varies fastest.
> - `index()` panics on rank mismatch or on any axis index `>= shape[axis]`.
*/

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::super::scalar::Real;

//===================================================================
// -------------------------- Basic Struct --------------------------
//===================================================================

/// A dense N-D tensor with row-major (C-style) linearization.
///
/// # Invariants
/// - `data.len() == shape.iter().product()`.
/// - every entry of `shape` is `> 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tensor<T: Real> {
    /// The extents along each axis. Example: `[nvar, nk, nj, ni]` for a field array.
    pub shape: Vec<usize>,
    /// Flat, row-major storage of all elements.
    pub data: Vec<T>,
}

impl<T: Real> Tensor<T> {
    /// Create a new tensor with the given `shape`, filled with `T::default()`.
    ///
    /// # Panics
    /// Panics if `shape` is empty or contains a zero dimension.
    #[inline]
    pub fn new(shape: Vec<usize>) -> Self {
        assert!(!shape.is_empty(), "Tensor rank must be > 0");
        assert!(
            shape.iter().all(|&d| d > 0),
            "All dimensions must be > 0; got {shape:?}"
        );
        let size = shape.iter().product::<usize>();
        Self {
            shape,
            data: vec![T::default(); size],
        }
    }

    /// Wrap existing row-major storage.
    ///
    /// # Panics
    /// Panics if `data.len()` differs from the product of `shape`.
    #[inline]
    pub fn from_vec(shape: Vec<usize>, data: Vec<T>) -> Self {
        assert!(!shape.is_empty(), "Tensor rank must be > 0");
        assert!(
            shape.iter().all(|&d| d > 0),
            "All dimensions must be > 0; got {shape:?}"
        );
        let size = shape.iter().product::<usize>();
        assert_eq!(
            data.len(),
            size,
            "data length {} does not match shape {shape:?}",
            data.len()
        );
        Self { shape, data }
    }

    /// Number of elements (a.k.a. linear size).
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True iff there are zero elements (never true given our shape assertion).
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }
}

//===================================================================
// ------------------------ Indexing & Access -----------------------
//===================================================================

impl<T: Real> Tensor<T> {
    /// Row-major flat index of `indices`.
    ///
    /// # Panics
    /// Panics on rank mismatch or if any axis index is out of range.
    #[inline(always)]
    pub fn index(&self, indices: &[usize]) -> usize {
        assert_eq!(indices.len(), self.shape.len(), "Index rank mismatch");

        let mut flat = 0usize;
        for (axis, (&dim, &a)) in self.shape.iter().zip(indices.iter()).enumerate() {
            assert!(a < dim, "index {a} out of range on axis {axis} (dim={dim})");
            flat = flat * dim + a;
        }
        flat
    }

    /// Get by multi-index (copy).
    #[inline(always)]
    pub fn get(&self, indices: &[usize]) -> T {
        self.data[self.index(indices)]
    }

    /// Mutable reference by multi-index.
    #[inline(always)]
    pub fn get_mut(&mut self, indices: &[usize]) -> &mut T {
        let k = self.index(indices);
        &mut self.data[k]
    }

    /// Set value at multi-index.
    #[inline(always)]
    pub fn set(&mut self, indices: &[usize], val: T) {
        let k = self.index(indices);
        self.data[k] = val;
    }
}

//===================================================================
// -------------------------- Parallel Ops --------------------------
//===================================================================

impl<T: Real> Tensor<T> {
    /// Parallel fill with a constant value.
    #[inline]
    pub fn par_fill(&mut self, value: T) {
        self.data.par_iter_mut().for_each(|x| *x = value);
    }

    /// Parallel in-place map with a pure function.
    #[inline]
    pub fn par_map_in_place<F>(&mut self, f: F)
    where
        F: Fn(T) -> T + Sync + Send,
    {
        self.data.par_iter_mut().for_each(|x| *x = f(*x));
    }
}

//===================================================================
// --------------------------- Extra Notes --------------------------
//===================================================================
//
// • Complexity:
//   - `index()`: O(rank), very small constant factors.
//   - Hot loops should not go through `index()`; take contiguous slices of
//     `data` instead (see `FieldArray::planes_mut`).
//
// • Safety:
//   - No unsafe code. Every access is bounds-checked by `index()` or slice indexing.
