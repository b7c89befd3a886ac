// src/space/index_range.rs
/*!
Inclusive **3-D index ranges** over a mesh block.

Sweeps in the EOS visit every cell `(k, j, i)` with `kl <= k <= ku`, `jl <= j <= ju`,
`il <= i <= iu`. Bounds are inclusive on both ends, so a single cell is
`IndexRange::cell(k, j, i)` and the constructors never build an empty range; callers
that have nothing to do simply do not call. A deserialized range with `l > u` on an axis
visits no cells.

- `IndexRange::new(il, iu, jl, ju, kl, ku)`: explicit bounds (panics if any `l > u`).
- `IndexRange::full(&array)`: every cell of a block, ghosts included.
- `IndexRange::interior(&array, ng)`: strip `ng` ghost cells from each active axis.
*/

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::field::field_array::FieldArray;
use crate::math::scalar::Real;

/// Inclusive cell range `[il,iu] × [jl,ju] × [kl,ku]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexRange {
    il: usize,
    iu: usize,
    jl: usize,
    ju: usize,
    kl: usize,
    ku: usize,
}

impl IndexRange {
    /// Create a range. Panics if a lower bound exceeds its upper bound.
    #[inline]
    pub fn new(il: usize, iu: usize, jl: usize, ju: usize, kl: usize, ku: usize) -> Self {
        assert!(
            il <= iu && jl <= ju && kl <= ku,
            "IndexRange requires l <= u on every axis; got i={il}..={iu}, j={jl}..={ju}, k={kl}..={ku}"
        );
        Self { il, iu, jl, ju, kl, ku }
    }

    /// The single cell `(k, j, i)`.
    #[inline]
    pub fn cell(k: usize, j: usize, i: usize) -> Self {
        Self::new(i, i, j, j, k, k)
    }

    /// Every cell of `array`.
    #[inline]
    pub fn full<T: Real>(array: &FieldArray<T>) -> Self {
        let [nk, nj, ni] = array.extents();
        Self::new(0, ni - 1, 0, nj - 1, 0, nk - 1)
    }

    /// Cells of `array` with `ng` ghost cells removed on each side of every axis
    /// longer than one cell (collapsed axes of 1-D/2-D blocks carry no ghosts).
    ///
    /// # Panics
    /// Panics if an active axis has no interior cell left.
    pub fn interior<T: Real>(array: &FieldArray<T>, ng: usize) -> Self {
        let strip = |n: usize| -> (usize, usize) {
            if n == 1 {
                (0, 0)
            } else {
                assert!(n > 2 * ng, "axis of {n} cells has no interior with {ng} ghosts");
                (ng, n - ng - 1)
            }
        };
        let [nk, nj, ni] = array.extents();
        let (il, iu) = strip(ni);
        let (jl, ju) = strip(nj);
        let (kl, ku) = strip(nk);
        Self::new(il, iu, jl, ju, kl, ku)
    }

    #[inline] pub fn il(&self) -> usize { self.il }
    #[inline] pub fn iu(&self) -> usize { self.iu }
    #[inline] pub fn jl(&self) -> usize { self.jl }
    #[inline] pub fn ju(&self) -> usize { self.ju }
    #[inline] pub fn kl(&self) -> usize { self.kl }
    #[inline] pub fn ku(&self) -> usize { self.ku }

    #[inline] pub fn i_range(&self) -> RangeInclusive<usize> { self.il..=self.iu }
    #[inline] pub fn j_range(&self) -> RangeInclusive<usize> { self.jl..=self.ju }
    #[inline] pub fn k_range(&self) -> RangeInclusive<usize> { self.kl..=self.ku }

    /// Number of cells visited.
    #[inline]
    pub fn num_cells(&self) -> usize {
        let span = |l: usize, u: usize| (u + 1).saturating_sub(l);
        span(self.il, self.iu) * span(self.jl, self.ju) * span(self.kl, self.ku)
    }

    #[inline]
    pub fn contains(&self, k: usize, j: usize, i: usize) -> bool {
        self.k_range().contains(&k) && self.j_range().contains(&j) && self.i_range().contains(&i)
    }

    /// True iff the range lies inside `array`.
    #[inline]
    pub fn fits<T: Real>(&self, array: &FieldArray<T>) -> bool {
        let [nk, nj, ni] = array.extents();
        self.iu < ni && self.ju < nj && self.ku < nk
    }
}
