// src/eos/floors.rs
//! Positivity floors and the bookkeeping of how often they fire.
//!
//! Every floor-applying path in the EOS goes through `Floors::density` and
//! `Floors::pressure_with_energy`, so the conserved-to-primitive sweep and the
//! single-cell repairs can never disagree on what a floor does.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::math::scalar::Real;

/// The three floors of an equation of state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Floors<T: Real> {
    pub density: T,
    pub pressure: T,
    pub scalar: T,
}

impl<T: Real> Default for Floors<T> {
    fn default() -> Self {
        let f = T::floor_default();
        Self { density: f, pressure: f, scalar: f }
    }
}

impl<T: Real> Floors<T> {
    /// Floors with each missing value replaced by `T::floor_default()`.
    pub fn new(density: Option<T>, pressure: Option<T>, scalar: Option<T>) -> Self {
        let f = T::floor_default();
        Self {
            density: density.unwrap_or(f),
            pressure: pressure.unwrap_or(f),
            scalar: scalar.unwrap_or(f),
        }
    }

    /// `max(d, density_floor)`; the flag is set when the floor value was taken.
    /// Momentum and energy are never touched by this rule.
    #[inline(always)]
    pub fn density(&self, d: T) -> (T, bool) {
        if d > self.density { (d, false) } else { (self.density, true) }
    }

    /// Pressure floor with total-energy correction.
    ///
    /// Above the floor `(p, e)` pass through. Otherwise the pressure becomes the floor
    /// and the energy is rebuilt as `pressure_floor / (γ−1) + e_k`, so the returned pair
    /// still satisfies `p = (γ−1)(E − e_k)`.
    #[inline(always)]
    pub fn pressure_with_energy(&self, p: T, e: T, e_k: T, gm1: T) -> (T, T, bool) {
        if p > self.pressure {
            (p, e, false)
        } else {
            (self.pressure, self.pressure / gm1 + e_k, true)
        }
    }

    /// `max(p, pressure_floor)` without any energy bookkeeping.
    #[inline(always)]
    pub fn pressure(&self, p: T) -> (T, bool) {
        if p > self.pressure { (p, false) } else { (self.pressure, true) }
    }

    #[inline(always)]
    pub fn scalar(&self, s: T) -> T {
        if s > self.scalar { s } else { self.scalar }
    }
}

// ======================================================================================
// ----------------------------------- FloorReport --------------------------------------
// ======================================================================================

/// Counts of floor repairs made by one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FloorReport {
    /// Cells visited.
    pub cells: usize,
    /// Cells whose density was raised to the density floor.
    pub density_floors: usize,
    /// Cells whose pressure was raised to the pressure floor (and energy rewritten).
    pub pressure_floors: usize,
}

impl FloorReport {
    /// Report for one visited cell.
    #[inline(always)]
    pub fn cell(density_floored: bool, pressure_floored: bool) -> Self {
        Self {
            cells: 1,
            density_floors: density_floored as usize,
            pressure_floors: pressure_floored as usize,
        }
    }

    /// True iff no floor fired.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.density_floors == 0 && self.pressure_floors == 0
    }
}

impl Add for FloorReport {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            cells: self.cells + rhs.cells,
            density_floors: self.density_floors + rhs.density_floors,
            pressure_floors: self.pressure_floors + rhs.pressure_floors,
        }
    }
}

impl AddAssign for FloorReport {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
