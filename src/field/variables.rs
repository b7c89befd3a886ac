// src/field/variables.rs
//! Named hydro variables.
//!
//! Field arrays are indexed `(field, k, j, i)`. The field axis follows a fixed order
//! shared with the rest of the solver:
//!
//! | index | conserved      | primitive      |
//! |-------|----------------|----------------|
//! | 0     | `Density`      | `Density`      |
//! | 1     | `Momentum1`    | `Velocity1`    |
//! | 2     | `Momentum2`    | `Velocity2`    |
//! | 3     | `Momentum3`    | `Velocity3`    |
//! | 4     | `Energy`       | `Pressure`     |
//!
//! Per-cell values travel as the `Conserved` / `Primitive` records so kernels
//! name the quantity they touch instead of an offset.

use serde::{Deserialize, Serialize};

use crate::math::scalar::Real;

/// Number of hydro variables per cell.
pub const NHYDRO: usize = 5;

/// Field index of a conserved variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(usize)]
pub enum ConsVar {
    Density = 0,
    Momentum1 = 1,
    Momentum2 = 2,
    Momentum3 = 3,
    Energy = 4,
}

/// Field index of a primitive variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(usize)]
pub enum PrimVar {
    Density = 0,
    Velocity1 = 1,
    Velocity2 = 2,
    Velocity3 = 3,
    Pressure = 4,
}

impl ConsVar {
    pub const ALL: [ConsVar; NHYDRO] = [
        ConsVar::Density,
        ConsVar::Momentum1,
        ConsVar::Momentum2,
        ConsVar::Momentum3,
        ConsVar::Energy,
    ];

    pub const MOMENTUM: [ConsVar; 3] = [ConsVar::Momentum1, ConsVar::Momentum2, ConsVar::Momentum3];

    #[inline(always)]
    pub const fn idx(self) -> usize { self as usize }
}

impl PrimVar {
    pub const ALL: [PrimVar; NHYDRO] = [
        PrimVar::Density,
        PrimVar::Velocity1,
        PrimVar::Velocity2,
        PrimVar::Velocity3,
        PrimVar::Pressure,
    ];

    pub const VELOCITY: [PrimVar; 3] = [PrimVar::Velocity1, PrimVar::Velocity2, PrimVar::Velocity3];

    #[inline(always)]
    pub const fn idx(self) -> usize { self as usize }
}

// ======================================================================================
// ------------------------------------ Records -----------------------------------------
// ======================================================================================

/// Conserved state of one cell: `(ρ, m₁, m₂, m₃, E)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Conserved<T: Real> {
    pub density: T,
    pub momentum: [T; 3],
    pub energy: T,
}

/// Primitive state of one cell: `(ρ, v₁, v₂, v₃, p)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Primitive<T: Real> {
    pub density: T,
    pub velocity: [T; 3],
    pub pressure: T,
}

impl<T: Real> Conserved<T> {
    #[inline]
    pub fn new(density: T, momentum: [T; 3], energy: T) -> Self {
        Self { density, momentum, energy }
    }

    /// `|m|²`
    #[inline(always)]
    pub fn momentum_sqr(&self) -> T {
        let [m1, m2, m3] = self.momentum;
        m1 * m1 + m2 * m2 + m3 * m3
    }

    /// Field-ordered values, `[ρ, m₁, m₂, m₃, E]`.
    #[inline]
    pub fn to_array(self) -> [T; NHYDRO] {
        let [m1, m2, m3] = self.momentum;
        [self.density, m1, m2, m3, self.energy]
    }

    #[inline]
    pub fn from_array(u: [T; NHYDRO]) -> Self {
        Self {
            density: u[ConsVar::Density.idx()],
            momentum: ConsVar::MOMENTUM.map(|v| u[v.idx()]),
            energy: u[ConsVar::Energy.idx()],
        }
    }
}

impl<T: Real> Primitive<T> {
    #[inline]
    pub fn new(density: T, velocity: [T; 3], pressure: T) -> Self {
        Self { density, velocity, pressure }
    }

    /// `|v|²`
    #[inline(always)]
    pub fn velocity_sqr(&self) -> T {
        let [v1, v2, v3] = self.velocity;
        v1 * v1 + v2 * v2 + v3 * v3
    }

    /// Kinetic energy density `½ρ|v|²`.
    #[inline(always)]
    pub fn kinetic_energy(&self) -> T {
        T::half() * self.density * self.velocity_sqr()
    }

    /// Field-ordered values, `[ρ, v₁, v₂, v₃, p]`.
    #[inline]
    pub fn to_array(self) -> [T; NHYDRO] {
        let [v1, v2, v3] = self.velocity;
        [self.density, v1, v2, v3, self.pressure]
    }

    #[inline]
    pub fn from_array(w: [T; NHYDRO]) -> Self {
        Self {
            density: w[PrimVar::Density.idx()],
            velocity: PrimVar::VELOCITY.map(|v| w[v.idx()]),
            pressure: w[PrimVar::Pressure.idx()],
        }
    }
}
