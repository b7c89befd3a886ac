//! Adiabatic ideal-gas **equation of state** for finite-volume hydrodynamics.
//!
//! Converts between the conserved state `(ρ, m, E)` and the primitive state
//! `(ρ, v, p)` of every cell in a caller-owned block array, and enforces the density
//! and pressure floors that keep both states physical and consistent.
//!
//! Layout:
//! - `math`: the `Real` scalar trait and the dense row-major `Tensor`.
//! - `field`: named hydro variables, per-cell records and the SoA `FieldArray`.
//! - `space`: inclusive 3-D `IndexRange`s over a block.
//! - `eos`: the `Eos` trait, the adiabatic `EquationOfState`, floors and configuration.

pub mod eos;
pub mod error;
pub mod field;
pub mod math;
pub mod space;

#[cfg(test)]
mod tests;

pub use eos::adiabatic::EquationOfState;
pub use eos::config::EosConfig;
pub use eos::floors::{FloorReport, Floors};
pub use eos::Eos;
pub use error::{EosError, Result};
pub use field::field_array::FieldArray;
pub use field::variables::{ConsVar, Conserved, PrimVar, Primitive, NHYDRO};
pub use math::scalar::Real;
pub use space::index_range::IndexRange;
