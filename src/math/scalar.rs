// src/math/scalar.rs
//! A single minimal `Real` trait for the floating-point working precision.
//!
//! Design goals:
//! - One public trait (`Real`) you can bound on everywhere in the hydro code.
//! - Works for `f32` and `f64` only (the EOS divides, takes square roots and
//!   compares against floors, so integers and complex numbers are excluded).
//! - Parallel-safe (`Send + Sync`) so arrays of `Real` can be swept with rayon.
//!
//! Conventions:
//! - `lit(x)` converts an `f64` literal into the working precision.
//! - `floor_default()` is `sqrt(1024 * f32::MIN_POSITIVE)` in the working precision,
//!   the same value for both precisions.

use core::fmt::{Debug, Display};
use core::iter::{Product, Sum};
use num_traits::{Float, NumCast};

// ==============================================================================
// ------------------- Sealing: keep impl surface controlled --------------------
// ==============================================================================

mod sealed {
    pub trait Sealed {}
    macro_rules! impl_sealed_for {
        ($($t:ty),* $(,)?) => { $(impl Sealed for $t {})* };
    }
    impl_sealed_for!(f32, f64);
}
use sealed::Sealed;


// ==============================================================================
// --------------------------------- Trait Def ----------------------------------
// ==============================================================================

/// The floating-point scalar the hydro arrays are made of.
pub trait Real:
    Float
    + NumCast
    + Copy
    + Default
    + Send
    + Sync
    + 'static
    + Debug
    + Display
    + Sum<Self>
    + Product<Self>
    + Sealed
{
    /// Smallest positive normal `f32`, the reference for the default floors.
    const FLOAT_MIN: f64 = f32::MIN_POSITIVE as f64;

    /// Convert an `f64` constant into the working precision.
    fn lit(x: f64) -> Self;

    /// `0.5` in the working precision.
    #[inline]
    fn half() -> Self { Self::lit(0.5) }

    /// Default density/pressure/scalar floor: `sqrt(1024 * FLOAT_MIN)`.
    #[inline]
    fn floor_default() -> Self { Self::lit((1024.0 * Self::FLOAT_MIN).sqrt()) }
}

impl Real for f32 {
    #[inline] fn lit(x: f64) -> Self { x as f32 }
}

impl Real for f64 {
    #[inline] fn lit(x: f64) -> Self { x }
}
