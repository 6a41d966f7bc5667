//! Exact fractions over `i64` with checked arithmetic and a Stern–Brocot
//! approximation of floating point values.
//!
//! # Examples
//!
//! ```
//! use ratio::Fraction;
//!
//! let a = Fraction::new(5, 11)?;
//! let b = Fraction::new(7, 3)?;
//! assert_eq!(a.checked_mul(b)?, Fraction::new(35, 33)?);
//! assert_eq!(a.checked_div(b)?, Fraction::new(15, 77)?);
//!
//! let f = Fraction::approximate(5.125, 1e-15)?;
//! assert_eq!(f.into_parts(), (41, 8));
//! # Ok::<_, ratio::Error>(())
//! ```
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;


mod error;
pub use self::error::Error;

mod math;
pub use self::math::{gcd, lcm};

mod fraction;
pub use self::fraction::Fraction;

mod ops;

mod approx;
pub use self::approx::{Approximator, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};

mod parse;
pub use self::parse::parse;

mod fmt;

#[cfg(feature = "serde")]
mod serde_impl;
