//! Ray and line definitions.

#[doc(inline)]
pub use self::ray::{Line, Ray};

#[doc(hidden)]
pub mod ray;
