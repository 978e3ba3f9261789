//! Fixed-size linear algebra used by the `ct` tools: vectors, matrices and quaternions
//! with compile-time dimensions, plus the transform and projection builders built on them.
//!
//! All types are plain `Copy` values without heap allocation.
//! Matrices are stored column-major, so their raw data can be handed directly to graphics APIs.

mod numeric;
pub use numeric::*;

mod constants;
pub use constants::*;

mod common;
pub use common::*;

mod vec;
pub use vec::*;

mod mat;
pub use mat::*;

mod quat;
pub use quat::*;

mod interop;

pub mod transform;

#[cfg(test)]
mod tests;

use static_assertions::{assert_eq_size, assert_impl_all};

// Raw access hands out pointers to tightly packed scalars
assert_eq_size!(f32v2, [f32; 2]);
assert_eq_size!(f32v3, [f32; 3]);
assert_eq_size!(f32v4, [f32; 4]);
assert_eq_size!(f32m3, [f32; 9]);
assert_eq_size!(f32m4, [f32; 16]);
assert_eq_size!(Matrix<f64, 2, 3>, [f64; 6]);
assert_eq_size!(f32quat, [f32; 4]);

assert_impl_all!(f32v3: Copy, Send, Sync, Default);
assert_impl_all!(f32m4: Copy, Send, Sync, Default);
assert_impl_all!(f64quat: Copy, Send, Sync, Default);
