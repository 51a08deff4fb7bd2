//! Vector and matrix primitives used by the geometry crate.

mod mat;
mod scalar;
mod space;
mod vec;

pub use mat::*;
pub use scalar::*;
pub use space::*;
pub use vec::*;
