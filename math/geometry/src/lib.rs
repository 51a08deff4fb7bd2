//! Bounded 3D line segments and the rays derived from them.

mod dimension3;
mod error;
mod line_segment;

pub use dimension3::*;
pub use error::*;
pub use line3_algebra::*;
pub use line_segment::*;
