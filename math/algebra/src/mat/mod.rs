mod mat4;
pub use mat4::*;
