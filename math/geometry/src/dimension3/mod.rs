mod line_segment;
mod ray3;

pub use line_segment::*;
pub use ray3::*;
