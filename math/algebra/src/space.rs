use crate::{Mat4, Scalar};

/// Something living in 3D space that can be moved by a transform matrix.
pub trait SpaceEntity<T: Scalar> {
  fn apply_matrix(&mut self, mat: Mat4<T>) -> &mut Self;
}
