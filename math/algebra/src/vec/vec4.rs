use std::ops::Div;

use crate::*;

/// homogeneous coordinate, mainly the intermediate value of point transform
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Vec4<T> {
  pub x: T,
  pub y: T,
  pub z: T,
  pub w: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vec4<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vec4<T> {}

impl<T> Vec4<T> {
  #[inline(always)]
  pub const fn new(x: T, y: T, z: T, w: T) -> Self {
    Self { x, y, z, w }
  }
}

impl<T: Copy + Div<Output = T>> Vec4<T> {
  /// perspective divide
  #[inline]
  pub fn into_vec3(self) -> Vec3<T> {
    Vec3::new(self.x / self.w, self.y / self.w, self.z / self.w)
  }
}
