use std::ops::{Add, Div, Mul};

use crate::*;

/// column major 4x4 matrix, `a*` is the first column and `d*` holds the translation
#[repr(C)]
#[rustfmt::skip]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Mat4<T> {
  pub a1: T, pub a2: T, pub a3: T, pub a4: T,
  pub b1: T, pub b2: T, pub b3: T, pub b4: T,
  pub c1: T, pub c2: T, pub c3: T, pub c4: T,
  pub d1: T, pub d2: T, pub d3: T, pub d4: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Mat4<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Mat4<T> {}

impl<T> Mat4<T> {
  #[rustfmt::skip]
  #[allow(clippy::too_many_arguments)]
  pub const fn new(
    m11: T, m12: T, m13: T, m14: T,
    m21: T, m22: T, m23: T, m24: T,
    m31: T, m32: T, m33: T, m34: T,
    m41: T, m42: T, m43: T, m44: T,
  ) -> Self {
    Self {
      a1: m11, a2: m12, a3: m13, a4: m14,
      b1: m21, b2: m22, b3: m23, b4: m24,
      c1: m31, c2: m32, c3: m33, c4: m34,
      d1: m41, d2: m42, d3: m43, d4: m44,
    }
  }
}

impl<T: Scalar> Mat4<T> {
  #[rustfmt::skip]
  pub fn identity() -> Self {
    let (o, l) = (T::zero(), T::one());
    Self::new(
      l, o, o, o,
      o, l, o, o,
      o, o, l, o,
      o, o, o, l,
    )
  }

  #[rustfmt::skip]
  pub fn translate(v: impl Into<Vec3<T>>) -> Self {
    let v = v.into();
    let (o, l) = (T::zero(), T::one());
    Self::new(
      l,   o,   o,   o,
      o,   l,   o,   o,
      o,   o,   l,   o,
      v.x, v.y, v.z, l,
    )
  }

  #[rustfmt::skip]
  pub fn scale(v: impl Into<Vec3<T>>) -> Self {
    let v = v.into();
    let (o, l) = (T::zero(), T::one());
    Self::new(
      v.x, o,   o,   o,
      o,   v.y, o,   o,
      o,   o,   v.z, o,
      o,   o,   o,   l,
    )
  }

  #[rustfmt::skip]
  pub fn rotate_x(theta: T) -> Self {
    let (s, c) = theta.sin_cos();
    let (o, l) = (T::zero(), T::one());
    Self::new(
      l, o,  o, o,
      o, c,  s, o,
      o, -s, c, o,
      o, o,  o, l,
    )
  }

  #[rustfmt::skip]
  pub fn rotate_y(theta: T) -> Self {
    let (s, c) = theta.sin_cos();
    let (o, l) = (T::zero(), T::one());
    Self::new(
      c, o, -s, o,
      o, l, o,  o,
      s, o, c,  o,
      o, o, o,  l,
    )
  }

  #[rustfmt::skip]
  pub fn rotate_z(theta: T) -> Self {
    let (s, c) = theta.sin_cos();
    let (o, l) = (T::zero(), T::one());
    Self::new(
      c,  s, o, o,
      -s, c, o, o,
      o,  o, l, o,
      o,  o, o, l,
    )
  }

  #[inline]
  fn column(&self, i: usize) -> Vec4<T> {
    match i {
      0 => Vec4::new(self.a1, self.a2, self.a3, self.a4),
      1 => Vec4::new(self.b1, self.b2, self.b3, self.b4),
      2 => Vec4::new(self.c1, self.c2, self.c3, self.c4),
      _ => Vec4::new(self.d1, self.d2, self.d3, self.d4),
    }
  }

  #[inline]
  #[rustfmt::skip]
  fn from_columns(a: Vec4<T>, b: Vec4<T>, c: Vec4<T>, d: Vec4<T>) -> Self {
    Self::new(
      a.x, a.y, a.z, a.w,
      b.x, b.y, b.z, b.w,
      c.x, c.y, c.z, c.w,
      d.x, d.y, d.z, d.w,
    )
  }
}

impl<T> Mul<Vec4<T>> for Mat4<T>
where
  T: Copy + Add<Output = T> + Mul<Output = T>,
{
  type Output = Vec4<T>;

  fn mul(self, v: Vec4<T>) -> Vec4<T> {
    Vec4 {
      x: v.x * self.a1 + v.y * self.b1 + v.z * self.c1 + v.w * self.d1,
      y: v.x * self.a2 + v.y * self.b2 + v.z * self.c2 + v.w * self.d2,
      z: v.x * self.a3 + v.y * self.b3 + v.z * self.c3 + v.w * self.d3,
      w: v.x * self.a4 + v.y * self.b4 + v.z * self.c4 + v.w * self.d4,
    }
  }
}

/// point transform, the result is divided by the homogeneous w
impl<T> Mul<Vec3<T>> for Mat4<T>
where
  T: Copy + Add<Output = T> + Mul<Output = T> + Div<Output = T> + num_traits::One,
{
  type Output = Vec3<T>;

  fn mul(self, v: Vec3<T>) -> Vec3<T> {
    (self * Vec4::new(v.x, v.y, v.z, T::one())).into_vec3()
  }
}

impl<T: Scalar> Mul for Mat4<T> {
  type Output = Self;

  fn mul(self, m: Self) -> Self {
    Self::from_columns(
      self * m.column(0),
      self * m.column(1),
      self * m.column(2),
      self * m.column(3),
    )
  }
}

impl<T: Copy> From<Mat4<T>> for [T; 16] {
  #[rustfmt::skip]
  fn from(m: Mat4<T>) -> Self {
    [
      m.a1, m.a2, m.a3, m.a4,
      m.b1, m.b2, m.b3, m.b4,
      m.c1, m.c2, m.c3, m.c4,
      m.d1, m.d2, m.d3, m.d4,
    ]
  }
}

#[cfg(test)]
fn assert_close(a: [f32; 3], b: [f32; 3]) {
  for (a, b) in a.iter().zip(b.iter()) {
    assert!((a - b).abs() < 1e-5, "{a:?} != {b:?}");
  }
}

#[test]
fn mul() {
  use cgmath::Transform;

  let cgmath_mat = cgmath::Matrix4::<f32>::from_translation(cgmath::vec3(1., 2., 3.))
    * cgmath::Matrix4::from_angle_z(cgmath::Rad(0.7))
    * cgmath::Matrix4::from_angle_x(cgmath::Rad(-1.3))
    * cgmath::Matrix4::from_nonuniform_scale(3., -2., 0.5);
  let cgmath_r = cgmath_mat.transform_point(cgmath::point3(1., 2., 3.));
  let cgmath_r: [f32; 3] = *cgmath_r.as_ref();

  let mat = Mat4::<f32>::translate((1., 2., 3.))
    * Mat4::rotate_z(0.7)
    * Mat4::rotate_x(-1.3)
    * Mat4::scale((3., -2., 0.5));
  let r: [f32; 3] = (mat * Vec3::new(1., 2., 3.)).into();

  assert_close(cgmath_r, r);
}

#[test]
fn rotate_y() {
  let cgmath_mat = cgmath::Matrix4::<f32>::from_angle_y(cgmath::Rad(2.1));
  let cgmath_m: [f32; 16] = *cgmath_mat.as_ref();
  let m: [f32; 16] = Mat4::<f32>::rotate_y(2.1).into();
  assert_eq!(cgmath_m, m);
}

#[test]
fn homogeneous_divide() {
  let mut m = Mat4::<f32>::identity();
  m.d4 = 2.;
  let p = m * Vec3::new(2., 4., 6.);
  assert_eq!(p, Vec3::new(1., 2., 3.));
  assert_eq!(Mat4::<f32>::identity() * Vec3::new(2., 4., 6.), Vec3::new(2., 4., 6.));
}
