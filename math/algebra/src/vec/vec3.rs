use std::ops::*;

use crate::*;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, Hash, Eq, PartialEq)]
pub struct Vec3<T> {
  pub x: T,
  pub y: T,
  pub z: T,
}

pub fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
  Vec3::new(x, y, z)
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vec3<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vec3<T> {}

impl<T> Vec3<T> {
  #[inline(always)]
  pub const fn new(x: T, y: T, z: T) -> Self {
    Self { x, y, z }
  }
}

impl<T: Scalar> Vec3<T> {
  #[inline]
  pub fn zero() -> Self {
    Self::splat(T::zero())
  }

  #[inline]
  pub fn splat(v: T) -> Self {
    Self::new(v, v, v)
  }

  #[inline]
  pub fn cross(&self, b: Self) -> Self {
    Self {
      x: self.y * b.z - self.z * b.y,
      y: self.z * b.x - self.x * b.z,
      z: self.x * b.y - self.y * b.x,
    }
  }

  #[inline]
  pub fn expand_with_one(self) -> Vec4<T> {
    Vec4::new(self.x, self.y, self.z, T::one())
  }

  /// input: Matrix4 affine matrix
  ///
  /// vector interpreted as a direction, translation is ignored and the result is not normalized
  #[inline]
  pub fn transform_direction(&self, m: Mat4<T>) -> Self {
    Self {
      x: m.a1 * self.x + m.b1 * self.y + m.c1 * self.z,
      y: m.a2 * self.x + m.b2 * self.y + m.c2 * self.z,
      z: m.a3 * self.x + m.b3 * self.y + m.c3 * self.z,
    }
  }

  #[inline]
  pub fn is_finite(&self) -> bool {
    self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
  }
}

impl<T: Scalar> VectorSpace<T> for Vec3<T> {}
impl<T: Scalar> InnerProductSpace<T> for Vec3<T> {
  #[inline]
  fn dot_impl(&self, b: Self) -> T {
    self.x * b.x + self.y * b.y + self.z * b.z
  }

  #[inline]
  fn max_abs_component(&self) -> T {
    self.x.abs().max(self.y.abs()).max(self.z.abs())
  }
}

impl<T: Scalar> Lerp<T> for Vec3<T> {
  #[inline(always)]
  fn lerp(self, b: Self, t: T) -> Self {
    self * (T::one() - t) + b * t
  }
}

impl<T: Scalar> SpaceEntity<T> for Vec3<T> {
  /// point semantic, the homogeneous w is divided out
  #[inline(always)]
  fn apply_matrix(&mut self, m: Mat4<T>) -> &mut Self {
    *self = m * *self;
    self
  }
}

impl<T: Neg<Output = T>> Neg for Vec3<T> {
  type Output = Self;
  #[inline]
  fn neg(self) -> Self {
    Self::new(-self.x, -self.y, -self.z)
  }
}

impl<T: Add<Output = T>> Add for Vec3<T> {
  type Output = Self;
  #[inline]
  fn add(self, b: Self) -> Self {
    Self::new(self.x + b.x, self.y + b.y, self.z + b.z)
  }
}

impl<T: Sub<Output = T>> Sub for Vec3<T> {
  type Output = Self;
  #[inline]
  fn sub(self, b: Self) -> Self {
    Self::new(self.x - b.x, self.y - b.y, self.z - b.z)
  }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Vec3<T> {
  type Output = Self;
  #[inline]
  fn mul(self, s: T) -> Self {
    Self::new(self.x * s, self.y * s, self.z * s)
  }
}

impl<T: Div<Output = T> + Copy> Div<T> for Vec3<T> {
  type Output = Self;
  #[inline]
  fn div(self, s: T) -> Self {
    Self::new(self.x / s, self.y / s, self.z / s)
  }
}

impl<T: AddAssign> AddAssign for Vec3<T> {
  #[inline]
  fn add_assign(&mut self, b: Self) {
    self.x += b.x;
    self.y += b.y;
    self.z += b.z;
  }
}

impl<T: SubAssign> SubAssign for Vec3<T> {
  #[inline]
  fn sub_assign(&mut self, b: Self) {
    self.x -= b.x;
    self.y -= b.y;
    self.z -= b.z;
  }
}

impl<T: MulAssign + Copy> MulAssign<T> for Vec3<T> {
  #[inline]
  fn mul_assign(&mut self, s: T) {
    self.x *= s;
    self.y *= s;
    self.z *= s;
  }
}

impl<T> From<(T, T, T)> for Vec3<T> {
  #[inline(always)]
  fn from(v: (T, T, T)) -> Self {
    Self::new(v.0, v.1, v.2)
  }
}

impl<T: Copy> From<[T; 3]> for Vec3<T> {
  #[inline(always)]
  fn from(v: [T; 3]) -> Self {
    Self::new(v[0], v[1], v[2])
  }
}

impl<T> From<Vec3<T>> for [T; 3] {
  #[inline(always)]
  fn from(v: Vec3<T>) -> Self {
    [v.x, v.y, v.z]
  }
}

#[test]
fn ops() {
  let a = Vec3::new(1., 1., 1.);
  let b = Vec3::new(4., 5., 1.);
  assert_eq!(b - a, Vec3::new(3., 4., 0.));
  assert_eq!((a + b) * 0.5, Vec3::new(2.5, 3., 1.));
  assert_eq!((b - a).length(), 5.);
  assert_eq!((b - a).length2(), 25.);
  assert_eq!(a.distance(b), 5.);
  assert_eq!(a.dot(b), 10.);

  let x = Vec3::new(1., 0., 0.);
  let y = Vec3::new(0., 1., 0.);
  assert_eq!(x.cross(y), Vec3::new(0., 0., 1.));
  assert_eq!(Vec3::<f32>::zero().normalize(), Vec3::zero());
  assert_eq!(a.lerp(b, 0.5), Vec3::new(2.5, 3., 1.));
}

#[test]
fn length_without_overflow() {
  let v = Vec3::new(3e19_f32, 4e19, 0.);
  assert!(v.length2().is_infinite());
  assert!((v.length() / 5e19 - 1.).abs() < 1e-6);

  let v = Vec3::new(3e-30_f32, 0., 4e-30);
  assert_eq!(v.length2(), 0.);
  assert!((v.length() / 5e-30 - 1.).abs() < 1e-6);

  assert_eq!(Vec3::<f32>::zero().length(), 0.);
  assert!(Vec3::new(f32::INFINITY, 0., 0.).length().is_infinite());
}
