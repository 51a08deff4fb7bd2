use std::ops::*;

use crate::*;

mod normalized;
mod vec3;
mod vec4;

pub use normalized::*;
pub use vec3::*;
pub use vec4::*;

/// https://en.wikipedia.org/wiki/Vector_space
pub trait VectorSpace<T>:
  Add<Self, Output = Self>
  + Sub<Self, Output = Self>
  + Mul<T, Output = Self>
  + Div<T, Output = Self>
  + Sized
  + Copy
{
}

/// https://en.wikipedia.org/wiki/Inner_product
///
/// inner space define the length and angle based on vector space
pub trait InnerProductSpace<T: Scalar>: VectorSpace<T> {
  fn dot_impl(&self, b: Self) -> T;

  /// the largest absolute component, used to keep length computation in range
  fn max_abs_component(&self) -> T;

  #[inline]
  fn dot<Rhs: InnerData<Self>>(&self, b: Rhs) -> T {
    self.dot_impl(b.get_inner())
  }

  #[inline]
  fn length2(&self) -> T {
    self.dot_impl(*self)
  }

  /// the squared length is computed on the vector scaled by its largest component, so the
  /// result does not overflow or lose precision where length2 would
  #[inline]
  fn length(&self) -> T {
    let scale = self.max_abs_component();
    if scale == T::zero() || !scale.is_finite() {
      return self.length2().sqrt();
    }
    (*self / scale).length2().sqrt() * scale
  }

  #[inline]
  fn distance2<Rhs: InnerData<Self>>(&self, b: Rhs) -> T {
    (*self - b.get_inner()).length2()
  }

  #[inline]
  fn distance<Rhs: InnerData<Self>>(&self, b: Rhs) -> T {
    (*self - b.get_inner()).length()
  }

  /// the zero vector has no direction and is returned unchanged
  #[inline]
  #[must_use]
  fn normalize(&self) -> Self {
    let scale = self.max_abs_component();
    if scale > T::zero() && scale.is_finite() {
      let scaled = *self / scale;
      return scaled / scaled.length2().sqrt();
    }
    *self
  }

  #[inline]
  #[must_use]
  fn reverse(&self) -> Self {
    *self * -T::one()
  }
}
