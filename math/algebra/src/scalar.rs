use std::fmt::Debug;

use num_traits::Float;

/// The real number type all vector and matrix types are generic over.
pub trait Scalar: Float + Debug + Default + Send + Sync + 'static {
  fn half() -> Self;
  fn two() -> Self;
}

impl Scalar for f32 {
  #[inline(always)]
  fn half() -> Self {
    0.5
  }
  #[inline(always)]
  fn two() -> Self {
    2.0
  }
}

impl Scalar for f64 {
  #[inline(always)]
  fn half() -> Self {
    0.5
  }
  #[inline(always)]
  fn two() -> Self {
    2.0
  }
}

/// Linear interpolation, `t == 0` is `self` and `t == 1` is `b`.
pub trait Lerp<T> {
  #[must_use]
  fn lerp(self, b: Self, t: T) -> Self;
}

