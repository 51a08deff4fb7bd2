use std::{marker::PhantomData, ops::*};

use crate::*;

pub type NormalizedVec3<T> = NormalizedVector<T, Vec3<T>>;

/// A vector known to have unit length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct NormalizedVector<T, V> {
  pub value: V,
  phantom: PhantomData<T>,
}

pub trait IntoNormalizedVector<T, V> {
  /// the zero vector stays zero, use [IntoNormalizedVector::try_into_normalized] if the input may
  /// be degenerated.
  #[must_use]
  fn into_normalized(self) -> NormalizedVector<T, V>;

  /// return None when the vector has no direction (zero or not finite components)
  #[must_use]
  fn try_into_normalized(self) -> Option<NormalizedVector<T, V>>;

  /// # Safety
  ///
  /// caller should make sure the input is normalized
  #[must_use]
  unsafe fn into_normalized_unchecked(self) -> NormalizedVector<T, V>;
}

impl<T: Scalar, V: InnerProductSpace<T>> IntoNormalizedVector<T, V> for V {
  #[inline(always)]
  fn into_normalized(self) -> NormalizedVector<T, V> {
    unsafe { NormalizedVector::wrap(self.normalize()) }
  }

  #[inline]
  fn try_into_normalized(self) -> Option<NormalizedVector<T, V>> {
    let scale = self.max_abs_component();
    if !(scale > T::zero() && scale.is_finite()) {
      return None;
    }
    let scaled = self / scale;
    let length = scaled.length2().sqrt();
    if !length.is_finite() {
      return None;
    }
    unsafe { Some(NormalizedVector::wrap(scaled / length)) }
  }

  #[inline(always)]
  unsafe fn into_normalized_unchecked(self) -> NormalizedVector<T, V> {
    NormalizedVector::wrap(self)
  }
}

impl<T, V> NormalizedVector<T, V> {
  /// # Safety
  ///
  /// caller should make sure the input is normalized
  #[inline(always)]
  pub unsafe fn wrap(v: V) -> Self {
    Self {
      value: v,
      phantom: PhantomData,
    }
  }
}

impl<T: Scalar, V: InnerProductSpace<T>> NormalizedVector<T, V> {
  #[inline]
  pub fn length(&self) -> T {
    T::one()
  }

  #[inline]
  #[must_use]
  pub fn reverse(&self) -> Self {
    unsafe { self.value.reverse().into_normalized_unchecked() }
  }
}

pub trait InnerData<T> {
  fn get_inner(self) -> T;
}

impl<T, V> InnerData<V> for NormalizedVector<T, V> {
  #[inline(always)]
  fn get_inner(self) -> V {
    self.value
  }
}
impl<V> InnerData<V> for V {
  #[inline(always)]
  fn get_inner(self) -> V {
    self
  }
}

// after mul scalar, the vector may not be normalized
impl<T, V: VectorSpace<T>> Mul<T> for NormalizedVector<T, V> {
  type Output = V;
  #[inline(always)]
  fn mul(self, rhs: T) -> Self::Output {
    self.value * rhs
  }
}

impl<T, V> Deref for NormalizedVector<T, V> {
  type Target = V;
  #[inline(always)]
  fn deref(&self) -> &Self::Target {
    &self.value
  }
}

#[test]
fn normalize() {
  let a = Vec3::new(3., 0., 4.).into_normalized();
  assert_eq!(*a, Vec3::new(0.6, 0., 0.8));
  assert_eq!(a.reverse().value, Vec3::new(-0.6, -0., -0.8));

  assert!(Vec3::<f32>::zero().try_into_normalized().is_none());
  assert!(Vec3::new(f32::INFINITY, 0., 0.).try_into_normalized().is_none());
  assert!(Vec3::new(f32::NAN, 1., 0.).try_into_normalized().is_none());
  assert_eq!(
    Vec3::new(0., -2., 0.).try_into_normalized().map(|v| v.value),
    Some(Vec3::new(0., -1., 0.))
  );
}

#[test]
fn normalize_at_float_range_limits() {
  let large = Vec3::new(0., 2e19_f32, 0.).try_into_normalized().unwrap();
  assert_eq!(*large, Vec3::new(0., 1., 0.));

  let tiny = Vec3::new(1e-20_f32, 0., 0.).try_into_normalized().unwrap();
  assert_eq!(*tiny, Vec3::new(1., 0., 0.));

  let subnormal = Vec3::new(f32::from_bits(1), f32::from_bits(1), 0.).into_normalized();
  assert!((subnormal.value.length() - 1.).abs() < 1e-6);
}
