use crate::*;

/// A bounded line between two endpoints. `start == end` is a legal value.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct LineSegment<V> {
  pub start: V,
  pub end: V,
}

unsafe impl<V: bytemuck::Zeroable> bytemuck::Zeroable for LineSegment<V> {}
unsafe impl<V: bytemuck::Pod> bytemuck::Pod for LineSegment<V> {}

/// A parametric curve between two endpoints, sampled in [0, 1].
pub trait SpaceLineSegment<T, V> {
  fn start(&self) -> V;
  fn end(&self) -> V;
  fn sample(&self, t: T) -> V;
}

impl<T, V> SpaceLineSegment<T, V> for LineSegment<V>
where
  T: Scalar,
  V: Lerp<T> + Copy,
{
  fn start(&self) -> V {
    self.start
  }
  fn end(&self) -> V {
    self.end
  }
  fn sample(&self, t: T) -> V {
    self.start.lerp(self.end, t)
  }
}

impl<V> LineSegment<V> {
  pub fn new(start: V, end: V) -> Self {
    Self { start, end }
  }

  /// None leaves the corresponding endpoint unchanged
  pub fn set(&mut self, start: Option<V>, end: Option<V>) -> &mut Self {
    if let Some(start) = start {
      self.start = start;
    }
    if let Some(end) = end {
      self.end = end;
    }
    self
  }

  pub fn set_start(&mut self, start: V) -> &mut Self {
    self.start = start;
    self
  }

  pub fn set_end(&mut self, end: V) -> &mut Self {
    self.end = end;
    self
  }

  pub fn reverse(&mut self) -> &mut Self {
    std::mem::swap(&mut self.start, &mut self.end);
    self
  }
}

impl<V: Clone> LineSegment<V> {
  pub fn copy_from(&mut self, other: &Self) -> &mut Self {
    self.clone_from(other);
    self
  }
}

impl<V: Copy> LineSegment<V> {
  /// yield start then end
  pub fn iter_point(&self) -> impl Iterator<Item = V> {
    [self.start, self.end].into_iter()
  }

  pub fn map<U>(&self, f: impl Fn(V) -> U) -> LineSegment<U> {
    LineSegment {
      start: f(self.start),
      end: f(self.end),
    }
  }

  pub fn swap(&self) -> Self {
    Self::new(self.end, self.start)
  }

  pub fn swap_if(&self, prediction: impl FnOnce(Self) -> bool) -> Self {
    if prediction(*self) {
      self.swap()
    } else {
      *self
    }
  }
}

impl<T, V> SpaceEntity<T> for LineSegment<V>
where
  T: Scalar,
  V: SpaceEntity<T>,
{
  fn apply_matrix(&mut self, mat: Mat4<T>) -> &mut Self {
    self.start.apply_matrix(mat);
    self.end.apply_matrix(mat);
    self
  }
}
