use crate::*;

pub type LineSegment3D<T = f32> = LineSegment<Vec3<T>>;

/// Where the closest point of a segment to some query point lies.
#[derive(Debug, Copy, Clone, PartialEq)]
enum ClosestPoint<T> {
  Start,
  End,
  /// parameter strictly inside (0, 1)
  Interior(T),
}

impl<T: Scalar> LineSegment3D<T> {
  /// omitted endpoints stay at the origin
  pub fn from_optional(start: Option<Vec3<T>>, end: Option<Vec3<T>>) -> Self {
    let mut segment = Self::default();
    segment.set(start, end);
    segment
  }

  pub fn center(&self) -> Vec3<T> {
    (self.start + self.end) * T::half()
  }

  /// write the center into target instead of returning a new value
  pub fn center_into<'a>(&self, target: &'a mut Vec3<T>) -> &'a mut Vec3<T> {
    *target = self.center();
    target
  }

  /// the vector from start to end
  pub fn delta(&self) -> Vec3<T> {
    self.end - self.start
  }

  pub fn delta_into<'a>(&self, target: &'a mut Vec3<T>) -> &'a mut Vec3<T> {
    *target = self.delta();
    target
  }

  pub fn length(&self) -> T {
    self.start.distance(self.end)
  }

  /// squared length, cheaper than [LineSegment3D::length] when only comparing
  pub fn length2(&self) -> T {
    self.start.distance2(self.end)
  }

  pub fn is_degenerate(&self) -> bool {
    self.start == self.end
  }

  /// 0 is start, 1 is end, not clamped
  pub fn at(&self, t: T) -> Vec3<T> {
    self.sample(t)
  }

  // endpoint ties (a zero projection) resolve to the endpoint, never to the interior branch.
  // the direction is scaled by its largest component so the dot products and the squared
  // length stay in float range for very long or very short segments.
  fn closest(&self, point: Vec3<T>) -> ClosestPoint<T> {
    let mut d = self.delta();
    let mut parameter_scale = T::one();
    if !d.is_finite() {
      // endpoints near the float limit, half of the delta is still representable
      d = self.end * T::half() - self.start * T::half();
      parameter_scale = T::half();
    }

    let scale = d.max_abs_component();
    if scale == T::zero() {
      return ClosestPoint::Start;
    }
    let d = d / scale;

    let t1 = (point - self.start).dot(d);
    if t1 <= T::zero() {
      return ClosestPoint::Start;
    }

    let t2 = (point - self.end).dot(d);
    if t2 >= T::zero() {
      return ClosestPoint::End;
    }

    ClosestPoint::Interior(t1 / d.length2() / scale * parameter_scale)
  }

  /// the projection parameter of point, clamped into [0, 1]
  pub fn closest_point_parameter(&self, point: Vec3<T>) -> T {
    match self.closest(point) {
      ClosestPoint::Start => T::zero(),
      ClosestPoint::End => T::one(),
      ClosestPoint::Interior(t) => t,
    }
  }

  pub fn closest_point_to_point(&self, point: Vec3<T>) -> Vec3<T> {
    match self.closest(point) {
      ClosestPoint::Start => self.start,
      ClosestPoint::End => self.end,
      ClosestPoint::Interior(t) => {
        let d = self.delta();
        if d.is_finite() {
          self.start + d * t
        } else {
          self.at(t)
        }
      }
    }
  }

  /// shortest distance from point to the segment, not the infinite line
  pub fn distance_to_point(&self, point: Vec3<T>) -> T {
    self.closest_point_to_point(point).distance(point)
  }

  pub fn distance2_to_point(&self, point: Vec3<T>) -> T {
    self.closest_point_to_point(point).distance2(point)
  }

  #[must_use]
  pub fn transformed(mut self, mat: Mat4<T>) -> Self {
    self.apply_matrix(mat);
    self
  }

  /// A ray starting at start and pointing to end.
  ///
  /// A degenerate segment has no direction, so it is rejected instead of producing a
  /// zero or NaN direction. Endpoints far enough apart that the delta overflows are
  /// rejected as well.
  pub fn to_ray(&self) -> Result<Ray3<T>, SegmentError> {
    if self.is_degenerate() {
      log::debug!("refuse to build ray from degenerate segment at {:?}", self.start);
      return Err(SegmentError::Degenerate);
    }
    let direction = self.delta().try_into_normalized().ok_or_else(|| {
      log::debug!("segment {self:?} delta overflows, direction can not be normalized");
      SegmentError::UnrepresentableDirection
    })?;
    Ok(Ray3::new(self.start, direction))
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn seg(start: (f32, f32, f32), end: (f32, f32, f32)) -> LineSegment3D {
    LineSegment3D::new(start.into(), end.into())
  }

  #[test]
  fn construction() {
    let s = LineSegment3D::<f32>::from_optional(None, Some(Vec3::new(1., 2., 3.)));
    assert_eq!(s.start, Vec3::zero());
    assert_eq!(s.end, Vec3::new(1., 2., 3.));
    assert_eq!(LineSegment3D::<f32>::default(), seg((0., 0., 0.), (0., 0., 0.)));
  }

  #[test]
  fn derived_quantities() {
    let s = seg((0., 0., 0.), (2., 4., 6.));
    assert_eq!(s.center(), Vec3::new(1., 2., 3.));

    let s = seg((1., 1., 1.), (4., 5., 1.));
    assert_eq!(s.delta(), Vec3::new(3., 4., 0.));
    assert_eq!(s.length(), 5.);

    let mut target = Vec3::splat(9.);
    assert_eq!(*s.delta_into(&mut target), Vec3::new(3., 4., 0.));
    assert_eq!(target, Vec3::new(3., 4., 0.));
    s.center_into(&mut target).x += 1.;
    assert_eq!(target, Vec3::new(3.5, 3., 1.));
  }

  #[test]
  fn sample_along_segment() {
    let s = LineSegment3D::new(Vec3::new(0., 0., 0.), Vec3::new(4., -8., 2.));
    assert_eq!(s.sample(0.25), Vec3::new(1., -2., 0.5));
    assert_eq!(s.sample(1.), s.end);
    assert_eq!(SpaceLineSegment::<f64, _>::start(&s), s.start);
    assert_eq!(SpaceLineSegment::<f64, _>::end(&s), s.end);
    assert_eq!(s.at(0.5), s.center());
  }

  // the squared accessor returns the real square, not the plain length
  #[test]
  fn length2_is_squared() {
    let s = seg((0., 0., 0.), (3., 4., 0.));
    assert_eq!(s.length(), 5.);
    assert_eq!(s.length2(), 25.);
    assert_eq!(seg((1., 1., 1.), (1., 1., 1.)).length2(), 0.);
  }

  #[test]
  fn distance_to_point() {
    let s = seg((0., 0., 0.), (10., 0., 0.));
    assert_eq!(s.distance_to_point(Vec3::new(-5., 0., 0.)), 5.);
    assert_eq!(s.distance_to_point(Vec3::new(15., 0., 0.)), 5.);
    assert_eq!(s.distance_to_point(Vec3::new(5., 3., 0.)), 3.);
    assert_eq!(s.distance2_to_point(Vec3::new(5., 3., 4.)), 25.);
    assert_eq!(s.distance_to_point(Vec3::new(5., 0., 0.)), 0.);
  }

  #[test]
  fn endpoint_ties_resolve_to_endpoints() {
    let s = seg((0., 0., 0.), (10., 0., 0.));
    assert_eq!(s.closest(Vec3::new(0., 4., 0.)), ClosestPoint::Start);
    assert_eq!(s.closest(Vec3::new(10., -4., 1.)), ClosestPoint::End);
    assert_eq!(s.closest(Vec3::new(5., 4., 0.)), ClosestPoint::Interior(0.5));
    assert_eq!(s.closest_point_parameter(Vec3::new(-1., 0., 0.)), 0.);
    assert_eq!(s.closest_point_parameter(Vec3::new(11., 0., 0.)), 1.);
    assert_eq!(
      s.closest_point_to_point(Vec3::new(2.5, 1., 1.)),
      Vec3::new(2.5, 0., 0.)
    );
  }

  #[test]
  fn degenerate_segment() {
    let s = seg((2., 2., 2.), (2., 2., 2.));
    assert!(s.is_degenerate());
    assert_eq!(s.distance_to_point(Vec3::new(5., 2., 2.)), 3.);
    assert_eq!(s.distance_to_point(Vec3::new(2., 2., 2.)), 0.);
    assert_eq!(s.closest_point_parameter(Vec3::new(0., 9., 0.)), 0.);
    assert_eq!(s.center(), Vec3::splat(2.));
    assert_eq!(s.delta(), Vec3::zero());
    assert_eq!(s.length(), 0.);
    assert_eq!(s.transformed(Mat4::translate((1., 0., 0.))), seg((3., 2., 2.), (3., 2., 2.)));
  }

  #[test]
  fn long_segment() {
    let s = seg((0., 0., 0.), (0., 2e19, 0.));
    assert!(s.length2().is_infinite());
    assert_eq!(s.length(), 2e19);
    assert_eq!(s.closest_point_parameter(Vec3::new(0., 1e19, 1.)), 0.5);
    assert_eq!(s.distance_to_point(Vec3::new(0., 1e19, 1.)), 1.);

    let ray = s.to_ray().unwrap();
    assert_eq!(*ray.direction, Vec3::new(0., 1., 0.));
  }

  #[test]
  fn short_segment() {
    let s = seg((0., 0., 0.), (1e-20, 0., 0.));
    assert!(!s.is_degenerate());
    assert_eq!(s.closest_point_parameter(Vec3::new(5e-21, 1., 0.)), 0.5);
    assert_eq!(s.distance_to_point(Vec3::new(5e-21, 1., 0.)), 1.);

    let ray = s.to_ray().unwrap();
    assert_eq!(*ray.direction, Vec3::new(1., 0., 0.));
    assert_eq!(ray.direction.value.length(), 1.);

    let tiny = f32::from_bits(1);
    let s = seg((0., 0., 0.), (tiny, tiny, 0.));
    assert_eq!(s.length2(), 0.);
    let ray = s.to_ray().unwrap();
    assert!((ray.direction.value.length() - 1.).abs() < 1e-6);
    assert_eq!(s.distance_to_point(Vec3::new(0., 0., 3.)), 3.);
  }

  #[test]
  fn overflowing_delta() {
    let s = seg((-3e38, 0., 0.), (3e38, 0., 0.));
    assert!(!s.delta().is_finite());
    assert_eq!(s.closest_point_parameter(Vec3::new(0., 2., 0.)), 0.5);
    assert_eq!(s.distance_to_point(Vec3::new(0., 2., 0.)), 2.);
    assert_eq!(s.distance_to_point(Vec3::new(3e38, 0., 1.)), 1.);
    assert_eq!(s.to_ray(), Err(SegmentError::UnrepresentableDirection));
  }

  #[test]
  fn to_ray() {
    let s = seg((1., 0., 0.), (1., 0., 4.));
    let ray = s.to_ray().unwrap();
    assert_eq!(ray.origin, s.start);
    assert_eq!(*ray.direction, Vec3::new(0., 0., 1.));
    assert_eq!(ray.direction.value.length(), 1.);

    let degenerate = seg((1., 1., 1.), (1., 1., 1.));
    assert_eq!(degenerate.to_ray(), Err(SegmentError::Degenerate));
  }

  #[test]
  fn apply_matrix() {
    let mut s = seg((1., 2., 3.), (-4., 5., 6.));
    let origin = s;
    s.apply_matrix(Mat4::identity());
    assert_eq!(s, origin);

    s.apply_matrix(Mat4::translate((1., 1., 1.)))
      .apply_matrix(Mat4::scale((2., 2., 2.)));
    assert_eq!(s, seg((4., 6., 8.), (-6., 12., 14.)));
  }

  #[test]
  fn gpu_layout() {
    let segments = [seg((0., 1., 2.), (3., 4., 5.)), seg((6., 7., 8.), (9., 10., 11.))];
    let data: &[f32] = bytemuck::cast_slice(&segments);
    assert_eq!(data.len(), 12);
    assert_eq!(data[3..6], [3., 4., 5.]);
    assert_eq!(data[11], 11.);
  }

  #[test]
  fn equality_is_exact() {
    let a = seg((0., 0., 0.), (1., 1., 1.));
    let b = seg((0., 0., 0.), (1., 1., 1. + f32::EPSILON));
    assert_eq!(a, a);
    assert_ne!(a, b);
    assert_ne!(b, a);
    assert_ne!(a, a.swap());
  }
}
