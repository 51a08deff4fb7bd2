use crate::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray3<T = f32> {
  pub origin: Vec3<T>,
  pub direction: NormalizedVec3<T>,
}

impl<T: Scalar> Ray3<T> {
  pub fn new(origin: Vec3<T>, direction: NormalizedVec3<T>) -> Self {
    Ray3 { origin, direction }
  }

  /// return None when origin and target coincide
  pub fn from_point_to_point(origin: Vec3<T>, target: Vec3<T>) -> Option<Self> {
    let direction = (target - origin).try_into_normalized();
    if direction.is_none() {
      log::debug!("ray target {target:?} has no direction from origin {origin:?}");
    }
    direction.map(|direction| Self::new(origin, direction))
  }

  pub fn at(&self, distance: T) -> Vec3<T> {
    self.origin + self.direction * distance
  }

  /// points behind the origin measure to the origin
  pub fn distance_sq_to_point(&self, point: Vec3<T>) -> T {
    let oc = point - self.origin;
    let tca = oc.dot(self.direction);
    if tca <= T::zero() {
      return oc.length2();
    }
    (oc.length2() - tca * tca).max(T::zero())
  }

  pub fn distance_to_point(&self, point: Vec3<T>) -> T {
    self.distance_sq_to_point(point).sqrt()
  }
}

impl<T: Scalar> SpaceEntity<T> for Ray3<T> {
  /// when a singular matrix collapses the direction, the previous direction is kept
  fn apply_matrix(&mut self, mat: Mat4<T>) -> &mut Self {
    self.origin.apply_matrix(mat);
    match self.direction.transform_direction(mat).try_into_normalized() {
      Some(direction) => self.direction = direction,
      None => log::debug!(
        "matrix {mat:?} collapses ray direction {:?}, keep the previous one",
        self.direction.value
      ),
    }
    self
  }
}

#[test]
fn ray_queries() {
  let ray = Ray3::from_point_to_point(Vec3::new(1., 0., 0.), Vec3::new(1., 0., 4.)).unwrap();
  assert_eq!(*ray.direction, Vec3::new(0., 0., 1.));
  assert_eq!(ray.at(3.), Vec3::new(1., 0., 3.));
  assert_eq!(ray.distance_to_point(Vec3::new(1., 2., 10.)), 2.);
  assert_eq!(ray.distance_to_point(Vec3::new(1., 0., -3.)), 3.);

  assert!(Ray3::from_point_to_point(Vec3::new(1., 1., 1.), Vec3::new(1., 1., 1.)).is_none());
}

#[test]
fn ray_transform() {
  let mut ray = Ray3::new(Vec3::new(0., 0., 0.), Vec3::new(1., 0., 0.).into_normalized());
  ray.apply_matrix(Mat4::translate((0., 5., 0.)) * Mat4::scale((3., 3., 3.)));
  assert_eq!(ray.origin, Vec3::new(0., 5., 0.));
  assert_eq!(*ray.direction, Vec3::new(1., 0., 0.));
}

#[test]
fn ray_singular_transform_keeps_direction() {
  let mut ray = Ray3::new(Vec3::new(1., 2., 3.), Vec3::new(0., 1., 0.).into_normalized());
  ray.apply_matrix(Mat4::scale((1., 0., 1.)));
  assert_eq!(ray.origin, Vec3::new(1., 0., 3.));
  assert_eq!(*ray.direction, Vec3::new(0., 1., 0.));

  ray.apply_matrix(Mat4::scale((0., 0., 0.)));
  assert_eq!(ray.origin, Vec3::zero());
  assert_eq!(ray.direction.value.length(), 1.);
}
