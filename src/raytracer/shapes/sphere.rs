use super::Vec3;
use crate::raytracer::Ray;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    // Sphere constructor
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Unit normal at a point on the surface. The point is not checked.
    pub fn normal_at(&self, point: Vec3) -> Vec3 {
        (point - self.center).normalize()
    }

    /// Nearest intersection of `ray` with the surface.
    ///
    /// Every point on the surface satisfies `(p - c).(p - c) - r^2 = 0` and
    /// every point on the ray is `o + d * t`. Substituting gives a quadratic in
    /// `t`; the smaller root is taken. Roots behind the origin are not
    /// rejected, so a ray starting inside or past the sphere still reports
    /// a hit.
    pub fn detect_hit(&self, ray: &Ray) -> Option<Vec3> {
        let in_ref = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = ray.direction.dot(in_ref);
        let c = in_ref.dot(in_ref) - self.radius * self.radius;

        debug_assert!(a > 0.0, "intersection test with a zero-length ray direction");
        if a == 0.0 {
            log::warn!("ray {:?} has no direction, treating as a miss", ray);
            return None;
        }

        let discriminant = b * b - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let t = ((-b + sqrt_d) / a).min((-b - sqrt_d) / a);

        Some(ray.at(t))
    }
}
