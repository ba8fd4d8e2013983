use super::{Light, Ray, Shade, Sphere, Vec3};

/// Baseline illumination added to every lit point.
pub const AMBIENT: f32 = 0.1;

/// The single hard-coded sphere and its material.
pub struct Scene {
    pub sphere: Sphere,
    pub ambient: Shade,
    pub smoothness: f32,
}

impl Scene {
    /// Sphere sized to the frame: centred `height` units down the view axis
    /// with a radius of half the height.
    pub fn new(height: usize, smoothness: f32) -> Self {
        let height = height as f32;
        Self {
            sphere: Sphere::new(Vec3(0.0, 0.0, height), height / 2.0),
            ambient: Shade::new(AMBIENT),
            smoothness,
        }
    }

    /// Simplified Phong shading of one primary ray.
    ///
    /// Misses contribute nothing, not even ambient. The result is not clamped;
    /// saturation happens when the shade is quantized.
    pub fn shade_ray(&self, ray: &Ray, light: &Light) -> Shade {
        let Some(hit_point) = self.sphere.detect_hit(ray) else {
            return Shade::default();
        };

        let normal = self.sphere.normal_at(hit_point);
        let reflected = ray.direction - normal * 2.0 * ray.direction.dot(normal);
        let to_light = (light.position - hit_point).normalize();

        let diffuse = to_light.dot(normal).max(0.0);
        let specular = to_light.dot(reflected).max(0.0);

        light.shade * specular.powf(self.smoothness) + light.shade * diffuse + self.ambient
    }
}
