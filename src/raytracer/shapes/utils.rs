use std::ops::{Add, Div, Mul, Sub};

/// Point or direction in scene space; x right, y down the frame, z away
/// from the camera. Every operation returns a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3(pub f32, pub f32, pub f32);

impl Vec3 {
    pub fn add(self, rhs: Vec3) -> Vec3 {
        Vec3(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }

    pub fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3(self.0 - rhs.0, self.1 - rhs.1, self.2 - rhs.2)
    }

    /// Scale by `factor`.
    pub fn mul(self, factor: f32) -> Vec3 {
        Vec3(self.0 * factor, self.1 * factor, self.2 * factor)
    }

    pub fn div(self, divisor: f32) -> Vec3 {
        Vec3(self.0 / divisor, self.1 / divisor, self.2 / divisor)
    }

    pub fn dot(self, rhs: Vec3) -> f32 {
        self.0 * rhs.0 + self.1 * rhs.1 + self.2 * rhs.2
    }

    pub fn magnitude(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Normalize the vector to unit length.
    ///
    /// A zero-length vector has no direction: debug builds panic, release
    /// builds hand the zero vector back unchanged instead of spreading NaNs.
    pub fn normalize(self) -> Vec3 {
        let mag = self.magnitude();
        debug_assert!(mag > 0.0, "normalizing a zero-length vector");
        if mag > 0.0 {
            self.div(mag)
        } else {
            log::warn!("normalize called on zero-length vector {:?}", self);
            self
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Self) -> Self::Output {
        Vec3::add(self, rhs)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Self) -> Self::Output {
        Vec3::sub(self, rhs)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, factor: f32) -> Self::Output {
        Vec3::mul(self, factor)
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;

    fn div(self, divisor: f32) -> Self::Output {
        Vec3::div(self, divisor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_add_and_sub() {
        let a = Vec3(1.0, 2.0, 3.0);
        let b = Vec3(0.5, -1.0, 4.0);
        assert_eq!(a + b, Vec3(1.5, 1.0, 7.0));
        assert_eq!(a - b, Vec3(0.5, 3.0, -1.0));
    }

    #[test]
    fn test_scale_and_divide() {
        let v = Vec3(2.0, -4.0, 6.0);
        assert_eq!(v * 0.5, Vec3(1.0, -2.0, 3.0));
        assert_eq!(v / 2.0, Vec3(1.0, -2.0, 3.0));
    }

    #[test]
    fn test_dot() {
        assert_eq!(Vec3(1.0, 0.0, 0.0).dot(Vec3(0.0, 1.0, 0.0)), 0.0);
        assert_eq!(Vec3(1.0, 2.0, 3.0).dot(Vec3(4.0, 5.0, 6.0)), 32.0);
    }

    #[test]
    fn test_normalize_unit_length() {
        let n = Vec3(3.0, 4.0, 12.0).normalize();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(n.0, 3.0 / 13.0, epsilon = 1e-6);
        assert_relative_eq!(n.2, 12.0 / 13.0, epsilon = 1e-6);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "zero-length")]
    fn test_normalize_zero_panics_in_debug() {
        let _ = Vec3(0.0, 0.0, 0.0).normalize();
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_normalize_zero_is_zero_in_release() {
        assert_eq!(Vec3(0.0, 0.0, 0.0).normalize(), Vec3(0.0, 0.0, 0.0));
    }
}
