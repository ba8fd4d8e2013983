use super::{Shade, Vec3};

/// Depth of the light's orbit plane, in front of the camera.
pub const LIGHT_DEPTH: f32 = -100.0;

/// Intensity of the single point light.
pub const LIGHT_INTENSITY: f32 = 0.7;

// Point light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub shade: Shade,
}

impl Light {
    pub fn new(position: Vec3, shade: Shade) -> Self {
        Self { position, shade }
    }

    /// Light for one rotation step of the animation.
    ///
    /// The orbit is an ellipse scaled by the frame size, `2W` wide and `3H`
    /// tall, shifted down by half its height so the light spends most of the
    /// loop above the sphere.
    pub fn orbiting(angle: f32, width: usize, height: usize) -> Self {
        let position = Vec3(
            2.0 * width as f32 * angle.cos(),
            3.0 * height as f32 * (angle.sin() - 0.5),
            LIGHT_DEPTH,
        );
        Self::new(position, Shade::new(LIGHT_INTENSITY))
    }
}
