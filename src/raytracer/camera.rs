use super::{Ray, Vec3};

/// Pinhole camera at the origin looking down +z.
///
/// The image plane sits `zoom` units in front of the camera and each
/// character cell is one unit wide, so a larger zoom narrows the view.
pub struct Camera {
    pub position: Vec3,
    pub zoom: f32,
    pub width: usize,
    pub height: usize,
}

impl Camera {
    pub fn new(width: usize, height: usize, zoom: f32) -> Self {
        Self {
            position: Vec3(0.0, 0.0, 0.0),
            zoom,
            width,
            height,
        }
    }

    // Primary ray through the cell at column x, row y
    pub fn ray_for_pixel(&self, x: usize, y: usize) -> Ray {
        // Centre on whole cells, the same way the frame is laid out
        let dx = x as i64 - (self.width / 2) as i64;
        let dy = y as i64 - (self.height / 2) as i64;
        let direction = Vec3(dx as f32, dy as f32, self.zoom).normalize();
        Ray::new(self.position, direction)
    }
}
