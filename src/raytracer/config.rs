use std::f32::consts::PI;

use super::{RenderError, Result};

pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 40;
pub const DEFAULT_SMOOTHNESS: f32 = 20.5;
pub const DEFAULT_ITERATIONS: u32 = 1;
pub const DEFAULT_ROTATION_STEPS: f32 = 11.0;

/// Rows at the top of the frame that are never traced.
pub const MARGIN_ROWS: usize = 2;

/// Settings handed to the renderer at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Frame width in character columns
    pub width: usize,
    /// Frame height in character rows, margin included
    pub height: usize,
    /// Specular exponent, higher gives a tighter highlight
    pub smoothness: f32,
    /// How many times each frame is rendered back to back
    pub iterations: u32,
    /// Rotation steps per half turn of the light
    pub rotation_steps: f32,
    /// Park forever once the animation is done
    pub idle_after_completion: bool,
    /// Move the cursor home after every frame
    pub emit_cursor_reset: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            smoothness: DEFAULT_SMOOTHNESS,
            iterations: DEFAULT_ITERATIONS,
            rotation_steps: DEFAULT_ROTATION_STEPS,
            idle_after_completion: true,
            emit_cursor_reset: false,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(RenderError::InvalidConfig("width must be at least 1".to_string()));
        }
        if self.height <= MARGIN_ROWS {
            return Err(RenderError::InvalidConfig(format!(
                "height must be greater than {} to leave a row to draw",
                MARGIN_ROWS
            )));
        }
        if !self.smoothness.is_finite() || self.smoothness < 0.0 {
            return Err(RenderError::InvalidConfig(format!(
                "smoothness must be a finite non-negative number, got {}",
                self.smoothness
            )));
        }
        if self.iterations == 0 {
            return Err(RenderError::InvalidConfig("iterations must be at least 1".to_string()));
        }
        if !self.rotation_steps.is_finite() || self.rotation_steps <= 0.0 {
            return Err(RenderError::InvalidConfig(format!(
                "rotation steps must be a finite positive number, got {}",
                self.rotation_steps
            )));
        }
        // The angle is accumulated in f32; a step lost in the rounding at a
        // full turn would never reach it
        let full_turn = 2.0 * PI;
        if full_turn + PI / self.rotation_steps == full_turn {
            return Err(RenderError::InvalidConfig(format!(
                "{} rotation steps are too fine to complete a turn",
                self.rotation_steps
            )));
        }
        Ok(())
    }

    /// Number of traced rows in a frame.
    pub fn rows(&self) -> usize {
        self.height.saturating_sub(MARGIN_ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width, 80);
        assert_eq!(config.height, 40);
        assert_eq!(config.rows(), 38);
        assert!(config.idle_after_completion);
        assert!(!config.emit_cursor_reset);
    }

    #[test]
    fn test_rejects_bad_values() {
        let cases = [
            RenderConfig { width: 0, ..RenderConfig::default() },
            RenderConfig { height: 2, ..RenderConfig::default() },
            RenderConfig { smoothness: f32::NAN, ..RenderConfig::default() },
            RenderConfig { smoothness: -1.0, ..RenderConfig::default() },
            RenderConfig { iterations: 0, ..RenderConfig::default() },
            RenderConfig { rotation_steps: 0.0, ..RenderConfig::default() },
            RenderConfig { rotation_steps: f32::INFINITY, ..RenderConfig::default() },
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(RenderError::InvalidConfig(_))),
                "accepted {:?}",
                config
            );
        }
    }

    #[test]
    fn test_rejects_rotation_steps_too_fine_to_turn() {
        for rotation_steps in [1.0e9, 1.0e20, f32::MAX] {
            let config = RenderConfig { rotation_steps, ..RenderConfig::default() };
            assert!(
                matches!(config.validate(), Err(RenderError::InvalidConfig(_))),
                "accepted {} rotation steps",
                rotation_steps
            );
        }
        let config = RenderConfig { rotation_steps: 1.0e5, ..RenderConfig::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_smallest_frame_is_valid() {
        let config = RenderConfig { width: 1, height: 3, ..RenderConfig::default() };
        assert!(config.validate().is_ok());
        assert_eq!(config.rows(), 1);
    }
}
