use std::f32::consts::PI;

use super::{
    Camera, FrameSink, Light, RenderConfig, Result, Scene, ShadeRecorder, MARGIN_ROWS,
};

pub const ZOOM_START: f32 = 12.0;
pub const ZOOM_END: f32 = 32.0;
pub const ZOOM_STEP: f32 = 10.0;

/// Counts of what a finished run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderSummary {
    pub frames: usize,
    pub pixels: usize,
}

// Camera distances visited by the animation, nearest first
pub fn zoom_levels() -> Vec<f32> {
    let mut levels = Vec::new();
    let mut zoom = ZOOM_START;
    while zoom <= ZOOM_END {
        levels.push(zoom);
        zoom += ZOOM_STEP;
    }
    levels
}

/// Light angles for one full turn, `PI / steps` apart.
///
/// The angle is accumulated rather than multiplied out, so the rounding of
/// the running sum decides whether a final step just short of a full turn is
/// drawn. With the default 11 steps that gives 23 angles. The turn is cut
/// short if the step becomes too small to move the angle at all.
pub fn light_rotations(steps: f32) -> Vec<f32> {
    let step = PI / steps;
    let mut angles = Vec::new();
    let mut angle = 0.0f32;
    while angle < 2.0 * PI {
        angles.push(angle);
        let next = angle + step;
        if next == angle {
            log::warn!(
                "rotation step {} vanishes at angle {}, stopping after {} angles",
                step,
                angle,
                angles.len()
            );
            break;
        }
        angle = next;
    }
    angles
}

/// Drives the animation: zoom levels, then light angles, then repeated
/// iterations of the same frame.
pub struct Renderer {
    config: RenderConfig,
    scene: Scene,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        let scene = Scene::new(config.height, config.smoothness);
        Ok(Self { config, scene })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn run(
        &self,
        sink: &mut dyn FrameSink,
        recorder: &mut dyn ShadeRecorder,
    ) -> Result<RenderSummary> {
        let zooms = zoom_levels();
        let rotations = light_rotations(self.config.rotation_steps);
        log::info!(
            "rendering {}x{} frames: {} zoom levels, {} light angles, {} iteration(s) each",
            self.config.width,
            self.config.height,
            zooms.len(),
            rotations.len(),
            self.config.iterations
        );

        let mut summary = RenderSummary::default();
        for &zoom in &zooms {
            for &light_rotation in &rotations {
                for iteration in 0..self.config.iterations {
                    log::debug!(
                        "frame {}: zoom={} rotation={:.4} iteration={}",
                        summary.frames,
                        zoom,
                        light_rotation,
                        iteration
                    );
                    summary.pixels += self.render_frame(zoom, light_rotation, sink, recorder)?;
                    summary.frames += 1;
                }
            }
        }

        log::info!("rendered {} frames ({} pixels)", summary.frames, summary.pixels);
        Ok(summary)
    }

    /// Render one frame in raster order and return the number of pixels drawn.
    pub fn render_frame(
        &self,
        zoom: f32,
        light_rotation: f32,
        sink: &mut dyn FrameSink,
        recorder: &mut dyn ShadeRecorder,
    ) -> Result<usize> {
        let width = self.config.width;
        let height = self.config.height;
        let light = Light::orbiting(light_rotation, width, height);
        let camera = Camera::new(width, height, zoom);

        sink.begin_frame(zoom, light_rotation)?;
        for y in MARGIN_ROWS..height {
            for x in 0..width {
                let ray = camera.ray_for_pixel(x, y);
                let shade = self.scene.shade_ray(&ray, &light);
                recorder.record(shade.value);
                sink.put_glyph(shade.to_glyph())?;
            }
            sink.end_row()?;
        }
        recorder.end_frame();
        sink.end_frame(self.config.emit_cursor_reset)?;

        Ok(self.config.rows() * width)
    }
}

/// Terminal idle state, used to keep embedded targets from running off the
/// end of the program.
pub fn hold() -> ! {
    log::info!("animation finished, holding");
    loop {
        std::thread::park();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raytracer::{Checksum, NullRecorder, TextSink, CURSOR_HOME};

    fn small_config() -> RenderConfig {
        RenderConfig {
            width: 8,
            height: 6,
            rotation_steps: 1.0,
            idle_after_completion: false,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn test_zoom_levels() {
        assert_eq!(zoom_levels(), vec![12.0, 22.0, 32.0]);
    }

    #[test]
    fn test_light_rotations() {
        assert_eq!(light_rotations(1.0), vec![0.0, PI]);
        assert_eq!(light_rotations(11.0).len(), 23);
        assert!(light_rotations(11.0).iter().all(|&angle| angle < 2.0 * PI));
    }

    #[test]
    fn test_light_rotations_stop_when_step_vanishes() {
        let angles = light_rotations(1.0e9);
        assert!(!angles.is_empty());
        assert!(angles.len() < 1 << 26);
        assert!(angles.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(angles.iter().all(|&angle| angle < 2.0 * PI));
    }

    #[test]
    fn test_rejects_rotation_steps_that_cannot_turn() {
        let config = RenderConfig { rotation_steps: 1.0e9, ..small_config() };
        assert!(Renderer::new(config).is_err());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = RenderConfig { height: 1, ..small_config() };
        assert!(Renderer::new(config).is_err());
    }

    #[test]
    fn test_raster_layout() {
        let renderer = Renderer::new(small_config()).unwrap();
        let mut sink = TextSink::new(Vec::new());
        let summary = renderer.run(&mut sink, &mut NullRecorder).unwrap();

        assert_eq!(summary.frames, 6);
        assert_eq!(summary.pixels, 6 * 4 * 8);

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.ends_with('\n'));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6 * (1 + 4));
        for frame in lines.chunks(5) {
            assert!(frame[0].starts_with("Zoom="));
            for row in &frame[1..] {
                assert_eq!(row.chars().count(), 8);
            }
        }
    }

    #[test]
    fn test_default_animation_frame_count() {
        let config = RenderConfig {
            idle_after_completion: false,
            ..RenderConfig::default()
        };
        let renderer = Renderer::new(config).unwrap();
        let mut sink = TextSink::new(std::io::sink());
        let summary = renderer.run(&mut sink, &mut NullRecorder).unwrap();

        assert_eq!(summary.frames, 3 * 23);
        assert_eq!(summary.pixels, 3 * 23 * 38 * 80);
    }

    #[test]
    fn test_center_pixel_in_first_frame() {
        let renderer = Renderer::new(RenderConfig::default()).unwrap();
        let mut sink = TextSink::new(Vec::new());
        renderer
            .render_frame(12.0, 0.0, &mut sink, &mut NullRecorder)
            .unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1 + 38);
        // Header first, then rows 2.. of the frame
        let center_row: Vec<char> = lines[1 + 20 - MARGIN_ROWS].chars().collect();
        assert_eq!(center_row[40], '+');
        // Corners look past the sphere
        assert_eq!(lines[1].chars().next(), Some(' '));
    }

    #[test]
    fn test_repeated_iterations_validate() {
        let config = RenderConfig { iterations: 3, ..small_config() };
        let renderer = Renderer::new(config).unwrap();
        let mut checksum = Checksum::new();
        let summary = renderer
            .run(&mut TextSink::new(std::io::sink()), &mut checksum)
            .unwrap();

        assert_eq!(summary.frames, 18);
        assert_eq!(checksum.frames().len(), 18);
        assert_eq!(checksum.validate(3, 1), Ok(()));
        // Different zooms do not collide
        assert_ne!(checksum.frames()[0], checksum.frames()[6]);
    }

    #[test]
    fn test_cursor_reset_after_every_frame() {
        let config = RenderConfig { emit_cursor_reset: true, ..small_config() };
        let renderer = Renderer::new(config).unwrap();
        let mut sink = TextSink::new(Vec::new());
        let summary = renderer.run(&mut sink, &mut NullRecorder).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text.matches(CURSOR_HOME).count(), summary.frames);
    }
}
