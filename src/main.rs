//! ASCII raytracer: a single Phong-shaded sphere drawn with characters while
//! the camera zooms out and the light circles the scene.
//!
//! Usage:
//!   ascii_raytracer                    - animate on stdout, then hold
//!   ascii_raytracer --exit --animate   - redraw in place and exit when done
//!   ascii_raytracer --png-dir frames   - write every frame as a PNG instead

mod raytracer;

use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use raytracer::{
    hold, Checksum, FrameSink, ImageSink, NullRecorder, RenderConfig, RenderError, Renderer,
    ShadeRecorder, TextSink, DEFAULT_HEIGHT, DEFAULT_ITERATIONS, DEFAULT_ROTATION_STEPS,
    DEFAULT_SMOOTHNESS, DEFAULT_WIDTH,
};

/// Full-animation passes made by a single run
const EXPECTED_REPEATS: u32 = 1;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Renders a shaded sphere to the terminal as ASCII art",
    long_about = None
)]
struct Args {
    /// Frame width in columns
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Frame height in rows, including the two margin rows
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Shininess of the sphere
    #[arg(long, default_value_t = DEFAULT_SMOOTHNESS)]
    smoothness: f32,

    /// How many times each frame is repeated
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u32,

    /// Light rotation steps per half turn, more is smoother
    #[arg(long, default_value_t = DEFAULT_ROTATION_STEPS)]
    rotation_steps: f32,

    /// Move the cursor home after each frame so frames overwrite each other
    #[arg(long)]
    animate: bool,

    /// Exit when the animation ends instead of holding forever
    #[arg(long)]
    exit: bool,

    /// Skip checking that repeated frames render identically
    #[arg(long)]
    no_checksum: bool,

    /// Write frames as PNG files into this directory instead of stdout
    #[arg(long, value_name = "DIR")]
    png_dir: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            smoothness: self.smoothness,
            iterations: self.iterations,
            rotation_steps: self.rotation_steps,
            idle_after_completion: !self.exit,
            emit_cursor_reset: self.animate,
        }
    }
}

fn main() -> Result<(), RenderError> {
    env_logger::init();

    let args = Args::parse();
    let renderer = Renderer::new(args.config())?;
    let config = renderer.config();
    log::info!("starting with {:?}", config);

    let mut sink: Box<dyn FrameSink> = match &args.png_dir {
        Some(dir) => Box::new(ImageSink::new(dir, config.width, config.rows())?),
        None => Box::new(TextSink::new(BufWriter::new(io::stdout().lock()))),
    };
    let mut checksum = Checksum::new();
    let mut null_recorder = NullRecorder;
    let recorder: &mut dyn ShadeRecorder = if args.no_checksum {
        &mut null_recorder
    } else {
        &mut checksum
    };

    let summary = renderer.run(sink.as_mut(), recorder)?;
    drop(sink);

    match recorder.validate(config.iterations, EXPECTED_REPEATS) {
        Ok(()) => log::info!("checksums consistent across {} frames", summary.frames),
        Err(e) => {
            log::error!("checksum validation failed: {}", e);
            return Err(e.into());
        }
    }
    if !args.no_checksum {
        log::debug!("frame checksums: {:08x?}", checksum.frames());
    }

    if config.idle_after_completion {
        hold();
    }

    Ok(())
}
