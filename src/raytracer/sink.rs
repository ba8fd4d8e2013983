use std::f32::consts::PI;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use image::{GrayImage, Luma};

use super::{RenderError, Result, Shade};

/// ANSI sequence moving the cursor to the top-left corner.
pub const CURSOR_HOME: &str = "\x1b[0;0H";

/// Destination for rendered frames, fed in raster order.
pub trait FrameSink {
    fn begin_frame(&mut self, zoom: f32, light_rotation: f32) -> Result<()>;

    fn put_glyph(&mut self, glyph: char) -> Result<()>;

    fn end_row(&mut self) -> Result<()>;

    fn end_frame(&mut self, reset_cursor: bool) -> Result<()>;
}

/// Writes frames as plain text, one line per row.
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for TextSink<W> {
    fn begin_frame(&mut self, zoom: f32, light_rotation: f32) -> Result<()> {
        writeln!(
            self.out,
            "Zoom={:.1}, lightRotate={:3.1}",
            zoom.ln(),
            (180.0 * light_rotation) / PI
        )?;
        Ok(())
    }

    fn put_glyph(&mut self, glyph: char) -> Result<()> {
        write!(self.out, "{}", glyph)?;
        Ok(())
    }

    fn end_row(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    fn end_frame(&mut self, reset_cursor: bool) -> Result<()> {
        if reset_cursor {
            write!(self.out, "{}", CURSOR_HOME)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Saves every frame as a grayscale PNG, one pixel per character cell.
pub struct ImageSink {
    dir: PathBuf,
    buffer: GrayImage,
    x: u32,
    y: u32,
    frame: usize,
}

impl ImageSink {
    pub fn new<P: AsRef<Path>>(dir: P, width: usize, rows: usize) -> Result<Self> {
        let (Ok(image_width), Ok(image_height)) = (u32::try_from(width), u32::try_from(rows)) else {
            return Err(RenderError::InvalidConfig(format!(
                "{}x{} frame does not fit in an image",
                width, rows
            )));
        };
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            buffer: GrayImage::new(image_width, image_height),
            x: 0,
            y: 0,
            frame: 0,
        })
    }

    pub fn frame_path(&self, frame: usize) -> PathBuf {
        self.dir.join(format!("frame_{:04}.png", frame))
    }
}

impl FrameSink for ImageSink {
    fn begin_frame(&mut self, _zoom: f32, _light_rotation: f32) -> Result<()> {
        self.x = 0;
        self.y = 0;
        Ok(())
    }

    fn put_glyph(&mut self, glyph: char) -> Result<()> {
        let level = Shade::from_glyph(glyph).unwrap_or_default().value;
        if self.x < self.buffer.width() && self.y < self.buffer.height() {
            let luma = (level * 255.0).round() as u8;
            self.buffer.put_pixel(self.x, self.y, Luma([luma]));
        }
        self.x += 1;
        Ok(())
    }

    fn end_row(&mut self) -> Result<()> {
        self.x = 0;
        self.y += 1;
        Ok(())
    }

    fn end_frame(&mut self, _reset_cursor: bool) -> Result<()> {
        let path = self.frame_path(self.frame);
        self.buffer.save(&path)?;
        log::debug!("wrote {}", path.display());
        self.frame += 1;
        Ok(())
    }
}
