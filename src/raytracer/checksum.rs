use thiserror::Error;

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

#[derive(Debug, Error, PartialEq)]
pub enum ChecksumError {
    #[error("iterations and repeats must both be at least 1 (got {iterations} and {repeats})")]
    InvalidArguments { iterations: u32, repeats: u32 },

    #[error("no frames were recorded")]
    Empty,

    #[error("{frames} frames cannot be split into {repeats} passes of {iterations}-frame groups")]
    FrameCountMismatch { frames: usize, iterations: u32, repeats: u32 },

    #[error("frame {frame} differs from the previous iteration of the same frame")]
    Nondeterministic { frame: usize },

    #[error("pass {pass} differs from the first pass")]
    PassMismatch { pass: usize },
}

/// Receives every shade value in emission order.
pub trait ShadeRecorder {
    fn record(&mut self, value: f32);

    fn end_frame(&mut self);

    /// Check that each group of `iterations` consecutive frames is identical
    /// and that the recording consists of `expected_repeats` identical passes.
    fn validate(&self, iterations: u32, expected_repeats: u32) -> Result<(), ChecksumError>;
}

/// Per-frame FNV-1a hash over the bit patterns of the recorded values.
#[derive(Debug, Clone)]
pub struct Checksum {
    current: u32,
    frames: Vec<u32>,
}

impl Checksum {
    pub fn new() -> Self {
        Self {
            current: FNV_OFFSET,
            frames: Vec::new(),
        }
    }

    pub fn frames(&self) -> &[u32] {
        &self.frames
    }
}

impl Default for Checksum {
    fn default() -> Self {
        Self::new()
    }
}

impl ShadeRecorder for Checksum {
    fn record(&mut self, value: f32) {
        for byte in value.to_bits().to_le_bytes() {
            self.current ^= byte as u32;
            self.current = self.current.wrapping_mul(FNV_PRIME);
        }
    }

    fn end_frame(&mut self) {
        self.frames.push(self.current);
        self.current = FNV_OFFSET;
    }

    fn validate(&self, iterations: u32, expected_repeats: u32) -> Result<(), ChecksumError> {
        if iterations == 0 || expected_repeats == 0 {
            return Err(ChecksumError::InvalidArguments {
                iterations,
                repeats: expected_repeats,
            });
        }
        if self.frames.is_empty() {
            return Err(ChecksumError::Empty);
        }

        let group = iterations as usize;
        let passes = expected_repeats as usize;
        if self.frames.len() % (group * passes) != 0 {
            return Err(ChecksumError::FrameCountMismatch {
                frames: self.frames.len(),
                iterations,
                repeats: expected_repeats,
            });
        }

        for (index, chunk) in self.frames.chunks(group).enumerate() {
            if let Some(offset) = chunk.iter().position(|&sum| sum != chunk[0]) {
                return Err(ChecksumError::Nondeterministic {
                    frame: index * group + offset,
                });
            }
        }

        let pass_len = self.frames.len() / passes;
        let first = &self.frames[..pass_len];
        for (pass, frames) in self.frames.chunks(pass_len).enumerate().skip(1) {
            if frames != first {
                return Err(ChecksumError::PassMismatch { pass });
            }
        }

        Ok(())
    }
}

/// Recorder that keeps nothing and never complains.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRecorder;

impl ShadeRecorder for NullRecorder {
    fn record(&mut self, _value: f32) {}

    fn end_frame(&mut self) {}

    fn validate(&self, _iterations: u32, _expected_repeats: u32) -> Result<(), ChecksumError> {
        Ok(())
    }
}
