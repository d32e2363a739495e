use std::time::Duration;

use crossterm::style::Color;
use thiserror::Error;

/// Construction-time settings for a run.
///
/// `width`, `height`, and `cell_size` fix the grid shape: the grid gets
/// `height / cell_size` rows and `width / cell_size` columns (integer
/// division). The colors and the framerate cap are passed through to the
/// renderer and the pacing clock untouched.
#[derive(Clone, Debug)]
pub struct Config {
    /// Screen width in pixels
    pub width: u16,

    /// Screen height in pixels
    pub height: u16,

    /// Side length of one cell, in pixels
    pub cell_size: u16,

    /// Color live cells are drawn with
    pub alive_color: Color,

    /// Background color dead cells are cleared to
    pub dead_color: Color,

    /// Framerate cap to limit game speed
    pub max_fps: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("screen dimensions must be positive, got {width}x{height}")]
    EmptyScreen { width: u16, height: u16 },

    #[error("cell size must be positive")]
    ZeroCellSize,

    #[error("cell size {cell_size} does not fit a {width}x{height} screen")]
    CellTooLarge {
        cell_size: u16,
        width: u16,
        height: u16,
    },

    #[error("max fps must be positive")]
    ZeroFps,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 160,
            height: 96,
            cell_size: 2,
            alive_color: Color::Rgb { r: 0, g: 255, b: 255 },
            dead_color: Color::Black,
            max_fps: 10,
        }
    }
}

impl Config {
    /// Check the shape parameters before a grid is built from them, so a
    /// malformed configuration fails loudly instead of producing an empty
    /// or degenerate grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyScreen {
                width: self.width,
                height: self.height,
            });
        }

        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        if self.cell_size > self.width || self.cell_size > self.height {
            return Err(ConfigError::CellTooLarge {
                cell_size: self.cell_size,
                width: self.width,
                height: self.height,
            });
        }

        if self.max_fps == 0 {
            return Err(ConfigError::ZeroFps);
        }

        Ok(())
    }

    /// Number of cell rows that fit on the screen
    pub fn rows(&self) -> usize {
        (self.height / self.cell_size) as usize
    }

    /// Number of cell columns that fit on the screen
    pub fn cols(&self) -> usize {
        (self.width / self.cell_size) as usize
    }

    /// Time budget of a single tick under the framerate cap
    pub fn frame_time(&self) -> Duration {
        Duration::from_millis(((1f64 / self.max_fps as f64) * 1_000f64) as u64)
    }
}
