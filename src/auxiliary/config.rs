use std::time::Duration;

use crate::auxiliary::errors::LifeError;
use crate::traits_and_structs::patterns::Seed;

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;
pub const DEFAULT_CELL_SIZE: u32 = 10;
pub const DEFAULT_DELAY_MS: u64 = 100;

/// Validated settings for one run of the visualizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub window_width: u32,
    pub window_height: u32,
    pub cell_size: u32,
    pub delay: Duration,
    pub seed: Seed,
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WIDTH,
            window_height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            seed: Seed::Blank,
            rng_seed: None,
        }
    }
}

impl Config {
    /// Both window dimensions have to be exact multiples of the cell size.
    pub fn validate(self) -> Result<Self, LifeError> {
        if self.cell_size == 0 {
            return Err(LifeError::Config("cell size must be positive".to_string()));
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(LifeError::Config(format!(
                "window must not be empty, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        for (name, value) in [("width", self.window_width), ("height", self.window_height)] {
            if value % self.cell_size != 0 {
                return Err(LifeError::Config(format!(
                    "window {} {} is not a multiple of cell size {}",
                    name, value, self.cell_size
                )));
            }
        }
        Ok(self)
    }

    /// Number of cells across
    pub fn cells_wide(&self) -> usize {
        (self.window_width / self.cell_size) as usize
    }

    /// Number of cells down
    pub fn cells_high(&self) -> usize {
        (self.window_height / self.cell_size) as usize
    }
}
