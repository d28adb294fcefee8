use core::fmt::Display;
use std::error::Error;

/// Everything that can stop the visualizer before or while it opens its window.
#[derive(Debug)]
pub enum LifeError {
    /// Window or cell dimensions that cannot form a grid
    Config(String),
    /// Seed pattern name that is not known
    UnknownPattern(String),
    /// Reading the selection menu from stdin failed
    Io(std::io::Error),
    /// The OS could not provide entropy to seed the generator
    Entropy(getrandom::Error),
    /// Window creation failed
    Window(winit::error::OsError),
    /// Pixel surface creation failed
    Pixels(pixels::Error),
}

impl Display for LifeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LifeError::Config(msg) => write!(f, "invalid configuration: {}", msg),
            LifeError::UnknownPattern(name) => write!(f, "unknown pattern: {:?}", name),
            LifeError::Io(e) => write!(f, "failed to read input: {}", e),
            LifeError::Entropy(e) => write!(f, "failed to getrandom: {}", e),
            LifeError::Window(e) => write!(f, "failed to create window: {}", e),
            LifeError::Pixels(e) => write!(f, "failed to create pixel surface: {}", e),
        }
    }
}

impl Error for LifeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LifeError::Io(e) => Some(e),
            LifeError::Entropy(e) => Some(e),
            LifeError::Window(e) => Some(e),
            LifeError::Pixels(e) => Some(e),
            LifeError::Config(_) | LifeError::UnknownPattern(_) => None,
        }
    }
}

impl From<std::io::Error> for LifeError {
    fn from(value: std::io::Error) -> Self {
        LifeError::Io(value)
    }
}

impl From<getrandom::Error> for LifeError {
    fn from(value: getrandom::Error) -> Self {
        LifeError::Entropy(value)
    }
}

impl From<winit::error::OsError> for LifeError {
    fn from(value: winit::error::OsError) -> Self {
        LifeError::Window(value)
    }
}

impl From<pixels::Error> for LifeError {
    fn from(value: pixels::Error) -> Self {
        LifeError::Pixels(value)
    }
}
