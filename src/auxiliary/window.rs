use winit::dpi::{LogicalPosition, LogicalSize, PhysicalSize};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::auxiliary::config::Config;
use crate::auxiliary::errors::LifeError;

/// Create a window sized to a whole multiple of the configured grid and center
/// it on the current monitor.
///
/// Returns the window with its physical width and height.
pub fn create_window(
    title: &str,
    config: &Config,
    event_loop: &EventLoop<()>,
) -> Result<(Window, u32, u32), LifeError> {
    // Create a hidden window so we can estimate a good default window size
    let window = WindowBuilder::new()
        .with_visible(false)
        .with_title(title)
        .build(event_loop)?;
    let hidpi_factor = window.scale_factor();

    let width = config.window_width as f64;
    let height = config.window_height as f64;
    let (monitor_width, monitor_height) = match window.current_monitor() {
        Some(monitor) => {
            let size = monitor.size().to_logical::<f64>(hidpi_factor);
            (size.width, size.height)
        }
        None => (width, height),
    };
    // Integer scaling keeps cell edges on pixel boundaries
    let scale = (monitor_height / height * 2.0 / 3.0).floor().max(1.0);

    let min_size: LogicalSize<f64> = PhysicalSize::new(width, height).to_logical(hidpi_factor);
    let default_size = LogicalSize::new(width * scale, height * scale);
    let center = LogicalPosition::new(
        ((monitor_width - width * scale) / 2.0).max(0.0),
        ((monitor_height - height * scale) / 2.0).max(0.0),
    );
    window.set_inner_size(default_size);
    window.set_min_inner_size(Some(min_size));
    window.set_outer_position(center);
    window.set_visible(true);

    let size = default_size.to_physical::<f64>(hidpi_factor);
    Ok((window, size.width.round() as u32, size.height.round() as u32))
}
