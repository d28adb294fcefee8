#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::time::Instant;

use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use randomize::PCG32;
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::Window;
use winit_input_helper::WinitInputHelper;

use crate::auxiliary::config::Config;
use crate::auxiliary::errors::LifeError;
use crate::auxiliary::randomizer::new_rng;
use crate::auxiliary::window::create_window;
use crate::traits_and_structs::automata_trait::CellAutomata;
use crate::traits_and_structs::board::Board;
use crate::traits_and_structs::patterns::Seed;

/// Rendering context for one window. Lives exactly as long as the event loop.
pub struct Canvas {
    pixels: Pixels,
    cell_size: usize,
}

impl Canvas {
    pub fn new(
        window: &Window,
        surface_width: u32,
        surface_height: u32,
        config: &Config,
    ) -> Result<Self, LifeError> {
        let surface_texture = SurfaceTexture::new(surface_width, surface_height, window);
        let pixels = Pixels::new(config.window_width, config.window_height, surface_texture)?;
        Ok(Self {
            pixels,
            cell_size: config.cell_size as usize,
        })
    }

    pub fn paint(&mut self, board: &Board) -> Result<(), pixels::Error> {
        board.draw(self.pixels.get_frame(), self.cell_size);
        self.pixels.render()
    }

    /// Board coordinate under a window position, clamped to the board.
    pub fn cell_at(&self, position: (f32, f32)) -> (isize, isize) {
        let (px, py) = self
            .pixels
            .window_pos_to_pixel(position)
            .unwrap_or_else(|pos| self.pixels.clamp_pixel_pos(pos));
        ((px / self.cell_size) as isize, (py / self.cell_size) as isize)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.pixels.resize_surface(width, height);
    }
}

/// The current generation and how many ticks produced it.
#[derive(Clone, Debug)]
pub struct Life {
    board: Board,
    generation: u64,
}

impl Life {
    pub fn new(board: Board) -> Self {
        Self { board, generation: 0 }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the board with its successor.
    pub fn tick(&mut self) {
        self.board = self.board.step();
        self.generation += 1;
        debug!(
            "generation {} has {} live cells",
            self.generation,
            self.board.live_count()
        );
    }

    /// Start over from a new board at generation zero.
    pub fn restart(&mut self, board: Board) {
        self.board = board;
        self.generation = 0;
    }

    /// Kill every cell and start counting generations again.
    pub fn clear(&mut self) {
        self.board.clear();
        self.generation = 0;
    }

    pub fn title(&self, seed: Seed) -> String {
        format!(
            "Game Of Life - {} - generation {} - population {}",
            seed,
            self.generation,
            self.board.live_count()
        )
    }
}

fn reseed(life: &mut Life, seed: Seed, rng: &mut PCG32) -> Result<(), LifeError> {
    let (width, height) = (life.board().width(), life.board().height());
    life.restart(seed.build(width, height, rng)?);
    Ok(())
}

/// Open the window and run generations until the user quits.
pub fn run_life(config: Config) -> Result<(), LifeError> {
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();
    let (window, p_width, p_height) = create_window("Game Of Life", &config, &event_loop)?;

    let mut canvas = Canvas::new(&window, p_width, p_height, &config)?;
    let mut rng = new_rng(config.rng_seed)?;
    let board = config
        .seed
        .build(config.cells_wide(), config.cells_high(), &mut rng)?;
    let mut life = Life::new(board);
    info!(
        "starting {} on a {}x{} board, one generation every {:?}",
        config.seed,
        config.cells_wide(),
        config.cells_high(),
        config.delay
    );
    window.set_title(&life.title(config.seed));

    let mut paused = false;
    let mut next_tick = Instant::now() + config.delay;
    let mut draw_state: Option<bool> = None;

    event_loop.run(move |event, _, control_flow| {
        if let Event::RedrawRequested(_) = event {
            if canvas
                .paint(life.board())
                .map_err(|e| error!("pixels.render() failed: {}", e))
                .is_err()
            {
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        // winit_input_helper returns `true` once all pending events are collected.
        if input.update(&event) {
            if input.key_pressed(VirtualKeyCode::Escape)
                || input.key_pressed(VirtualKeyCode::Q)
                || input.quit()
            {
                info!("quit after {} generations", life.generation());
                *control_flow = ControlFlow::Exit;
                return;
            }
            let mut edited = false;
            if input.key_pressed(VirtualKeyCode::P) {
                paused = !paused;
                info!("{}", if paused { "paused" } else { "unpaused" });
                next_tick = Instant::now() + config.delay;
            }
            if input.key_pressed(VirtualKeyCode::R) {
                info!("reset with random conditions");
                if let Err(e) = reseed(&mut life, Seed::Random, &mut rng) {
                    error!("reseed failed: {}", e);
                }
                edited = true;
            }
            if input.key_pressed(VirtualKeyCode::S) {
                info!("restart from {}", config.seed);
                if let Err(e) = reseed(&mut life, config.seed, &mut rng) {
                    error!("restart failed: {}", e);
                }
                edited = true;
            }
            if input.key_pressed(VirtualKeyCode::C) {
                info!("board cleared");
                life.clear();
                edited = true;
            }
            if input.key_pressed(VirtualKeyCode::I) {
                info!("board inverted");
                life.board_mut().invert();
                edited = true;
            }

            // Mouse editing: a click toggles a cell, dragging paints lines of the
            // state that click produced.
            let (mouse_cell, mouse_prev_cell) = input
                .mouse()
                .map(|(mx, my)| {
                    let (dx, dy) = input.mouse_diff();
                    (canvas.cell_at((mx, my)), canvas.cell_at((mx - dx, my - dy)))
                })
                .unwrap_or_default();

            if input.mouse_pressed(0) {
                debug!("Mouse click at {:?}", mouse_cell);
                draw_state = Some(life.board_mut().toggle(mouse_cell.0, mouse_cell.1));
                edited = true;
            } else if let Some(draw_alive) = draw_state {
                let release = input.mouse_released(0);
                let held = input.mouse_held(0);
                if release || held {
                    debug!("Draw {:?} => {:?} as {:?}", mouse_prev_cell, mouse_cell, draw_alive);
                    life.board_mut().set_line(
                        mouse_prev_cell.0,
                        mouse_prev_cell.1,
                        mouse_cell.0,
                        mouse_cell.1,
                        draw_alive,
                    );
                    edited = true;
                }
                if release || !held {
                    draw_state = None;
                }
            }

            if let Some(size) = input.window_resized() {
                canvas.resize(size.width, size.height);
            }

            let now = Instant::now();
            if input.key_pressed(VirtualKeyCode::Space) {
                // Space is frame-step, so ensure we're paused
                paused = true;
                life.tick();
                edited = true;
            } else if !paused && now >= next_tick {
                life.tick();
                next_tick = now + config.delay;
                edited = true;
            }

            if edited {
                window.set_title(&life.title(config.seed));
            }
            *control_flow = if paused {
                ControlFlow::Wait
            } else {
                ControlFlow::WaitUntil(next_tick)
            };
            window.request_redraw();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits_and_structs::patterns::Pattern;

    #[test]
    fn tick_advances_generation_and_replaces_board() {
        let mut life = Life::new(Board::with_pattern(10, 10, Pattern::RPentomino));
        let before = life.board().clone();
        life.tick();
        assert_eq!(life.generation(), 1);
        assert_eq!(life.board(), &before.step());
        life.tick();
        assert_eq!(life.generation(), 2);
    }

    #[test]
    fn restart_resets_generation() {
        let mut life = Life::new(Board::blank(4, 4));
        life.tick();
        life.tick();
        let mut rng: PCG32 = (9_u64, 1_u64).into();
        reseed(&mut life, Seed::Acorn, &mut rng).unwrap();
        assert_eq!(life.generation(), 0);
        assert_eq!(life.board().live_count(), 4, "acorn is clipped on a 4x4 board");
        assert_eq!((life.board().width(), life.board().height()), (4, 4));
    }

    #[test]
    fn title_reports_progress() {
        let mut life = Life::new(Board::with_pattern(20, 20, Pattern::Acorn));
        assert_eq!(
            life.title(Seed::Acorn),
            "Game Of Life - acorn - generation 0 - population 7"
        );
        life.tick();
        assert!(life.title(Seed::Acorn).contains("generation 1"));
    }

    #[test]
    fn clear_kills_every_cell_and_resets_generation() {
        let mut rng: PCG32 = (11_u64, 1_u64).into();
        let mut life = Life::new(Seed::Random.build(12, 8, &mut rng).unwrap());
        life.tick();
        life.clear();
        assert_eq!(life.generation(), 0);
        assert_eq!(life.board().live_count(), 0);
        assert_eq!(life.board(), &Board::blank(12, 8));
    }
}
