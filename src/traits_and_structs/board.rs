use randomize::PCG32;

use crate::auxiliary::errors::LifeError;
use crate::traits_and_structs::automata_trait::CellAutomata;
use crate::traits_and_structs::cell::Cell;
use crate::traits_and_structs::patterns::Pattern;

const INITIAL_FILL: f32 = 0.5;

pub const GRID_COLOR: [u8; 4] = [40, 40, 40, 0xff];
pub const LIVE_COLOR: [u8; 4] = [0x00, 0xb0, 0x40, 0xff];
pub const DEAD_COLOR: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

/// The eight surrounding positions. The cell itself is not among them.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A finite Game of Life lattice stored row-major.
///
/// Coordinates outside `0..width` by `0..height` do not exist: lookups there
/// return `None` and neighbors past the edge count as dead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Board {
    pub fn blank(width: usize, height: usize) -> Self {
        assert!(width != 0 && height != 0);
        let size = width.checked_mul(height).expect("too big");
        Self {
            cells: vec![Cell::default(); size],
            width,
            height,
        }
    }

    /// Every cell alive with probability one half.
    pub fn random_seed(width: usize, height: usize, rng: &mut PCG32) -> Self {
        let mut result = Self::blank(width, height);
        result.randomize(rng);
        result
    }

    /// Stamp the named pattern on a blank board.
    pub fn fixed_pattern(
        width: usize,
        height: usize,
        pattern_name: &str,
    ) -> Result<Self, LifeError> {
        let pattern: Pattern = pattern_name.parse()?;
        Ok(Self::with_pattern(width, height, pattern))
    }

    /// Cells that would land off a small board are dropped.
    pub fn with_pattern(width: usize, height: usize, pattern: Pattern) -> Self {
        let mut result = Self::blank(width, height);
        let (cx, cy) = ((width / 2) as isize, (height / 2) as isize);
        for &(dx, dy) in pattern.offsets() {
            result.set(cx + dx, cy + dy, true);
        }
        result
    }

    pub fn randomize(&mut self, rng: &mut PCG32) {
        for c in self.cells.iter_mut() {
            let alive = randomize::f32_half_open_right(rng.next_u32()) < INITIAL_FILL;
            *c = Cell::new(alive);
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: isize, y: isize) -> Option<bool> {
        self.grid_idx(x, y).map(|i| self.cells[i].alive())
    }

    /// Returns `false` when the coordinate is off the board.
    pub fn set(&mut self, x: isize, y: isize, alive: bool) -> bool {
        match self.grid_idx(x, y) {
            Some(i) => {
                self.cells[i].set_alive(alive);
                true
            }
            None => false,
        }
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.alive()).count()
    }

    pub fn live_neighbors(&self, x: usize, y: usize) -> usize {
        let (x, y) = (x as isize, y as isize);
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| self.get(x + dx, y + dy).unwrap_or(false))
            .count()
    }

    /// Compute the next generation.
    ///
    /// Every cell reads from `self` and writes into a fresh board, so no
    /// decision sees a partially updated generation.
    #[must_use]
    pub fn step(&self) -> Board {
        let cells = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| self.cells[x + y * self.width].next_state(self.live_neighbors(x, y)))
            .collect();
        Board {
            cells,
            width: self.width,
            height: self.height,
        }
    }

    fn grid_idx<I: std::convert::TryInto<usize>>(&self, x: I, y: I) -> Option<usize> {
        if let (Ok(x), Ok(y)) = (x.try_into(), y.try_into()) {
            if x < self.width && y < self.height {
                Some(x + y * self.width)
            } else {
                None
            }
        } else {
            None
        }
    }
}

impl CellAutomata for Board {
    fn draw(&self, screen: &mut [u8], cell_size: usize) {
        let frame_width = self.width * cell_size;
        debug_assert_eq!(screen.len(), 4 * self.cells.len() * cell_size * cell_size);
        // At one pixel per cell there is no room for grid lines
        let lines = cell_size > 1;
        for (i, pix) in screen.chunks_exact_mut(4).enumerate() {
            let (px, py) = (i % frame_width, i / frame_width);
            let color = if lines && (px % cell_size == 0 || py % cell_size == 0) {
                GRID_COLOR
            } else if self.cells[px / cell_size + (py / cell_size) * self.width].alive() {
                LIVE_COLOR
            } else {
                DEAD_COLOR
            };
            pix.copy_from_slice(&color);
        }
    }

    fn set_line(&mut self, x0: isize, y0: isize, x1: isize, y1: isize, alive: bool) {
        // Clamp the start and draw until the line leaves the board.
        let x0 = x0.max(0).min(self.width as isize);
        let y0 = y0.max(0).min(self.height as isize);
        for (x, y) in line_drawing::Bresenham::new((x0, y0), (x1, y1)) {
            if let Some(i) = self.grid_idx(x, y) {
                self.cells[i].set_alive(alive);
            } else {
                break;
            }
        }
    }

    fn toggle(&mut self, x: isize, y: isize) -> bool {
        if let Some(i) = self.grid_idx(x, y) {
            self.cells[i].toggle();
            self.cells[i].alive()
        } else {
            false
        }
    }

    fn invert(&mut self) {
        for c in self.cells.iter_mut() {
            c.toggle();
        }
    }

    fn clear(&mut self) {
        for c in self.cells.iter_mut() {
            *c = Cell::default();
        }
    }

    fn describe() -> String {
        "Conway's Game of Life: a live cell survives with two or three live neighbors, \
         a dead cell with exactly three comes alive, every other cell dies or stays dead."
            .to_string()
    }
}
