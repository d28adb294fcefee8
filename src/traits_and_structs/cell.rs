/// One square of the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    alive: bool,
}

impl Cell {
    pub const fn new(alive: bool) -> Self {
        Self { alive }
    }

    pub fn alive(self) -> bool {
        self.alive
    }

    /// State in the next generation given the number of live neighbors (B3/S23).
    #[must_use]
    pub fn next_state(self, live_neighbors: usize) -> Self {
        let alive = match (self.alive, live_neighbors) {
            // Survival
            (true, 2) | (true, 3) => true,
            // Birth
            (false, 3) => true,
            // Under-population, overcrowding, or stays dead
            _ => false,
        };
        Self::new(alive)
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive
    }

    pub fn toggle(&mut self) {
        self.alive = !self.alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cell_survives_with_two_or_three() {
        let cell = Cell::new(true);
        for n in 0..=8 {
            assert_eq!(cell.next_state(n).alive(), n == 2 || n == 3, "n = {}", n);
        }
    }

    #[test]
    fn dead_cell_is_born_with_exactly_three() {
        let cell = Cell::default();
        for n in 0..=8 {
            assert_eq!(cell.next_state(n).alive(), n == 3, "n = {}", n);
        }
    }

    #[test]
    fn toggle_flips() {
        let mut cell = Cell::default();
        cell.toggle();
        assert!(cell.alive());
        cell.set_alive(false);
        assert!(!cell.alive());
    }
}
