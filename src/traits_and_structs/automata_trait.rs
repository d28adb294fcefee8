/// Operations the driver loop needs from a drawable, editable automaton.
pub trait CellAutomata {
    /// Paint into an RGBA frame whose cells are `cell_size` pixels square.
    fn draw(&self, screen: &mut [u8], cell_size: usize);
    fn set_line(&mut self, x0: isize, y0: isize, x1: isize, y1: isize, alive: bool);
    /// Flip one cell, returning its new state. Out of range is a no-op returning `false`.
    fn toggle(&mut self, x: isize, y: isize) -> bool;
    fn invert(&mut self);
    fn clear(&mut self);
    fn describe() -> String;
}
