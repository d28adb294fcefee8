pub mod automata_trait;
pub mod board;
pub mod cell;
pub mod patterns;
