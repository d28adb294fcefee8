use std::fmt;
use std::str::FromStr;

use randomize::PCG32;

use crate::auxiliary::errors::LifeError;
use crate::traits_and_structs::board::Board;

/// Small fixed shapes stamped around the center of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    RPentomino,
    Acorn,
}

impl Pattern {
    pub const ALL: [Pattern; 2] = [Pattern::RPentomino, Pattern::Acorn];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::RPentomino => "r-pentomino",
            Pattern::Acorn => "acorn",
        }
    }

    /// Live cells relative to the board center, y pointing down.
    pub fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Pattern::RPentomino => &[(0, -1), (1, -1), (-1, 0), (0, 0), (0, 1)],
            Pattern::Acorn => &[(-3, 1), (-2, 1), (1, 1), (2, 1), (3, 1), (-2, -1), (0, 0)],
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Pattern {
    type Err = LifeError;

    /// Case-insensitive; `-`, `_` and spaces are ignored so "R_Pentomino" matches.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = name_key(s);
        Pattern::ALL
            .into_iter()
            .find(|p| name_key(p.name()) == key)
            .ok_or_else(|| LifeError::UnknownPattern(s.to_string()))
    }
}

fn name_key(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(*c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// How the first generation is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Seed {
    Blank,
    Random,
    RPentomino,
    Acorn,
}

impl Seed {
    pub const ALL: [Seed; 4] = [Seed::Blank, Seed::Random, Seed::RPentomino, Seed::Acorn];

    pub fn name(self) -> &'static str {
        match self {
            Seed::Blank => "blank",
            Seed::Random => "random",
            Seed::RPentomino => Pattern::RPentomino.name(),
            Seed::Acorn => Pattern::Acorn.name(),
        }
    }

    /// Map a numbered menu entry ("1" to "4") to a seed.
    pub fn from_menu(input: &str) -> Option<Seed> {
        let n: usize = input.trim().parse().ok()?;
        n.checked_sub(1).and_then(|i| Seed::ALL.get(i).copied())
    }

    pub fn build(self, width: usize, height: usize, rng: &mut PCG32) -> Result<Board, LifeError> {
        let board = match self {
            Seed::Blank => Board::blank(width, height),
            Seed::Random => Board::random_seed(width, height, rng),
            Seed::RPentomino | Seed::Acorn => Board::fixed_pattern(width, height, self.name())?,
        };
        Ok(board)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_loosely() {
        for name in ["r-pentomino", "R_Pentomino", "r pentomino", "RPENTOMINO"] {
            assert_eq!(name.parse::<Pattern>().unwrap(), Pattern::RPentomino);
        }
        assert_eq!("Acorn".parse::<Pattern>().unwrap(), Pattern::Acorn);
        for p in Pattern::ALL {
            assert_eq!(p.to_string().parse::<Pattern>().unwrap(), p);
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        match "glider".parse::<Pattern>() {
            Err(LifeError::UnknownPattern(name)) => assert_eq!(name, "glider"),
            other => panic!("expected UnknownPattern, got {:?}", other),
        }
    }

    #[test]
    fn menu_entries() {
        assert_eq!(Seed::from_menu("1"), Some(Seed::Blank));
        assert_eq!(Seed::from_menu(" 2\n"), Some(Seed::Random));
        assert_eq!(Seed::from_menu("3"), Some(Seed::RPentomino));
        assert_eq!(Seed::from_menu("4"), Some(Seed::Acorn));
        assert_eq!(Seed::from_menu("0"), None);
        assert_eq!(Seed::from_menu("5"), None);
        assert_eq!(Seed::from_menu("acorn"), None);
    }

    #[test]
    fn seeds_build_boards_of_the_requested_size() {
        let mut rng: PCG32 = (7_u64, 1_u64).into();
        for seed in Seed::ALL {
            let board = seed.build(20, 10, &mut rng).unwrap();
            assert_eq!((board.width(), board.height()), (20, 10), "{}", seed);
        }
        assert_eq!(Seed::Blank.build(20, 10, &mut rng).unwrap().live_count(), 0);
    }

    #[test]
    fn pattern_seeds_stamp_through_the_named_lookup() {
        let mut rng: PCG32 = (7_u64, 1_u64).into();
        let cases = [
            (Seed::RPentomino, Pattern::RPentomino, 5),
            (Seed::Acorn, Pattern::Acorn, 7),
        ];
        for (seed, pattern, live) in cases {
            let board = seed.build(20, 10, &mut rng).unwrap();
            assert_eq!(board, Board::fixed_pattern(20, 10, pattern.name()).unwrap());
            assert_eq!(board.live_count(), live, "{}", seed);
        }
    }

    #[test]
    fn every_seed_name_that_is_a_pattern_parses() {
        let patterns: Vec<Pattern> = Seed::ALL
            .iter()
            .filter_map(|seed| seed.name().parse::<Pattern>().ok())
            .collect();
        assert_eq!(patterns, Pattern::ALL.to_vec());
        assert!(Seed::Random.name().parse::<Pattern>().is_err());
    }
}
