// Window and event loop follow the pixels conway example
//https://github.com/parasyte/pixels/tree/c2454b01abc11c007d4b9de8525195af942fef0d/examples/conway

use std::io;
use std::time::Duration;

use clap::Parser;
use log::info;

mod auxiliary;
mod projects;
mod traits_and_structs;

use auxiliary::config::{Config, DEFAULT_CELL_SIZE, DEFAULT_DELAY_MS, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use auxiliary::errors::LifeError;
use traits_and_structs::automata_trait::CellAutomata;
use traits_and_structs::board::Board;
use traits_and_structs::patterns::Seed;

/// Conway's Game of Life in a pixel window
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct CLIArgs {
    /// Window width in pixels, a multiple of the cell size
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Window height in pixels, a multiple of the cell size
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Side length of one cell in pixels
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: u32,

    /// Milliseconds between generations
    #[arg(short, long, default_value_t = DEFAULT_DELAY_MS)]
    delay_ms: u64,

    /// Starting board. Asked for interactively when omitted
    #[arg(short, long, value_enum)]
    seed: Option<Seed>,

    /// Fixed state for the random generator, for repeatable random boards
    #[arg(long)]
    rng_seed: Option<u64>,
}

impl CLIArgs {
    fn into_config(self, seed: Seed) -> Result<Config, LifeError> {
        Config {
            window_width: self.width,
            window_height: self.height,
            cell_size: self.cell_size,
            delay: Duration::from_millis(self.delay_ms),
            seed,
            rng_seed: self.rng_seed,
        }
        .validate()
    }
}

/// Ask on stdin which board to start from. `None` means the user quit.
fn select_seed() -> Result<Option<Seed>, LifeError> {
    println!("\n{}", Board::describe());
    loop {
        println!("\n\nWhich board would you like to start from?\n");
        for (i, seed) in Seed::ALL.iter().enumerate() {
            println!("{}) {}", i + 1, seed);
        }
        let mut val = String::new();
        if io::stdin().read_line(&mut val)? == 0 {
            return Ok(None);
        }

        let v = val.trim();

        if v == "q" || v == "quit" {
            return Ok(None);
        }

        match Seed::from_menu(v) {
            Some(seed) => return Ok(Some(seed)),
            None => println!("\nERROR: Must input a number from the list or 'q'."),
        }
    }
}

fn main() -> Result<(), LifeError> {
    env_logger::init();
    let args = CLIArgs::parse();

    let seed = match args.seed {
        Some(seed) => seed,
        None => {
            println!("\nWelcome to the Game of Life!\nType 'q' to quit.");
            match select_seed()? {
                Some(seed) => seed,
                None => return Ok(()),
            }
        }
    };
    // Fail on a bad grid before any window exists
    let config = args.into_config(seed)?;
    info!("configuration: {:?}", config);

    println!(
        "\n\nControls:\nP: pause\nSPACE: frame by frame\nR: randomize\n\
         S: restart from the chosen seed\nC: clear\nI: invert\nMOUSE: draw\nQ/ESC: quit"
    );
    projects::life::run_life(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_build_a_config() {
        let args = CLIArgs::parse_from([
            "pixel_life",
            "--width",
            "200",
            "--height",
            "100",
            "-c",
            "5",
            "--seed",
            "r-pentomino",
        ]);
        let seed = args.seed.unwrap();
        assert_eq!(seed, Seed::RPentomino);
        let config = args.into_config(seed).unwrap();
        assert_eq!((config.cells_wide(), config.cells_high()), (40, 20));
        assert_eq!(config.delay, Duration::from_millis(DEFAULT_DELAY_MS));
    }

    #[test]
    fn bad_grid_is_rejected_at_startup() {
        let args = CLIArgs::parse_from(["pixel_life", "--width", "205", "--seed", "blank"]);
        assert!(matches!(args.into_config(Seed::Blank), Err(LifeError::Config(_))));
    }

    #[test]
    fn unknown_seed_fails_to_parse() {
        assert!(CLIArgs::try_parse_from(["pixel_life", "--seed", "glider"]).is_err());
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        CLIArgs::command().debug_assert();
    }
}
