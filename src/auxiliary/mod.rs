pub mod config;
pub mod errors;
pub mod randomizer;
pub mod window;
