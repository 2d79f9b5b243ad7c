pub mod cli;
pub mod commands;
pub mod label;
pub mod plot;
pub mod score;
pub mod segment;
pub mod utils;
