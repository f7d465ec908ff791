pub mod cli;
pub mod gc;
