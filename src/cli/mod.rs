pub mod counters;
pub mod opts;
