pub mod counts;
pub mod error;
pub mod load;
pub mod plot;
pub mod ratio;
pub mod scan;
pub mod source;
pub mod write;
