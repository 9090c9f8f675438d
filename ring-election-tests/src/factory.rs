mod configs;
mod rings;

pub use configs::*;
pub use rings::*;
