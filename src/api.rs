mod argument;
mod config;
mod validation;

pub use argument::*;
pub use config::*;
pub use validation::*;
