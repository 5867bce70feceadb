//! Configuration: environment-driven settings plus the constants and
//! response messages shared across layers.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
