//! Core engine types: RNG, configuration and table layout constants.

pub mod config;
pub mod rng;

pub use config::{EngineConfig, CASCADE_COUNT, DECK_SIZE, FOUNDATION_COUNT, FREECELL_COUNT};
pub use rng::GameRng;
