// crates/bubblefield-layout/src/lib.rs

pub mod grid;
pub mod zones;

pub use grid::*;
pub use zones::*;
