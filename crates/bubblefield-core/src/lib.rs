// crates/bubblefield-core/src/lib.rs
pub mod config;
pub mod events;
pub mod geometry;
pub mod state;

pub use config::*;
pub use events::*;
pub use geometry::*;
pub use state::*;

#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    #[error("Unknown item: {0}")]
    UnknownItem(String),
}

pub type Result<T> = std::result::Result<T, FieldError>;
