//! Core type aliases and re-exports

pub use glam::{IVec2, Vec2};

/// Standard Result type for the engine
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;
