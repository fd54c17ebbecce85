//! Pursuit systems

pub mod tick;

// Re-export all systems
pub use tick::*;
