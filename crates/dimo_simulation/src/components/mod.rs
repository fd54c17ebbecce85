//! ECS Components, общие для hunter'а и trigger'ов
//!
//! Организация по доменам:
//! - world: границы комнаты (RoomBounds)
//! - player: player marker, collision tag, kinematic body marker
//! - animation: animation-parameter sink (AnimationParams, AnimationSink)

pub mod animation;
pub mod player;
pub mod world;


// Re-exports для удобного импорта
pub use animation::*;
pub use player::*;
pub use world::*;
