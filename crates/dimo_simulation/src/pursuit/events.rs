//! Pursuit события

use bevy::prelude::*;

use crate::pursuit::PursuitMode;

/// Hunter сменил режим (Patrol ↔ Chase)
///
/// Пишется только на переходе, не каждый tick.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PursuitModeChanged {
    pub agent: Entity,
    pub mode: PursuitMode,
}
