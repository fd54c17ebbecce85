//! Animation-parameter sink
//!
//! ECS не блендит анимации сам: системы пишут именованные параметры в
//! `AnimationParams`, а renderer bridge читает их и применяет к своему
//! animator'у. Обратно bridge сообщает "идёт transition" по слою.

use bevy::prelude::*;
use std::collections::{HashMap, HashSet};

/// Имена параметров animator'а hunter'а
pub mod params {
    pub const ON_GROUND: &str = "OnGround";
    pub const MOVE: &str = "Move";
    pub const ATTACK: &str = "Attack";
    pub const PITCH: &str = "Pitch";
}

/// Значение `Move` для режима полёта
pub const FLIGHT_MOVE_MODE: i32 = 2;

/// Базовый слой animator'а
pub const BASE_LAYER: usize = 0;

/// Куда core-логика пишет анимационные параметры
///
/// Trait, а не прямой доступ к компоненту — чтобы core тестировался
/// с fake sink'ом без App.
pub trait AnimationSink {
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_integer(&mut self, name: &str, value: i32);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_trigger(&mut self, name: &str);
    /// Animator сейчас в transition на этом слое
    fn is_in_transition(&self, layer: usize) -> bool;
}

/// Параметры animator'а entity (mirror для renderer bridge)
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct AnimationParams {
    bools: HashMap<String, bool>,
    integers: HashMap<String, i32>,
    floats: HashMap<String, f32>,
    /// Выставленные, но ещё не прочитанные bridge'ем triggers
    pending_triggers: HashSet<String>,
    /// Слои, на которых bridge сообщил transition
    transitioning_layers: HashSet<usize>,
}

impl AnimationParams {
    pub fn bool(&self, name: &str) -> Option<bool> {
        self.bools.get(name).copied()
    }

    pub fn integer(&self, name: &str) -> Option<i32> {
        self.integers.get(name).copied()
    }

    pub fn float(&self, name: &str) -> Option<f32> {
        self.floats.get(name).copied()
    }

    pub fn is_trigger_pending(&self, name: &str) -> bool {
        self.pending_triggers.contains(name)
    }

    /// Bridge забирает trigger (consume): true если он был выставлен
    pub fn take_trigger(&mut self, name: &str) -> bool {
        self.pending_triggers.remove(name)
    }

    /// Bridge сообщает состояние transition на слое
    pub fn set_transitioning(&mut self, layer: usize, transitioning: bool) {
        if transitioning {
            self.transitioning_layers.insert(layer);
        } else {
            self.transitioning_layers.remove(&layer);
        }
    }
}

impl AnimationSink for AnimationParams {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.bools.insert(name.to_owned(), value);
    }

    fn set_integer(&mut self, name: &str, value: i32) {
        self.integers.insert(name.to_owned(), value);
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.floats.insert(name.to_owned(), value);
    }

    fn set_trigger(&mut self, name: &str) {
        self.pending_triggers.insert(name.to_owned());
    }

    fn is_in_transition(&self, layer: usize) -> bool {
        self.transitioning_layers.contains(&layer)
    }
}
