//! AI events — perception от engine-слоя.
//!
//! Sight cone и hearing volumes живут в движке; симуляция получает
//! их уже типизированными событиями.

use bevy::prelude::*;

/// Perception события (sight / hearing)
#[derive(Event, Debug, Clone)]
pub enum PerceptionEvent {
    /// Противник замечен (вошёл в конус зрения)
    OpponentSeen { observer: Entity, target: Entity },
    /// Слышен шум (location — источник, volume — громкость 0..1)
    NoiseHeard {
        observer: Entity,
        location: Vec3,
        volume: f32,
    },
}
