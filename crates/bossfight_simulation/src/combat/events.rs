//! Combat events — typed интерфейс между движком, input слоем и боем.
//!
//! Вход: ContactEvent (overlap volumes движка), ActivationRequest и
//! PotionRequest (player input или AI pre-swing).
//! Выход: ActionResolved, DamageDealt, FighterDied.

use bevy::prelude::*;

use crate::combat::components::{ActionKind, PotionKind};

/// Запрос активации боевого действия
#[derive(Event, Debug, Clone)]
pub struct ActivationRequest {
    pub fighter: Entity,
    pub action: ActionKind,
}

/// Результат resolve активации
///
/// Отказ для вызывающего — silent no-op; событие нужно AI для
/// post-swing учёта (сброс контакта, возврат в Pursue/Wander).
#[derive(Event, Debug, Clone)]
pub struct ActionResolved {
    pub fighter: Entity,
    pub action: ActionKind,
    pub accepted: bool,
}

/// Урон нанесён (resolver → apply_damage)
#[derive(Event, Debug, Clone)]
pub struct DamageDealt {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: f32,
    pub action: ActionKind,
}

/// Боец умер (health <= 0); эмитится ровно один раз на бойца
#[derive(Event, Debug, Clone)]
pub struct FighterDied {
    pub fighter: Entity,
    pub killer: Option<Entity>,
}

/// Overlap события contact volumes (от engine-слоя)
#[derive(Event, Debug, Clone)]
pub enum ContactEvent {
    /// Боец вошёл в contact volume `other`
    Entered { fighter: Entity, other: Entity },
    /// Боец вышел из contact volume `other`
    Exited { fighter: Entity, other: Entity },
}

/// Запрос зелья (player input)
#[derive(Event, Debug, Clone)]
pub struct PotionRequest {
    pub fighter: Entity,
    pub kind: PotionKind,
}
