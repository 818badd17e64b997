//! Combat system module (engine-driven combat architecture)
//!
//! ECS ответственность:
//! - Game state: Health, AbilityPoints, SkillCooldowns, ActionLock, PotionBelt
//! - Combat rules: precondition gate, cost/damage/cooldown таблицы
//! - Events: ActivationRequest → ActionResolved / DamageDealt → FighterDied
//!
//! Engine ответственность (вне crate):
//! - Contact volumes: overlap detection → ContactEvent
//! - Input: скиллы и зелья игрока → ActivationRequest / PotionRequest
//! - Навигация: исполнение MovementCommand

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

// Re-export основных типов
pub use components::*;
pub use events::*;

use crate::scheduler::{advance_scheduler, CombatScheduler, TimerFired};
use crate::SimulationSet;

/// Combat Plugin (engine-driven architecture)
///
/// Регистрирует combat системы в FixedUpdate (60Hz).
///
/// Порядок выполнения:
/// 1. arm_regen_for_spawned + advance_scheduler — тик очереди таймеров
/// 2. track_contact — ContactEvent → ActionLock флаги
/// 3. dispatch_regen / dispatch_cooldowns — таймерные цепочки
/// 4. resolve_potions / resolve_activations — precondition gate
/// 5. apply_damage → handle_death — урон и удаление из мира
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatScheduler>();

        // Регистрация событий
        app.add_event::<TimerFired>()
            .add_event::<ActivationRequest>()
            .add_event::<ActionResolved>()
            .add_event::<DamageDealt>()
            .add_event::<FighterDied>()
            .add_event::<ContactEvent>()
            .add_event::<PotionRequest>();

        // Регистрация систем в FixedUpdate
        app.add_systems(
            FixedUpdate,
            (
                // Фаза 0: очередь таймеров (взвод для новых бойцов, затем тик)
                (systems::arm_regen_for_spawned, advance_scheduler)
                    .chain()
                    .in_set(SimulationSet::Timers),
                (
                    // Фаза 1: contact флаги
                    systems::track_contact,

                    // Фаза 2: таймерные цепочки (regen, cooldowns, unlock)
                    systems::dispatch_regen,
                    systems::dispatch_cooldowns,

                    // Фаза 3: resolve (зелья вне гейта, активации через гейт)
                    systems::resolve_potions,
                    systems::resolve_activations,

                    // Фаза 4: урон и смерть
                    systems::apply_damage,
                    systems::handle_death,
                )
                    .chain()
                    .in_set(SimulationSet::Combat),
            ),
        );
    }
}
