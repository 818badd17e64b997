//! Зелья игрока: мгновенный top-up с клампом к max.
//!
//! Зелья не гейтятся контактом и action lock: доступность решают
//! заряды, собственный cooldown зелья и запас ниже максимума. Полный
//! ресурс — silent отказ, заряд не тратится.

use bevy::prelude::*;

use crate::combat::components::{
    AbilityPoints, Health, PotionBelt, PotionKind, ABILITY_POTION_RESTORE,
    HEALTH_POTION_RESTORE, POTION_COOLDOWN,
};
use crate::combat::events::PotionRequest;
use crate::scheduler::{secs_to_ticks, CombatScheduler, TimerAction};

use super::cooldown::COOLDOWN_TICK_SECS;

/// Система: resolve запросов зелий (отказ — silent no-op)
pub fn resolve_potions(
    mut requests: EventReader<PotionRequest>,
    mut scheduler: ResMut<CombatScheduler>,
    mut fighters: Query<(&mut PotionBelt, &mut Health, &mut AbilityPoints)>,
) {
    for request in requests.read() {
        let Ok((mut belt, mut health, mut points)) = fighters.get_mut(request.fighter) else {
            continue;
        };
        // Ресурс уже на капе: зелье нечего восполнять, заряд не тратим
        let already_full = match request.kind {
            PotionKind::Health => health.is_full(),
            PotionKind::Ability => points.is_full(),
        };
        if already_full || !belt.can_quaff(request.kind) {
            continue;
        }

        belt.consume_charge(request.kind);
        match request.kind {
            PotionKind::Health => {
                health.heal(HEALTH_POTION_RESTORE);
                crate::log(&format!(
                    "🧪 {:?} drank health potion (hp: {:.0}, charges left: {})",
                    request.fighter, health.current, belt.health_charges
                ));
            }
            PotionKind::Ability => {
                points.gain(ABILITY_POTION_RESTORE);
                crate::log(&format!(
                    "🧪 {:?} drank ability potion (points: {:.0}, charges left: {})",
                    request.fighter, points.current, belt.ability_charges
                ));
            }
        }

        belt.start_cooldown(request.kind, POTION_COOLDOWN);
        scheduler.schedule(
            secs_to_ticks(COOLDOWN_TICK_SECS),
            TimerAction::PotionCooldownTick {
                fighter: request.fighter,
                kind: request.kind,
            },
        );
    }
}
