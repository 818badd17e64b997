//! Применение урона и смерть бойца.

use bevy::prelude::*;

use crate::combat::components::Health;
use crate::combat::events::{DamageDealt, FighterDied};

/// Система: применение урона к Health цели
///
/// Health не клампится снизу. Death edge (alive → не alive) эмитит
/// FighterDied ровно один раз, сколько бы урона ни пришло после.
pub fn apply_damage(
    mut damage_events: EventReader<DamageDealt>,
    mut died_events: EventWriter<FighterDied>,
    mut targets: Query<&mut Health>,
) {
    for event in damage_events.read() {
        if event.attacker == event.target {
            continue;
        }
        // Цель могла быть уже удалена из мира
        let Ok(mut health) = targets.get_mut(event.target) else {
            continue;
        };

        let was_alive = health.is_alive();
        health.apply_damage(event.damage);

        crate::log(&format!(
            "💥 {:?} hit {:?} with {:?} for {:.0} (hp: {:.0})",
            event.attacker, event.target, event.action, event.damage, health.current
        ));

        if was_alive && !health.is_alive() {
            died_events.write(FighterDied {
                fighter: event.target,
                killer: Some(event.attacker),
            });
            crate::log(&format!("💀 {:?} died (hp: {:.0})", event.target, health.current));
        }
    }
}

/// Система: удаление умершего бойца из мира (terminal)
pub fn handle_death(mut commands: Commands, mut died_events: EventReader<FighterDied>) {
    for event in died_events.read() {
        if let Ok(mut entity_commands) = commands.get_entity(event.fighter) {
            entity_commands.despawn();
            crate::log(&format!("🪦 {:?} removed from the world", event.fighter));
        }
    }
}
