//! Регенерация ability points (retrigger-on-cap).
//!
//! RegenTick: +1 point каждые regen_interval ниже капа. На капе цепочка
//! останавливается и вместо неё заводится RegenPoll (regen_poll_interval),
//! который перевзводит RegenTick как только points снова ниже капа.

use bevy::prelude::*;

use crate::combat::components::{AbilityPoints, FighterConfig};
use crate::scheduler::{secs_to_ticks, CombatScheduler, TimerAction, TimerFired};

/// Система: взвод regen цепочки для свежезаспавненного бойца
pub fn arm_regen_for_spawned(
    mut scheduler: ResMut<CombatScheduler>,
    spawned: Query<(Entity, &FighterConfig), Added<FighterConfig>>,
) {
    for (entity, config) in spawned.iter() {
        scheduler.schedule(
            secs_to_ticks(config.regen_interval),
            TimerAction::RegenTick { fighter: entity },
        );
        crate::log(&format!(
            "🔋 {:?} regen armed (every {:.1}s)",
            entity, config.regen_interval
        ));
    }
}

/// Система: dispatch RegenTick / RegenPoll
pub fn dispatch_regen(
    mut fired_events: EventReader<TimerFired>,
    mut scheduler: ResMut<CombatScheduler>,
    mut fighters: Query<(&mut AbilityPoints, &FighterConfig)>,
) {
    for fired in fired_events.read() {
        match fired.action {
            TimerAction::RegenTick { fighter } => {
                let Ok((mut points, config)) = fighters.get_mut(fighter) else {
                    continue;
                };
                if points.is_full() {
                    // Кап: стоп regen, поллинг до следующей траты
                    scheduler.schedule(
                        secs_to_ticks(config.regen_poll_interval),
                        TimerAction::RegenPoll { fighter },
                    );
                } else {
                    points.gain(1.0);
                    scheduler.schedule(
                        secs_to_ticks(config.regen_interval),
                        TimerAction::RegenTick { fighter },
                    );
                }
            }
            TimerAction::RegenPoll { fighter } => {
                let Ok((points, config)) = fighters.get_mut(fighter) else {
                    continue;
                };
                if points.is_full() {
                    scheduler.schedule(
                        secs_to_ticks(config.regen_poll_interval),
                        TimerAction::RegenPoll { fighter },
                    );
                } else {
                    scheduler.schedule(
                        secs_to_ticks(config.regen_interval),
                        TimerAction::RegenTick { fighter },
                    );
                }
            }
            _ => {}
        }
    }
}
