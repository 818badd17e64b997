//! Activation resolve: precondition gate и success path.
//!
//! Порядок проверок (любой отказ — silent no-op):
//! 1. action lock (контакт есть, действие не в полёте)
//! 2. cooldown скилла (строго ноль)
//! 3. affordability (cost таблица)
//!
//! Успех атомарен в рамках тика: лок, списание, урон, cooldown
//! и unlock таймер выставляются до того, как resolver увидит
//! следующий запрос.

use bevy::prelude::*;

use crate::combat::components::{
    AbilityPoints, ActionKind, ActionLock, ContactLockMode, FighterConfig, Opponent,
    SkillCooldowns,
};
use crate::combat::events::{ActionResolved, ActivationRequest, DamageDealt};
use crate::scheduler::{secs_to_ticks, CombatScheduler, TimerAction};

use super::cooldown::COOLDOWN_TICK_SECS;

/// Система: resolve запросов активации
pub fn resolve_activations(
    mut requests: EventReader<ActivationRequest>,
    mut resolved_events: EventWriter<ActionResolved>,
    mut damage_events: EventWriter<DamageDealt>,
    mut scheduler: ResMut<CombatScheduler>,
    mut fighters: Query<(
        &mut AbilityPoints,
        &mut SkillCooldowns,
        &mut ActionLock,
        &FighterConfig,
        &Opponent,
    )>,
) {
    for request in requests.read() {
        let Ok((mut points, mut cooldowns, mut lock, config, opponent)) =
            fighters.get_mut(request.fighter)
        else {
            continue;
        };

        let action = request.action;
        let cost = config.cost_of(action);
        let cooldown_ready = match action {
            ActionKind::Skill(slot) => cooldowns.is_ready(slot),
            ActionKind::BasicAttack => true,
        };

        let accepted = lock.can_activate() && cooldown_ready && points.can_afford(cost);

        if accepted {
            lock.start_action();
            if cost > 0.0 {
                points.spend(cost);
            }

            damage_events.write(DamageDealt {
                attacker: request.fighter,
                target: opponent.0,
                damage: config.damage_of(action),
                action,
            });

            if let ActionKind::Skill(slot) = action {
                cooldowns.start(slot, config.skill(slot).cooldown);
                scheduler.schedule(
                    secs_to_ticks(COOLDOWN_TICK_SECS),
                    TimerAction::CooldownTick { fighter: request.fighter, slot },
                );
            }

            // Conflated: контакт-флаг сам сериализует действия, unlock не нужен
            if lock.mode == ContactLockMode::Distinct {
                scheduler.schedule(
                    secs_to_ticks(config.unlock_delay_of(action)),
                    TimerAction::Unlock { fighter: request.fighter },
                );
            }

            crate::log(&format!(
                "⚔️ {:?} activated {:?} (cost: {:.0}, points left: {:.0})",
                request.fighter, action, cost, points.current
            ));
        }

        resolved_events.write(ActionResolved {
            fighter: request.fighter,
            action,
            accepted,
        });
    }
}
