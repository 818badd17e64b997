//! Engagement: выбор действия на contact edge, post-resolve возврат.

use bevy::prelude::*;
use rand::Rng;

use crate::ai::components::{AIState, AITimers};
use crate::combat::components::{
    AbilityPoints, ActionKind, ActionLock, AiControlled, FighterConfig, Opponent,
    SkillCooldowns, SkillSlot,
};
use crate::combat::events::{ActionResolved, ContactEvent};
use crate::scheduler::{secs_to_ticks, CombatScheduler, TimerAction};
use crate::DeterministicRng;

/// Система: contact enter → выбор действия + pre-swing таймер
///
/// Запускается ДО track_contact: edge guard смотрит значение флага до
/// обработки события этого тика. Выбор — uniform 1-in-4 из трёх скиллов
/// и базовой атаки; недоступный скилл деградирует в базовую атаку уже
/// на месте, с задержкой финального действия.
pub fn ai_engage_on_contact(
    mut contact_events: EventReader<ContactEvent>,
    mut scheduler: ResMut<CombatScheduler>,
    mut rng: ResMut<DeterministicRng>,
    mut fighters: Query<
        (
            &mut AIState,
            &ActionLock,
            &AbilityPoints,
            &SkillCooldowns,
            &FighterConfig,
            &Opponent,
        ),
        With<AiControlled>,
    >,
) {
    for event in contact_events.read() {
        let ContactEvent::Entered { fighter, other } = *event else {
            continue;
        };
        let Ok((mut state, lock, points, cooldowns, config, opponent)) =
            fighters.get_mut(fighter)
        else {
            continue;
        };
        if other != opponent.0 {
            continue;
        }
        // Edge guard: уже в контакте или уже в замахе
        if lock.in_contact || matches!(*state, AIState::Engaged { .. }) {
            continue;
        }

        // Uniform 1-in-4: три скилла + базовая атака
        let rolled = match rng.rng.gen_range(0..4) {
            0 => ActionKind::Skill(SkillSlot::First),
            1 => ActionKind::Skill(SkillSlot::Second),
            2 => ActionKind::Skill(SkillSlot::Third),
            _ => ActionKind::BasicAttack,
        };

        // Degrade: cooldown или нехватка points → базовая атака
        let chosen = match rolled {
            ActionKind::Skill(slot)
                if !cooldowns.is_ready(slot) || !points.can_afford(config.skill(slot).cost) =>
            {
                crate::log(&format!(
                    "🌀 {:?} rolled {:?}, degraded to basic attack",
                    fighter, rolled
                ));
                ActionKind::BasicAttack
            }
            other_action => other_action,
        };

        let delay_secs = config.unlock_delay_of(chosen);
        scheduler.schedule(
            secs_to_ticks(delay_secs),
            TimerAction::PreSwing { fighter, action: chosen },
        );
        *state = AIState::Engaged { pending: chosen };

        crate::log(&format!(
            "⚔️ {:?} engaged {:?}: {:?} in {:.1}s",
            fighter, other, chosen, delay_secs
        ));
    }
}

/// Система: после resolve действия AI (принят или whiff) — сброс
/// контакта, возврат в Pursue (refresh цепочка жива) или Wander
pub fn ai_after_resolve(
    mut resolved_events: EventReader<ActionResolved>,
    mut fighters: Query<(&mut AIState, &mut ActionLock, &AITimers), With<AiControlled>>,
) {
    for resolved in resolved_events.read() {
        let Ok((mut state, mut lock, timers)) = fighters.get_mut(resolved.fighter) else {
            continue;
        };
        if !matches!(*state, AIState::Engaged { .. }) {
            continue;
        }

        lock.reset_contact();
        *state = if timers.pursue_refresh.is_some() {
            AIState::Pursue
        } else {
            AIState::Wander
        };

        crate::log(&format!(
            "🔁 {:?} resolved {:?} (accepted: {}) → {:?}",
            resolved.fighter, resolved.action, resolved.accepted, *state
        ));
    }
}
