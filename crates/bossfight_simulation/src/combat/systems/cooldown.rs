//! Dispatch cooldown/unlock таймеров из TimerFired цепочек.

use bevy::prelude::*;

use crate::combat::components::{ActionLock, PotionBelt, SkillCooldowns};
use crate::scheduler::{secs_to_ticks, CombatScheduler, TimerAction, TimerFired};

/// Период декремента cooldown счётчиков (секунды)
pub const COOLDOWN_TICK_SECS: f32 = 1.0;

/// Система: тик cooldown цепочек и unlock таймеров
///
/// CooldownTick и PotionCooldownTick перевзводятся тем же handle,
/// пока счётчик не дойдёт до нуля.
pub fn dispatch_cooldowns(
    mut fired_events: EventReader<TimerFired>,
    mut scheduler: ResMut<CombatScheduler>,
    mut cooldowns: Query<&mut SkillCooldowns>,
    mut locks: Query<&mut ActionLock>,
    mut belts: Query<&mut PotionBelt>,
) {
    for fired in fired_events.read() {
        match fired.action {
            TimerAction::CooldownTick { fighter, slot } => {
                let Ok(mut skill_cooldowns) = cooldowns.get_mut(fighter) else {
                    continue;
                };
                let remaining = skill_cooldowns.tick(slot);
                if remaining > 0 {
                    scheduler.reschedule(
                        fired.handle,
                        secs_to_ticks(COOLDOWN_TICK_SECS),
                        fired.action,
                    );
                } else {
                    crate::log(&format!("♻️ {:?} skill {:?} ready", fighter, slot));
                }
            }
            TimerAction::Unlock { fighter } => {
                let Ok(mut lock) = locks.get_mut(fighter) else {
                    continue;
                };
                lock.unlock();
                crate::log(&format!("🔓 {:?} action lock released", fighter));
            }
            TimerAction::PotionCooldownTick { fighter, kind } => {
                let Ok(mut belt) = belts.get_mut(fighter) else {
                    continue;
                };
                let remaining = belt.tick_cooldown(kind);
                if remaining > 0 {
                    scheduler.reschedule(
                        fired.handle,
                        secs_to_ticks(COOLDOWN_TICK_SECS),
                        fired.action,
                    );
                }
            }
            _ => {}
        }
    }
}
