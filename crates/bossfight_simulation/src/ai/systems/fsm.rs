//! AI FSM системы: spawn, perception, таймерные цепочки.

use bevy::prelude::*;
use rand::Rng;

use crate::ai::components::{AIConfig, AIState, AITimers};
use crate::ai::events::PerceptionEvent;
use crate::combat::components::{ActionLock, AiControlled, Health, Opponent};
use crate::combat::events::ActivationRequest;
use crate::movement::{MovementCommand, MovementSpeed};
use crate::scheduler::{secs_to_ticks, CombatScheduler, TimerAction, TimerFired};
use crate::DeterministicRng;

/// Система: взвод wander цепочки для свежезаспавненного AI
///
/// Первый repath срабатывает через 1 тик (босс сразу получает точку),
/// дальше цепочка перевзводится с wander_interval.
pub fn ai_arm_wander_for_spawned(
    mut scheduler: ResMut<CombatScheduler>,
    mut spawned: Query<(Entity, &mut AITimers), Added<AITimers>>,
) {
    for (entity, mut timers) in spawned.iter_mut() {
        let handle = scheduler.schedule(1, TimerAction::WanderRepath { fighter: entity });
        timers.wander_repath = Some(handle);
        crate::log(&format!("🤖 {:?} AI armed, wandering", entity));
    }
}

/// Система: реакция на perception (sight / hearing)
///
/// Wander → Pursue: отмена wander цепочки, немедленный follow, взвод
/// pursue refresh. Повторный perception в Pursue перевзводит refresh
/// (сбрасывает окно). В контакте и в Engaged perception игнорируется.
pub fn ai_handle_perception(
    mut perception_events: EventReader<PerceptionEvent>,
    mut scheduler: ResMut<CombatScheduler>,
    mut fighters: Query<
        (
            &mut AIState,
            &mut AITimers,
            &AIConfig,
            &ActionLock,
            &Opponent,
            &mut MovementCommand,
            &mut MovementSpeed,
        ),
        With<AiControlled>,
    >,
) {
    for event in perception_events.read() {
        let observer = match *event {
            PerceptionEvent::OpponentSeen { observer, .. } => observer,
            PerceptionEvent::NoiseHeard { observer, .. } => observer,
        };
        let Ok((mut state, mut timers, config, lock, opponent, mut command, mut speed)) =
            fighters.get_mut(observer)
        else {
            continue;
        };

        // В контакте и в замахе perception не меняет поведение
        if lock.in_contact || matches!(*state, AIState::Engaged { .. }) {
            continue;
        }

        // Wander цепочка умирает при первом perception
        if let Some(handle) = timers.wander_repath.take() {
            scheduler.cancel(handle);
        }

        *command = MovementCommand::FollowEntity { target: opponent.0 };
        speed.speed = config.pursue_speed;

        // Перевзвод refresh тем же handle сбрасывает окно
        let delay = secs_to_ticks(config.pursue_refresh_interval);
        match timers.pursue_refresh {
            Some(handle) => {
                scheduler.reschedule(handle, delay, TimerAction::PursueRefresh { fighter: observer });
            }
            None => {
                timers.pursue_refresh =
                    Some(scheduler.schedule(delay, TimerAction::PursueRefresh { fighter: observer }));
            }
        }

        if *state != AIState::Pursue {
            match *event {
                PerceptionEvent::OpponentSeen { target, .. } => {
                    crate::log(&format!("👁️ {:?} spotted {:?} → Pursue", observer, target));
                }
                PerceptionEvent::NoiseHeard { location, volume, .. } => {
                    crate::log(&format!(
                        "👂 {:?} heard noise at ({:.0}, {:.0}, {:.0}) vol {:.2} → Pursue",
                        observer, location.x, location.y, location.z, volume
                    ));
                }
            }
            *state = AIState::Pursue;
        }
    }
}

/// Система: dispatch wander/pursue/pre-swing таймеров
///
/// Сработавший таймер принадлежит цепочке только если его handle всё ещё
/// записан в AITimers: событие, догнавшее отменённую цепочку в том же
/// тике, отбрасывается.
pub fn ai_dispatch_timers(
    mut fired_events: EventReader<TimerFired>,
    mut scheduler: ResMut<CombatScheduler>,
    mut rng: ResMut<DeterministicRng>,
    mut activation_events: EventWriter<ActivationRequest>,
    mut fighters: Query<
        (
            &AIState,
            &mut AITimers,
            &AIConfig,
            &Transform,
            &Opponent,
            &mut MovementCommand,
        ),
        With<AiControlled>,
    >,
    healths: Query<&Health>,
) {
    for fired in fired_events.read() {
        match fired.action {
            TimerAction::WanderRepath { fighter } => {
                let Ok((state, timers, config, transform, _, mut command)) =
                    fighters.get_mut(fighter)
                else {
                    continue;
                };
                if timers.wander_repath != Some(fired.handle) {
                    continue; // цепочка отменена perception'ом
                }
                scheduler.reschedule(
                    fired.handle,
                    secs_to_ticks(config.wander_interval),
                    fired.action,
                );
                // Во время Engaged цепочка тикает, но точек не выдаёт
                if *state != AIState::Wander {
                    continue;
                }

                let angle = rng.rng.gen_range(0.0..std::f32::consts::TAU);
                let distance = rng.rng.gen_range(0.0..config.wander_radius);
                let target = transform.translation
                    + Vec3::new(angle.cos() * distance, 0.0, angle.sin() * distance);

                *command = MovementCommand::MoveToPosition { target };
                crate::log(&format!(
                    "🚶 {:?} wandering to ({:.0}, {:.0}, {:.0})",
                    fighter, target.x, target.y, target.z
                ));
            }
            TimerAction::PursueRefresh { fighter } => {
                let Ok((state, mut timers, config, _, opponent, mut command)) =
                    fighters.get_mut(fighter)
                else {
                    continue;
                };
                if timers.pursue_refresh != Some(fired.handle) {
                    continue;
                }
                // Противник мог быть уже уничтожен — цепочка не перевзводится
                if healths.get(opponent.0).is_err() {
                    timers.pursue_refresh = None;
                    *command = MovementCommand::Stop;
                    continue;
                }
                scheduler.reschedule(
                    fired.handle,
                    secs_to_ticks(config.pursue_refresh_interval),
                    fired.action,
                );
                if *state == AIState::Pursue {
                    *command = MovementCommand::FollowEntity { target: opponent.0 };
                }
            }
            TimerAction::PreSwing { fighter, action } => {
                if fighters.get(fighter).is_err() {
                    continue;
                }
                activation_events.write(ActivationRequest { fighter, action });
                crate::log(&format!("🗡️ {:?} pre-swing complete → {:?}", fighter, action));
            }
            _ => {}
        }
    }
}
