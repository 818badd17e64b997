//! AI FSM components (state machine, config, scheduler handles).

use bevy::prelude::*;

use crate::combat::components::ActionKind;
use crate::scheduler::TimerHandle;

/// AI FSM состояния (event-driven)
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub enum AIState {
    /// Wander — блуждание по случайным точкам (начальное состояние)
    Wander,
    /// Pursue — преследование противника после sight/hearing
    Pursue,
    /// Engaged — контакт состоялся: действие выбрано, ждём pre-swing
    Engaged {
        /// Выбранное действие (после degrade проверки)
        pending: ActionKind,
    },
}

impl Default for AIState {
    fn default() -> Self {
        Self::Wander
    }
}

/// Handles активных wander/pursue цепочек
///
/// Перевзвод тем же handle через scheduler.reschedule отменяет прежнюю
/// pending запись: повторный perception сбрасывает pursue окно.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct AITimers {
    /// Wander repath цепочка (отменяется при переходе в Pursue)
    pub wander_repath: Option<TimerHandle>,
    /// Pursue refresh цепочка
    pub pursue_refresh: Option<TimerHandle>,
}

/// Параметры AI поведения
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct AIConfig {
    /// Wander: период выбора новой случайной точки (секунды)
    pub wander_interval: f32,
    /// Wander: радиус выбора точки вокруг текущей позиции
    pub wander_radius: f32,
    /// Pursue: период повторного move-to-opponent (секунды)
    pub pursue_refresh_interval: f32,
    /// Pursue: скорость движения при преследовании
    pub pursue_speed: f32,
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            wander_interval: 3.0,
            wander_radius: 10_000.0,
            pursue_refresh_interval: 2.0,
            pursue_speed: 700.0,
        }
    }
}
