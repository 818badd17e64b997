//! Movement компоненты: команды навигации для engine-слоя.
//!
//! ECS пишет MovementCommand (high-level intent), движок читает и
//! исполняет (NavigationAgent, pathfinding — вне crate).

use bevy::prelude::*;

/// Команда движения бойца
#[derive(Component, Debug, Clone, PartialEq)]
pub enum MovementCommand {
    /// Стоять на месте
    Idle,
    /// Двигаться к позиции (world coordinates)
    MoveToPosition { target: Vec3 },
    /// Следовать за entity (движок сам обновляет точку каждый кадр)
    FollowEntity { target: Entity },
    /// Остановиться немедленно
    Stop,
}

impl Default for MovementCommand {
    fn default() -> Self {
        Self::Idle
    }
}

/// Скорость движения бойца (units/sec в масштабе движка)
///
/// Pursue поднимает до AIConfig::pursue_speed.
#[derive(Component, Debug, Clone, Copy)]
pub struct MovementSpeed {
    pub speed: f32,
}

impl Default for MovementSpeed {
    fn default() -> Self {
        Self { speed: 600.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_idle() {
        assert_eq!(MovementCommand::default(), MovementCommand::Idle);
    }

    #[test]
    fn test_default_speed() {
        assert_eq!(MovementSpeed::default().speed, 600.0);
    }
}
