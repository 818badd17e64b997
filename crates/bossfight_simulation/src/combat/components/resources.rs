//! Ресурсы бойца: здоровье и ability points.

use bevy::prelude::*;

/// Здоровье бойца
///
/// Инвариант: current <= max. Урон НЕ клампится снизу: current < 0
/// допустимо транзиентно, до death check в том же тике.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100.0)
    }
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Урон без нижнего клампа (death check смотрит current <= 0)
    pub fn apply_damage(&mut self, amount: f32) {
        self.current -= amount;
    }

    /// Хил с клампом к max (150 + 50 → ровно 200)
    pub fn heal(&mut self, amount: f32) {
        self.current = (self.current + amount).min(self.max);
    }
}

/// Ability points — общий ресурс всех скиллов бойца
///
/// Инвариант: 0 <= current <= max. Трата проверяется заранее
/// (can_afford), начисления клампятся к max.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct AbilityPoints {
    pub current: f32,
    pub max: f32,
}

impl Default for AbilityPoints {
    fn default() -> Self {
        Self::new(100.0)
    }
}

impl AbilityPoints {
    /// Боец спавнится с полным запасом
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    pub fn can_afford(&self, cost: f32) -> bool {
        self.current >= cost
    }

    /// Списание; false если не хватило (состояние не меняется)
    pub fn spend(&mut self, cost: f32) -> bool {
        if self.can_afford(cost) {
            self.current -= cost;
            true
        } else {
            false
        }
    }

    /// Начисление с клампом к max
    pub fn gain(&mut self, amount: f32) {
        self.current = (self.current + amount).min(self.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_damage_goes_below_zero() {
        let mut health = Health::new(100.0);
        health.apply_damage(130.0);
        assert_eq!(health.current, -30.0);
        assert!(!health.is_alive());
    }

    #[test]
    fn test_health_heal_clamps_to_max() {
        let mut health = Health::new(200.0);
        health.apply_damage(50.0);
        health.heal(80.0);
        assert_eq!(health.current, 200.0);
    }

    #[test]
    fn test_health_full_only_at_max() {
        let mut health = Health::new(200.0);
        assert!(health.is_full());
        health.apply_damage(0.5);
        assert!(!health.is_full());
        health.heal(0.5);
        assert!(health.is_full());
    }

    #[test]
    fn test_ability_points_spend_and_afford() {
        let mut points = AbilityPoints::new(100.0);
        assert!(points.can_afford(40.0));
        assert!(points.spend(40.0));
        assert_eq!(points.current, 60.0);

        assert!(!points.can_afford(70.0));
        assert!(!points.spend(70.0));
        assert_eq!(points.current, 60.0); // отказ ничего не меняет
    }

    #[test]
    fn test_ability_points_gain_clamps_to_max() {
        let mut points = AbilityPoints::new(100.0);
        points.spend(20.0);
        points.gain(30.0);
        assert_eq!(points.current, 100.0);
        assert!(points.is_full());
    }

    #[test]
    fn test_exact_cost_is_affordable() {
        let mut points = AbilityPoints::new(100.0);
        points.spend(60.0);
        // Граница: стоимость ровно равна остатку
        assert!(points.can_afford(40.0));
        assert!(points.spend(40.0));
        assert_eq!(points.current, 0.0);
    }
}
