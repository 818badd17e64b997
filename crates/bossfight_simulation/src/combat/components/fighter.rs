//! Параметризованный боец: таблицы скиллов и controller маркеры.
//!
//! Один data-driven конфиг вместо двух почти одинаковых типов бойца:
//! игрок и босс различаются только числами (max health, cost/damage/
//! cooldown/delay таблицы) и тем, кто пишет ActivationRequest — input
//! слой или AI policy.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::lock::ContactLockMode;

/// Слот скилла (у каждого бойца три активных скилла)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum SkillSlot {
    First,
    Second,
    Third,
}

impl SkillSlot {
    pub const ALL: [SkillSlot; 3] = [SkillSlot::First, SkillSlot::Second, SkillSlot::Third];

    pub fn index(self) -> usize {
        match self {
            SkillSlot::First => 0,
            SkillSlot::Second => 1,
            SkillSlot::Third => 2,
        }
    }
}

/// Боевое действие: скилл или базовая атака
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum ActionKind {
    Skill(SkillSlot),
    BasicAttack,
}

/// Параметры одного скилла
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct SkillSpec {
    /// Стоимость активации (ability points)
    pub cost: f32,
    /// Урон по противнику
    pub damage: f32,
    /// Cooldown в time units (декремент 1/s, готовность при нуле)
    pub cooldown: u32,
    /// Unlock delay: окно action lock, оно же pre-swing задержка AI
    pub unlock_delay: f32,
}

/// Параметры базовой атаки (без стоимости и cooldown)
#[derive(Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
pub struct BasicAttackSpec {
    pub damage: f32,
    pub unlock_delay: f32,
}

/// Конфигурация бойца (все таблицы данных в одном месте)
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct FighterConfig {
    pub max_health: f32,
    pub max_ability_points: f32,
    /// Период regen: +1 ability point ниже капа
    pub regen_interval: f32,
    /// Период поллинга на капе (retrigger regen после траты)
    pub regen_poll_interval: f32,
    pub skills: [SkillSpec; 3],
    pub basic_attack: BasicAttackSpec,
    /// Режим контакт/лок флагов (Conflated — legacy семантика)
    pub contact_lock: ContactLockMode,
}

impl Default for FighterConfig {
    fn default() -> Self {
        Self::player()
    }
}

impl FighterConfig {
    /// Игрок: 200 HP, урон 20/30/40, cooldown 6/8/10
    pub fn player() -> Self {
        Self {
            max_health: 200.0,
            max_ability_points: 100.0,
            regen_interval: 0.3,
            regen_poll_interval: 0.1,
            skills: [
                SkillSpec { cost: 20.0, damage: 20.0, cooldown: 6, unlock_delay: 1.2 },
                SkillSpec { cost: 30.0, damage: 30.0, cooldown: 8, unlock_delay: 1.4 },
                SkillSpec { cost: 40.0, damage: 40.0, cooldown: 10, unlock_delay: 1.6 },
            ],
            basic_attack: BasicAttackSpec { damage: 10.0, unlock_delay: 1.0 },
            contact_lock: ContactLockMode::Distinct,
        }
    }

    /// Босс: 100 HP, урон 10/20/30, cooldown 4/6/8
    pub fn boss() -> Self {
        Self {
            max_health: 100.0,
            max_ability_points: 100.0,
            regen_interval: 0.3,
            regen_poll_interval: 0.1,
            skills: [
                SkillSpec { cost: 20.0, damage: 10.0, cooldown: 4, unlock_delay: 1.2 },
                SkillSpec { cost: 30.0, damage: 20.0, cooldown: 6, unlock_delay: 1.4 },
                SkillSpec { cost: 40.0, damage: 30.0, cooldown: 8, unlock_delay: 1.6 },
            ],
            basic_attack: BasicAttackSpec { damage: 5.0, unlock_delay: 1.0 },
            contact_lock: ContactLockMode::Distinct,
        }
    }

    pub fn skill(&self, slot: SkillSlot) -> &SkillSpec {
        &self.skills[slot.index()]
    }

    /// Стоимость действия (базовая атака бесплатна)
    pub fn cost_of(&self, action: ActionKind) -> f32 {
        match action {
            ActionKind::Skill(slot) => self.skill(slot).cost,
            ActionKind::BasicAttack => 0.0,
        }
    }

    pub fn damage_of(&self, action: ActionKind) -> f32 {
        match action {
            ActionKind::Skill(slot) => self.skill(slot).damage,
            ActionKind::BasicAttack => self.basic_attack.damage,
        }
    }

    /// Unlock delay действия (для AI — pre-swing задержка)
    pub fn unlock_delay_of(&self, action: ActionKind) -> f32 {
        match action {
            ActionKind::Skill(slot) => self.skill(slot).unlock_delay,
            ActionKind::BasicAttack => self.basic_attack.unlock_delay,
        }
    }
}

/// Явная ссылка на противника (вместо глобального lookup)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opponent(pub Entity);

/// Маркер: бойца ведёт input слой
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct PlayerControlled;

/// Маркер: бойца ведёт AI policy
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct AiControlled;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_tables() {
        let config = FighterConfig::player();
        assert_eq!(config.max_health, 200.0);

        let costs: Vec<f32> = SkillSlot::ALL.iter().map(|&s| config.skill(s).cost).collect();
        let damages: Vec<f32> = SkillSlot::ALL.iter().map(|&s| config.skill(s).damage).collect();
        let cooldowns: Vec<u32> = SkillSlot::ALL.iter().map(|&s| config.skill(s).cooldown).collect();
        assert_eq!(costs, vec![20.0, 30.0, 40.0]);
        assert_eq!(damages, vec![20.0, 30.0, 40.0]);
        assert_eq!(cooldowns, vec![6, 8, 10]);
        assert_eq!(config.basic_attack.damage, 10.0);
    }

    #[test]
    fn test_boss_tables() {
        let config = FighterConfig::boss();
        assert_eq!(config.max_health, 100.0);

        let damages: Vec<f32> = SkillSlot::ALL.iter().map(|&s| config.skill(s).damage).collect();
        let cooldowns: Vec<u32> = SkillSlot::ALL.iter().map(|&s| config.skill(s).cooldown).collect();
        assert_eq!(damages, vec![10.0, 20.0, 30.0]);
        assert_eq!(cooldowns, vec![4, 6, 8]);
        assert_eq!(config.basic_attack.damage, 5.0);

        // Стоимости и задержки у обоих бойцов общие
        let player = FighterConfig::player();
        for slot in SkillSlot::ALL {
            assert_eq!(config.skill(slot).cost, player.skill(slot).cost);
            assert_eq!(config.skill(slot).unlock_delay, player.skill(slot).unlock_delay);
        }
    }

    #[test]
    fn test_basic_attack_is_free() {
        let config = FighterConfig::player();
        assert_eq!(config.cost_of(ActionKind::BasicAttack), 0.0);
        assert_eq!(config.damage_of(ActionKind::BasicAttack), 10.0);
        assert_eq!(config.unlock_delay_of(ActionKind::BasicAttack), 1.0);
    }

    #[test]
    fn test_action_lookups_match_slot_tables() {
        let config = FighterConfig::boss();
        let action = ActionKind::Skill(SkillSlot::Third);
        assert_eq!(config.cost_of(action), 40.0);
        assert_eq!(config.damage_of(action), 30.0);
        assert_eq!(config.unlock_delay_of(action), 1.6);
    }
}
