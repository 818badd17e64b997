//! Cooldown счётчики скиллов и зелий.
//!
//! Целочисленные счётчики в time units: декремент раз в 1.0s через
//! scheduler цепочку, готовность строго при counter == 0.

use bevy::prelude::*;

use super::fighter::SkillSlot;

/// Заряды зелий на поясе
pub const POTION_CHARGES: u32 = 5;
/// Cooldown зелья (time units, декремент 1/s)
pub const POTION_COOLDOWN: u32 = 10;
/// Восстановление зелья здоровья
pub const HEALTH_POTION_RESTORE: f32 = 50.0;
/// Восстановление зелья ability points
pub const ABILITY_POTION_RESTORE: f32 = 30.0;

/// Per-slot cooldown счётчики скиллов
///
/// Инвариант: счётчик не бывает отрицательным (saturating decrement).
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct SkillCooldowns {
    pub slots: [u32; 3],
}

impl SkillCooldowns {
    /// Скилл готов строго при нуле
    pub fn is_ready(&self, slot: SkillSlot) -> bool {
        self.slots[slot.index()] == 0
    }

    pub fn get(&self, slot: SkillSlot) -> u32 {
        self.slots[slot.index()]
    }

    /// Старт cooldown: выставить счётчик (декремент цепочку взводит caller)
    pub fn start(&mut self, slot: SkillSlot, duration: u32) {
        self.slots[slot.index()] = duration;
    }

    /// Декремент на 1, возвращает остаток
    pub fn tick(&mut self, slot: SkillSlot) -> u32 {
        let counter = &mut self.slots[slot.index()];
        *counter = counter.saturating_sub(1);
        *counter
    }
}

/// Вид зелья на поясе игрока
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum PotionKind {
    Health,
    Ability,
}

/// Пояс зелий игрока: заряды и cooldown'ы обоих видов
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct PotionBelt {
    pub health_charges: u32,
    pub ability_charges: u32,
    pub health_cooldown: u32,
    pub ability_cooldown: u32,
}

impl Default for PotionBelt {
    fn default() -> Self {
        Self {
            health_charges: POTION_CHARGES,
            ability_charges: POTION_CHARGES,
            health_cooldown: 0,
            ability_cooldown: 0,
        }
    }
}

impl PotionBelt {
    pub fn charges(&self, kind: PotionKind) -> u32 {
        match kind {
            PotionKind::Health => self.health_charges,
            PotionKind::Ability => self.ability_charges,
        }
    }

    pub fn cooldown(&self, kind: PotionKind) -> u32 {
        match kind {
            PotionKind::Health => self.health_cooldown,
            PotionKind::Ability => self.ability_cooldown,
        }
    }

    /// Зелье доступно: остались заряды и cooldown на нуле
    pub fn can_quaff(&self, kind: PotionKind) -> bool {
        self.charges(kind) > 0 && self.cooldown(kind) == 0
    }

    pub fn consume_charge(&mut self, kind: PotionKind) {
        match kind {
            PotionKind::Health => self.health_charges = self.health_charges.saturating_sub(1),
            PotionKind::Ability => self.ability_charges = self.ability_charges.saturating_sub(1),
        }
    }

    pub fn start_cooldown(&mut self, kind: PotionKind, duration: u32) {
        match kind {
            PotionKind::Health => self.health_cooldown = duration,
            PotionKind::Ability => self.ability_cooldown = duration,
        }
    }

    /// Декремент cooldown на 1, возвращает остаток
    pub fn tick_cooldown(&mut self, kind: PotionKind) -> u32 {
        let counter = match kind {
            PotionKind::Health => &mut self.health_cooldown,
            PotionKind::Ability => &mut self.ability_cooldown,
        };
        *counter = counter.saturating_sub(1);
        *counter
    }
}
