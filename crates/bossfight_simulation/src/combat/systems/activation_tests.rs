//! Tests for activation preconditions.

#[cfg(test)]
mod tests {
    use crate::combat::components::{
        AbilityPoints, ActionKind, ActionLock, ContactLockMode, FighterConfig, SkillCooldowns,
        SkillSlot,
    };

    fn ready_to_fight() -> (ActionLock, SkillCooldowns, AbilityPoints) {
        let mut lock = ActionLock::new(ContactLockMode::Distinct);
        lock.enter_contact();
        (lock, SkillCooldowns::default(), AbilityPoints::new(100.0))
    }

    #[test]
    fn test_all_preconditions_met() {
        let (lock, cooldowns, points) = ready_to_fight();
        let config = FighterConfig::player();
        let slot = SkillSlot::Second;

        assert!(lock.can_activate());
        assert!(cooldowns.is_ready(slot));
        assert!(points.can_afford(config.skill(slot).cost));
    }

    #[test]
    fn test_no_contact_blocks_activation() {
        let lock = ActionLock::new(ContactLockMode::Distinct);
        assert!(!lock.can_activate());
    }

    #[test]
    fn test_pending_action_blocks_activation() {
        let (mut lock, _, _) = ready_to_fight();
        lock.start_action();
        assert!(!lock.can_activate());
    }

    #[test]
    fn test_cooling_skill_blocks_activation() {
        let (_, mut cooldowns, _) = ready_to_fight();
        cooldowns.start(SkillSlot::First, 6);
        assert!(!cooldowns.is_ready(SkillSlot::First));
        // Другие слоты не затронуты
        assert!(cooldowns.is_ready(SkillSlot::Second));
    }

    #[test]
    fn test_unaffordable_skill_blocks_activation() {
        let config = FighterConfig::player();
        let mut points = AbilityPoints::new(100.0);
        points.spend(75.0); // остаётся 25

        assert!(points.can_afford(config.cost_of(ActionKind::Skill(SkillSlot::First))));
        assert!(!points.can_afford(config.cost_of(ActionKind::Skill(SkillSlot::Second))));
        assert!(!points.can_afford(config.cost_of(ActionKind::Skill(SkillSlot::Third))));
        // Базовая атака бесплатна и доступна всегда
        assert!(points.can_afford(config.cost_of(ActionKind::BasicAttack)));
    }

    #[test]
    fn test_basic_attack_has_no_cooldown_gate() {
        let config = FighterConfig::boss();
        assert_eq!(config.cost_of(ActionKind::BasicAttack), 0.0);
        // У базовой атаки нет слота — cooldown таблица её не гейтит
        let mut cooldowns = SkillCooldowns::default();
        for slot in SkillSlot::ALL {
            cooldowns.start(slot, 99);
        }
        assert_eq!(config.damage_of(ActionKind::BasicAttack), 5.0);
    }
}
