//! Action lock: контакт и «действие в полёте».
//!
//! Два независимых флага:
//! - in_contact: боец в contact volume противника (вход/выход от движка)
//! - in_progress: окно между принятой активацией и unlock таймером
//!
//! ContactLockMode::Conflated воспроизводит legacy поведение, где одна
//! collision-переменная несла обе роли: exit события игнорируются,
//! отдельный in_progress не ведётся, флаг снимается только при resolve
//! действия AI.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Режим контакт/лок флагов бойца
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum ContactLockMode {
    /// Два независимых флага
    #[default]
    Distinct,
    /// Один флаг на обе роли (legacy семантика)
    Conflated,
}

/// Лок состояния действий бойца
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct ActionLock {
    pub in_contact: bool,
    pub in_progress: bool,
    pub mode: ContactLockMode,
}

impl Default for ActionLock {
    fn default() -> Self {
        Self::new(ContactLockMode::Distinct)
    }
}

impl ActionLock {
    pub fn new(mode: ContactLockMode) -> Self {
        Self {
            in_contact: false,
            in_progress: false,
            mode,
        }
    }

    /// Активация разрешена: есть контакт и нет действия в полёте.
    /// В Conflated сам контакт-флаг сериализует действия.
    pub fn can_activate(&self) -> bool {
        match self.mode {
            ContactLockMode::Distinct => self.in_contact && !self.in_progress,
            ContactLockMode::Conflated => self.in_contact,
        }
    }

    /// Принятая активация поднимает in_progress
    /// (Conflated не ведёт отдельный лок)
    pub fn start_action(&mut self) {
        if self.mode == ContactLockMode::Distinct {
            self.in_progress = true;
        }
    }

    /// Unlock таймер сработал
    pub fn unlock(&mut self) {
        self.in_progress = false;
    }

    pub fn enter_contact(&mut self) {
        self.in_contact = true;
    }

    /// Выход из contact volume (Conflated игнорирует exit)
    pub fn exit_contact(&mut self) {
        if self.mode == ContactLockMode::Distinct {
            self.in_contact = false;
        }
    }

    /// Сброс контакта после resolve действия AI (оба режима)
    pub fn reset_contact(&mut self) {
        self.in_contact = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_requires_contact_without_pending_action() {
        let mut lock = ActionLock::new(ContactLockMode::Distinct);
        assert!(!lock.can_activate()); // нет контакта

        lock.enter_contact();
        assert!(lock.can_activate());

        lock.start_action();
        assert!(!lock.can_activate()); // действие в полёте

        lock.unlock();
        assert!(lock.can_activate());
    }

    #[test]
    fn test_distinct_exit_clears_contact() {
        let mut lock = ActionLock::new(ContactLockMode::Distinct);
        lock.enter_contact();
        lock.exit_contact();
        assert!(!lock.in_contact);
        assert!(!lock.can_activate());
    }

    #[test]
    fn test_conflated_ignores_exit() {
        let mut lock = ActionLock::new(ContactLockMode::Conflated);
        lock.enter_contact();
        lock.exit_contact();
        assert!(lock.in_contact); // exit — no-op
        assert!(lock.can_activate());
    }

    #[test]
    fn test_conflated_has_no_separate_action_window() {
        let mut lock = ActionLock::new(ContactLockMode::Conflated);
        lock.enter_contact();
        lock.start_action();
        assert!(!lock.in_progress);
        assert!(lock.can_activate()); // контакт-флаг остаётся единственным гейтом
    }

    #[test]
    fn test_reset_contact_clears_both_modes() {
        for mode in [ContactLockMode::Distinct, ContactLockMode::Conflated] {
            let mut lock = ActionLock::new(mode);
            lock.enter_contact();
            lock.reset_contact();
            assert!(!lock.in_contact);
        }
    }
}
