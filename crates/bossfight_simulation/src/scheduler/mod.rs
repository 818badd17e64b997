//! Боевой scheduler: приоритетная очередь отложенных действий.
//!
//! Все «repeating» таймеры боя (cooldown тики, unlock окна, regen,
//! wander/pursue цепочки, pre-swing задержки AI) живут в одной очереди
//! (fire_tick, seq, handle, action) поверх fixed timestep 60 Hz.
//!
//! Свойства:
//! - FIFO для записей с одинаковым fire_tick (монотонный seq)
//! - `cancel(handle)` и `reschedule(handle, ..)` лениво инвалидируют
//!   pending запись (stale записи отбрасываются при pop)
//! - `advance()` вызывается ровно один раз за FixedUpdate тик

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

use bevy::prelude::*;

use crate::combat::components::{ActionKind, PotionKind, SkillSlot};

/// Тиков симуляции в одной time unit (FixedUpdate 60 Hz)
pub const TICKS_PER_SECOND: u64 = 60;

/// Конвертация секунд в тики scheduler'а
///
/// Минимум 1 тик: нулевые задержки срабатывают на следующем advance.
pub fn secs_to_ticks(secs: f32) -> u64 {
    ((secs * TICKS_PER_SECOND as f32).round() as u64).max(1)
}

/// Handle запланированного действия (для cancel/reschedule)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub struct TimerHandle(u64);

/// Отложенное действие боевой симуляции
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerAction {
    /// Декремент cooldown скилла (цепочка 1.0s, до нуля)
    CooldownTick { fighter: Entity, slot: SkillSlot },
    /// Снятие action lock после unlock delay
    Unlock { fighter: Entity },
    /// Регенерация ability points (+1 каждые 0.3s ниже капа)
    RegenTick { fighter: Entity },
    /// Поллинг на капе (0.1s): ждём пока points потратят
    RegenPoll { fighter: Entity },
    /// Декремент cooldown зелья (цепочка 1.0s)
    PotionCooldownTick { fighter: Entity, kind: PotionKind },
    /// Wander: выбор новой случайной точки (каждые 3.0s)
    WanderRepath { fighter: Entity },
    /// Pursue: повторный move-to-opponent (каждые 2.0s)
    PursueRefresh { fighter: Entity },
    /// Исполнение выбранного AI действия после pre-swing задержки
    PreSwing { fighter: Entity, action: ActionKind },
}

/// Событие: запланированное действие сработало
#[derive(Event, Debug, Clone)]
pub struct TimerFired {
    pub handle: TimerHandle,
    pub action: TimerAction,
}

#[derive(Debug, Clone)]
struct ScheduledEntry {
    fire_at: u64,
    seq: u64,
    handle: TimerHandle,
    action: TimerAction,
}

impl PartialEq for ScheduledEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_at == other.fire_at && self.seq == other.seq
    }
}

impl Eq for ScheduledEntry {}

impl PartialOrd for ScheduledEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.fire_at, self.seq).cmp(&(other.fire_at, other.seq))
    }
}

/// Очередь отложенных боевых действий (resource)
///
/// Инвариант: на один handle приходится не более одной живой записи;
/// `armed` хранит seq живой записи, записи с другим seq — stale.
#[derive(Resource, Debug)]
pub struct CombatScheduler {
    now: u64,
    next_handle: u64,
    next_seq: u64,
    queue: BinaryHeap<Reverse<ScheduledEntry>>,
    armed: HashMap<TimerHandle, u64>,
}

impl Default for CombatScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl CombatScheduler {
    pub fn new() -> Self {
        Self {
            now: 0,
            next_handle: 0,
            next_seq: 0,
            queue: BinaryHeap::new(),
            armed: HashMap::new(),
        }
    }

    /// Текущий тик симуляции
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Количество живых (не отменённых) записей
    pub fn pending(&self) -> usize {
        self.armed.len()
    }

    /// Живо ли действие на этом handle
    pub fn is_armed(&self, handle: TimerHandle) -> bool {
        self.armed.contains_key(&handle)
    }

    /// Планирует действие через `delay_ticks`, возвращает свежий handle
    pub fn schedule(&mut self, delay_ticks: u64, action: TimerAction) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.push(handle, delay_ticks, action);
        handle
    }

    /// Перевзводит handle: прежняя pending запись (если была) отменяется
    pub fn reschedule(&mut self, handle: TimerHandle, delay_ticks: u64, action: TimerAction) {
        self.push(handle, delay_ticks, action);
    }

    /// Отменяет pending действие; true если оно было живо
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.armed.remove(&handle).is_some()
    }

    fn push(&mut self, handle: TimerHandle, delay_ticks: u64, action: TimerAction) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.armed.insert(handle, seq);
        self.queue.push(Reverse(ScheduledEntry {
            fire_at: self.now + delay_ticks,
            seq,
            handle,
            action,
        }));
    }

    /// Продвигает время на 1 тик, возвращает сработавшие действия
    /// в порядке (fire_at, seq)
    pub fn advance(&mut self) -> Vec<TimerFired> {
        self.now += 1;
        let mut fired = Vec::new();

        while self.queue.peek().map_or(false, |r| r.0.fire_at <= self.now) {
            if let Some(Reverse(entry)) = self.queue.pop() {
                // Stale запись (cancelled или rescheduled) — отбрасываем
                if self.armed.get(&entry.handle) == Some(&entry.seq) {
                    self.armed.remove(&entry.handle);
                    fired.push(TimerFired {
                        handle: entry.handle,
                        action: entry.action,
                    });
                }
            }
        }

        fired
    }
}

/// System: один advance за FixedUpdate, сработавшие действия → TimerFired
pub fn advance_scheduler(
    mut scheduler: ResMut<CombatScheduler>,
    mut fired_events: EventWriter<TimerFired>,
) {
    for fired in scheduler.advance() {
        fired_events.write(fired);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unlock(fighter: Entity) -> TimerAction {
        TimerAction::Unlock { fighter }
    }

    #[test]
    fn test_fires_at_exact_tick() {
        let mut scheduler = CombatScheduler::new();
        let fighter = Entity::PLACEHOLDER;
        scheduler.schedule(3, unlock(fighter));

        assert!(scheduler.advance().is_empty()); // tick 1
        assert!(scheduler.advance().is_empty()); // tick 2
        let fired = scheduler.advance(); // tick 3
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].action, unlock(fighter));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_same_instant_fires_in_fifo_order() {
        let mut scheduler = CombatScheduler::new();
        let fighter = Entity::PLACEHOLDER;

        scheduler.schedule(1, TimerAction::RegenTick { fighter });
        scheduler.schedule(1, TimerAction::RegenPoll { fighter });
        scheduler.schedule(1, unlock(fighter));

        let fired = scheduler.advance();
        assert_eq!(fired.len(), 3);
        assert!(matches!(fired[0].action, TimerAction::RegenTick { .. }));
        assert!(matches!(fired[1].action, TimerAction::RegenPoll { .. }));
        assert!(matches!(fired[2].action, TimerAction::Unlock { .. }));
    }

    #[test]
    fn test_cancel_drops_pending_action() {
        let mut scheduler = CombatScheduler::new();
        let handle = scheduler.schedule(2, unlock(Entity::PLACEHOLDER));

        assert!(scheduler.is_armed(handle));
        assert!(scheduler.cancel(handle));
        assert!(!scheduler.is_armed(handle));
        assert!(!scheduler.cancel(handle)); // повторный cancel — false

        assert!(scheduler.advance().is_empty());
        assert!(scheduler.advance().is_empty());
    }

    #[test]
    fn test_reschedule_replaces_pending_entry() {
        let mut scheduler = CombatScheduler::new();
        let fighter = Entity::PLACEHOLDER;
        let handle = scheduler.schedule(1, TimerAction::WanderRepath { fighter });

        // Перевзвод на более поздний тик отменяет раннюю запись
        scheduler.reschedule(handle, 3, TimerAction::WanderRepath { fighter });

        assert!(scheduler.advance().is_empty()); // tick 1: stale запись отброшена
        assert!(scheduler.advance().is_empty()); // tick 2
        let fired = scheduler.advance(); // tick 3
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].handle, handle);
    }

    #[test]
    fn test_rearm_after_fire_keeps_handle_alive() {
        let mut scheduler = CombatScheduler::new();
        let fighter = Entity::PLACEHOLDER;
        let slot = SkillSlot::First;
        let handle = scheduler.schedule(1, TimerAction::CooldownTick { fighter, slot });

        let fired = scheduler.advance();
        assert_eq!(fired.len(), 1);
        assert!(!scheduler.is_armed(handle));

        // Цепочка перевзводится тем же handle (как cooldown тики)
        scheduler.reschedule(handle, 1, TimerAction::CooldownTick { fighter, slot });
        assert!(scheduler.is_armed(handle));

        let fired = scheduler.advance();
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].handle, handle);
    }

    #[test]
    fn test_secs_to_ticks_quantization() {
        assert_eq!(secs_to_ticks(1.0), 60);
        assert_eq!(secs_to_ticks(0.3), 18);
        assert_eq!(secs_to_ticks(0.1), 6);
        assert_eq!(secs_to_ticks(1.2), 72);
        assert_eq!(secs_to_ticks(1.4), 84);
        assert_eq!(secs_to_ticks(1.6), 96);
        assert_eq!(secs_to_ticks(2.0), 120);
        assert_eq!(secs_to_ticks(3.0), 180);
        // Нулевая задержка квантуется в 1 тик
        assert_eq!(secs_to_ticks(0.0), 1);
    }
}
