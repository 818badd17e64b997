//! AI decision-making module
//!
//! Event-driven FSM босса: Wander (случайные точки) → Pursue (после
//! sight/hearing) → Engaged (contact edge: выбор действия, pre-swing,
//! удар). Всё время — тики scheduler'а, вся случайность — через
//! DeterministicRng.

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

pub use components::{AIConfig, AIState, AITimers};
pub use events::PerceptionEvent;

use crate::scheduler::advance_scheduler;
use crate::SimulationSet;

/// AI Plugin
///
/// Порядок выполнения (FixedUpdate):
/// - ai_arm_wander_for_spawned — до advance_scheduler (Timers)
/// - ai_handle_perception → ai_engage_on_contact → ai_dispatch_timers (Ai)
/// - ai_after_resolve — после combat resolve (Cleanup)
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PerceptionEvent>();

        app.add_systems(
            FixedUpdate,
            (
                systems::ai_arm_wander_for_spawned
                    .in_set(SimulationSet::Timers)
                    .before(advance_scheduler),
                (
                    systems::ai_handle_perception,
                    systems::ai_engage_on_contact,
                    systems::ai_dispatch_timers,
                )
                    .chain()
                    .in_set(SimulationSet::Ai),
                systems::ai_after_resolve.in_set(SimulationSet::Cleanup),
            ),
        );
    }
}
