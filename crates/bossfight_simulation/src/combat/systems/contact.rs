//! Contact tracking: overlap события → ActionLock флаги.

use bevy::prelude::*;

use crate::combat::components::{ActionLock, Opponent};
use crate::combat::events::ContactEvent;

/// Система: обновление in_contact из ContactEvent
///
/// События с посторонним `other` (не противник бойца) игнорируются.
pub fn track_contact(
    mut contact_events: EventReader<ContactEvent>,
    mut fighters: Query<(&mut ActionLock, &Opponent)>,
) {
    for event in contact_events.read() {
        match *event {
            ContactEvent::Entered { fighter, other } => {
                let Ok((mut lock, opponent)) = fighters.get_mut(fighter) else {
                    continue;
                };
                if other != opponent.0 {
                    continue;
                }
                if !lock.in_contact {
                    lock.enter_contact();
                    crate::log(&format!("🤝 {:?} entered contact with {:?}", fighter, other));
                }
            }
            ContactEvent::Exited { fighter, other } => {
                let Ok((mut lock, opponent)) = fighters.get_mut(fighter) else {
                    continue;
                };
                if other != opponent.0 {
                    continue;
                }
                let was_in_contact = lock.in_contact;
                lock.exit_contact();
                if was_in_contact && !lock.in_contact {
                    crate::log(&format!("👋 {:?} left contact with {:?}", fighter, other));
                }
            }
        }
    }
}
