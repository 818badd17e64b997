//! Combat systems (resolve pipeline)

pub mod activation;
pub mod contact;
pub mod cooldown;
pub mod damage;
pub mod potions;
pub mod regen;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod activation_tests;

// Re-export all systems
pub use activation::*;
pub use contact::*;
pub use cooldown::*;
pub use damage::*;
pub use potions::*;
pub use regen::*;
