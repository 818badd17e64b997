//! Combat components (состояние бойца)

pub mod cooldowns;
pub mod fighter;
pub mod lock;
pub mod resources;

// Re-export всех компонентов
pub use cooldowns::*;
pub use fighter::*;
pub use lock::*;
pub use resources::*;
