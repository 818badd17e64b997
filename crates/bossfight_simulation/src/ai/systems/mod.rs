//! AI systems (perception, engagement, таймерные цепочки)

pub mod engagement;
pub mod fsm;

// Re-export all systems
pub use engagement::*;
pub use fsm::*;
