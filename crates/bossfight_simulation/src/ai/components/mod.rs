//! AI components (FSM state и параметры)

pub mod fsm;


pub use fsm::*;
