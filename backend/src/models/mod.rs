//! Generator state types

pub mod state_machine;

// Re-exports
pub use state_machine::{Sequence, StateError, StateMachine};
