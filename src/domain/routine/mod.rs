//! Routine module - morning and evening product sequences.

mod errors;
mod routine;

pub use errors::RoutineError;
pub use routine::{
    combined_slots, MoveDirection, Routine, RoutinePeriod, RoutineSlot, RoutineState,
};
