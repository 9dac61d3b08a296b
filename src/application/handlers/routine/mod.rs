//! Routine handlers - composing the morning and evening routines.

mod composer;

pub use composer::{
    AddToRoutineCommand, MoveInRoutineCommand, RemoveFromRoutineCommand, RoutineComposer,
    RoutinesView,
};
