//! Skin profile handlers.
//!
//! Prediction from quiz answers, lookup of the stored profile and reset.

mod get_current_profile;
mod predict_skin_type;
mod reset_profile;

pub use get_current_profile::{CurrentProfile, GetCurrentProfileHandler};
pub use predict_skin_type::{PredictSkinTypeCommand, PredictSkinTypeHandler};
pub use reset_profile::ResetProfileHandler;
