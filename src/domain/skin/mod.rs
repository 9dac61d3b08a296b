//! Skin module - skin types, profiles and the inference engine.

mod inference;
mod profile;
mod skin_type;

pub use inference::{
    SkinProfileInference, BASELINE_CONFIDENCE, CORROBORATION_WEIGHT, DEFAULT_PRIMARY_QUESTION,
};
pub use profile::SkinProfile;
pub use skin_type::{SkinType, SkinTypeInfo};
