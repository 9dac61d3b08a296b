//! Skin type classification and its reference data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Fixed set of skin-condition categories that drive recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkinType {
    Dry,
    Oily,
    Normal,
    Sensitive,
    Combination,
}

impl SkinType {
    pub const ALL: [SkinType; 5] = [
        SkinType::Dry,
        SkinType::Oily,
        SkinType::Normal,
        SkinType::Sensitive,
        SkinType::Combination,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinType::Dry => "Dry",
            SkinType::Oily => "Oily",
            SkinType::Normal => "Normal",
            SkinType::Sensitive => "Sensitive",
            SkinType::Combination => "Combination",
        }
    }

    /// Ingredients generally suited to this skin type, most important first.
    ///
    /// Names are already normalized (lowercase, single spaced).
    pub fn ingredient_affinities(&self) -> &'static [&'static str] {
        match self {
            SkinType::Dry => &[
                "hyaluronic acid",
                "ceramides",
                "glycerin",
                "squalane",
                "shea butter",
            ],
            SkinType::Oily => &[
                "salicylic acid",
                "niacinamide",
                "zinc pca",
                "kaolin",
                "retinol",
            ],
            SkinType::Normal => &[
                "hyaluronic acid",
                "niacinamide",
                "vitamin c",
                "peptides",
                "ceramides",
            ],
            SkinType::Sensitive => &[
                "ceramides",
                "centella asiatica",
                "allantoin",
                "panthenol",
                "colloidal oatmeal",
            ],
            SkinType::Combination => &[
                "niacinamide",
                "hyaluronic acid",
                "salicylic acid",
                "lactic acid",
                "ceramides",
            ],
        }
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkinType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkinType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_format("skin_type", format!("unknown skin type '{}'", s))
            })
    }
}

/// Entry of the skin-type reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinTypeInfo {
    #[serde(rename = "type")]
    pub skin_type: SkinType,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skin_type_parses_case_insensitively() {
        assert_eq!("oily".parse::<SkinType>().unwrap(), SkinType::Oily);
        assert_eq!(" Combination ".parse::<SkinType>().unwrap(), SkinType::Combination);
        assert!("greasy".parse::<SkinType>().is_err());
    }

    #[test]
    fn skin_type_serializes_as_capitalized_name() {
        assert_eq!(serde_json::to_string(&SkinType::Sensitive).unwrap(), "\"Sensitive\"");
    }

    #[test]
    fn every_skin_type_has_affinities() {
        for t in SkinType::ALL {
            assert!(!t.ingredient_affinities().is_empty(), "{} has no affinities", t);
        }
    }

    #[test]
    fn info_uses_type_key() {
        let info: SkinTypeInfo =
            serde_json::from_str(r#"{"type": "Dry", "description": "Feels tight"}"#).unwrap();
        assert_eq!(info.skin_type, SkinType::Dry);
    }
}
