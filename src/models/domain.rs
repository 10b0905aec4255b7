use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Roast levels, ordered from lightest to darkest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoastLevel {
    Light,
    Medium,
    #[serde(rename = "Medium-Dark")]
    MediumDark,
    Dark,
}

impl std::fmt::Display for RoastLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RoastLevel::Light => "Light",
            RoastLevel::Medium => "Medium",
            RoastLevel::MediumDark => "Medium-Dark",
            RoastLevel::Dark => "Dark",
        };
        write!(f, "{}", label)
    }
}

/// A coffee bean in the shop catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoffeeBean {
    pub id: u32,
    pub name: String,
    pub origin: String,
    #[serde(rename = "roastLevel")]
    pub roast_level: RoastLevel,
    pub flavor: Vec<String>,
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
}

/// One axis of taste preference with its own scoring rule.
///
/// This is the single shared contract between the survey layer and the
/// scoring engine: a survey question carries a `Dimension`, so a question
/// can never name a preference key that no rule recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    #[serde(rename = "likesDarkRoast")]
    DarkRoast,
    #[serde(rename = "likesAcidity")]
    Acidity,
    #[serde(rename = "likesFullBody")]
    FullBody,
    #[serde(rename = "likesChocolateNut")]
    ChocolateNut,
    #[serde(rename = "likesFruityFloral")]
    FruityFloral,
}

impl Dimension {
    /// All dimensions, in the order the engine evaluates them
    pub const ALL: [Dimension; 5] = [
        Dimension::DarkRoast,
        Dimension::Acidity,
        Dimension::FullBody,
        Dimension::ChocolateNut,
        Dimension::FruityFloral,
    ];

    /// The survey answer key for this dimension
    pub fn preference_key(&self) -> &'static str {
        match self {
            Dimension::DarkRoast => "likesDarkRoast",
            Dimension::Acidity => "likesAcidity",
            Dimension::FullBody => "likesFullBody",
            Dimension::ChocolateNut => "likesChocolateNut",
            Dimension::FruityFloral => "likesFruityFloral",
        }
    }

    pub fn from_preference_key(key: &str) -> Option<Dimension> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.preference_key() == key)
    }
}

/// Errors building a preference vector from survey answers
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("missing answer for preference key: {0}")]
    MissingDimension(&'static str),

    #[error("unrecognized preference key: {0}")]
    UnknownKey(String),
}

/// A complete set of boolean taste preferences
///
/// Built from survey answers at the boundary; by the time a vector
/// exists, every dimension is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceVector {
    #[serde(rename = "likesAcidity")]
    pub likes_acidity: bool,
    #[serde(rename = "likesFullBody")]
    pub likes_full_body: bool,
    #[serde(rename = "likesChocolateNut")]
    pub likes_chocolate_nut: bool,
    #[serde(rename = "likesFruityFloral")]
    pub likes_fruity_floral: bool,
    #[serde(rename = "likesDarkRoast")]
    pub likes_dark_roast: bool,
}

impl PreferenceVector {
    /// Build a vector from a survey answer map
    ///
    /// Fails instead of defaulting: a missing dimension or an unrecognized
    /// key means the survey and the engine disagree about the question set,
    /// and a silently defaulted answer would produce a misleading score.
    /// Missing dimensions are reported in evaluation order, unknown keys in
    /// lexicographic order, so the error does not depend on map iteration
    /// order.
    pub fn from_answers(answers: &HashMap<String, bool>) -> Result<Self, PreferenceError> {
        if let Some(unknown) = answers
            .keys()
            .filter(|k| Dimension::from_preference_key(k).is_none())
            .min()
        {
            return Err(PreferenceError::UnknownKey(unknown.clone()));
        }

        let answer = |dimension: Dimension| {
            answers
                .get(dimension.preference_key())
                .copied()
                .ok_or(PreferenceError::MissingDimension(dimension.preference_key()))
        };

        Ok(Self {
            likes_dark_roast: answer(Dimension::DarkRoast)?,
            likes_acidity: answer(Dimension::Acidity)?,
            likes_full_body: answer(Dimension::FullBody)?,
            likes_chocolate_nut: answer(Dimension::ChocolateNut)?,
            likes_fruity_floral: answer(Dimension::FruityFloral)?,
        })
    }

    /// The answer for a single dimension
    pub fn get(&self, dimension: Dimension) -> bool {
        match dimension {
            Dimension::Acidity => self.likes_acidity,
            Dimension::FullBody => self.likes_full_body,
            Dimension::ChocolateNut => self.likes_chocolate_nut,
            Dimension::FruityFloral => self.likes_fruity_floral,
            Dimension::DarkRoast => self.likes_dark_roast,
        }
    }
}

/// A survey question shown to the user, mapped to one scoring dimension
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    #[serde(rename = "preferenceKey")]
    pub dimension: Dimension,
    #[serde(rename = "questionText")]
    pub question_text: String,
    pub description: String,
    pub order: u32,
    #[serde(rename = "isActive")]
    pub is_active: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A scored catalog entry produced by one ranking call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub bean: CoffeeBean,
    pub score: u32,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<String>,
}
