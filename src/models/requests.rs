use crate::models::{Dimension, RoastLevel};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// Request for bean recommendations from survey answers
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(min = 1))]
    pub answers: HashMap<String, bool>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Form payload for creating or updating a catalog bean
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BeanForm {
    #[validate(length(min = 2))]
    pub name: String,
    #[validate(length(min = 1))]
    pub origin: String,
    #[serde(rename = "roastLevel")]
    pub roast_level: RoastLevel,
    #[validate(length(min = 1))]
    pub flavor: Vec<String>,
    #[validate(length(min = 10, max = 500))]
    pub description: String,
    #[validate(range(min = 0.01))]
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
}

/// Form payload for creating or updating a survey question
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuestionForm {
    #[serde(rename = "preferenceKey")]
    pub dimension: Dimension,
    #[validate(length(min = 5))]
    #[serde(rename = "questionText")]
    pub question_text: String,
    #[validate(length(min = 5))]
    pub description: String,
    #[validate(range(min = 1))]
    pub order: u32,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}
