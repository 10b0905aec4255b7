// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CoffeeBean, Dimension, PreferenceError, PreferenceVector, Question, Recommendation, RoastLevel,
};
pub use requests::{BeanForm, QuestionForm, RecommendRequest};
pub use responses::{ErrorResponse, HealthResponse, RecommendResponse, ScoredBean};
