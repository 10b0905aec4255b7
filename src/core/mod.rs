// Core engine exports
pub mod criteria;
pub mod percentage;
pub mod ranker;

pub use criteria::{evaluate, MAX_POSSIBLE_SCORE};
pub use percentage::match_percentage;
pub use ranker::{rank, RecommendError};
