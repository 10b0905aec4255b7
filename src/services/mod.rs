// Service exports
pub mod catalog;
pub mod survey;

pub use catalog::{reference_beans, CatalogError, CatalogStore};
pub use survey::{reference_questions, QuestionStore, SurveyError};
