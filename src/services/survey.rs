use crate::models::{Dimension, Question, QuestionForm};
use chrono::Utc;
use std::sync::RwLock;
use thiserror::Error;

/// Errors from the survey question store
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurveyError {
    #[error("question not found: {0}")]
    NotFound(u32),
}

/// In-memory store of survey questions
///
/// Questions are what the survey page renders; each one maps to exactly
/// one scoring dimension, so every authored question has a rule behind it.
pub struct QuestionStore {
    questions: RwLock<Vec<Question>>,
}

impl QuestionStore {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: RwLock::new(questions),
        }
    }

    pub fn with_reference_questions() -> Self {
        Self::new(reference_questions())
    }

    /// Snapshot of every question, active or not
    pub fn all(&self) -> Vec<Question> {
        self.questions.read().expect("survey lock poisoned").clone()
    }

    /// Active questions in display order
    pub fn active(&self) -> Vec<Question> {
        let mut active: Vec<Question> = self
            .questions
            .read()
            .expect("survey lock poisoned")
            .iter()
            .filter(|q| q.is_active)
            .cloned()
            .collect();

        active.sort_by_key(|q| q.order);
        active
    }

    pub fn get(&self, id: u32) -> Result<Question, SurveyError> {
        self.questions
            .read()
            .expect("survey lock poisoned")
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or(SurveyError::NotFound(id))
    }

    pub fn create(&self, form: QuestionForm) -> Question {
        let mut questions = self.questions.write().expect("survey lock poisoned");
        let id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        let now = Utc::now();

        let question = Question {
            id,
            dimension: form.dimension,
            question_text: form.question_text,
            description: form.description,
            order: form.order,
            is_active: form.is_active,
            created_at: Some(now),
            updated_at: Some(now),
        };

        questions.push(question.clone());
        question
    }

    pub fn update(&self, id: u32, form: QuestionForm) -> Result<Question, SurveyError> {
        let mut questions = self.questions.write().expect("survey lock poisoned");
        let question = questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(SurveyError::NotFound(id))?;

        question.dimension = form.dimension;
        question.question_text = form.question_text;
        question.description = form.description;
        question.order = form.order;
        question.is_active = form.is_active;
        question.updated_at = Some(Utc::now());

        Ok(question.clone())
    }

    pub fn delete(&self, id: u32) -> Result<(), SurveyError> {
        let mut questions = self.questions.write().expect("survey lock poisoned");
        let index = questions
            .iter()
            .position(|q| q.id == id)
            .ok_or(SurveyError::NotFound(id))?;

        questions.remove(index);
        Ok(())
    }
}

impl Default for QuestionStore {
    fn default() -> Self {
        Self::with_reference_questions()
    }
}

/// The five reference survey questions, one per scoring dimension
pub fn reference_questions() -> Vec<Question> {
    let seeded_at = Utc::now();

    let question = |id, dimension, text: &str, description: &str, order| Question {
        id,
        dimension,
        question_text: text.to_string(),
        description: description.to_string(),
        order,
        is_active: true,
        created_at: Some(seeded_at),
        updated_at: Some(seeded_at),
    };

    vec![
        question(
            1,
            Dimension::Acidity,
            "Do you prefer beans with noticeable acidity?",
            "Do you enjoy bright, tangy notes like citrus or fresh fruit?",
            1,
        ),
        question(
            2,
            Dimension::FullBody,
            "Do you want a rich, heavy body?",
            "Do you prefer a coffee with a weighty, full texture?",
            2,
        ),
        question(
            3,
            Dimension::ChocolateNut,
            "Do you like chocolate or nutty aromas?",
            "Do you prefer sweet, toasty notes of chocolate, caramel and nuts?",
            3,
        ),
        question(
            4,
            Dimension::FruityFloral,
            "Do you prefer fruity or floral aromas?",
            "Do you enjoy vivid notes like flowers, berries or wine?",
            4,
        ),
        question(
            5,
            Dimension::DarkRoast,
            "Do you prefer a dark roast?",
            "Do you want the strong, intense taste of darkly roasted coffee?",
            5,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(dimension: Dimension, order: u32, is_active: bool) -> QuestionForm {
        QuestionForm {
            dimension,
            question_text: "Do you like test questions?".to_string(),
            description: "A question used only in the store tests.".to_string(),
            order,
            is_active,
        }
    }

    #[test]
    fn test_seeded_with_one_question_per_dimension() {
        let store = QuestionStore::with_reference_questions();
        let questions = store.all();

        assert_eq!(questions.len(), 5);
        for dimension in Dimension::ALL {
            assert!(
                questions.iter().any(|q| q.dimension == dimension),
                "no question for {:?}",
                dimension
            );
        }
    }

    #[test]
    fn test_active_sorted_by_display_order() {
        let store = QuestionStore::with_reference_questions();
        store.create(form(Dimension::DarkRoast, 0, true));
        store.create(form(Dimension::Acidity, 99, false));

        let active = store.active();
        assert_eq!(active.len(), 6);
        assert!(active.windows(2).all(|w| w[0].order <= w[1].order));
        assert_eq!(active[0].order, 0);
    }

    #[test]
    fn test_create_assigns_next_id_and_timestamps() {
        let store = QuestionStore::with_reference_questions();
        let question = store.create(form(Dimension::FullBody, 6, true));

        assert_eq!(question.id, 6);
        assert!(question.created_at.is_some());
        assert_eq!(question.created_at, question.updated_at);
    }

    #[test]
    fn test_update_preserves_created_at() {
        let store = QuestionStore::with_reference_questions();
        let before = store.get(1).unwrap();

        let updated = store.update(1, form(Dimension::Acidity, 1, false)).unwrap();
        assert_eq!(updated.created_at, before.created_at);
        assert!(!updated.is_active);
    }

    #[test]
    fn test_missing_question() {
        let store = QuestionStore::with_reference_questions();
        assert_eq!(store.get(42).unwrap_err(), SurveyError::NotFound(42));
        assert_eq!(store.delete(42).unwrap_err(), SurveyError::NotFound(42));
    }
}
