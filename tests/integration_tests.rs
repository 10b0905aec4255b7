// Integration tests for Brew Algo
//
// Exercise the full survey flow the way the HTTP layer drives it:
// active questions -> answer map -> preference vector -> ranked beans.

use brew_algo::core::{match_percentage, rank};
use brew_algo::models::{BeanForm, Dimension, PreferenceError, PreferenceVector, RoastLevel};
use brew_algo::services::{CatalogStore, QuestionStore};
use std::collections::HashMap;

/// Answer every active question, saying yes only to the given dimensions
fn answer_survey(store: &QuestionStore, yes: &[Dimension]) -> HashMap<String, bool> {
    store
        .active()
        .into_iter()
        .map(|q| {
            let key = q.dimension.preference_key().to_string();
            (key, yes.contains(&q.dimension))
        })
        .collect()
}

#[test]
fn test_survey_to_recommendations_end_to_end() {
    let catalog = CatalogStore::with_reference_beans();
    let questions = QuestionStore::with_reference_questions();

    let answers = answer_survey(&questions, &[Dimension::Acidity, Dimension::FruityFloral]);
    let prefs = PreferenceVector::from_answers(&answers).unwrap();

    let beans = catalog.all();
    let result = rank(&beans, &prefs, 3).unwrap();

    assert_eq!(result.len(), 3);
    assert_eq!(result[0].bean.name, "Ethiopia Yirgacheffe");

    // Display percentages stay in bounds and track the raw score ordering
    let percentages: Vec<u8> = result.iter().map(|r| match_percentage(r.score)).collect();
    assert!(percentages.iter().all(|p| *p <= 100));
    assert!(percentages.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_dark_roast_survey_picks_sumatra() {
    let catalog = CatalogStore::with_reference_beans();
    let questions = QuestionStore::with_reference_questions();

    let answers = answer_survey(&questions, &[Dimension::DarkRoast]);
    let prefs = PreferenceVector::from_answers(&answers).unwrap();

    let result = rank(&catalog.all(), &prefs, 1).unwrap();
    assert_eq!(result[0].bean.name, "Sumatra Mandheling");
}

#[test]
fn test_deactivated_question_makes_answers_incomplete() {
    // Deactivating a question removes its answer from the survey; the
    // engine boundary must reject the incomplete vector rather than
    // default it.
    let questions = QuestionStore::with_reference_questions();
    let body_question = questions
        .all()
        .into_iter()
        .find(|q| q.dimension == Dimension::FullBody)
        .unwrap();

    questions.delete(body_question.id).unwrap();

    let answers = answer_survey(&questions, &[Dimension::Acidity]);
    let err = PreferenceVector::from_answers(&answers).unwrap_err();
    assert_eq!(err, PreferenceError::MissingDimension("likesFullBody"));
}

#[test]
fn test_newly_created_bean_is_ranked() {
    let catalog = CatalogStore::with_reference_beans();
    let questions = QuestionStore::with_reference_questions();

    // A light, floral Colombian Geisha matches a bright, fruity drinker on
    // the same rules as the Ethiopian: light roast, bright acidity, light
    // body and floral tags.
    let created = catalog.create(BeanForm {
        name: "Colombia Geisha".to_string(),
        origin: "Colombia, Nari\u{f1}o".to_string(),
        roast_level: RoastLevel::Light,
        flavor: vec!["floral".to_string(), "jasmine".to_string()],
        description: "A delicate Geisha lot with perfumed floral sweetness.".to_string(),
        price: 24.00,
        image: None,
    });

    let answers = answer_survey(&questions, &[Dimension::Acidity, Dimension::FruityFloral]);
    let prefs = PreferenceVector::from_answers(&answers).unwrap();

    let result = rank(&catalog.all(), &prefs, 3).unwrap();

    // Same 90 points as the Ethiopian, but the Ethiopian sits earlier in
    // the catalog, so the stable sort keeps it first.
    assert_eq!(result[0].bean.name, "Ethiopia Yirgacheffe");
    assert_eq!(result[1].bean.id, created.id);
    assert_eq!(result[0].score, result[1].score);
}

#[test]
fn test_catalog_crud_round_trip() {
    let catalog = CatalogStore::with_reference_beans();

    let created = catalog.create(BeanForm {
        name: "Peru Organic".to_string(),
        origin: "Peru, Cajamarca".to_string(),
        roast_level: RoastLevel::Medium,
        flavor: vec!["caramel".to_string(), "honey".to_string()],
        description: "A gentle organic lot with soft caramel sweetness.".to_string(),
        price: 15.00,
        image: None,
    });
    assert_eq!(catalog.len(), 7);

    let renamed = BeanForm {
        name: "Peru Organic Reserve".to_string(),
        origin: "Peru, Cajamarca".to_string(),
        roast_level: RoastLevel::Medium,
        flavor: vec!["caramel".to_string()],
        description: "A gentle organic lot with soft caramel sweetness.".to_string(),
        price: 16.50,
        image: None,
    };

    let updated = catalog.update(created.id, renamed).unwrap();
    assert_eq!(updated.name, "Peru Organic Reserve");
    assert_eq!(updated.price, 16.50);

    catalog.delete(created.id).unwrap();
    assert_eq!(catalog.len(), 6);
    assert!(catalog.get(created.id).is_err());
}

#[test]
fn test_active_questions_cover_every_dimension() {
    // The reference survey must leave no scoring dimension unanswered,
    // otherwise no complete preference vector can ever be built from it.
    let questions = QuestionStore::with_reference_questions();
    let active = questions.active();

    for dimension in Dimension::ALL {
        assert!(
            active.iter().any(|q| q.dimension == dimension),
            "no active question for {:?}",
            dimension
        );
    }

    let answers = answer_survey(&questions, &[]);
    assert!(PreferenceVector::from_answers(&answers).is_ok());
}
